//! v002: pattern_entries, one row per product.

use rusqlite::Connection;

use larder_core::errors::LarderResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> LarderResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS pattern_entries (
            product_key              TEXT PRIMARY KEY,
            product_label            TEXT NOT NULL,
            average_consumption_rate REAL NOT NULL,
            purchase_frequency_days  REAL NOT NULL,
            last_purchase_date       TEXT,
            last_consumed_date       TEXT,
            total_purchased          REAL NOT NULL DEFAULT 0,
            total_consumed           REAL NOT NULL DEFAULT 0,
            purchase_count           INTEGER NOT NULL DEFAULT 0,
            consumption_count        INTEGER NOT NULL DEFAULT 0,
            seasonality_factor       REAL NOT NULL DEFAULT 1.0,
            confidence               REAL NOT NULL DEFAULT 0,
            prediction_accuracy      REAL NOT NULL,
            updated_at               TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_pattern_consumed ON pattern_entries(total_consumed);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

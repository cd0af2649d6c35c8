//! v001: purchase_events, consumption_events.

use rusqlite::Connection;

use larder_core::errors::LarderResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> LarderResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS purchase_events (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            product_key   TEXT NOT NULL,
            product_label TEXT NOT NULL,
            quantity      REAL NOT NULL CHECK (quantity > 0),
            date          TEXT NOT NULL,
            expiry_date   TEXT,
            recorded_at   TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_purchase_key ON purchase_events(product_key);
        CREATE INDEX IF NOT EXISTS idx_purchase_date ON purchase_events(date);

        CREATE TABLE IF NOT EXISTS consumption_events (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            product_key        TEXT NOT NULL,
            product_label      TEXT NOT NULL,
            quantity_consumed  REAL NOT NULL CHECK (quantity_consumed > 0),
            date               TEXT NOT NULL,
            remaining_quantity REAL NOT NULL CHECK (remaining_quantity >= 0),
            recorded_at        TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_consumption_key ON consumption_events(product_key);
        CREATE INDEX IF NOT EXISTS idx_consumption_date ON consumption_events(date);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

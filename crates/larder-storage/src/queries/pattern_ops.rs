//! Upsert, delete, and load pattern entries.

use rusqlite::{params, Connection};

use larder_core::errors::LarderResult;
use larder_core::models::{PatternEntry, ProductKey};

use super::event_ops::in_transaction;
use super::{decode_date, decode_key, decode_optional_date, format_date};
use crate::to_storage_err;

const TABLE: &str = "pattern_entries";

/// Insert or replace the row for the entry's product.
pub fn upsert_pattern(conn: &Connection, entry: &PatternEntry) -> LarderResult<()> {
    in_transaction(conn, "upsert_pattern", |tx| {
        tx.execute(
            "INSERT OR REPLACE INTO pattern_entries (
                product_key, product_label, average_consumption_rate, purchase_frequency_days,
                last_purchase_date, last_consumed_date, total_purchased, total_consumed,
                purchase_count, consumption_count, seasonality_factor, confidence,
                prediction_accuracy, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            params![
                entry.product_key.as_str(),
                entry.product_key.label(),
                entry.average_consumption_rate,
                entry.purchase_frequency_days,
                entry.last_purchase_date.map(format_date),
                entry.last_consumed_date.map(format_date),
                entry.total_purchased,
                entry.total_consumed,
                entry.purchase_count as i64,
                entry.consumption_count as i64,
                entry.seasonality_factor,
                entry.confidence,
                entry.prediction_accuracy,
                format_date(entry.updated_at),
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        Ok(())
    })
}

pub fn delete_pattern(conn: &Connection, key: &ProductKey) -> LarderResult<()> {
    conn.execute(
        "DELETE FROM pattern_entries WHERE product_key = ?1",
        params![key.as_str()],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Every stored entry, ordered by canonical key.
pub fn load_patterns(conn: &Connection) -> LarderResult<Vec<PatternEntry>> {
    let mut stmt = conn
        .prepare(
            "SELECT product_label, average_consumption_rate, purchase_frequency_days,
                    last_purchase_date, last_consumed_date, total_purchased, total_consumed,
                    purchase_count, consumption_count, seasonality_factor, confidence,
                    prediction_accuracy, updated_at
             FROM pattern_entries ORDER BY product_key",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(RawPattern {
                label: row.get(0)?,
                rate: row.get(1)?,
                frequency: row.get(2)?,
                last_purchase: row.get(3)?,
                last_consumed: row.get(4)?,
                total_purchased: row.get(5)?,
                total_consumed: row.get(6)?,
                purchase_count: row.get(7)?,
                consumption_count: row.get(8)?,
                seasonality: row.get(9)?,
                confidence: row.get(10)?,
                accuracy: row.get(11)?,
                updated_at: row.get(12)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut entries = Vec::new();
    for row in rows {
        let raw = row.map_err(|e| to_storage_err(e.to_string()))?;
        entries.push(raw.decode()?);
    }
    Ok(entries)
}

struct RawPattern {
    label: String,
    rate: f64,
    frequency: f64,
    last_purchase: Option<String>,
    last_consumed: Option<String>,
    total_purchased: f64,
    total_consumed: f64,
    purchase_count: i64,
    consumption_count: i64,
    seasonality: f64,
    confidence: f64,
    accuracy: f64,
    updated_at: String,
}

impl RawPattern {
    fn decode(self) -> LarderResult<PatternEntry> {
        Ok(PatternEntry {
            product_key: decode_key(TABLE, &self.label)?,
            average_consumption_rate: self.rate,
            purchase_frequency_days: self.frequency,
            last_purchase_date: decode_optional_date(TABLE, self.last_purchase)?,
            last_consumed_date: decode_optional_date(TABLE, self.last_consumed)?,
            total_purchased: self.total_purchased,
            total_consumed: self.total_consumed,
            purchase_count: self.purchase_count.max(0) as usize,
            consumption_count: self.consumption_count.max(0) as usize,
            seasonality_factor: self.seasonality,
            confidence: self.confidence,
            prediction_accuracy: self.accuracy,
            updated_at: decode_date(TABLE, &self.updated_at)?,
        })
    }
}

//! Append and query purchase and consumption events.

use std::collections::BTreeMap;

use rusqlite::{params, Connection};

use larder_core::errors::LarderResult;
use larder_core::models::{ConsumptionEvent, ProductEvents, ProductKey, PurchaseEvent};

use super::{decode_date, decode_key, decode_optional_date, format_date};
use crate::to_storage_err;

const PURCHASES: &str = "purchase_events";
const CONSUMPTIONS: &str = "consumption_events";

/// Insert one purchase in its own transaction.
pub fn insert_purchase(conn: &Connection, event: &PurchaseEvent) -> LarderResult<()> {
    in_transaction(conn, "insert_purchase", |tx| {
        tx.execute(
            "INSERT INTO purchase_events (product_key, product_label, quantity, date, expiry_date)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                event.product_key.as_str(),
                event.product_key.label(),
                event.quantity,
                format_date(event.date),
                event.expiry_date.map(format_date),
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        Ok(())
    })
}

/// Insert one consumption in its own transaction.
pub fn insert_consumption(conn: &Connection, event: &ConsumptionEvent) -> LarderResult<()> {
    in_transaction(conn, "insert_consumption", |tx| {
        tx.execute(
            "INSERT INTO consumption_events
                (product_key, product_label, quantity_consumed, date, remaining_quantity)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                event.product_key.as_str(),
                event.product_key.label(),
                event.quantity_consumed,
                format_date(event.date),
                event.remaining_quantity,
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        Ok(())
    })
}

/// All events for one product in insertion order.
pub fn events_for(conn: &Connection, key: &ProductKey) -> LarderResult<ProductEvents> {
    Ok(ProductEvents {
        purchases: select_purchases(conn, Some(key))?,
        consumptions: select_consumptions(conn, Some(key))?,
    })
}

/// Every stored event grouped by product, insertion order within each product.
pub fn all_events(conn: &Connection) -> LarderResult<BTreeMap<ProductKey, ProductEvents>> {
    let mut grouped: BTreeMap<ProductKey, ProductEvents> = BTreeMap::new();
    for event in select_purchases(conn, None)? {
        grouped
            .entry(event.product_key.clone())
            .or_default()
            .purchases
            .push(event);
    }
    for event in select_consumptions(conn, None)? {
        grouped
            .entry(event.product_key.clone())
            .or_default()
            .consumptions
            .push(event);
    }
    Ok(grouped)
}

fn select_purchases(
    conn: &Connection,
    key: Option<&ProductKey>,
) -> LarderResult<Vec<PurchaseEvent>> {
    let sql = match key {
        Some(_) => {
            "SELECT product_label, quantity, date, expiry_date FROM purchase_events
             WHERE product_key = ?1 ORDER BY id"
        }
        None => {
            "SELECT product_label, quantity, date, expiry_date FROM purchase_events
             ORDER BY id"
        }
    };
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    type RawPurchase = (String, f64, String, Option<String>);
    let map_row = |row: &rusqlite::Row<'_>| -> rusqlite::Result<RawPurchase> {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
    };
    let raw: Vec<_> = match key {
        Some(k) => stmt.query_map(params![k.as_str()], map_row),
        None => stmt.query_map([], map_row),
    }
    .map_err(|e| to_storage_err(e.to_string()))?
    .collect::<Result<_, _>>()
    .map_err(|e| to_storage_err(e.to_string()))?;

    raw.into_iter()
        .map(|(label, quantity, date, expiry)| {
            Ok(PurchaseEvent::new(
                decode_key(PURCHASES, &label)?,
                quantity,
                decode_date(PURCHASES, &date)?,
                decode_optional_date(PURCHASES, expiry)?,
            ))
        })
        .collect()
}

fn select_consumptions(
    conn: &Connection,
    key: Option<&ProductKey>,
) -> LarderResult<Vec<ConsumptionEvent>> {
    let sql = match key {
        Some(_) => {
            "SELECT product_label, quantity_consumed, date, remaining_quantity
             FROM consumption_events WHERE product_key = ?1 ORDER BY id"
        }
        None => {
            "SELECT product_label, quantity_consumed, date, remaining_quantity
             FROM consumption_events ORDER BY id"
        }
    };
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let map_row = |row: &rusqlite::Row<'_>| -> rusqlite::Result<(String, f64, String, f64)> {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
    };
    let raw: Vec<_> = match key {
        Some(k) => stmt.query_map(params![k.as_str()], map_row),
        None => stmt.query_map([], map_row),
    }
    .map_err(|e| to_storage_err(e.to_string()))?
    .collect::<Result<_, _>>()
    .map_err(|e| to_storage_err(e.to_string()))?;

    raw.into_iter()
        .map(|(label, consumed, date, remaining)| {
            Ok(ConsumptionEvent::new(
                decode_key(CONSUMPTIONS, &label)?,
                consumed,
                decode_date(CONSUMPTIONS, &date)?,
                remaining,
            ))
        })
        .collect()
}

/// Run `f` inside a transaction, rolling back on error.
pub(crate) fn in_transaction<F, T>(conn: &Connection, op: &str, f: F) -> LarderResult<T>
where
    F: FnOnce(&Connection) -> LarderResult<T>,
{
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("{op} begin: {e}")))?;

    match f(&tx) {
        Ok(value) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("{op} commit: {e}")))?;
            Ok(value)
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

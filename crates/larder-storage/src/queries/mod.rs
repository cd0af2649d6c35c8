pub mod event_ops;
pub mod maintenance;
pub mod pattern_ops;

use chrono::NaiveDate;

use larder_core::errors::LarderResult;
use larder_core::models::ProductKey;

use crate::corrupt;

/// Storage format for every date column.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(crate) fn decode_date(table: &str, raw: &str) -> LarderResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|e| corrupt(table, format!("bad date '{raw}': {e}")))
}

pub(crate) fn decode_optional_date(
    table: &str,
    raw: Option<String>,
) -> LarderResult<Option<NaiveDate>> {
    raw.map(|r| decode_date(table, &r)).transpose()
}

pub(crate) fn decode_key(table: &str, label: &str) -> LarderResult<ProductKey> {
    ProductKey::new(label).map_err(|e| corrupt(table, e.to_string()))
}

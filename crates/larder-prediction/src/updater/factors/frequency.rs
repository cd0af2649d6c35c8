use larder_core::models::PurchaseEvent;

/// Mean interval between consecutive purchases, in days.
///
/// `None` below two purchases, or when every purchase falls on one day.
pub fn mean_interval_days(purchases: &[PurchaseEvent]) -> Option<f64> {
    if purchases.len() < 2 {
        return None;
    }
    let intervals: Vec<i64> = purchases
        .windows(2)
        .map(|pair| (pair[1].date - pair[0].date).num_days())
        .collect();
    let total: i64 = intervals.iter().sum();
    if total <= 0 {
        return None;
    }
    Some(total as f64 / intervals.len() as f64)
}

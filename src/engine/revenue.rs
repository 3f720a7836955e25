use crate::models::Transaction;

/// Sum of `total_price` over `rows`. Rows without a discount carry no price and are skipped.
pub fn total_revenue<'a>(rows: impl IntoIterator<Item = &'a Transaction>) -> f64 {
    //NOTE: fold from +0.0 so an empty selection reports 0 rather than -0
    rows.into_iter()
        .filter_map(Transaction::total_price)
        .fold(0.0, |total, price| total + price)
}

use crate::models::{RecentTransaction, Transaction};

pub const DEFAULT_RECENT_LIMIT: usize = 100;

/// The `limit` most recent transactions, newest first.
///
/// Rows sharing a date keep their input order.
pub fn recent_transactions<'a>(rows: impl IntoIterator<Item = &'a Transaction>, limit: usize) -> Vec<RecentTransaction> {
    let mut rows: Vec<&Transaction> = rows.into_iter().collect();

    rows.sort_by(|left, right| right.transaction_date.cmp(&left.transaction_date));

    rows.into_iter()
        .take(limit)
        .map(RecentTransaction::from)
        .collect()
}

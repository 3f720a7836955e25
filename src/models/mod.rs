mod projection;
mod transaction;

pub use projection::RecentTransaction;
pub use transaction::Transaction;

/// A categorical column of the transaction table that can be used for grouping.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Dimension {
    Gender,
    Location,
    ProductCategory
}

impl Dimension {
    /// The value of this column for the given row. `None` when the cell is empty.
    pub fn value(self, transaction: &Transaction) -> Option<&str> {
        let value = match self {
            Dimension::Gender => Some(transaction.gender.as_str()),
            Dimension::Location => transaction.location.as_deref(),
            Dimension::ProductCategory => Some(transaction.product_category.as_str())
        };

        value.filter(|value| !value.is_empty())
    }
}

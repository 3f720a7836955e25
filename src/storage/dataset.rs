use std::collections::HashSet;
use std::io::Read;

use csv::{Position, ReaderBuilder, Trim};
use tracing::warn;

use crate::models::Transaction;
use crate::storage::{FilterView, LoadError, LocationFilter};

const REQUIRED_COLUMNS: [&str; 9] = [
    "CustomerID",
    "Gender",
    "Location",
    "Product_Category",
    "Quantity",
    "Avg_Price",
    "Transaction_Date",
    "Month",
    "Discount_pct"
];

/// The full table of sales transactions, read-only once loaded.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    transactions: Vec<Transaction>
}

impl Dataset {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Parses a CSV stream into a dataset.
    ///
    /// # Errors
    /// Fails on the first problem found: an unreadable header, a missing required column,
    /// or a row that cannot be deserialized (bad date, month outside 1-12, non-numeric value).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(reader);

        let headers = reader.headers().map_err(LoadError::Header)?.clone();

        if let Some(column) = REQUIRED_COLUMNS.iter().find(|column| !headers.iter().any(|header| header == **column)) {
            return Err(LoadError::MissingColumn { column: *column })
        }

        let mut transactions = Vec::new();

        //NOTE: Line numbers come from the record position, quoted fields may span several lines
        for result in reader.records() {
            let record = result.map_err(|source| LoadError::InvalidRow {
                line: source.position().map_or(0, Position::line),
                source
            })?;

            let line = record.position().map_or(0, Position::line);
            let transaction: Transaction = record.deserialize(Some(&headers))
                .map_err(|source| LoadError::InvalidRow { line, source })?;

            if transaction.quantity < 0 || transaction.avg_price < 0.0 {
                warn!("Row at line [{line}] has a negative quantity or price");
            }

            transactions.push(transaction);
        }

        Ok(Self::new(transactions))
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Distinct non-empty locations, in the order they first appear.
    pub fn locations(&self) -> Vec<&str> {
        let mut seen = HashSet::new();

        self.transactions().iter()
            .filter_map(|transaction| transaction.location.as_deref())
            .filter(|location| seen.insert(*location))
            .collect()
    }

    /// Selects the rows matching `filter` without copying them.
    pub fn filter<'a>(&'a self, filter: &LocationFilter) -> FilterView<'a> {
        FilterView::new(
            self.transactions.iter()
                .filter(|transaction| filter.matches(transaction))
                .collect()
        )
    }
}

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::Transaction;

/// The columns of a transaction shown in the recent sales table.
///
/// Excludes the customer identifier and the derived total price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentTransaction {
    #[serde(rename = "Transaction_Date")]
    pub transaction_date: NaiveDateTime,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Location")]
    pub location: Option<String>,
    #[serde(rename = "Product_Category")]
    pub product_category: String,
    #[serde(rename = "Quantity")]
    pub quantity: i64,
    #[serde(rename = "Avg_Price")]
    pub avg_price: f64,
    #[serde(rename = "Discount_pct")]
    pub discount_pct: Option<f64>
}

impl From<&Transaction> for RecentTransaction {
    fn from(transaction: &Transaction) -> Self {
        Self {
            transaction_date: transaction.transaction_date,
            gender: transaction.gender.clone(),
            location: transaction.location.clone(),
            product_category: transaction.product_category.clone(),
            quantity: transaction.quantity,
            avg_price: transaction.avg_price,
            discount_pct: transaction.discount_pct
        }
    }
}

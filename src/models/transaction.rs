use chrono::{NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer};

use crate::types::{CustomerId, Month};

const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M"];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Represents a single row of the sales CSV file.
///
/// Columns not listed here (the leading index column, coupon data, delivery charges...)
/// are ignored during deserialization. `location` and `discount_pct` are optional because
/// the source data leaves those cells empty for some rows.
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    /// Customer identifier, 0 when the cell is empty.
    //NOTE: No figure is keyed by customer, but the column is part of the required schema
    #[allow(dead_code)]
    #[serde(rename = "CustomerID", deserialize_with = "deserialize_customer_id")]
    pub customer_id: CustomerId,
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
    #[serde(rename = "Transaction_Date", deserialize_with = "deserialize_date")]
    pub transaction_date: NaiveDateTime,
    #[serde(rename = "Month")]
    pub month: Month,
    /// Discount percentage in `0..=100`.
    #[serde(rename = "Discount_pct")]
    pub discount_pct: Option<f64>
}

impl Transaction {
    /// `quantity * avg_price * discount_factor`, where only the discount factor is rounded.
    ///
    /// Returns `None` when the row carries no discount percentage.
    pub fn total_price(&self) -> Option<f64> {
        self.discount_pct
            .map(|discount_pct| self.quantity as f64 * self.avg_price * discount_factor(discount_pct))
    }
}

/// `1 - discount_pct / 100`, rounded half-to-even to 3 decimal places.
pub fn discount_factor(discount_pct: f64) -> f64 {
    ((1.0 - discount_pct / 100.0) * 1000.0).round_ties_even() / 1000.0
}

pub(crate) fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    DATE_TIME_FORMATS.iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DATE_FORMATS.iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_date(&value).ok_or_else(|| de::Error::custom(format!("unrecognised date '{value}'")))
}

fn deserialize_customer_id<'de, D>(deserializer: D) -> Result<CustomerId, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<String>::deserialize(deserializer)? else {
        return Ok(0);
    };

    let value = value.trim();

    if value.is_empty() || value.eq_ignore_ascii_case("nan") {
        return Ok(0);
    }

    //NOTE: The column is exported as floating point whenever it has gaps (e.g. "17850.0")
    value.parse::<CustomerId>()
        .or_else(|_| value.parse::<f64>().map(|number| number.trunc() as CustomerId))
        .map_err(|_| de::Error::custom(format!("invalid customer id '{value}'")))
}

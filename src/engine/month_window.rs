use std::collections::BTreeMap;

use serde::Serialize;

use crate::engine::total_revenue;
use crate::models::Transaction;
use crate::types::{Month, MonthLabel};

/// What a month window measures.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum WindowMode {
    /// Number of transactions.
    Count,
    /// Sum of total prices.
    Revenue
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthEntry {
    pub month: Month,
    pub label: &'static str,
    pub value: f64
}

/// The current and previous month figures, ordered by month number.
///
/// Index 0 is read as the reference and index 1 as the current value. When the current
/// month is January the previous month is December, which sorts after it, so the two
/// positions are swapped relative to the calendar. A month with no rows is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MonthWindow {
    pub entries: Vec<MonthEntry>
}

impl MonthWindow {
    pub fn reference(&self) -> Option<&MonthEntry> {
        self.entries.first()
    }

    pub fn current(&self) -> Option<&MonthEntry> {
        self.entries.get(1)
    }
}

pub fn month_window<'a>(
    rows: impl IntoIterator<Item = &'a Transaction>,
    current_month: Month,
    mode: WindowMode,
    label: MonthLabel
) -> MonthWindow {
    let previous_month = current_month.previous();
    let mut months: BTreeMap<Month, Vec<&Transaction>> = BTreeMap::new();

    for transaction in rows {
        if transaction.month == current_month || transaction.month == previous_month {
            months.entry(transaction.month).or_default().push(transaction);
        }
    }

    let entries = months.into_iter()
        .map(|(month, transactions)| MonthEntry {
            month,
            label: month.label(label),
            value: match mode {
                WindowMode::Count => transactions.len() as f64,
                WindowMode::Revenue => total_revenue(transactions)
            }
        })
        .collect();

    MonthWindow { entries }
}

/// A number-with-delta widget built from a [`MonthWindow`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Indicator {
    pub title: Option<&'static str>,
    pub value: Option<f64>,
    pub reference: Option<f64>,
    pub delta: Option<f64>
}

impl From<&MonthWindow> for Indicator {
    fn from(window: &MonthWindow) -> Self {
        let value = window.current().map(|entry| entry.value);
        let reference = window.reference().map(|entry| entry.value);

        Self {
            title: window.current().map(|entry| entry.label),
            value,
            reference,
            delta: value.zip(reference).map(|(value, reference)| value - reference)
        }
    }
}

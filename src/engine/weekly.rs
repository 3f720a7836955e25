use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::models::Transaction;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyRevenue {
    /// Monday of the week.
    pub week_start: NaiveDate,
    /// Sunday of the week.
    pub week_end: NaiveDate,
    pub revenue: f64
}

/// Revenue per Monday-to-Sunday week, oldest first.
///
/// Weeks between the first and last populated week are emitted with zero revenue. The last
/// week is always dropped, whether or not it is complete.
pub fn weekly_revenue<'a>(rows: impl IntoIterator<Item = &'a Transaction>) -> Vec<WeeklyRevenue> {
    let mut weeks: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for transaction in rows {
        let revenue = weeks.entry(week_start(transaction.transaction_date.date())).or_insert(0.0);

        if let Some(price) = transaction.total_price() {
            *revenue += price;
        }
    }

    let (Some(&first), Some(&last)) = (weeks.keys().next(), weeks.keys().next_back()) else {
        return Vec::new();
    };

    let mut series = Vec::new();
    let mut start = first;

    while start < last {
        series.push(WeeklyRevenue {
            week_start: start,
            week_end: start + Duration::days(6),
            revenue: weeks.get(&start).copied().unwrap_or(0.0)
        });

        start += Duration::days(7);
    }

    series
}

pub(crate) fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

use serde::Serialize;
use tracing::debug;

use crate::config::DashboardConfig;
use crate::engine::{
    flatten, month_window, recent_transactions, top_categories, total_revenue, weekly_revenue,
    Indicator, MonthWindow, RankingEntry, WeeklyRevenue, WindowMode
};
use crate::models::{Dimension, RecentTransaction};
use crate::storage::{Dataset, LocationFilter};

/// Everything the dashboard displays for one location filter.
#[derive(Debug, Clone, Serialize)]
pub struct ViewModel {
    pub filter: LocationFilter,
    pub available_locations: Vec<String>,
    pub transaction_count: usize,
    pub total_revenue: f64,
    pub revenue_indicator: Indicator,
    pub sales_indicator: Indicator,
    pub revenue_by_month: MonthWindow,
    pub sales_by_month: MonthWindow,
    pub weekly_revenue: Vec<WeeklyRevenue>,
    pub top_categories: Vec<RankingEntry>,
    pub recent_transactions: Vec<RecentTransaction>
}

/// Recomputes every figure from scratch over the rows selected by `filter`.
pub fn build_view(dataset: &Dataset, filter: &LocationFilter, config: &DashboardConfig) -> ViewModel {
    let view = dataset.filter(filter);

    debug!("Building view over {} of {} transactions", view.len(), dataset.len());

    if view.is_empty() {
        debug!("Location filter {:?} matched no transactions", filter.locations().collect::<Vec<_>>());
    }

    let revenue_by_month = month_window(view.iter(), config.current_month, WindowMode::Revenue, config.month_label);
    let sales_by_month = month_window(view.iter(), config.current_month, WindowMode::Count, config.month_label);
    let ranking = top_categories(view.iter(), config.ranking_group, Dimension::ProductCategory, &config.ranking_options());

    ViewModel {
        filter: filter.clone(),
        available_locations: dataset.locations().into_iter().map(str::to_string).collect(),
        transaction_count: view.len(),
        total_revenue: total_revenue(view.iter()),
        revenue_indicator: Indicator::from(&revenue_by_month),
        sales_indicator: Indicator::from(&sales_by_month),
        revenue_by_month,
        sales_by_month,
        weekly_revenue: weekly_revenue(view.iter()),
        top_categories: flatten(&ranking),
        recent_transactions: recent_transactions(view.iter(), config.recent_limit)
    }
}

mod dashboard;
mod month_window;
mod ranking;
mod recent;
mod revenue;
mod view;
mod weekly;

pub use dashboard::Dashboard;
pub use month_window::{month_window, Indicator, MonthWindow, WindowMode};
pub use ranking::{flatten, top_categories, GroupOrder, RankingEntry, RankingOptions};
pub use recent::{recent_transactions, DEFAULT_RECENT_LIMIT};
pub use revenue::total_revenue;
pub use view::{build_view, ViewModel};
pub use weekly::{weekly_revenue, WeeklyRevenue};

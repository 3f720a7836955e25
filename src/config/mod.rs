mod errors;

use std::path::PathBuf;
use std::str::FromStr;

use tracing::level_filters::LevelFilter;

use crate::engine::{GroupOrder, RankingOptions, DEFAULT_RECENT_LIMIT};
use crate::models::Dimension;
use crate::storage::LocationFilter;
use crate::types::{Month, MonthLabel};

pub use errors::ConfigError;

pub const USAGE: &str = "\
Usage: sales-dashboard [input].csv [options] > [output].json
Options:
  --location=<name>   restrict every figure to a location (repeatable)
  --month=<1-12>      month shown by the indicators (default: 12)
  --top=<n>           categories kept per group in the ranking (default: 10)
  --group-by=<field>  ranking groups: gender, location or category (default: gender)
  --alphabetical      list ranking groups alphabetically instead of first seen
  --limit=<n>         rows in the recent transactions table (default: 100)
  --abbr              label months with their 3-letter abbreviation
  --log=<level>       error, warn, info, debug, trace (default: error)";

/// Settings that shape every view the dashboard computes.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Month reported by the revenue and sales indicators.
    pub current_month: Month,
    /// Column that partitions the category ranking.
    pub ranking_group: Dimension,
    pub group_order: GroupOrder,
    pub top_n: usize,
    /// The ranking chart shows the least frequent categories unless this is `false`.
    pub ranking_ascending: bool,
    pub recent_limit: usize,
    pub month_label: MonthLabel,
    /// Maximum number of memoized filter results.
    pub cache_capacity: u64
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            current_month: Month::DECEMBER,
            ranking_group: Dimension::Gender,
            group_order: GroupOrder::Encounter,
            top_n: 10,
            ranking_ascending: true,
            recent_limit: DEFAULT_RECENT_LIMIT,
            month_label: MonthLabel::Full,
            cache_capacity: 64
        }
    }
}

impl DashboardConfig {
    pub fn ranking_options(&self) -> RankingOptions {
        RankingOptions {
            top_n: self.top_n,
            ascending: self.ranking_ascending,
            group_order: self.group_order
        }
    }
}

/// Parsed command line.
#[derive(Debug, Clone)]
pub struct CliArgs {
    pub input: PathBuf,
    pub log_level: LevelFilter,
    pub filter: LocationFilter,
    pub config: DashboardConfig
}

impl CliArgs {
    /// Parses arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let input = args.next().map(PathBuf::from).ok_or(ConfigError::MissingInput)?;

        let mut log_level = LevelFilter::ERROR;
        let mut locations = Vec::new();
        let mut config = DashboardConfig::default();

        for arg in args {
            let (flag, value) = match arg.split_once('=') {
                Some((flag, value)) => (flag, Some(value)),
                None => (arg.as_str(), None)
            };

            match (flag, value) {
                ("--location", Some(value)) => locations.push(value.to_string()),
                ("--month", Some(value)) => config.current_month = Month::from_str(value)?,
                ("--top", Some(value)) => config.top_n = parse_number(flag, value)?,
                ("--limit", Some(value)) => config.recent_limit = parse_number(flag, value)?,
                ("--log", Some(value)) => {
                    log_level = parse_log_level(value).ok_or_else(|| ConfigError::invalid_value(flag, value))?;
                }
                ("--group-by", Some(value)) => {
                    config.ranking_group = parse_dimension(value).ok_or_else(|| ConfigError::invalid_value(flag, value))?;
                }
                ("--abbr", None) => config.month_label = MonthLabel::Abbreviated,
                ("--alphabetical", None) => config.group_order = GroupOrder::Alphabetical,
                _ => return Err(ConfigError::UnknownArgument(arg.clone()))
            }
        }

        Ok(Self {
            input,
            log_level,
            filter: LocationFilter::from_locations(locations),
            config
        })
    }
}

fn parse_number(flag: &str, value: &str) -> Result<usize, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::invalid_value(flag, value))
}

fn parse_dimension(value: &str) -> Option<Dimension> {
    match value.to_lowercase().as_str() {
        "gender" => Some(Dimension::Gender),
        "location" => Some(Dimension::Location),
        "category" | "product_category" => Some(Dimension::ProductCategory),
        _ => None
    }
}

pub fn parse_log_level(level: &str) -> Option<LevelFilter> {
    match level.to_lowercase().as_str() {
        "trace" => Some(LevelFilter::TRACE),
        "debug" => Some(LevelFilter::DEBUG),
        "info" => Some(LevelFilter::INFO),
        "warn" => Some(LevelFilter::WARN),
        "error" => Some(LevelFilter::ERROR),
        _ => None
    }
}

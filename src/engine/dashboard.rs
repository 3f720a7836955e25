use std::sync::Arc;

use moka::future::Cache;
use tracing::debug;

use crate::config::DashboardConfig;
use crate::engine::{build_view, ViewModel};
use crate::storage::{Dataset, LocationFilter};

/// Serves view models over a loaded dataset, memoized per location filter.
///
/// The dataset is never mutated, so a cached view stays valid for the life of the dashboard.
pub struct Dashboard {
    dataset: Arc<Dataset>,
    config: DashboardConfig,
    views: Cache<LocationFilter, Arc<ViewModel>>
}

impl Dashboard {
    pub fn new(dataset: Arc<Dataset>, config: DashboardConfig) -> Self {
        let views = Cache::builder()
            .max_capacity(config.cache_capacity)
            .build();

        Self {
            dataset,
            config,
            views
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Returns the view for `filter`, computing it on first request only.
    pub async fn view(&self, filter: LocationFilter) -> Arc<ViewModel> {
        let key = filter.clone();

        self.views.get_with(key, async move {
            debug!("View cache miss for locations {:?}", filter.locations().collect::<Vec<_>>());
            Arc::new(build_view(&self.dataset, &filter, &self.config))
        }).await
    }
}

mod csv_loader;
mod dataset;
mod errors;
mod filter;

pub use csv_loader::CsvLoader;
pub use dataset::Dataset;
pub use errors::LoadError;
pub use filter::{FilterView, LocationFilter};

/// Produces a validated, immutable [`Dataset`] or fails.
pub trait DatasetLoader {
    fn load(&self) -> Result<Dataset, LoadError>;
}

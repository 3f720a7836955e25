use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::info;

use crate::storage::{Dataset, DatasetLoader, LoadError};

/// Loads the sales dataset from a CSV file on disk.
pub struct CsvLoader {
    path: PathBuf
}

impl CsvLoader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf()
        }
    }
}

impl DatasetLoader for CsvLoader {
    fn load(&self) -> Result<Dataset, LoadError> {
        let file = File::open(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source
        })?;

        let timer = Instant::now();
        let dataset = Dataset::from_reader(BufReader::new(file))?;

        info!("Loaded {} transactions from {} in {:?}", dataset.len(), self.path.display(), timer.elapsed());

        Ok(dataset)
    }
}

//! Memoized access to the data source for the lifetime of the process.

use super::snapshot::Snapshot;
use super::source::DataSource;
use crate::errors::DataSourceError;
use std::sync::{Arc, OnceLock};

pub struct DataProvider {
    source: DataSource,
    snapshot: OnceLock<Arc<Snapshot>>,
}

impl DataProvider {
    pub fn new(source: DataSource) -> Self {
        Self {
            source,
            snapshot: OnceLock::new(),
        }
    }

    /// Read the source on first call; later calls hand back the same snapshot.
    pub fn load(&self) -> Result<Arc<Snapshot>, DataSourceError> {
        if let Some(s) = self.snapshot.get() {
            return Ok(Arc::clone(s));
        }
        let loaded = Arc::new(self.source.load()?);
        Ok(Arc::clone(self.snapshot.get_or_init(|| loaded)))
    }
}

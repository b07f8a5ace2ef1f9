//! Where the snapshot comes from: a SQLite file or a directory of CSV files.

use super::raw::RawTable;
use super::schema::{AGENT_TABLE, KPI_TABLE};
use super::snapshot::Snapshot;
use super::{csv_source, sqlite};
use crate::errors::DataSourceError;
use crate::utils::path::expand_tilde;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Sqlite(PathBuf),
    CsvDir(PathBuf),
}

impl DataSource {
    /// A directory means CSV files, anything else a SQLite file.
    pub fn from_path(path: &str) -> Self {
        let p = expand_tilde(path);
        if p.is_dir() {
            DataSource::CsvDir(p)
        } else {
            DataSource::Sqlite(p)
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            DataSource::Sqlite(p) | DataSource::CsvDir(p) => p,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DataSource::Sqlite(_) => "sqlite",
            DataSource::CsvDir(_) => "csv",
        }
    }

    /// Read both tables without interpreting them.
    pub fn read_raw(&self) -> Result<[RawTable; 2], DataSourceError> {
        let names = [AGENT_TABLE, KPI_TABLE];
        match self {
            DataSource::Sqlite(p) => sqlite::read_tables(p, names),
            DataSource::CsvDir(p) => csv_source::read_tables(p, names),
        }
    }

    pub fn load(&self) -> Result<Snapshot, DataSourceError> {
        info!(source = %self.path().display(), kind = self.kind(), "loading data source");
        let [agents, kpis] = self.read_raw()?;
        Snapshot::from_raw(&agents, &kpis)
    }
}

//! Figures shown by `kpiview data --info` and `--check`.

use super::schema::{AGENT_COLUMNS, AGENT_TABLE, KPI_COLUMNS, KPI_TABLE};
use super::snapshot::Snapshot;
use super::source::DataSource;
use crate::errors::DataSourceError;
use std::fs;

#[derive(Debug, Clone)]
pub struct TableStats {
    pub name: &'static str,
    pub rows: usize,
    pub columns: usize,
    pub missing_columns: Vec<String>,
}

#[derive(Debug)]
pub struct SourceStats {
    pub path: String,
    pub kind: &'static str,
    pub size_bytes: u64,
    pub tables: Vec<TableStats>,
    /// Typed load result. `Err` holds the reason the dashboard would refuse to start.
    pub load: Result<Snapshot, DataSourceError>,
}

/// Issues that do not stop the dashboard but deserve a look.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Findings {
    pub duplicate_kpi_rows: Vec<String>,
    pub kpis_without_agent: Vec<String>,
    pub agents_without_kpis: Vec<String>,
    pub agents_without_password: Vec<String>,
    pub non_agent_roles: usize,
}

impl SourceStats {
    pub fn collect(source: &DataSource) -> Result<Self, DataSourceError> {
        let path = source.path();
        let size_bytes = if path.is_dir() {
            fs::read_dir(path)
                .map(|entries| {
                    entries
                        .filter_map(|e| e.ok())
                        .filter_map(|e| e.metadata().ok())
                        .map(|m| m.len())
                        .sum()
                })
                .unwrap_or(0)
        } else {
            fs::metadata(path).map(|m| m.len()).unwrap_or(0)
        };

        let [agents, kpis] = source.read_raw()?;

        let tables = vec![
            TableStats {
                name: AGENT_TABLE,
                rows: agents.rows.len(),
                columns: agents.columns.len(),
                missing_columns: agents.missing_columns(&AGENT_COLUMNS),
            },
            TableStats {
                name: KPI_TABLE,
                rows: kpis.rows.len(),
                columns: kpis.columns.len(),
                missing_columns: kpis.missing_columns(&KPI_COLUMNS),
            },
        ];

        Ok(Self {
            path: path.display().to_string(),
            kind: source.kind(),
            size_bytes,
            tables,
            load: Snapshot::from_raw(&agents, &kpis),
        })
    }

    pub fn findings(&self) -> Option<Findings> {
        let snap = self.load.as_ref().ok()?;

        let kpis_without_agent = snap
            .kpis
            .iter()
            .filter(|k| !snap.directory.contains(&k.identifier))
            .map(|k| k.identifier.clone())
            .collect();

        let agents_without_kpis = snap
            .directory
            .iter()
            .filter(|a| a.role.grants_dashboard())
            .filter(|a| !snap.kpis.iter().any(|k| k.identifier == a.identifier))
            .map(|a| a.identifier.clone())
            .collect();

        let agents_without_password = snap
            .directory
            .iter()
            .filter(|a| a.role.grants_dashboard() && !a.secret.is_set())
            .map(|a| a.identifier.clone())
            .collect();

        let non_agent_roles = snap
            .directory
            .iter()
            .filter(|a| !a.role.grants_dashboard())
            .count();

        Some(Findings {
            duplicate_kpi_rows: snap.kpis.duplicate_identifiers(),
            kpis_without_agent,
            agents_without_kpis,
            agents_without_password,
            non_agent_roles,
        })
    }
}

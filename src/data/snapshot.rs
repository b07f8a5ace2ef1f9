//! In-memory snapshot of the data source: agent directory + KPI table.

use super::raw::{RawTable, RowReader};
use super::schema::*;
use crate::errors::DataSourceError;
use crate::models::agent::{AgentRecord, Secret};
use crate::models::kpi::KpiRecord;
use crate::models::role::Role;
use std::collections::HashSet;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentDirectory {
    rows: Vec<AgentRecord>,
}

impl AgentDirectory {
    /// Build a directory, rejecting duplicate identifiers.
    pub fn new(rows: Vec<AgentRecord>) -> Result<Self, DataSourceError> {
        if let Some(dup) = first_duplicate(rows.iter().map(|r| r.identifier.as_str())) {
            return Err(DataSourceError::DuplicateIdentifier {
                table: AGENT_TABLE.to_string(),
                identifier: dup.to_string(),
            });
        }
        Ok(Self { rows })
    }

    pub fn iter(&self) -> impl Iterator<Item = &AgentRecord> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.rows.iter().any(|r| r.identifier == identifier)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KpiTable {
    rows: Vec<KpiRecord>,
}

impl KpiTable {
    pub fn new(rows: Vec<KpiRecord>) -> Self {
        Self { rows }
    }

    pub fn iter(&self) -> impl Iterator<Item = &KpiRecord> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Identifiers appearing on more than one row, in first-seen order.
    pub fn duplicate_identifiers(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut dups: Vec<String> = Vec::new();
        for r in &self.rows {
            if !seen.insert(r.identifier.as_str()) && !dups.contains(&r.identifier) {
                dups.push(r.identifier.clone());
            }
        }
        dups
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub directory: AgentDirectory,
    pub kpis: KpiTable,
}

impl Snapshot {
    /// Convert the two raw tables into typed records.
    pub fn from_raw(agents: &RawTable, kpis: &RawTable) -> Result<Self, DataSourceError> {
        let directory = AgentDirectory::new(parse_agents(agents)?)?;
        let kpis = KpiTable::new(parse_kpis(kpis)?);

        for dup in kpis.duplicate_identifiers() {
            warn!(identifier = %dup, "{KPI_TABLE} has several rows for one agent; the first one is used");
        }

        debug!(
            agents = directory.len(),
            kpis = kpis.len(),
            "data source snapshot built"
        );

        Ok(Self { directory, kpis })
    }
}

fn parse_agents(t: &RawTable) -> Result<Vec<AgentRecord>, DataSourceError> {
    let [mis, pwd, role, name] = t.require_columns(AGENT_COLUMNS)?;

    (0..t.rows.len())
        .map(|i| -> Result<AgentRecord, DataSourceError> {
            let r = RowReader::new(t, i);
            Ok(AgentRecord {
                identifier: r.key(mis)?,
                secret: r.optional_text(pwd)?.map_or_else(Secret::unset, Secret::new),
                role: Role::from_db_str(&r.text(role)?),
                display_name: r.text(name)?,
            })
        })
        .collect()
}

fn parse_kpis(t: &RawTable) -> Result<Vec<KpiRecord>, DataSourceError> {
    let [
        mis,
        ans_vol,
        surveyed,
        csat,
        dsat,
        resolution,
        evaluated,
        passed,
        failed,
        aht,
        art,
        absent,
        variable,
    ] = t.require_columns(KPI_COLUMNS)?;

    (0..t.rows.len())
        .map(|i| -> Result<KpiRecord, DataSourceError> {
            let r = RowReader::new(t, i);
            Ok(KpiRecord {
                identifier: r.key(mis)?,
                answered_volume: r.count(ans_vol)?,
                surveyed: r.count(surveyed)?,
                csat_ratio: r.ratio(csat)?,
                dsat_ratio: r.ratio(dsat)?,
                resolution_ratio: r.ratio(resolution)?,
                evaluated: r.count(evaluated)?,
                passed: r.count(passed)?,
                failed: r.count(failed)?,
                aht_minutes: r.number(aht)?,
                art_minutes: r.number(art)?,
                absent_days: r.count(absent)?,
                variable_score: r.number(variable)?,
            })
        })
        .collect()
}

fn first_duplicate<'a>(ids: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}

// src/export/model.rs

use crate::models::agent::AgentIdentity;
use crate::models::kpi::KpiView;
use serde::Serialize;

/// Flat scorecard row for CSV / JSON / XLSX.
/// Ratios keep their fractional value; XLSX applies a percent format.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct KpiExport {
    pub agent_mis: String,
    pub name: String,
    pub answered_volume: u64,
    pub surveyed: u64,
    pub csat: f64,
    pub dsat: f64,
    pub solved_rate: f64,
    pub evaluated: u64,
    pub passed: u64,
    pub failed: u64,
    pub aht_min: f64,
    pub art_min: f64,
    pub absent_days: u64,
    pub variable_score: f64,
    pub generated_at: String,
}

impl KpiExport {
    pub fn new(identity: &AgentIdentity, view: &KpiView, generated_at: String) -> Self {
        Self {
            agent_mis: identity.identifier.clone(),
            name: identity.display_name.clone(),
            answered_volume: view.answered_volume(),
            surveyed: view.surveyed(),
            csat: view.csat_ratio(),
            dsat: view.dsat_ratio(),
            solved_rate: view.resolution_ratio(),
            evaluated: view.evaluated(),
            passed: view.passed(),
            failed: view.failed(),
            aht_min: view.aht_minutes(),
            art_min: view.art_minutes(),
            absent_days: view.absent_days(),
            variable_score: view.variable_score(),
            generated_at,
        }
    }
}

/// One XLSX cell of the scorecard.
pub(crate) enum ExportCell<'a> {
    Text(&'a str),
    Count(u64),
    Number(f64),
    Percent(f64),
}

/// Header labels, in the same order as [`export_row`].
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "agent_mis",
        "name",
        "answered_volume",
        "surveyed",
        "csat",
        "dsat",
        "solved_rate",
        "evaluated",
        "passed",
        "failed",
        "aht_min",
        "art_min",
        "absent_days",
        "variable_score",
        "generated_at",
    ]
}

pub(crate) fn export_row(e: &KpiExport) -> Vec<ExportCell<'_>> {
    vec![
        ExportCell::Text(&e.agent_mis),
        ExportCell::Text(&e.name),
        ExportCell::Count(e.answered_volume),
        ExportCell::Count(e.surveyed),
        ExportCell::Percent(e.csat),
        ExportCell::Percent(e.dsat),
        ExportCell::Percent(e.solved_rate),
        ExportCell::Count(e.evaluated),
        ExportCell::Count(e.passed),
        ExportCell::Count(e.failed),
        ExportCell::Number(e.aht_min),
        ExportCell::Number(e.art_min),
        ExportCell::Count(e.absent_days),
        ExportCell::Number(e.variable_score),
        ExportCell::Text(&e.generated_at),
    ]
}

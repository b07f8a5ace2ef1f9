use serde::Serialize;

/// One row of `KPIDB`.
///
/// Ratios are fractions in `[0, 1]`; they are turned into percentages only
/// when rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiRecord {
    pub identifier: String,     // ⇔ AGENTMIS
    pub answered_volume: u64,   // ⇔ ANS_VOL
    pub surveyed: u64,          // ⇔ SURVEYED
    pub csat_ratio: f64,        // ⇔ CSAT_SCORE
    pub dsat_ratio: f64,        // ⇔ DSAT_SCORE
    pub resolution_ratio: f64,  // ⇔ ISSUE_RESOLUTION
    pub evaluated: u64,         // ⇔ EVALUATED
    pub passed: u64,            // ⇔ PASS_EVALUATION
    pub failed: u64,            // ⇔ FAIL_EVALUATION
    pub aht_minutes: f64,       // ⇔ AHT_MIN
    pub art_minutes: f64,       // ⇔ ART_MIN
    pub absent_days: u64,       // ⇔ ABSENT
    pub variable_score: f64,    // ⇔ VARIABLE
}

/// Read-only view handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiView {
    record: KpiRecord,
}

impl KpiView {
    pub(crate) fn new(record: KpiRecord) -> Self {
        Self { record }
    }

    pub fn identifier(&self) -> &str {
        &self.record.identifier
    }
    pub fn answered_volume(&self) -> u64 {
        self.record.answered_volume
    }
    pub fn surveyed(&self) -> u64 {
        self.record.surveyed
    }
    pub fn csat_ratio(&self) -> f64 {
        self.record.csat_ratio
    }
    pub fn dsat_ratio(&self) -> f64 {
        self.record.dsat_ratio
    }
    pub fn resolution_ratio(&self) -> f64 {
        self.record.resolution_ratio
    }
    pub fn evaluated(&self) -> u64 {
        self.record.evaluated
    }
    pub fn passed(&self) -> u64 {
        self.record.passed
    }
    pub fn failed(&self) -> u64 {
        self.record.failed
    }
    pub fn aht_minutes(&self) -> f64 {
        self.record.aht_minutes
    }
    pub fn art_minutes(&self) -> f64 {
        self.record.art_minutes
    }
    pub fn absent_days(&self) -> u64 {
        self.record.absent_days
    }
    pub fn variable_score(&self) -> f64 {
        self.record.variable_score
    }

    pub fn record(&self) -> &KpiRecord {
        &self.record
    }
}

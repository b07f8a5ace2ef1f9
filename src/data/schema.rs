//! Table and column names of the data source, and the DDL used by `init`.
//!
//! The names are the ones the operations team uses in the workbook, so they
//! are kept verbatim (uppercase abbreviations) instead of being normalized.

pub const AGENT_TABLE: &str = "AGENTDB";
pub const KPI_TABLE: &str = "KPIDB";

pub const COL_MIS: &str = "AGENTMIS";
pub const COL_PASSWORD: &str = "PASSWORD";
pub const COL_ROLE: &str = "ROLE";
pub const COL_NAME: &str = "NAME";

pub const COL_ANS_VOL: &str = "ANS_VOL";
pub const COL_SURVEYED: &str = "SURVEYED";
pub const COL_CSAT: &str = "CSAT_SCORE";
pub const COL_DSAT: &str = "DSAT_SCORE";
pub const COL_RESOLUTION: &str = "ISSUE_RESOLUTION";
pub const COL_EVALUATED: &str = "EVALUATED";
pub const COL_PASSED: &str = "PASS_EVALUATION";
pub const COL_FAILED: &str = "FAIL_EVALUATION";
pub const COL_AHT: &str = "AHT_MIN";
pub const COL_ART: &str = "ART_MIN";
pub const COL_ABSENT: &str = "ABSENT";
pub const COL_VARIABLE: &str = "VARIABLE";

pub const AGENT_COLUMNS: [&str; 4] = [COL_MIS, COL_PASSWORD, COL_ROLE, COL_NAME];

pub const KPI_COLUMNS: [&str; 13] = [
    COL_MIS,
    COL_ANS_VOL,
    COL_SURVEYED,
    COL_CSAT,
    COL_DSAT,
    COL_RESOLUTION,
    COL_EVALUATED,
    COL_PASSED,
    COL_FAILED,
    COL_AHT,
    COL_ART,
    COL_ABSENT,
    COL_VARIABLE,
];

/// Empty schema created by `kpiview init` when no data file exists yet.
pub const CREATE_SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS AGENTDB (
        AGENTMIS  TEXT NOT NULL,
        PASSWORD  TEXT NOT NULL,
        ROLE      TEXT NOT NULL DEFAULT 'Agent',
        NAME      TEXT NOT NULL DEFAULT ''
    );

    CREATE TABLE IF NOT EXISTS KPIDB (
        AGENTMIS          TEXT NOT NULL,
        ANS_VOL           INTEGER NOT NULL DEFAULT 0,
        SURVEYED          INTEGER NOT NULL DEFAULT 0,
        CSAT_SCORE        REAL NOT NULL DEFAULT 0 CHECK(CSAT_SCORE BETWEEN 0 AND 1),
        DSAT_SCORE        REAL NOT NULL DEFAULT 0 CHECK(DSAT_SCORE BETWEEN 0 AND 1),
        ISSUE_RESOLUTION  REAL NOT NULL DEFAULT 0 CHECK(ISSUE_RESOLUTION BETWEEN 0 AND 1),
        EVALUATED         INTEGER NOT NULL DEFAULT 0,
        PASS_EVALUATION   INTEGER NOT NULL DEFAULT 0,
        FAIL_EVALUATION   INTEGER NOT NULL DEFAULT 0,
        AHT_MIN           REAL NOT NULL DEFAULT 0,
        ART_MIN           REAL NOT NULL DEFAULT 0,
        ABSENT            INTEGER NOT NULL DEFAULT 0,
        VARIABLE          REAL NOT NULL DEFAULT 0
    );
"#;

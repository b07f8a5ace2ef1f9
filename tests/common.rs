#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rusqlite::types::Value;
use rusqlite::{Connection, params};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn kv() -> Command {
    cargo_bin_cmd!("kpiview")
}

/// Unique data file path inside the system temp dir, removed if present.
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_kpiview.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Empty temp directory for CSV sources.
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_kpiview_csv", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Temp output file path, removed if present.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_kpiview_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub const KPI_HEADER: [&str; 13] = [
    "AGENTMIS",
    "ANS_VOL",
    "SURVEYED",
    "CSAT_SCORE",
    "DSAT_SCORE",
    "ISSUE_RESOLUTION",
    "EVALUATED",
    "PASS_EVALUATION",
    "FAIL_EVALUATION",
    "AHT_MIN",
    "ART_MIN",
    "ABSENT",
    "VARIABLE",
];

/// Tables without declared types, the way a spreadsheet dump stores them:
/// numbers stay numbers, even in AGENTMIS.
pub fn create_untyped_tables(conn: &Connection) {
    conn.execute_batch(
        "CREATE TABLE AGENTDB (AGENTMIS, PASSWORD, ROLE, NAME);
         CREATE TABLE KPIDB (AGENTMIS, ANS_VOL, SURVEYED, CSAT_SCORE, DSAT_SCORE,
             ISSUE_RESOLUTION, EVALUATED, PASS_EVALUATION, FAIL_EVALUATION,
             AHT_MIN, ART_MIN, ABSENT, VARIABLE);",
    )
    .expect("create tables");
}

/// Directory used by most tests:
///  - A100 / pw1  Agent       Jane   → KPI row
///  - A200 / pw3  Agent       Omar   → no KPI row
///  - S900 / pw9  Supervisor  Lena   → KPI row, but may not log in
///  - 100234 / 4321 (numbers) Agent Karim → KPI row
pub fn standard_source(name: &str) -> String {
    let db_path = setup_test_db(name);
    let conn = Connection::open(&db_path).expect("open db");
    create_untyped_tables(&conn);

    let text = |s: &str| Value::Text(s.to_string());
    let agents = [
        (text("A100"), text("pw1"), "Agent", "Jane"),
        (text("A200"), text("pw3"), "Agent", "Omar"),
        (text("S900"), text("pw9"), "Supervisor", "Lena"),
        (Value::Integer(100234), Value::Integer(4321), "Agent", "Karim"),
    ];
    for (mis, pwd, role, name) in agents {
        conn.execute(
            "INSERT INTO AGENTDB VALUES (?1, ?2, ?3, ?4)",
            params![mis, pwd, role, name],
        )
        .expect("insert agent");
    }

    // ANS_VOL as REAL on purpose: spreadsheet exports store whole numbers as floats.
    conn.execute(
        "INSERT INTO KPIDB VALUES ('A100', 1520.0, 310, 0.87, 0.05, 0.92, 12, 11, 1, 5.3, 1.25, 2, 95.5)",
        [],
    )
    .expect("insert kpi");
    conn.execute(
        "INSERT INTO KPIDB VALUES ('S900', 10, 1, 0.5, 0.5, 0.5, 1, 1, 0, 3.0, 1.0, 0, 50)",
        [],
    )
    .expect("insert kpi");
    conn.execute(
        "INSERT INTO KPIDB VALUES (100234, 800, 120, 0.75, 0.1, 0.8, 6, 5, 1, 6.0, 2.5, 0, 80)",
        [],
    )
    .expect("insert kpi");

    db_path
}

/// Same content as [`standard_source`] minus the numeric agent, as CSV files.
pub fn standard_csv_source(name: &str) -> PathBuf {
    let dir = setup_test_dir(name);

    let mut agents = csv::Writer::from_path(dir.join("AGENTDB.csv")).expect("agents csv");
    agents
        .write_record(["AGENTMIS", "PASSWORD", "ROLE", "NAME"])
        .expect("write");
    agents.write_record(["A100", "pw1", "Agent", "Jane"]).expect("write");
    agents.write_record(["A200", "pw3", "Agent", "Omar"]).expect("write");
    agents
        .write_record(["S900", "pw9", "Supervisor", "Lena"])
        .expect("write");
    agents.flush().expect("flush");

    let mut kpis = csv::Writer::from_path(dir.join("KPIDB.csv")).expect("kpis csv");
    kpis.write_record(KPI_HEADER).expect("write");
    kpis.write_record([
        "A100", "1520", "310", "0.87", "0.05", "0.92", "12", "11", "1", "5.3", "1.25", "2", "95.5",
    ])
    .expect("write");
    kpis.write_record([
        "S900", "10", "1", "0.5", "0.5", "0.5", "1", "1", "0", "3.0", "1.0", "0", "50",
    ])
    .expect("write");
    kpis.flush().expect("flush");

    dir
}

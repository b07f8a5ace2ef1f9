mod common;
use common::{
    KPI_HEADER, create_untyped_tables, setup_test_db, setup_test_dir, standard_csv_source,
    standard_source,
};

use kpiview::core::auth::authenticate;
use kpiview::core::resolver::resolve;
use kpiview::core::service::KpiService;
use kpiview::data::{AgentDirectory, DataProvider, DataSource, KpiTable};
use kpiview::errors::{AppError, AuthError, DataSourceError, LookupError};
use kpiview::models::agent::{AgentIdentity, AgentRecord};
use kpiview::models::kpi::KpiRecord;
use kpiview::models::session::{Session, SessionState};
use rusqlite::Connection;
use std::sync::Arc;

fn kpi(identifier: &str, csat: f64) -> KpiRecord {
    KpiRecord {
        identifier: identifier.to_string(),
        answered_volume: 1520,
        surveyed: 310,
        csat_ratio: csat,
        dsat_ratio: 0.05,
        resolution_ratio: 0.92,
        evaluated: 12,
        passed: 11,
        failed: 1,
        aht_minutes: 5.3,
        art_minutes: 1.25,
        absent_days: 2,
        variable_score: 95.5,
    }
}

fn directory() -> AgentDirectory {
    AgentDirectory::new(vec![
        AgentRecord::new("A100", "pw1", "Agent", "Jane"),
        AgentRecord::new("S900", "pw9", "Supervisor", "Lena"),
        AgentRecord::new("L300", "pw4", "agent", "Lowercase"),
    ])
    .expect("unique directory")
}

fn load(path: &str) -> Result<Arc<kpiview::data::Snapshot>, DataSourceError> {
    DataProvider::new(DataSource::from_path(path)).load()
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

#[test]
fn test_authenticate_scenario_a() {
    let identity = authenticate(&directory(), "A100", "pw1").expect("login");
    assert_eq!(
        identity,
        AgentIdentity {
            identifier: "A100".into(),
            display_name: "Jane".into()
        }
    );
}

#[test]
fn test_authenticate_scenario_b_wrong_secret() {
    assert_eq!(
        authenticate(&directory(), "A100", "wrong"),
        Err(AuthError::InvalidCredentials)
    );
}

#[test]
fn test_unknown_identifier_and_wrong_secret_look_the_same() {
    let dir = directory();
    let unknown = authenticate(&dir, "Z999", "pw1").unwrap_err();
    let wrong = authenticate(&dir, "A100", "nope").unwrap_err();
    assert_eq!(unknown, wrong);
    assert_eq!(unknown.to_string(), wrong.to_string());
}

#[test]
fn test_non_agent_role_is_rejected_with_correct_secret() {
    let dir = directory();
    assert_eq!(
        authenticate(&dir, "S900", "pw9"),
        Err(AuthError::InvalidCredentials)
    );
    // role match is case-sensitive
    assert_eq!(
        authenticate(&dir, "L300", "pw4"),
        Err(AuthError::InvalidCredentials)
    );
}

#[test]
fn test_credentials_are_compared_verbatim() {
    let dir = directory();
    assert!(authenticate(&dir, "a100", "pw1").is_err());
    assert!(authenticate(&dir, " A100", "pw1").is_err());
    assert!(authenticate(&dir, "A100", "pw1 ").is_err());
    assert!(authenticate(&dir, "A100", "PW1").is_err());
}

#[test]
fn test_authenticate_is_idempotent() {
    let dir = directory();
    let first = authenticate(&dir, "A100", "pw1");
    for _ in 0..3 {
        assert_eq!(authenticate(&dir, "A100", "pw1"), first);
        assert_eq!(
            authenticate(&dir, "A100", "x"),
            Err(AuthError::InvalidCredentials)
        );
    }
}

#[test]
fn test_duplicate_directory_identifier_is_rejected() {
    let err = AgentDirectory::new(vec![
        AgentRecord::new("A100", "pw1", "Agent", "Jane"),
        AgentRecord::new("A100", "other", "Agent", "Jane bis"),
    ])
    .unwrap_err();
    assert!(matches!(
        err,
        DataSourceError::DuplicateIdentifier { ref identifier, .. } if identifier == "A100"
    ));
}

#[test]
fn test_secret_is_not_printed_by_debug() {
    let rec = AgentRecord::new("A100", "pw1", "Agent", "Jane");
    let dbg = format!("{:?}", rec);
    assert!(!dbg.contains("pw1"));
    assert!(dbg.contains("A100"));
}

// ---------------------------------------------------------------------------
// Blank directory cells
// ---------------------------------------------------------------------------

/// SQLite source whose AGENTDB holds the given rows and whose KPIDB is empty.
fn sqlite_directory(name: &str, rows: &str) -> String {
    let path = setup_test_db(name);
    let conn = Connection::open(&path).expect("open");
    create_untyped_tables(&conn);
    conn.execute_batch(&format!("INSERT INTO AGENTDB VALUES {rows};"))
        .expect("insert agents");
    path
}

#[test]
fn test_null_or_empty_password_never_matches_sqlite() {
    let path = sqlite_directory(
        "core_blank_pwd",
        "('A100', NULL, 'Agent', 'Jane'), ('A300', '', 'Agent', 'Ali')",
    );
    let snap = load(&path).expect("load");

    for id in ["A100", "A300"] {
        assert_eq!(
            authenticate(&snap.directory, id, ""),
            Err(AuthError::InvalidCredentials)
        );
    }
    assert!(snap.directory.iter().all(|a| !a.secret.is_set()));
}

#[test]
fn test_empty_password_never_matches_csv() {
    let dir = setup_test_dir("core_blank_pwd_csv");
    let mut agents = csv::Writer::from_path(dir.join("AGENTDB.csv")).expect("agents csv");
    agents
        .write_record(["AGENTMIS", "PASSWORD", "ROLE", "NAME"])
        .expect("write");
    agents.write_record(["A100", "", "Agent", "Jane"]).expect("write");
    agents.flush().expect("flush");
    let mut kpis = csv::Writer::from_path(dir.join("KPIDB.csv")).expect("kpis csv");
    kpis.write_record(KPI_HEADER).expect("write");
    kpis.flush().expect("flush");

    let snap = load(&dir.to_string_lossy()).expect("load");
    assert_eq!(
        authenticate(&snap.directory, "A100", ""),
        Err(AuthError::InvalidCredentials)
    );

    let service = KpiService::new(snap);
    let mut session = Session::new();
    assert!(service.submit_login(&mut session, "A100", "").is_err());
    assert!(!session.is_authenticated());
}

#[test]
fn test_null_role_does_not_grant_access() {
    let path = sqlite_directory(
        "core_blank_role",
        "('A100', 'pw1', NULL, 'Jane'), ('A300', 'pw3', '', 'Ali')",
    );
    let snap = load(&path).expect("load");

    assert!(authenticate(&snap.directory, "A100", "pw1").is_err());
    assert!(authenticate(&snap.directory, "A300", "pw3").is_err());
}

#[test]
fn test_empty_name_still_logs_in() {
    let path = sqlite_directory("core_blank_name", "('A100', 'pw1', 'Agent', NULL)");
    let snap = load(&path).expect("load");

    let identity = authenticate(&snap.directory, "A100", "pw1").expect("login");
    assert_eq!(identity.identifier, "A100");
    assert_eq!(identity.display_name, "");
}

#[test]
fn test_unset_secret_debug() {
    let rec = AgentRecord::new("A100", "", "Agent", "Jane");
    assert!(!rec.secret.is_set());
    assert!(format!("{:?}", rec).contains("Secret(unset)"));
}

// ---------------------------------------------------------------------------
// KPI lookup
// ---------------------------------------------------------------------------

#[test]
fn test_resolve_scenario_c_keeps_ratio_fractional() {
    let table = KpiTable::new(vec![kpi("A100", 0.87)]);
    let view = resolve("A100", &table).expect("kpi row");
    assert_eq!(view.csat_ratio(), 0.87);
    assert_eq!(view.identifier(), "A100");
    assert_eq!(view.answered_volume(), 1520);
    assert_eq!(view.aht_minutes(), 5.3);
}

#[test]
fn test_resolve_scenario_d_no_kpi_data() {
    let table = KpiTable::new(vec![kpi("A100", 0.87)]);
    assert_eq!(resolve("A200", &table), Err(LookupError::NoKpiData));
}

#[test]
fn test_resolve_takes_first_of_repeated_rows() {
    let table = KpiTable::new(vec![kpi("A100", 0.5), kpi("A100", 0.9)]);
    let view = resolve("A100", &table).expect("kpi row");
    assert_eq!(view.csat_ratio(), 0.5);
    assert_eq!(table.duplicate_identifiers(), vec!["A100".to_string()]);
}

// ---------------------------------------------------------------------------
// Session + service
// ---------------------------------------------------------------------------

#[test]
fn test_session_state_machine() {
    let path = standard_source("core_session_state");
    let service = KpiService::new(load(&path).expect("load"));
    let mut session = Session::new();
    assert_eq!(session.state(), &SessionState::Anonymous);

    // failure keeps the session anonymous
    assert!(service.submit_login(&mut session, "A100", "bad").is_err());
    assert!(!session.is_authenticated());

    let identity = service
        .submit_login(&mut session, "A100", "pw1")
        .expect("login");
    assert_eq!(identity.display_name, "Jane");
    assert_eq!(session.identity(), Some(&identity));

    let view = service.request_dashboard(&session).expect("dashboard");
    assert_eq!(view.csat_ratio(), 0.87);

    session.logout();
    assert_eq!(session.state(), &SessionState::Anonymous);
    assert!(matches!(
        service.request_dashboard(&session),
        Err(AppError::Auth(AuthError::NotAuthenticated))
    ));
}

#[test]
fn test_dashboard_without_kpi_row_is_a_lookup_error() {
    let path = standard_source("core_no_kpi");
    let service = KpiService::new(load(&path).expect("load"));
    let mut session = Session::new();
    service
        .submit_login(&mut session, "A200", "pw3")
        .expect("login");

    assert!(matches!(
        service.request_dashboard(&session),
        Err(AppError::Lookup(LookupError::NoKpiData))
    ));
    // the session survives the failed lookup
    assert!(session.is_authenticated());
}

#[test]
fn test_sessions_are_independent() {
    let path = standard_source("core_two_sessions");
    let service = KpiService::new(load(&path).expect("load"));

    let mut jane = Session::new();
    let mut other = Session::new();
    service.submit_login(&mut jane, "A100", "pw1").expect("login");
    assert!(service.submit_login(&mut other, "S900", "pw9").is_err());

    assert!(jane.is_authenticated());
    assert!(!other.is_authenticated());
}

// ---------------------------------------------------------------------------
// Data provider
// ---------------------------------------------------------------------------

#[test]
fn test_provider_load_is_memoized() {
    let path = standard_source("core_memo");
    let provider = DataProvider::new(DataSource::from_path(&path));

    let first = provider.load().expect("load");
    // a change on disk is not seen: the snapshot is read once
    Connection::open(&path)
        .expect("open")
        .execute("DELETE FROM KPIDB", [])
        .expect("delete");
    let second = provider.load().expect("load");

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(*first, *second);
    assert_eq!(second.kpis.len(), 3);
}

#[test]
fn test_numeric_cells_are_read_as_identifiers() {
    let path = standard_source("core_numeric_ids");
    let service = KpiService::new(load(&path).expect("load"));
    let mut session = Session::new();

    service
        .submit_login(&mut session, "100234", "4321")
        .expect("numeric MIS login");
    let view = service.request_dashboard(&session).expect("dashboard");
    assert_eq!(view.answered_volume(), 800);
}

#[test]
fn test_lookup_totality_types() {
    let path = standard_source("core_totality");
    let snap = load(&path).expect("load");
    for agent in snap.directory.iter().filter(|a| a.role.grants_dashboard()) {
        if let Ok(view) = resolve(&agent.identifier, &snap.kpis) {
            for r in [view.csat_ratio(), view.dsat_ratio(), view.resolution_ratio()] {
                assert!((0.0..=1.0).contains(&r));
            }
        }
    }
    let a100 = resolve("A100", &snap.kpis).expect("A100");
    assert_eq!(a100.answered_volume(), 1520);
    assert_eq!(a100.evaluated(), a100.passed() + a100.failed());
}

#[test]
fn test_csv_and_sqlite_sources_agree() {
    let db = standard_source("core_agree_db");
    let dir = standard_csv_source("core_agree_csv");

    let from_db = load(&db).expect("sqlite");
    let from_csv = load(&dir.to_string_lossy()).expect("csv");

    for id in ["A100", "S900"] {
        assert_eq!(
            resolve(id, &from_db.kpis).expect("db row"),
            resolve(id, &from_csv.kpis).expect("csv row")
        );
    }
    assert!(authenticate(&from_csv.directory, "A100", "pw1").is_ok());
}

#[test]
fn test_missing_source_is_fatal() {
    let path = setup_test_db("core_missing_source");
    assert!(matches!(load(&path), Err(DataSourceError::Missing(_))));
}

#[test]
fn test_missing_table_is_fatal() {
    let path = setup_test_db("core_missing_table");
    let conn = Connection::open(&path).expect("open");
    conn.execute_batch("CREATE TABLE AGENTDB (AGENTMIS, PASSWORD, ROLE, NAME);")
        .expect("create");
    drop(conn);

    assert!(matches!(
        load(&path),
        Err(DataSourceError::MissingTable(ref t)) if t == "KPIDB"
    ));
}

#[test]
fn test_missing_column_is_fatal() {
    let path = setup_test_db("core_missing_column");
    let conn = Connection::open(&path).expect("open");
    conn.execute_batch(
        "CREATE TABLE AGENTDB (AGENTMIS, PASSWORD, NAME);
         CREATE TABLE KPIDB (AGENTMIS);",
    )
    .expect("create");
    drop(conn);

    assert!(matches!(
        load(&path),
        Err(DataSourceError::MissingColumn { ref column, .. }) if column == "ROLE"
    ));
}

#[test]
fn test_ratio_out_of_range_is_fatal() {
    let path = setup_test_db("core_bad_ratio");
    let conn = Connection::open(&path).expect("open");
    create_untyped_tables(&conn);
    conn.execute(
        "INSERT INTO KPIDB VALUES ('A100', 1, 1, 87, 0.05, 0.9, 1, 1, 0, 5, 1, 0, 90)",
        [],
    )
    .expect("insert");
    drop(conn);

    match load(&path) {
        Err(DataSourceError::InvalidCell { column, row, .. }) => {
            assert_eq!(column, "CSAT_SCORE");
            assert_eq!(row, 1);
        }
        other => panic!("expected InvalidCell, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_fractional_count_is_fatal() {
    let path = setup_test_db("core_bad_count");
    let conn = Connection::open(&path).expect("open");
    create_untyped_tables(&conn);
    conn.execute(
        "INSERT INTO KPIDB VALUES ('A100', 10.5, 1, 0.8, 0.05, 0.9, 1, 1, 0, 5, 1, 0, 90)",
        [],
    )
    .expect("insert");
    drop(conn);

    assert!(matches!(
        load(&path),
        Err(DataSourceError::InvalidCell { ref column, .. }) if column == "ANS_VOL"
    ));
}

#[test]
fn test_integral_identifiers_agree_across_backends() {
    let path = setup_test_db("core_real_ids");
    let conn = Connection::open(&path).expect("open");
    create_untyped_tables(&conn);
    conn.execute(
        "INSERT INTO KPIDB VALUES (100234.0, 800, 120, 0.75, 0.1, 0.8, 6, 5, 1, 6.0, 2.5, 0, 80)",
        [],
    )
    .expect("insert");
    drop(conn);

    let dir = setup_test_dir("core_real_ids_csv");
    let mut agents = csv::Writer::from_path(dir.join("AGENTDB.csv")).expect("agents csv");
    agents
        .write_record(["AGENTMIS", "PASSWORD", "ROLE", "NAME"])
        .expect("write");
    agents.flush().expect("flush");
    let mut kpis = csv::Writer::from_path(dir.join("KPIDB.csv")).expect("kpis csv");
    kpis.write_record(KPI_HEADER).expect("write");
    kpis.write_record([
        "100234.0", "800", "120", "0.75", "0.1", "0.8", "6", "5", "1", "6.0", "2.5", "0", "80",
    ])
    .expect("write");
    kpis.write_record([
        "00777", "1", "1", "0.5", "0.5", "0.5", "1", "1", "0", "1", "1", "0", "1",
    ])
    .expect("write");
    kpis.flush().expect("flush");

    let from_db = load(&path).expect("sqlite");
    let from_csv = load(&dir.to_string_lossy()).expect("csv");
    assert_eq!(
        resolve("100234", &from_db.kpis).expect("db row"),
        resolve("100234", &from_csv.kpis).expect("csv row")
    );
    // leading zeros are part of the identifier
    assert!(resolve("00777", &from_csv.kpis).is_ok());
    assert!(resolve("777", &from_csv.kpis).is_err());
}

#[test]
fn test_huge_real_identifier_keeps_its_value() {
    let path = setup_test_db("core_huge_id");
    let conn = Connection::open(&path).expect("open");
    create_untyped_tables(&conn);
    conn.execute(
        "INSERT INTO KPIDB VALUES (1e19, 1, 1, 0.5, 0.5, 0.5, 1, 1, 0, 1, 1, 0, 1)",
        [],
    )
    .expect("insert");
    drop(conn);

    let snap = load(&path).expect("load");
    assert!(resolve("10000000000000000000", &snap.kpis).is_ok());
    assert!(resolve(&i64::MAX.to_string(), &snap.kpis).is_err());
}

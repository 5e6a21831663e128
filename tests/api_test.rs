use ecotally::api::EcoSession;
use ecotally::config::Config;
use ecotally::emission::TransportMode;
use ecotally::ledger::{CsvLedger, MemoryLedger, PointsLedger};
use ecotally::region::state_overview;
use ecotally::EcoError;

fn memory_session() -> EcoSession<MemoryLedger> {
    EcoSession::from_config(&Config::default(), MemoryLedger::new()).unwrap()
}

#[test]
fn test_estimate_does_not_touch_ledger() {
    let session = memory_session();
    let report = session.estimate(TransportMode::Bus, 10.0, 5.0).unwrap();

    // 1.0 + 2.1 = 3.1 kg, (10 - 3.1) * 10
    assert!((report.emissions.total - 3.1).abs() < 1e-9);
    assert!((report.points - 69.0).abs() < 1e-9);
    assert!(session.ledger().is_empty());
}

#[test]
fn test_log_day_credits_points() {
    let mut session = memory_session();
    let logged = session
        .log_day("alice", TransportMode::Car, 40.0, 10.0)
        .unwrap();

    // 10.0 + 4.2 = 14.2 kg, -(4.2) * 5
    assert!((logged.report.points + 21.0).abs() < 1e-9);
    let rec = logged.record.unwrap();
    assert_eq!(rec.username, "alice");
    assert!((rec.cumulative_points + 21.0).abs() < 1e-9);
}

#[test]
fn test_log_day_without_user_still_reports() {
    let mut session = memory_session();
    let logged = session.log_day("  ", TransportMode::Walk, 2.0, 0.0).unwrap();

    assert_eq!(logged.record, None);
    assert!((logged.report.points - 100.0).abs() < 1e-9);
    assert!(session.leaderboard().unwrap().is_empty());
}

#[test]
fn test_invalid_input_never_reaches_ledger() {
    let mut session = memory_session();
    let res = session.log_day("alice", TransportMode::Car, -4.0, 0.0);
    assert!(matches!(res, Err(EcoError::InvalidArgument(_))));
    assert!(session.ledger().is_empty());
}

#[test]
fn test_leaderboard_and_lookup_through_file_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = CsvLedger::new(dir.path().join("points.csv"));
    let mut session = EcoSession::from_config(&Config::default(), ledger).unwrap();

    session.log_day("Alice", TransportMode::Bicycle, 5.0, 2.0).unwrap();
    session.log_day("bob", TransportMode::Car, 5.0, 2.0).unwrap();
    session.log_day("bob", TransportMode::Bicycle, 0.0, 0.0).unwrap();

    let board = session.leaderboard().unwrap();
    assert_eq!(board.len(), 2);
    assert_eq!(board[0].username, "bob");

    let alice = session.lookup("alice").unwrap().expect("case-insensitive hit");
    assert_eq!(alice.username, "Alice");
    assert_eq!(alice.rank, 2);
    assert!(session.lookup("carol").unwrap().is_none());

    // A fresh session over the same file sees the same standings
    let reopened = EcoSession::from_config(
        &Config::default(),
        CsvLedger::new(session.ledger().path()),
    )
    .unwrap();
    assert_eq!(reopened.leaderboard().unwrap(), board);
}

#[test]
fn test_corrupt_ledger_is_distinct_from_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("points.csv");

    let empty = EcoSession::from_config(&Config::default(), CsvLedger::new(&path)).unwrap();
    assert!(empty.leaderboard().unwrap().is_empty());

    std::fs::write(&path, "username,cumulative_points\nalice,1\n").unwrap();
    let broken = EcoSession::from_config(&Config::default(), CsvLedger::new(&path)).unwrap();
    assert!(matches!(broken.leaderboard(), Err(EcoError::DataFormat(_))));
}

#[test]
fn test_session_rejects_invalid_config() {
    let mut config = Config::default();
    config.points.reward_rate = f64::NAN;
    let res = EcoSession::from_config(&config, MemoryLedger::new());
    assert!(matches!(res, Err(EcoError::Config(_))));
}

#[test]
fn test_region_overview_figures() {
    let overview = state_overview();
    assert_eq!(overview.counties.len(), 8);
    assert_eq!(overview.total_emissions_million_mt(), 80.0);
    assert_eq!(overview.county_total_million_mt(), 90.0);

    let ranked = overview.counties_by_emissions();
    assert_eq!(ranked[0].county, "Hudson");
    assert_eq!(ranked[7].county, "Ocean");
}

#[test]
fn test_ledger_mut_allows_direct_adjustments() {
    let mut session = memory_session();
    session.ledger_mut().upsert("admin-bonus", 50.0).unwrap();
    assert_eq!(session.leaderboard().unwrap()[0].username, "admin-bonus");
}

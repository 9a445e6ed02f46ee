mod common;

use tuneshelf_db::entities::registry;
use tuneshelf_seed::check;

#[tokio::test]
async fn test_check_on_empty_store_reports_missing_schema() {
    let tmp = tempfile::tempdir().unwrap();
    let db = common::open_store(tmp.path()).await;

    let report = check(&db).await.unwrap();
    assert_eq!(report.ping, 1);
    assert!(!report.sqlite_version.is_empty());
    assert!(report.tables.is_empty());
    assert_eq!(report.missing_tables(), registry::table_names());
}

#[tokio::test]
async fn test_check_after_seed_lists_every_table() {
    let tmp = tempfile::tempdir().unwrap();
    let (db, _) = common::seeded_store(tmp.path()).await;

    let report = check(&db).await.unwrap();
    assert!(report.missing_tables().is_empty());
    assert!(report.tables.iter().any(|t| t == "seaql_migrations"));

    let mut sorted = report.tables.clone();
    sorted.sort();
    assert_eq!(report.tables, sorted);
}

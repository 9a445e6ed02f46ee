// Shared test utilities for integration tests
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::DatabaseConnection;
use std::path::Path;
use tuneshelf_db::{DatabaseConfig, FixedClock};
use tuneshelf_seed::{run_seed, SeedOptions, SeedSummary};

pub fn seeded_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 9, 15)
        .unwrap()
        .and_hms_opt(20, 45, 0)
        .unwrap()
}

pub fn test_clock() -> FixedClock {
    FixedClock(seeded_at())
}

pub async fn open_store(dir: &Path) -> DatabaseConnection {
    let url = format!("sqlite://{}?mode=rwc", dir.join("spotify.db").display());
    tuneshelf_db::connect(&DatabaseConfig::with_url(url))
        .await
        .unwrap()
}

/// Fresh store with the sample catalog loaded.
pub async fn seeded_store(dir: &Path) -> (DatabaseConnection, SeedSummary) {
    let db = open_store(dir).await;
    let summary = run_seed(&db, &test_clock(), SeedOptions::default())
        .await
        .unwrap();
    (db, summary)
}

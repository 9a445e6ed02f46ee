use chrono::NaiveDate;
use sea_orm_migration::sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set,
    Statement,
};
use sea_orm_migration::SchemaManager;
use tuneshelf_db::entities::{artist, country, genre, registry, user};
use tuneshelf_db::{CatalogError, DatabaseConfig};
use tuneshelf_migration::{create_all, drop_all, init_db};

async fn open_store(dir: &std::path::Path) -> DatabaseConnection {
    let url = format!("sqlite://{}?mode=rwc", dir.join("catalog.db").display());
    tuneshelf_db::connect(&DatabaseConfig::with_url(url))
        .await
        .unwrap()
}

async fn user_tables(db: &DatabaseConnection) -> Vec<String> {
    let rows = db
        .query_all(Statement::from_string(
            db.get_database_backend(),
            "SELECT name FROM sqlite_master WHERE type = 'table' \
             AND name NOT LIKE 'sqlite_%' AND name <> 'seaql_migrations' ORDER BY name",
        ))
        .await
        .unwrap();
    rows.iter()
        .map(|row| row.try_get::<String>("", "name").unwrap())
        .collect()
}

fn sorted_registry() -> Vec<String> {
    let mut names: Vec<String> = registry::table_names()
        .into_iter()
        .map(str::to_owned)
        .collect();
    names.sort();
    names
}

fn created_at() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 9, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[tokio::test]
async fn test_create_all_builds_every_registered_table() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_store(tmp.path()).await;

    create_all(&db).await.unwrap();

    assert_eq!(user_tables(&db).await, sorted_registry());
    let manager = SchemaManager::new(&db);
    for name in registry::table_names() {
        assert!(manager.has_table(name).await.unwrap(), "missing {name}");
    }
}

#[tokio::test]
async fn test_create_all_twice_is_a_no_op() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_store(tmp.path()).await;

    create_all(&db).await.unwrap();
    country::ActiveModel {
        name: Set("UK".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    create_all(&db).await.unwrap();

    assert_eq!(user_tables(&db).await, sorted_registry());
    assert_eq!(country::Entity::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_drop_all_removes_every_table() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_store(tmp.path()).await;

    create_all(&db).await.unwrap();
    drop_all(&db).await.unwrap();

    assert!(user_tables(&db).await.is_empty());
}

#[tokio::test]
async fn test_drop_all_on_empty_store_succeeds() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_store(tmp.path()).await;

    drop_all(&db).await.unwrap();
    assert!(user_tables(&db).await.is_empty());
}

#[tokio::test]
async fn test_init_db_with_drop_empties_tables() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_store(tmp.path()).await;

    init_db(&db, false).await.unwrap();
    genre::ActiveModel {
        name: Set("Jazz".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    init_db(&db, false).await.unwrap();
    assert_eq!(genre::Entity::find().count(&db).await.unwrap(), 1);

    init_db(&db, true).await.unwrap();
    assert_eq!(genre::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(user_tables(&db).await, sorted_registry());
}

// ── Uniqueness constraints ────────────────────────────────────────────

fn assert_unique_violation(err: sea_orm_migration::sea_orm::DbErr) {
    let err = CatalogError::from(err);
    assert!(err.is_unique_violation(), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_duplicate_country_name_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_store(tmp.path()).await;
    create_all(&db).await.unwrap();

    let indonesia = || country::ActiveModel {
        name: Set("Indonesia".to_string()),
        ..Default::default()
    };
    indonesia().insert(&db).await.unwrap();
    assert_unique_violation(indonesia().insert(&db).await.unwrap_err());
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_store(tmp.path()).await;
    create_all(&db).await.unwrap();

    let budi = |email: &str| user::ActiveModel {
        username: Set("budi_s".to_string()),
        email: Set(email.to_string()),
        password: Set("pwd".to_string()),
        is_premium: Set(false),
        country_id: Set(None),
        created_at: Set(created_at()),
        ..Default::default()
    };
    budi("budi@example.com").insert(&db).await.unwrap();
    assert_unique_violation(budi("other@example.com").insert(&db).await.unwrap_err());
}

#[tokio::test]
async fn test_duplicate_artist_name_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_store(tmp.path()).await;
    create_all(&db).await.unwrap();

    let queen = |bio: &str| artist::ActiveModel {
        name: Set("Queen".to_string()),
        bio: Set(bio.to_string()),
        created_at: Set(created_at()),
        ..Default::default()
    };
    queen("A legendary British rock band.")
        .insert(&db)
        .await
        .unwrap();
    assert_unique_violation(queen("Another bio.").insert(&db).await.unwrap_err());
}

#[tokio::test]
async fn test_duplicate_genre_name_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_store(tmp.path()).await;
    create_all(&db).await.unwrap();

    let rock = || genre::ActiveModel {
        name: Set("Rock".to_string()),
        ..Default::default()
    };
    rock().insert(&db).await.unwrap();
    assert_unique_violation(rock().insert(&db).await.unwrap_err());
}

#[tokio::test]
async fn test_user_email_is_not_unique() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_store(tmp.path()).await;
    create_all(&db).await.unwrap();

    for username in ["jane_d", "jane_doe"] {
        user::ActiveModel {
            username: Set(username.to_string()),
            email: Set("jane@example.com".to_string()),
            password: Set("pwd".to_string()),
            is_premium: Set(false),
            country_id: Set(None),
            created_at: Set(created_at()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();
    }
    assert_eq!(user::Entity::find().count(&db).await.unwrap(), 2);
}

// ── Stores whose tables drifted from the migration history ───────────

async fn drop_raw(db: &DatabaseConnection, table: &str) {
    db.execute(Statement::from_string(
        db.get_database_backend(),
        format!("DROP TABLE {table}"),
    ))
    .await
    .unwrap();
}

#[tokio::test]
async fn test_drop_all_tolerates_table_removed_outside_migrator() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_store(tmp.path()).await;

    create_all(&db).await.unwrap();
    drop_raw(&db, "follows").await;

    drop_all(&db).await.unwrap();
    assert!(user_tables(&db).await.is_empty());

    init_db(&db, true).await.unwrap();
    assert_eq!(user_tables(&db).await, sorted_registry());
}

#[tokio::test]
async fn test_init_db_with_drop_recovers_store_missing_a_table() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_store(tmp.path()).await;

    create_all(&db).await.unwrap();
    drop_raw(&db, "song_genres").await;

    init_db(&db, true).await.unwrap();
    assert_eq!(user_tables(&db).await, sorted_registry());
}

#[tokio::test]
async fn test_create_all_recreates_table_missing_from_migrated_store() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_store(tmp.path()).await;

    create_all(&db).await.unwrap();
    country::ActiveModel {
        name: Set("USA".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();
    drop_raw(&db, "follows").await;

    create_all(&db).await.unwrap();

    let manager = SchemaManager::new(&db);
    assert!(manager.has_table("follows").await.unwrap());
    assert_eq!(user_tables(&db).await, sorted_registry());
    // Tables that were still there keep their rows
    assert_eq!(country::Entity::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_migrator_down_skips_missing_tables() {
    use tuneshelf_migration::{Migrator, MigratorTrait};

    let tmp = tempfile::tempdir().unwrap();
    let db = open_store(tmp.path()).await;

    create_all(&db).await.unwrap();
    drop_raw(&db, "playlist_songs").await;

    Migrator::down(&db, None).await.unwrap();
    assert!(user_tables(&db).await.is_empty());
}

//! Create-all / drop-all for the catalog store.
//!
//! Both operations look at the tables actually present, not only at the
//! migration history, so a store whose tables were removed behind the
//! migrator's back is still brought back to the declared schema.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseConnection;
use tuneshelf_db::entities::registry;
use tuneshelf_db::CatalogError;

use crate::Migrator;

/// Bookkeeping table sea-orm-migration keeps applied migrations in.
const HISTORY_TABLE: &str = "seaql_migrations";

/// Create every catalog table that does not exist yet.
///
/// Safe to call repeatedly. Each table is created with `IF NOT EXISTS`, so
/// when a registered table is missing from a store that records every
/// migration as applied, the history is discarded and all migrations run
/// again; the tables still present are left untouched.
pub async fn create_all(db: &DatabaseConnection) -> Result<(), CatalogError> {
    let manager = SchemaManager::new(db);

    let missing = missing_tables(&manager).await?;
    if !missing.is_empty() && manager.has_table(HISTORY_TABLE).await? {
        tracing::warn!(
            ?missing,
            "catalog tables missing from a migrated store, replaying migrations"
        );
        drop_history(&manager).await?;
    }

    let pending = Migrator::get_pending_migrations(db).await?.len();
    Migrator::up(db, None).await?;
    tracing::info!(applied = pending, "catalog tables created");
    Ok(())
}

/// Drop every catalog table, children first. Destroys all rows.
///
/// Tables already gone are skipped. The migration history goes too, so a
/// later [`create_all`] applies every migration from scratch.
pub async fn drop_all(db: &DatabaseConnection) -> Result<(), CatalogError> {
    let manager = SchemaManager::new(db);
    for name in registry::table_names().into_iter().rev() {
        manager
            .drop_table(Table::drop().table(Alias::new(name)).if_exists().to_owned())
            .await?;
    }
    drop_history(&manager).await?;

    tracing::info!("catalog tables dropped");
    Ok(())
}

/// Bring the store's schema up to date, optionally wiping it first.
pub async fn init_db(db: &DatabaseConnection, drop: bool) -> Result<(), CatalogError> {
    if drop {
        tracing::warn!("dropping all catalog tables before recreating them");
        drop_all(db).await?;
    }
    create_all(db).await
}

async fn missing_tables(manager: &SchemaManager<'_>) -> Result<Vec<&'static str>, DbErr> {
    let mut missing = Vec::new();
    for name in registry::table_names() {
        if !manager.has_table(name).await? {
            missing.push(name);
        }
    }
    Ok(missing)
}

async fn drop_history(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    manager
        .drop_table(
            Table::drop()
                .table(Alias::new(HISTORY_TABLE))
                .if_exists()
                .to_owned(),
        )
        .await
}

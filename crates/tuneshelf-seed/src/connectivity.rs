//! Store smoke test: ping, engine version, table listing.

use sea_orm::{ConnectionTrait, DbErr, Statement};
use tuneshelf_db::entities::registry;
use tuneshelf_db::CatalogError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionReport {
    pub ping: i32,
    pub sqlite_version: String,
    /// Every non-internal table in the store, sorted by name.
    pub tables: Vec<String>,
}

impl ConnectionReport {
    /// Catalog tables the store does not have yet.
    pub fn missing_tables(&self) -> Vec<&'static str> {
        registry::table_names()
            .into_iter()
            .filter(|name| !self.tables.iter().any(|t| t == name))
            .collect()
    }
}

/// Round-trip a trivial query and list what the store holds.
pub async fn check<C>(db: &C) -> Result<ConnectionReport, CatalogError>
where
    C: ConnectionTrait,
{
    let backend = db.get_database_backend();

    let row = db
        .query_one(Statement::from_string(backend, "SELECT 1 AS ping"))
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("SELECT 1 returned no row".into()))?;
    let ping = row.try_get::<i32>("", "ping")?;

    let row = db
        .query_one(Statement::from_string(
            backend,
            "SELECT sqlite_version() AS version",
        ))
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("sqlite_version() returned no row".into()))?;
    let sqlite_version = row.try_get::<String>("", "version")?;

    let tables = db
        .query_all(Statement::from_string(
            backend,
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        ))
        .await?
        .iter()
        .map(|row| row.try_get::<String>("", "name"))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(ping, %sqlite_version, tables = tables.len(), "store reachable");
    Ok(ConnectionReport {
        ping,
        sqlite_version,
        tables,
    })
}

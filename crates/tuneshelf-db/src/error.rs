//! Catalog store error types.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Everything that can go wrong talking to the catalog store.
///
/// Nothing here is recovered locally: callers propagate it up to the
/// binary entry points, which report it and exit.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("store unreachable: {0}")]
    Connection(DbErr),

    #[error("constraint violation: {0}")]
    Constraint(DbErr),

    #[error("database error: {0}")]
    Database(DbErr),
}

impl CatalogError {
    pub fn is_connection(&self) -> bool {
        matches!(self, CatalogError::Connection(_))
    }

    /// True when a unique or primary-key constraint rejected the write.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            CatalogError::Constraint(err) => {
                matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
            }
            _ => false,
        }
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        match self {
            CatalogError::Constraint(err) => {
                matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
            }
            _ => false,
        }
    }

    /// The underlying ORM error.
    pub fn db_err(&self) -> &DbErr {
        match self {
            CatalogError::Connection(err)
            | CatalogError::Constraint(err)
            | CatalogError::Database(err) => err,
        }
    }
}

impl From<DbErr> for CatalogError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => CatalogError::Connection(err),
            _ if err.sql_err().is_some() => CatalogError::Constraint(err),
            _ => CatalogError::Database(err),
        }
    }
}

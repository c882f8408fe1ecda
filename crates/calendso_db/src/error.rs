//! Error types for the database client

use calendso_common::CalendsoError;
use thiserror::Error;

/// Errors that can occur when working with the database client
#[derive(Debug, Error)]
pub enum DbError {
    /// Error from SQLx
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// Error with the database configuration
    #[error("Database configuration error: {0}")]
    ConfigError(String),

    /// Error with database URL parsing
    #[error("Database URL error: {0}")]
    UrlError(String),

    /// Error with database pool creation
    #[error("Database pool error: {0}")]
    PoolError(String),

    /// Error with database query
    #[error("Database query error: {0}")]
    QueryError(String),

    /// A row came back without a column the caller relies on
    #[error("Database row error: {0}")]
    RowError(String),
}

impl From<DbError> for CalendsoError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConfigError(msg) | DbError::UrlError(msg) => CalendsoError::ConfigError(msg),
            other => CalendsoError::DatabaseError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calendso_common::HttpStatusCode;

    #[test]
    fn query_errors_map_to_database_errors() {
        let err: CalendsoError = DbError::QueryError("syntax".into()).into();
        assert!(matches!(err, CalendsoError::DatabaseError(_)));
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn configuration_errors_keep_their_category() {
        let err: CalendsoError = DbError::ConfigError("no url".into()).into();
        assert!(matches!(err, CalendsoError::ConfigError(ref m) if m == "no url"));
    }
}

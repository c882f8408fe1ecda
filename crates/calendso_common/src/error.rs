// --- File: crates/calendso_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type shared by all Calendso crates.
///
/// Crate-specific errors convert into this through `From` impls, e.g. the
/// database crate maps its `DbError` onto [`CalendsoError::DatabaseError`].
#[derive(Error, Debug)]
pub enum CalendsoError {
    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during database operation
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// I/O failure outside the database, e.g. binding the listener
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Maps an error onto the HTTP status code it should be answered with.
pub trait HttpStatusCode {
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for CalendsoError {
    fn status_code(&self) -> u16 {
        match self {
            CalendsoError::ConfigError(_) => 500,
            CalendsoError::DatabaseError(_) => 500,
            CalendsoError::NotFoundError(_) => 404,
            CalendsoError::InternalError(_) => 500,
        }
    }
}

impl From<std::io::Error> for CalendsoError {
    fn from(err: std::io::Error) -> Self {
        CalendsoError::InternalError(err.to_string())
    }
}

pub fn config_error<T: fmt::Display>(message: T) -> CalendsoError {
    CalendsoError::ConfigError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> CalendsoError {
    CalendsoError::NotFoundError(message.to_string())
}

//! Column readers shared by the SQL repositories.

use crate::error::DbError;
use sqlx::any::AnyRow;
use sqlx::{Row, ValueRef};

/// Reads a nullable text column. SQL `NULL` is checked before decoding so it
/// always comes back as `None`, whatever type the driver reports for it.
pub(crate) fn optional_text(row: &AnyRow, column: &str) -> Result<Option<String>, DbError> {
    let raw = row
        .try_get_raw(column)
        .map_err(|e| DbError::RowError(format!("{}: {}", column, e)))?;
    if raw.is_null() {
        return Ok(None);
    }

    row.try_get::<String, _>(column)
        .map(Some)
        .map_err(|e| DbError::RowError(format!("{}: {}", column, e)))
}

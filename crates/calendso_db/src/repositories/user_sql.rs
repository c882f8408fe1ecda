//! SQL implementation of the user repository.

use crate::error::DbError;
use crate::repositories::row::optional_text;
use crate::repositories::user::{ProjectedUser, UserCriteria, UserField, UserRepository};
use crate::DbClient;
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, info};

/// SQL implementation of the user repository
#[derive(Debug, Clone)]
pub struct SqlUserRepository {
    db_client: DbClient,
}

impl SqlUserRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

/// Builds the `SELECT` for a projected lookup.
///
/// Column names come from [`UserField`] only; criteria values are bound as
/// parameters in the order id, username.
pub(crate) fn build_projection_query(
    criteria: &UserCriteria,
    fields: &[UserField],
) -> Result<String, DbError> {
    if fields.is_empty() {
        return Err(DbError::QueryError(
            "user projection needs at least one field".to_string(),
        ));
    }
    if criteria.is_empty() {
        return Err(DbError::QueryError(
            "user lookup needs at least one criterion".to_string(),
        ));
    }

    let mut columns: Vec<&str> = Vec::with_capacity(fields.len());
    for field in fields {
        let column = field.column();
        if !columns.contains(&column) {
            columns.push(column);
        }
    }

    let mut clauses = Vec::with_capacity(2);
    if criteria.id.is_some() {
        clauses.push(format!("id = ${}", clauses.len() + 1));
    }
    if criteria.username.is_some() {
        clauses.push(format!("username = ${}", clauses.len() + 1));
    }

    Ok(format!(
        "SELECT {} FROM users WHERE {} LIMIT 1",
        columns.join(", "),
        clauses.join(" AND ")
    ))
}

fn project_row(row: &AnyRow, fields: &[UserField]) -> Result<ProjectedUser, DbError> {
    let mut projected = ProjectedUser::default();
    for field in fields {
        match field {
            UserField::Id => {
                projected.id = Some(
                    row.try_get::<i64, _>("id")
                        .map_err(|e| DbError::RowError(format!("id: {}", e)))?,
                )
            }
            UserField::Username => projected.username = optional_text(row, "username")?,
            UserField::Email => projected.email = optional_text(row, "email")?,
            UserField::Name => projected.name = optional_text(row, "name")?,
            UserField::Bio => projected.bio = optional_text(row, "bio")?,
            UserField::Avatar => projected.avatar = optional_text(row, "avatar")?,
            UserField::Theme => projected.theme = optional_text(row, "theme")?,
        }
    }
    Ok(projected)
}

impl UserRepository for SqlUserRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing user schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL UNIQUE,
                email TEXT,
                name TEXT,
                bio TEXT,
                avatar TEXT,
                theme TEXT
            )
        "#;

        self.db_client.execute(query).await?;

        info!("User schema initialized successfully");
        Ok(())
    }

    async fn find_user_projected(
        &self,
        criteria: &UserCriteria,
        fields: &[UserField],
    ) -> Result<Option<ProjectedUser>, DbError> {
        debug!("Finding user by {:?} projecting {:?}", criteria, fields);

        let query = build_projection_query(criteria, fields)?;

        let mut statement = sqlx::query(&query);
        if let Some(id) = criteria.id {
            statement = statement.bind(id);
        }
        if let Some(username) = &criteria.username {
            statement = statement.bind(username.clone());
        }

        let row = statement
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find user: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        row.map(|row| project_row(&row, fields)).transpose()
    }
}

//! SQL implementation of the event type repository.

use crate::error::DbError;
use crate::repositories::row::optional_text;
use crate::repositories::event_type::{EventTypeRepository, EventTypeSummary};
use crate::DbClient;
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, info};

/// SQL implementation of the event type repository
#[derive(Debug, Clone)]
pub struct SqlEventTypeRepository {
    db_client: DbClient,
}

impl SqlEventTypeRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

fn summary_from_row(row: &AnyRow) -> Result<EventTypeSummary, DbError> {
    // INTEGER columns decode as i32 on some drivers
    let length = row
        .try_get::<i64, _>("length")
        .or_else(|_| row.try_get::<i32, _>("length").map(i64::from))
        .map_err(|e| DbError::RowError(format!("length: {}", e)))?;

    Ok(EventTypeSummary {
        slug: row
            .try_get("slug")
            .map_err(|e| DbError::RowError(format!("slug: {}", e)))?,
        title: row
            .try_get("title")
            .map_err(|e| DbError::RowError(format!("title: {}", e)))?,
        length,
        description: optional_text(row, "description")?,
    })
}

impl EventTypeRepository for SqlEventTypeRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing event type schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS event_types (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL REFERENCES users(id),
                slug TEXT NOT NULL,
                title TEXT NOT NULL,
                length INTEGER NOT NULL,
                description TEXT,
                hidden BOOLEAN NOT NULL DEFAULT FALSE,
                UNIQUE(user_id, slug)
            )
        "#;

        self.db_client.execute(query).await?;

        info!("Event type schema initialized successfully");
        Ok(())
    }

    async fn find_visible_by_user(&self, user_id: i64) -> Result<Vec<EventTypeSummary>, DbError> {
        debug!("Finding visible event types for user: {}", user_id);

        let query = r#"
            SELECT slug, title, length, description
            FROM event_types
            WHERE user_id = $1 AND hidden = FALSE
            ORDER BY id
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find event types: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter().map(summary_from_row).collect()
    }
}

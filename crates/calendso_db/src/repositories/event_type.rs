//! Repository for event types

use crate::error::DbError;

pub use calendso_common::models::{EventType, EventTypeSummary};

/// Read access to event types
pub trait EventTypeRepository {
    /// Create the `event_types` table if it does not exist. Development and tests only.
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// All non-hidden event types of a user, projected to the card fields, in id order.
    fn find_visible_by_user(
        &self,
        user_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<EventTypeSummary>, DbError>> + Send;
}

// --- File: crates/calendso_common/src/models.rs ---

// Records owned by the account and event management subsystems. Calendso's
// public pages only ever read them.

use serde::{Deserialize, Serialize};

/// A user account as seen by the public profile page.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    /// Lookup key in profile URLs. Stored lower-case.
    pub username: String,

    pub name: Option<String>,

    pub bio: Option<String>,

    /// URL of the profile image.
    pub avatar: Option<String>,

    /// Stored theme preference: "light", "dark" or absent for the system default.
    pub theme: Option<String>,
}

impl User {
    /// The name shown to visitors: `name` when it is set and non-empty, else `username`.
    pub fn display_name(&self) -> &str {
        display_name(self.name.as_deref(), &self.username)
    }
}

/// `name || username`: an empty name counts as absent.
pub fn display_name<'a>(name: Option<&'a str>, username: &'a str) -> &'a str {
    match name {
        Some(name) if !name.is_empty() => name,
        _ => username,
    }
}

/// A bookable event type.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventType {
    pub id: i64,
    pub user_id: i64,

    /// Unique per user; second path segment of the booking URL.
    pub slug: String,

    pub title: String,

    /// Duration in minutes.
    pub length: i64,

    pub description: Option<String>,

    /// Hidden event types never appear on the public profile.
    pub hidden: bool,
}

/// The display-relevant projection of an [`EventType`] used by profile cards.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTypeSummary {
    pub slug: String,
    pub title: String,
    pub length: i64,
    pub description: Option<String>,
}

impl From<EventType> for EventTypeSummary {
    fn from(event_type: EventType) -> Self {
        Self {
            slug: event_type.slug,
            title: event_type.title,
            length: event_type.length,
            description: event_type.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: Option<&str>) -> User {
        User {
            id: 1,
            username: "jane".to_string(),
            name: name.map(str::to_string),
            bio: None,
            avatar: None,
            theme: None,
        }
    }

    #[test]
    fn display_name_prefers_name() {
        assert_eq!(user(Some("Jane Doe")).display_name(), "Jane Doe");
    }

    #[test]
    fn display_name_falls_back_to_username_for_missing_or_empty_name() {
        assert_eq!(user(None).display_name(), "jane");
        assert_eq!(user(Some("")).display_name(), "jane");
    }
}

//! Repository for users
//!
//! Users are owned by the account subsystem. Public pages read them through a
//! projection: the caller names the columns it needs and gets back a record with
//! only those populated.

use crate::error::DbError;
use serde::Serialize;

pub use calendso_common::models::User;

/// A selectable column of the `users` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Id,
    Username,
    Email,
    Name,
    Bio,
    Avatar,
    Theme,
}

impl UserField {
    /// Every selectable column, in table order.
    pub const ALL: [UserField; 7] = [
        UserField::Id,
        UserField::Username,
        UserField::Email,
        UserField::Name,
        UserField::Bio,
        UserField::Avatar,
        UserField::Theme,
    ];

    pub fn column(&self) -> &'static str {
        match self {
            UserField::Id => "id",
            UserField::Username => "username",
            UserField::Email => "email",
            UserField::Name => "name",
            UserField::Bio => "bio",
            UserField::Avatar => "avatar",
            UserField::Theme => "theme",
        }
    }
}

/// Equality filters for a user lookup. Set filters are combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserCriteria {
    pub id: Option<i64>,
    pub username: Option<String>,
}

impl UserCriteria {
    /// Match on username. The value is compared as given; callers normalise case.
    pub fn username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            ..Self::default()
        }
    }

    pub fn id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.username.is_none()
    }
}

/// A user row restricted to the projected columns. Unrequested columns are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectedUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl TryFrom<ProjectedUser> for User {
    type Error = DbError;

    /// Requires the `id` and `username` columns to have been projected.
    fn try_from(projected: ProjectedUser) -> Result<Self, Self::Error> {
        let id = projected
            .id
            .ok_or_else(|| DbError::RowError("user projection is missing id".to_string()))?;
        let username = projected
            .username
            .ok_or_else(|| DbError::RowError("user projection is missing username".to_string()))?;
        Ok(User {
            id,
            username,
            name: projected.name,
            bio: projected.bio,
            avatar: projected.avatar,
            theme: projected.theme,
        })
    }
}

/// Read access to users
pub trait UserRepository {
    /// Create the `users` table if it does not exist. Development and tests only.
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Find the first user matching `criteria`, selecting only `fields`.
    ///
    /// Returns `Ok(None)` when no user matches. Empty criteria or an empty field
    /// list is rejected with [`DbError::QueryError`].
    fn find_user_projected(
        &self,
        criteria: &UserCriteria,
        fields: &[UserField],
    ) -> impl std::future::Future<Output = Result<Option<ProjectedUser>, DbError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criteria_constructors_set_one_filter() {
        assert_eq!(UserCriteria::username("jane").username.as_deref(), Some("jane"));
        assert_eq!(UserCriteria::id(4).id, Some(4));
        assert!(UserCriteria::default().is_empty());
    }

    #[test]
    fn projection_converts_to_user_when_keys_present() {
        let projected = ProjectedUser {
            id: Some(3),
            username: Some("jane".into()),
            name: Some("Jane".into()),
            ..ProjectedUser::default()
        };
        let user = User::try_from(projected).unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.name.as_deref(), Some("Jane"));
        assert_eq!(user.avatar, None);
    }

    #[test]
    fn projection_without_id_cannot_become_user() {
        let projected = ProjectedUser {
            username: Some("jane".into()),
            ..ProjectedUser::default()
        };
        assert!(matches!(User::try_from(projected), Err(DbError::RowError(_))));
    }

    #[test]
    fn unrequested_columns_are_left_out_of_json() {
        let projected = ProjectedUser {
            username: Some("jane".into()),
            ..ProjectedUser::default()
        };
        let json = serde_json::to_value(&projected).unwrap();
        assert_eq!(json, serde_json::json!({ "username": "jane" }));
    }
}

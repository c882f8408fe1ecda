// In-memory repositories and sample data for unit tests.

use calendso_common::{EventType, EventTypeSummary, User};
use calendso_db::{DbError, EventTypeRepository, ProjectedUser, UserCriteria, UserField, UserRepository};

#[derive(Debug, Clone, Default)]
pub struct InMemoryUsers {
    pub users: Vec<User>,
}

impl UserRepository for InMemoryUsers {
    async fn init_schema(&self) -> Result<(), DbError> {
        Ok(())
    }

    async fn find_user_projected(
        &self,
        criteria: &UserCriteria,
        fields: &[UserField],
    ) -> Result<Option<ProjectedUser>, DbError> {
        if criteria.is_empty() || fields.is_empty() {
            return Err(DbError::QueryError("empty projection".to_string()));
        }

        let found = self.users.iter().find(|user| {
            criteria.id.map_or(true, |id| user.id == id)
                && criteria
                    .username
                    .as_deref()
                    .map_or(true, |username| user.username == username)
        });

        Ok(found.map(|user| {
            let mut projected = ProjectedUser::default();
            for field in fields {
                match field {
                    UserField::Id => projected.id = Some(user.id),
                    UserField::Username => projected.username = Some(user.username.clone()),
                    UserField::Email => {}
                    UserField::Name => projected.name = user.name.clone(),
                    UserField::Bio => projected.bio = user.bio.clone(),
                    UserField::Avatar => projected.avatar = user.avatar.clone(),
                    UserField::Theme => projected.theme = user.theme.clone(),
                }
            }
            projected
        }))
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryEventTypes {
    pub event_types: Vec<EventType>,
}

impl EventTypeRepository for InMemoryEventTypes {
    async fn init_schema(&self) -> Result<(), DbError> {
        Ok(())
    }

    async fn find_visible_by_user(&self, user_id: i64) -> Result<Vec<EventTypeSummary>, DbError> {
        let mut visible: Vec<&EventType> = self
            .event_types
            .iter()
            .filter(|e| e.user_id == user_id && !e.hidden)
            .collect();
        visible.sort_by_key(|e| e.id);
        Ok(visible.into_iter().cloned().map(EventTypeSummary::from).collect())
    }
}

/// Repository whose every query fails, for error paths.
#[derive(Debug, Clone, Default)]
pub struct BrokenDb;

impl UserRepository for BrokenDb {
    async fn init_schema(&self) -> Result<(), DbError> {
        Err(DbError::QueryError("connection refused".to_string()))
    }

    async fn find_user_projected(
        &self,
        _criteria: &UserCriteria,
        _fields: &[UserField],
    ) -> Result<Option<ProjectedUser>, DbError> {
        Err(DbError::QueryError("connection refused".to_string()))
    }
}

impl EventTypeRepository for BrokenDb {
    async fn init_schema(&self) -> Result<(), DbError> {
        Err(DbError::QueryError("connection refused".to_string()))
    }

    async fn find_visible_by_user(&self, _user_id: i64) -> Result<Vec<EventTypeSummary>, DbError> {
        Err(DbError::QueryError("connection refused".to_string()))
    }
}

pub fn jane() -> User {
    User {
        id: 1,
        username: "jane".to_string(),
        name: Some("Jane Doe".to_string()),
        bio: Some("Rust consultant".to_string()),
        avatar: Some("https://x/a.png".to_string()),
        theme: Some("dark".to_string()),
    }
}

pub fn pat() -> User {
    User {
        id: 2,
        username: "pat".to_string(),
        name: None,
        bio: None,
        avatar: None,
        theme: None,
    }
}

pub fn event_type(id: i64, user_id: i64, slug: &str, hidden: bool) -> EventType {
    EventType {
        id,
        user_id,
        slug: slug.to_string(),
        title: format!("{} meeting", slug),
        length: 30,
        description: Some(format!("About {}", slug)),
        hidden,
    }
}

/// Jane has two visible and one hidden event type; Pat has none.
pub fn sample_store() -> (InMemoryUsers, InMemoryEventTypes) {
    (
        InMemoryUsers {
            users: vec![jane(), pat()],
        },
        InMemoryEventTypes {
            event_types: vec![
                event_type(12, 1, "60min", false),
                event_type(10, 1, "30min", false),
                event_type(11, 1, "secret", true),
            ],
        },
    )
}

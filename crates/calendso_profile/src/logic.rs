// --- File: crates/calendso_profile/src/logic.rs ---
use calendso_common::{CalendsoError, EventTypeSummary, ServerSideProps, User};
use calendso_db::{EventTypeRepository, UserCriteria, UserField, UserRepository};
use serde::Serialize;
use tracing::debug;

/// Columns the profile page reads from `users`.
pub const PROFILE_USER_FIELDS: [UserField; 6] = [
    UserField::Id,
    UserField::Username,
    UserField::Name,
    UserField::Bio,
    UserField::Avatar,
    UserField::Theme,
];

/// Everything the profile page renders from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProfileProps {
    pub user: User,
    /// Visible event types in query order.
    pub event_types: Vec<EventTypeSummary>,
}

impl ProfileProps {
    pub fn display_name(&self) -> &str {
        self.user.display_name()
    }
}

/// Server-side data phase of `GET /{username}`.
///
/// The username is lower-cased before the lookup. An unknown user yields
/// [`ServerSideProps::NotFound`]; database failures are returned as errors.
pub async fn load_profile_props<U, E>(
    users: &U,
    event_types: &E,
    username: &str,
) -> Result<ServerSideProps<ProfileProps>, CalendsoError>
where
    U: UserRepository + Sync,
    E: EventTypeRepository + Sync,
{
    let username = username.to_lowercase();

    let Some(projected) = users
        .find_user_projected(&UserCriteria::username(username.as_str()), &PROFILE_USER_FIELDS)
        .await?
    else {
        debug!("No user found for profile: {}", username);
        return Ok(ServerSideProps::NotFound);
    };

    let user = User::try_from(projected)?;
    let event_types = event_types.find_visible_by_user(user.id).await?;
    debug!(
        "Loaded profile for {} with {} event types",
        user.username,
        event_types.len()
    );

    Ok(ServerSideProps::Props(ProfileProps { user, event_types }))
}

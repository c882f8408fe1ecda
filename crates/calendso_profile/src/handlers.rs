// --- File: crates/calendso_profile/src/handlers.rs ---
use crate::logic::{load_profile_props, ProfileProps};
use crate::render::{error_page, not_found_page, ProfilePage};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use calendso_common::{not_found, CalendsoError, ServerSideProps};
use calendso_config::AppConfig;
use calendso_db::{EventTypeRepository, UserRepository};
use calendso_ui::Theme;
use std::sync::Arc;
use tracing::{error, info};

/// State shared by the profile handlers. Repositories are injected so the
/// handlers run against SQL in production and in-memory fakes in tests.
pub struct ProfileState<U, E> {
    pub config: Arc<AppConfig>,
    pub users: U,
    pub event_types: E,
}

impl<U, E> ProfileState<U, E> {
    pub fn new(config: Arc<AppConfig>, users: U, event_types: E) -> Self {
        Self {
            config,
            users,
            event_types,
        }
    }
}

/// Renders the public profile page of `username`.
pub async fn profile_page_handler<U, E>(
    State(state): State<Arc<ProfileState<U, E>>>,
    Path(username): Path<String>,
) -> Response
where
    U: UserRepository + Send + Sync + 'static,
    E: EventTypeRepository + Send + Sync + 'static,
{
    let site = &state.config.site;

    match load_profile_props(&state.users, &state.event_types, &username).await {
        Ok(ServerSideProps::Props(props)) => {
            let theme = Theme::resolve(props.user.theme.as_deref());
            Html(ProfilePage::new(&props, site).render_document(&theme)).into_response()
        }
        Ok(ServerSideProps::NotFound) => {
            info!("Profile not found: {}", username);
            (StatusCode::NOT_FOUND, Html(not_found_page(site))).into_response()
        }
        Err(e) => {
            error!("Failed to load profile {}: {}", username, e);
            (StatusCode::INTERNAL_SERVER_ERROR, Html(error_page(site))).into_response()
        }
    }
}

/// Returns the profile page props as JSON. Documented in `doc.rs`.
pub async fn profile_props_handler<U, E>(
    State(state): State<Arc<ProfileState<U, E>>>,
    Path(username): Path<String>,
) -> Result<Json<ProfileProps>, CalendsoError>
where
    U: UserRepository + Send + Sync + 'static,
    E: EventTypeRepository + Send + Sync + 'static,
{
    load_profile_props(&state.users, &state.event_types, &username)
        .await?
        .props()
        .map(Json)
        .ok_or_else(|| not_found(format!("user {}", username.to_lowercase())))
}

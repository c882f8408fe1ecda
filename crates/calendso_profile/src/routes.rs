// --- File: crates/calendso_profile/src/routes.rs ---

use crate::handlers::{profile_page_handler, profile_props_handler, ProfileState};
use axum::{routing::get, Router};
use calendso_db::{EventTypeRepository, UserRepository};
use std::sync::Arc;

/// Page routes: `GET /{username}`.
pub fn routes<U, E>(state: Arc<ProfileState<U, E>>) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    E: EventTypeRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/{username}", get(profile_page_handler::<U, E>))
        .with_state(state)
}

/// API routes, meant to be nested under `/api`: `GET /profile/{username}`.
pub fn api_routes<U, E>(state: Arc<ProfileState<U, E>>) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    E: EventTypeRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/profile/{username}", get(profile_props_handler::<U, E>))
        .with_state(state)
}

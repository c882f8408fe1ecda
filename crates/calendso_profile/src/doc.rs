// --- File: crates/calendso_profile/src/doc.rs ---
#![allow(dead_code)]
use utoipa::OpenApi;

use crate::logic::ProfileProps;
use calendso_common::{EventTypeSummary, User};

/// Documents `profile_props_handler`, whose generic signature cannot carry the path macro itself.
#[utoipa::path(
    get,
    path = "/profile/{username}", // Path relative to /api
    params(("username" = String, Path, description = "Username, matched case-insensitively")),
    responses(
        (status = 200, description = "User and visible event types", body = ProfileProps),
        (status = 404, description = "No user with this username"),
        (status = 500, description = "Database error")
    ),
    tag = "Profile"
)]
fn doc_profile_props_handler() {}

/// OpenAPI documentation for the profile API
#[derive(OpenApi)]
#[openapi(
    paths(doc_profile_props_handler),
    components(schemas(ProfileProps, User, EventTypeSummary)),
    tags((name = "Profile", description = "Public profile data"))
)]
pub struct ProfileApiDoc;

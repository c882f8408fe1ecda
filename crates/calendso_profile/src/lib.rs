// --- File: crates/calendso_profile/src/lib.rs ---
//! Public profile page: `GET /{username}` lists the user's bookable event types.
//!
//! The page is split the way server-rendered pages usually are: a data phase
//! ([`logic::load_profile_props`]) that either produces props or a "not found",
//! and a render phase ([`render::ProfilePage`]) that turns props into HTML.

#[cfg(feature = "openapi")]
pub mod doc;
#[cfg(test)]
mod fixtures;
pub mod handlers;
pub mod logic;
pub mod meta;
pub mod render;
#[cfg(test)]
mod render_test;
pub mod routes;

pub use handlers::ProfileState;
pub use logic::{load_profile_props, ProfileProps};
pub use routes::{api_routes, routes};

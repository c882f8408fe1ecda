// --- File: crates/calendso_common/src/lib.rs ---

pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Data structures and models
pub mod page; // Server-side page contract

pub use error::{
config_error, not_found, CalendsoError, HttpStatusCode
};

pub use http::IntoHttpResponse;

pub use models::{display_name, EventType, EventTypeSummary, User};

pub use page::ServerSideProps;

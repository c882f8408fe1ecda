//! Database integration for Calendso
//!
//! This crate provides a database client that is designed to be database agnostic,
//! using SQLx's `Any` driver. SQLite is enabled by default; PostgreSQL and MySQL
//! are available through feature flags.
//!
//! Public pages only read from the database. The schema belongs to the account and
//! event management subsystems; the `init_schema` methods exist for local
//! development and tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use calendso_db::{DbClient, SqlUserRepository, UserCriteria, UserField, UserRepository};
//!
//! async fn find_theme(url: &str) -> Result<Option<String>, calendso_db::DbError> {
//!     let users = SqlUserRepository::new(DbClient::from_url(url).await?);
//!     let user = users
//!         .find_user_projected(&UserCriteria::username("jane"), &[UserField::Theme])
//!         .await?;
//!     Ok(user.and_then(|u| u.theme))
//! }
//! ```

pub mod client;
pub mod error;
pub mod factory;
pub mod repositories;
pub mod repository;

pub use client::DbClient;
pub use error::DbError;
pub use factory::DbClientFactory;
pub use repository::RepositoryFactory;

pub use repositories::{
    EventType, EventTypeRepository, EventTypeRepositoryFactory, EventTypeSummary, ProjectedUser,
    SqlEventTypeRepository, SqlUserRepository, User, UserCriteria, UserField, UserRepository,
    UserRepositoryFactory,
};

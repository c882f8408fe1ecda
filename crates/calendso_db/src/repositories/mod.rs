//! Repository modules for database access
//!
//! One trait per entity plus its SQL implementation.

pub mod event_type;
pub mod event_type_sql;
pub mod factory;
mod row;
pub mod user;
pub mod user_sql;

pub use event_type::{EventType, EventTypeRepository, EventTypeSummary};
pub use event_type_sql::SqlEventTypeRepository;
pub use factory::{EventTypeRepositoryFactory, UserRepositoryFactory};
pub use user::{ProjectedUser, User, UserCriteria, UserField, UserRepository};
pub use user_sql::SqlUserRepository;

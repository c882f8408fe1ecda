//! Factories for the SQL repositories

use crate::repositories::event_type_sql::SqlEventTypeRepository;
use crate::repositories::user_sql::SqlUserRepository;
use crate::{DbClient, RepositoryFactory};

/// Builds [`SqlUserRepository`] instances from a database client.
#[derive(Debug, Clone, Default)]
pub struct UserRepositoryFactory;

impl UserRepositoryFactory {
    pub fn new() -> Self {
        Self
    }
}

impl RepositoryFactory<SqlUserRepository, DbClient> for UserRepositoryFactory {
    fn create_repository(&self, db_client: DbClient) -> SqlUserRepository {
        SqlUserRepository::new(db_client)
    }
}

/// Builds [`SqlEventTypeRepository`] instances from a database client.
#[derive(Debug, Clone, Default)]
pub struct EventTypeRepositoryFactory;

impl EventTypeRepositoryFactory {
    pub fn new() -> Self {
        Self
    }
}

impl RepositoryFactory<SqlEventTypeRepository, DbClient> for EventTypeRepositoryFactory {
    fn create_repository(&self, db_client: DbClient) -> SqlEventTypeRepository {
        SqlEventTypeRepository::new(db_client)
    }
}

// --- File: crates/services/calendso_backend/src/app_state.rs ---
use calendso_config::AppConfig;
use calendso_db::{
    DbClient, EventTypeRepositoryFactory, RepositoryFactory, SqlEventTypeRepository,
    SqlUserRepository, UserRepositoryFactory,
};
use calendso_profile::ProfileState;
use std::sync::Arc;

/// Application state shared by the service-level routes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db_client: DbClient,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, db_client: DbClient) -> Self {
        Self { config, db_client }
    }

    /// Profile page state backed by the SQL repositories.
    pub fn profile_state(&self) -> Arc<ProfileState<SqlUserRepository, SqlEventTypeRepository>> {
        let users = UserRepositoryFactory::new().create_repository(self.db_client.clone());
        let event_types =
            EventTypeRepositoryFactory::new().create_repository(self.db_client.clone());
        Arc::new(ProfileState::new(self.config.clone(), users, event_types))
    }
}

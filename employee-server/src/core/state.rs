use std::sync::Arc;

use shared::AppError;

use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::{EmployeeRepository, SqliteEmployeeRepository};

/// Shared state handed to every handler
///
/// Cloning is cheap: the repository sits behind an `Arc`.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    /// Employee store
    pub employees: Arc<dyn EmployeeRepository>,
}

impl ServerState {
    /// Build state around an existing repository
    ///
    /// Usually [`initialize()`](Self::initialize) is used instead; tests use
    /// this to inject a store.
    pub fn new(config: Config, employees: Arc<dyn EmployeeRepository>) -> Self {
        Self { config, employees }
    }

    /// Open the configured database and build the SQLite-backed repository
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_url).await?;
        let employees = Arc::new(SqliteEmployeeRepository::new(db.pool));
        Ok(Self::new(config.clone(), employees))
    }

    /// In-memory store, for tests and local experiments
    pub async fn in_memory(config: Config) -> Result<Self, AppError> {
        let db = DbService::in_memory().await?;
        let employees = Arc::new(SqliteEmployeeRepository::new(db.pool));
        Ok(Self::new(config, employees))
    }
}

//! Employee Server - HTTP CRUD service for employee records
//!
//! # Overview
//!
//! - **API** (`api`): `/employees` create, list, update, delete and `/health`
//! - **Validation** (`utils::validation`): field rules checked before any write
//! - **Database** (`db`): SQLite through sqlx, behind the `EmployeeRepository` trait
//!
//! # Module layout
//!
//! ```text
//! employee-server/src/
//! ├── core/          # config, state, server, errors
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # connection pool and repository
//! ├── middleware/    # request logging
//! └── utils/         # errors, logger, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod utils;

// Re-export public types
pub use api::{OneshotRouter, build_app};
pub use core::{Config, Server, ServerState};
pub use db::repository::{EmployeeRepository, RepoError, RepoResult};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// Load `.env`, read the configuration and initialize logging
pub fn setup_environment() -> Config {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}

pub fn print_banner() {
    println!(
        r#"
    ______                __
   / ____/___ ___  ____  / /___  __  _____  ___
  / __/ / __ `__ \/ __ \/ / __ \/ / / / _ \/ _ \
 / /___/ / / / / / /_/ / / /_/ / /_/ /  __/  __/
/_____/_/ /_/ /_/ .___/_/\____/\__, /\___/\___/
               /_/            /____/
    "#
    );
}

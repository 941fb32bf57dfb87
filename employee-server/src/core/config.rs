/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3001 | HTTP port (binds 0.0.0.0) |
/// | DATABASE_URL | sqlite:employees.db | SQLite database location |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | log filter when RUST_LOG is unset |
/// | LOG_DIR | (unset) | daily rolling log files go here when set |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 DATABASE_URL=sqlite:/tmp/staff.db cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// sqlx connection url
    pub database_url: String,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
}

pub const DEFAULT_HTTP_PORT: u16 = 3001;
pub const DEFAULT_DATABASE_URL: &str = "sqlite:employees.db";

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparseable variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_HTTP_PORT),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    /// Override the port and database, keeping everything else from the environment
    ///
    /// Mostly used by tests
    pub fn with_overrides(http_port: u16, database_url: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.database_url = database_url.into();
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            database_url: DEFAULT_DATABASE_URL.into(),
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
        }
    }
}

use std::path::PathBuf;

use crate::auth::JwtConfig;

/// Server configuration
///
/// # Environment variables
///
/// | Variable            | Default              | Meaning                                   |
/// |---------------------|----------------------|-------------------------------------------|
/// | WORK_DIR            | /var/lib/katta       | Data directory (database, uploads, logs)  |
/// | HTTP_PORT           | 5000                 | HTTP API port                             |
/// | ENVIRONMENT         | development          | development \| staging \| production      |
/// | CORS_ORIGIN         | (unset = permissive) | Comma-separated allowed origins           |
/// | ADMIN_EMAIL         | (unset)              | Admin login email                         |
/// | ADMIN_PASSWORD_HASH | (unset)              | Admin password as an argon2 PHC string    |
/// | JWT_SECRET          | (dev key in debug)   | Token signing secret, >= 32 chars         |
///
/// Admin credentials come from the environment (a secret store in
/// deployment), never from literals in the source. Login is rejected
/// outright while they are unset.
#[derive(Debug, Clone)]
pub struct Config {
    /// Data directory holding database, uploads and logs
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Allowed CORS origins; empty means permissive
    pub cors_origins: Vec<String>,
    /// Admin login email
    pub admin_email: Option<String>,
    /// Admin password hash (argon2 PHC string)
    pub admin_password_hash: Option<String>,
    /// JWT configuration
    pub jwt: JwtConfig,
}

impl Config {
    /// Load configuration from environment variables, with defaults.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/katta".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            cors_origins: std::env::var("CORS_ORIGIN")
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
            admin_email: std::env::var("ADMIN_EMAIL").ok(),
            admin_password_hash: std::env::var("ADMIN_PASSWORD_HASH").ok(),
            jwt: JwtConfig::default(),
        }
    }

    /// Override work dir and port on top of the environment.
    ///
    /// Mostly used by tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    pub fn database_path(&self) -> PathBuf {
        self.database_dir().join("katta.db")
    }

    pub fn uploads_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("uploads")
    }

    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Create the work directory layout if missing.
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.uploads_dir())?;
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

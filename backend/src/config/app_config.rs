use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("BIND_ADDR is not a valid socket address: {0}")]
    InvalidBindAddr(String),
    #[error("{0} is set but empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub frontend_url: Option<String>, // allowed CORS origin, any origin when unset
    pub static_dir: Option<PathBuf>, // built frontend served by this process
    pub sentry_dsn: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) if url.trim().is_empty() => return Err(ConfigError::Empty("DATABASE_URL")),
            Some(url) => url,
            None => "database.db".to_string(),
        };

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| "127.0.0.1:3000".to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr))?;

        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Self {
            database_url,
            bind_addr,
            frontend_url: optional("FRONTEND_URL"),
            static_dir: optional("STATIC_DIR").map(PathBuf::from),
            sentry_dsn: optional("SENTRY_DSN"),
        })
    }
}

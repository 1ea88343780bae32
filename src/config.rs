//! Runtime configuration.
//!
//! # Environment Variables
//!
//! - `HOST`: Server host address (default: `0.0.0.0`)
//! - `PORT`: Server port (default: `3000`)
//! - `TASKS_FILE`: Path of the JSON task document (default: `tasks.json`)
//! - `PUBLIC_DIR`: Directory served as static assets (default: `public`)

use std::env;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TASKS_FILE: &str = "tasks.json";
const DEFAULT_PUBLIC_DIR: &str = "public";

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while reading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// `PORT` is not a valid port number.
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),

    /// A path variable was set but empty.
    #[error("{0} must not be empty")]
    EmptyPath(&'static str),

    /// A variable contained non-UTF-8 data.
    #[error("{0} contains a non-UTF-8 value")]
    NotUnicode(&'static str),
}

// =============================================================================
// AppConfig
// =============================================================================

/// Settings needed to start the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub tasks_file: PathBuf,
    pub public_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            tasks_file: PathBuf::from(DEFAULT_TASKS_FILE),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
        }
    }
}

impl AppConfig {
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if `PORT` does not parse or a path
    /// variable is empty.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(env::var)
    }

    /// Reads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<Lookup>(lookup: Lookup) -> Result<Self, ConfigurationError>
    where
        Lookup: Fn(&'static str) -> Result<String, env::VarError>,
    {
        let read = |name: &'static str| match lookup(name) {
            Ok(value) => Ok(Some(value.trim().to_string())),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigurationError::NotUnicode(name)),
        };

        let mut builder = Self::builder();

        if let Some(host) = read("HOST")?.filter(|host| !host.is_empty()) {
            builder = builder.host(host);
        }

        if let Some(port) = read("PORT")?.filter(|port| !port.is_empty()) {
            let parsed = port
                .parse::<u16>()
                .map_err(|_| ConfigurationError::InvalidPort(port.clone()))?;
            builder = builder.port(parsed);
        }

        if let Some(path) = read("TASKS_FILE")? {
            if path.is_empty() {
                return Err(ConfigurationError::EmptyPath("TASKS_FILE"));
            }
            builder = builder.tasks_file(path);
        }

        if let Some(path) = read("PUBLIC_DIR")? {
            if path.is_empty() {
                return Err(ConfigurationError::EmptyPath("PUBLIC_DIR"));
            }
            builder = builder.public_dir(path);
        }

        Ok(builder.build())
    }

    /// Returns `host:port` for binding.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Fluent builder for [`AppConfig`], starting from the defaults.
#[derive(Debug, Clone, Default)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    #[must_use]
    pub fn tasks_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.tasks_file = path.into();
        self
    }

    #[must_use]
    pub fn public_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.public_dir = path.into();
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// =============================================================================
// Tests
// =============================================================================

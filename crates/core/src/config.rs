//! Layered configuration: defaults, then `atelier.toml`, then `ATELIER_*`
//! environment variables, then explicit [`ConfigOverrides`].

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Files probed, in order, when no explicit config path is given.
pub const CONFIG_FILE_CANDIDATES: [&str; 2] = ["atelier.toml", "config/atelier.toml"];

/// A config key and the environment variables that set it, highest priority first.
#[derive(Debug, Clone, Copy)]
pub struct EnvBinding {
    pub key: &'static str,
    pub vars: &'static [&'static str],
}

pub const ENV_BINDINGS: &[EnvBinding] = &[
    EnvBinding { key: "database.url", vars: &["ATELIER_DATABASE_URL"] },
    EnvBinding { key: "database.max_connections", vars: &["ATELIER_DATABASE_MAX_CONNECTIONS"] },
    EnvBinding { key: "database.timeout_secs", vars: &["ATELIER_DATABASE_TIMEOUT_SECS"] },
    EnvBinding { key: "server.bind_address", vars: &["ATELIER_SERVER_BIND_ADDRESS"] },
    EnvBinding { key: "server.port", vars: &["ATELIER_SERVER_PORT"] },
    EnvBinding {
        key: "server.graceful_shutdown_secs",
        vars: &["ATELIER_SERVER_GRACEFUL_SHUTDOWN_SECS"],
    },
    EnvBinding { key: "logging.level", vars: &["ATELIER_LOGGING_LEVEL", "ATELIER_LOG_LEVEL"] },
    EnvBinding { key: "logging.format", vars: &["ATELIER_LOGGING_FORMAT", "ATELIER_LOG_FORMAT"] },
    EnvBinding { key: "recommendation.seed", vars: &["ATELIER_RECOMMENDATION_SEED"] },
];

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub recommendation: RecommendationConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    pub graceful_shutdown_secs: u64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Engine settings. A fixed `seed` makes every recommendation reproducible.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub database_url: Option<String>,
    pub log_level: Option<String>,
    pub server_port: Option<u16>,
    pub recommendation_seed: Option<u64>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("environment variable interpolation failed for `{var}`")]
    MissingEnvInterpolation { var: String },
    #[error("unterminated environment interpolation expression")]
    UnterminatedInterpolation,
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://atelier.db?mode=rwc".to_string(),
            max_connections: 5,
            timeout_secs: 30,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_address: "127.0.0.1".to_string(), port: 8080, graceful_shutdown_secs: 15 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: LogFormat::Compact }
    }
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Pretty => "pretty",
            Self::Json => "json",
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = match resolve_config_path(options.config_path.as_deref()) {
            Some(path) => read_file(&path)?,
            None if options.require_file => {
                return Err(ConfigError::MissingConfigFile(
                    options.config_path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_CANDIDATES[0])),
                ));
            }
            None => Self::default(),
        };

        for binding in ENV_BINDINGS {
            let found =
                binding.vars.iter().find_map(|var| read_env(var).map(|value| (*var, value)));
            if let Some((var, value)) = found {
                config.assign(binding.key, var, &value)?;
            }
        }

        config.apply_overrides(options.overrides);
        config.validate()?;
        Ok(config)
    }

    /// Address the HTTP server listens on, e.g. `127.0.0.1:8080`.
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }

    /// Rendered value of a dotted key from [`ENV_BINDINGS`].
    pub fn display_value(&self, key: &str) -> Option<String> {
        let value = match key {
            "database.url" => self.database.url.clone(),
            "database.max_connections" => self.database.max_connections.to_string(),
            "database.timeout_secs" => self.database.timeout_secs.to_string(),
            "server.bind_address" => self.server.bind_address.clone(),
            "server.port" => self.server.port.to_string(),
            "server.graceful_shutdown_secs" => self.server.graceful_shutdown_secs.to_string(),
            "logging.level" => self.logging.level.clone(),
            "logging.format" => self.logging.format.as_str().to_string(),
            "recommendation.seed" => self
                .recommendation
                .seed
                .map_or_else(|| "<unset>".to_string(), |seed| seed.to_string()),
            _ => return None,
        };
        Some(value)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()?;
        self.server.validate()?;
        self.logging.validate()
    }

    fn assign(&mut self, key: &str, var: &str, raw: &str) -> Result<(), ConfigError> {
        let bad_value =
            || ConfigError::InvalidEnvOverride { key: var.to_string(), value: raw.to_string() };

        match key {
            "database.url" => self.database.url = raw.to_string(),
            "database.max_connections" => {
                self.database.max_connections = raw.parse().map_err(|_| bad_value())?
            }
            "database.timeout_secs" => {
                self.database.timeout_secs = raw.parse().map_err(|_| bad_value())?
            }
            "server.bind_address" => self.server.bind_address = raw.to_string(),
            "server.port" => self.server.port = raw.parse().map_err(|_| bad_value())?,
            "server.graceful_shutdown_secs" => {
                self.server.graceful_shutdown_secs = raw.parse().map_err(|_| bad_value())?
            }
            "logging.level" => self.logging.level = raw.to_string(),
            "logging.format" => self.logging.format = raw.parse()?,
            "recommendation.seed" => {
                self.recommendation.seed = Some(raw.parse().map_err(|_| bad_value())?)
            }
            _ => {}
        }
        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(url) = overrides.database_url {
            self.database.url = url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(port) = overrides.server_port {
            self.server.port = port;
        }
        if let Some(seed) = overrides.recommendation_seed {
            self.recommendation.seed = Some(seed);
        }
    }
}

impl DatabaseConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let url = self.url.trim();
        if !(url.starts_with("sqlite://") || url.starts_with("sqlite::") || url == ":memory:") {
            return Err(invalid(
                "database.url must be a sqlite URL (`sqlite://...`, `sqlite::...`, or `:memory:`)",
            ));
        }
        if self.max_connections == 0 {
            return Err(invalid("database.max_connections must be greater than zero"));
        }
        if !(1..=300).contains(&self.timeout_secs) {
            return Err(invalid("database.timeout_secs must be in range 1..=300"));
        }
        Ok(())
    }
}

impl ServerConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.trim().is_empty() {
            return Err(invalid("server.bind_address must not be empty"));
        }
        if self.port == 0 {
            return Err(invalid("server.port must be greater than zero"));
        }
        if self.graceful_shutdown_secs == 0 {
            return Err(invalid("server.graceful_shutdown_secs must be greater than zero"));
        }
        Ok(())
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        match self.level.trim().to_ascii_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(invalid("logging.level must be one of trace|debug|info|warn|error")),
        }
    }
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::Validation(message.to_string())
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    match explicit_path {
        Some(path) => path.exists().then(|| path.to_path_buf()),
        None => CONFIG_FILE_CANDIDATES.into_iter().map(PathBuf::from).find(|path| path.exists()),
    }
}

fn read_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;
    toml::from_str(&interpolate_env_vars(&raw)?)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

/// Replaces every `${VAR}` with the variable's value.
fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        output.push_str(&rest[..start]);
        let tail = &rest[start + 2..];
        let end = tail.find('}').ok_or(ConfigError::UnterminatedInterpolation)?;
        let var = &tail[..end];
        let value = env::var(var)
            .map_err(|_| ConfigError::MissingEnvInterpolation { var: var.to_string() })?;
        output.push_str(&value);
        rest = &tail[end + 1..];
    }

    output.push_str(rest);
    Ok(output)
}

fn read_env(var: &str) -> Option<String> {
    env::var(var).ok().filter(|value| !value.trim().is_empty())
}

//! Layered configuration for the Cuslige bot.
//!
//! Sources, later overriding earlier:
//! - Bundled defaults (include_str! from cuslige.toml)
//! - User config in home directory (~/.config/cuslige/cuslige.toml)
//! - `./cuslige.toml`, or an explicit file passed on the command line
//! - `CUSLIGE__SECTION__KEY` environment variables
//!
//! Secrets never live in these files; see [`Secrets`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use cuslige_cache::ProfileCacheConfig;
use cuslige_error::{ConfigError, CusligeResult};
use cuslige_profile::SamplerConfig;
use cuslige_rate_limit::{DEFAULT_MAX_CONCURRENT, RetryPolicy};
use cuslige_upstream::{SharedCacheConfig, UpstreamConfig};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../cuslige.toml");

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "CUSLIGE";

/// Admission control settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GateConfig {
    /// Resolutions allowed in flight at once
    #[serde(default = "default_max_concurrent")]
    max_concurrent: usize,
}

fn default_max_concurrent() -> usize {
    DEFAULT_MAX_CONCURRENT
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            max_concurrent: default_max_concurrent(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

/// Complete bot configuration.
///
/// # Example
///
/// ```
/// use cuslige::CusligeConfig;
///
/// let config = CusligeConfig::bundled().unwrap();
/// assert_eq!(*config.gate().max_concurrent(), 20);
/// assert_eq!(*config.cache().ttl_secs(), 300);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, Getters)]
pub struct CusligeConfig {
    /// Game platform API endpoints
    #[serde(default)]
    upstream: UpstreamConfig,
    /// Retry policy for upstream profile calls
    #[serde(default)]
    retry: RetryPolicy,
    /// Shared blob cache location
    #[serde(default)]
    shared_cache: SharedCacheConfig,
    /// Local TTL cache
    #[serde(default)]
    cache: ProfileCacheConfig,
    /// Concurrency gate
    #[serde(default)]
    gate: GateConfig,
    /// Background sampler
    #[serde(default)]
    sampler: SamplerConfig,
    /// Log output
    #[serde(default)]
    logging: LoggingConfig,
}

impl CusligeConfig {
    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> CusligeResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that deserialize but cannot drive the background tasks.
    fn validate(&self) -> Result<(), ConfigError> {
        if *self.cache.sweep_interval_secs() == 0 {
            return Err(ConfigError::for_key(
                "cache.sweep_interval_secs",
                "must be at least 1",
            ));
        }
        if *self.sampler.interval_secs() == 0 {
            return Err(ConfigError::for_key(
                "sampler.interval_secs",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Bundled defaults only.
    pub fn bundled() -> CusligeResult<Self> {
        Self::finish(Self::defaults())
    }

    /// Bundled defaults overlaid with one TOML file.
    ///
    /// # Errors
    /// Returns an error if the file is missing or does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> CusligeResult<Self> {
        let path = path.as_ref();
        Self::finish(Self::defaults().add_source(File::from(path).required(true)))
            .map_err(|e| {
                ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.display(),
                    e
                ))
                .into()
            })
    }

    /// Bundled defaults overlaid with a TOML string.
    pub fn from_toml_str(toml: &str) -> CusligeResult<Self> {
        Self::finish(Self::defaults().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    /// Load every layer, with `./cuslige.toml` as the working-directory file.
    pub fn load() -> CusligeResult<Self> {
        Self::load_with(None)
    }

    /// Load every layer, replacing `./cuslige.toml` with `explicit` when given.
    ///
    /// User config files are optional and silently skipped if not found; an
    /// explicit file must exist.
    #[instrument]
    pub fn load_with(explicit: Option<&Path>) -> CusligeResult<Self> {
        debug!("Loading configuration: env > file > home dir > bundled defaults");

        let mut builder = Self::defaults();

        if let Some(config_dir) = dirs::config_dir() {
            let home_config = config_dir.join("cuslige/cuslige.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = match explicit {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("cuslige").required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("sampler.usernames"),
        );

        Self::finish(builder)
    }
}

/// Credentials read from the environment.
///
/// A `.env` file in the working directory is loaded first when present.
#[derive(Clone, Default)]
pub struct Secrets {
    discord_token: Option<String>,
    jsonhost_token: Option<String>,
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("discord_token", &self.discord_token.as_ref().map(|_| "<redacted>"))
            .field("jsonhost_token", &self.jsonhost_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Secrets {
    /// Bot token variable.
    pub const DISCORD_TOKEN_VAR: &'static str = "DISCORD_TOKEN";
    /// Shared cache token variable.
    pub const JSONHOST_TOKEN_VAR: &'static str = "JSONHOST_TOKEN";

    /// Explicit secrets; blank strings count as unset.
    pub fn new(discord_token: Option<String>, jsonhost_token: Option<String>) -> Self {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        Self {
            discord_token: non_blank(discord_token),
            jsonhost_token: non_blank(jsonhost_token),
        }
    }

    /// Read secrets from `.env` and the process environment.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "Loaded .env file"),
            Err(e) if e.not_found() => debug!("No .env file found"),
            Err(e) => tracing::warn!(error = %e, "Failed to read .env file"),
        }
        Self::new(
            std::env::var(Self::DISCORD_TOKEN_VAR).ok(),
            std::env::var(Self::JSONHOST_TOKEN_VAR).ok(),
        )
    }

    /// Bot token, if set.
    pub fn discord_token(&self) -> Option<&str> {
        self.discord_token.as_deref()
    }

    /// Bot token, or a configuration error naming the missing variable.
    pub fn require_discord_token(&self) -> Result<&str, ConfigError> {
        self.discord_token()
            .ok_or_else(|| ConfigError::for_key(Self::DISCORD_TOKEN_VAR, "is not set"))
    }

    /// Shared cache bearer token, if set.
    pub fn jsonhost_token(&self) -> Option<&str> {
        self.jsonhost_token.as_deref()
    }
}

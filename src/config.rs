use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub platform: PlatformSettings,
    pub cache: CacheSettings,
    pub matching: MatchingSettings,
    pub scoring: ScoringSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// HomeForPup platform API connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformSettings {
    pub base_url: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub redis_url: String,
    pub ttl_secs: Option<u64>,
    pub l1_cache_size: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    pub default_limit: Option<u8>,
    pub max_limit: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_activity_weight")]
    pub activity: f64,
    #[serde(default = "default_space_weight")]
    pub space: f64,
    #[serde(default = "default_family_weight")]
    pub family: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
    #[serde(default = "default_size_weight")]
    pub size: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            activity: default_activity_weight(),
            space: default_space_weight(),
            family: default_family_weight(),
            experience: default_experience_weight(),
            size: default_size_weight(),
        }
    }
}

fn default_activity_weight() -> f64 { 0.30 }
fn default_space_weight() -> f64 { 0.20 }
fn default_family_weight() -> f64 { 0.25 }
fn default_experience_weight() -> f64 { 0.15 }
fn default_size_weight() -> f64 { 0.10 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with PUP_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with PUP_)
            // e.g., PUP_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("PUP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Apply well-known environment overrides (REDIS_URL etc.)
        settings = apply_env_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("PUP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply well-known environment variables over the layered config.
/// REDIS_URL and PLATFORM_API_KEY are the names the deployment
/// environment already exports; the PUP_-prefixed forms also work.
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let redis_url = env::var("REDIS_URL")
        .or_else(|_| env::var("PUP_CACHE__REDIS_URL"))
        .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());

    let platform_base_url = env::var("PUP_PLATFORM__BASE_URL").ok();
    let platform_api_key = env::var("PLATFORM_API_KEY")
        .or_else(|_| env::var("PUP_PLATFORM__API_KEY"))
        .ok();

    let mut builder = Config::builder()
        .add_source(settings)
        .set_override("cache.redis_url", redis_url)?;

    if let Some(base_url) = platform_base_url {
        builder = builder.set_override("platform.base_url", base_url)?;
    }
    if let Some(api_key) = platform_api_key {
        builder = builder.set_override("platform.api_key", api_key)?;
    }

    builder.build()
}

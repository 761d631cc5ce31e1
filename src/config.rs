//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::data::DEFAULT_SEED;
use crate::render::MapOptions;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Data generation and map presentation settings
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Seed for the synthetic data generator
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Embedded video shown in every map popup
    #[serde(default = "default_video_url")]
    pub video_url: String,

    #[serde(default = "default_tile_url")]
    pub tile_url: String,

    /// Map center as [latitude, longitude]
    #[serde(default = "default_map_center")]
    pub map_center: [f64; 2],

    #[serde(default = "default_map_zoom")]
    pub map_zoom: u8,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_video_url() -> String {
    MapOptions::default().video_url
}

fn default_tile_url() -> String {
    MapOptions::default().tile_url
}

fn default_map_center() -> [f64; 2] {
    let (lat, lng) = MapOptions::default().center;
    [lat, lng]
}

fn default_map_zoom() -> u8 {
    MapOptions::default().zoom
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            video_url: default_video_url(),
            tile_url: default_tile_url(),
            map_center: default_map_center(),
            map_zoom: default_map_zoom(),
        }
    }
}

impl DashboardConfig {
    pub fn map_options(&self) -> MapOptions {
        MapOptions {
            center: (self.map_center[0], self.map_center[1]),
            zoom: self.map_zoom,
            tile_url: self.tile_url.clone(),
            video_url: self.video_url.clone(),
            ..Default::default()
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("datatech-dashboard").join("config.toml")),
            Some(PathBuf::from("/etc/datatech-dashboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Load an explicit file if given, otherwise search the default locations
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load_with_env(p),
            None => Ok(Self::load_default()),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("DASHBOARD_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("DASHBOARD_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        if let Ok(seed) = std::env::var("DASHBOARD_SEED") {
            if let Ok(s) = seed.parse() {
                self.dashboard.seed = s;
            }
        }

        if let Ok(level) = std::env::var("DASHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("DASHBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# DataTech Dashboard Configuration
#
# Environment variables override these settings:
# - DASHBOARD_HOST
# - DASHBOARD_PORT
# - DASHBOARD_SEED
# - DASHBOARD_LOG_LEVEL
# - DASHBOARD_LOG_FORMAT

[server]
# HTTP server host
host = "0.0.0.0"

# HTTP server port
port = 8501

# Allowed CORS origins (empty = any)
cors_origins = []

[dashboard]
# Seed for the synthetic data generator
seed = 42

# Video embedded in every map popup
video_url = "https://www.youtube.com/embed/dQw4w9WgXcQ"

# Map tiles
tile_url = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"

# Map center [latitude, longitude] and zoom
map_center = [20.0, -40.0]
map_zoom = 2

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.dashboard.seed, 42);
        assert_eq!(config.dashboard.map_center, [20.0, -40.0]);
        assert_eq!(config.dashboard.map_zoom, 2);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        let defaults = Config::default();

        assert_eq!(config.server.addr(), defaults.server.addr());
        assert_eq!(config.dashboard.seed, defaults.dashboard.seed);
        assert_eq!(config.dashboard.video_url, defaults.dashboard.video_url);
        assert_eq!(config.dashboard.tile_url, defaults.dashboard.tile_url);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dashboard]\nseed = 7\n").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.dashboard.seed, 7);
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        match err {
            ConfigError::Parse { path, .. } => assert_eq!(path, file.path()),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/dashboard.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_map_options_follow_config() {
        let mut dashboard = DashboardConfig::default();
        dashboard.map_zoom = 4;
        dashboard.video_url = "https://example.com/embed/v".to_string();

        let options = dashboard.map_options();
        assert_eq!(options.zoom, 4);
        assert_eq!(options.center, (20.0, -40.0));
        assert_eq!(options.video_url, "https://example.com/embed/v");
    }
}

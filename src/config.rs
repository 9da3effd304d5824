/// Configuration system - schema structs with embedded defaults plus loading
///
/// All settings live in one TOML file (default: data/config.toml). A missing
/// file means defaults; a malformed file is a startup error. The loaded
/// `Config` is passed into components at construction rather than stored in
/// a global.
use crate::errors::{ClassifierError, ClassifierResult};
use crate::logger::{self, LogTag};

/// Default configuration file path
pub const CONFIG_FILE_PATH: &str = "data/config.toml";

/// Define a configuration struct with embedded defaults
///
/// Generates the struct with public fields, a Default implementation with
/// the specified values, and serde support with `#[serde(default)]`.
#[macro_export]
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_name:ident: $field_type:ty = $default_value:expr
            ),*
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field_name: $field_type,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $(
                        $field_name: $default_value,
                    )*
                }
            }
        }
    };
}

config_struct! {
    /// HTTP server configuration
    pub struct ServerConfig {
        host: String = "127.0.0.1".to_string(),
        port: u16 = 8080,
    }
}

config_struct! {
    /// In-memory cache configuration
    pub struct CacheSettings {
        /// Time-to-live for cached classifications (seconds)
        ttl_secs: u64 = 3600,
        /// Maximum number of entries (LRU eviction when exceeded)
        capacity: usize = 10_000,
        /// Interval between expiry sweeps (seconds)
        sweep_interval_secs: u64 = 60,
    }
}

config_struct! {
    /// Durable result store configuration
    pub struct StoreSettings {
        database_path: String = "data/results.db".to_string(),
    }
}

config_struct! {
    /// Scoring engine configuration
    pub struct EngineSettings {
        /// Per-call inference timeout (milliseconds); elapse fails the request
        timeout_ms: u64 = 5000,
    }
}

config_struct! {
    /// Root configuration
    pub struct Config {
        server: ServerConfig = ServerConfig::default(),
        cache: CacheSettings = CacheSettings::default(),
        store: StoreSettings = StoreSettings::default(),
        engine: EngineSettings = EngineSettings::default(),
    }
}

/// Load configuration from the default path (or --config override)
pub fn load_config() -> ClassifierResult<Config> {
    let path = crate::arguments::get_config_path_override()
        .unwrap_or_else(|| CONFIG_FILE_PATH.to_string());
    load_config_from_path(&path)
}

/// Load configuration from a specific TOML file path
///
/// Missing file falls back to defaults; a file that exists but does not
/// parse is a hard error so typos never silently revert settings.
pub fn load_config_from_path(path: &str) -> ClassifierResult<Config> {
    if !std::path::Path::new(path).exists() {
        logger::warning(
            LogTag::Config,
            &format!("Config file '{}' not found, using default values", path),
        );
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| ClassifierError::Config(format!("Failed to read config '{}': {}", path, e)))?;

    toml::from_str::<Config>(&contents)
        .map_err(|e| ClassifierError::Config(format!("Failed to parse config '{}': {}", path, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_file_missing() {
        let config = load_config_from_path("/nonexistent/config.toml").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.cache.ttl_secs, 3600);
        assert_eq!(config.engine.timeout_ms, 5000);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 9090\n\n[cache]\nttl_secs = 10").unwrap();

        let config = load_config_from_path(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.cache.ttl_secs, 10);
        assert_eq!(config.cache.capacity, 10_000);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        assert!(load_config_from_path(file.path().to_str().unwrap()).is_err());
    }
}

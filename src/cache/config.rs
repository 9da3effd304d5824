/// Cache sizing and expiry configuration
use crate::config::CacheSettings;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Time-to-live for cached entries
    pub ttl: Duration,

    /// Maximum number of entries (LRU eviction when exceeded)
    pub capacity: usize,

    /// Interval between background expiry sweeps
    pub sweep_interval: Duration,
}

impl CacheConfig {
    /// Build from the loaded TOML settings
    pub fn from_settings(settings: &CacheSettings) -> Self {
        Self {
            ttl: Duration::from_secs(settings.ttl_secs),
            capacity: settings.capacity,
            sweep_interval: Duration::from_secs(settings.sweep_interval_secs),
        }
    }

    /// Custom configuration (tests)
    pub fn custom(ttl_secs: u64, capacity: usize) -> Self {
        Self {
            ttl: Duration::from_secs(ttl_secs),
            capacity,
            sweep_interval: Duration::from_secs(60),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::from_settings(&CacheSettings::default())
    }
}

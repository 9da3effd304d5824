/// Logger configuration - runtime filtering state
///
/// Built once at startup from command-line arguments:
/// - `--debug-<tag>` enables Debug output for that tag
/// - `--verbose` enables Verbose output globally
/// - `--verbose-<tag>` enables Verbose output for that tag
use super::levels::LogLevel;
use super::tags::LogTag;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Minimum level threshold (messages above this are filtered)
    pub min_level: LogLevel,
    /// Tags with Debug output enabled via --debug-<tag>
    pub debug_tags: HashSet<&'static str>,
    /// Tags with Verbose output enabled via --verbose-<tag>
    pub verbose_tags: HashSet<&'static str>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            verbose_tags: HashSet::new(),
        }
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

/// Get a copy of the current logger configuration
pub fn get_logger_config() -> LoggerConfig {
    LOGGER_CONFIG.read().unwrap().clone()
}

/// Replace the logger configuration (used by tests)
pub fn set_logger_config(config: LoggerConfig) {
    *LOGGER_CONFIG.write().unwrap() = config;
}

/// Build the logger configuration from command-line arguments
pub fn init_from_args() {
    let mut config = LoggerConfig::default();

    // --log-level sets the base threshold; --verbose overrides it upward
    if let Some(level) = crate::arguments::get_arg_value("--log-level") {
        match LogLevel::from_str(&level) {
            Some(level) => config.min_level = level,
            None => eprintln!("Unknown log level '{}', keeping default", level),
        }
    }

    if crate::arguments::is_verbose_enabled() {
        config.min_level = LogLevel::Verbose;
    }

    for tag in LogTag::all() {
        let key = tag.to_debug_key();
        if crate::arguments::has_arg(&format!("--debug-{}", key)) {
            config.debug_tags.insert(key);
        }
        if crate::arguments::has_arg(&format!("--verbose-{}", key)) {
            config.verbose_tags.insert(key);
        }
    }

    set_logger_config(config);
}

/// Whether Debug output is enabled for a tag
pub fn is_debug_enabled_for_tag(tag: &LogTag) -> bool {
    let config = get_logger_config();
    config.min_level >= LogLevel::Debug || config.debug_tags.contains(tag.to_debug_key())
}

/// Whether Verbose output is enabled for a tag
pub fn is_verbose_enabled_for_tag(tag: &LogTag) -> bool {
    let config = get_logger_config();
    config.min_level >= LogLevel::Verbose || config.verbose_tags.contains(tag.to_debug_key())
}

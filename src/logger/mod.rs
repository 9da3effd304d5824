//! Structured logging for textscreen
//!
//! Clean, ergonomic logging API with:
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-module debug control via --debug-<module> flags
//! - Colored console output
//!
//! ## Usage
//!
//! ```rust
//! use textscreen::logger::{self, LogTag};
//!
//! logger::error(LogTag::Store, "Append failed");
//! logger::info(LogTag::System, "Service started");
//! logger::debug(LogTag::Cache, "Entry expired"); // Only if --debug-cache
//! ```
//!
//! ## Initialization
//!
//! Call `logger::init()` once at startup, before any logging occurs. It
//! scans command-line arguments for `--debug-<module>` / `--verbose`
//! flags and configures filtering.

mod config;
mod core;
mod format;
mod levels;
mod tags;

// Re-export public types
pub use config::{get_logger_config, init_from_args, set_logger_config, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger system from command-line arguments
pub fn init() {
    config::init_from_args();
}

/// Log at ERROR level (always shown, critical issues)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (important issues that need attention)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (standard operational messages)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level (shown only with --debug-<module> for this tag)
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (shown only with --verbose or --verbose-<module>)
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}

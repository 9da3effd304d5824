/// Centralized argument handling for textscreen
///
/// Consolidates command-line argument parsing and debug flag checking.
///
/// Features:
/// - Centralized CMD_ARGS storage with thread-safe access
/// - Debug flag checking functions for all modules
/// - Value flags (--config, --host, --port) with lookup helpers
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Global command-line arguments storage
/// Thread-safe singleton that stores arguments for access throughout the application
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Sets the global command-line arguments
/// Used by tests to override the default env::args() collection
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
/// Returns a vector clone to avoid holding the mutex lock
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => {
            // Fallback to env::args if mutex is poisoned
            env::args().collect()
        }
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Gets the value of a command-line argument that follows a flag
/// Returns None if the flag is not found or has no value
pub fn get_arg_value(flag: &str) -> Option<String> {
    let args = get_cmd_args();
    for (i, arg) in args.iter().enumerate() {
        if arg == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

// =============================================================================
// VALUE FLAGS
// =============================================================================

/// Config file path override (--config <path>)
pub fn get_config_path_override() -> Option<String> {
    get_arg_value("--config")
}

/// Bind host override (--host <addr>)
pub fn get_host_override() -> Option<String> {
    get_arg_value("--host")
}

/// Bind port override (--port <port>)
pub fn get_port_override() -> Option<u16> {
    get_arg_value("--port").and_then(|v| v.parse().ok())
}

// =============================================================================
// DEBUG FLAG CHECKING FUNCTIONS
// =============================================================================

/// Webserver module debug mode
pub fn is_debug_webserver_enabled() -> bool {
    has_arg("--debug-webserver")
}

/// Global verbose mode
pub fn is_verbose_enabled() -> bool {
    has_arg("--verbose")
}

/// Help requested (--help or -h)
pub fn is_help_requested() -> bool {
    has_arg("--help") || has_arg("-h")
}

/// Print usage information
pub fn print_help() {
    println!("textscreen - text classification screening service");
    println!();
    println!("USAGE:");
    println!("    textscreen [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --config <path>      Config file path (default: data/config.toml)");
    println!("    --host <addr>        Bind host (overrides config)");
    println!("    --port <port>        Bind port (overrides config)");
    println!("    --log-level <level>  Minimum log level (error/warn/info/debug/verbose)");
    println!("    --verbose            Enable verbose logging for all modules");
    println!("    --debug-<module>     Enable debug logging for one module");
    println!("                         (system, config, webserver, orchestrator,");
    println!("                          cache, store, engine, metrics)");
    println!("    --help, -h           Show this help");
}

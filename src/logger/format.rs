//! Log formatting and output with ANSI colors
//!
//! Colorized console output with aligned tag and level columns,
//! plus broken pipe handling for piped invocations.

use super::levels::LogLevel;
use super::tags::LogTag;
use chrono::Local;
use colored::*;
use std::io::{stdout, ErrorKind, Write};

/// Log format widths for alignment
const TAG_WIDTH: usize = 12;
const LEVEL_WIDTH: usize = 7;

/// Format and output a log message
pub fn format_and_log(tag: LogTag, level: LogLevel, message: &str) {
    let time = Local::now().format("%H:%M:%S").to_string();

    let line = format!(
        "{} [{}] [{}] {}",
        time.dimmed(),
        format_tag(&tag),
        format_level(level),
        message
    );

    print_stdout_safe(&line);
}

/// Format a tag with appropriate color
fn format_tag(tag: &LogTag) -> ColoredString {
    let padded = format!("{:<width$}", tag.as_str(), width = TAG_WIDTH);
    match tag {
        LogTag::System => padded.bright_yellow().bold(),
        LogTag::Config => padded.yellow().bold(),
        LogTag::Webserver => padded.bright_cyan().bold(),
        LogTag::Orchestrator => padded.bright_green().bold(),
        LogTag::Cache => padded.bright_blue().bold(),
        LogTag::Store => padded.bright_magenta().bold(),
        LogTag::Engine => padded.bright_white().bold(),
        LogTag::Metrics => padded.cyan().bold(),
    }
}

/// Format a level with appropriate color
fn format_level(level: LogLevel) -> ColoredString {
    let padded = format!("{:<width$}", level.as_str(), width = LEVEL_WIDTH);
    match level {
        LogLevel::Error => padded.bright_red().bold(),
        LogLevel::Warning => padded.bright_yellow(),
        LogLevel::Info => padded.bright_green(),
        LogLevel::Debug => padded.bright_blue(),
        LogLevel::Verbose => padded.dimmed(),
    }
}

/// Print to stdout, swallowing broken pipe errors
///
/// Piping output into `head` or a closed pager must not panic the service.
fn print_stdout_safe(line: &str) {
    let mut out = stdout();
    if let Err(e) = writeln!(out, "{}", line) {
        if e.kind() != ErrorKind::BrokenPipe {
            eprintln!("{}", line);
        }
    }
}

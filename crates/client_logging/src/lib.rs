#![deny(missing_docs)]
//! Shared logging utilities for the lecture client workspace.
//!
//! This crate provides the `client_*` logging macros used by the core, engine
//! and app crates, plus the logger initializers for the binary and for tests.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use thiserror::Error;

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! client_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! client_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! client_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! client_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! client_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogDestination {
    /// Write to a log file only.
    File,
    /// Write to the terminal (stderr for warnings and errors).
    #[default]
    Terminal,
    /// Write to both the log file and the terminal.
    Both,
}

/// Why [`initialize`] installed no logger.
#[derive(Debug, Error)]
pub enum LogInitError {
    /// The log file could not be created and no other destination was asked for.
    #[error("could not create log file {}: {source}", path.display())]
    LogFile {
        /// Path that was tried.
        path: PathBuf,
        /// Underlying IO failure.
        source: io::Error,
    },
    /// A global logger was installed earlier in this process.
    #[error("a logger is already installed")]
    AlreadyInitialized,
}

/// Initializes the global logger.
///
/// `log_file` is only created for `File` and `Both`. For `Both`, a file that
/// cannot be created is reported on stderr and the terminal logger still
/// installs.
pub fn initialize(
    destination: LogDestination,
    level: LevelFilter,
    log_file: &Path,
) -> Result<(), LogInitError> {
    let config = build_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if matches!(destination, LogDestination::Terminal | LogDestination::Both) {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if matches!(destination, LogDestination::File | LogDestination::Both) {
        match File::create(log_file) {
            Ok(file) => loggers.push(WriteLogger::new(level, config, file)),
            Err(source) if loggers.is_empty() => {
                return Err(LogInitError::LogFile {
                    path: log_file.to_path_buf(),
                    source,
                });
            }
            Err(err) => {
                eprintln!("Warning: could not create log file at {:?}: {}", log_file, err);
            }
        }
    }

    CombinedLogger::init(loggers).map_err(|_| LogInitError::AlreadyInitialized)
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

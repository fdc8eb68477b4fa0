// src/logging.rs
//
// Log macros keep the short call-site names (logf!/logd!/loge!) but route
// through the `log` facade. The backend is simplelog: a file logger under
// STORE_DIR for the GUI, plus a stderr logger for the CLI.

use std::fs::{self, File};
use std::path::PathBuf;

use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use crate::config::consts::{LOG_FILE, STORE_DIR};

fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

fn file_logger(level: LevelFilter) -> Option<Box<dyn SharedLogger>> {
    if fs::create_dir_all(STORE_DIR).is_err() {
        return None;
    }
    let file = File::options().create(true).append(true).open(log_path()).ok()?;
    Some(WriteLogger::new(level, Config::default(), file))
}

/// GUI: log to `.store/debug.log` only. Safe to call more than once.
pub fn init_file(level: LevelFilter) {
    if let Some(logger) = file_logger(level) {
        // A second init returns SetLoggerError; the first logger stays active.
        let _ = CombinedLogger::init(vec![logger]);
    }
}

/// CLI: warnings (or more, with `-v`) on stderr, everything at debug in the file.
pub fn init_cli(verbosity: u8) {
    let term_level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        term_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    if let Some(file) = file_logger(LevelFilter::Debug) {
        loggers.push(file);
    }
    let _ = CombinedLogger::init(loggers);
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::log::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::log::error!($($arg)*)
    };
}

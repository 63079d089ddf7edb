//! Logger setup helpers. The calculator core only emits `log` macro calls;
//! a hosting binary decides where they go by initializing one of these
//! configurations at startup.

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::File;

/// Terminal-only logging at the given level. Repeated initialization is a
/// no-op, so tests and demos can call this freely.
pub fn init_console_logger(level: LevelFilter) {
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}

/// Terminal logging plus an optional log file. A file that cannot be created
/// is skipped rather than aborting startup.
pub fn init_combined_logger(level: LevelFilter, log_file: Option<&str>) {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(name) = log_file {
        if let Ok(file) = File::create(name) {
            loggers.push(WriteLogger::new(level, Config::default(), file));
        }
    }
    let _ = CombinedLogger::init(loggers);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_initialization_does_not_panic() {
        init_console_logger(LevelFilter::Info);
        init_console_logger(LevelFilter::Debug);
        init_combined_logger(LevelFilter::Info, None);
    }
}

#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Log level used when `SEABATTLE_LOG` is unset or unparsable.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Initialize logging with a level taken from the `SEABATTLE_LOG` environment variable.
/// Logs go to stderr so they do not interleave with the boards on stdout.
pub fn init_logging() {
    let level = env::var("SEABATTLE_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

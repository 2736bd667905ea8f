#![cfg(feature = "std")]

use std::env;
use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level, e.g. `BATTLESHIP_LOG=debug`.
pub const LOG_ENV: &str = "BATTLESHIP_LOG";

/// Writes to stderr so board views and JSON reports on stdout stay clean.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // drop the crate prefix: `battleship_hunt::opponent` -> `opponent`
        let target = record.target();
        let module = target.rsplit("::").next().unwrap_or(target);
        eprintln!("{:<5} {}: {}", record.level(), module, record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `value`, falling back to `info` when unset or unknown.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .map(str::trim)
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level taken from [`LOG_ENV`].
///
/// Calling it twice keeps the first logger.
pub fn init_logging() {
    let level = parse_level(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

//! Browser console logging
//!
//! `tracing` events are forwarded as `log` records (tracing's `log` feature)
//! and written to `console.*` by `console_log`.

use tracing::Level;

/// Install the console logger. Only the first call takes effect.
pub fn init(level: Level) {
    if console_log::init_with_level(to_log_level(level)).is_ok() {
        tracing::debug!("Console logging at {}", level);
    }
}

fn to_log_level(level: Level) -> log::Level {
    match level {
        Level::ERROR => log::Level::Error,
        Level::WARN => log::Level::Warn,
        Level::INFO => log::Level::Info,
        Level::DEBUG => log::Level::Debug,
        Level::TRACE => log::Level::Trace,
    }
}

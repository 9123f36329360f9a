//! Console Logger
//!
//! `log` backend for WASM frontends. Records go to the browser console
//! with a `[target]` prefix, and the most recent ones are kept in a
//! fixed-size circular buffer so the app can dump them on demand
//! (see `dump_recent_records`).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of records kept in the circular buffer
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Browser console logger with a bounded history
pub struct ConsoleLogger {
    app_name: String,
    level: LevelFilter,
    capacity: usize,
    recent: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(app_name: &str, level: LevelFilter, capacity: usize) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
            capacity: capacity.max(1),
            recent: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Snapshot of buffered records, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.recent.lock() {
            Ok(buf) => buf.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn remember(&self, line: String) {
        if let Ok(mut buf) = self.recent.lock() {
            if buf.len() == self.capacity {
                buf.pop_front();
            }
            buf.push_back(line);
        }
    }
}

/// Format a record as `[tag] LEVEL message`.
///
/// The tag is the last path segment of the target, so
/// `shop_cart_ui::controller` logs as `[controller]`. Records from the
/// crate root use the app name instead.
pub fn format_record(app_name: &str, level: Level, target: &str, message: &str) -> String {
    let tag = match target.rsplit_once("::") {
        Some((_, last)) => last,
        None => app_name,
    };
    format!("[{}] {} {}", tag, level, message)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(
            &self.app_name,
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        write_console(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, _line: &str) {}

/// Install the console logger as the global `log` backend.
///
/// Calling it twice returns the `SetLoggerError` from the second attempt.
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(app_name, level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Buffered records of the global logger (empty before `init_logger`)
pub fn recent_records() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent).unwrap_or_default()
}

/// Buffered records as one newline-separated block
pub fn dump_recent_records() -> String {
    recent_records().join("\n")
}

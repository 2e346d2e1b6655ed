//! Rolling Logger
//!
//! `log` backend that keeps the most recent records in a circular buffer and
//! forwards every record to a sink (browser console, stderr, ...).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

pub const DEFAULT_CAPACITY: usize = 200;

/// Receives each formatted line
pub type Sink = Box<dyn Fn(Level, &str) + Send + Sync>;

/// A formatted record kept in the buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub level: Level,
    pub text: String,
}

pub struct RollingLogger {
    capacity: usize,
    level: LevelFilter,
    buffer: Mutex<VecDeque<LogLine>>,
    sink: Sink,
}

impl RollingLogger {
    pub fn new(capacity: usize, level: LevelFilter, sink: Sink) -> Self {
        Self {
            capacity: capacity.max(1),
            level,
            buffer: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
            sink,
        }
    }

    fn push(&self, line: LogLine) {
        if let Ok(mut buffer) = self.buffer.lock() {
            if buffer.len() == self.capacity {
                buffer.pop_front();
            }
            buffer.push_back(line);
        }
    }

    /// Up to `limit` most recent lines, oldest first
    pub fn recent(&self, limit: usize) -> Vec<LogLine> {
        match self.buffer.lock() {
            Ok(buffer) => {
                let skip = buffer.len().saturating_sub(limit);
                buffer.iter().skip(skip).cloned().collect()
            }
            Err(_) => Vec::new(),
        }
    }

    pub fn clear(&self) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.clear();
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let text = format!(
            "{} {:<5} {}: {}",
            chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            record.level(),
            record.target(),
            record.args()
        );
        (self.sink)(record.level(), &text);
        self.push(LogLine { level: record.level(), text });
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install the global logger. Fails if a logger is already set.
pub fn init(capacity: usize, level: LevelFilter, sink: Sink) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(capacity, level, sink));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recent lines from the global logger; empty before `init`
pub fn recent(limit: usize) -> Vec<LogLine> {
    LOGGER.get().map(|logger| logger.recent(limit)).unwrap_or_default()
}

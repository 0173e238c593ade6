//! Logging for the apply pipeline.
//!
//! Library code never talks to a global logger for the events callers care
//! about (each file write, the final result). Those go through a [`Logger`]
//! handed in by the caller. The binary uses [`LogLogger`], which forwards to
//! the `log` facade configured once by [`init_logging`].

use std::cell::RefCell;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::Local;
use log::LevelFilter;

use crate::constants::{verbosity, LOG_DATE_FORMAT};
use crate::error::Result;

/// Sink for the observable events of a run.
pub trait Logger {
    fn info(&self, message: &str);

    fn error(&self, message: &str);

    /// Diagnostic detail; dropped unless the implementation cares.
    fn debug(&self, _message: &str) {}
}

/// Forwards every event to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogLogger;

impl Logger for LogLogger {
    fn info(&self, message: &str) {
        log::info!("{message}");
    }

    fn error(&self, message: &str) {
        log::error!("{message}");
    }

    fn debug(&self, message: &str) {
        log::debug!("{message}");
    }
}

/// Keeps every event in memory, prefixed with its level.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: RefCell<Vec<String>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    fn push(&self, level: &str, message: &str) {
        self.lines.borrow_mut().push(format!("[{level}] {message}"));
    }
}

impl Logger for MemoryLogger {
    fn info(&self, message: &str) {
        self.push("INFO", message);
    }

    fn error(&self, message: &str) {
        self.push("ERROR", message);
    }
}

/// Map `--verbose` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

/// Writes every log line to stdout and, when configured, to a log file.
struct TeeWriter {
    file: Option<File>,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        std::io::stdout().write_all(buf)?;
        if let Some(file) = self.file.as_mut() {
            file.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stdout().flush()?;
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}

/// Installs the process-wide `env_logger` backend.
///
/// Lines look like `[2024/05/01 09:14:03 AM] [INFO] writing /etc/app.conf`.
/// `RUST_LOG` is applied on top of the level derived from `verbose`.
pub fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<()> {
    let file = match log_file {
        Some(path) => Some(OpenOptions::new().create(true).append(true).open(path)?),
        None => None,
    };

    env_logger::Builder::new()
        .filter_level(get_log_level_from_verbose(verbose))
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                Local::now().format(LOG_DATE_FORMAT),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(TeeWriter { file })))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {e}"))?;

    Ok(())
}

//! Logging setup.
//!
//! Records from the `log` macros are fanned out by a `fern` dispatch to an
//! in-memory [`Logger`] buffer (for an on-screen activity log) and, when
//! enabled, to a log file under the platform data directory.

use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::{LoggingConfig, APP_DIR};

/// Entries kept in memory before the oldest are dropped
const MAX_BUFFERED_LOGS: usize = 500;

/// Shared in-memory log buffer that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
            if logs.len() > MAX_BUFFERED_LOGS {
                let overflow = logs.len() - MAX_BUFFERED_LOGS;
                logs.drain(..overflow);
            }
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Path of the log file written when file logging is enabled
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_DIR).join("realty-crm.log"))
    }

    /// Build the dispatch for `config`, feeding this buffer.
    pub fn dispatch(&self, config: &LoggingConfig) -> Result<fern::Dispatch> {
        let sink = self.clone();
        let mut dispatch = fern::Dispatch::new()
            .level(config.level_filter()?)
            .level_for("reqwest", log::LevelFilter::Warn)
            .level_for("hyper", log::LevelFilter::Warn)
            .chain(fern::Output::call(move |record| {
                sink.log(format!("{} {}", record.level(), record.args()));
            }));

        if config.enabled {
            let path = Self::get_log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;

            dispatch = dispatch.chain(
                fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "{} [{}] {}: {}",
                            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                            record.level(),
                            record.target(),
                            message
                        ))
                    })
                    .chain(file),
            );
        }

        Ok(dispatch)
    }

    /// Install this logger as the global `log` backend.
    pub fn init(&self, config: &LoggingConfig) -> Result<()> {
        self.dispatch(config)?
            .apply()
            .context("Failed to install logger")
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

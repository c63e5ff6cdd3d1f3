//! Logger module
//!
//! Provides the explicit logging handle passed into the request handler:
//! - Server lifecycle logging
//! - One access line per request, in a configurable format
//! - Error and warning logging
//! - Console output mirrored to optional log files
//!
//! The handle is opened at startup and flushed at shutdown; there is no global
//! logger.

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::{Config, LoggingConfig};
use std::net::SocketAddr;
use writer::LogWriter;

/// Logging handle shared by the server and request handlers
pub struct Logger {
    writer: LogWriter,
    access_log: bool,
    access_log_format: String,
}

impl Logger {
    /// Open log targets described by the logging configuration
    pub fn from_config(config: &LoggingConfig) -> std::io::Result<Self> {
        let writer = LogWriter::new(
            config.access_log_file.as_deref(),
            config.error_log_file.as_deref(),
        )?;
        Ok(Self {
            writer,
            access_log: config.access_log,
            access_log_format: config.access_log_format.clone(),
        })
    }

    pub fn info(&self, message: &str) {
        self.writer.write_access(message);
    }

    pub fn error(&self, message: &str) {
        self.writer.write_error(&format!("[ERROR] {message}"));
    }

    pub fn warning(&self, message: &str) {
        self.writer.write_error(&format!("[WARN] {message}"));
    }

    /// Write one formatted access log entry, if access logging is enabled
    pub fn access(&self, entry: &AccessLogEntry) {
        if self.access_log {
            self.writer.write_access(&entry.format(&self.access_log_format));
        }
    }

    pub fn log_server_start(&self, addr: &SocketAddr, config: &Config) {
        self.info("======================================");
        self.info("qrl server started");
        self.info(&format!("Listening on: http://{addr}"));
        if let Some(workers) = config.server.workers {
            self.info(&format!("Worker threads: {workers}"));
        }
        self.info(&format!("Index document: {}", config.qr.index_file));
        self.info(&format!("Max body size: {} bytes", config.qr.max_body_size));
        if let Some(ref path) = config.logging.access_log_file {
            self.info(&format!("Access log: {path}"));
        }
        if let Some(ref path) = config.logging.error_log_file {
            self.info(&format!("Error log: {path}"));
        }
        self.info("======================================");
    }

    pub fn log_connection_error(&self, err: &impl std::fmt::Debug) {
        self.error(&format!("Failed to serve connection: {err:?}"));
    }

    pub fn log_shutdown(&self, active_connections: usize) {
        self.info(&format!(
            "Shutting down, {active_connections} connection(s) still open"
        ));
    }

    /// Flush all targets; called once at process shutdown
    pub fn flush(&self) {
        self.writer.flush();
    }
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Logging utilities
//!
//! Two independent concerns live here:
//!
//! - [`setup_logger`] installs the process-wide `tracing` subscriber used by
//!   the library's own diagnostics.
//! - [`RequestLogger`] is the per-session request log. It is handed to the
//!   session at `login` time instead of mutating any global transport state,
//!   so two facades with different log settings never interfere.

use crate::constants::{LOG_STDERR, LOG_STDOUT};
use crate::error::AppError;
use crate::model::http::{Params, Verb, format_params};
use reqwest::StatusCode;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::{Mutex, Once};
use std::time::Duration;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs the global `tracing` subscriber.
///
/// The level is read from the `LOGLEVEL` environment variable
/// (`TRACE`, `DEBUG`, `INFO`, `WARN`, `ERROR`), defaulting to `INFO`.
/// Calling it more than once is harmless.
pub fn setup_logger() {
    INIT.call_once(|| {
        let log_level = std::env::var("LOGLEVEL")
            .unwrap_or_else(|_| "INFO".to_string())
            .to_uppercase();

        let level = match log_level.as_str() {
            "TRACE" => Level::TRACE,
            "DEBUG" => Level::DEBUG,
            "WARN" => Level::WARN,
            "ERROR" => Level::ERROR,
            _ => Level::INFO,
        };

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            warn!("A global tracing subscriber was already installed");
        }
    });
}

/// Outgoing request as seen by a [`RequestLogger`]
#[derive(Debug, Clone, Copy)]
pub struct RequestEvent<'a> {
    /// Correlation id shared with the matching [`ResponseEvent`]
    pub id: &'a str,
    /// HTTP verb
    pub verb: Verb,
    /// Fully resolved URL, without the parameters
    pub url: &'a str,
    /// Merged parameters sent with the request
    pub params: &'a Params,
}

/// Outcome of a request as seen by a [`RequestLogger`]
#[derive(Debug, Clone, Copy)]
pub struct ResponseEvent<'a> {
    /// Correlation id shared with the matching [`RequestEvent`]
    pub id: &'a str,
    /// Status code, when the server answered at all
    pub status: Option<StatusCode>,
    /// Length of the response body in bytes
    pub body_len: usize,
    /// Wall-clock duration of the call
    pub elapsed: Duration,
    /// Error, if the call failed
    pub error: Option<&'a AppError>,
}

/// Sink receiving one entry per request and one per response
pub trait RequestLogger: Send + Sync + fmt::Debug {
    /// Called right before the transport is invoked
    fn log_request(&self, event: &RequestEvent<'_>);
    /// Called once the transport returned, successfully or not
    fn log_response(&self, event: &ResponseEvent<'_>);
}

/// Formats the request line written by [`WriterRequestLog`]
pub fn format_request(event: &RequestEvent<'_>) -> String {
    let params = format_params(event.params);
    if params.is_empty() {
        format!("[{}] {} {}", event.id, event.verb.as_method(), event.url)
    } else {
        format!(
            "[{}] {} {} {}",
            event.id,
            event.verb.as_method(),
            event.url,
            params
        )
    }
}

/// Formats the response line written by [`WriterRequestLog`]
pub fn format_response(event: &ResponseEvent<'_>) -> String {
    let secs = event.elapsed.as_secs_f64();
    match (event.status, event.error) {
        (Some(status), _) => format!(
            "[{}] # => {} | {} bytes | {:.3}s",
            event.id, status, event.body_len, secs
        ),
        (None, Some(error)) => format!("[{}] # => {} | {:.3}s", event.id, error, secs),
        (None, None) => format!("[{}] # => no response | {:.3}s", event.id, secs),
    }
}

/// Request log writing plain text lines to a file or a standard stream
pub struct WriterRequestLog {
    destination: String,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl WriterRequestLog {
    /// Opens the log named by `destination`.
    ///
    /// `stdout` and `stderr` select the standard streams; anything else is a
    /// file path opened in append mode (created when missing).
    pub fn open(destination: &str) -> Result<Self, AppError> {
        let writer: Box<dyn Write + Send> = match destination {
            LOG_STDOUT => Box::new(io::stdout()),
            LOG_STDERR => Box::new(io::stderr()),
            path => Box::new(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| {
                        io::Error::new(e.kind(), format!("cannot open request log {path}: {e}"))
                    })?,
            ),
        };
        Ok(Self {
            destination: destination.to_string(),
            writer: Mutex::new(writer),
        })
    }

    /// Where the lines go
    pub fn destination(&self) -> &str {
        &self.destination
    }

    fn write_line(&self, line: &str) {
        let Ok(mut writer) = self.writer.lock() else {
            return;
        };
        if let Err(e) = writeln!(writer, "{line}").and_then(|_| writer.flush()) {
            warn!("Failed to write request log {}: {}", self.destination, e);
        }
    }
}

impl fmt::Debug for WriterRequestLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterRequestLog")
            .field("destination", &self.destination)
            .finish()
    }
}

impl RequestLogger for WriterRequestLog {
    fn log_request(&self, event: &RequestEvent<'_>) {
        self.write_line(&format_request(event));
    }

    fn log_response(&self, event: &ResponseEvent<'_>) {
        self.write_line(&format_response(event));
    }
}

/// Request log forwarding every entry to `tracing` at `info` level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRequestLog;

impl RequestLogger for TracingRequestLog {
    fn log_request(&self, event: &RequestEvent<'_>) {
        info!("{}", format_request(event));
    }

    fn log_response(&self, event: &ResponseEvent<'_>) {
        info!("{}", format_response(event));
    }
}

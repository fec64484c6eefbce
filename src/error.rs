/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types for the RightScale API facade
//!
//! Every failure surfaced by [`crate::application::client::RightApi`] is an
//! [`AppError`]. The variants fall into three groups:
//!
//! - configuration failures raised by `login`, including a request log that
//!   cannot be opened
//! - argument validation failures raised by `send` before any I/O happens
//! - remote call failures (HTTP status, network, missing session)

use reqwest::StatusCode;
use std::fmt;
use std::sync::Arc;

/// Main error type for the library
///
/// The error is cheap to clone so the facade can keep a copy of the last
/// failure for [`crate::application::client::RightApi::code`] while still
/// handing one back to the caller.
#[derive(Debug, Clone)]
pub enum AppError {
    /// `login` could not build a usable session
    Configuration(String),
    /// Empty endpoint path or unsupported HTTP verb
    InvalidArgument(String),
    /// The remote API answered with a non-success status
    RemoteCall {
        /// HTTP status returned by the server
        status: StatusCode,
        /// Raw response body, possibly empty
        body: String,
    },
    /// Transport level failure (connection refused, timeout, TLS...)
    Network(Arc<reqwest::Error>),
    /// `send` was called before a successful `login`
    NotLoggedIn,
    /// The request log could not be opened at `login`
    Io(Arc<std::io::Error>),
}

impl AppError {
    /// Returns the HTTP status carried by a [`AppError::RemoteCall`] or a
    /// status-bearing network error
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::RemoteCall { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// True for every failure that happened while talking to the remote API
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            AppError::RemoteCall { .. } | AppError::Network(_) | AppError::NotLoggedIn
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Configuration(msg) => write!(f, "configuration error: {msg}"),
            AppError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            AppError::RemoteCall { status, body } if body.is_empty() => {
                write!(f, "remote call failed: {status}")
            }
            AppError::RemoteCall { status, body } => {
                write!(f, "remote call failed: {status}: {body}")
            }
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::NotLoggedIn => write!(f, "not logged in"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e.as_ref()),
            AppError::Io(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(Arc::new(e))
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(Arc::new(e))
    }
}

impl From<reqwest::header::InvalidHeaderName> for AppError {
    fn from(e: reqwest::header::InvalidHeaderName) -> Self {
        AppError::Configuration(format!("invalid header name: {e}"))
    }
}

impl From<reqwest::header::InvalidHeaderValue> for AppError {
    fn from(e: reqwest::header::InvalidHeaderValue) -> Self {
        AppError::Configuration(format!("invalid header value: {e}"))
    }
}

//! # right-api
//!
//! A small facade over `reqwest` for the RightScale cloud-management REST API.
//!
//! The facade stores credentials, builds a session at `login`, and exposes a
//! single generic `send` operation plus accessors describing the outcome of
//! the last call (headers, duration, created resource id, error).
//!
//! ```ignore
//! use right_api::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let mut api = RightApi::new(ClientConfig::from_env());
//!     api.login(LoginOptions::from_env())?;
//!     if let Some(servers) = api.send("servers", "get", &Params::new()).await? {
//!         info!("{} bytes in {:.2}s", servers.body.len(), api.time());
//!     }
//!     Ok(())
//! }
//! ```

/// Facade and configuration
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Requests, responses and the transport seam
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Session construction
pub mod session;
/// Environment, id and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # right-api Prelude
//!
//! Brings the facade, its configuration and the error type into scope.
//!
//! ```rust
//! use right_api::prelude::*;
//!
//! let api = RightApi::new(ClientConfig::new());
//! assert!(!api.is_logged_in());
//! ```

// ============================================================================
// FACADE AND CONFIGURATION
// ============================================================================

/// The RightScale API facade
pub use crate::application::client::RightApi;

/// Configuration types
pub use crate::application::config::{
    ClientConfig, Credentials, ErrorPolicy, LoggingConfig, LoginOptions,
};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// REQUESTS, RESPONSES AND TRANSPORT
// ============================================================================

/// Verbs and parameters
pub use crate::model::http::{Params, Verb};

/// Raw responses and the last-call record
pub use crate::model::responses::{ApiResponse, CallRecord};

/// Transport seam
pub use crate::model::transport::{ReqwestTransport, Transport, TransportRequest};

/// Session produced by `login`
pub use crate::session::Session;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::{
    RequestEvent, RequestLogger, ResponseEvent, TracingRequestLog, WriterRequestLog, setup_logger,
};

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use reqwest::StatusCode;
pub use reqwest::header::HeaderMap;
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};

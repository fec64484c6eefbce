/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Session construction
//!
//! A [`Session`] is what `login` produces: the account URL, the credential
//! bound transport and the request log, frozen for the lifetime of the
//! session.

use crate::application::config::{ClientConfig, LoggingConfig, LoginOptions};
use crate::error::AppError;
use crate::model::transport::{ReqwestTransport, Transport};
use crate::utils::logger::{RequestLogger, WriterRequestLog};
use chrono::{DateTime, Utc};
use reqwest::Url;
use std::sync::Arc;
use tracing::{debug, info};

/// A logged-in connection to one RightScale account
#[derive(Debug, Clone)]
pub struct Session {
    /// `base_url` followed by the account number
    pub resolved_url: String,
    /// Account number
    pub account: String,
    /// User the session authenticates as, if any
    pub username: Option<String>,
    /// API version sent with every call of this session
    pub api_version: String,
    /// When `login` built the session
    pub opened_at: DateTime<Utc>,
    transport: Arc<dyn Transport>,
    request_log: Option<Arc<dyn RequestLogger>>,
}

impl Session {
    /// Builds a session backed by a `reqwest` transport
    pub fn open(config: &ClientConfig, options: &LoginOptions) -> Result<Self, AppError> {
        let transport = ReqwestTransport::new(&options.credentials, config.timeout())?;
        Self::with_transport(config, options, Arc::new(transport))
    }

    /// Builds a session around a caller-supplied transport
    pub fn with_transport(
        config: &ClientConfig,
        options: &LoginOptions,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, AppError> {
        options.credentials.validate()?;
        let resolved_url = resolve_url(&config.base_url, &options.account)?;
        let request_log = open_request_log(&config.logging)?;

        info!("Session opened for account {}", options.account);
        debug!("Resolved API URL: {}", resolved_url);

        Ok(Self {
            resolved_url,
            account: options.account.clone(),
            username: options.credentials.username.clone(),
            api_version: config.api_version.clone(),
            opened_at: Utc::now(),
            transport,
            request_log,
        })
    }

    /// The transport bound to this session
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// The request log, when logging is enabled
    pub fn request_log(&self) -> Option<&Arc<dyn RequestLogger>> {
        self.request_log.as_ref()
    }

    /// Human-readable description of the session
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "{} via {} (api version {}, opened {})",
            self.resolved_url,
            self.transport.describe(),
            self.api_version,
            self.opened_at.to_rfc3339()
        )
    }
}

/// Concatenates the API root and the account number and checks the result is
/// an absolute URL
pub fn resolve_url(base_url: &str, account: &str) -> Result<String, AppError> {
    if account.trim().is_empty() {
        return Err(AppError::Configuration("no account given".to_string()));
    }
    let resolved = format!("{base_url}{account}");
    Url::parse(&resolved)
        .map_err(|e| AppError::Configuration(format!("invalid API URL {resolved}: {e}")))?;
    Ok(resolved)
}

/// Opens the request log described by `logging`, if enabled
pub fn open_request_log(
    logging: &LoggingConfig,
) -> Result<Option<Arc<dyn RequestLogger>>, AppError> {
    if !logging.enabled {
        return Ok(None);
    }
    if let Some(sink) = &logging.sink {
        return Ok(Some(sink.clone()));
    }
    let destination = logging.destination_or_default();
    debug!("Request log: {}", destination);
    Ok(Some(Arc::new(WriterRequestLog::open(destination)?)))
}

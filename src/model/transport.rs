/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! The HTTP transport behind a session
//!
//! The facade never talks to `reqwest` directly: it hands a fully built
//! [`TransportRequest`] to a [`Transport`]. [`ReqwestTransport`] is the
//! implementation used by `login`; other implementations can be injected with
//! `login_with_transport`.

use crate::application::config::Credentials;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::http::{Params, Verb};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// One HTTP call, ready to be executed
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP verb
    pub verb: Verb,
    /// Absolute URL, possibly already carrying a query string
    pub url: String,
    /// Parameters: query string for GET/DELETE, form body for POST/PUT
    pub params: Params,
    /// Per-request headers
    pub headers: HeaderMap,
}

/// Credential-bound HTTP client
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Executes the request.
    ///
    /// Implementations return `Err` for transport failures and for any status
    /// outside the 2xx/3xx range.
    async fn execute(&self, request: TransportRequest) -> Result<ApiResponse, AppError>;

    /// Human-readable description for `show_connection`
    fn describe(&self) -> String;
}

/// Builds the default header map from the credential headers
pub fn credential_headers(credentials: &Credentials) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    for (name, value) in &credentials.headers {
        headers.insert(HeaderName::from_str(name)?, HeaderValue::from_str(value)?);
    }
    Ok(headers)
}

/// [`Transport`] backed by `reqwest`
pub struct ReqwestTransport {
    client: Client,
    username: Option<String>,
    password: Option<String>,
    header_names: Vec<String>,
}

impl ReqwestTransport {
    /// Builds a client carrying the credential headers and the user agent
    pub fn new(credentials: &Credentials, timeout: Option<Duration>) -> Result<Self, AppError> {
        credentials.validate()?;
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(credential_headers(credentials)?);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Configuration(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            client,
            username: credentials.username.clone(),
            password: credentials.password.clone(),
            header_names: credentials.headers.keys().cloned().collect(),
        })
    }
}

impl fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("headers", &self.header_names)
            .finish()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> Result<ApiResponse, AppError> {
        let mut builder = self
            .client
            .request(request.verb.as_method(), &request.url)
            .headers(request.headers);

        if let Some(username) = &self.username {
            builder = builder.basic_auth(username, self.password.as_ref());
        }

        builder = if request.verb.has_body() {
            builder.form(&request.params)
        } else {
            builder.query(&request.params)
        };

        let response = builder.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        let headers = response.headers().clone();
        let body = response.text().await?;

        if status.is_success() || status.is_redirection() {
            return Ok(ApiResponse::new(status, headers, body));
        }

        debug!("Request failed with status {}: {}", status, body);
        Err(AppError::RemoteCall { status, body })
    }

    fn describe(&self) -> String {
        format!(
            "reqwest (user: {}, headers: [{}])",
            self.username.as_deref().unwrap_or("-"),
            self.header_names.join(", ")
        )
    }
}

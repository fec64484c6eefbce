/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! The RightScale API facade
//!
//! ```ignore
//! use right_api::prelude::*;
//!
//! let mut api = RightApi::new(ClientConfig::new().with_logging(None));
//! api.login(LoginOptions::new("1234", Credentials::basic("user", "pass")))?;
//!
//! // list servers
//! api.send("servers", "get", &Params::new()).await?;
//!
//! // create a deployment
//! let mut params = Params::new();
//! params.insert("deployment[nickname]".into(), "my_deployment_name".into());
//! api.send("deployments", "post", &params).await?;
//! println!("created {:?} in {}s", api.resource_id(), api.time());
//! ```

use crate::application::config::{ClientConfig, LoginOptions};
use crate::constants::{API_VERSION_HEADER, DEFAULT_VERB, SEARCH_PATH};
use crate::error::AppError;
use crate::model::http::{Params, Verb, join_url, merge_version_params, validate_path};
use crate::model::responses::{ApiResponse, CallRecord};
use crate::model::transport::{Transport, TransportRequest};
use crate::session::Session;
use crate::utils::id::request_id;
use crate::utils::logger::{RequestEvent, ResponseEvent};
use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

/// Facade over the RightScale REST API
///
/// Holds the configuration, at most one [`Session`] and the record of the
/// last call. Calls take `&mut self`: one facade serves one caller at a time.
///
/// Failures caught by [`RightApi::login`] and [`RightApi::send`] go through
/// the configured [`crate::application::config::ErrorPolicy`]: they are
/// logged unless `print_errors` is off, and returned as `Err` only when
/// `rethrow_errors` is on. Otherwise `send` yields `Ok(None)` and the error is
/// available from [`RightApi::code`]. [`RightApi::try_send`] ignores the
/// policy and always returns `Err`.
#[derive(Debug)]
pub struct RightApi {
    config: ClientConfig,
    session: Option<Session>,
    last_call: CallRecord,
}

impl Default for RightApi {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl RightApi {
    /// Creates an unconnected facade
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            session: None,
            last_call: CallRecord::default(),
        }
    }

    /// Current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Mutable configuration.
    ///
    /// Connection settings (URL, version, logging, timeout) take effect at the
    /// next `login`; the error policy applies immediately.
    pub fn config_mut(&mut self) -> &mut ClientConfig {
        &mut self.config
    }

    /// True once `login` succeeded
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    /// The live session, if any
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Builds the session for `options.account` with a `reqwest` transport.
    ///
    /// Returns `Ok(true)` on success. On failure the facade is left without a
    /// session and, unless `rethrow_errors` is set, `Ok(false)` is returned.
    pub fn login(&mut self, options: LoginOptions) -> Result<bool, AppError> {
        let session = Session::open(&self.config, &options);
        self.finish_login(session)
    }

    /// Same as [`RightApi::login`] with a caller-supplied transport
    pub fn login_with_transport(
        &mut self,
        options: LoginOptions,
        transport: Arc<dyn Transport>,
    ) -> Result<bool, AppError> {
        let session = Session::with_transport(&self.config, &options, transport);
        self.finish_login(session)
    }

    fn finish_login(&mut self, session: Result<Session, AppError>) -> Result<bool, AppError> {
        match session {
            Ok(session) => {
                info!("Logged in to {}", session.resolved_url);
                self.session = Some(session);
                Ok(true)
            }
            Err(e) => {
                self.session = None;
                self.handle_error("login", e).map(|_| false)
            }
        }
    }

    /// Performs `verb` on `path` relative to the account URL.
    ///
    /// `verb` is one of `get`, `post`, `put`, `delete` in any case. The API
    /// version is merged into `params` as `x_api_version` and `api_version`.
    /// Returns `Ok(None)` when the call failed and the error policy swallowed
    /// the failure.
    pub async fn send(
        &mut self,
        path: &str,
        verb: &str,
        params: &Params,
    ) -> Result<Option<ApiResponse>, AppError> {
        match self.try_send(path, verb, params).await {
            Ok(response) => Ok(Some(response)),
            Err(e) => self.handle_error("send", e).map(|_| None),
        }
    }

    /// Like [`RightApi::send`] but always returns failures as `Err`
    pub async fn try_send(
        &mut self,
        path: &str,
        verb: &str,
        params: &Params,
    ) -> Result<ApiResponse, AppError> {
        self.record(path, verb.parse::<Verb>(), params).await
    }

    /// Like [`RightApi::send`] with an already typed verb
    pub async fn call(
        &mut self,
        path: &str,
        verb: Verb,
        params: &Params,
    ) -> Result<Option<ApiResponse>, AppError> {
        match self.record(path, Ok(verb), params).await {
            Ok(response) => Ok(Some(response)),
            Err(e) => self.handle_error("send", e).map(|_| None),
        }
    }

    /// `GET path`
    pub async fn get(&mut self, path: &str) -> Result<Option<ApiResponse>, AppError> {
        self.call(path, Verb::Get, &Params::new()).await
    }

    /// `POST path` with `params` as form body
    pub async fn post(
        &mut self,
        path: &str,
        params: &Params,
    ) -> Result<Option<ApiResponse>, AppError> {
        self.call(path, Verb::Post, params).await
    }

    /// `PUT path` with `params` as form body
    pub async fn put(
        &mut self,
        path: &str,
        params: &Params,
    ) -> Result<Option<ApiResponse>, AppError> {
        self.call(path, Verb::Put, params).await
    }

    /// `DELETE path`
    pub async fn delete(&mut self, path: &str) -> Result<Option<ApiResponse>, AppError> {
        self.call(path, Verb::Delete, &Params::new()).await
    }

    /// Servers whose nickname matches `name`
    ///
    /// `name` is appended to the filter as is, without percent-encoding: a
    /// nickname containing `&`, `#` or `+` changes the query sent.
    pub async fn search(&mut self, name: &str) -> Result<Option<ApiResponse>, AppError> {
        let path = format!("{SEARCH_PATH}{name}");
        self.send(&path, DEFAULT_VERB, &Params::new()).await
    }

    /// Id of the resource created by the last `201 Created` call
    pub fn resource_id(&self) -> Option<&str> {
        self.last_call.resource_id.as_deref()
    }

    /// Headers of the last successful call
    pub fn headers(&self) -> &HeaderMap {
        &self.last_call.headers
    }

    /// Duration of the last call in seconds
    pub fn time(&self) -> f64 {
        self.last_call.elapsed_secs()
    }

    /// Error of the last call, `None` if it succeeded
    pub fn code(&self) -> Option<&AppError> {
        self.last_call.last_error.as_ref()
    }

    /// Full record of the last call
    pub fn last_call(&self) -> &CallRecord {
        &self.last_call
    }

    /// Describes the live session and logs the description
    pub fn show_connection(&self) -> String {
        let description = match &self.session {
            Some(session) => session.describe(),
            None => "not connected".to_string(),
        };
        info!("Connection: {}", description);
        description
    }

    async fn record(
        &mut self,
        path: &str,
        verb: Result<Verb, AppError>,
        params: &Params,
    ) -> Result<ApiResponse, AppError> {
        self.last_call.begin(Utc::now());
        let start = Instant::now();

        let checked = validate_path(path).and_then(|path| Ok((path, verb?)));
        let result = match checked {
            Ok((path, verb)) => self.dispatch(path, verb, params).await,
            Err(e) => Err(e),
        };

        let elapsed = start.elapsed();
        match &result {
            Ok(response) => self.last_call.succeed(elapsed, response),
            Err(e) => self.last_call.fail(elapsed, e.clone()),
        }
        result
    }

    async fn dispatch(
        &self,
        path: &str,
        verb: Verb,
        params: &Params,
    ) -> Result<ApiResponse, AppError> {
        let session = self.session.as_ref().ok_or(AppError::NotLoggedIn)?;

        let id = request_id();
        let url = join_url(&session.resolved_url, path);
        let params = merge_version_params(&session.api_version, params);
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(API_VERSION_HEADER),
            HeaderValue::from_str(&session.api_version)?,
        );

        debug!("[{}] {} {}", id, verb.as_method(), url);
        if let Some(log) = session.request_log() {
            log.log_request(&RequestEvent {
                id: &id,
                verb,
                url: &url,
                params: &params,
            });
        }

        let start = Instant::now();
        let result = session
            .transport()
            .execute(TransportRequest {
                verb,
                url: url.clone(),
                params: params.clone(),
                headers,
            })
            .await;
        let elapsed = start.elapsed();

        if let Some(log) = session.request_log() {
            let (status, body_len, error) = match &result {
                Ok(response) => (Some(response.status), response.body.len(), None),
                Err(e) => (e.status(), 0, Some(e)),
            };
            log.log_response(&ResponseEvent {
                id: &id,
                status,
                body_len,
                elapsed,
                error,
            });
        }
        debug!("[{}] completed in {:.3}s", id, elapsed.as_secs_f64());

        result
    }

    fn handle_error(&self, operation: &str, error: AppError) -> Result<(), AppError> {
        let policy = self.config.error_policy;
        if policy.print_errors {
            error!("Error during {}: {}", operation, error);
        } else {
            debug!("Error during {}: {}", operation, error);
        }
        if policy.rethrow_errors {
            return Err(error);
        }
        Ok(())
    }
}

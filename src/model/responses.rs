/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Raw responses and the record of the last call

use crate::error::AppError;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, LOCATION};
use std::time::Duration;

/// Raw response handed back by `send`
///
/// The body is kept as text; interpreting it is left to the caller.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Response headers (case-insensitive lookup)
    pub headers: HeaderMap,
    /// Response body
    pub body: String,
}

impl ApiResponse {
    /// Builds a response from its parts
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Looks up a header by name, ignoring case; non UTF-8 values are skipped
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        header_str(&self.headers, name)
    }

    /// True when the server answered `201 Created`
    #[must_use]
    pub fn is_created(&self) -> bool {
        self.status == StatusCode::CREATED
    }

    /// Id of the resource created by this call
    ///
    /// Only `201 Created` responses carry one. The id is the last path segment
    /// of the `Location` header when it is entirely made of digits; anything
    /// else yields `None`.
    #[must_use]
    pub fn created_resource_id(&self) -> Option<String> {
        if !self.is_created() {
            return None;
        }
        self.headers
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .and_then(trailing_numeric_segment)
    }
}

/// Case-insensitive header lookup returning the value as text
#[must_use]
pub fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Extracts the numeric last segment of a location such as
/// `https://my.rightscale.com/api/acct/1/servers/5678`
#[must_use]
pub fn trailing_numeric_segment(location: &str) -> Option<String> {
    let path = location
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');
    let segment = path.rsplit('/').next()?;
    if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
        Some(segment.to_string())
    } else {
        None
    }
}

/// Outcome of the most recent `send`, read through the facade accessors
#[derive(Debug, Clone, Default)]
pub struct CallRecord {
    /// When the last call started
    pub started_at: Option<DateTime<Utc>>,
    /// How long the last call took
    pub elapsed: Duration,
    /// Headers of the last successful response; empty after a failure
    pub headers: HeaderMap,
    /// Id from the last `201 Created` response, `None` when that response had
    /// no numeric `Location`; survives non-201 calls
    pub resource_id: Option<String>,
    /// Error of the last call; `None` after a success
    pub last_error: Option<AppError>,
}

impl CallRecord {
    /// Marks the start of a new call, discarding the previous error
    pub fn begin(&mut self, started_at: DateTime<Utc>) {
        self.started_at = Some(started_at);
        self.elapsed = Duration::ZERO;
        self.last_error = None;
    }

    /// Stores a successful response
    pub fn succeed(&mut self, elapsed: Duration, response: &ApiResponse) {
        self.elapsed = elapsed;
        self.headers = response.headers.clone();
        if response.is_created() {
            self.resource_id = response.created_resource_id();
        }
    }

    /// Stores a failure
    pub fn fail(&mut self, elapsed: Duration, error: AppError) {
        self.elapsed = elapsed;
        self.headers = HeaderMap::new();
        self.last_error = Some(error);
    }

    /// Elapsed time in seconds
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

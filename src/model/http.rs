/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Request building blocks: verbs, parameters and URL joining

use crate::constants::{API_VERSION_PARAM, X_API_VERSION_PARAM};
use crate::error::AppError;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Form or query parameters sent with a call
///
/// Sorted map so that merged keys have a single, predictable value and the
/// request log is stable.
pub type Params = BTreeMap<String, String>;

/// HTTP verbs accepted by the RightScale API
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    /// Read a resource or a collection
    #[default]
    Get,
    /// Create a resource
    Post,
    /// Update a resource
    Put,
    /// Delete a resource
    Delete,
}

impl Verb {
    /// All supported verbs
    pub const ALL: [Verb; 4] = [Verb::Get, Verb::Post, Verb::Put, Verb::Delete];

    /// The matching `reqwest` method
    #[must_use]
    pub fn as_method(&self) -> Method {
        match self {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
            Verb::Delete => Method::DELETE,
        }
    }

    /// Whether parameters travel in the request body instead of the query string
    #[must_use]
    pub fn has_body(&self) -> bool {
        matches!(self, Verb::Post | Verb::Put)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verb::Get => "get",
            Verb::Post => "post",
            Verb::Put => "put",
            Verb::Delete => "delete",
        };
        f.write_str(name)
    }
}

impl FromStr for Verb {
    type Err = AppError;

    /// Parses a verb, ignoring case and surrounding whitespace.
    ///
    /// Only the exact names are accepted: `"forget"` or `"get_all"` are
    /// rejected even though they contain `get`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "get" => Ok(Verb::Get),
            "post" => Ok(Verb::Post),
            "put" => Ok(Verb::Put),
            "delete" => Ok(Verb::Delete),
            _ => Err(AppError::InvalidArgument(format!(
                "invalid action {s:?}: get | put | post | delete only"
            ))),
        }
    }
}

/// Rejects empty endpoint paths
pub fn validate_path(path: &str) -> Result<&str, AppError> {
    if path.trim().is_empty() {
        return Err(AppError::InvalidArgument("no API call given".to_string()));
    }
    Ok(path)
}

/// Merges the version keys into `params`.
///
/// Both `x_api_version` and `api_version` are set to `api_version`; keys
/// supplied by the caller take precedence.
#[must_use]
pub fn merge_version_params(api_version: &str, params: &Params) -> Params {
    let mut merged = Params::new();
    merged.insert(X_API_VERSION_PARAM.to_string(), api_version.to_string());
    merged.insert(API_VERSION_PARAM.to_string(), api_version.to_string());
    merged.extend(params.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// Appends `path` to the resolved account URL with exactly one `/` between them
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Renders parameters as `k=v&k=v` for log output (no escaping)
#[must_use]
pub fn format_params(params: &Params) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

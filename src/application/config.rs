use crate::constants::{DEFAULT_API_URL, DEFAULT_API_VERSION, DEFAULT_LOG_FILE};
use crate::error::AppError;
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use crate::utils::logger::RequestLogger;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
/// Credentials bound to the session at `login`
///
/// The password is accepted on deserialization but never serialized, so it
/// does not leak through `Debug`/`Display` output.
pub struct Credentials {
    /// User name for HTTP basic authentication
    #[serde(default)]
    pub username: Option<String>,
    /// Password for HTTP basic authentication
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    /// Extra headers sent with every request (API keys, cookies...)
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl Credentials {
    /// Basic-auth credentials
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
            headers: BTreeMap::new(),
        }
    }

    /// Adds a header sent with every request
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Checks the credential shape before a session is built
    pub fn validate(&self) -> Result<(), AppError> {
        match (&self.username, &self.password) {
            (Some(user), _) if user.trim().is_empty() => Err(AppError::Configuration(
                "username must not be empty".to_string(),
            )),
            (None, Some(_)) => Err(AppError::Configuration(
                "password given without a username".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
/// Options consumed by `login`
pub struct LoginOptions {
    /// RightScale account number appended to the base URL
    pub account: String,
    /// Everything else: the credentials of the session
    #[serde(default)]
    pub credentials: Credentials,
}

impl LoginOptions {
    /// Builds login options for `account`
    pub fn new(account: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            account: account.into(),
            credentials,
        }
    }

    /// Reads `RIGHTSCALE_ACCOUNT`, `RIGHTSCALE_USER` and `RIGHTSCALE_PASSWORD`
    /// (a `.env` file is honoured)
    pub fn from_env() -> Self {
        load_dotenv();
        Self {
            account: get_env_or_default("RIGHTSCALE_ACCOUNT", String::new()),
            credentials: Credentials {
                username: get_env_or_none("RIGHTSCALE_USER"),
                password: get_env_or_none("RIGHTSCALE_PASSWORD"),
                headers: BTreeMap::new(),
            },
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Per-session request log settings
pub struct LoggingConfig {
    /// Whether requests and responses are logged at all
    pub enabled: bool,
    /// File path, `stdout` or `stderr`; `rest.log` when unset
    pub destination: Option<String>,
    /// Sink used instead of `destination` when set
    #[serde(skip)]
    pub sink: Option<Arc<dyn RequestLogger>>,
}

impl LoggingConfig {
    /// Destination actually used when logging is enabled
    #[must_use]
    pub fn destination_or_default(&self) -> &str {
        self.destination.as_deref().unwrap_or(DEFAULT_LOG_FILE)
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
/// What the facade does with a failure caught in `login` or `send`
pub struct ErrorPolicy {
    /// Log the failure at `error` level (otherwise `debug`)
    pub print_errors: bool,
    /// Hand the failure back as `Err`; otherwise it is only recorded
    pub rethrow_errors: bool,
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        Self {
            print_errors: true,
            rethrow_errors: false,
        }
    }
}

impl ErrorPolicy {
    /// Print nothing, always return `Err`
    #[must_use]
    pub fn strict() -> Self {
        Self {
            print_errors: false,
            rethrow_errors: true,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration of the RightScale API facade
pub struct ClientConfig {
    /// API root; the account number is appended to it verbatim
    pub base_url: String,
    /// Version sent as `X-API-VERSION`, `x_api_version` and `api_version`
    pub api_version: String,
    /// Request log settings
    pub logging: LoggingConfig,
    /// Failure handling
    pub error_policy: ErrorPolicy,
    /// Request timeout in seconds; transport default when unset
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfig {
    /// Configuration with the built-in defaults
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            logging: LoggingConfig::default(),
            error_policy: ErrorPolicy::default(),
            timeout_secs: None,
        }
    }

    /// Configuration read from the environment (and `.env`), falling back to
    /// the built-in defaults
    pub fn from_env() -> Self {
        load_dotenv();
        let defaults = ErrorPolicy::default();
        Self {
            base_url: get_env_or_default("RIGHTSCALE_API_URL", DEFAULT_API_URL.to_string()),
            api_version: get_env_or_default(
                "RIGHTSCALE_API_VERSION",
                DEFAULT_API_VERSION.to_string(),
            ),
            logging: LoggingConfig {
                enabled: get_env_flag("RIGHTSCALE_LOG", false),
                destination: get_env_or_none("RIGHTSCALE_LOG_FILE"),
                sink: None,
            },
            error_policy: ErrorPolicy {
                print_errors: get_env_flag("RIGHTSCALE_PRINT_ERRORS", defaults.print_errors),
                rethrow_errors: get_env_flag("RIGHTSCALE_RERAISE", defaults.rethrow_errors),
            },
            timeout_secs: get_env_or_none("RIGHTSCALE_TIMEOUT"),
        }
    }

    /// Sets the API root
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the API version
    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Enables the request log, optionally at a given destination
    #[must_use]
    pub fn with_logging(mut self, destination: Option<&str>) -> Self {
        self.logging.enabled = true;
        self.logging.destination = destination.map(str::to_string);
        self
    }

    /// Enables the request log with a caller-supplied sink
    #[must_use]
    pub fn with_request_logger(mut self, sink: Arc<dyn RequestLogger>) -> Self {
        self.logging.enabled = true;
        self.logging.sink = Some(sink);
        self
    }

    /// Sets the failure handling policy
    #[must_use]
    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    /// Sets the request timeout
    #[must_use]
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn load_dotenv() {
    match dotenv() {
        Ok(_) => debug!("Successfully loaded .env file"),
        Err(e) => debug!("Failed to load .env file: {e}"),
    }
}

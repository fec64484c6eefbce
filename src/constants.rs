/// Default RightScale API root; the account number is appended to it verbatim
pub const DEFAULT_API_URL: &str = "https://my.rightscale.com/api/acct/";
/// API version sent with every call unless overridden in the configuration
pub const DEFAULT_API_VERSION: &str = "1.0";
/// Request log file used when logging is enabled without a destination
pub const DEFAULT_LOG_FILE: &str = "rest.log";
/// Special request log destination writing to standard output
pub const LOG_STDOUT: &str = "stdout";
/// Special request log destination writing to standard error
pub const LOG_STDERR: &str = "stderr";
/// User agent string used in HTTP requests to identify this client to the RightScale API
pub const USER_AGENT: &str = "right-api/0.1.0";
/// Header carrying the API version on every request
pub const API_VERSION_HEADER: &str = "x-api-version";
/// Parameter key mirroring the version header
pub const X_API_VERSION_PARAM: &str = "x_api_version";
/// Plain parameter key carrying the API version
pub const API_VERSION_PARAM: &str = "api_version";
/// Endpoint prefix used by `search`; the nickname is appended to it
pub const SEARCH_PATH: &str = "servers?filter=nickname=";
/// Default HTTP verb of `send`
pub const DEFAULT_VERB: &str = "get";

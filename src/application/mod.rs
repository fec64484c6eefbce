/// The RightScale API facade
pub mod client;
/// Client configuration, credentials and login options
pub mod config;

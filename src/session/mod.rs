/// Session construction from the client configuration and login options
pub mod auth;

pub use auth::Session;

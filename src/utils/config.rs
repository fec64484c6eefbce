/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

/// Reads `env_var` and parses it, falling back to `default` when the variable
/// is missing or unparsable
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - Value returned when the variable is absent or invalid
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            warn!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Reads `env_var` and parses it, returning `None` if not found or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var).ok().and_then(|val| val.parse::<T>().ok())
}

/// Reads a boolean switch from the environment
///
/// Accepts `1/0`, `true/false`, `yes/no` and `on/off` in any case. Anything
/// else (including an absent variable) yields `default`.
pub fn get_env_flag(env_var: &str, default: bool) -> bool {
    match env::var(env_var) {
        Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            other => {
                warn!("Unrecognized value for {}: {}, using default", env_var, other);
                default
            }
        },
        Err(_) => default,
    }
}

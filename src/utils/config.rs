use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

/// Reads an environment variable and parses it, falling back to the given
/// default when the variable is unset or cannot be parsed.
///
/// # Arguments
/// * `env_var` - Name of the environment variable
/// * `default` - Value to use when the variable is missing or invalid
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(raw) => raw.parse::<T>().unwrap_or_else(|e| {
            warn!("failed to parse {env_var}={raw}: {e:?}, using default");
            default
        }),
        Err(_) => default,
    }
}

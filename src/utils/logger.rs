use crate::constants::LOG_LEVEL_ENV;
use crate::utils::config::get_env_or_default;
use tracing::Level;

/// Initializes the global tracing subscriber.
///
/// The maximum level is read from the `LOG_LEVEL` environment variable
/// (`error`, `warn`, `info`, `debug`, `trace`) and defaults to `info`.
/// Safe to call more than once; only the first call installs a subscriber.
pub fn setup_logger() {
    let level: Level = get_env_or_default(LOG_LEVEL_ENV, Level::INFO);
    let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
}

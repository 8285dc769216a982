//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `voxcraft_audio=debug`).
pub const LOG_ENV: &str = "VOXCRAFT_LOG";

/// Installs a stderr `fmt` subscriber.
///
/// `VOXCRAFT_LOG` wins when set; otherwise the level is `warn`, or `debug`
/// with `--verbose`. Calling this twice is harmless.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

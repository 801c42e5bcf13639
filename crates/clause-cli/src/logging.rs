//! Log subscriber setup

use crate::config::CliConfig;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber, writing to stderr
///
/// An unparsable directive falls back to `warn`. Calling this twice is
/// harmless; the second call is ignored.
pub fn init_logging(config: &CliConfig) {
    let directive = config.log_directive();
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!("Logging initialised with filter '{}'", directive);
    }
}

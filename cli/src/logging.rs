use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "HEX2PEM_LOG";

/// Initialize a `tracing_subscriber` on stderr
///
/// The filter is read from `HEX2PEM_LOG` (e.g. `HEX2PEM_LOG=debug`) and
/// defaults to `warn`. Stdout is left to the converted output.
pub(crate) fn init() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

use tracing_subscriber::EnvFilter;

/// Filter directives are read from `SCREENER_LOG`, then `RUST_LOG`.
pub const LOG_ENV: &str = "SCREENER_LOG";

/// Install the global fmt subscriber (e.g. `SCREENER_LOG=debug screener rank ...`).
///
/// Logs go to stderr so that `--json` output on stdout stays parseable.
/// Only the first call installs anything; later calls are no-ops.
pub fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

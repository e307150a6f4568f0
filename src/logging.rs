//! Logging setup built on `tracing` and `tracing-subscriber`
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber
///
/// The filter comes from `RUST_LOG` and defaults to `info`, e.g.
/// `RUST_LOG=vuetify_configuration=debug`. Output goes to stderr so generated
/// modules printed on stdout stay clean.
///
/// # Example
/// ```no_run
/// use vuetify_configuration::logging;
/// logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Install a verbose subscriber for tests; safe to call more than once
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

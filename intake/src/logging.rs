// Tracing subscriber setup for the binary.
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber.
///
/// `level` wins when given; otherwise `RUST_LOG` is honoured, falling back to `info`.
/// Logs go to stderr so stdout stays clean for command output.
pub fn init(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// For tests: a debug-level subscriber writing through the test harness. Safe to call repeatedly.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

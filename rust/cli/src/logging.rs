//! Diagnostic logging setup.
//!
//! Engine events (shuffles, forced deals, simulation summaries) are emitted
//! through `tracing`. The binary installs a fmt subscriber on stderr filtered
//! by `RUST_LOG`; tests install a capturing layer to inspect them.

/// Installs the stderr subscriber; `RUST_LOG` overrides the `warn` default.
///
/// Does nothing if a global subscriber is already set.
pub fn init_logging() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

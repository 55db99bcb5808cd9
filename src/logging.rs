use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `RUST_LOG` raises verbosity; by default only warnings
/// are shown so the patch result is the only thing on the terminal.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

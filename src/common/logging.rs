//! Logging and tracing configuration
//!
//! Standard output carries the per-test status lines, so all logging goes
//! to stderr.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing for the CLI (stderr logging)
///
/// Logs are controlled by the `RUST_LOG` environment variable.
/// Default level is WARN so a normal run prints only status lines.
pub fn init_cli() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bobbin_tests=warn,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();

    route_panics_to_log();
}

/// Replace the default panic hook with a `debug` log event
///
/// Panics inside test bodies are reported as failures by the runner, so
/// the message only shows up with `RUST_LOG=bobbin_tests=debug`.
pub fn route_panics_to_log() {
    std::panic::set_hook(Box::new(|info| {
        tracing::debug!(panic = %info, "Test body panicked");
    }));
}

//! Tracing setup for the `kaleido` binary.
//!
//! Library code only emits events; installing a subscriber is left to the
//! binary (or to whatever host embeds the library).

use tracing_subscriber::{
    filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

/// Filter directive for a `-v` count: warn, then debug, then trace.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "kaleido=debug",
        _ => "kaleido=trace",
    }
}

/// Installs a stderr fmt subscriber.
///
/// `RUST_LOG` takes precedence over `verbose`. A second call is a no-op.
pub fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(filter),
        )
        .try_init();
}

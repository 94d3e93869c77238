#![allow(non_snake_case)]

mod app;
mod components;
mod state;

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

fn main() {
    init_logging();
    dioxus::launch(app::App);
}

/// Initialize stdout logging.
///
/// INFO+ by default; `DEBUG_LOGGING=1` enables debug output for the
/// workspace crates.
fn init_logging() {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let filter_directive = if debug_logging {
        "info,app_ui=debug,chronolens_core=debug"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(EnvFilter::new(filter_directive))
        .init();

    tracing::info!(debug_logging, "ChronoLens logging initialized");
}

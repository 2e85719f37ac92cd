use crate::Environment;
use tracing::{debug, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install color-eyre for `eyre::Result` returned from `main`.
///
/// Error reports show the file:line they were raised at and skip the
/// environment section. Installing twice is a no-op.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Filter used when `RUST_LOG` is unset
pub fn default_filter(environment: &Environment) -> &'static str {
    if environment.is_production() {
        "warn"
    } else {
        "info,tower_http=debug"
    }
}

/// Initialize the global subscriber.
///
/// - **Production**: one flattened JSON object per event, no module targets
/// - **Development**: pretty, multi-line output
///
/// Both carry an [`ErrorLayer`] so `color-eyre` reports include the span
/// trace (the `#[instrument]`ed repository and service calls). `RUST_LOG`
/// overrides [`default_filter`].
///
/// Calling this again once a subscriber is installed logs at debug and
/// returns, which keeps tests that each initialize tracing from panicking.
///
/// ```ignore
/// use core_config::{tracing::init_tracing, Environment};
///
/// init_tracing(&Environment::from_env());
/// ```
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(environment)));

    let (json, pretty) = if environment.is_production() {
        let json = fmt::layer()
            .json()
            .with_target(false)
            .flatten_event(true);
        (Some(json), None)
    } else {
        let pretty = fmt::layer()
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .pretty();
        (None, Some(pretty))
    };

    let result = tracing_subscriber::registry()
        .with(json)
        .with(pretty)
        .with(ErrorLayer::default())
        .with(filter)
        .try_init();

    match result {
        Ok(()) => info!(?environment, "Tracing initialized"),
        Err(_) => debug!("Tracing already initialized, skipping"),
    }
}

use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, prelude::*};

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in main() before any fallible operations. Safe to call
/// multiple times.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

fn default_filter(environment: &Environment) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if environment.is_production() {
            EnvFilter::new("info,sea_orm=warn,sqlx=warn")
        } else {
            EnvFilter::new("debug,h2=info,tower=info,hyper_util=info")
        }
    })
}

/// Initialize tracing with environment-aware configuration and error span capture.
///
/// - **Production** (`APP_ENV=production`): flattened JSON events, no module targets.
/// - **Development** (default): pretty, human-readable output.
///
/// Both install `tracing_error::ErrorLayer` so eyre reports carry span traces.
/// `RUST_LOG` overrides the default filter. Calling this more than once is a no-op.
pub fn init_tracing(environment: &Environment) {
    let filter = default_filter(environment);

    let result = if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => {
            info!(?environment, "Tracing initialized");
        }
        Err(_) => {
            debug!("Tracing already initialized, skipping re-initialization");
        }
    }
}

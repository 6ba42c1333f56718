pub use tracing::{debug, error, info, trace, warn};

use crate::errors::LogError;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,mergington_backend=debug,tower_http=debug";

/// Setup the logging system for the application.
/// This function will install the [`color_eyre`] error reporting system
/// and the [`tracing-subscriber`] logging system.
/// The log level is read from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
/// If the color_eyre or tracing-subscriber installation fails,
/// an error will be returned.
pub fn setup() -> Result<(), LogError> {
    use tracing_subscriber::EnvFilter;

    // Install color_eyre
    color_eyre::install().map_err(LogError::ColorEyre)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Setup tracing and tracing-subscriber
    tracing_subscriber::fmt::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(LogError::TracingSubscriber)?;

    Ok(())
}

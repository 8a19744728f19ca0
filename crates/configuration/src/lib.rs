use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, ForecastSettings, RetailSettings, ScenarioParams};

/// The file `load_config` reads when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "unit-economics.toml";

/// Environment variables starting with this prefix override file values,
/// e.g. `UNIT_ECONOMICS__FORECAST__STARTING_CASH=750000`.
pub const ENV_PREFIX: &str = "UNIT_ECONOMICS";

/// Loads the application configuration from `unit-economics.toml`.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(Path::new(DEFAULT_CONFIG_FILE))
}

/// Loads, deserializes and validates the configuration at `path`.
///
/// The file format is inferred from the extension. Values from the
/// environment are layered on top of the file.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    tracing::debug!(path = %path.display(), "Loading configuration");

    let builder = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    Ok(config)
}

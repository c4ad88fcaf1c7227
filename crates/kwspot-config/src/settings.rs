use std::path::Path;

use config::{Config, Environment, File};

use super::config::KwsConfig;
use super::error::ConfigError;

const DEFAULT_CONFIG_PATH: &str = "config/kwspot.toml";
const ENV_PREFIX: &str = "KWSPOT";

impl KwsConfig {
    /// Load the configuration from a specific file, with `KWSPOT`
    /// environment variables layered on top.
    pub fn from_path(config_path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from(config_path.as_ref()).required(true))
            .add_source(env_source());

        let config = builder.build()?;
        let kws: KwsConfig = config.try_deserialize()?;
        kws.validate()?;
        Ok(kws)
    }

    /// Load the configuration for this process.
    ///
    /// Starts from the built-in defaults, layers `config/kwspot.toml` on
    /// top when it exists, then `KWSPOT` environment variables. The
    /// result is validated before it is handed out.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        let config_path = Path::new(DEFAULT_CONFIG_PATH);
        if config_path.exists() {
            tracing::info!("Loading configuration from: {}", config_path.display());
            builder = builder.add_source(File::from(config_path).required(true));
        } else {
            tracing::debug!(
                "No configuration file at '{}'. Using built-in defaults and environment variables.",
                DEFAULT_CONFIG_PATH
            );
        }

        builder = builder.add_source(env_source());

        let config = builder.build()?;
        let kws: KwsConfig = config.try_deserialize()?;
        kws.validate()?;
        Ok(kws)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .list_separator(" ")
}

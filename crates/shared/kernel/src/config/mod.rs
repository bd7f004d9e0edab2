use atlas_domain::constants::ENV_PREFIX;
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "client";

#[atlas_derive::atlas_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a config file overlaid with `ATLAS__`-prefixed environment variables.
///
/// The file format follows the extension; without a path, `client` in the
/// working directory is used (any supported extension). Nested keys use
/// double underscores: `ATLAS__LOG__LEVEL` sets `log.level`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or does not deserialize into `T`.
///
/// # Example
/// ```rust,no_run
/// use atlas_kernel::config::load_config;
/// use atlas_kernel::domain::config::ClientConfig;
///
/// let cfg: ClientConfig = load_config(Some("config/client.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake)
                .try_parsing(true),
        );

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

use anyhow::Context;
use atlas_kernel::config::load_config;
use atlas_kernel::domain::config::{ClientConfig, LogConfig};
use atlas_logger::{LevelFilter, Logger};
use std::path::Path;
use tracing::{info, warn};

const FALLBACK_LEVEL: LevelFilter = LevelFilter::INFO;

/// Loads `client.*` configuration and installs the logger.
///
/// A missing or malformed config file, or an unknown `log.level`, falls back
/// to defaults. Both are reported as warnings once the logger is up.
///
/// # Errors
/// Returns an error if the logger cannot be initialized.
pub fn bootstrap() -> anyhow::Result<(ClientConfig, Logger)> {
    let loaded = load_config::<ClientConfig>(None::<&Path>);
    let config = loaded.as_ref().map_or_else(|_| ClientConfig::default(), Clone::clone);

    let logger = init_logger(&config.log)?;
    match loaded {
        Ok(_) => info!("Client configuration loaded"),
        Err(err) => warn!("{err}; using default client configuration"),
    }

    Ok((config, logger))
}

/// Installs the global subscriber described by `log`.
///
/// # Errors
/// Returns an error if the log directory is unusable or a subscriber is already installed.
pub fn init_logger(log: &LogConfig) -> anyhow::Result<Logger> {
    let level = log.level.parse::<LevelFilter>().ok();
    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level.unwrap_or(FALLBACK_LEVEL));

    let logger = match &log.dir {
        Some(dir) => builder.dir(dir).json(log.json).init(),
        None => builder.init(),
    }
    .context("Failed to initialize logger")?;

    if level.is_none() {
        warn!(level = %log.level, "Unknown log level; falling back to {FALLBACK_LEVEL}");
    }
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use atlas_kernel::config::load_config;
    use atlas_kernel::domain::constants::API_PREFIX;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct DxManifest {
        web: DxWeb,
    }

    #[derive(Deserialize)]
    struct DxWeb {
        proxy: Vec<DxProxy>,
    }

    #[derive(Deserialize)]
    struct DxProxy {
        backend: String,
    }

    #[test]
    fn dev_proxy_forwards_api_prefix_unchanged() -> Result<(), Box<dyn std::error::Error>> {
        let manifest: DxManifest =
            load_config(Some(concat!(env!("CARGO_MANIFEST_DIR"), "/Dioxus.toml")))?;

        let [proxy] = manifest.web.proxy.as_slice() else {
            panic!("exactly one dev proxy is declared");
        };
        assert!(
            proxy.backend.ends_with(&format!("{API_PREFIX}/")),
            "'{}' must keep the {API_PREFIX} prefix",
            proxy.backend
        );
        Ok(())
    }
}

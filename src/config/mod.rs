pub mod types;

use anyhow::{Context, Result};
use config::{Config, File};
use std::path::Path;
pub use types::*;

/// Environment variable holding the UMLS credential
pub const UMLS_API_KEY_ENV: &str = "UMLS_API_KEY";

/// Load configuration from an optional TOML file plus the environment
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();

    let env_key = std::env::var(UMLS_API_KEY_ENV)
        .ok()
        .filter(|key| !key.is_empty());

    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .set_override_option("umls.api_key", env_key)
        .context("Failed to apply UMLS_API_KEY override")?
        .build()
        .with_context(|| format!("Failed to load config from: {}", path.display()))?;

    let mut app_config: AppConfig = config
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    validate_config(&mut app_config)?;

    Ok(app_config)
}

/// Validate the loaded configuration, normalizing base URLs
fn validate_config(config: &mut AppConfig) -> Result<()> {
    for (name, base) in [
        ("rxnav_base_url", &mut config.upstream.rxnav_base_url),
        ("umls_base_url", &mut config.upstream.umls_base_url),
    ] {
        let parsed = url::Url::parse(base.as_str())
            .with_context(|| format!("Invalid upstream.{} '{}'", name, base))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("upstream.{} '{}' must use http or https", name, base);
        }
        if parsed.query().is_some() {
            anyhow::bail!("upstream.{} '{}' must not carry a query", name, base);
        }
        let trimmed = base.trim_end_matches('/').len();
        base.truncate(trimmed);
    }

    if config.upstream.request_timeout_secs == Some(0) {
        anyhow::bail!("upstream.request_timeout_secs must be greater than zero");
    }

    // Validate log level
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.logging.level.as_str()) {
        anyhow::bail!(
            "Invalid log level '{}'. Valid levels: {}",
            config.logging.level,
            valid_levels.join(", ")
        );
    }

    // Validate log format
    let valid_formats = ["pretty", "json"];
    if !valid_formats.contains(&config.logging.format.as_str()) {
        anyhow::bail!(
            "Invalid log format '{}'. Valid formats: {}",
            config.logging.format,
            valid_formats.join(", ")
        );
    }

    Ok(())
}

pub mod init;
pub mod show;
pub mod validate;

use anyhow::{Context, Result};
use folio_core::{CONFIG_FILE_NAME, SiteConfig, parse_site_toml_str};
use std::path::{Path, PathBuf};

/// A directory argument means `<dir>/site.toml`; anything else is taken as
/// the config file itself.
pub fn resolve_config_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(CONFIG_FILE_NAME)
    } else {
        path.to_path_buf()
    }
}

/// Locate and read the site.toml for `path`, returning the resolved file
/// path and its contents.
pub async fn read_site_toml(path: &Path) -> Result<(PathBuf, String)> {
    let config_path = resolve_config_path(path);
    if !config_path.exists() {
        anyhow::bail!(
            "{} not found\nRun 'folio init {}' first",
            config_path.display(),
            path.display()
        );
    }

    tracing::info!(path = %config_path.display(), "loading site configuration");

    let content = tokio::fs::read_to_string(&config_path)
        .await
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    Ok((config_path, content))
}

/// Read and build the site configuration at `path`.
pub async fn load_site(path: &Path) -> Result<SiteConfig> {
    let (config_path, content) = read_site_toml(path).await?;

    let config = parse_site_toml_str(&content)
        .with_context(|| format!("Invalid site configuration in {}", config_path.display()))?;

    Ok(config)
}

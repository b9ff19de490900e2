use super::load_site;
use anyhow::Result;
use clap::ValueEnum;
use folio_core::{SiteConfig, SiteExport, to_toml};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// camelCase JSON with the derived `monolocale` flag
    #[default]
    Json,
    /// Normalized site.toml with defaults filled in, `monolocale` as a
    /// leading comment
    Toml,
}

/// Print the normalized configuration for the site renderer.
pub async fn run(path: PathBuf, format: Format) -> Result<()> {
    let config = load_site(&path).await?;
    println!("{}", render(&config, format)?);
    Ok(())
}

fn render(config: &SiteConfig, format: Format) -> Result<String> {
    let out = match format {
        Format::Json => SiteExport::new(config).to_json_pretty()?,
        Format::Toml => format!(
            "# monolocale = {}\n{}",
            config.monolocale(),
            to_toml(config)?
        ),
    };
    Ok(out)
}

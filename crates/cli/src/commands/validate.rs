use super::read_site_toml;
use folio_validator::{ValidationReport, validate_site_str};
use std::path::PathBuf;

pub async fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating site at: {}", path.display());

    let (config_path, content) = read_site_toml(&path).await?;

    let (config, report) = validate_site_str(&content);

    if let Some(config) = &config {
        println!("✓ {} valid", config_path.display());
        println!("  Site: {} by {}", config.title(), config.author().name);
    }

    print_report(&report);

    if !report.is_ok() {
        anyhow::bail!("Validation failed with {} error(s)", report.errors.len());
    }

    Ok(())
}

fn print_report(report: &ValidationReport) {
    for info in &report.info {
        println!("  {}", info);
    }

    if !report.warnings.is_empty() {
        println!();
        for warning in &report.warnings {
            println!("⚠ {}", warning);
        }
    }

    if !report.errors.is_empty() {
        println!();
        for error in &report.errors {
            println!("✗ {}", error);
        }
    }
}

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use folio_core::{CONFIG_FILE_NAME, Locale, parse_site_toml_str};
use folio_validator::is_valid_email;
use std::fs;
use std::path::{Path, PathBuf};

/// Values supplied on the command line; anything left out gets a placeholder.
#[derive(Debug, Default)]
pub struct InitOptions {
    pub title: Option<String>,
    pub author: Option<String>,
    pub email: Option<String>,
    pub locales: Vec<String>,
}

/// Escape a string for safe inclusion in TOML per TOML v1.0.0 spec
///
/// Handles the required escape sequences for TOML basic strings:
/// - Backslash (\\) -> \\\\
/// - Quote (\") -> \\\"
/// - Backspace (\b) -> \\b
/// - Form feed (\f) -> \\f
/// - Newline (\n) -> \\n
/// - Carriage return (\r) -> \\r
/// - Tab (\t) -> \\t
///
/// The template carries comments, which the toml serializer would drop.
///
/// See: https://toml.io/en/v1.0.0#string
fn toml_escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\x08', "\\b")
        .replace('\x0C', "\\f")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Create a starter site.toml in an existing directory.
///
/// # Errors
///
/// Returns an error if:
/// - The directory doesn't exist
/// - site.toml already exists in the directory
/// - A supplied email or locale code is malformed, a locale is repeated,
///   or the title/author is blank
/// - Writing the file fails
pub async fn run(path: PathBuf, options: InitOptions) -> Result<()> {
    println!("Initializing site directory: {}", path.display());

    if !path.is_dir() {
        anyhow::bail!(
            "Directory '{}' does not exist. Create it first: mkdir {}",
            path.display(),
            path.display()
        );
    }

    let config_path = path.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!(
            "{} already exists at {}\nHint: Delete it first or use a different directory",
            CONFIG_FILE_NAME,
            config_path.display()
        );
    }

    generate_site_toml(&path, &options, Local::now().year())?;
    tracing::info!(path = %config_path.display(), "wrote starter configuration");

    println!("✓ Created {}", config_path.display());
    println!("\nNext steps:");
    println!("  1. Edit {} (title, author, prologue, description)", CONFIG_FILE_NAME);
    println!("  2. Check it: folio validate {}", path.display());

    Ok(())
}

fn generate_site_toml(base: &Path, options: &InitOptions, year: i32) -> Result<()> {
    // Validate email if provided
    if let Some(e) = options.email.as_deref()
        && !is_valid_email(e)
    {
        anyhow::bail!("Invalid email format: '{}'", e);
    }

    for (flag, value) in [("--title", &options.title), ("--author", &options.author)] {
        if let Some(v) = value
            && v.trim().is_empty()
        {
            anyhow::bail!("Invalid {}: value must not be blank", flag);
        }
    }

    let mut seen: Vec<Locale> = Vec::with_capacity(options.locales.len());
    for code in &options.locales {
        let Some(locale) = Locale::parse(code) else {
            anyhow::bail!("Invalid locale code: '{}' (expected e.g. 'en' or 'zh-cn')", code);
        };
        if seen.iter().any(|s| s.same_as(&locale)) {
            anyhow::bail!("Invalid locale list: '{}' is given more than once", code);
        }
        seen.push(locale);
    }

    let title = toml_escape_string(options.title.as_deref().unwrap_or("My Site"));
    let author = toml_escape_string(options.author.as_deref().unwrap_or("Your Name"));
    let email = toml_escape_string(options.email.as_deref().unwrap_or("you@example.com"));

    let title_comment = todo_comment(options.title.is_some(), "Set site title");
    let author_comment = todo_comment(options.author.is_some(), "Set author name");
    let email_comment = todo_comment(options.email.is_some(), "Set email");

    let locales = if options.locales.is_empty() {
        vec!["en".to_string()]
    } else {
        options.locales.clone()
    };
    let default_locale = &locales[0];
    let locale_list = locales
        .iter()
        .map(|l| format!("\"{}\"", l))
        .collect::<Vec<_>>()
        .join(", ");

    let toml = format!(
        "# Generated by folio init\n\
# Edit this file to customize your site\n\
\n\
title = \"{title}\"{title_comment}\n\
prologue = \"Hey, welcome to my personal website.\"  # TODO: Write a welcome line\n\
description = \"{title}\"  # TODO: Describe the site for search engines\n\
\n\
# Selector for the latest-posts listing (\"*\" = every section)\n\
latest = \"*\"\n\
\n\
[author]\n\
name = \"{author}\"{author_comment}\n\
email = \"{email}\"{email_comment}\n\
link = \"https://example.com\"  # TODO: Set homepage\n\
\n\
[copyright]\n\
type = \"CC BY-NC-ND 4.0\"\n\
year = \"{year}\"\n\
\n\
[i18n]\n\
locales = [{locale_list}]\n\
default_locale = \"{default_locale}\"\n\
\n\
[feed]\n\
section = \"*\"\n\
limit = 20\n"
    );

    // The template must build; anything else is a bug here
    parse_site_toml_str(&toml)
        .context("Generated site.toml is invalid - this is a bug in the template generator")?;

    fs::write(base.join(CONFIG_FILE_NAME), toml)?;

    Ok(())
}

fn todo_comment(provided: bool, what: &str) -> String {
    if provided {
        String::new()
    } else {
        format!("  # TODO: {}", what)
    }
}

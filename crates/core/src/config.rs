use crate::error::{ConfigValidationError, Result};
use crate::locale::Locale;
use crate::selector::Selector;
use crate::types::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Conventional name of the configuration file inside a site directory.
pub const CONFIG_FILE_NAME: &str = "site.toml";

/// Raw settings record, as written by the site author.
///
/// Every field is optional here so that a missing one is reported by name
/// from [`build_site_config`] instead of as a generic deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSiteConfig {
    pub title: Option<String>,
    pub prologue: Option<String>,
    pub author: Option<RawAuthor>,
    pub description: Option<String>,
    pub copyright: Option<RawCopyright>,
    pub i18n: Option<RawI18n>,
    pub feed: Option<RawFeed>,
    pub latest: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawAuthor {
    pub name: Option<String>,
    pub email: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawCopyright {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub year: Option<RawYear>,
}

/// Copyright year, written either as `"2025"` or `2025`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawYear {
    Text(String),
    Number(i64),
}

impl From<RawYear> for String {
    fn from(year: RawYear) -> Self {
        match year {
            RawYear::Text(s) => s,
            RawYear::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawI18n {
    pub locales: Option<Vec<String>>,
    /// Falls back to the first entry of `locales` when absent
    #[serde(alias = "defaultLocale")]
    pub default_locale: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawFeed {
    pub section: Option<String>,
    /// Signed so that negative input can be reported instead of wrapping
    pub limit: Option<i64>,
}

/// Parse site.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<SiteConfig> {
    let content = fs::read_to_string(path)?;
    parse_site_toml_str(&content)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<SiteConfig> {
    let raw: RawSiteConfig = toml::from_str(content)?;
    Ok(build_site_config(raw)?)
}

impl TryFrom<RawSiteConfig> for SiteConfig {
    type Error = ConfigValidationError;

    fn try_from(raw: RawSiteConfig) -> std::result::Result<Self, Self::Error> {
        build_site_config(raw)
    }
}

/// Validate a raw settings record and turn it into a [`SiteConfig`].
///
/// Fields are checked in declaration order and the first violation is
/// returned. The only default filled in is `i18n.default_locale`, which
/// falls back to the first configured locale.
///
/// # Errors
///
/// - a required field is missing, or `title` / `author.name` is blank
/// - `i18n.locales` is empty, has an unrecognized code or a duplicate
/// - `i18n.default_locale` is not one of `i18n.locales`
/// - `feed.limit` is negative or larger than `u32::MAX`
pub fn build_site_config(
    raw: RawSiteConfig,
) -> std::result::Result<SiteConfig, ConfigValidationError> {
    let title = require_text(raw.title, "title")?;
    let prologue = require(raw.prologue, "prologue")?;

    let raw_author = require(raw.author, "author")?;
    let author = Author {
        name: require_text(raw_author.name, "author.name")?,
        email: require(raw_author.email, "author.email")?,
        link: require(raw_author.link, "author.link")?,
    };

    let description = require(raw.description, "description")?;

    let raw_copyright = require(raw.copyright, "copyright")?;
    let copyright = Copyright {
        kind: require(raw_copyright.kind, "copyright.type")?,
        year: require(raw_copyright.year, "copyright.year")?.into(),
    };

    let i18n = build_i18n(require(raw.i18n, "i18n")?)?;

    let raw_feed = require(raw.feed, "feed")?;
    let feed = Feed {
        section: Selector::new(require(raw_feed.section, "feed.section")?),
        limit: feed_limit(require(raw_feed.limit, "feed.limit")?)?,
    };

    let latest = Selector::new(require(raw.latest, "latest")?);

    let config = SiteConfig::new(
        title,
        prologue,
        description,
        latest,
        author,
        copyright,
        i18n,
        feed,
    );

    tracing::debug!(
        title = config.title(),
        locales = config.i18n().locales().len(),
        monolocale = config.monolocale(),
        "site configuration built"
    );

    Ok(config)
}

fn build_i18n(raw: RawI18n) -> std::result::Result<I18n, ConfigValidationError> {
    let codes = require(raw.locales, "i18n.locales")?;
    if codes.is_empty() {
        return Err(ConfigValidationError::EmptyLocales);
    }

    let mut locales: Vec<Locale> = Vec::with_capacity(codes.len());
    for code in codes {
        let locale = Locale::parse(&code).ok_or(ConfigValidationError::InvalidLocale {
            field: "i18n.locales",
            code,
        })?;
        if locales.iter().any(|seen| seen.same_as(&locale)) {
            return Err(ConfigValidationError::DuplicateLocale(locale.to_string()));
        }
        locales.push(locale);
    }

    let default_locale = match raw.default_locale {
        Some(code) => {
            let locale = Locale::parse(&code).ok_or(ConfigValidationError::InvalidLocale {
                field: "i18n.default_locale",
                code,
            })?;
            if !locales.contains(&locale) {
                return Err(ConfigValidationError::DefaultLocaleNotListed {
                    default: locale.to_string(),
                    locales: locales.iter().map(Locale::to_string).collect(),
                });
            }
            locale
        }
        // Non-empty was checked above
        None => locales[0].clone(),
    };

    Ok(I18n::new(locales, default_locale))
}

fn feed_limit(limit: i64) -> std::result::Result<u32, ConfigValidationError> {
    if limit < 0 {
        return Err(ConfigValidationError::NegativeFeedLimit(limit));
    }
    u32::try_from(limit).map_err(|_| ConfigValidationError::FeedLimitOutOfRange(limit))
}

fn require<T>(
    value: Option<T>,
    field: &'static str,
) -> std::result::Result<T, ConfigValidationError> {
    value.ok_or(ConfigValidationError::MissingField(field))
}

fn require_text(
    value: Option<String>,
    field: &'static str,
) -> std::result::Result<String, ConfigValidationError> {
    let value = require(value, field)?;
    if value.trim().is_empty() {
        return Err(ConfigValidationError::EmptyField(field));
    }
    Ok(value)
}

//! The view of a [`SiteConfig`] handed to the page renderer and feed builder.
//!
//! Keys are camelCase and the derived `monolocale` flag sits at the top level,
//! so consumers never need to recompute it.

use crate::error::{Error, Result};
use crate::types::{Author, Copyright, SiteConfig};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteExport<'a> {
    title: &'a str,
    prologue: &'a str,
    author: &'a Author,
    description: &'a str,
    copyright: &'a Copyright,
    i18n: ExportI18n<'a>,
    feed: ExportFeed<'a>,
    latest: &'a str,
    monolocale: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportI18n<'a> {
    locales: Vec<&'a str>,
    default_locale: &'a str,
}

#[derive(Debug, Serialize)]
struct ExportFeed<'a> {
    section: &'a str,
    limit: u32,
}

impl<'a> SiteExport<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            title: config.title(),
            prologue: config.prologue(),
            author: config.author(),
            description: config.description(),
            copyright: config.copyright(),
            i18n: ExportI18n {
                locales: config.i18n().locales().iter().map(|l| l.as_str()).collect(),
                default_locale: config.i18n().default_locale().as_str(),
            },
            feed: ExportFeed {
                section: config.feed().section.as_str(),
                limit: config.feed().limit,
            },
            latest: config.latest().as_str(),
            monolocale: config.monolocale(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialize(e.to_string()))
    }
}

/// Re-emit the normalized configuration as site.toml, with every default
/// filled in.
pub fn to_toml(config: &SiteConfig) -> Result<String> {
    toml::to_string(config).map_err(|e| Error::Serialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_site_toml_str;

    const TOML: &str = r##"
title = "Notebook"
prologue = "Hello."
description = "Notes."
latest = "posts"

[author]
name = "Sam"
email = "sam@example.com"
link = "https://example.com"

[copyright]
type = "CC BY 4.0"
year = "2024"

[i18n]
locales = ["en", "zh-cn", "ja"]

[feed]
section = "*"
limit = 10
"##;

    #[test]
    fn test_json_export_shape() {
        let config = parse_site_toml_str(TOML).unwrap();
        let json = SiteExport::new(&config).to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["title"], "Notebook");
        assert_eq!(value["author"]["email"], "sam@example.com");
        assert_eq!(value["copyright"]["type"], "CC BY 4.0");
        assert_eq!(value["i18n"]["defaultLocale"], "en");
        assert_eq!(value["i18n"]["locales"][1], "zh-cn");
        assert_eq!(value["feed"]["limit"], 10);
        assert_eq!(value["latest"], "posts");
        assert_eq!(value["monolocale"], false);
    }

    #[test]
    fn test_toml_export_reparses_to_same_config() {
        let config = parse_site_toml_str(TOML).unwrap();
        let emitted = to_toml(&config).unwrap();

        // The default locale was filled in by the builder
        assert!(emitted.contains("default_locale = \"en\""));

        let reparsed = parse_site_toml_str(&emitted).unwrap();
        assert_eq!(reparsed, config);
    }
}

use crate::locale::Locale;
use crate::selector::Selector;
use serde::Serialize;

/// Complete, validated site configuration.
///
/// Built once by [`crate::build_site_config`] and read-only afterwards. Share
/// it by reference (or wrap it in an `Arc`) with whatever renders the site.
///
/// Plain values come before the nested sections so the struct serializes to
/// TOML without reordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteConfig {
    title: String,
    prologue: String,
    description: String,
    latest: Selector,
    author: Author,
    copyright: Copyright,
    i18n: I18n,
    feed: Feed,
}

impl SiteConfig {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        title: String,
        prologue: String,
        description: String,
        latest: Selector,
        author: Author,
        copyright: Copyright,
        i18n: I18n,
        feed: Feed,
    ) -> Self {
        Self {
            title,
            prologue,
            description,
            latest,
            author,
            copyright,
            i18n,
            feed,
        }
    }

    /// Site display name
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Short welcome text for the landing page
    pub fn prologue(&self) -> &str {
        &self.prologue
    }

    /// Meta description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Selector for the "latest posts" listing
    pub fn latest(&self) -> &Selector {
        &self.latest
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn copyright(&self) -> &Copyright {
        &self.copyright
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    /// True when the site is published in exactly one locale.
    pub fn monolocale(&self) -> bool {
        self.i18n.locales.len() == 1
    }
}

/// Author information
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    pub email: String,
    /// Author homepage
    pub link: String,
}

/// Copyright notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Copyright {
    /// License identifier, free text (e.g. "CC BY-NC-ND 4.0")
    #[serde(rename = "type")]
    pub kind: String,
    pub year: String,
}

impl Copyright {
    /// One-line notice for page footers, e.g. "© 2025 Jane Doe · CC BY 4.0".
    pub fn notice(&self, holder: &str) -> String {
        if self.kind.trim().is_empty() {
            format!("© {} {}", self.year, holder)
        } else {
            format!("© {} {} · {}", self.year, holder, self.kind)
        }
    }
}

/// Supported locales.
///
/// Only the builder creates values of this type, so `locales` is never empty
/// and always contains `default_locale`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct I18n {
    locales: Vec<Locale>,
    default_locale: Locale,
}

impl I18n {
    pub(crate) fn new(locales: Vec<Locale>, default_locale: Locale) -> Self {
        debug_assert!(locales.contains(&default_locale));
        Self {
            locales,
            default_locale,
        }
    }

    /// Locales in configured order
    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Exact membership test against the configured codes.
    pub fn is_supported(&self, code: &str) -> bool {
        self.locales.iter().any(|l| l.as_str() == code)
    }
}

/// Syndication feed settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feed {
    /// Which content section(s) go into the feed
    pub section: Selector,
    /// Maximum number of entries
    pub limit: u32,
}

//! Advisory checks over a built [`SiteConfig`].
//!
//! The builder in `folio-core` already rejects configurations that break an
//! invariant. This crate looks for things that are legal but probably wrong:
//! a malformed email, a relative homepage link, a copyright year from the
//! future, a meta description search engines will truncate.

use chrono::Datelike;
use folio_core::{SiteConfig, parse_site_toml_str};
use url::Url;

/// Search engines cut meta descriptions at about this many characters.
pub const MAX_DESCRIPTION_CHARS: usize = 160;

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    fn warn(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn note(&mut self, msg: impl Into<String>) {
        self.info.push(msg.into());
    }
}

/// Build the configuration from site.toml text and check it.
///
/// A configuration that fails to build is reported through `errors` and no
/// advisory checks run.
pub fn validate_site_str(content: &str) -> (Option<SiteConfig>, ValidationReport) {
    match parse_site_toml_str(content) {
        Ok(config) => {
            let report = validate_site(&config);
            (Some(config), report)
        }
        Err(err) => {
            let report = ValidationReport {
                errors: vec![err.to_string()],
                ..Default::default()
            };
            (None, report)
        }
    }
}

/// Run every advisory check against `config`, using today's year for the
/// copyright check.
pub fn validate_site(config: &SiteConfig) -> ValidationReport {
    validate_site_for_year(config, chrono::Local::now().year())
}

/// Same as [`validate_site`] with an explicit current year.
pub fn validate_site_for_year(config: &SiteConfig, current_year: i32) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_author(config, &mut report);
    check_copyright(config, current_year, &mut report);
    check_text(config, &mut report);
    check_feed(config, &mut report);
    describe(config, &mut report);

    report
}

fn check_author(config: &SiteConfig, report: &mut ValidationReport) {
    let author = config.author();

    if !is_valid_email(&author.email) {
        report.warn(format!(
            "author.email '{}' does not look like an email address",
            author.email
        ));
    }

    if !is_absolute_http_url(&author.link) {
        report.warn(format!(
            "author.link '{}' is not an absolute http(s) URL",
            author.link
        ));
    }
}

fn check_copyright(config: &SiteConfig, current_year: i32, report: &mut ValidationReport) {
    let copyright = config.copyright();

    if copyright.kind.trim().is_empty() {
        report.warn("copyright.type is empty; no license will be shown");
    }

    match parse_year(&copyright.year) {
        None => report.warn(format!(
            "copyright.year '{}' is not a four-digit year",
            copyright.year
        )),
        Some(year) if year > current_year => report.warn(format!(
            "copyright.year {} is later than the current year {}",
            year, current_year
        )),
        Some(_) => {}
    }
}

fn check_text(config: &SiteConfig, report: &mut ValidationReport) {
    if config.prologue().trim().is_empty() {
        report.warn("prologue is empty; the landing page will have no welcome text");
    }

    let description = config.description();
    if description.trim().is_empty() {
        report.warn("description is empty; pages will have no meta description");
    } else {
        let len = description.chars().count();
        if len > MAX_DESCRIPTION_CHARS {
            report.warn(format!(
                "description is {} characters; search engines truncate after about {}",
                len, MAX_DESCRIPTION_CHARS
            ));
        }
    }
}

fn check_feed(config: &SiteConfig, report: &mut ValidationReport) {
    let feed = config.feed();
    if feed.limit == 0 {
        report.warn("feed.limit is 0; the feed will have no entries");
    }
    if feed.section.as_str().trim().is_empty() {
        report.warn("feed.section is empty; no content will be selected for the feed");
    }
    if config.latest().as_str().trim().is_empty() {
        report.warn("latest is empty; the latest-posts listing will select nothing");
    }
}

fn describe(config: &SiteConfig, report: &mut ValidationReport) {
    let i18n = config.i18n();
    let locales: Vec<&str> = i18n.locales().iter().map(|l| l.as_str()).collect();

    report.note(format!(
        "Locales: {} (default: {})",
        locales.join(", "),
        i18n.default_locale()
    ));
    report.note(if config.monolocale() {
        "Single-locale site"
    } else {
        "Multi-locale site"
    });
    report.note(format!(
        "Feed: section '{}', up to {} entries",
        config.feed().section,
        config.feed().limit
    ));
    report.note(format!("Latest posts: '{}'", config.latest()));
    report.note(format!(
        "Footer: {}",
        config.copyright().notice(&config.author().name)
    ));
}

fn parse_year(year: &str) -> Option<i32> {
    let year = year.trim();
    if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    year.parse().ok()
}

fn is_absolute_http_url(link: &str) -> bool {
    match Url::parse(link) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host().is_some(),
        Err(_) => false,
    }
}

/// Validate email format
/// Checks for basic RFC 5322 compliance without full regex
pub fn is_valid_email(email: &str) -> bool {
    // Must have exactly one @ symbol
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }

    // Local part (before @) checks
    if local.is_empty() || local.len() > 64 {
        return false;
    }

    // Domain checks
    if domain.is_empty() || domain.len() > 255 || !domain.contains('.') {
        return false;
    }

    // Domain can't start/end with dot or hyphen
    if domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) {
        return false;
    }

    if domain.contains("..") {
        return false;
    }

    // TLD of at least 2 chars
    domain
        .rsplit_once('.')
        .is_some_and(|(_, tld)| tld.len() >= 2)
}

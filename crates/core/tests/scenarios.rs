//! Building a site configuration from literal settings, the way a site's
//! entry point does it at startup.

use folio_core::{
    ConfigValidationError, RawAuthor, RawCopyright, RawFeed, RawI18n, RawSiteConfig, RawYear,
    SiteConfig, build_site_config,
};

fn settings(locales: &[&str], default_locale: &str, section: &str, limit: i64) -> RawSiteConfig {
    RawSiteConfig {
        title: Some("Lifan Huang".to_string()),
        prologue: Some("Hey, welcome to my personal website.".to_string()),
        author: Some(RawAuthor {
            name: Some("Lifan Huang".to_string()),
            email: Some("i@lifanh.com".to_string()),
            link: Some("https://lifanh.com".to_string()),
        }),
        description: Some("Lifan's website.".to_string()),
        copyright: Some(RawCopyright {
            kind: Some("CC BY-NC-ND 4.0".to_string()),
            year: Some(RawYear::Text("2025".to_string())),
        }),
        i18n: Some(RawI18n {
            locales: Some(locales.iter().map(|s| s.to_string()).collect()),
            default_locale: Some(default_locale.to_string()),
        }),
        feed: Some(RawFeed {
            section: Some(section.to_string()),
            limit: Some(limit),
        }),
        latest: Some("*".to_string()),
    }
}

fn assert_invariants(config: &SiteConfig) {
    let i18n = config.i18n();
    assert!(!i18n.locales().is_empty());
    assert!(i18n.locales().contains(i18n.default_locale()));
    assert_eq!(config.monolocale(), i18n.locales().len() == 1);
}

#[test]
fn single_locale_site_is_monolocale() {
    let config = build_site_config(settings(&["en"], "en", "*", 20)).unwrap();
    assert!(config.monolocale());
    assert_invariants(&config);
}

#[test]
fn three_locale_site_is_not_monolocale() {
    let config = build_site_config(settings(&["en", "zh-cn", "ja"], "en", "*", 20)).unwrap();
    assert!(!config.monolocale());
    assert_invariants(&config);
}

#[test]
fn empty_locale_list_fails() {
    let err = build_site_config(settings(&[], "en", "*", 20)).unwrap_err();
    assert_eq!(err, ConfigValidationError::EmptyLocales);
    assert!(err.to_string().contains("i18n.locales"));
}

#[test]
fn default_locale_outside_list_fails() {
    let err = build_site_config(settings(&["en"], "fr", "*", 20)).unwrap_err();
    assert!(matches!(
        err,
        ConfigValidationError::DefaultLocaleNotListed { .. }
    ));
}

#[test]
fn negative_feed_limit_fails() {
    let err = build_site_config(settings(&["en"], "en", "*", -1)).unwrap_err();
    assert_eq!(err, ConfigValidationError::NegativeFeedLimit(-1));
}

#[test]
fn feed_selector_passes_through() {
    let config = build_site_config(settings(&["en"], "en", "*", 20)).unwrap();
    assert_eq!(config.feed().limit, 20);
    assert_eq!(config.feed().section.as_str(), "*");
    assert!(config.feed().section.is_wildcard());
}

#[test]
fn every_field_reads_back_unchanged() {
    let config = build_site_config(settings(&["en", "zh-CN"], "zh-CN", "posts", 0)).unwrap();
    assert_eq!(config.title(), "Lifan Huang");
    assert_eq!(config.prologue(), "Hey, welcome to my personal website.");
    assert_eq!(config.author().name, "Lifan Huang");
    assert_eq!(config.author().email, "i@lifanh.com");
    assert_eq!(config.author().link, "https://lifanh.com");
    assert_eq!(config.description(), "Lifan's website.");
    assert_eq!(config.copyright().kind, "CC BY-NC-ND 4.0");
    assert_eq!(config.copyright().year, "2025");
    assert_eq!(config.i18n().default_locale().as_str(), "zh-CN");
    assert!(config.i18n().is_supported("zh-CN"));
    assert!(!config.i18n().is_supported("zh-cn"));
    assert_eq!(config.feed().section.as_str(), "posts");
    assert_eq!(config.feed().limit, 0);
    assert_eq!(config.latest().as_str(), "*");
}

#[test]
fn config_is_shareable_across_threads() {
    let config = std::sync::Arc::new(build_site_config(settings(&["en"], "en", "*", 5)).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let config = std::sync::Arc::clone(&config);
            std::thread::spawn(move || config.feed().limit)
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 5);
    }
}

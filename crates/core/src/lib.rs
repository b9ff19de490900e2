pub mod config;
pub mod error;
pub mod export;
pub mod locale;
pub mod selector;
pub mod types;

pub use config::{
    CONFIG_FILE_NAME, RawAuthor, RawCopyright, RawFeed, RawI18n, RawSiteConfig, RawYear,
    build_site_config, parse_site_toml, parse_site_toml_str,
};
pub use error::{ConfigValidationError, Error, Result};
pub use export::{SiteExport, to_toml};
pub use locale::Locale;
pub use selector::Selector;
pub use types::*;

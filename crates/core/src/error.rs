use std::fmt;

/// A violated invariant of the site configuration.
///
/// Every variant names the offending field so the build can stop with a
/// message that points at the line to fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// A required field was absent from the input.
    MissingField(&'static str),
    /// A field that must carry text was empty or whitespace only.
    EmptyField(&'static str),
    /// `i18n.locales` contained no entries.
    EmptyLocales,
    /// A locale code did not look like a language tag.
    InvalidLocale { field: &'static str, code: String },
    /// The same locale appeared twice in `i18n.locales`.
    DuplicateLocale(String),
    /// `i18n.default_locale` is not one of `i18n.locales`.
    DefaultLocaleNotListed { default: String, locales: Vec<String> },
    /// `feed.limit` was below zero.
    NegativeFeedLimit(i64),
    /// `feed.limit` does not fit the supported range.
    FeedLimitOutOfRange(i64),
}

impl ConfigValidationError {
    /// Dotted path of the field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigValidationError::MissingField(field)
            | ConfigValidationError::EmptyField(field)
            | ConfigValidationError::InvalidLocale { field, .. } => *field,
            ConfigValidationError::EmptyLocales | ConfigValidationError::DuplicateLocale(_) => {
                "i18n.locales"
            }
            ConfigValidationError::DefaultLocaleNotListed { .. } => "i18n.default_locale",
            ConfigValidationError::NegativeFeedLimit(_)
            | ConfigValidationError::FeedLimitOutOfRange(_) => "feed.limit",
        }
    }
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValidationError::MissingField(field) => {
                write!(f, "Missing required field '{}'", field)
            }
            ConfigValidationError::EmptyField(field) => {
                write!(f, "Field '{}' must not be empty", field)
            }
            ConfigValidationError::EmptyLocales => {
                write!(f, "Field 'i18n.locales' must list at least one locale")
            }
            ConfigValidationError::InvalidLocale { field, code } => {
                write!(f, "Unrecognized locale code '{}' in '{}'", code, field)
            }
            ConfigValidationError::DuplicateLocale(code) => {
                write!(f, "Locale '{}' is listed more than once in 'i18n.locales'", code)
            }
            ConfigValidationError::DefaultLocaleNotListed { default, locales } => write!(
                f,
                "Field 'i18n.default_locale' is '{}', which is not one of 'i18n.locales' [{}]",
                default,
                locales.join(", ")
            ),
            ConfigValidationError::NegativeFeedLimit(limit) => {
                write!(f, "Field 'feed.limit' must be >= 0, got {}", limit)
            }
            ConfigValidationError::FeedLimitOutOfRange(limit) => {
                write!(f, "Field 'feed.limit' is too large: {}", limit)
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

#[derive(Debug)]
pub enum Error {
    ConfigParse(String),
    IoError(std::io::Error),
    Validation(ConfigValidationError),
    Serialize(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigParse(msg) => write!(f, "Configuration parse error: {}", msg),
            Error::IoError(err) => write!(f, "IO error: {}", err),
            Error::Validation(err) => write!(f, "Configuration validation error: {}", err),
            Error::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

// Display includes the wrapped error's text, so there is no source().
impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigParse(err.to_string())
    }
}

impl From<ConfigValidationError> for Error {
    fn from(err: ConfigValidationError) -> Self {
        Error::Validation(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

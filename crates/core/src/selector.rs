use serde::Serialize;
use std::fmt;

/// A content selector for the feed and the latest-posts listing.
///
/// The string is passed through untouched. Its grammar belongs to whatever
/// renders the site, so nothing here interprets it beyond the `*` wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Selector(String);

impl Selector {
    pub fn new(raw: impl Into<String>) -> Self {
        Selector(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the selector is the bare `*` (every section).
    pub fn is_wildcard(&self) -> bool {
        self.0 == "*"
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

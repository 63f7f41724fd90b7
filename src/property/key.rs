//! Normalized property keys.

use std::fmt::{Display, Formatter, Result};

use serde::Serialize;

/// A normalized, lowercase, dot separated property key such as `detect.source.path`.
///
/// Normalization trims surrounding whitespace and lowercases the text, so two
/// keys compare equal exactly when they are equal ignoring case.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PropertyKey(String);

impl PropertyKey {
    /// Create a key from any spelling, normalizing it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use detect_config::property::PropertyKey;
    /// let key = PropertyKey::new("  Detect.Source.Path ");
    /// assert_eq!(key.as_str(), "detect.source.path");
    /// ```
    #[must_use]
    pub fn new(key: &str) -> Self {
        Self(key.trim().to_lowercase())
    }

    /// Map an environment variable name onto a key.
    ///
    /// `DETECT_SOURCE_PATH` becomes `detect.source.path`.
    #[must_use]
    pub fn from_env_var(name: &str) -> Self {
        Self::new(&name.replace('_', "."))
    }

    /// The normalized text of the key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the key text is already in normalized form.
    #[must_use]
    pub fn is_normalized(key: &str) -> bool {
        Self::new(key).as_str() == key
    }
}

impl Display for PropertyKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PropertyKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl AsRef<str> for PropertyKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

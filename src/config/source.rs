//! Raw settings sources.
//!
//! A source hands out raw text by normalized key. It never parses anything;
//! that is the job of the descriptor the key is registered under.

use std::collections::BTreeMap;

use tracing::warn;

use crate::error::SourceError;
use crate::property::PropertyKey;

/// Somewhere raw property text comes from.
pub trait PropertySource: Send + Sync {
    /// Name shown when reporting where a value came from.
    fn name(&self) -> &str;

    /// Every key this source holds a value for.
    fn keys(&self) -> Vec<&PropertyKey>;

    /// Raw text for a key, if this source holds one.
    fn raw_value(&self, key: &PropertyKey) -> Option<&str>;
}

/// An in-memory source. Keys are normalized on insert.
#[derive(Clone, Debug, Default)]
pub struct MapPropertySource {
    name: String,
    values: BTreeMap<PropertyKey, String>,
}

impl MapPropertySource {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            values: BTreeMap::new(),
        }
    }

    /// Build a source from `(key, value)` pairs. A later pair for the same
    /// key replaces an earlier one.
    pub fn from_pairs<I, K, V>(name: &str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut source = Self::new(name);
        for (key, value) in pairs {
            source.insert(key.as_ref(), value);
        }
        source
    }

    /// Build a source from `key=value` overrides as written on the command line.
    ///
    /// The value is everything after the first `=` and may itself contain `=`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::MalformedPair`] for an entry without `=` or
    /// with an empty key.
    pub fn from_overrides<S: AsRef<str>>(name: &str, overrides: &[S]) -> Result<Self, SourceError> {
        let mut source = Self::new(name);
        for entry in overrides {
            let (key, value) = parse_pair(entry.as_ref())?;
            source.insert(key, value);
        }
        Ok(source)
    }

    /// Insert a value, returning the one it replaced.
    ///
    /// Spellings that differ only in case are the same key, so the replaced
    /// value is logged rather than dropped silently.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) -> Option<String> {
        let normalized = PropertyKey::new(key);
        let replaced = self.values.insert(normalized.clone(), value.into());
        if let Some(previous) = &replaced {
            warn!(
                source = %self.name,
                key = %normalized,
                spelling = key,
                replaced = %previous,
                "key supplied more than once, keeping the later value"
            );
        }
        replaced
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PropertySource for MapPropertySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn keys(&self) -> Vec<&PropertyKey> {
        self.values.keys().collect()
    }

    fn raw_value(&self, key: &PropertyKey) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// Split a `key=value` entry.
///
/// # Errors
///
/// Returns [`SourceError::MalformedPair`] if there is no `=` or the key is blank.
pub fn parse_pair(entry: &str) -> Result<(&str, &str), SourceError> {
    match entry.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => Err(SourceError::MalformedPair(entry.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_normalizes_keys() {
        let source = MapPropertySource::new("test").with("Detect.Source.Path", "/src");

        assert_eq!(
            source.raw_value(&PropertyKey::new("detect.source.path")),
            Some("/src")
        );
        assert_eq!(source.len(), 1);
    }

    #[test]
    fn test_later_pair_replaces_earlier() {
        let source =
            MapPropertySource::from_pairs("test", [("detect.tools", "DOCKER"), ("DETECT.TOOLS", "BAZEL")]);

        assert_eq!(source.raw_value(&PropertyKey::new("detect.tools")), Some("BAZEL"));
        assert_eq!(source.len(), 1);
    }

    #[test]
    fn test_insert_reports_replaced_value() {
        let mut source = MapPropertySource::new("test");

        assert_eq!(source.insert("detect.tools", "DOCKER"), None);
        assert_eq!(
            source.insert("Detect.Tools", "BAZEL"),
            Some("DOCKER".to_string())
        );
        assert_eq!(source.raw_value(&PropertyKey::new("detect.tools")), Some("BAZEL"));
    }

    #[test]
    fn test_keys_are_sorted() {
        let source = MapPropertySource::new("test")
            .with("detect.tools", "ALL")
            .with("blackduck.url", "https://bd");

        let keys: Vec<&str> = source.keys().into_iter().map(PropertyKey::as_str).collect();
        assert_eq!(keys, vec!["blackduck.url", "detect.tools"]);
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(parse_pair("a.b=c").unwrap(), ("a.b", "c"));
        assert_eq!(parse_pair(" a.b =x=y").unwrap(), ("a.b", "x=y"));
        assert_eq!(parse_pair("a.b=").unwrap(), ("a.b", ""));
    }

    #[test]
    fn test_parse_pair_rejects_missing_separator() {
        assert!(matches!(
            parse_pair("detect.tools"),
            Err(SourceError::MalformedPair(entry)) if entry == "detect.tools"
        ));
        assert!(parse_pair("=value").is_err());
    }

    #[test]
    fn test_from_overrides() {
        let source =
            MapPropertySource::from_overrides("command line", &["blackduck.timeout=30", "detect.cleanup=false"])
                .unwrap();

        assert_eq!(source.name(), "command line");
        assert_eq!(source.raw_value(&PropertyKey::new("blackduck.timeout")), Some("30"));
        assert!(MapPropertySource::from_overrides("command line", &["oops"]).is_err());
    }
}

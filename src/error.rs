//! Error types shared by the property framework.
//!
//! Every failure the library can produce is one of the types below and is
//! returned as an explicit `Result`. Nothing is silently defaulted: deciding
//! whether a failure is fatal is left to the caller.

use thiserror::Error;

use crate::property::PropertyKey;

/// A single raw token could not be converted into a typed value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueParseError {
    /// The text is not a valid representation of the expected type.
    #[error("'{raw}' is not a valid {expected}")]
    InvalidValue {
        /// Offending text.
        raw: String,
        /// Human readable name of the expected type (`boolean`, `integer`, ...).
        expected: &'static str,
    },

    /// The text does not name a member of the enumeration domain.
    #[error("'{raw}' is not a known {domain}, expected one of: {}", legal.join(", "))]
    UnknownMember {
        /// Offending text.
        raw: String,
        /// Name of the domain that was searched.
        domain: &'static str,
        /// Every legal member name, in domain order.
        legal: Vec<String>,
    },

    /// The text names a member of neither domain of an extended enumeration.
    #[error(
        "'{raw}' is neither a known {extension_domain} ({}) nor a known {base_domain} ({})",
        extension_legal.join(", "),
        base_legal.join(", ")
    )]
    UnknownExtendedMember {
        /// Offending text.
        raw: String,
        /// Name of the extension domain (searched first).
        extension_domain: &'static str,
        /// Legal extension member names.
        extension_legal: Vec<String>,
        /// Name of the base domain (searched second).
        base_domain: &'static str,
        /// Legal base member names.
        base_legal: Vec<String>,
    },

    /// One element of an array or list failed to parse.
    #[error("element {index} ('{raw}'): {source}")]
    Element {
        /// Position of the failing token among the non-blank tokens.
        index: usize,
        /// The failing token, trimmed.
        raw: String,
        /// Why the token failed.
        #[source]
        source: Box<ValueParseError>,
    },
}

impl ValueParseError {
    /// Element index carried by this error, if it came from an array or list.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Element { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Raw text supplied for a property could not be resolved into its typed value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unable to parse property '{key}' from '{raw}': {source}")]
pub struct ParseFailure {
    /// Key of the property being resolved.
    pub key: PropertyKey,
    /// The complete raw text supplied for the property.
    pub raw: String,
    /// Position of the failing element for array and list properties.
    pub index: Option<usize>,
    /// Token-level cause.
    #[source]
    pub source: ValueParseError,
}

impl ParseFailure {
    /// Wrap a token-level error with the property it belongs to.
    #[must_use]
    pub fn new(key: PropertyKey, raw: &str, source: ValueParseError) -> Self {
        Self {
            key,
            raw: raw.to_string(),
            index: source.index(),
            source,
        }
    }
}

/// Failures raised while building or querying a [`Registry`](crate::registry::Registry).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two descriptors normalize to the same key. This is a defect in the
    /// property declarations, never a user input problem.
    #[error("property key '{key}' is declared more than once")]
    KeyCollision {
        /// The colliding, normalized key.
        key: PropertyKey,
    },

    /// No descriptor is registered under the key.
    #[error("no property is registered under '{key}'")]
    UnknownKey {
        /// The normalized key that was looked up.
        key: PropertyKey,
    },
}

/// Failures raised by the include/exclude selection policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Members declared as required are not in the active set.
    #[error("required {domain} not active: {}", missing.join(", "))]
    RequiredMissing {
        /// Name of the domain.
        domain: &'static str,
        /// Names of the required members that are missing, in domain order.
        missing: Vec<String>,
    },
}

/// Failures raised while collecting raw settings from outside the process.
#[derive(Error, Debug)]
pub enum SourceError {
    /// A settings file could not be read.
    #[error("failed to read settings file at {path}: {source}")]
    Read {
        /// Path of the file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A settings file is not valid TOML.
    #[error("failed to parse settings file at {path}: {source}")]
    Toml {
        /// Path of the file.
        path: std::path::PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// A command line override is not of the form `key=value`.
    #[error("expected 'key=value' but found '{0}'")]
    MalformedPair(String),
}

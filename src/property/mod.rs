//! Property descriptors.
//!
//! A property binds a normalized [`PropertyKey`] to a parser, a presence
//! (optional, or required with a default) and descriptive [`PropertyInfo`].
//! Descriptors are built once with a builder chain and never change after.
//!
//! ## Main Parts
//!
//! - [`Property`] - object safe view used by the registry and by reporting
//! - [`Resolve`] - typed resolution of raw text for one concrete descriptor
//! - [`OptionalProperty`] / [`RequiredProperty`] - the two descriptor kinds
//! - [`PropertyKey`] - normalized key
//! - [`PropertyInfo`], [`Group`], [`Category`] - metadata

pub mod info;
pub mod key;
pub mod typed;

pub use info::{Category, Group, Help, PropertyInfo};
pub use key::PropertyKey;
pub use typed::*;

use serde::Serialize;

use crate::error::ParseFailure;

/// How raw text is split before each piece is parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ValueShape {
    /// One token; the raw text is parsed as a whole.
    Scalar,

    /// Comma separated string-like values.
    Array,

    /// Comma separated enumeration members.
    List,
}

/// Object safe view of a property descriptor.
///
/// This is what the registry stores and what printing and validation
/// collaborators walk. Typed access goes through [`Resolve`].
pub trait Property: Send + Sync {
    fn key(&self) -> &PropertyKey;

    fn info(&self) -> &PropertyInfo;

    fn shape(&self) -> ValueShape;

    /// Whether the property has a declared default.
    fn is_required(&self) -> bool;

    /// Canonical text of the declared default, for required properties.
    fn default_text(&self) -> Option<String>;

    /// Every legal value for properties over a closed set of values.
    fn legal_values(&self) -> Vec<String>;

    /// Resolve raw text and render the effective value as canonical text.
    ///
    /// Absent raw text yields the default for required properties and `None`
    /// for optional ones.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseFailure`] if the raw text does not parse.
    fn resolve_text(&self, raw: Option<&str>) -> Result<Option<String>, ParseFailure>;

    /// Check raw text without keeping the parsed value.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseFailure`] if the raw text does not parse.
    fn validate(&self, raw: &str) -> Result<(), ParseFailure> {
        self.resolve_text(Some(raw)).map(|_| ())
    }
}

/// Typed resolution of raw text for a concrete descriptor.
pub trait Resolve: Property {
    /// `Option<T>` for optional properties, `T` for required ones.
    type Output;

    /// Resolve raw text, or its absence, into the typed value.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseFailure`] carrying the key, the raw text and, for
    /// arrays and lists, the index of the failing element.
    fn resolve(&self, raw: Option<&str>) -> Result<Self::Output, ParseFailure>;
}

/// Builder methods shared by both descriptor kinds.
///
/// Each method consumes and returns the descriptor so declarations read as a
/// single chain:
///
/// ```ignore
/// RequiredProperty::integer("blackduck.timeout", 120)
///     .named("Black Duck Timeout", "4.2.0")
///     .help("The time to wait for network connections to complete (in seconds).")
///     .groups(&[Group::BlackduckServer, Group::Blackduck, Group::Default])
///     .category(Category::Advanced)
/// ```
pub trait PropertyBuilder: Sized {
    fn info_mut(&mut self) -> &mut PropertyInfo;

    /// Set the display name and the version that introduced the property.
    #[must_use]
    fn named(mut self, name: &str, from_version: &str) -> Self {
        let info = self.info_mut();
        info.name = name.to_string();
        info.from_version = from_version.to_string();
        self
    }

    #[must_use]
    fn help(mut self, short: &str) -> Self {
        self.info_mut().help = Help {
            short: short.to_string(),
            long: None,
        };
        self
    }

    #[must_use]
    fn help_long(mut self, short: &str, long: &str) -> Self {
        self.info_mut().help = Help {
            short: short.to_string(),
            long: Some(long.to_string()),
        };
        self
    }

    /// Set the groups, primary group first.
    #[must_use]
    fn groups(mut self, groups: &[Group]) -> Self {
        self.info_mut().groups = groups.to_vec();
        self
    }

    #[must_use]
    fn category(mut self, category: Category) -> Self {
        self.info_mut().category = category;
        self
    }
}

//! Layered property configuration.
//!
//! [`PropertyConfiguration`] binds a [`Registry`] to an ordered list of
//! [`PropertySource`]s. The first source holding a key wins, so sources are
//! passed highest precedence first:
//!
//! **command line > environment > settings file > declared default**
//!
//! Raw text is only parsed when a value is asked for; a value that fails to
//! parse is reported as a [`ParseFailure`] and never replaced by the default.

pub mod env;
pub mod file;
pub mod source;

pub use source::{MapPropertySource, PropertySource};

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::trace;

use crate::error::ParseFailure;
use crate::parse::EnumDomain;
use crate::property::{
    Category, Group, Property, PropertyKey, RequiredFilterableEnumListProperty, Resolve, ValueShape,
};
use crate::registry::Registry;
use crate::selection::SelectionRequest;

/// The resolved value of one property, as shown to users.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EffectiveValue {
    pub key: PropertyKey,
    pub name: String,

    /// Canonical text of the value, `None` for an unset optional property.
    pub value: Option<String>,

    /// Name of the source that supplied the raw text.
    pub source: Option<String>,

    /// Whether the declared default was used.
    pub is_default: bool,

    pub shape: ValueShape,
    pub groups: Vec<Group>,
    pub category: Category,
}

/// Read access to property values across layered sources.
pub struct PropertyConfiguration<'a> {
    registry: &'a Registry<'a>,
    sources: Vec<Box<dyn PropertySource + 'a>>,
}

impl<'a> PropertyConfiguration<'a> {
    /// Bind `sources`, highest precedence first, to `registry`.
    #[must_use]
    pub fn new(registry: &'a Registry<'a>, sources: Vec<Box<dyn PropertySource + 'a>>) -> Self {
        Self { registry, sources }
    }

    #[must_use]
    pub const fn registry(&self) -> &'a Registry<'a> {
        self.registry
    }

    fn lookup(&self, key: &PropertyKey) -> Option<(&str, &str)> {
        self.sources.iter().find_map(|source| {
            let raw = source.raw_value(key)?;
            trace!(key = %key, source = source.name(), "found raw value");
            Some((source.name(), raw))
        })
    }

    /// Raw text supplied for a key by the highest precedence source.
    #[must_use]
    pub fn raw_value(&self, key: &PropertyKey) -> Option<&str> {
        self.lookup(key).map(|(_, raw)| raw)
    }

    /// Name of the source that supplied the raw text for a key.
    #[must_use]
    pub fn source_of(&self, key: &PropertyKey) -> Option<&str> {
        self.lookup(key).map(|(name, _)| name)
    }

    /// Whether any source supplies a value for the key.
    #[must_use]
    pub fn was_provided(&self, key: &PropertyKey) -> bool {
        self.lookup(key).is_some()
    }

    /// Resolve a property to its typed value.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseFailure`] if the supplied raw text does not parse.
    pub fn get<P: Resolve>(&self, property: &P) -> Result<P::Output, ParseFailure> {
        property.resolve(self.raw_value(property.key()))
    }

    /// Combine an include list and an exclude list into a selection request.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseFailure`] of whichever list does not parse.
    pub fn selection<E: EnumDomain>(
        &self,
        included: &RequiredFilterableEnumListProperty<E>,
        excluded: &RequiredFilterableEnumListProperty<E>,
    ) -> Result<SelectionRequest<E>, ParseFailure> {
        Ok(SelectionRequest::new(self.get(included)?, self.get(excluded)?))
    }

    /// Check every supplied value against its descriptor.
    ///
    /// Returns every failure, in registration order; an empty list means the
    /// configuration is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<ParseFailure> {
        self.registry
            .all()
            .iter()
            .filter_map(|property| {
                let raw = self.raw_value(property.key())?;
                property.validate(raw).err()
            })
            .collect()
    }

    /// Keys supplied by some source that no descriptor is registered under.
    #[must_use]
    pub fn unknown_keys(&self) -> Vec<PropertyKey> {
        self.sources
            .iter()
            .flat_map(|source| source.keys())
            .filter(|key| !self.registry.contains_key(key.as_str()))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// The effective value of every registered property, in registration order.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseFailure`] met; use [`Self::validate`] to
    /// collect all of them.
    pub fn effective_values(&self) -> Result<Vec<EffectiveValue>, ParseFailure> {
        self.registry
            .all()
            .iter()
            .map(|property| self.effective_value(*property))
            .collect()
    }

    fn effective_value(&self, property: &dyn Property) -> Result<EffectiveValue, ParseFailure> {
        let found = self.lookup(property.key());
        let value = property.resolve_text(found.map(|(_, raw)| raw))?;
        let info = property.info();

        Ok(EffectiveValue {
            key: property.key().clone(),
            name: info.name.clone(),
            is_default: found.is_none() && property.is_required(),
            value,
            source: found.map(|(name, _)| name.to_string()),
            shape: property.shape(),
            groups: info.groups.clone(),
            category: info.category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::enums::tests::Letter;
    use crate::property::{
        OptionalStringProperty, PropertyBuilder, RequiredBooleanProperty, RequiredIntegerProperty,
    };
    use crate::selection::Selection;

    struct Fixture {
        url: OptionalStringProperty,
        timeout: RequiredIntegerProperty,
        cleanup: RequiredBooleanProperty,
        included: RequiredFilterableEnumListProperty<Letter>,
        excluded: RequiredFilterableEnumListProperty<Letter>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                url: OptionalStringProperty::string("blackduck.url")
                    .named("Black Duck URL", "4.2.0")
                    .groups(&[Group::Blackduck]),
                timeout: RequiredIntegerProperty::integer("blackduck.timeout", 120)
                    .groups(&[Group::BlackduckServer])
                    .category(Category::Advanced),
                cleanup: RequiredBooleanProperty::boolean("detect.cleanup", true),
                included: RequiredFilterableEnumListProperty::filterable_enum_list("detect.letters", &[]),
                excluded: RequiredFilterableEnumListProperty::filterable_enum_list(
                    "detect.letters.excluded",
                    &[],
                ),
            }
        }

        fn registry(&self) -> Registry<'_> {
            Registry::new([
                &self.url as &dyn Property,
                &self.timeout,
                &self.cleanup,
                &self.included,
                &self.excluded,
            ])
            .unwrap()
        }
    }

    fn boxed(source: MapPropertySource) -> Box<dyn PropertySource> {
        Box::new(source)
    }

    #[test]
    fn test_first_source_wins() {
        let fixture = Fixture::new();
        let registry = fixture.registry();
        let config = PropertyConfiguration::new(
            &registry,
            vec![
                boxed(MapPropertySource::new("command line").with("blackduck.timeout", "30")),
                boxed(
                    MapPropertySource::new("environment")
                        .with("blackduck.timeout", "60")
                        .with("detect.cleanup", "false"),
                ),
            ],
        );

        assert_eq!(config.get(&fixture.timeout), Ok(30));
        assert_eq!(config.get(&fixture.cleanup), Ok(false));
        assert_eq!(config.source_of(fixture.timeout.key()), Some("command line"));
        assert_eq!(config.source_of(fixture.cleanup.key()), Some("environment"));
    }

    #[test]
    fn test_absent_values_fall_back() {
        let fixture = Fixture::new();
        let registry = fixture.registry();
        let config = PropertyConfiguration::new(&registry, Vec::new());

        assert_eq!(config.get(&fixture.url), Ok(None));
        assert_eq!(config.get(&fixture.timeout), Ok(120));
        assert!(!config.was_provided(fixture.timeout.key()));
        assert_eq!(config.source_of(fixture.timeout.key()), None);
    }

    #[test]
    fn test_bad_value_is_not_defaulted() {
        let fixture = Fixture::new();
        let registry = fixture.registry();
        let config = PropertyConfiguration::new(
            &registry,
            vec![boxed(MapPropertySource::new("file").with("blackduck.timeout", "soon"))],
        );

        let failure = config.get(&fixture.timeout).unwrap_err();
        assert_eq!(failure.key.as_str(), "blackduck.timeout");
        assert_eq!(failure.raw, "soon");
    }

    #[test]
    fn test_validate_collects_every_failure() {
        let fixture = Fixture::new();
        let registry = fixture.registry();
        let config = PropertyConfiguration::new(
            &registry,
            vec![boxed(
                MapPropertySource::new("file")
                    .with("blackduck.timeout", "soon")
                    .with("detect.cleanup", "yes")
                    .with("detect.letters", "A,Q")
                    .with("blackduck.url", "https://bd"),
            )],
        );

        let keys: Vec<String> = config
            .validate()
            .into_iter()
            .map(|failure| failure.key.to_string())
            .collect();
        assert_eq!(keys, vec!["blackduck.timeout", "detect.cleanup", "detect.letters"]);
    }

    #[test]
    fn test_unknown_keys_are_listed_once() {
        let fixture = Fixture::new();
        let registry = fixture.registry();
        let config = PropertyConfiguration::new(
            &registry,
            vec![
                boxed(MapPropertySource::new("a").with("detect.tool", "DOCKER")),
                boxed(
                    MapPropertySource::new("b")
                        .with("detect.tool", "BAZEL")
                        .with("blackduck.url", "https://bd"),
                ),
            ],
        );

        assert_eq!(config.unknown_keys(), vec![PropertyKey::new("detect.tool")]);
    }

    #[test]
    fn test_selection_from_sources() {
        let fixture = Fixture::new();
        let registry = fixture.registry();
        let config = PropertyConfiguration::new(
            &registry,
            vec![boxed(
                MapPropertySource::new("file")
                    .with("detect.letters", "ALL")
                    .with("detect.letters.excluded", "b"),
            )],
        );

        let request = config.selection(&fixture.included, &fixture.excluded).unwrap();
        assert_eq!(request.included(), &[Selection::All]);
        assert_eq!(request.resolve().members(), &[Letter::A, Letter::C]);
    }

    #[test]
    fn test_effective_values() {
        let fixture = Fixture::new();
        let registry = fixture.registry();
        let config = PropertyConfiguration::new(
            &registry,
            vec![boxed(MapPropertySource::new("file").with("blackduck.url", "https://bd"))],
        );

        let values = config.effective_values().unwrap();
        assert_eq!(values.len(), 5);

        assert_eq!(values[0].key.as_str(), "blackduck.url");
        assert_eq!(values[0].name, "Black Duck URL");
        assert_eq!(values[0].value.as_deref(), Some("https://bd"));
        assert_eq!(values[0].source.as_deref(), Some("file"));
        assert!(!values[0].is_default);

        assert_eq!(values[1].value.as_deref(), Some("120"));
        assert!(values[1].is_default);
        assert_eq!(values[1].category, Category::Advanced);

        assert_eq!(values[3].value.as_deref(), Some(""));
        assert_eq!(values[3].shape, ValueShape::List);
    }
}

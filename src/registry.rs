//! Lookup of property descriptors by normalized key.
//!
//! A [`Registry`] is built once from an explicit list of descriptors and is
//! read-only afterwards. Building fails if two descriptors normalize to the
//! same key. Iteration follows registration order.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::catalog::DetectProperties;
use crate::error::RegistryError;
use crate::property::{Group, Property, PropertyKey};

/// Every registered descriptor, indexed by key.
pub struct Registry<'a> {
    properties: Vec<&'a dyn Property>,
    index: HashMap<PropertyKey, usize>,
}

impl<'a> Registry<'a> {
    /// Build a registry from descriptors in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::KeyCollision`] naming the first key that is
    /// registered twice.
    pub fn new<I>(properties: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = &'a dyn Property>,
    {
        let mut registry = Self {
            properties: Vec::new(),
            index: HashMap::new(),
        };

        for property in properties {
            let key = property.key().clone();
            if registry.index.contains_key(&key) {
                return Err(RegistryError::KeyCollision { key });
            }

            registry.index.insert(key, registry.properties.len());
            registry.properties.push(property);
        }

        debug!(properties = registry.len(), "built property registry");
        Ok(registry)
    }

    /// Every descriptor, in registration order.
    #[must_use]
    pub fn all(&self) -> &[&'a dyn Property] {
        &self.properties
    }

    /// Find the descriptor for a key, normalizing the text first.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownKey`] if nothing is registered under
    /// the key.
    pub fn by_key(&self, key: &str) -> Result<&'a dyn Property, RegistryError> {
        let key = PropertyKey::new(key);
        self.index
            .get(&key)
            .map(|position| self.properties[*position])
            .ok_or(RegistryError::UnknownKey { key })
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(&PropertyKey::new(key))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Descriptors carrying `group` anywhere in their group list.
    pub fn in_group(&self, group: Group) -> impl Iterator<Item = &'a dyn Property> + '_ {
        self.properties
            .iter()
            .copied()
            .filter(move |property| property.info().has_group(group))
    }
}

/// The registry over [`DetectProperties::global`].
///
/// Built on first use. Concurrent first calls build exactly one registry and
/// every caller sees the same result.
///
/// # Errors
///
/// Returns the [`RegistryError`] raised when the catalog was registered.
pub fn global() -> Result<&'static Registry<'static>, RegistryError> {
    static REGISTRY: OnceLock<Result<Registry<'static>, RegistryError>> = OnceLock::new();

    REGISTRY
        .get_or_init(|| Registry::new(DetectProperties::global().all()))
        .as_ref()
        .map_err(Clone::clone)
}

//! Optional and required descriptors and their concrete aliases.

use tracing::debug;

use crate::error::ParseFailure;
use crate::parse::{
    BooleanParser, EnumDomain, EnumParser, ExtendedEnumParser, ExtendedValue, IntegerParser,
    ListParser, LongParser, StringParser, ValueParser,
};
use crate::selection::{Selection, SelectionParser};

use super::{Property, PropertyBuilder, PropertyInfo, PropertyKey, Resolve, ValueShape};

/// A property that resolves to `None` when no raw value is supplied.
#[derive(Clone, Debug)]
pub struct OptionalProperty<P> {
    key: PropertyKey,
    parser: P,
    info: PropertyInfo,
}

/// A property that resolves to its declared default when no raw value is supplied.
///
/// The default is stored already typed and is returned verbatim; it is never
/// formatted and parsed again.
#[derive(Clone, Debug)]
pub struct RequiredProperty<P: ValueParser> {
    key: PropertyKey,
    parser: P,
    default: P::Value,
    info: PropertyInfo,
}

impl<P: ValueParser> OptionalProperty<P> {
    #[must_use]
    pub fn new(key: &str, parser: P) -> Self {
        Self {
            key: PropertyKey::new(key),
            parser,
            info: PropertyInfo::default(),
        }
    }

    pub const fn parser(&self) -> &P {
        &self.parser
    }
}

impl<P: ValueParser> RequiredProperty<P> {
    #[must_use]
    pub fn new(key: &str, parser: P, default: P::Value) -> Self {
        Self {
            key: PropertyKey::new(key),
            parser,
            default,
            info: PropertyInfo::default(),
        }
    }

    pub const fn parser(&self) -> &P {
        &self.parser
    }

    pub const fn default_value(&self) -> &P::Value {
        &self.default
    }
}

impl<P: ValueParser> PropertyBuilder for OptionalProperty<P> {
    fn info_mut(&mut self) -> &mut PropertyInfo {
        &mut self.info
    }
}

impl<P: ValueParser> PropertyBuilder for RequiredProperty<P> {
    fn info_mut(&mut self) -> &mut PropertyInfo {
        &mut self.info
    }
}

impl<P: ValueParser> Property for OptionalProperty<P> {
    fn key(&self) -> &PropertyKey {
        &self.key
    }

    fn info(&self) -> &PropertyInfo {
        &self.info
    }

    fn shape(&self) -> ValueShape {
        self.parser.shape()
    }

    fn is_required(&self) -> bool {
        false
    }

    fn default_text(&self) -> Option<String> {
        None
    }

    fn legal_values(&self) -> Vec<String> {
        self.parser.legal_values()
    }

    fn resolve_text(&self, raw: Option<&str>) -> Result<Option<String>, ParseFailure> {
        Ok(self
            .resolve(raw)?
            .map(|value| self.parser.format(&value)))
    }
}

impl<P: ValueParser> Property for RequiredProperty<P> {
    fn key(&self) -> &PropertyKey {
        &self.key
    }

    fn info(&self) -> &PropertyInfo {
        &self.info
    }

    fn shape(&self) -> ValueShape {
        self.parser.shape()
    }

    fn is_required(&self) -> bool {
        true
    }

    fn default_text(&self) -> Option<String> {
        Some(self.parser.format(&self.default))
    }

    fn legal_values(&self) -> Vec<String> {
        self.parser.legal_values()
    }

    fn resolve_text(&self, raw: Option<&str>) -> Result<Option<String>, ParseFailure> {
        let value = self.resolve(raw)?;
        Ok(Some(self.parser.format(&value)))
    }
}

impl<P: ValueParser> Resolve for OptionalProperty<P> {
    type Output = Option<P::Value>;

    fn resolve(&self, raw: Option<&str>) -> Result<Option<P::Value>, ParseFailure> {
        let Some(raw) = raw else {
            return Ok(None);
        };

        self.parser
            .parse(raw)
            .map(Some)
            .map_err(|source| ParseFailure::new(self.key.clone(), raw, source))
    }
}

impl<P: ValueParser> Resolve for RequiredProperty<P> {
    type Output = P::Value;

    fn resolve(&self, raw: Option<&str>) -> Result<P::Value, ParseFailure> {
        let Some(raw) = raw else {
            debug!(key = %self.key, "no value supplied, using declared default");
            return Ok(self.default.clone());
        };

        self.parser
            .parse(raw)
            .map_err(|source| ParseFailure::new(self.key.clone(), raw, source))
    }
}

pub type OptionalStringProperty = OptionalProperty<StringParser>;
pub type OptionalBooleanProperty = OptionalProperty<BooleanParser>;
pub type OptionalIntegerProperty = OptionalProperty<IntegerParser>;
pub type OptionalStringArrayProperty = OptionalProperty<ListParser<StringParser>>;
pub type OptionalEnumListProperty<E> = OptionalProperty<ListParser<EnumParser<E>>>;

pub type RequiredStringProperty = RequiredProperty<StringParser>;
pub type RequiredBooleanProperty = RequiredProperty<BooleanParser>;
pub type RequiredIntegerProperty = RequiredProperty<IntegerParser>;
pub type RequiredLongProperty = RequiredProperty<LongParser>;
pub type RequiredStringArrayProperty = RequiredProperty<ListParser<StringParser>>;
pub type RequiredEnumProperty<E> = RequiredProperty<EnumParser<E>>;
pub type RequiredEnumListProperty<E> = RequiredProperty<ListParser<EnumParser<E>>>;
pub type RequiredFilterableEnumListProperty<E> = RequiredProperty<ListParser<SelectionParser<E>>>;
pub type RequiredExtendedEnumProperty<B, X> = RequiredProperty<ExtendedEnumParser<B, X>>;

impl OptionalStringProperty {
    #[must_use]
    pub fn string(key: &str) -> Self {
        Self::new(key, StringParser)
    }
}

impl OptionalBooleanProperty {
    #[must_use]
    pub fn boolean(key: &str) -> Self {
        Self::new(key, BooleanParser)
    }
}

impl OptionalIntegerProperty {
    #[must_use]
    pub fn integer(key: &str) -> Self {
        Self::new(key, IntegerParser)
    }
}

impl OptionalStringArrayProperty {
    #[must_use]
    pub fn string_array(key: &str) -> Self {
        Self::new(key, ListParser::array(StringParser))
    }
}

impl<E: EnumDomain> OptionalEnumListProperty<E> {
    #[must_use]
    pub fn enum_list(key: &str) -> Self {
        Self::new(key, ListParser::list(EnumParser::new()))
    }
}

impl RequiredStringProperty {
    #[must_use]
    pub fn string(key: &str, default: &str) -> Self {
        Self::new(key, StringParser, default.to_string())
    }
}

impl RequiredBooleanProperty {
    #[must_use]
    pub fn boolean(key: &str, default: bool) -> Self {
        Self::new(key, BooleanParser, default)
    }
}

impl RequiredIntegerProperty {
    #[must_use]
    pub fn integer(key: &str, default: i32) -> Self {
        Self::new(key, IntegerParser, default)
    }
}

impl RequiredLongProperty {
    #[must_use]
    pub fn long(key: &str, default: i64) -> Self {
        Self::new(key, LongParser, default)
    }
}

impl RequiredStringArrayProperty {
    #[must_use]
    pub fn string_array(key: &str, default: &[&str]) -> Self {
        Self::new(
            key,
            ListParser::array(StringParser),
            default.iter().map(|value| (*value).to_string()).collect(),
        )
    }
}

impl<E: EnumDomain> RequiredEnumProperty<E> {
    #[must_use]
    pub fn enumeration(key: &str, default: E) -> Self {
        Self::new(key, EnumParser::new(), default)
    }
}

impl<E: EnumDomain> RequiredEnumListProperty<E> {
    #[must_use]
    pub fn enum_list(key: &str, default: &[E]) -> Self {
        Self::new(key, ListParser::list(EnumParser::new()), default.to_vec())
    }
}

impl<E: EnumDomain> RequiredFilterableEnumListProperty<E> {
    #[must_use]
    pub fn filterable_enum_list(key: &str, default: &[Selection<E>]) -> Self {
        Self::new(key, ListParser::list(SelectionParser::new()), default.to_vec())
    }
}

impl<B: EnumDomain, X: EnumDomain> RequiredExtendedEnumProperty<B, X> {
    #[must_use]
    pub fn extended_enum(key: &str, default: ExtendedValue<B, X>) -> Self {
        Self::new(key, ExtendedEnumParser::new(), default)
    }
}

//! Values drawn from the union of two independently owned enumerations.
//!
//! The base domain is owned elsewhere and changes from release to release.
//! The extension domain adds a few values of its own (typically `NONE`)
//! without having to keep the base domain in sync.

use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

use crate::error::ValueParseError;

use super::{EnumDomain, ValueParser};

/// A member of either the base domain `B` or the extension domain `X`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExtendedValue<B, X> {
    Base(B),
    Extension(X),
}

impl<B: EnumDomain, X: EnumDomain> ExtendedValue<B, X> {
    /// The base member, if this value came from the base domain.
    #[must_use]
    pub const fn base(&self) -> Option<B> {
        match self {
            Self::Base(value) => Some(*value),
            Self::Extension(_) => None,
        }
    }

    /// The extension member, if this value came from the extension domain.
    #[must_use]
    pub const fn extension(&self) -> Option<X> {
        match self {
            Self::Base(_) => None,
            Self::Extension(value) => Some(*value),
        }
    }

    /// Symbolic name of the wrapped member.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Base(value) => value.name(),
            Self::Extension(value) => value.name(),
        }
    }
}

impl<B: EnumDomain, X: EnumDomain> Display for ExtendedValue<B, X> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

/// Parses an [`ExtendedValue`], trying the extension domain first.
///
/// A name present in both domains therefore resolves to the extension member.
#[derive(Debug)]
pub struct ExtendedEnumParser<B, X>(PhantomData<fn() -> (B, X)>);

impl<B, X> ExtendedEnumParser<B, X> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<B, X> Default for ExtendedEnumParser<B, X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B, X> Clone for ExtendedEnumParser<B, X> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<B: EnumDomain, X: EnumDomain> ValueParser for ExtendedEnumParser<B, X> {
    type Value = ExtendedValue<B, X>;

    fn parse(&self, raw: &str) -> Result<Self::Value, ValueParseError> {
        if let Some(extension) = X::from_name(raw) {
            return Ok(ExtendedValue::Extension(extension));
        }

        if let Some(base) = B::from_name(raw) {
            return Ok(ExtendedValue::Base(base));
        }

        Err(ValueParseError::UnknownExtendedMember {
            raw: raw.to_string(),
            extension_domain: X::DOMAIN,
            extension_legal: X::names(),
            base_domain: B::DOMAIN,
            base_legal: B::names(),
        })
    }

    fn format(&self, value: &Self::Value) -> String {
        value.name()
    }

    fn legal_values(&self) -> Vec<String> {
        let mut values = X::names();
        values.extend(B::names());
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
    #[value(rename_all = "SCREAMING_SNAKE_CASE")]
    enum BaseDomain {
        X,
        Y,
        Shared,
    }

    impl EnumDomain for BaseDomain {
        const DOMAIN: &'static str = "BaseDomain";
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
    #[value(rename_all = "SCREAMING_SNAKE_CASE")]
    enum ExtensionDomain {
        Z,
        Shared,
    }

    impl EnumDomain for ExtensionDomain {
        const DOMAIN: &'static str = "ExtensionDomain";
    }

    type Parser = ExtendedEnumParser<BaseDomain, ExtensionDomain>;

    #[test]
    fn test_extension_name_resolves_to_extension() {
        assert_eq!(
            Parser::new().parse("Z"),
            Ok(ExtendedValue::Extension(ExtensionDomain::Z))
        );
    }

    #[test]
    fn test_base_name_resolves_to_base() {
        assert_eq!(
            Parser::new().parse("x"),
            Ok(ExtendedValue::Base(BaseDomain::X))
        );
    }

    #[test]
    fn test_shared_name_prefers_extension() {
        assert_eq!(
            Parser::new().parse("SHARED"),
            Ok(ExtendedValue::Extension(ExtensionDomain::Shared))
        );
    }

    #[test]
    fn test_unknown_name_reports_both_domains() {
        let error = Parser::new().parse("Q").unwrap_err();

        assert_eq!(
            error,
            ValueParseError::UnknownExtendedMember {
                raw: "Q".to_string(),
                extension_domain: "ExtensionDomain",
                extension_legal: vec!["Z".to_string(), "SHARED".to_string()],
                base_domain: "BaseDomain",
                base_legal: vec!["X".to_string(), "Y".to_string(), "SHARED".to_string()],
            }
        );
        let message = error.to_string();
        assert!(message.contains("ExtensionDomain"));
        assert!(message.contains("BaseDomain"));
    }

    #[test]
    fn test_accessors() {
        let base: ExtendedValue<BaseDomain, ExtensionDomain> = ExtendedValue::Base(BaseDomain::Y);
        assert_eq!(base.base(), Some(BaseDomain::Y));
        assert_eq!(base.extension(), None);
        assert_eq!(base.to_string(), "Y");
    }

    #[test]
    fn test_round_trip_every_member() {
        let parser = Parser::new();
        for member in ExtensionDomain::members() {
            let value = ExtendedValue::Extension(*member);
            assert_eq!(parser.parse(&parser.format(&value)), Ok(value));
        }
        for member in [BaseDomain::X, BaseDomain::Y] {
            let value = ExtendedValue::Base(member);
            assert_eq!(parser.parse(&parser.format(&value)), Ok(value));
        }
    }
}

//! Enumeration domains and the parser that looks members up by name.

use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use clap::ValueEnum;

use crate::error::ValueParseError;

use super::ValueParser;

/// Reserved selector meaning "every member of the domain".
///
/// It is never a member of a domain itself.
pub const ALL: &str = "ALL";

/// An ordered set of uniquely named symbolic values.
///
/// Domains are declared as `clap::ValueEnum` enums, which gives them an
/// ordered member list and a stable name per member. Domains that spell their
/// members in upper case use `#[value(rename_all = "SCREAMING_SNAKE_CASE")]`.
pub trait EnumDomain: ValueEnum + Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Name of the domain, used in error messages.
    const DOMAIN: &'static str;

    /// Every member, in declaration order.
    #[must_use]
    fn members() -> &'static [Self] {
        Self::value_variants()
    }

    /// Symbolic name of this member.
    #[must_use]
    fn name(&self) -> String {
        self.to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_default()
    }

    /// Every member name, in declaration order.
    #[must_use]
    fn names() -> Vec<String> {
        Self::members().iter().map(Self::name).collect()
    }

    /// Find the member whose name matches `raw` exactly, ignoring letter case
    /// and surrounding whitespace.
    #[must_use]
    fn from_name(raw: &str) -> Option<Self> {
        let text = raw.trim();
        Self::members()
            .iter()
            .copied()
            .find(|member| member.name().eq_ignore_ascii_case(text))
    }
}

/// Parses a member of the domain `E` by name.
#[derive(Debug)]
pub struct EnumParser<E>(PhantomData<fn() -> E>);

impl<E> EnumParser<E> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Default for EnumParser<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for EnumParser<E> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<E: EnumDomain> ValueParser for EnumParser<E> {
    type Value = E;

    fn parse(&self, raw: &str) -> Result<E, ValueParseError> {
        E::from_name(raw).ok_or_else(|| ValueParseError::UnknownMember {
            raw: raw.to_string(),
            domain: E::DOMAIN,
            legal: E::names(),
        })
    }

    fn format(&self, value: &E) -> String {
        value.name()
    }

    fn legal_values(&self) -> Vec<String> {
        E::names()
    }
}

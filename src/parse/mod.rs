//! Raw text to typed value conversion.
//!
//! A [`ValueParser`] turns one raw token into one typed value. Parsers are
//! pure: they hold no mutable state and parsing the same text twice gives the
//! same answer. Every parser also knows the canonical text of its values so
//! that a parsed value can be written back out and parsed again.
//!
//! The scalar parsers live here; enumerations, lists and extended
//! enumerations have their own submodules.

pub mod enums;
pub mod extended;
pub mod list;

pub use enums::{EnumDomain, EnumParser};
pub use extended::{ExtendedEnumParser, ExtendedValue};
pub use list::ListParser;

use crate::error::ValueParseError;
use crate::property::ValueShape;

/// Converts raw text into a value of type [`ValueParser::Value`].
pub trait ValueParser: Send + Sync {
    /// The typed value produced by this parser.
    type Value: Clone + std::fmt::Debug + PartialEq + Send + Sync;

    /// Parse one raw token.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueParseError`] when the text is not a valid
    /// representation of [`ValueParser::Value`]. Invalid text is never
    /// coerced into some fallback value.
    fn parse(&self, raw: &str) -> Result<Self::Value, ValueParseError>;

    /// Canonical text for a value. Parsing the result yields the same value.
    fn format(&self, value: &Self::Value) -> String;

    /// How raw text is split before parsing.
    fn shape(&self) -> ValueShape {
        ValueShape::Scalar
    }

    /// Every legal value, for parsers over a closed set of values.
    ///
    /// Open-ended parsers (strings, numbers) return an empty list.
    fn legal_values(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Passes text through unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct StringParser;

impl ValueParser for StringParser {
    type Value = String;

    fn parse(&self, raw: &str) -> Result<String, ValueParseError> {
        Ok(raw.to_string())
    }

    fn format(&self, value: &String) -> String {
        value.clone()
    }
}

/// Accepts `true` or `false` in any letter case.
#[derive(Clone, Copy, Debug, Default)]
pub struct BooleanParser;

impl ValueParser for BooleanParser {
    type Value = bool;

    fn parse(&self, raw: &str) -> Result<bool, ValueParseError> {
        let text = raw.trim();
        if text.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if text.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(ValueParseError::InvalidValue {
                raw: raw.to_string(),
                expected: "boolean",
            })
        }
    }

    fn format(&self, value: &bool) -> String {
        value.to_string()
    }

    fn legal_values(&self) -> Vec<String> {
        vec!["true".to_string(), "false".to_string()]
    }
}

/// Parses a signed 32-bit decimal integer.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntegerParser;

impl ValueParser for IntegerParser {
    type Value = i32;

    fn parse(&self, raw: &str) -> Result<i32, ValueParseError> {
        raw.trim()
            .parse::<i32>()
            .map_err(|_| ValueParseError::InvalidValue {
                raw: raw.to_string(),
                expected: "integer",
            })
    }

    fn format(&self, value: &i32) -> String {
        value.to_string()
    }
}

/// Parses a signed 64-bit decimal integer.
#[derive(Clone, Copy, Debug, Default)]
pub struct LongParser;

impl ValueParser for LongParser {
    type Value = i64;

    fn parse(&self, raw: &str) -> Result<i64, ValueParseError> {
        raw.trim()
            .parse::<i64>()
            .map_err(|_| ValueParseError::InvalidValue {
                raw: raw.to_string(),
                expected: "long",
            })
    }

    fn format(&self, value: &i64) -> String {
        value.to_string()
    }
}

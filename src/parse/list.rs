//! Comma separated arrays and lists.

use crate::error::ValueParseError;
use crate::property::ValueShape;

use super::ValueParser;

/// Separator between the elements of array and list values.
pub const DELIMITER: char = ',';

/// Splits raw text on [`DELIMITER`] and parses each element with `P`.
///
/// Tokens are trimmed and whitespace-only tokens are dropped. Order and
/// duplicates are preserved. The first token that fails to parse fails the
/// whole value; nothing is partially returned.
#[derive(Clone, Debug)]
pub struct ListParser<P> {
    element: P,
    shape: ValueShape,
}

impl<P: ValueParser> ListParser<P> {
    /// A parser for string-like arrays.
    #[must_use]
    pub const fn array(element: P) -> Self {
        Self {
            element,
            shape: ValueShape::Array,
        }
    }

    /// A parser for enumeration lists.
    #[must_use]
    pub const fn list(element: P) -> Self {
        Self {
            element,
            shape: ValueShape::List,
        }
    }

    /// The parser applied to each element.
    pub const fn element(&self) -> &P {
        &self.element
    }
}

/// Split raw text into its non-blank, trimmed tokens.
///
/// # Examples
///
/// ```
/// # use detect_config::parse::list::tokens;
/// assert_eq!(tokens("a, b ,,c"), vec!["a", "b", "c"]);
/// ```
#[must_use]
pub fn tokens(raw: &str) -> Vec<&str> {
    raw.split(DELIMITER)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

impl<P: ValueParser> ValueParser for ListParser<P> {
    type Value = Vec<P::Value>;

    fn parse(&self, raw: &str) -> Result<Self::Value, ValueParseError> {
        tokens(raw)
            .into_iter()
            .enumerate()
            .map(|(index, token)| {
                self.element
                    .parse(token)
                    .map_err(|source| ValueParseError::Element {
                        index,
                        raw: token.to_string(),
                        source: Box::new(source),
                    })
            })
            .collect()
    }

    fn format(&self, value: &Self::Value) -> String {
        value
            .iter()
            .map(|element| self.element.format(element))
            .collect::<Vec<_>>()
            .join(&DELIMITER.to_string())
    }

    fn shape(&self) -> ValueShape {
        self.shape
    }

    fn legal_values(&self) -> Vec<String> {
        self.element.legal_values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::enums::tests::Letter;
    use crate::parse::{EnumDomain, EnumParser, IntegerParser, StringParser};
    use proptest::prelude::*;

    #[test]
    fn test_tokens_trim_and_skip_blanks() {
        assert_eq!(tokens("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(tokens(" , ,"), Vec::<&str>::new());
        assert_eq!(tokens(""), Vec::<&str>::new());
    }

    #[test]
    fn test_string_array_preserves_order() {
        let parser = ListParser::array(StringParser);
        assert_eq!(
            parser.parse("a, b ,c").unwrap(),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_string_array_preserves_duplicates() {
        let parser = ListParser::array(StringParser);
        assert_eq!(
            parser.parse("a,a").unwrap(),
            vec!["a".to_string(), "a".to_string()]
        );
    }

    #[test]
    fn test_separators_only_is_empty() {
        let parser = ListParser::array(IntegerParser);
        assert_eq!(parser.parse(" , , ").unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_failure_identifies_token_and_position() {
        let parser = ListParser::array(IntegerParser);
        let error = parser.parse("1, 2,, x, 4").unwrap_err();

        assert_eq!(
            error,
            ValueParseError::Element {
                index: 2,
                raw: "x".to_string(),
                source: Box::new(ValueParseError::InvalidValue {
                    raw: "x".to_string(),
                    expected: "integer",
                }),
            }
        );
        assert_eq!(error.index(), Some(2));
    }

    #[test]
    fn test_enum_list() {
        let parser = ListParser::list(EnumParser::<Letter>::new());
        assert_eq!(
            parser.parse("c,a,c").unwrap(),
            vec![Letter::C, Letter::A, Letter::C]
        );
        assert_eq!(parser.shape(), ValueShape::List);
        assert_eq!(parser.legal_values(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_format_joins_with_delimiter() {
        let parser = ListParser::list(EnumParser::<Letter>::new());
        assert_eq!(parser.format(&vec![Letter::B, Letter::A]), "B,A");
        assert_eq!(parser.format(&Vec::new()), "");
    }

    proptest! {
        #[test]
        fn test_integer_array_round_trip(values in proptest::collection::vec(any::<i32>(), 0..16)) {
            let parser = ListParser::array(IntegerParser);
            let text = parser.format(&values);
            prop_assert_eq!(parser.parse(&text), Ok(values));
        }

        #[test]
        fn test_enum_list_round_trip(indexes in proptest::collection::vec(0usize..3, 0..16)) {
            let parser = ListParser::list(EnumParser::<Letter>::new());
            let values: Vec<Letter> = indexes.iter().map(|i| Letter::members()[*i]).collect();
            let text = parser.format(&values);
            prop_assert_eq!(parser.parse(&text), Ok(values));
        }
    }
}

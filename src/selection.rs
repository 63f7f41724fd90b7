//! Include / exclude selection over an enumeration domain.
//!
//! Properties such as `detect.tools` and `detect.tools.excluded` hold lists of
//! [`Selection`] tokens: either a domain member or the reserved `ALL`
//! selector. A [`SelectionRequest`] combines an include list and an exclude
//! list into the [`ActiveSet`] of members that apply:
//!
//! 1. `ALL` in a list stands for every member of the domain.
//! 2. An empty include list means every member is eligible.
//! 3. Exclusion always wins over inclusion.
//!
//! The result depends only on the sets involved, never on the order tokens
//! were written in, and iterates in domain order.

use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

use tracing::debug;

use crate::error::{SelectionError, ValueParseError};
use crate::parse::enums::ALL;
use crate::parse::{EnumDomain, ValueParser};

/// One token of an include or exclude list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Selection<E> {
    /// The reserved selector for every member.
    All,

    /// A single member.
    Value(E),
}

impl<E: EnumDomain> Display for Selection<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Value(value) => f.write_str(&value.name()),
        }
    }
}

/// Parses a [`Selection`] token: `ALL` (any case) or a member name.
#[derive(Debug)]
pub struct SelectionParser<E>(PhantomData<fn() -> E>);

impl<E> SelectionParser<E> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Default for SelectionParser<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for SelectionParser<E> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<E: EnumDomain> ValueParser for SelectionParser<E> {
    type Value = Selection<E>;

    fn parse(&self, raw: &str) -> Result<Selection<E>, ValueParseError> {
        if raw.trim().eq_ignore_ascii_case(ALL) {
            return Ok(Selection::All);
        }

        E::from_name(raw)
            .map(Selection::Value)
            .ok_or_else(|| ValueParseError::UnknownMember {
                raw: raw.to_string(),
                domain: E::DOMAIN,
                legal: std::iter::once(ALL.to_string()).chain(E::names()).collect(),
            })
    }

    fn format(&self, value: &Selection<E>) -> String {
        value.to_string()
    }

    fn legal_values(&self) -> Vec<String> {
        std::iter::once(ALL.to_string()).chain(E::names()).collect()
    }
}

/// Expand a token list into the set of members it names.
fn expand<E: EnumDomain>(tokens: &[Selection<E>]) -> HashSet<E> {
    if tokens.contains(&Selection::All) {
        return E::members().iter().copied().collect();
    }

    tokens
        .iter()
        .filter_map(|token| match token {
            Selection::All => None,
            Selection::Value(value) => Some(*value),
        })
        .collect()
}

/// An include list and an exclude list over the domain `E`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionRequest<E> {
    included: Vec<Selection<E>>,
    excluded: Vec<Selection<E>>,
}

impl<E: EnumDomain> SelectionRequest<E> {
    #[must_use]
    pub const fn new(included: Vec<Selection<E>>, excluded: Vec<Selection<E>>) -> Self {
        Self { included, excluded }
    }

    /// A request with nothing included and nothing excluded.
    #[must_use]
    pub const fn everything() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    #[must_use]
    pub fn included(&self) -> &[Selection<E>] {
        &self.included
    }

    #[must_use]
    pub fn excluded(&self) -> &[Selection<E>] {
        &self.excluded
    }

    /// Compute the active members.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // domain {A, B, C}
    /// SelectionRequest::new(vec![Selection::All], vec![Selection::Value(B)]).resolve()
    /// // -> {A, C}
    /// ```
    #[must_use]
    pub fn resolve(&self) -> ActiveSet<E> {
        let included = expand(&self.included);
        let excluded = expand(&self.excluded);

        let members: Vec<E> = E::members()
            .iter()
            .copied()
            .filter(|member| included.is_empty() || included.contains(member))
            .filter(|member| !excluded.contains(member))
            .collect();

        debug!(
            domain = E::DOMAIN,
            included = self.included.len(),
            excluded = self.excluded.len(),
            active = members.len(),
            "resolved selection"
        );

        ActiveSet { members }
    }
}

/// Members selected by a [`SelectionRequest`], in domain order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveSet<E> {
    members: Vec<E>,
}

impl<E: EnumDomain> ActiveSet<E> {
    #[must_use]
    pub fn contains(&self, member: E) -> bool {
        self.members.contains(&member)
    }

    #[must_use]
    pub fn members(&self) -> &[E] {
        &self.members
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.members.iter()
    }

    /// Member names, in domain order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.members.iter().map(EnumDomain::name).collect()
    }

    /// Check that every required member is active.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::RequiredMissing`] listing every required
    /// member that is not active, in domain order.
    pub fn require(&self, required: &[E]) -> Result<(), SelectionError> {
        let missing: Vec<String> = E::members()
            .iter()
            .filter(|member| required.contains(*member) && !self.contains(**member))
            .map(EnumDomain::name)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(SelectionError::RequiredMissing {
                domain: E::DOMAIN,
                missing,
            })
        }
    }
}

impl<'a, E> IntoIterator for &'a ActiveSet<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::ListParser;
    use crate::parse::enums::tests::Letter::{self, A, B, C};
    use proptest::prelude::*;

    fn request(included: &[Selection<Letter>], excluded: &[Selection<Letter>]) -> ActiveSet<Letter> {
        SelectionRequest::new(included.to_vec(), excluded.to_vec()).resolve()
    }

    #[test]
    fn test_nothing_selected_means_everything() {
        assert_eq!(request(&[], &[]).members(), &[A, B, C]);
    }

    #[test]
    fn test_all_minus_excluded() {
        assert_eq!(
            request(&[Selection::All], &[Selection::Value(B)]).members(),
            &[A, C]
        );
    }

    #[test]
    fn test_exclusion_wins_over_inclusion() {
        assert!(request(&[Selection::Value(A)], &[Selection::Value(A)]).is_empty());
    }

    #[test]
    fn test_explicit_include() {
        assert_eq!(
            request(&[Selection::Value(A), Selection::Value(B)], &[]).members(),
            &[A, B]
        );
    }

    #[test]
    fn test_all_in_both_lists_is_empty() {
        assert!(request(&[Selection::All], &[Selection::All]).is_empty());
    }

    #[test]
    fn test_exclude_all_without_include_is_empty() {
        assert!(request(&[], &[Selection::All]).is_empty());
    }

    #[test]
    fn test_all_alongside_members_is_still_everything() {
        assert_eq!(
            request(&[Selection::Value(C), Selection::All], &[]).members(),
            &[A, B, C]
        );
    }

    #[test]
    fn test_result_follows_domain_order() {
        assert_eq!(
            request(&[Selection::Value(C), Selection::Value(A)], &[]).members(),
            &[A, C]
        );
    }

    #[test]
    fn test_required_member_missing() {
        let active = request(&[Selection::All], &[Selection::Value(B)]);
        assert_eq!(
            active.require(&[B]),
            Err(SelectionError::RequiredMissing {
                domain: "Letter",
                missing: vec!["B".to_string()],
            })
        );
    }

    #[test]
    fn test_required_members_present() {
        let active = request(&[], &[Selection::Value(B)]);
        assert_eq!(active.require(&[A, C]), Ok(()));
        assert_eq!(active.require(&[]), Ok(()));
    }

    #[test]
    fn test_required_lists_all_missing_in_domain_order() {
        let active = request(&[Selection::Value(B)], &[]);
        assert_eq!(
            active.require(&[C, A]),
            Err(SelectionError::RequiredMissing {
                domain: "Letter",
                missing: vec!["A".to_string(), "C".to_string()],
            })
        );
    }

    #[test]
    fn test_selection_parser_accepts_all_in_any_case() {
        let parser = SelectionParser::<Letter>::new();
        assert_eq!(parser.parse("all"), Ok(Selection::All));
        assert_eq!(parser.parse(" ALL "), Ok(Selection::All));
        assert_eq!(parser.parse("b"), Ok(Selection::Value(B)));
    }

    #[test]
    fn test_selection_parser_rejects_unknown_tokens() {
        let parser = ListParser::list(SelectionParser::<Letter>::new());
        let error = parser.parse("A,NONE").unwrap_err();

        assert_eq!(error.index(), Some(1));
        match error {
            ValueParseError::Element { raw, source, .. } => {
                assert_eq!(raw, "NONE");
                assert!(matches!(*source, ValueParseError::UnknownMember { .. }));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_selection_format_round_trip() {
        let parser = SelectionParser::<Letter>::new();
        for token in [Selection::All, Selection::Value(A), Selection::Value(C)] {
            assert_eq!(parser.parse(&parser.format(&token)), Ok(token));
        }
    }

    fn token() -> impl Strategy<Value = Selection<Letter>> {
        prop_oneof![
            Just(Selection::All),
            Just(Selection::Value(A)),
            Just(Selection::Value(B)),
            Just(Selection::Value(C)),
        ]
    }

    proptest! {
        #[test]
        fn test_resolution_ignores_token_order(
            included in proptest::collection::vec(token(), 0..6),
            excluded in proptest::collection::vec(token(), 0..6),
        ) {
            let forward = request(&included, &excluded);

            let mut included_rev = included.clone();
            included_rev.reverse();
            let mut excluded_rev = excluded.clone();
            excluded_rev.reverse();
            let backward = request(&included_rev, &excluded_rev);

            prop_assert_eq!(forward, backward);
        }

        #[test]
        fn test_excluded_members_never_active(
            included in proptest::collection::vec(token(), 0..6),
            excluded in proptest::collection::vec(token(), 0..6),
        ) {
            let active = request(&included, &excluded);
            for token in &excluded {
                match token {
                    Selection::All => prop_assert!(active.is_empty()),
                    Selection::Value(value) => prop_assert!(!active.contains(*value)),
                }
            }
        }
    }
}

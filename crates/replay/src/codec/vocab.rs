//! Name tables for the enumerations that appear in scripts.

use std::collections::HashMap;

use strum::{EnumCount, IntoEnumIterator};

use crate::error::{DecodeError, DecodeErrorKind};
use crate::text::{COMMENT_MARKER, Token};

/// Bidirectional mapping between enumeration values and their script names.
///
/// Forward lookup goes through the enumeration's `strum` name; reverse lookup
/// uses a map built once from every value. A table whose names are empty,
/// contain whitespace or the comment marker, or collide is a programming
/// error and panics at construction.
#[derive(Clone, Debug)]
pub struct Vocabulary<T> {
    /// Noun used in "undefined ..." diagnostics.
    domain: &'static str,
    by_name: HashMap<&'static str, T>,
}

impl<T> Vocabulary<T>
where
    T: Copy + IntoEnumIterator + EnumCount + Into<&'static str>,
{
    pub fn build(domain: &'static str) -> Self {
        let mut by_name = HashMap::with_capacity(T::COUNT);
        for value in T::iter() {
            let name: &'static str = value.into();
            assert!(!name.is_empty(), "{domain} table has an unnamed value");
            assert!(
                !name.contains(char::is_whitespace) && !name.contains(COMMENT_MARKER),
                "{domain} name {name:?} is not a single token"
            );
            if by_name.insert(name, value).is_some() {
                panic!("{domain} name {name:?} is used twice");
            }
        }
        assert_eq!(by_name.len(), T::COUNT, "{domain} table missed a value");

        Self { domain, by_name }
    }

    pub fn name(&self, value: T) -> &'static str {
        value.into()
    }

    /// Resolves a token to its value, or reports the token as undefined.
    pub fn parse(&self, token: &Token<'_>) -> Result<T, DecodeError> {
        self.by_name
            .get(token.text)
            .copied()
            .ok_or_else(|| token.error(DecodeErrorKind::UndefinedName(self.domain)))
    }
}

//! The server's compact type-descriptor grammar
//!
//! A descriptor is one of `scalar`, `T[]`, `T[][]`, `Map<K,V>`, `Key<T>`,
//! `enum`, or an opaque schema name. [`DescriptorForm::parse`] peels exactly
//! one layer off a descriptor; inner descriptors stay as borrowed slices and
//! are parsed again by the translator when it recurses.

use crate::translation::TranslationError;

pub const ARRAY2_SUFFIX: &str = "[][]";
pub const ARRAY_SUFFIX: &str = "[]";
pub const MAP_PREFIX: &str = "Map<";
pub const KEY_PREFIX: &str = "Key<";
pub const ENUM_LITERAL: &str = "enum";

const CLOSING: char = '>';

/// Outermost layer of a type descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorForm<'a> {
    /// `T[][]`
    Array2(&'a str),
    /// `T[]`
    Array(&'a str),
    /// `Map<K,V>`
    Map { key: &'a str, value: &'a str },
    /// `Key<T>`
    Key(&'a str),
    /// The literal `enum`
    Enum,
    /// A scalar name or an opaque schema/object name
    Named(&'a str),
}

impl<'a> DescriptorForm<'a> {
    /// Classify the outermost layer of `descriptor`.
    ///
    /// Checks run in priority order: the two-dimensional suffix is tested
    /// before the one-dimensional one since both end in `[]`.
    ///
    /// Map arguments are split on the first comma. A key or value that itself
    /// contains a comma (for instance a nested map) is rejected rather than
    /// guessed at.
    pub fn parse(descriptor: &'a str) -> Result<Self, TranslationError> {
        if let Some(inner) = descriptor.strip_suffix(ARRAY2_SUFFIX) {
            return Ok(Self::Array2(inner));
        }
        if let Some(inner) = descriptor.strip_suffix(ARRAY_SUFFIX) {
            return Ok(Self::Array(inner));
        }
        if let Some(rest) = descriptor.strip_prefix(MAP_PREFIX) {
            let args = strip_closing(descriptor, rest)?;
            let (key, value) = args.split_once(',').ok_or_else(|| {
                TranslationError::malformed(descriptor, "map requires a key and a value type")
            })?;
            if value.contains(',') {
                return Err(TranslationError::malformed(
                    descriptor,
                    "map arguments must be separated by exactly one comma",
                ));
            }
            return Ok(Self::Map { key, value });
        }
        if let Some(rest) = descriptor.strip_prefix(KEY_PREFIX) {
            return Ok(Self::Key(strip_closing(descriptor, rest)?));
        }
        if descriptor == ENUM_LITERAL {
            return Ok(Self::Enum);
        }
        Ok(Self::Named(descriptor))
    }
}

fn strip_closing<'a>(descriptor: &str, rest: &'a str) -> Result<&'a str, TranslationError> {
    rest.strip_suffix(CLOSING)
        .ok_or_else(|| TranslationError::malformed(descriptor, "unterminated '<' bracket"))
}

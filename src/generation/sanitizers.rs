//! Language-agnostic sanitizers for generated identifiers and doc text

use once_cell::sync::Lazy;
use regex::Regex;

static SMART_PUNCTUATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\u{2018}\u{2019}\u{201C}\u{201D}\u{2013}\u{2014}]")
        .expect("punctuation pattern is valid")
});
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static NON_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("identifier pattern is valid"));

/// Flatten server help text for doc comments.
///
/// Smart quotes and long dashes become ASCII, whitespace runs collapse to a
/// single space, and comment terminators are broken up so the text can sit
/// inside `/** ... */` blocks.
pub fn sanitize_doc(input: &str) -> String {
    let ascii = SMART_PUNCTUATION.replace_all(input, |caps: &regex::Captures| {
        match &caps[0] {
            "\u{2018}" | "\u{2019}" => "'",
            "\u{201C}" | "\u{201D}" => "\"",
            _ => "-",
        }
    });
    WHITESPACE
        .replace_all(ascii.trim(), " ")
        .replace("*/", "* /")
}

/// Make an enum value usable as an identifier in any bundled language.
///
/// Characters outside `[A-Za-z0-9_]` become `_`, and a leading digit gets a
/// `_` prefix.
pub fn enum_constant(value: &str) -> String {
    let ident = NON_IDENTIFIER.replace_all(value, "_").into_owned();
    match ident.chars().next() {
        None => "_".to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{ident}"),
        Some(_) => ident,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_doc() {
        assert_eq!(
            sanitize_doc("Use \u{201C}auto\u{201D} \u{2014} the default"),
            "Use \"auto\" - the default"
        );
        assert_eq!(sanitize_doc("Line one\n\n  Line two\t"), "Line one Line two");
        assert_eq!(sanitize_doc("ends a comment */ early"), "ends a comment * / early");
        assert_eq!(sanitize_doc(""), "");
    }

    #[test]
    fn test_enum_constant() {
        assert_eq!(enum_constant("AUTO"), "AUTO");
        assert_eq!(enum_constant("quasibinomial"), "quasibinomial");
        assert_eq!(enum_constant("1d"), "_1d");
        assert_eq!(enum_constant("per-class"), "per_class");
        assert_eq!(enum_constant(""), "_");
    }
}

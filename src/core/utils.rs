//! Identifier and text helpers for generated sources

use textwrap::{Options as WrapOptions, WordSplitter, WrapAlgorithm};

/// Page width used when wrapping help text into doc comments
pub const PAGE_WIDTH: usize = 120;

/// Converts a string to snake_case.
///
/// Handles camelCase, PascalCase, kebab-case and space-separated input.
///
/// # Examples
/// ```
/// use metabind::core::utils::to_snake_case;
///
/// assert_eq!(to_snake_case("modelBuilders"), "model_builders");
/// assert_eq!(to_snake_case("ModelBuilders"), "model_builders");
/// assert_eq!(to_snake_case("model-builders"), "model_builders");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_is_lowercase = false;

    for ch in s.chars() {
        if ch.is_uppercase() {
            if prev_is_lowercase {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
            prev_is_lowercase = false;
        } else if ch.is_alphanumeric() {
            result.push(ch);
            prev_is_lowercase = ch.is_lowercase() || ch.is_ascii_digit();
        } else if (ch == '-' || ch == '_' || ch == ' ') && !result.is_empty() && !result.ends_with('_')
        {
            result.push('_');
            prev_is_lowercase = false;
        }
    }

    result.trim_matches('_').to_string()
}

/// Converts a string to PascalCase for type names.
///
/// # Examples
/// ```
/// use metabind::core::utils::to_proper_case;
///
/// assert_eq!(to_proper_case("model_category"), "ModelCategory");
/// assert_eq!(to_proper_case("deep-learning"), "DeepLearning");
/// ```
pub fn to_proper_case(s: &str) -> String {
    to_snake_case(s)
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}

/// Converts a string to camelCase.
///
/// ```
/// use metabind::core::utils::to_camel_case;
///
/// assert_eq!(to_camel_case("response_column"), "responseColumn");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_proper_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// Wrap `msg` to [`PAGE_WIDTH`] columns, prefixing every line with `indent`.
///
/// When `indent_first` is false the first line is returned without the
/// prefix, so the result can follow text already on the line.
pub fn wrap(msg: &str, indent: &str, indent_first: bool) -> String {
    let msg = msg.split_whitespace().collect::<Vec<_>>().join(" ");
    if msg.is_empty() {
        return String::new();
    }

    let options = WrapOptions::new(PAGE_WIDTH)
        .initial_indent(indent)
        .subsequent_indent(indent)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .word_splitter(WordSplitter::NoHyphenation);
    let wrapped = textwrap::fill(&msg, options);
    if indent_first {
        wrapped
    } else {
        wrapped
            .strip_prefix(indent)
            .map(str::to_string)
            .unwrap_or(wrapped)
    }
}

//! Serialized Content-Security-Policy parsing.
//!
//! Implements the header-value grammar shared by the
//! `Content-Security-Policy` and `Content-Security-Policy-Report-Only`
//! headers: directives separated by `;`, each a name followed by
//! whitespace-delimited values.

use indexmap::IndexMap;

use crate::error::PolicyError;
use crate::registry::DirectiveRegistry;

/// ASCII whitespace per the WHATWG Infra standard. Not
/// `char::is_whitespace`, which also matches Unicode whitespace.
const ASCII_WHITESPACE: &[char] = &[' ', '\t', '\n', '\x0C', '\r'];

/// Parses a serialized policy into a map of directive names to their
/// values, keyed in first-occurrence order.
///
/// Directive names are lowercased; values keep their original casing
/// and order. A name missing from `registry` is an error regardless of
/// `strict`. A repeated name is an error when `strict` is set and is
/// dropped otherwise, keeping the first occurrence. Empty tokens and
/// tokens containing non-ASCII characters are skipped silently.
///
/// # Example
///
/// ```
/// use palisade_csp::{parse_policy, DirectiveRegistry};
///
/// let registry = DirectiveRegistry::new();
/// let policy = parse_policy("default-src 'self'; img-src data:", &registry, false).unwrap();
/// assert_eq!(policy["default-src"], ["'self'"]);
/// assert_eq!(policy["img-src"], ["data:"]);
/// ```
pub fn parse_policy(
    serialized: &str,
    registry: &DirectiveRegistry,
    strict: bool,
) -> Result<IndexMap<String, Vec<String>>, PolicyError> {
    let mut directives: IndexMap<String, Vec<String>> = IndexMap::new();

    for token in serialized.split(';') {
        let token = token.trim_matches(ASCII_WHITESPACE);

        if token.is_empty() {
            continue;
        }

        // Non-ASCII tokens are dropped whole, never rejected.
        if !token.is_ascii() {
            log::debug!("skipping non-ASCII policy token");
            continue;
        }

        let mut parts = token.split(ASCII_WHITESPACE).filter(|part| !part.is_empty());
        let raw_name = match parts.next() {
            Some(name) => name,
            None => continue,
        };
        let name = raw_name.to_ascii_lowercase();

        if !registry.contains(&name) {
            return Err(PolicyError::UnknownDirective(name));
        }

        if directives.contains_key(&name) {
            if strict {
                return Err(PolicyError::DuplicateDirective(name));
            }
            log::debug!("dropping duplicate directive '{}'", name);
            continue;
        }

        let values = parts.map(str::to_owned).collect();
        directives.insert(name, values);
    }

    Ok(directives)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_directive() {
        let registry = DirectiveRegistry::new();
        let policy = parse_policy("default-src 'self' example.com", &registry, false).unwrap();

        assert_eq!(policy.len(), 1);
        assert_eq!(policy["default-src"], ["'self'", "example.com"]);
    }

    #[test]
    fn test_directive_without_values() {
        let registry = DirectiveRegistry::new();
        let policy = parse_policy("default-src", &registry, false).unwrap();

        assert_eq!(policy["default-src"], Vec::<String>::new());
    }

    #[test]
    fn test_name_lowercased_values_untouched() {
        let registry = DirectiveRegistry::new();
        let policy = parse_policy("DEFAULT-SRC EXAMPLE.COM", &registry, false).unwrap();

        assert_eq!(policy["default-src"], ["EXAMPLE.COM"]);
    }

    #[test]
    fn test_unknown_directive_is_fatal_in_both_modes() {
        let registry = DirectiveRegistry::new();

        for strict in [false, true] {
            let err = parse_policy("made-up-src x", &registry, strict).unwrap_err();
            assert_eq!(err, PolicyError::UnknownDirective("made-up-src".into()));
            assert_eq!(err.to_string(), "unknown directive 'made-up-src'");
        }
    }

    #[test]
    fn test_duplicate_gated_by_strictness() {
        let registry = DirectiveRegistry::new();
        let serialized = "default-src a; script-src b; default-src c";

        let policy = parse_policy(serialized, &registry, false).unwrap();
        assert_eq!(policy["default-src"], ["a"]);
        assert_eq!(policy["script-src"], ["b"]);

        let err = parse_policy(serialized, &registry, true).unwrap_err();
        assert_eq!(err, PolicyError::DuplicateDirective("default-src".into()));
        assert_eq!(err.to_string(), "duplicate directive 'default-src'");
    }

    #[test]
    fn test_non_ascii_token_skipped() {
        let registry = DirectiveRegistry::new();
        let policy = parse_policy(
            "default-src 'self'; img-src exämple.com; script-src 'self'",
            &registry,
            true,
        )
        .unwrap();

        assert_eq!(policy.len(), 2);
        assert!(policy.contains_key("default-src"));
        assert!(policy.contains_key("script-src"));
        assert!(!policy.contains_key("img-src"));
    }

    #[test]
    fn test_first_occurrence_order() {
        let registry = DirectiveRegistry::new();
        let policy = parse_policy(
            "style-src 'self'; img-src *; default-src 'none'",
            &registry,
            false,
        )
        .unwrap();

        let keys: Vec<&str> = policy.keys().map(String::as_str).collect();
        assert_eq!(keys, ["style-src", "img-src", "default-src"]);
    }

    #[test]
    fn test_ascii_whitespace_only_no_unicode_folding() {
        let registry = DirectiveRegistry::new();

        // Every ASCII whitespace flavor collapses like a single space.
        let policy =
            parse_policy("\tdefault-src\n'self'\x0C example.com\r", &registry, false).unwrap();
        assert_eq!(policy["default-src"], ["'self'", "example.com"]);

        // A non-breaking space is not a separator; it makes the token
        // non-ASCII, so the whole token is skipped.
        let policy = parse_policy("default-src\u{A0}'self'", &registry, false).unwrap();
        assert!(policy.is_empty());
    }
}

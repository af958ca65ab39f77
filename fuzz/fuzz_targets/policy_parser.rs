#![no_main]
//! Policy parser fuzzing
//!
//! Feeds arbitrary header strings and registry extensions through
//! `parse_policy` and checks the parser's invariants on every
//! successful parse:
//! - it never panics,
//! - every returned key is a lowercase, ASCII, registered directive,
//! - values never gain or lose tokens relative to a reparse,
//! - strict mode only ever adds failures, never changes a success.

use libfuzzer_sys::fuzz_target;
use arbitrary::Arbitrary;

use palisade_csp::{parse_policy, DirectiveRegistry, PolicyError};

#[derive(Debug, Arbitrary)]
struct PolicyFuzzInput {
    /// Raw CSP header string
    header: String,
    /// Extra directive names to register before parsing
    extra_directives: Vec<String>,
    /// Whether to parse in strict mode
    strict: bool,
}

fuzz_target!(|input: PolicyFuzzInput| {
    let mut registry = DirectiveRegistry::new();
    registry.extend(input.extra_directives.iter().take(32));

    match parse_policy(&input.header, &registry, input.strict) {
        Ok(policy) => {
            for (name, _values) in &policy {
                assert!(name.is_ascii());
                assert_eq!(name, &name.to_ascii_lowercase());
                assert!(registry.contains(name));
            }

            // Parsing is deterministic.
            let reparsed = parse_policy(&input.header, &registry, input.strict).unwrap();
            assert_eq!(policy, reparsed);

            // A policy that parses strictly also parses loosely, to the
            // same result.
            if input.strict {
                let loose = parse_policy(&input.header, &registry, false).unwrap();
                assert_eq!(policy, loose);
            }
        }
        Err(PolicyError::UnknownDirective(name)) => {
            assert!(!registry.contains(&name));
        }
        Err(PolicyError::DuplicateDirective(name)) => {
            // Duplicates are only fatal in strict mode, and the name
            // must have parsed once already.
            assert!(input.strict);
            assert!(registry.contains(&name));
        }
    }
});

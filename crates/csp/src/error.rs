//! Error types for policy parsing and report decoding.

use thiserror::Error;

/// PolicyError represents the ways a serialized policy can be rejected.
///
/// Both variants carry the offending directive name (already lowercased)
/// so callers can branch on the kind and surface the name in logs or
/// API responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// A directive name that is not in the registry
    #[error("unknown directive '{0}'")]
    UnknownDirective(String),

    /// A directive name that appeared more than once, in strict mode
    #[error("duplicate directive '{0}'")]
    DuplicateDirective(String),
}

impl PolicyError {
    /// Returns the directive name the error is about.
    pub fn directive(&self) -> &str {
        match self {
            PolicyError::UnknownDirective(name) => name,
            PolicyError::DuplicateDirective(name) => name,
        }
    }
}

/// ReportError represents failures while decoding a violation-report payload.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The payload was not valid JSON or did not match the report shape
    #[error("malformed report payload: {0}")]
    Decode(#[from] serde_json::Error),
}

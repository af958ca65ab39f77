//! Palisade CSP Crate
//!
//! This crate parses serialized `Content-Security-Policy` header values
//! into structured directive maps and models the violation reports that
//! deployed policies send back.
//!
//! Parsing follows the header-value grammar shared by the
//! `Content-Security-Policy` and `Content-Security-Policy-Report-Only`
//! headers. The set of accepted directive names lives in a
//! [`DirectiveRegistry`] owned by the caller, so hosts can register
//! additional directives without touching global state.

pub mod error;
pub mod policy;
pub mod registry;
pub mod report;

/// Re-export common types for easier usage
pub use error::{PolicyError, ReportError};
pub use policy::parse_policy;
pub use registry::DirectiveRegistry;
pub use report::{
    CspDisposition, CspReportCommon, CspReportCommonBody, CspReportType, CspViolationReport,
    CspViolationReportBody, LegacyCspReport, LegacyCspReportBody,
};

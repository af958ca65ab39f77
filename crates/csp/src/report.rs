//! Violation-report payload models.
//!
//! CSP violation reports reach a collection endpoint in two wire
//! shapes: the legacy `report-uri` submission, a `csp-report` envelope
//! with hyphenated keys, and the Reporting API `report-to` submission,
//! a typed envelope with camel-cased keys. Both are modeled here, along
//! with a tolerant common model that decodes the fields shared by
//! either shape. Unknown fields in a payload are ignored.

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Whether the policy that produced a report was enforced or
/// report-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CspDisposition {
    Enforce,
    Report,
}

/// Report body submitted through the legacy `report-uri` directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LegacyCspReportBody {
    pub blocked_uri: String,
    pub disposition: CspDisposition,
    pub document_uri: String,
    pub effective_directive: String,
    pub original_policy: String,
    #[serde(default)]
    pub referrer: Option<String>,
    #[serde(default)]
    pub script_sample: Option<String>,
    pub status_code: u16,
    pub violated_directive: String,
}

/// Envelope for legacy `report-uri` submissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LegacyCspReport {
    pub csp_report: LegacyCspReportBody,
}

impl LegacyCspReport {
    /// Decodes a legacy report from a JSON payload.
    pub fn from_json(payload: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// Report body submitted through the Reporting API (`report-to`).
///
/// The wire names are camel-cased except for `blockedURL` and
/// `documentURL`, which keep the all-caps suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CspViolationReportBody {
    #[serde(rename = "blockedURL")]
    pub blocked_url: String,
    pub column_number: u32,
    pub disposition: CspDisposition,
    #[serde(rename = "documentURL")]
    pub document_url: String,
    pub effective_directive: String,
    pub line_number: u32,
    pub original_policy: String,
    #[serde(default)]
    pub referrer: Option<String>,
    #[serde(default)]
    pub sample: Option<String>,
    #[serde(default)]
    pub source_file: Option<String>,
    pub status_code: u16,
}

/// The `type` discriminator carried by Reporting API envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CspReportType {
    #[serde(rename = "csp-violation")]
    CspViolation,
}

/// Envelope for Reporting API submissions of type `csp-violation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CspViolationReport {
    #[serde(rename = "type")]
    pub report_type: CspReportType,
    pub url: String,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub age: Option<u64>,
    pub body: CspViolationReportBody,
}

impl CspViolationReport {
    /// Decodes a Reporting API report from a JSON payload.
    pub fn from_json(payload: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// The report fields shared by both wire shapes, each accepted under
/// either naming.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CspReportCommonBody {
    #[serde(rename = "blocked-uri", alias = "blockedURL")]
    pub blocked_url: String,
    pub disposition: CspDisposition,
    #[serde(rename = "document-uri", alias = "documentURL")]
    pub document_url: String,
    #[serde(rename = "effective-directive", alias = "effectiveDirective")]
    pub effective_directive: String,
    #[serde(rename = "original-policy", alias = "originalPolicy")]
    pub original_policy: String,
    #[serde(default)]
    pub referrer: Option<String>,
    #[serde(default, alias = "scriptSample")]
    pub sample: Option<String>,
    #[serde(rename = "status-code", alias = "statusCode")]
    pub status_code: u16,
}

/// Shape-agnostic envelope: accepts the legacy `csp-report` key or the
/// Reporting API `body` key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CspReportCommon {
    #[serde(rename = "csp-report", alias = "body")]
    pub body: CspReportCommonBody,
}

impl CspReportCommon {
    /// Decodes the shared report fields from a payload in either shape.
    pub fn from_json(payload: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(payload)?)
    }
}

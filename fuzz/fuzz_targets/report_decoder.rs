#![no_main]
//! Violation-report decoder fuzzing
//!
//! Throws arbitrary bytes at the three report models. Decoding may
//! fail, but must never panic, and whenever a shape-specific model and
//! the common model both accept a payload they must agree on the
//! shared fields.

use libfuzzer_sys::fuzz_target;

use palisade_csp::{CspReportCommon, CspViolationReport, LegacyCspReport};

fuzz_target!(|data: &[u8]| {
    let payload = match std::str::from_utf8(data) {
        Ok(payload) => payload,
        Err(_) => return,
    };

    let legacy = LegacyCspReport::from_json(payload);
    let modern = CspViolationReport::from_json(payload);
    let common = CspReportCommon::from_json(payload);

    if let (Ok(report), Ok(common)) = (&modern, &common) {
        assert_eq!(common.body.blocked_url, report.body.blocked_url);
        assert_eq!(common.body.disposition, report.body.disposition);
        assert_eq!(common.body.status_code, report.body.status_code);
    }

    if let (Ok(report), Ok(common)) = (&legacy, &common) {
        assert_eq!(common.body.blocked_url, report.csp_report.blocked_uri);
        assert_eq!(common.body.disposition, report.csp_report.disposition);
        assert_eq!(common.body.status_code, report.csp_report.status_code);
    }
});

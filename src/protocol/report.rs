//! Verification report.

use serde::Serialize;
use serde_json::Value;

const MATCH_NOTE: &str =
    "Match=True means response integrity OK and key/opcode/data/time formula consistent.";

/// Outcome of checking a device response against the request it answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifyReport {
    /// Whether the response auth equals the recomputed code (case-insensitive).
    pub md5_match: bool,
    /// Code recomputed from the request fields and response time.
    pub expected_auth: String,
    /// Code the device sent.
    pub response_auth: String,
    /// Response `status`, if present.
    pub response_status: Option<Value>,
    pub note: &'static str,
}

impl VerifyReport {
    pub fn new(expected_auth: String, response_auth: String, response_status: Option<Value>) -> Self {
        let md5_match = expected_auth.eq_ignore_ascii_case(&response_auth);
        Self {
            md5_match,
            expected_auth,
            response_auth,
            response_status,
            note: MATCH_NOTE,
        }
    }

    /// Two-space indented JSON for the console.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_match() {
        let report = VerifyReport::new(
            "82d757cc339e8522049ba681935232e9".to_string(),
            "82D757CC339E8522049BA681935232E9".to_string(),
            None,
        );
        assert!(report.md5_match);
    }

    #[test]
    fn test_report_serialization() {
        let report = VerifyReport::new("aa".to_string(), "bb".to_string(), None);
        let json = report.to_pretty_json().unwrap();

        assert!(!report.md5_match);
        assert!(json.starts_with("{\n  \"md5_match\": false,"));
        assert!(json.contains("\"response_status\": null"));
    }
}

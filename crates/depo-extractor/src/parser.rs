//! Parse service output into an analysis result

use crate::error::AnalysisError;
use crate::schema::{response_schema, validate};
use depo_domain::AnalysisResult;
use serde_json::Value;

/// Parse a raw service payload into an [`AnalysisResult`]
///
/// Surrounding whitespace is trimmed; nothing else is stripped. The payload
/// must be a single JSON object that satisfies the response schema. Items keep
/// the order the service returned them in.
pub fn parse_response(payload: &str) -> Result<AnalysisResult, AnalysisError> {
    let trimmed = payload.trim();
    if trimmed.is_empty() {
        return Err(AnalysisError::InvalidResponse("empty payload".to_string()));
    }

    let json: Value = serde_json::from_str(trimmed)
        .map_err(|e| AnalysisError::InvalidResponse(format!("JSON parse error: {}", e)))?;

    validate(&json, response_schema())
        .map_err(|violation| AnalysisError::InvalidResponse(violation.to_string()))?;

    serde_json::from_value(json)
        .map_err(|e| AnalysisError::InvalidResponse(format!("Unexpected structure: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use depo_domain::Ruling;

    const VALID: &str = r#"{
        "keyFactsAndAdmissions": [
            {"fact": "Signed the lease in March", "witness": "A. Smith", "pageLine": "Page 10, Line 3", "summary": "Establishes timing"},
            {"fact": "Never read clause 4", "witness": "A. Smith", "pageLine": "Page 11, Line 20", "summary": "Undercuts notice defense"}
        ],
        "exhibitsReferenced": [
            {"id": "Plaintiff's Exhibit A", "description": "Lease agreement", "pageLine": "Page 9, Line 1"}
        ],
        "objectionsLog": [
            {"type": "Leading", "by": "Mr. Park", "ruling": "Sustained", "pageLine": "Page 11, Line 18"},
            {"type": "Hearsay", "by": "Mr. Park", "ruling": "Not Stated", "pageLine": "Page 12, Line 2"}
        ]
    }"#;

    #[test]
    fn test_parse_valid_response() {
        let result = parse_response(VALID).unwrap();
        assert_eq!(result.key_facts_and_admissions().len(), 2);
        assert_eq!(result.exhibits_referenced()[0].id, "Plaintiff's Exhibit A");
        assert_eq!(result.objections_log()[1].ruling, Ruling::NotStated);
    }

    #[test]
    fn test_order_is_preserved() {
        let result = parse_response(VALID).unwrap();
        let facts = result.key_facts_and_admissions();
        assert_eq!(facts[0].page_line, "Page 10, Line 3");
        assert_eq!(facts[1].page_line, "Page 11, Line 20");
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let padded = format!("\n\n  {}  \n", VALID);
        assert!(parse_response(&padded).is_ok());
    }

    #[test]
    fn test_markdown_fence_is_rejected() {
        let fenced = format!("```json\n{}\n```", VALID);
        assert!(matches!(
            parse_response(&fenced),
            Err(AnalysisError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_empty_sections() {
        let result = parse_response(
            r#"{"keyFactsAndAdmissions": [], "exhibitsReferenced": [], "objectionsLog": []}"#,
        )
        .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_unknown_ruling() {
        let payload = VALID.replace("\"Sustained\"", "\"Denied\"");
        match parse_response(&payload) {
            Err(AnalysisError::InvalidResponse(msg)) => {
                assert!(msg.contains("objectionsLog[0].ruling"), "{}", msg);
            }
            other => panic!("expected InvalidResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_page_line() {
        let payload = r#"{
            "keyFactsAndAdmissions": [],
            "exhibitsReferenced": [{"id": "Exhibit 2", "description": "Invoice"}],
            "objectionsLog": []
        }"#;
        match parse_response(payload) {
            Err(AnalysisError::InvalidResponse(msg)) => assert!(msg.contains("pageLine"), "{}", msg),
            other => panic!("expected InvalidResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json() {
        for payload in ["", "   ", "not json", "{\"keyFactsAndAdmissions\": [", "null", "[]"] {
            assert!(
                matches!(parse_response(payload), Err(AnalysisError::InvalidResponse(_))),
                "payload {:?}",
                payload
            );
        }
    }
}

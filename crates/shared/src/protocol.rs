use serde::{Deserialize, Serialize};

use crate::domain::SessionId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub session_id: SessionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub session_id: SessionId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub session_id: SessionId,
    pub script_length: u64,
    pub estimated_input_tokens: u64,
    pub has_reasoning: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files_generated: Vec<String>,
}

/// Error payload on non-2xx responses. `detail` is usually a string but
/// request-validation failures send a list, so it stays untyped here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn detail_text(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(|value| value.as_str())
            .filter(|text| !text.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_result_tolerates_missing_reasoning_length_and_extra_fields() {
        let raw = r#"{
            "success": true,
            "session_id": "abc",
            "message": "Script generated successfully",
            "script_length": 1000,
            "estimated_input_tokens": 250,
            "has_reasoning": false,
            "download_urls": {"script": "/download/abc/generated.txt", "reasoning": null}
        }"#;
        let parsed: GenerationResult = serde_json::from_str(raw).expect("parse");
        assert_eq!(parsed.session_id, SessionId("abc".into()));
        assert_eq!(parsed.script_length, 1000);
        assert_eq!(parsed.reasoning_length, None);
        assert!(parsed.files_generated.is_empty());
    }

    #[test]
    fn error_body_only_uses_string_detail() {
        let text: ErrorBody = serde_json::from_str(r#"{"detail":"bad file"}"#).expect("parse");
        assert_eq!(text.detail_text(), Some("bad file"));

        let list: ErrorBody =
            serde_json::from_str(r#"{"detail":[{"loc":["body"],"msg":"field required"}]}"#)
                .expect("parse");
        assert_eq!(list.detail_text(), None);

        let empty: ErrorBody = serde_json::from_str("{}").expect("parse");
        assert_eq!(empty.detail_text(), None);
    }
}

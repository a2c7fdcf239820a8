use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Retrieved chunk cited by an answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_index: Option<u32>,
    /// Cosine similarity in `[0, 1]`.
    pub similarity: f64,
}

impl ChatSource {
    pub fn new(content: impl Into<String>, similarity: f64) -> Self {
        Self {
            id: None,
            content: content.into(),
            chunk_index: None,
            similarity,
        }
    }
}

/// Response of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<ChatSource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let json = serde_json::to_string(&ChatRequest::new("What is X?")).unwrap();
        assert_eq!(json, r#"{"message":"What is X?"}"#);
    }

    #[test]
    fn test_response_with_sources() {
        let json = r#"{
            "answer": "X is Y.",
            "sources": [
                {
                    "id": "0b7a4a2e-3c55-4c21-8a8e-7b1a0f6d2c33",
                    "content": "X is defined as Y in doc 1",
                    "chunk_index": 0,
                    "similarity": 0.91
                }
            ]
        }"#;

        let resp: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.answer, "X is Y.");
        assert_eq!(resp.sources.len(), 1);
        assert_eq!(resp.sources[0].chunk_index, Some(0));
        assert!((resp.sources[0].similarity - 0.91).abs() < f64::EPSILON);
    }

    #[test]
    fn test_response_without_sources() {
        let resp: ChatResponse = serde_json::from_str(r#"{"answer": "No idea."}"#).unwrap();
        assert!(resp.sources.is_empty());

        let minimal: ChatSource =
            serde_json::from_str(r#"{"content": "abc", "similarity": 0.5}"#).unwrap();
        assert_eq!(minimal, ChatSource::new("abc", 0.5));
    }
}

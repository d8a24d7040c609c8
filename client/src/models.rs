use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder shown for a clause the server did not number.
pub const CLAUSE_NUMBER_PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub session_id: String,
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

/// Structured decision returned by the query endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub decision: String,
    pub justification: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub conditions: Option<String>,
    #[serde(default)]
    pub referenced_clauses: Option<Vec<ReferencedClause>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencedClause {
    #[serde(default)]
    pub clause_number: Option<String>,
    pub document_name: String,
    pub text: String,
}

impl ReferencedClause {
    pub fn clause_label(&self) -> &str {
        self.clause_number
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(CLAUSE_NUMBER_PLACEHOLDER)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Error body the backend sends alongside a non-success status.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorResponse {
    /// Reduces `detail` to display text. Validation failures arrive as a
    /// JSON list rather than a string and are shown as compact JSON.
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::models::job::JobRecord;

/// Candidate profile extracted from an uploaded CV.
///
/// Free-form sections (experience, education) stay as raw JSON values; the
/// client only renders them, the backend owns their structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CvProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
    pub skills: Vec<String>,
    pub experience: Vec<serde_json::Value>,
    pub education: Vec<serde_json::Value>,
    pub certifications: Vec<String>,
    pub keywords: Vec<String>,
    pub confidence_score: Option<f64>,
    pub experience_count: Option<u32>,
}

/// Envelope of the CV upload endpoint. The backend sends more metadata
/// (timings, a response-level confidence copy) than the client consumes;
/// unknown keys are simply ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CvUploadResponse {
    pub success: bool,
    pub message: String,
    pub profile: Option<CvProfile>,
    pub jobs: Vec<JobRecord>,
    pub recommendations: Vec<String>,
}

/// One prior turn sent back as conversation history.
/// The wire field is `type` ("user" | "bot"), matching the backend contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryMessage {
    #[serde(rename = "type")]
    pub role: String,
    pub content: String,
}

/// Request body for `/chat` and `/chat_with_cv`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatTurnRequest {
    pub message: String,
    pub chat_phase: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_profile: Option<CvProfile>,
    pub conversation_history: Vec<HistoryMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv_profile_data: Option<CvProfile>,
}

/// Response body of a chat turn. Besides the text reply the backend may
/// attach jobs, follow-up suggestions, extracted profile data, and a phase
/// transition.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChatTurnResponse {
    pub response: String,
    pub jobs: Vec<JobRecord>,
    pub profile_data: Option<CvProfile>,
    pub suggestions: Vec<String>,
    pub chat_phase: Option<String>,
}

/// Envelope of the autocomplete endpoint. A body carrying `error` counts as
/// a failed lookup even when the HTTP status is 200.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
    pub error: Option<String>,
}

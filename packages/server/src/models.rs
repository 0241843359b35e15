//! Request and response bodies for the JSON API.

use lawchat_congress::LawDetails;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/chatbot`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

/// Body of `POST /api/legal-analysis`.
#[derive(Debug, Deserialize)]
pub struct LegalAnalysisRequest {
    pub user_message: Option<String>,
    /// Bills as sent by the client; passed through to the prompt.
    pub bills: Option<Value>,
}

/// Query of `GET /api/law-details`.
#[derive(Debug, Deserialize)]
pub struct LawDetailsQuery {
    pub bill_id: Option<String>,
}

/// Query of `GET /results`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResultsQuery {
    pub user_message: String,
    pub gemini_response: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct LegalAnalysisResponse {
    pub success: bool,
    pub analysis: String,
}

#[derive(Debug, Serialize)]
pub struct LawDetailsResponse {
    pub success: bool,
    pub law: LawDetails,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

//! JSON API handlers.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use lawchat_congress::{parse_bill_lookup, BillReference};

use crate::error::ApiError;
use crate::genai::{generate_analysis, identify_bills, LlmClient};
use crate::models::{
    ChatRequest, ChatResponse, LawDetailsQuery, LawDetailsResponse, LegalAnalysisRequest,
    LegalAnalysisResponse,
};
use crate::state::AppState;

fn require_llm(state: &AppState) -> Result<&dyn LlmClient, ApiError> {
    state.llm.as_deref().ok_or(ApiError::NotConfigured)
}

/// `POST /api/chatbot`: identify bills related to a chat message.
///
/// The reply carries the raw model text. It is parsed first so that a
/// malformed answer is reported as an error instead of being passed on.
pub async fn chatbot(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let llm = require_llm(&state)?;

    let message = payload
        .ok()
        .and_then(|Json(body)| body.message)
        .ok_or(ApiError::Validation("Message is required"))?;

    let raw = identify_bills(llm, &message)
        .await
        .map_err(|source| ApiError::Generative {
            context: "Error processing message",
            source,
        })?;

    let lookup = parse_bill_lookup(&raw).map_err(|e| {
        tracing::warn!(response = %raw, "model returned malformed bill ids");
        ApiError::BillLookupParse(e)
    })?;
    tracing::debug!(bills = %lookup, count = lookup.len(), "identified bills");

    Ok(Json(ChatResponse {
        success: true,
        response: raw,
    }))
}

/// `POST /api/legal-analysis`: analyse bills for the user's situation.
pub async fn legal_analysis(
    State(state): State<AppState>,
    payload: Result<Json<LegalAnalysisRequest>, JsonRejection>,
) -> Result<Json<LegalAnalysisResponse>, ApiError> {
    let llm = require_llm(&state)?;

    let (user_message, bills) = payload
        .ok()
        .and_then(|Json(body)| body.user_message.zip(body.bills))
        .ok_or(ApiError::Validation("User message and bills are required"))?;

    let analysis = generate_analysis(llm, &user_message, &bills)
        .await
        .map_err(|source| ApiError::Generative {
            context: "Error generating legal analysis",
            source,
        })?;

    Ok(Json(LegalAnalysisResponse {
        success: true,
        analysis,
    }))
}

/// `GET /api/law-details?bill_id=type.number.congress`: bill metadata and text.
pub async fn law_details(
    State(state): State<AppState>,
    query: Result<Query<LawDetailsQuery>, QueryRejection>,
) -> Result<Json<LawDetailsResponse>, ApiError> {
    let bill_id = query
        .ok()
        .and_then(|Query(q)| q.bill_id)
        .filter(|id| !id.is_empty())
        .ok_or(ApiError::Validation("Bill ID is required"))?;

    let bill = BillReference::parse(&bill_id).map_err(|_| {
        ApiError::Validation("Invalid bill ID format. Expected format: type.number.congress")
    })?;

    let law = state.congress.fetch_law_details(&bill).await?;

    Ok(Json(LawDetailsResponse { success: true, law }))
}

//! Axum route handlers for the Advisor API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

use crate::advisor::prompts::{CHAT_DESCRIPTION, CHAT_EXAMPLES, CHAT_TITLE};
use crate::advisor::{recommend, Turn};
use crate::catalog::FacultyRecord;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// The client owns the conversation and sends prior turns with each message.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<Turn>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub turn_id: Uuid,
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatInfoResponse {
    pub title: String,
    pub description: String,
    pub examples: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FacultyListResponse {
    pub faculty: Vec<FacultyRecord>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/chat
///
/// Runs one conversational turn. Errors are rendered as JSON so the UI can
/// show them in place of the reply.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let turn_id = Uuid::new_v4();
    let span = info_span!("chat_turn", %turn_id, history = request.history.len());

    let response = recommend(
        &request.message,
        &state.catalog,
        &request.history,
        state.llm.as_ref(),
    )
    .instrument(span.clone())
    .await?;

    span.in_scope(|| {
        debug!("Query: {}", request.message);
        info!("Recommendation returned ({} chars)", response.len());
        debug!("Response: {response}");
    });

    Ok(Json(ChatResponse { turn_id, response }))
}

/// GET /api/v1/chat/info
///
/// Title, description and example prompts for the chat UI.
pub async fn handle_chat_info() -> Json<ChatInfoResponse> {
    Json(ChatInfoResponse {
        title: CHAT_TITLE.to_string(),
        description: CHAT_DESCRIPTION.to_string(),
        examples: CHAT_EXAMPLES.iter().map(|s| s.to_string()).collect(),
    })
}

/// GET /api/v1/faculty
pub async fn handle_list_faculty(State(state): State<AppState>) -> Json<FacultyListResponse> {
    Json(FacultyListResponse {
        faculty: state.catalog.records().to_vec(),
    })
}

//! Recommendation Formatter — builds the advisor payload and issues the single
//! completion call for a chat turn.
//!
//! Flow: validate query → system instruction → prior turns → catalog + query
//!       → one `CompletionService::complete` call → reply returned verbatim.
//!
//! Stateless: the catalog and history are passed in, nothing is retained.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::advisor::prompts::{ADVISOR_SYSTEM, RECOMMEND_PROMPT_TEMPLATE};
use crate::catalog::{render_catalog, FacultyCatalog};
use crate::llm_client::{ChatMessage, CompletionService, LlmError};

#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("query cannot be empty")]
    EmptyQuery,

    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    Upstream(String),
}

impl From<LlmError> for RecommendError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingApiKey => RecommendError::Configuration(err.to_string()),
            other => RecommendError::Upstream(other.to_string()),
        }
    }
}

/// One completed exchange from earlier in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub query: String,
    pub response: String,
}

/// Builds the ordered message list for one turn.
///
/// The catalog is embedded only in the final user message; earlier turns are
/// replayed as plain user/assistant pairs.
pub fn build_messages(query: &str, catalog: &FacultyCatalog, history: &[Turn]) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() * 2 + 2);
    messages.push(ChatMessage::system(ADVISOR_SYSTEM));

    for turn in history {
        messages.push(ChatMessage::user(turn.query.as_str()));
        messages.push(ChatMessage::assistant(turn.response.as_str()));
    }

    // Catalog first: a query containing "{catalog}" must not be expanded.
    let prompt = RECOMMEND_PROMPT_TEMPLATE
        .replace("{catalog}", &render_catalog(catalog))
        .replacen("{query}", query, 1);
    messages.push(ChatMessage::user(prompt));

    messages
}

/// Recommends faculty for `query`, returning the model's reply unmodified.
///
/// Issues exactly one completion call. An empty catalog is not rejected; the
/// model simply has nothing to recommend from.
pub async fn recommend(
    query: &str,
    catalog: &FacultyCatalog,
    history: &[Turn],
    llm: &dyn CompletionService,
) -> Result<String, RecommendError> {
    if query.trim().is_empty() {
        return Err(RecommendError::EmptyQuery);
    }

    if catalog.is_empty() {
        warn!("Recommending from an empty faculty catalog");
    }

    let messages = build_messages(query, catalog, history);
    debug!(
        "Sending {} messages ({} prior turns, {} faculty)",
        messages.len(),
        history.len(),
        catalog.len()
    );

    llm.complete(&messages).await.map_err(|e| {
        warn!("Completion call failed: {e}");
        RecommendError::from(e)
    })
}

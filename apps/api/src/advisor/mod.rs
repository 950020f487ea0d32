// Faculty Advisor: turns a research-interest query into faculty recommendations.
// Matching is delegated entirely to the language model; every call goes through
// llm_client::CompletionService.

pub mod handlers;
pub mod prompts;
pub mod recommender;

pub use recommender::{recommend, RecommendError, Turn};

pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::advisor::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/chat", post(handlers::handle_chat))
        .route("/api/v1/chat/info", get(handlers::handle_chat_info))
        .route("/api/v1/faculty", get(handlers::handle_list_faculty))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::catalog::{FacultyCatalog, FacultyRecord};
    use crate::config::Config;
    use crate::llm_client::{ChatMessage, CompletionService, LlmError};

    struct CannedCompletion {
        outcome: fn() -> Result<String, LlmError>,
        seen: Mutex<Vec<Vec<ChatMessage>>>,
    }

    #[async_trait]
    impl CompletionService for CannedCompletion {
        async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
            self.seen.lock().unwrap().push(messages.to_vec());
            (self.outcome)()
        }
    }

    fn test_state(outcome: fn() -> Result<String, LlmError>) -> (AppState, Arc<CannedCompletion>) {
        let llm = Arc::new(CannedCompletion {
            outcome,
            seen: Mutex::new(Vec::new()),
        });
        let state = AppState {
            catalog: FacultyCatalog::new(vec![FacultyRecord {
                name: "Dr. A".to_string(),
                expertise: vec!["epidemiology".to_string()],
                profile_url: "http://a".to_string(),
            }]),
            llm: llm.clone(),
            config: Config {
                openai_api_key: None,
                llm_api_base: "http://127.0.0.1:9/v1".to_string(),
                llm_model: "gpt-4o-mini".to_string(),
                llm_seed: 42,
                llm_timeout_secs: 5,
                faculty_dataset_path: "data/faculty.json".into(),
                port: 0,
                rust_log: "info".to_string(),
            },
        };
        (state, llm)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_chat(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/chat")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_chat_returns_model_reply() {
        let (state, llm) = test_state(|| Ok("Dr. A is a match.".to_string()));
        let (status, body) = send(
            build_router(state),
            post_chat(json!({"message": "who studies epidemiology?"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response"], "Dr. A is a match.");
        assert!(body["turn_id"].is_string());
        assert_eq!(llm.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_chat_forwards_history() {
        let (state, llm) = test_state(|| Ok("ok".to_string()));
        let (status, _) = send(
            build_router(state),
            post_chat(json!({
                "message": "and trials?",
                "history": [{"query": "epidemiology?", "response": "Dr. A"}]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let seen = llm.seen.lock().unwrap();
        assert_eq!(seen[0][1], ChatMessage::user("epidemiology?"));
        assert_eq!(seen[0][2], ChatMessage::assistant("Dr. A"));
    }

    #[tokio::test]
    async fn test_chat_rejects_blank_message() {
        let (state, llm) = test_state(|| Ok("unused".to_string()));
        let (status, body) = send(build_router(state), post_chat(json!({"message": " "}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(llm.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_chat_malformed_body_uses_error_shape() {
        let (state, llm) = test_state(|| Ok("unused".to_string()));
        let app = build_router(state);

        let (status, body) = send(app.clone(), post_chat(json!({"history": []}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/chat")
            .header("content-type", "application/json")
            .body(Body::from("{\"message\": "))
            .unwrap();
        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(llm.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_chat_upstream_failure_is_bad_gateway() {
        let (state, _) = test_state(|| Err(LlmError::EmptyContent));
        let (status, body) = send(build_router(state), post_chat(json!({"message": "ml?"}))).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    }

    #[tokio::test]
    async fn test_chat_missing_key_is_service_unavailable() {
        let (state, _) = test_state(|| Err(LlmError::MissingApiKey));
        let (status, body) = send(build_router(state), post_chat(json!({"message": "ml?"}))).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "CONFIGURATION_ERROR");
    }

    #[tokio::test]
    async fn test_faculty_listing_and_info() {
        let (state, _) = test_state(|| Ok("unused".to_string()));
        let app = build_router(state);

        let (status, body) = send(
            app.clone(),
            Request::get("/api/v1/faculty").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["faculty"][0]["profile_url"], "http://a");

        let (status, body) = send(
            app,
            Request::get("/api/v1/chat/info").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Faculty Advisor Chat");
        assert_eq!(body["examples"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_health_and_unknown_route() {
        let (state, _) = test_state(|| Ok("unused".to_string()));
        let app = build_router(state);

        let (status, body) = send(app.clone(), Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["faculty_count"], 1);

        let (status, body) = send(app, Request::get("/nope").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}

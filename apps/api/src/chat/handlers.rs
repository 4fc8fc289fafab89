//! Axum route handlers for the chat API.

use axum::{body::Bytes, extract::State, response::Response, Json};
use tracing::debug;

use crate::chat::classifier::{classify, MatchResult};
use crate::chat::prompts::{compose_prompt, suggestion_text};
use crate::errors::AppError;
use crate::models::chat::{ChatRequest, ChatResponse};
use crate::relay::{streaming_response, StaticTokenSource, StreamRelay, TokenSource};
use crate::state::AppState;

/// Decodes the body by hand so malformed JSON gets the same error envelope as
/// every other failure instead of Axum's plain-text rejection.
fn parse_request(body: &[u8]) -> Result<ChatRequest, AppError> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("Invalid request body: {e}")))
}

fn classify_request<'kb>(
    state: &'kb AppState,
    request: &ChatRequest,
) -> Result<(String, MatchResult<'kb>), AppError> {
    let message = request
        .effective_message()
        .ok_or_else(AppError::message_required)?;

    let result = classify(&state.knowledge, message, state.job_dedup);
    debug!(
        "Classified message into {:?} ({} jobs)",
        result.domains,
        result.jobs.len()
    );

    Ok((message.to_string(), result))
}

/// POST /api/chat
///
/// Single-turn (`message`) or multi-turn (`messages`) request.
/// Returns the generated reply, or the rule-based suggestions when no model
/// backend is configured.
pub async fn handle_chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    let request = parse_request(&body)?;
    let (message, result) = classify_request(&state, &request)?;

    let response = match &state.generator {
        Some(generator) => {
            let prompt = compose_prompt(&message, &result);
            generator.generate(&prompt).await?
        }
        None => suggestion_text(&result),
    };

    Ok(Json(ChatResponse { response }))
}

/// POST /api/chat/stream
///
/// Same input as `/api/chat`. The reply is streamed as raw `text/plain`
/// chunks. A failure after the first byte ends the body with an error.
pub async fn handle_chat_stream(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let request = parse_request(&body)?;
    let (message, result) = classify_request(&state, &request)?;

    let source: Box<dyn TokenSource> = match &state.generator {
        Some(generator) => {
            let prompt = compose_prompt(&message, &result);
            generator.generate_stream(&prompt).await?
        }
        None => Box::new(StaticTokenSource::new(suggestion_text(&result))),
    };

    Ok(streaming_response(StreamRelay::new(source)))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::chat::classifier::JobDedup;
    use crate::knowledge::KnowledgeBase;
    use crate::llm_client::{LlmError, TextGenerator};
    use crate::relay::tests::ScriptedSource;
    use crate::relay::TokenSource;
    use crate::routes::build_router;
    use crate::state::AppState;

    struct MockGenerator {
        fail: bool,
        last_prompt: Mutex<Option<String>>,
    }

    impl MockGenerator {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                fail,
                last_prompt: Mutex::new(None),
            })
        }

        fn last_prompt(&self) -> String {
            self.last_prompt.lock().unwrap().clone().unwrap_or_default()
        }
    }

    #[async_trait]
    impl TextGenerator for MockGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            if self.fail {
                return Err(LlmError::Api {
                    status: 500,
                    message: "model offline".to_string(),
                });
            }
            Ok("Generated advice".to_string())
        }

        async fn generate_stream(&self, prompt: &str) -> Result<Box<dyn TokenSource>, LlmError> {
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            if self.fail {
                return Err(LlmError::EmptyContent);
            }
            Ok(Box::new(ScriptedSource::tokens(&["Hel", "lo"])))
        }
    }

    fn app(generator: Option<Arc<MockGenerator>>) -> Router {
        build_router(AppState {
            knowledge: Arc::new(KnowledgeBase::builtin().unwrap()),
            generator: generator.map(|g| g as Arc<dyn TextGenerator>),
            job_dedup: JobDedup::KeepAll,
        })
    }

    fn post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let (status, bytes) = send(app, request).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_empty_body_object_is_400() {
        let (status, body) = send_json(app(None), post("/api/chat", "{}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Message is required" }));
    }

    #[tokio::test]
    async fn test_empty_message_is_400() {
        let (status, body) = send_json(app(None), post("/api/chat", r#"{"message":""}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Message is required");
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let (status, body) = send_json(app(None), post("/api/chat", "{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request body"));
    }

    #[tokio::test]
    async fn test_hello_returns_non_empty_response() {
        let (status, body) = send_json(app(None), post("/api/chat", r#"{"message":"hello"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body["response"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rule_based_reply_lists_matched_jobs() {
        let (status, body) = send_json(
            app(None),
            post("/api/chat", r#"{"message":"I enjoy coding"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let response = body["response"].as_str().unwrap();
        assert!(response.contains("Software Engineer"));
        assert!(response.contains("Machine Learning Engineer"));
    }

    #[tokio::test]
    async fn test_multi_turn_uses_last_user_message() {
        let payload = json!({
            "messages": [
                { "role": "user", "content": "I enjoy coding" },
                { "role": "assistant", "content": "Nice." },
                { "role": "user", "content": "Actually I studied journalism" }
            ]
        });
        let (status, body) = send_json(app(None), post("/api/chat", &payload.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        let response = body["response"].as_str().unwrap();
        assert!(response.contains("Journalist"));
        assert!(!response.contains("Software Engineer"));
    }

    #[tokio::test]
    async fn test_multi_turn_without_user_message_is_400() {
        let payload = json!({ "messages": [{ "role": "assistant", "content": "Hello" }] });
        let (status, body) = send_json(app(None), post("/api/chat", &payload.to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Message is required");
    }

    #[tokio::test]
    async fn test_generator_receives_composed_prompt() {
        let generator = MockGenerator::new(false);
        let (status, body) = send_json(
            app(Some(generator.clone())),
            post("/api/chat", r#"{"message":"I enjoy coding"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "response": "Generated advice" }));

        let prompt = generator.last_prompt();
        assert!(prompt.contains("\"I enjoy coding\""));
        assert!(prompt.contains("Matched career domains: Technology"));
    }

    #[tokio::test]
    async fn test_generator_failure_is_500() {
        let (status, body) = send_json(
            app(Some(MockGenerator::new(true))),
            post("/api/chat", r#"{"message":"I enjoy coding"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }

    #[tokio::test]
    async fn test_stream_relays_generated_tokens() {
        let response = app(Some(MockGenerator::new(false)))
            .oneshot(post("/api/chat/stream", r#"{"message":"I enjoy coding"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"Hello");
    }

    #[tokio::test]
    async fn test_stream_without_generator_streams_suggestions() {
        let (status, bytes) = send(
            app(None),
            post("/api/chat/stream", r#"{"message":"I studied journalism"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("Based on your interests and education"));
        assert!(text.contains("Copywriter"));
    }

    #[tokio::test]
    async fn test_stream_validation_error_is_json_400() {
        let (status, body) = send_json(app(None), post("/api/chat/stream", "{}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Message is required");
    }

    #[tokio::test]
    async fn test_stream_open_failure_is_500() {
        let (status, body) = send_json(
            app(Some(MockGenerator::new(true))),
            post("/api/chat/stream", r#"{"message":"I enjoy coding"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }
}

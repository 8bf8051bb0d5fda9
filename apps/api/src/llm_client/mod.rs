/// LLM Client — the single point of entry for all completion-service calls.
///
/// ARCHITECTURAL RULE: No other module may call the OpenAI API directly.
/// Callers depend on the `CompletionService` trait so tests can inject a stub.
///
/// Model: gpt-3.5-turbo (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const OPENAI_BASE_URL: &str = "https://api.openai.com";
const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
/// The model used for every completion request.
pub const MODEL: &str = "gpt-3.5-turbo";

/// Any failure of a single completion exchange. Nothing here is retried.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("completion service returned no content")]
    EmptyContent,
}

/// A service that turns a system instruction plus one user turn into text.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, GenerationError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Takes the text of the first choice, if it carries any.
    pub fn into_text(self) -> Option<String> {
        self.choices.into_iter().next().and_then(|c| c.message.content)
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// OpenAI Chat Completions client.
///
/// No request timeout is set; the transport default applies.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, OPENAI_BASE_URL)
    }

    /// Points the client at another host, e.g. a local mock server.
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Makes exactly one call to the chat completions endpoint.
    pub async fn call(&self, system: &str, user: &str) -> Result<ChatResponse, GenerationError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = error_message(status, response.text().await);
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let chat_response: ChatResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "Completion succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat_response)
    }
}

/// Provider error message for a non-2xx reply: the JSON `error.message`, else the
/// raw body, else the status reason. A body that cannot be read is reported too.
fn error_message(status: StatusCode, body: Result<String, reqwest::Error>) -> String {
    let reason = status.canonical_reason().unwrap_or("unknown status");
    match body {
        Ok(body) if body.trim().is_empty() => reason.to_string(),
        Ok(body) => serde_json::from_str::<OpenAiError>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body),
        Err(e) => format!("{reason} (failed to read error body: {e})"),
    }
}

#[async_trait]
impl CompletionService for LlmClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, GenerationError> {
        self.call(system, user)
            .await?
            .into_text()
            .ok_or(GenerationError::EmptyContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{bearer_token, body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn completion_body(text: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": text}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
        })
    }

    #[tokio::test]
    async fn test_complete_sends_system_and_user_turns() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(bearer_token("sk-test"))
            .and(body_partial_json(json!({
                "model": "gpt-3.5-turbo",
                "messages": [
                    {"role": "system", "content": "persona"},
                    {"role": "user", "content": "What is your strength?"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Sample answer.")))
            .expect(1)
            .mount(&server)
            .await;

        let client = LlmClient::with_base_url("sk-test".into(), server.uri());
        let text = client
            .complete("persona", "What is your strength?")
            .await
            .unwrap();
        assert_eq!(text, "Sample answer.");
    }

    #[tokio::test]
    async fn test_text_is_returned_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(completion_body("  padded answer \n")),
            )
            .mount(&server)
            .await;

        let client = LlmClient::with_base_url("sk-test".into(), server.uri());
        let text = client.complete("s", "u").await.unwrap();
        assert_eq!(text, "  padded answer \n");
    }

    #[tokio::test]
    async fn test_rate_limit_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": {"message": "Rate limit reached", "type": "requests"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = LlmClient::with_base_url("sk-test".into(), server.uri());
        let err = client.complete("s", "u").await.unwrap_err();
        match err {
            GenerationError::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "Rate limit reached");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        // MockServer verifies `.expect(1)` on drop.
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
            .expect(1)
            .mount(&server)
            .await;

        let client = LlmClient::with_base_url("sk-test".into(), server.uri());
        let err = client.complete("s", "u").await.unwrap_err();
        assert!(matches!(
            err,
            GenerationError::Api { status: 503, ref message } if message == "upstream down"
        ));
    }

    #[tokio::test]
    async fn test_empty_error_body_falls_back_to_status_reason() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = LlmClient::with_base_url("sk-test".into(), server.uri());
        let err = client.complete("s", "u").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "API error (status 503): Service Unavailable"
        );
    }

    #[test]
    fn test_error_message_prefers_provider_json() {
        let body = r#"{"error": {"message": "quota exceeded"}}"#.to_string();
        assert_eq!(
            error_message(StatusCode::TOO_MANY_REQUESTS, Ok(body)),
            "quota exceeded"
        );
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, Ok("  ".to_string())),
            "Bad Gateway"
        );
    }

    #[tokio::test]
    async fn test_auth_failure_surfaces_provider_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {"message": "Incorrect API key provided"}
            })))
            .mount(&server)
            .await;

        let client = LlmClient::with_base_url("sk-bad".into(), server.uri());
        let err = client.complete("s", "u").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "API error (status 401): Incorrect API key provided"
        );
    }

    #[tokio::test]
    async fn test_empty_choices_is_empty_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let client = LlmClient::with_base_url("sk-test".into(), server.uri());
        let err = client.complete("s", "u").await.unwrap_err();
        assert!(matches!(err, GenerationError::EmptyContent));
    }

    #[tokio::test]
    async fn test_null_content_is_empty_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": null}}]
            })))
            .mount(&server)
            .await;

        let client = LlmClient::with_base_url("sk-test".into(), server.uri());
        let err = client.complete("s", "u").await.unwrap_err();
        assert!(matches!(err, GenerationError::EmptyContent));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = LlmClient::with_base_url("sk-test".into(), server.uri());
        let err = client.complete("s", "u").await.unwrap_err();
        assert!(matches!(err, GenerationError::Parse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Nothing listens on port 9 of the loopback interface.
        let client = LlmClient::with_base_url("sk-test".into(), "http://127.0.0.1:9");
        let err = client.complete("s", "u").await.unwrap_err();
        assert!(matches!(err, GenerationError::Http(_)));
    }

    #[test]
    fn test_into_text_takes_first_choice() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [
                {"message": {"content": "first"}},
                {"message": {"content": "second"}}
            ]
        }))
        .unwrap();
        assert_eq!(response.into_text().as_deref(), Some("first"));
    }
}

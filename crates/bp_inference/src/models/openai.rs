use async_trait::async_trait;
use bp_core::{CompletionRequest, Error, Result, TextModel};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use crate::Config;

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    n: u32,
    temperature: f64,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Chat-completion client for OpenAI and API-compatible servers.
pub struct OpenAiModel {
    client: Client,
    config: Config,
}

impl OpenAiModel {
    pub fn new(config: Config) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::Config("OpenAI API key is required".to_string()));
        }
        Ok(Self {
            client: Client::new(),
            config,
        })
    }
}

impl fmt::Debug for OpenAiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiModel")
            .field("client", &"<reqwest::Client>")
            .field("config", &self.config)
            .finish()
    }
}

#[async_trait]
impl TextModel for OpenAiModel {
    fn name(&self) -> &str {
        &self.config.model_name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let body = ChatRequest {
            model: &self.config.model_name,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            max_tokens: request.max_tokens,
            n: 1,
            temperature: request.temperature,
        };

        tracing::debug!(model = %self.config.model_name, max_tokens = request.max_tokens, "Chat completion request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            let message = serde_json::from_str::<ErrorEnvelope>(&text)
                .map(|envelope| envelope.error.message)
                .unwrap_or(text);
            return Err(Error::Inference(format!("API error ({}): {}", status, message)));
        }

        let response = response.json::<ChatResponse>().await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::Inference("No completion returned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn model_for(server: &MockServer) -> OpenAiModel {
        let config = Config::new("test-key").with_base_url(&server.base_url()).unwrap();
        OpenAiModel::new(config).unwrap()
    }

    #[test]
    fn test_model_requires_api_key() {
        let result = OpenAiModel::new(Config::new(""));
        assert!(matches!(result, Err(Error::Config(_))));

        assert!(OpenAiModel::new(Config::new("test-key")).is_ok());
    }

    #[tokio::test]
    async fn test_complete_sends_chat_request() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .header("authorization", "Bearer test-key")
                    .body_includes("\"model\":\"gpt-3.5-turbo\"")
                    .body_includes("\"max_tokens\":50")
                    .body_includes("\"n\":1")
                    .body_includes("\"temperature\":0.7")
                    .body_includes("\"role\":\"user\"");
                then.status(200).json_body(json!({
                    "id": "chatcmpl-1",
                    "object": "chat.completion",
                    "choices": [
                        { "index": 0, "message": { "role": "assistant", "content": "  Electric Dreams  " }, "finish_reason": "stop" }
                    ]
                }));
            })
            .await;

        let request = CompletionRequest::new("Title please", 50, 0.7);
        let text = model_for(&server).complete(&request).await.unwrap();

        mock.assert_async().await;
        assert_eq!(text, "  Electric Dreams  ");
    }

    #[tokio::test]
    async fn test_api_error_message_is_extracted() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(429).json_body(json!({
                    "error": { "message": "Rate limit reached", "type": "requests" }
                }));
            })
            .await;

        let err = model_for(&server)
            .complete(&CompletionRequest::new("x", 10, 0.7))
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("429"), "{}", message);
        assert!(message.contains("Rate limit reached"), "{}", message);
    }

    #[tokio::test]
    async fn test_non_json_error_body_is_passed_through() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(502).body("upstream unavailable");
            })
            .await;

        let err = model_for(&server)
            .complete(&CompletionRequest::new("x", 10, 0.7))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("upstream unavailable"));
    }

    #[tokio::test]
    async fn test_empty_choices_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200).json_body(json!({ "choices": [] }));
            })
            .await;

        let err = model_for(&server)
            .complete(&CompletionRequest::new("x", 10, 0.7))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Inference(_)));
    }

    #[tokio::test]
    async fn test_null_content_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200).json_body(json!({
                    "choices": [{ "message": { "content": null } }]
                }));
            })
            .await;

        let err = model_for(&server)
            .complete(&CompletionRequest::new("x", 10, 0.7))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Inference(_)));
        assert_eq!(err.to_string(), "Inference error: No completion returned");
    }
}

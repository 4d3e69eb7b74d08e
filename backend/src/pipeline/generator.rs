//! Step one: ask a chat-completion service for the LaTeX source.

use crate::error::GenerateError;
use crate::pipeline::prompt::Prompt;
use async_trait::async_trait;
use log::warn;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

#[async_trait]
pub trait MarkupGenerator: Send + Sync {
    /// Returns the generated markup. Never called more than once per request.
    async fn generate(&self, prompt: &Prompt) -> Result<String, GenerateError>;
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

/// Client for an OpenAI-compatible `chat/completions` endpoint.
#[derive(Debug, Clone)]
pub struct ChatCompletionClient {
    client: Client,
    url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl ChatCompletionClient {
    pub fn new(
        url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            url: url.into(),
            api_key: api_key.into(),
            model: model.into(),
            temperature: 0.2,
            max_tokens: 3000,
        })
    }

    pub fn with_sampling(mut self, temperature: f32, max_tokens: u32) -> Self {
        self.temperature = temperature;
        self.max_tokens = max_tokens;
        self
    }
}

#[async_trait]
impl MarkupGenerator for ChatCompletionClient {
    async fn generate(&self, prompt: &Prompt) -> Result<String, GenerateError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(GenerateError::UpstreamAuth {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(
                "generation service answered {}: {}",
                status,
                truncate(&message, 300)
            );
            return Err(GenerateError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        let json: Value = match serde_json::from_slice(&bytes) {
            Ok(json) => json,
            Err(e) => {
                warn!("generation response is not JSON: {}", e);
                return Err(GenerateError::GenerationEmpty);
            }
        };
        extract_content(&json).ok_or(GenerateError::GenerationEmpty)
    }
}

/// `choices[0].message.content`, if present and not blank.
pub fn extract_content(json: &Value) -> Option<String> {
    json.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .filter(|content| !content.trim().is_empty())
        .map(str::to_string)
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

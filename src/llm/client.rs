use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::Client;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use super::types::{ChatMessage, ChatResponse, ContentPart, ImageUrl, Role};

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("API returned error status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("failed to parse response: {0}")]
    ParseError(String),
}

/// Chat-completions client for the text-generation service.
///
/// Synchronous from the pipeline's point of view: one request at a time,
/// no internal retries. Any failure is the caller's to handle.
pub struct ChatClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl ChatClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_base_url(api_key, model, OPENAI_BASE_URL)
    }

    pub fn with_base_url(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(180)) // 3 min for LLM generation
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a chat completion request and return the assistant's text.
    pub async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);
        let n_messages = messages.len();
        let body = json!({
            "model": self.model,
            "messages": messages,
        });

        debug!(model = %self.model, n_messages, "chat completion request");

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| LlmError::ParseError("missing choices[0].message.content".into()))?;

        Ok(content)
    }

    /// Describe a JPEG image: system instruction plus a user message with a
    /// caption request and the image as a base64 data URL.
    pub async fn describe_image(
        &self,
        system_instruction: &str,
        caption_request: &str,
        jpeg_bytes: &[u8],
    ) -> Result<String, LlmError> {
        let data_url = format!("data:image/jpeg;base64,{}", BASE64.encode(jpeg_bytes));

        let messages = vec![
            ChatMessage::text(Role::System, system_instruction),
            ChatMessage::parts(
                Role::User,
                vec![
                    ContentPart::Text {
                        text: caption_request.to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl { url: data_url },
                    },
                ],
            ),
        ];

        let summary = self.complete(messages).await?;
        Ok(summary.trim().to_string())
    }
}

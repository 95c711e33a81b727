/**
 * Reply Generation
 *
 * Produces the assistant's answer to a topic's history. The handler only
 * sees the `ReplyGenerator` trait; `ChatCompletionsGenerator` implements it
 * against any OpenAI-compatible `/chat/completions` endpoint.
 */

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::error::BackendError;
use crate::backend::server::config::GeneratorConfig;
use crate::shared::models::ConversationView;

/// Message returned to clients when generation fails
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate a reply";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Generator returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Generator returned an empty reply")]
    EmptyReply,
}

impl From<GeneratorError> for BackendError {
    fn from(err: GeneratorError) -> Self {
        tracing::error!("Reply generation failed: {}", err);
        BackendError::upstream(GENERATION_FAILED_MESSAGE)
    }
}

/// Source of assistant replies
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    /// Generate the next assistant message for `history`, oldest entry first
    async fn generate(&self, history: &[ConversationView]) -> Result<String, GeneratorError>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat completions API
#[derive(Debug, Clone)]
pub struct ChatCompletionsGenerator {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl ChatCompletionsGenerator {
    pub fn new(config: &GeneratorConfig) -> Result<Self, GeneratorError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.base_url),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ReplyGenerator for ChatCompletionsGenerator {
    async fn generate(&self, history: &[ConversationView]) -> Result<String, GeneratorError> {
        let payload = ChatRequest {
            model: &self.model,
            messages: history
                .iter()
                .map(|entry| ChatMessage {
                    role: entry.role.as_str(),
                    content: &entry.text,
                })
                .collect(),
        };

        let mut request = self.client.post(&self.endpoint).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        tracing::debug!(
            "Requesting reply from {} ({} messages)",
            self.endpoint,
            payload.messages.len()
        );
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeneratorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(GeneratorError::EmptyReply)
    }
}

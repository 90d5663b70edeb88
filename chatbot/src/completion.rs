//! Chat completion request and response handling.
//!
//! One synchronous round trip against the provider's `/chat/completions`
//! endpoint: serialize the message list, post it, and decode the choices.

use crate::client::OpenAIClient;
use crate::error::{Error, Result};
use crate::message::ChatMessage;
use serde::Deserialize;
use tracing::{debug, instrument};

/// GPT-4.1 nano model identifier - fastest, most cost-efficient.
pub const GPT_4_1_NANO: &str = "gpt-4.1-nano";

/// A chat completion model bound to an [`OpenAIClient`].
#[derive(Clone)]
pub struct CompletionModel {
    client: OpenAIClient,
    model_id: String,
}

impl std::fmt::Debug for CompletionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionModel")
            .field("model_id", &self.model_id)
            .finish()
    }
}

impl CompletionModel {
    /// Create a new completion model.
    pub(crate) fn new(client: OpenAIClient, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }

    /// Get the model identifier.
    #[must_use]
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Perform one chat completion request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on transport failure, [`Error::Api`] when the
    /// provider answers with a non-success status, and [`Error::Json`] if the
    /// success body cannot be decoded as a [`ChatResponse`].
    #[instrument(skip(self, messages), fields(model = %self.model_id))]
    pub async fn generate(&self, messages: &[ChatMessage]) -> Result<ChatResponse> {
        let body = serde_json::json!({
            "model": self.model_id,
            "messages": messages,
        });

        debug!("Sending request to OpenAI API");

        let response = self
            .client
            .http_client
            .post(format!("{}/chat/completions", self.client.base_url))
            .headers(self.client.auth_headers())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            // Prefer the provider's structured message; fall back to the raw body.
            let message = serde_json::from_str::<ApiErrorResponse>(&error_text)
                .map_or(error_text, |body| body.error.message);
            return Err(Error::api(status, message));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// A chat completion response.
#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct ChatResponse {
    /// Candidate replies; this system consumes only the first.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl ChatResponse {
    /// Get the first choice's message content, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

/// One candidate reply within a [`ChatResponse`].
#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct Choice {
    /// The generated message.
    pub message: ResponseMessage,
}

/// The message carried by a [`Choice`].
#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct ResponseMessage {
    /// Text content of the reply. May be absent or null.
    #[serde(default)]
    pub content: Option<String>,
}

/// `OpenAI` API error response body.
#[derive(Debug, Deserialize)]
#[non_exhaustive]
pub struct ApiErrorResponse {
    /// Detailed error information.
    pub error: ApiError,
}

/// `OpenAI` API error details.
#[derive(Debug, Deserialize)]
#[non_exhaustive]
pub struct ApiError {
    /// Human-readable error message.
    pub message: String,
    /// Error type identifier.
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    /// Error code.
    pub code: Option<String>,
}

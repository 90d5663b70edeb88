//! The chat invoker: one prompt in, one reply (or empty string) out.
//!
//! This layer owns the absorbing error policy the CLI relies on: every
//! failure is reported through `tracing::error!` and converted into an
//! empty string, so callers never see an `Err`.

use crate::client::OpenAIClient;
use crate::completion::{CompletionModel, GPT_4_1_NANO};
use crate::error::{Error, Result};
use crate::message::ChatMessage;
use tracing::error;

/// Fixed system instruction sent with every request.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Get a reply from the default model for the given prompt.
///
/// Reads `OPENAI_API_KEY` from the environment at call time. All failures
/// (missing credential, transport or provider error, unusable response) are
/// logged and collapsed into an empty string; no network call is attempted
/// when the credential is absent.
pub async fn get_response(prompt: &str) -> String {
    get_response_as(GPT_4_1_NANO, prompt).await
}

/// Like [`get_response`], but with a caller-chosen model identifier.
pub async fn get_response_as(model_id: &str, prompt: &str) -> String {
    let client = match OpenAIClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            error!("{e}");
            return String::new();
        }
    };

    generate_reply(&client.completion_model(model_id), prompt).await
}

/// Send the fixed system instruction plus `prompt` through `model` and
/// return the first choice's content, trimmed of surrounding whitespace.
///
/// Failures are logged and yield an empty string, matching [`get_response`].
pub async fn generate_reply(model: &CompletionModel, prompt: &str) -> String {
    match try_reply(model, prompt).await {
        Ok(reply) => reply,
        Err(Error::EmptyResponse) => {
            error!("Unable to get a valid response from the chatbot");
            String::new()
        }
        Err(e) => {
            error!("Error during OpenAI API call: {e}");
            String::new()
        }
    }
}

/// The fallible core of [`generate_reply`].
///
/// A content value that is present but empty is indistinguishable from a
/// missing choice here; both are [`Error::EmptyResponse`]. Whitespace-only
/// content passes the check and trims down to an empty (but successful)
/// reply.
///
/// # Errors
///
/// Returns [`Error::EmptyResponse`] when the response has no choice with
/// non-empty content, and propagates [`CompletionModel::generate`] errors.
pub async fn try_reply(model: &CompletionModel, prompt: &str) -> Result<String> {
    let messages = [
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(prompt),
    ];

    let response = model.generate(&messages).await?;

    match response.text() {
        Some(content) if !content.is_empty() => Ok(content.trim().to_string()),
        _ => Err(Error::EmptyResponse),
    }
}

//! Chatbot - a minimal client for the `OpenAI` Chat Completions API
//!
//! This crate wraps a single chat-completion round trip: a fixed system
//! instruction plus one user prompt in, the first choice's text out.
//! The [`chat`] module exposes the absorbing entry point used by the CLI;
//! the lower layers ([`client`], [`completion`]) return [`Result`]s for
//! callers that want the error detail.

pub mod chat;
pub mod client;
pub mod completion;
pub mod error;
pub mod message;

pub use chat::{SYSTEM_PROMPT, get_response};
pub use client::{OpenAIClient, OpenAIClientBuilder};
pub use completion::{CompletionModel, GPT_4_1_NANO};
pub use error::{Error, Result};
pub use message::{ChatMessage, MessageRole};

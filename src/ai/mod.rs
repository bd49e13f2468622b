//! AI writing assistance for LetterBox.
//!
//! Talks to an OpenAI-compatible chat completion endpoint. The provider
//! behind the endpoint is opaque; only the completion contract matters.

mod client;

pub use client::AiClient;

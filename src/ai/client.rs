//! HTTP client for the chat completion endpoint.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::AiConfig;
use crate::{LetterboxError, Result};

/// Default tone when the caller doesn't pick one.
const DEFAULT_TONE: &str = "sincere and warm";

/// Default length hint for generated letters.
const DEFAULT_LENGTH: &str = "medium (2-4 paragraphs)";

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
///
/// Every call is a single attempt. There is no retry and no fallback;
/// a failed completion surfaces as an upstream error.
#[derive(Debug, Clone)]
pub struct AiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl AiClient {
    /// Create a new client from configuration.
    pub fn new(config: &AiConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.total_timeout_secs))
            .build()
            .map_err(|e| {
                LetterboxError::Config(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    /// Rewrite a letter in the given tone, keeping its meaning.
    pub async fn rewrite(&self, content: &str, tone: Option<&str>) -> Result<String> {
        let tone = tone.unwrap_or(DEFAULT_TONE);
        let user_prompt = format!(
            "Rewrite the following letter in a {} tone. Keep it in the same language.\n\n{}",
            tone, content
        );

        self.complete(
            "You rewrite letters keeping the original meaning but improving clarity and emotion.",
            &user_prompt,
            0.7,
        )
        .await
    }

    /// Generate a complete letter from a free-form request.
    pub async fn compose(
        &self,
        message: &str,
        tone: Option<&str>,
        length: Option<&str>,
    ) -> Result<String> {
        let tone = tone.unwrap_or(DEFAULT_TONE);
        let length = length.unwrap_or(DEFAULT_LENGTH);
        let user_prompt = format!(
            "User request: {}\n\nTone: {}\nLength: {}\n\nWrite a complete letter that matches this request.",
            message, tone, length
        );

        self.complete(
            "You are an assistant that writes personalized letters based on what the user wants. \
             Always respond with a complete letter only, no explanations, no markdown.",
            &user_prompt,
            0.8,
        )
        .await
    }

    /// Send one completion request and extract the first choice's text.
    async fn complete(&self, system: &str, user: &str, temperature: f32) -> Result<String> {
        let request = CompletionRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: system,
                },
                Message {
                    role: "user",
                    content: user,
                },
            ],
            temperature,
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("AI completion request failed: {}", e);
                LetterboxError::Upstream("completion request failed".to_string())
            })?;

        if !response.status().is_success() {
            warn!("AI completion returned HTTP {}", response.status());
            return Err(LetterboxError::Upstream(format!(
                "completion returned HTTP {}",
                response.status()
            )));
        }

        let body: CompletionResponse = response.json().await.map_err(|e| {
            warn!("AI completion response could not be parsed: {}", e);
            LetterboxError::Upstream("completion response could not be parsed".to_string())
        })?;

        let text = body
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                warn!("AI completion response contained no text");
                LetterboxError::Upstream("completion response contained no text".to_string())
            })?;

        Ok(text.to_string())
    }
}

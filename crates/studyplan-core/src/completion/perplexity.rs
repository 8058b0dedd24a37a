//! Perplexity chat-completions provider.
//!
//! Sends an OpenAI-style chat payload with a system and a user message and
//! returns the first choice's message content.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::trait_def::Completion;
use super::types::{CompletionError, CompletionRequest};

const PROVIDER_NAME: &str = "perplexity";

/// Connection settings for [`PerplexityClient`].
#[derive(Clone)]
pub struct PerplexityConfig {
    pub api_url: String,
    /// Bearer token. `None` leaves the client unusable until configured.
    pub api_key: Option<String>,
    pub model: String,
    /// Upper bound on one request, connect to last byte.
    pub timeout: Duration,
}

impl PerplexityConfig {
    pub const DEFAULT_API_URL: &'static str = "https://api.perplexity.ai/chat/completions";
    pub const DEFAULT_MODEL: &'static str = "r1-1776";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_url: Self::DEFAULT_API_URL.to_string(),
            api_key,
            model: Self::DEFAULT_MODEL.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    fn usable_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}

impl std::fmt::Debug for PerplexityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerplexityConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: String,
}

/// Pull the first choice's content out of a response body.
fn parse_chat_response(body: &str) -> Result<String, CompletionError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| CompletionError::Malformed(e.to_string()))?;
    parsed
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or_else(|| CompletionError::Malformed("response contained no choices".to_string()))
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct PerplexityClient {
    config: PerplexityConfig,
    client: Client,
}

impl PerplexityClient {
    /// Build a client. A missing API key is logged here and reported as a
    /// configuration error on the first call.
    pub fn new(config: PerplexityConfig) -> Result<Self, CompletionError> {
        if config.usable_key().is_none() {
            warn!("Perplexity API key is not set; study plan generation will fail until one is configured");
        }
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn classify(&self, err: reqwest::Error) -> CompletionError {
        if err.is_timeout() {
            CompletionError::Timeout(self.config.timeout)
        } else {
            CompletionError::Transport(err)
        }
    }
}

#[async_trait]
impl Completion for PerplexityClient {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let api_key = self
            .config
            .usable_key()
            .ok_or_else(|| CompletionError::Configuration {
                provider: PROVIDER_NAME.to_string(),
                reason: "API key is not set (STUDYPLAN_API_KEY or PERPLEXITY_API_KEY)".to_string(),
            })?;

        let payload = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            max_tokens: request.max_tokens,
        };

        debug!(
            url = %self.config.api_url,
            model = %self.config.model,
            prompt_chars = request.prompt.len(),
            "sending completion request"
        );

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), body = %body, "completion API returned an error");
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let content = parse_chat_response(&body)?;
        debug!(reply_chars = content.len(), "completion received");
        Ok(content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

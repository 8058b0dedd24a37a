//! Request and error types shared by completion providers.

use std::time::Duration;

use thiserror::Error;

/// Default generation budget for study plan replies.
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

/// One completion call: a system instruction, the user prompt, and a cap on
/// generated tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            prompt: prompt.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Errors a completion provider can report.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The provider cannot be used as configured (e.g. no API key).
    #[error("completion provider {provider:?} is not configured: {reason}")]
    Configuration { provider: String, reason: String },

    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion request timed out after {0:?}")]
    Timeout(Duration),

    /// The API answered with a non-success status (auth, rate limit, ...).
    #[error("completion API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed completion response: {0}")]
    Malformed(String),
}

impl CompletionError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

//! A provider that always returns the same text.
//!
//! Used to replay a captured model reply offline and as a deterministic
//! stand-in for a live API.

use async_trait::async_trait;

use super::trait_def::Completion;
use super::types::{CompletionError, CompletionRequest};

#[derive(Debug, Clone)]
pub struct StaticCompletion {
    text: String,
}

impl StaticCompletion {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Load the reply from a file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> std::io::Result<Self> {
        std::fs::read_to_string(path).map(Self::new)
    }
}

#[async_trait]
impl Completion for StaticCompletion {
    fn name(&self) -> &str {
        "static"
    }

    async fn complete(&self, _request: &CompletionRequest) -> Result<String, CompletionError> {
        Ok(self.text.clone())
    }
}

//! The `Completion` trait -- the adapter interface for text-completion
//! backends.
//!
//! The trait is object-safe so the pipeline and the HTTP server can hold a
//! provider as `Arc<dyn Completion>`.

use async_trait::async_trait;

use super::types::{CompletionError, CompletionRequest};

/// A backend that turns a prompt into one block of generated text.
#[async_trait]
pub trait Completion: Send + Sync {
    /// Short provider name used in logs and error messages.
    fn name(&self) -> &str;

    /// Run one completion.
    ///
    /// Implementations make a single attempt and report every failure as a
    /// [`CompletionError`]; they never return partial output.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}

// Compile-time assertion: Completion must be object-safe.
const _: () = {
    fn _assert_object_safe(_: &dyn Completion) {}
};

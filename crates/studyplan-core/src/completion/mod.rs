//! Completion provider interface for large-language-model backends.
//!
//! This module defines the [`Completion`] trait that every provider
//! implements, the request/error types it speaks, and two providers:
//! [`PerplexityClient`] for the hosted chat-completions API and
//! [`StaticCompletion`] for replaying a captured reply.
//!
//! # Architecture
//!
//! ```text
//! synthesize(profile, analysis, &dyn Completion)
//!     |
//!     |  CompletionRequest { system, prompt, max_tokens }
//!     v
//! dyn Completion --complete()--> Result<String, CompletionError>
//!     |
//!     +-- PerplexityClient   POST /chat/completions (bearer auth)
//!     +-- StaticCompletion   fixed text
//! ```
//!
//! Providers make exactly one attempt per call. Retrying, caching and rate
//! limiting belong to whoever hosts the pipeline.

pub mod fixed;
pub mod perplexity;
pub mod trait_def;
pub mod types;

pub use fixed::StaticCompletion;
pub use perplexity::{PerplexityClient, PerplexityConfig};
pub use trait_def::Completion;
pub use types::{CompletionError, CompletionRequest};

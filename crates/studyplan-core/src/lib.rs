//! Study plan generation: motivation analysis, prompt construction,
//! completion providers, and structuring of free-text model replies.
//!
//! ```text
//! LearnerProfile --analyze--> MotivationAnalysis
//!        |                           |
//!        +-------> build_prompt <----+
//!                       |
//!                       v
//!              dyn Completion::complete
//!                       |
//!                       v
//!          structure_reply (extract + fallback) --> StudyPlan
//! ```

pub mod analyzer;
pub mod completion;
pub mod extract;
pub mod plan;
pub mod profile;

pub use analyzer::{MotivationAnalysis, MotivationType, analyze};
pub use completion::{Completion, CompletionError, CompletionRequest};
pub use plan::{StudyPlan, SynthesisError, generate_study_plan, synthesize};
pub use profile::{GradeRecord, LearnerProfile, ProfileError};

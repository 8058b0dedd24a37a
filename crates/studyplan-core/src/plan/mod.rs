//! Study plan synthesis: prompt construction, reply structuring, and the
//! deterministic fallbacks behind every field.

pub mod fallback;
pub mod goals;
pub mod prompt;
pub mod resources;
pub mod schedule;
pub mod service;
pub mod synthesize;
pub mod types;

pub use prompt::{SYSTEM_INSTRUCTION, build_prompt};
pub use service::{generate_study_plan, generate_study_plan_with_max_tokens};
pub use synthesize::{SynthesisError, structure_reply, synthesize, synthesize_with_max_tokens};
pub use types::{
    Activity, DaySchedule, GoalTimeframe, Resource, StudyPlan, SubjectResources, WEEK_DAYS,
};

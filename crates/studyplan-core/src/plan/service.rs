//! End-to-end entry point: analyze a profile, then synthesize its plan.

use tracing::info;

use crate::analyzer::analyze;
use crate::completion::Completion;
use crate::completion::types::DEFAULT_MAX_TOKENS;
use crate::profile::LearnerProfile;

use super::synthesize::{SynthesisError, synthesize_with_max_tokens};
use super::types::StudyPlan;

/// Run the whole pipeline for one profile with the default generation
/// budget.
pub async fn generate_study_plan(
    profile: &LearnerProfile,
    completion: &dyn Completion,
) -> Result<StudyPlan, SynthesisError> {
    generate_study_plan_with_max_tokens(profile, completion, DEFAULT_MAX_TOKENS).await
}

pub async fn generate_study_plan_with_max_tokens(
    profile: &LearnerProfile,
    completion: &dyn Completion,
    max_tokens: u32,
) -> Result<StudyPlan, SynthesisError> {
    let analysis = analyze(profile);
    info!(
        student_id = %profile.student_id,
        motivation_type = %analysis.motivation_type,
        "motivation analyzed"
    );
    synthesize_with_max_tokens(profile, &analysis, completion, max_tokens).await
}

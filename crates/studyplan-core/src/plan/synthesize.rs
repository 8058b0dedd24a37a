//! Plan synthesis: prompt the completion provider and structure its reply.
//!
//! [`structure_reply`] is pure. Each field is extracted independently and
//! falls back to deterministic content when its section is missing, so a
//! reply with no recognizable headers still yields a complete plan.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::analyzer::MotivationAnalysis;
use crate::completion::types::DEFAULT_MAX_TOKENS;
use crate::completion::{Completion, CompletionError, CompletionRequest};
use crate::extract::{extract_first_section, extract_section, split_fragments};
use crate::profile::LearnerProfile;

use super::fallback;
use super::goals::extract_long_term_goals;
use super::prompt::{SYSTEM_INSTRUCTION, build_prompt};
use super::resources::extract_recommended_resources;
use super::schedule::extract_weekly_schedule;
use super::types::StudyPlan;

const STRATEGY_LABELS: [&str; 2] = ["motivation strategies", "strategies"];

/// Errors that abort plan synthesis. Parsing never fails; only the
/// completion call can.
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// The completion provider cannot be used as configured.
    #[error("completion provider is not configured: {0}")]
    Configuration(String),

    #[error("completion failed: {0}")]
    CompletionFailure(#[source] CompletionError),
}

impl From<CompletionError> for SynthesisError {
    fn from(err: CompletionError) -> Self {
        match err {
            CompletionError::Configuration { provider, reason } => {
                Self::Configuration(format!("{provider}: {reason}"))
            }
            other => Self::CompletionFailure(other),
        }
    }
}

/// Build the prompt, run one completion, and structure the reply.
pub async fn synthesize(
    profile: &LearnerProfile,
    analysis: &MotivationAnalysis,
    completion: &dyn Completion,
) -> Result<StudyPlan, SynthesisError> {
    synthesize_with_max_tokens(profile, analysis, completion, DEFAULT_MAX_TOKENS).await
}

/// [`synthesize`] with an explicit generation budget.
pub async fn synthesize_with_max_tokens(
    profile: &LearnerProfile,
    analysis: &MotivationAnalysis,
    completion: &dyn Completion,
    max_tokens: u32,
) -> Result<StudyPlan, SynthesisError> {
    let request = CompletionRequest::new(SYSTEM_INSTRUCTION, build_prompt(profile, analysis))
        .with_max_tokens(max_tokens);

    info!(
        student_id = %profile.student_id,
        provider = completion.name(),
        "requesting study plan completion"
    );

    let reply = completion.complete(&request).await.map_err(|e| {
        warn!(
            student_id = %profile.student_id,
            provider = completion.name(),
            error = %e,
            "study plan completion failed"
        );
        SynthesisError::from(e)
    })?;

    let plan = structure_reply(&reply, profile, analysis, Utc::now());
    info!(
        student_id = %profile.student_id,
        days = plan.weekly_schedule.len(),
        "study plan structured"
    );
    Ok(plan)
}

/// Turn a free-text reply into a [`StudyPlan`] stamped with `generated_at`.
pub fn structure_reply(
    reply: &str,
    profile: &LearnerProfile,
    analysis: &MotivationAnalysis,
    generated_at: DateTime<Utc>,
) -> StudyPlan {
    let overview = extract_section(reply, "overview")
        .map(str::to_string)
        .unwrap_or_else(|| {
            debug!(field = "overview", "section not found, using fallback");
            fallback::OVERVIEW.to_string()
        });

    let motivation_assessment = extract_section(reply, "motivation assessment")
        .map(str::to_string)
        .unwrap_or_else(|| {
            debug!(field = "motivationAssessment", "section not found, using fallback");
            fallback::motivation_assessment(analysis)
        });

    let recommended_approach = extract_section(reply, "recommended approach")
        .map(str::to_string)
        .unwrap_or_else(|| {
            debug!(field = "recommendedApproach", "section not found, using fallback");
            fallback::recommended_approach(analysis)
        });

    let motivation_strategies = extract_first_section(reply, &STRATEGY_LABELS)
        .map(split_fragments)
        .filter(|items| !items.is_empty())
        .unwrap_or_else(|| {
            debug!(field = "motivationStrategies", "section not found, using fallback");
            fallback::motivation_strategies()
        });

    StudyPlan {
        student_id: profile.student_id.clone(),
        name: profile.name.clone(),
        generated_date: generated_at,
        overview,
        motivation_assessment,
        recommended_approach,
        weekly_schedule: extract_weekly_schedule(reply, profile),
        long_term_goals: extract_long_term_goals(reply),
        recommended_resources: extract_recommended_resources(reply, profile),
        motivation_strategies,
    }
}

//! `studyplan analyze` and `studyplan prompt`: inspect what the pipeline
//! derives from a profile without calling a provider.

use std::path::Path;

use anyhow::{Context, Result};

use studyplan_core::analyzer::analyze;
use studyplan_core::plan::build_prompt;
use studyplan_core::profile::LearnerProfile;

/// Read a profile JSON file and check it before it enters the pipeline.
pub fn load_profile(path: &Path) -> Result<LearnerProfile> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read profile {}", path.display()))?;
    let profile: LearnerProfile = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse profile {}", path.display()))?;
    profile
        .validate()
        .with_context(|| format!("invalid profile {}", path.display()))?;
    tracing::debug!(student_id = %profile.student_id, path = %path.display(), "profile loaded");
    Ok(profile)
}

/// Print the motivation analysis as pretty JSON.
pub fn run_analyze(path: &Path) -> Result<()> {
    let profile = load_profile(path)?;
    let analysis = analyze(&profile);
    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}

/// Print the prompt that `generate` would send.
pub fn run_prompt(path: &Path) -> Result<()> {
    let profile = load_profile(path)?;
    let analysis = analyze(&profile);
    println!("{}", build_prompt(&profile, &analysis));
    Ok(())
}

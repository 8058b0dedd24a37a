//! `studyplan generate`: run the full pipeline for one profile file.

use std::path::Path;

use anyhow::{Context, Result};

use studyplan_core::completion::types::DEFAULT_MAX_TOKENS;
use studyplan_core::completion::{Completion, PerplexityClient, StaticCompletion};
use studyplan_core::plan::generate_study_plan_with_max_tokens;

use crate::config::StudyplanConfig;
use crate::profile_cmds::load_profile;

/// Generate a plan and print it as JSON, or write it to `output`.
///
/// With `response_file`, the captured reply in that file stands in for the
/// live provider and no configuration is needed.
pub async fn run_generate(
    profile_path: &Path,
    response_file: Option<&Path>,
    output: Option<&Path>,
    cli_api_key: Option<&str>,
) -> Result<()> {
    let profile = load_profile(profile_path)?;

    let (provider, max_tokens): (Box<dyn Completion>, u32) = match response_file {
        Some(path) => {
            let replay = StaticCompletion::from_file(path)
                .with_context(|| format!("failed to read response file {}", path.display()))?;
            (Box::new(replay), DEFAULT_MAX_TOKENS)
        }
        None => {
            let resolved = StudyplanConfig::resolve(cli_api_key)?;
            let client = PerplexityClient::new(resolved.perplexity)
                .context("failed to build completion client")?;
            (Box::new(client), resolved.max_tokens)
        }
    };

    let plan = generate_study_plan_with_max_tokens(&profile, provider.as_ref(), max_tokens)
        .await
        .context("failed to generate study plan")?;

    let json = serde_json::to_string_pretty(&plan).context("failed to serialize study plan")?;
    match output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Study plan written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

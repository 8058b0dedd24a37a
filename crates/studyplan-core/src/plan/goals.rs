//! Long-term goal extraction.

use crate::extract::{LabeledBlocks, capitalize_first, extract_first_section, split_fragments};

use super::fallback;
use super::types::GoalTimeframe;

const SECTION_LABELS: [&str; 2] = ["long-term goals", "goals"];

pub const TIMEFRAMES: [&str; 3] = ["short-term", "medium-term", "long-term"];

/// Read goals grouped by timeframe from `reply`.
///
/// Timeframes whose block yields no goals are left out. When no timeframe
/// yields any goal, the fixed three-timeframe list is returned.
pub fn extract_long_term_goals(reply: &str) -> Vec<GoalTimeframe> {
    let goals = extract_first_section(reply, &SECTION_LABELS)
        .map(parse_goals_section)
        .unwrap_or_default();

    if goals.is_empty() {
        tracing::debug!(field = "longTermGoals", "no timeframes extracted, using fallback");
        return fallback::long_term_goals();
    }
    goals
}

/// Parse a located goals section into its populated timeframes.
pub fn parse_goals_section(section: &str) -> Vec<GoalTimeframe> {
    LabeledBlocks::new(&TIMEFRAMES)
        .blocks(section)
        .filter_map(|(timeframe, block)| {
            let goals = split_fragments(block?);
            (!goals.is_empty()).then(|| GoalTimeframe {
                timeframe: capitalize_first(timeframe),
                goals,
            })
        })
        .collect()
}

//! Analysis result types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad motivation category assigned to a learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotivationType {
    IntrinsicallyMotivated,
    GoalOriented,
    ExtrinsicallyMotivated,
    NeedsDevelopment,
}

impl MotivationType {
    /// Human-readable label used in prompts and fallback prose.
    pub fn label(self) -> &'static str {
        match self {
            Self::IntrinsicallyMotivated => "Intrinsically Motivated",
            Self::GoalOriented => "Goal-Oriented",
            Self::ExtrinsicallyMotivated => "Extrinsically Motivated",
            Self::NeedsDevelopment => "Motivation Needs Development",
        }
    }
}

impl fmt::Display for MotivationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Output of [`super::analyze`]: the category plus ordered insight lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotivationAnalysis {
    pub motivation_type: MotivationType,
    /// Never empty.
    pub strengths: Vec<String>,
    /// Never empty.
    pub challenges: Vec<String>,
    pub recommended_approaches: Vec<String>,
}

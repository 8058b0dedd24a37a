//! Study plan output types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Day names in schedule order.
pub const WEEK_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// A structured study plan. Every field is populated, either from the
/// model's reply or from a deterministic fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    pub student_id: String,
    pub name: String,
    pub generated_date: DateTime<Utc>,
    pub overview: String,
    pub motivation_assessment: String,
    pub recommended_approach: String,
    /// Always seven entries, Monday through Sunday.
    pub weekly_schedule: Vec<DaySchedule>,
    pub long_term_goals: Vec<GoalTimeframe>,
    pub recommended_resources: Vec<SubjectResources>,
    pub motivation_strategies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub day: String,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub subject: String,
    /// Minutes.
    pub duration: u32,
    /// e.g. "Study", "Planning".
    pub activity_type: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTimeframe {
    pub timeframe: String,
    pub goals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectResources {
    pub subject: String,
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// e.g. "Book", "Online Course", "Video".
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub description: String,
}

impl StudyPlan {
    /// Copy of the plan with the timestamp replaced, for comparing two
    /// generations of the same inputs.
    pub fn with_generated_date(mut self, at: DateTime<Utc>) -> Self {
        self.generated_date = at;
        self
    }
}

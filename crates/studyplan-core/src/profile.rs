//! Learner profile: the input to analysis and plan synthesis.
//!
//! Field names follow the camelCase JSON accepted over HTTP and from
//! profile files. List and text fields that are absent deserialize as
//! empty so that the analyzer can stay total.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A learner's self-reported motivation and study context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerProfile {
    pub student_id: String,
    pub name: String,
    #[serde(default)]
    pub academic_level: String,
    /// Ordered subject names. Order drives schedule and resource layout.
    pub subjects: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    /// Self-rated motivation on a 1-10 scale.
    pub motivation_level: u8,
    #[serde(default)]
    pub motivation_description: String,
    #[serde(default)]
    pub learning_style: String,
    /// Hours per week available for study.
    #[serde(default)]
    pub time_availability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_performance: Option<Vec<GradeRecord>>,
}

/// A past grade in one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeRecord {
    pub subject: String,
    pub grade: String,
}

/// Reasons a profile is rejected before it reaches the pipeline.
#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("profile must list at least one subject")]
    NoSubjects,

    #[error("motivation level {0} is out of range (expected 1-10)")]
    MotivationOutOfRange(u8),

    #[error("time availability {0} must be a non-negative number of hours")]
    InvalidTimeAvailability(f64),
}

impl LearnerProfile {
    /// Check the preconditions the pipeline relies on.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.subjects.is_empty() {
            return Err(ProfileError::NoSubjects);
        }
        if !(1..=10).contains(&self.motivation_level) {
            return Err(ProfileError::MotivationOutOfRange(self.motivation_level));
        }
        if !self.time_availability.is_finite() || self.time_availability < 0.0 {
            return Err(ProfileError::InvalidTimeAvailability(self.time_availability));
        }
        Ok(())
    }

    /// Weekly hours clamped to a usable non-negative value.
    pub fn weekly_hours(&self) -> f64 {
        if self.time_availability.is_finite() && self.time_availability > 0.0 {
            self.time_availability
        } else {
            0.0
        }
    }
}

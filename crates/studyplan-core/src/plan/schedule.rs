//! Weekly schedule extraction.

use crate::extract::{LabeledBlocks, extract_first_section, extract_line};
use crate::profile::LearnerProfile;

use super::fallback;
use super::types::{Activity, DaySchedule, WEEK_DAYS};

const SECTION_LABELS: [&str; 2] = ["weekly schedule", "schedule"];

/// Minutes assigned to every activity read from the reply.
const EXTRACTED_DURATION: u32 = 60;

/// Read the weekly schedule from `reply`, or distribute the subjects
/// round-robin when the reply has no schedule section.
pub fn extract_weekly_schedule(reply: &str, profile: &LearnerProfile) -> Vec<DaySchedule> {
    match extract_first_section(reply, &SECTION_LABELS) {
        Some(section) => parse_schedule_section(section, profile),
        None => {
            tracing::debug!(field = "weeklySchedule", "section not found, using round-robin fallback");
            fallback::weekly_schedule(profile)
        }
    }
}

/// Parse a located schedule section into seven days.
///
/// A day whose header is missing gets no activities; a day that is present
/// but names none of the profile's subjects gets one planning activity.
pub fn parse_schedule_section(section: &str, profile: &LearnerProfile) -> Vec<DaySchedule> {
    let days = LabeledBlocks::new(&WEEK_DAYS);

    days.blocks(section)
        .map(|(day, block)| {
            let activities = match block {
                Some(block) => {
                    let found = subject_activities(block, &profile.subjects);
                    if found.is_empty() {
                        vec![fallback::planning_activity()]
                    } else {
                        found
                    }
                }
                None => Vec::new(),
            };
            DaySchedule {
                day: day.to_string(),
                activities,
            }
        })
        .collect()
}

/// One activity per subject that leads a line in the day's block, in
/// profile order.
fn subject_activities(block: &str, subjects: &[String]) -> Vec<Activity> {
    subjects
        .iter()
        .filter_map(|subject| {
            extract_line(block, subject).map(|description| Activity {
                subject: subject.clone(),
                duration: EXTRACTED_DURATION,
                activity_type: "Study".to_string(),
                description: description.to_string(),
                resources: None,
            })
        })
        .collect()
}

//! Deterministic substitutes for sections the model's reply did not yield.

use crate::analyzer::MotivationAnalysis;
use crate::profile::LearnerProfile;

use super::types::{Activity, DaySchedule, GoalTimeframe, Resource, SubjectResources, WEEK_DAYS};

pub const OVERVIEW: &str = "Study plan overview based on your motivation profile.";

pub const MOTIVATION_STRATEGIES: [&str; 7] = [
    "Set small, achievable daily goals to build momentum",
    "Use the Pomodoro technique (25 min work, 5 min break)",
    "Create a dedicated study environment free from distractions",
    "Reward yourself after completing challenging tasks",
    "Join or form a study group for accountability",
    "Track your progress visually to see improvements",
    "Connect learning material to your personal interests",
];

const LONG_TERM_GOALS: [(&str, [&str; 3]); 3] = [
    (
        "Short-term (1 month)",
        [
            "Master fundamental concepts",
            "Complete all assigned homework",
            "Improve study habits",
        ],
    ),
    (
        "Medium-term (3 months)",
        [
            "Achieve target grades in all subjects",
            "Complete personal projects",
            "Develop deeper understanding",
        ],
    ),
    (
        "Long-term (6+ months)",
        [
            "Prepare for advanced courses",
            "Build portfolio of work",
            "Achieve academic goals",
        ],
    ),
];

pub fn motivation_assessment(analysis: &MotivationAnalysis) -> String {
    format!(
        "As a {} student, you have strengths in {}. Areas to work on include {}.",
        analysis.motivation_type,
        analysis.strengths.join(", "),
        analysis.challenges.join(", ")
    )
}

pub fn recommended_approach(analysis: &MotivationAnalysis) -> String {
    analysis.recommended_approaches.join("\n")
}

pub fn motivation_strategies() -> Vec<String> {
    MOTIVATION_STRATEGIES.iter().map(|s| s.to_string()).collect()
}

/// Distribute subjects over the week round-robin: subject `i` lands on day
/// `i % 7`, and the weekly hours are split evenly across all sessions.
pub fn weekly_schedule(profile: &LearnerProfile) -> Vec<DaySchedule> {
    let subject_count = profile.subjects.len();
    let duration = if subject_count == 0 {
        0
    } else {
        (profile.weekly_hours() * 60.0 / (WEEK_DAYS.len() * subject_count) as f64).floor() as u32
    };

    WEEK_DAYS
        .iter()
        .enumerate()
        .map(|(day_index, day)| DaySchedule {
            day: day.to_string(),
            activities: profile
                .subjects
                .iter()
                .enumerate()
                .filter(|(i, _)| i % WEEK_DAYS.len() == day_index)
                .map(|(_, subject)| Activity {
                    subject: subject.clone(),
                    duration,
                    activity_type: "Study".to_string(),
                    description: format!("Focus on {subject} concepts and practice problems"),
                    resources: None,
                })
                .collect(),
        })
        .collect()
}

/// Placeholder for a day the reply mentions without any subject lines.
pub fn planning_activity() -> Activity {
    Activity {
        subject: "General".to_string(),
        duration: 60,
        activity_type: "Planning".to_string(),
        description: "Review goals and plan detailed activities".to_string(),
        resources: None,
    }
}

pub fn long_term_goals() -> Vec<GoalTimeframe> {
    LONG_TERM_GOALS
        .iter()
        .map(|(timeframe, goals)| GoalTimeframe {
            timeframe: timeframe.to_string(),
            goals: goals.iter().map(|g| g.to_string()).collect(),
        })
        .collect()
}

/// Lowercased subject with whitespace runs collapsed to single hyphens.
pub fn slugify(subject: &str) -> String {
    subject
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// The two generic resources offered for a subject.
pub fn subject_resources(subject: &str) -> SubjectResources {
    SubjectResources {
        subject: subject.to_string(),
        resources: vec![
            Resource {
                kind: "Online Course".to_string(),
                name: format!("{subject} Fundamentals"),
                url: Some(format!("https://example.com/{}", slugify(subject))),
                description: format!(
                    "Comprehensive {subject} course tailored to your learning style"
                ),
            },
            Resource {
                kind: "Book".to_string(),
                name: format!("{subject} Made Simple"),
                url: None,
                description: "Beginner-friendly resource with practical examples".to_string(),
            },
        ],
    }
}

pub fn recommended_resources(profile: &LearnerProfile) -> Vec<SubjectResources> {
    profile
        .subjects
        .iter()
        .map(|s| subject_resources(s))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::MotivationType;

    fn profile(subjects: &[&str], hours: f64) -> LearnerProfile {
        LearnerProfile {
            student_id: "s".to_string(),
            name: "S".to_string(),
            academic_level: String::new(),
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
            interests: vec![],
            goals: vec![],
            motivation_level: 5,
            motivation_description: String::new(),
            learning_style: String::new(),
            time_availability: hours,
            previous_performance: None,
        }
    }

    #[test]
    fn round_robin_assigns_by_index() {
        let schedule = weekly_schedule(&profile(&["Math", "CS"], 14.0));
        assert_eq!(schedule.len(), 7);
        assert_eq!(schedule[0].day, "Monday");
        assert_eq!(schedule[0].activities.len(), 1);
        assert_eq!(schedule[0].activities[0].subject, "Math");
        assert_eq!(schedule[0].activities[0].duration, 60);
        assert_eq!(schedule[1].day, "Tuesday");
        assert_eq!(schedule[1].activities[0].subject, "CS");
        assert_eq!(schedule[1].activities[0].duration, 60);
        assert!(schedule[2..].iter().all(|d| d.activities.is_empty()));
    }

    #[test]
    fn round_robin_wraps_after_sunday() {
        let subjects: Vec<String> = (0..9).map(|i| format!("S{i}")).collect();
        let refs: Vec<&str> = subjects.iter().map(String::as_str).collect();
        let schedule = weekly_schedule(&profile(&refs, 21.0));
        let monday: Vec<&str> = schedule[0]
            .activities
            .iter()
            .map(|a| a.subject.as_str())
            .collect();
        assert_eq!(monday, vec!["S0", "S7"]);
        assert_eq!(schedule[1].activities.len(), 2);
        assert_eq!(schedule[2].activities.len(), 1);
        // floor(21 * 60 / (7 * 9)) = floor(20.0) = 20
        assert_eq!(schedule[0].activities[0].duration, 20);
    }

    #[test]
    fn round_robin_duration_floors() {
        let schedule = weekly_schedule(&profile(&["A", "B", "C"], 10.0));
        // floor(600 / 21) = 28
        assert_eq!(schedule[0].activities[0].duration, 28);
        assert_eq!(
            schedule[0].activities[0].description,
            "Focus on A concepts and practice problems"
        );
        assert_eq!(schedule[0].activities[0].activity_type, "Study");
    }

    #[test]
    fn round_robin_without_subjects_is_seven_empty_days() {
        let schedule = weekly_schedule(&profile(&[], 10.0));
        assert_eq!(schedule.len(), 7);
        assert!(schedule.iter().all(|d| d.activities.is_empty()));
    }

    #[test]
    fn assessment_mentions_type_strengths_and_challenges() {
        let analysis = MotivationAnalysis {
            motivation_type: MotivationType::GoalOriented,
            strengths: vec!["A".to_string(), "B".to_string()],
            challenges: vec!["C".to_string()],
            recommended_approaches: vec!["x".to_string(), "y".to_string()],
        };
        assert_eq!(
            motivation_assessment(&analysis),
            "As a Goal-Oriented student, you have strengths in A, B. Areas to work on include C."
        );
        assert_eq!(recommended_approach(&analysis), "x\ny");
    }

    #[test]
    fn fixed_lists_are_populated() {
        assert_eq!(motivation_strategies().len(), 7);
        let goals = long_term_goals();
        assert_eq!(goals.len(), 3);
        assert_eq!(goals[0].timeframe, "Short-term (1 month)");
        assert!(goals.iter().all(|g| g.goals.len() == 3));
    }

    #[test]
    fn resources_are_two_per_subject() {
        let resources = recommended_resources(&profile(&["Computer  Science", "Math"], 1.0));
        assert_eq!(resources.len(), 2);
        let cs = &resources[0];
        assert_eq!(cs.subject, "Computer  Science");
        assert_eq!(cs.resources[0].kind, "Online Course");
        assert_eq!(cs.resources[0].name, "Computer  Science Fundamentals");
        assert_eq!(
            cs.resources[0].url.as_deref(),
            Some("https://example.com/computer-science")
        );
        assert_eq!(cs.resources[1].kind, "Book");
        assert_eq!(cs.resources[1].name, "Computer  Science Made Simple");
        assert!(cs.resources[1].url.is_none());
    }

    #[test]
    fn slugify_collapses_whitespace() {
        assert_eq!(slugify("Linear Algebra II"), "linear-algebra-ii");
        assert_eq!(slugify("  Math "), "math");
    }
}

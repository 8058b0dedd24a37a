//! Rule-based motivation analysis.
//!
//! Converts a [`LearnerProfile`] into a [`MotivationAnalysis`]: a motivation
//! category, strengths, challenges, and a ranked list of recommended study
//! approaches. Pure logic with no I/O and no failure modes.

pub mod types;

use std::collections::HashSet;

use crate::profile::LearnerProfile;

pub use types::{MotivationAnalysis, MotivationType};

// ---------------------------------------------------------------------------
// Fixed vocabulary
// ---------------------------------------------------------------------------

const STRENGTH_HIGH_MOTIVATION: &str = "High baseline motivation";
const STRENGTH_DIVERSE_INTERESTS: &str = "Diverse interests that can be leveraged for learning";
const STRENGTH_CLEAR_GOALS: &str = "Clear goals that provide direction";
const STRENGTH_SUFFICIENT_TIME: &str = "Sufficient time dedicated to studies";
const STRENGTH_DEFAULT: &str = "Taking initiative to seek academic improvement";

const CHALLENGE_LOW_MOTIVATION: &str = "Low baseline motivation that needs development";
const CHALLENGE_LIMITED_TIME: &str = "Limited time availability for studies";
const CHALLENGE_PROCRASTINATION: &str = "Tendency to procrastinate";
const CHALLENGE_DISTRACTION: &str = "Vulnerability to distractions";
const CHALLENGE_PERSISTENCE: &str = "Difficulty maintaining motivation when facing challenges";
const CHALLENGE_DEFAULT: &str = "Maintaining consistent motivation across all subjects";

/// Approaches recommended for each motivation category, in rank order.
fn approaches_for_type(motivation_type: MotivationType) -> &'static [&'static str] {
    match motivation_type {
        MotivationType::IntrinsicallyMotivated => &[
            "Focus on deepening understanding rather than just completing tasks",
            "Seek out advanced materials that maintain intellectual challenge",
        ],
        MotivationType::GoalOriented => &[
            "Break down long-term goals into measurable weekly objectives",
            "Use visual progress tracking to maintain motivation",
        ],
        MotivationType::ExtrinsicallyMotivated => &[
            "Establish a consistent reward system for achieving study milestones",
            "Find study groups or accountability partners",
        ],
        MotivationType::NeedsDevelopment => &[
            "Start with very small, achievable daily goals to build confidence",
            "Connect learning material directly to personal interests",
            "Use the 5-minute rule: commit to just 5 minutes of study to overcome initial resistance",
        ],
    }
}

/// Learning-style keyword groups, checked in order; the first hit wins.
const STYLE_APPROACHES: &[(&[&str], &[&str])] = &[
    (
        &["visual"],
        &[
            "Use mind maps, diagrams, and color-coding in notes",
            "Watch educational videos that visualize concepts",
        ],
    ),
    (
        &["auditory"],
        &[
            "Record and listen to summaries of study material",
            "Participate in study discussions and explain concepts aloud",
        ],
    ),
    (
        &["kinesthetic", "hands-on"],
        &[
            "Use physical flashcards that can be manipulated",
            "Take breaks for physical activity between study sessions",
            "Create physical models or demonstrations of concepts when possible",
        ],
    ),
];

/// Challenges that carry their own follow-up approaches.
const CHALLENGE_APPROACHES: &[(&str, &[&str])] = &[
    (
        CHALLENGE_PROCRASTINATION,
        &[
            "Use the Pomodoro technique (25 min work, 5 min break)",
            "Set up a distraction-free study environment",
        ],
    ),
    (
        CHALLENGE_LIMITED_TIME,
        &[
            "Focus on high-efficiency study techniques like spaced repetition",
            "Prioritize subjects based on goals and upcoming deadlines",
        ],
    ),
];

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Analyze a learner profile.
pub fn analyze(profile: &LearnerProfile) -> MotivationAnalysis {
    tracing::debug!(student_id = %profile.student_id, "analyzing motivation");

    let motivation_type = classify(profile);
    let strengths = identify_strengths(profile);
    let challenges = identify_challenges(profile);
    let recommended_approaches = recommend_approaches(profile, motivation_type, &challenges);

    MotivationAnalysis {
        motivation_type,
        strengths,
        challenges,
        recommended_approaches,
    }
}

/// Assign a motivation category. The first matching rule wins.
pub fn classify(profile: &LearnerProfile) -> MotivationType {
    match profile.motivation_level {
        8.. => MotivationType::IntrinsicallyMotivated,
        5..=7 if goals_align_with_interests(&profile.goals, &profile.interests) => {
            MotivationType::GoalOriented
        }
        5..=7 => MotivationType::ExtrinsicallyMotivated,
        _ => MotivationType::NeedsDevelopment,
    }
}

/// True if some goal contains some interest, or the other way round,
/// ignoring case. Plain substring containment: "Get a job" aligns with "jobs"
/// only because "job" happens to be contained, which is accepted as-is.
fn goals_align_with_interests(goals: &[String], interests: &[String]) -> bool {
    goals.iter().any(|goal| {
        let goal = goal.to_lowercase();
        interests.iter().any(|interest| {
            let interest = interest.to_lowercase();
            goal.contains(&interest) || interest.contains(&goal)
        })
    })
}

fn distinct_count(items: &[String]) -> usize {
    items
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

fn identify_strengths(profile: &LearnerProfile) -> Vec<String> {
    let mut strengths = Vec::new();

    if profile.motivation_level >= 7 {
        strengths.push(STRENGTH_HIGH_MOTIVATION.to_string());
    }
    if distinct_count(&profile.interests) >= 3 {
        strengths.push(STRENGTH_DIVERSE_INTERESTS.to_string());
    }
    if profile.goals.len() >= 2 {
        strengths.push(STRENGTH_CLEAR_GOALS.to_string());
    }
    if profile.weekly_hours() >= 15.0 {
        strengths.push(STRENGTH_SUFFICIENT_TIME.to_string());
    }
    if !profile.learning_style.trim().is_empty() {
        strengths.push(format!(
            "Awareness of personal learning style ({})",
            profile.learning_style
        ));
    }

    if strengths.is_empty() {
        strengths.push(STRENGTH_DEFAULT.to_string());
    }
    strengths
}

fn identify_challenges(profile: &LearnerProfile) -> Vec<String> {
    let mut challenges = Vec::new();

    if profile.motivation_level <= 5 {
        challenges.push(CHALLENGE_LOW_MOTIVATION.to_string());
    }
    if profile.weekly_hours() < 10.0 {
        challenges.push(CHALLENGE_LIMITED_TIME.to_string());
    }

    let description = profile.motivation_description.to_lowercase();
    if description.contains("procrast") {
        challenges.push(CHALLENGE_PROCRASTINATION.to_string());
    }
    if description.contains("distract") {
        challenges.push(CHALLENGE_DISTRACTION.to_string());
    }
    if description.contains("difficult") || description.contains("struggle") {
        challenges.push(CHALLENGE_PERSISTENCE.to_string());
    }

    if challenges.is_empty() {
        challenges.push(CHALLENGE_DEFAULT.to_string());
    }
    challenges
}

fn recommend_approaches(
    profile: &LearnerProfile,
    motivation_type: MotivationType,
    challenges: &[String],
) -> Vec<String> {
    let mut approaches: Vec<String> = approaches_for_type(motivation_type)
        .iter()
        .map(|s| s.to_string())
        .collect();

    let style = profile.learning_style.to_lowercase();
    if let Some((_, extra)) = STYLE_APPROACHES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| style.contains(k)))
    {
        approaches.extend(extra.iter().map(|s| s.to_string()));
    }

    for challenge in challenges {
        if let Some((_, extra)) = CHALLENGE_APPROACHES
            .iter()
            .find(|(name, _)| *name == challenge.as_str())
        {
            approaches.extend(extra.iter().map(|s| s.to_string()));
        }
    }

    approaches
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn base_profile() -> LearnerProfile {
        LearnerProfile {
            student_id: "s-1".to_string(),
            name: "Test Student".to_string(),
            academic_level: "Undergraduate".to_string(),
            subjects: vec!["Mathematics".to_string()],
            interests: vec![],
            goals: vec![],
            motivation_level: 6,
            motivation_description: String::new(),
            learning_style: String::new(),
            time_availability: 12.0,
            previous_performance: None,
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    // -- classify --

    #[test]
    fn high_level_is_intrinsic_regardless_of_other_fields() {
        for level in 8..=10 {
            let p = LearnerProfile {
                motivation_level: level,
                goals: strings(&["x"]),
                interests: strings(&["y"]),
                motivation_description: "I procrastinate and struggle".to_string(),
                time_availability: 0.0,
                ..base_profile()
            };
            assert_eq!(classify(&p), MotivationType::IntrinsicallyMotivated);
        }
    }

    #[test]
    fn mid_level_with_aligned_goal_is_goal_oriented() {
        for level in 5..=7 {
            let p = LearnerProfile {
                motivation_level: level,
                goals: strings(&["Work in Data Science"]),
                interests: strings(&["data science"]),
                ..base_profile()
            };
            assert_eq!(classify(&p), MotivationType::GoalOriented);
        }
    }

    #[test]
    fn near_miss_wording_does_not_align() {
        // "scientist" does not contain "science".
        let p = LearnerProfile {
            goals: strings(&["Become a Data Scientist"]),
            interests: strings(&["data science"]),
            ..base_profile()
        };
        assert_eq!(classify(&p), MotivationType::ExtrinsicallyMotivated);
    }

    #[test]
    fn alignment_works_in_both_directions() {
        let p = LearnerProfile {
            goals: strings(&["Programming"]),
            interests: strings(&["competitive programming contests"]),
            ..base_profile()
        };
        assert_eq!(classify(&p), MotivationType::GoalOriented);
    }

    #[test]
    fn alignment_is_plain_substring_containment() {
        let p = LearnerProfile {
            goals: strings(&["Get a job"]),
            interests: strings(&["job"]),
            ..base_profile()
        };
        assert_eq!(classify(&p), MotivationType::GoalOriented);
    }

    #[test]
    fn mid_level_without_alignment_is_extrinsic() {
        let p = LearnerProfile {
            motivation_level: 7,
            goals: strings(&["Improve grades", "Learn new skills"]),
            interests: strings(&["Programming", "Data Science"]),
            ..base_profile()
        };
        assert_eq!(classify(&p), MotivationType::ExtrinsicallyMotivated);
    }

    #[test]
    fn low_level_needs_development() {
        for level in 1..=4 {
            let p = LearnerProfile {
                motivation_level: level,
                ..base_profile()
            };
            assert_eq!(classify(&p), MotivationType::NeedsDevelopment);
        }
    }

    // -- strengths --

    #[test]
    fn strengths_fall_back_when_nothing_fires() {
        let a = analyze(&base_profile());
        assert_eq!(a.strengths, strings(&[STRENGTH_DEFAULT]));
    }

    #[test]
    fn strengths_accumulate_in_order() {
        let p = LearnerProfile {
            motivation_level: 9,
            interests: strings(&["a", "b", "c"]),
            goals: strings(&["g1", "g2"]),
            time_availability: 15.0,
            learning_style: "Visual".to_string(),
            ..base_profile()
        };
        let a = analyze(&p);
        assert_eq!(
            a.strengths,
            strings(&[
                STRENGTH_HIGH_MOTIVATION,
                STRENGTH_DIVERSE_INTERESTS,
                STRENGTH_CLEAR_GOALS,
                STRENGTH_SUFFICIENT_TIME,
                "Awareness of personal learning style (Visual)",
            ])
        );
    }

    #[test]
    fn duplicate_interests_do_not_count_as_diverse() {
        let p = LearnerProfile {
            interests: strings(&["Chess", "chess", "CHESS"]),
            ..base_profile()
        };
        assert!(!analyze(&p)
            .strengths
            .contains(&STRENGTH_DIVERSE_INTERESTS.to_string()));
    }

    // -- challenges --

    #[test]
    fn challenges_fall_back_when_nothing_fires() {
        let p = LearnerProfile {
            motivation_level: 8,
            time_availability: 20.0,
            ..base_profile()
        };
        assert_eq!(analyze(&p).challenges, strings(&[CHALLENGE_DEFAULT]));
    }

    #[test]
    fn challenges_detect_description_keywords() {
        let p = LearnerProfile {
            motivation_level: 4,
            time_availability: 5.0,
            motivation_description: "I PROCRASTINATE, get distracted and struggle".to_string(),
            ..base_profile()
        };
        assert_eq!(
            analyze(&p).challenges,
            strings(&[
                CHALLENGE_LOW_MOTIVATION,
                CHALLENGE_LIMITED_TIME,
                CHALLENGE_PROCRASTINATION,
                CHALLENGE_DISTRACTION,
                CHALLENGE_PERSISTENCE,
            ])
        );
    }

    #[test]
    fn difficult_keyword_triggers_persistence_challenge() {
        let p = LearnerProfile {
            motivation_level: 9,
            time_availability: 20.0,
            motivation_description: "Finds proofs difficult".to_string(),
            ..base_profile()
        };
        assert_eq!(analyze(&p).challenges, strings(&[CHALLENGE_PERSISTENCE]));
    }

    // -- approaches --

    #[test]
    fn approaches_order_type_then_style_then_challenges() {
        let p = LearnerProfile {
            motivation_level: 3,
            time_availability: 4.0,
            learning_style: "Hands-On learner".to_string(),
            motivation_description: "tends to procrastinate".to_string(),
            ..base_profile()
        };
        let a = analyze(&p);
        assert_eq!(a.motivation_type, MotivationType::NeedsDevelopment);
        assert_eq!(
            a.recommended_approaches,
            strings(&[
                "Start with very small, achievable daily goals to build confidence",
                "Connect learning material directly to personal interests",
                "Use the 5-minute rule: commit to just 5 minutes of study to overcome initial resistance",
                "Use physical flashcards that can be manipulated",
                "Take breaks for physical activity between study sessions",
                "Create physical models or demonstrations of concepts when possible",
                // Challenge order: limited time precedes procrastination.
                "Focus on high-efficiency study techniques like spaced repetition",
                "Prioritize subjects based on goals and upcoming deadlines",
                "Use the Pomodoro technique (25 min work, 5 min break)",
                "Set up a distraction-free study environment",
            ])
        );
    }

    #[test]
    fn only_first_matching_style_group_applies() {
        let p = LearnerProfile {
            motivation_level: 9,
            time_availability: 20.0,
            learning_style: "visual and auditory".to_string(),
            ..base_profile()
        };
        let a = analyze(&p);
        assert_eq!(a.recommended_approaches.len(), 4);
        assert!(a
            .recommended_approaches
            .contains(&"Watch educational videos that visualize concepts".to_string()));
        assert!(!a
            .recommended_approaches
            .contains(&"Record and listen to summaries of study material".to_string()));
    }

    #[test]
    fn unknown_style_adds_nothing() {
        let p = LearnerProfile {
            motivation_level: 9,
            time_availability: 20.0,
            learning_style: "reading/writing".to_string(),
            ..base_profile()
        };
        assert_eq!(analyze(&p).recommended_approaches.len(), 2);
    }

    #[test]
    fn analysis_is_deterministic() {
        let p = LearnerProfile {
            interests: strings(&["Programming", "Data Science"]),
            goals: strings(&["Improve grades", "Learn new skills"]),
            learning_style: "Visual".to_string(),
            ..base_profile()
        };
        assert_eq!(analyze(&p), analyze(&p));
    }
}

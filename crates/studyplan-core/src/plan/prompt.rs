//! Prompt construction for study plan generation.
//!
//! The prompt embeds the learner profile and the motivation analysis
//! verbatim, then asks for labeled sections laid out so that the
//! extractors in [`crate::extract`] can find them.

use crate::analyzer::MotivationAnalysis;
use crate::profile::LearnerProfile;

/// System instruction sent alongside every prompt.
pub const SYSTEM_INSTRUCTION: &str = "You are an AI academic advisor specialized in creating \
personalized study plans based on student motivation and learning preferences.";

/// Output layout the model is asked to follow.
const FORMAT_GUIDE: &str = r#"## Response Format

Write each section under its own header, exactly as named below, followed by a colon.
Separate sections with a single blank line and do not leave blank lines inside a section.

Overview: <two or three sentences summarizing the plan>

Motivation Assessment: <how the student's motivation affects their learning>

Recommended Approach: <approach tailored to motivation level and learning style>

Weekly Schedule:
Monday: <Subject>: <activity for that subject>
Tuesday: <Subject>: <activity for that subject>
(one line per day, Monday through Sunday; put each subject on its own line after the day)

Long-term Goals:
Short-term: <goal>; list further goals on new lines starting with "•"
Medium-term: <goal>
Long-term: <goal>

Recommended Resources:
<Subject>:
• Book: <title> <optional URL>
• Video: <title> <optional URL>
(one block per subject; resource types are Book, Video, Course, Online, Website or App)

Motivation Strategies:
• <strategy>
• <strategy>
"#;

/// Build the user prompt for a learner.
pub fn build_prompt(profile: &LearnerProfile, analysis: &MotivationAnalysis) -> String {
    let mut prompt = String::with_capacity(4096);

    prompt.push_str(
        "I need a detailed, personalized study plan for a student with the following profile:\n\n",
    );

    // Profile.
    prompt.push_str(&format!("Name: {}\n", profile.name));
    prompt.push_str(&format!("Academic Level: {}\n", profile.academic_level));
    prompt.push_str(&format!("Subjects: {}\n", profile.subjects.join(", ")));
    prompt.push_str(&format!("Interests: {}\n", profile.interests.join(", ")));
    prompt.push_str(&format!("Goals: {}\n", profile.goals.join(", ")));
    prompt.push_str(&format!(
        "Motivation Level (1-10): {}\n",
        profile.motivation_level
    ));
    prompt.push_str(&format!(
        "Motivation Description: {}\n",
        profile.motivation_description
    ));
    prompt.push_str(&format!("Learning Style: {}\n", profile.learning_style));
    prompt.push_str(&format!(
        "Time Availability: {} hours per week\n",
        profile.time_availability
    ));
    if let Some(performance) = profile
        .previous_performance
        .as_ref()
        .filter(|p| !p.is_empty())
    {
        let grades: Vec<String> = performance
            .iter()
            .map(|g| format!("{}: {}", g.subject, g.grade))
            .collect();
        prompt.push_str(&format!("Previous Performance: {}\n", grades.join(", ")));
    }

    // Analysis.
    prompt.push_str("\nMotivation Analysis:\n");
    prompt.push_str(&format!(
        "- Motivation Type: {}\n",
        analysis.motivation_type
    ));
    prompt.push_str(&format!("- Strengths: {}\n", analysis.strengths.join(", ")));
    prompt.push_str(&format!(
        "- Challenges: {}\n",
        analysis.challenges.join(", ")
    ));
    prompt.push_str(&format!(
        "- Recommended Approaches: {}\n",
        analysis.recommended_approaches.join(", ")
    ));

    // Request.
    prompt.push_str(
        "\nPlease create a comprehensive study plan that includes:\n\
         1. An overall assessment of the student's motivation and how it impacts their learning\n\
         2. A recommended approach tailored to their motivation level and learning style\n\
         3. A detailed weekly schedule with specific activities for each subject\n\
         4. Long-term goals broken down by timeframe\n\
         5. Recommended resources for each subject\n\
         6. Specific strategies to maintain or improve motivation\n\n\
         The response should be detailed, practical, and actionable. \
         Format your response so that it can be easily parsed into sections.\n\n",
    );
    prompt.push_str(FORMAT_GUIDE);

    prompt
}

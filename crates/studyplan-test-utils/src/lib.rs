//! Shared test utilities for studyplan integration tests.
//!
//! Provides sample learner profiles, captured model replies, and two
//! completion stubs:
//! - [`RecordingCompletion`] returns a fixed reply and keeps every request
//!   it received, so tests can inspect the prompt.
//! - [`FailingCompletion`] fails every call with a chosen error.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use studyplan_core::completion::{Completion, CompletionError, CompletionRequest};
use studyplan_core::profile::{GradeRecord, LearnerProfile};

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Two subjects and 14 hours a week: the round-robin fallback puts
/// Mathematics on Monday and Computer Science on Tuesday, 60 minutes each.
pub fn sample_profile() -> LearnerProfile {
    LearnerProfile {
        student_id: "stu-001".to_string(),
        name: "Ada Lovelace".to_string(),
        academic_level: "Undergraduate".to_string(),
        subjects: strings(&["Mathematics", "Computer Science"]),
        interests: strings(&["programming", "puzzles", "music"]),
        goals: strings(&["become a programming expert", "graduate with honors"]),
        motivation_level: 6,
        motivation_description: "I enjoy learning but tend to procrastinate before exams".to_string(),
        learning_style: "Visual learner, likes diagrams".to_string(),
        time_availability: 14.0,
        previous_performance: Some(vec![
            GradeRecord {
                subject: "Mathematics".to_string(),
                grade: "B+".to_string(),
            },
            GradeRecord {
                subject: "Computer Science".to_string(),
                grade: "A".to_string(),
            },
        ]),
    }
}

/// Motivation 9, plenty of time, no stated challenges.
pub fn motivated_profile() -> LearnerProfile {
    LearnerProfile {
        student_id: "stu-002".to_string(),
        name: "Grace Hopper".to_string(),
        academic_level: "Graduate".to_string(),
        subjects: strings(&["Physics"]),
        interests: strings(&["astronomy"]),
        goals: strings(&["publish a paper"]),
        motivation_level: 9,
        motivation_description: String::new(),
        learning_style: "hands-on experiments".to_string(),
        time_availability: 20.0,
        previous_performance: None,
    }
}

/// Motivation 2, little time, every challenge keyword present.
pub fn struggling_profile() -> LearnerProfile {
    LearnerProfile {
        student_id: "stu-003".to_string(),
        name: "Alan Turing".to_string(),
        academic_level: "High School".to_string(),
        subjects: strings(&["Chemistry", "History", "English"]),
        interests: Vec::new(),
        goals: Vec::new(),
        motivation_level: 2,
        motivation_description: "I procrastinate, get distracted and find it difficult".to_string(),
        learning_style: String::new(),
        time_availability: 3.0,
        previous_performance: None,
    }
}

// ---------------------------------------------------------------------------
// Replies
// ---------------------------------------------------------------------------

/// A reply laid out the way the prompt asks, for [`sample_profile`].
pub const WELL_FORMED_REPLY: &str = "\
Overview: A balanced plan that builds on your programming interest.

Motivation Assessment: You are curious but lose momentum close to deadlines.

Recommended Approach: Use diagrams and short focused sessions.

Weekly Schedule:
Monday: Mathematics: review chapter 1
Computer Science: write a sorting function
Tuesday: Computer Science: read about hash maps
Wednesday: Mathematics: practice integrals
Thursday: Computer Science: build a small project
Friday: Mathematics: timed problem set
Saturday: Rest and light reading
Sunday: Mathematics: weekly recap

Long-term Goals:
Short-term: Finish the calculus unit
Medium-term: Ship a personal project
Long-term: Graduate with honors

Recommended Resources:
Mathematics:
• Book: Calculus Vol 1 https://example.com/calc
• Video: Essence of Linear Algebra
Computer Science:
• Course: CS50 https://cs50.harvard.edu

Motivation Strategies:
• Start each session with a five minute review
• Reward yourself after each finished chapter";

/// A reply with none of the expected section headers.
pub const HEADERLESS_REPLY: &str =
    "Sorry, I can only give general advice: study a little every day and ask for help.";

// ---------------------------------------------------------------------------
// Completion stubs
// ---------------------------------------------------------------------------

/// Returns a fixed reply and records every request.
pub struct RecordingCompletion {
    reply: String,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl RecordingCompletion {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }
}

#[async_trait]
impl Completion for RecordingCompletion {
    fn name(&self) -> &str {
        "recording"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push(request.clone());
        Ok(self.reply.clone())
    }
}

/// Which error a [`FailingCompletion`] reports.
#[derive(Debug, Clone, Copy)]
pub enum Failure {
    MissingKey,
    Unauthorized,
    RateLimited,
    Timeout,
}

/// Fails every call.
pub struct FailingCompletion {
    failure: Failure,
}

impl FailingCompletion {
    pub fn new(failure: Failure) -> Self {
        Self { failure }
    }
}

#[async_trait]
impl Completion for FailingCompletion {
    fn name(&self) -> &str {
        "failing"
    }

    async fn complete(&self, _request: &CompletionRequest) -> Result<String, CompletionError> {
        Err(match self.failure {
            Failure::MissingKey => CompletionError::Configuration {
                provider: "failing".to_string(),
                reason: "API key is not set".to_string(),
            },
            Failure::Unauthorized => CompletionError::Status {
                status: 401,
                body: "invalid api key".to_string(),
            },
            Failure::RateLimited => CompletionError::Status {
                status: 429,
                body: "rate limit exceeded".to_string(),
            },
            Failure::Timeout => CompletionError::Timeout(Duration::from_secs(60)),
        })
    }
}

//! Core data model types for quizpace.
//!
//! These are the fundamental types the scoring pipeline consumes and the
//! surrounding platform serializes: a single answered question, the rating
//! labels shown to students, and the record kept for each finished attempt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::ParseRatingError;

/// One answered question from a finished quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnsweredQuestion {
    /// Whether the student answered correctly.
    pub is_correct: bool,
    /// Seconds spent on the question. The web client omits the key (or sends
    /// null) when no timing was captured; both deserialize to `None`.
    #[serde(default)]
    pub time_spent: Option<f64>,
}

/// Categorical label for a performance score.
///
/// The labels are a wire contract: the front end displays them verbatim and
/// stored reports carry them as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    Good,
    #[serde(rename = "Very Good")]
    VeryGood,
    Excellent,
}

impl Rating {
    /// The display label for this rating.
    pub fn as_str(self) -> &'static str {
        match self {
            Rating::NeedsImprovement => "Needs Improvement",
            Rating::Good => "Good",
            Rating::VeryGood => "Very Good",
            Rating::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = ParseRatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "needs improvement" => Ok(Rating::NeedsImprovement),
            "good" => Ok(Rating::Good),
            "very good" => Ok(Rating::VeryGood),
            "excellent" => Ok(Rating::Excellent),
            _ => Err(ParseRatingError(s.to_string())),
        }
    }
}

/// A finished quiz attempt as the platform records it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    /// Unique identifier for this attempt.
    pub id: Uuid,
    /// The student who took the quiz.
    pub student_id: String,
    /// Difficulty level the quiz was served at.
    pub quiz_level: f64,
    /// Every answered question, in quiz order.
    pub answers: Vec<AnsweredQuestion>,
    /// When the attempt was submitted.
    pub recorded_at: DateTime<Utc>,
}

impl AttemptRecord {
    /// Create a record for a just-submitted attempt, stamping a fresh id and
    /// the current time.
    pub fn new(
        student_id: impl Into<String>,
        quiz_level: f64,
        answers: Vec<AnsweredQuestion>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            student_id: student_id.into(),
            quiz_level,
            answers,
            recorded_at: Utc::now(),
        }
    }
}

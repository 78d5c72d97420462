//! Per-attempt performance reports.
//!
//! An [`AttemptReport`] bundles everything the platform sends back when a
//! student finishes a quiz: the performance score, its rating label, the
//! recommended next level, the time aggregates, and the raw counts the front
//! end displays alongside them.

use serde::{Deserialize, Serialize};

use crate::model::{AnsweredQuestion, Rating};
use crate::scoring::{
    calculate_average_time, calculate_performance_score, calculate_total_time,
    determine_next_level, get_performance_rating,
};

/// Scoring outcome for one finished quiz attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptReport {
    /// Level the quiz was served at.
    pub quiz_level: f64,
    /// Number of answers in the attempt.
    pub total_questions: usize,
    /// How many answers were correct.
    pub correct_count: usize,
    /// How many answers carried timing data.
    pub timed_count: usize,
    /// Aggregate performance score.
    pub performance_score: f64,
    /// Rating label for the score.
    pub rating: Rating,
    /// Recommended level for the student's next quiz.
    pub next_level: f64,
    /// Mean seconds across timed answers.
    pub average_time_secs: f64,
    /// Total recorded seconds for the attempt.
    pub total_time_secs: f64,
}

impl AttemptReport {
    /// Score a finished attempt and assemble the full report.
    pub fn compute(answers: &[AnsweredQuestion], quiz_level: f64) -> Self {
        let performance_score = calculate_performance_score(answers, quiz_level);
        let rating = get_performance_rating(performance_score);
        let next_level = determine_next_level(performance_score, quiz_level);
        tracing::debug!(
            "scored attempt at level {quiz_level}: {performance_score:.3} ({rating}), next {next_level}"
        );
        Self {
            quiz_level,
            total_questions: answers.len(),
            correct_count: answers.iter().filter(|a| a.is_correct).count(),
            timed_count: answers.iter().filter(|a| a.time_spent.is_some()).count(),
            performance_score,
            rating,
            next_level,
            average_time_secs: calculate_average_time(answers),
            total_time_secs: calculate_total_time(answers),
        }
    }

    /// One-line human summary, suitable for logs.
    pub fn summary(&self) -> String {
        format!(
            "{}/{} correct at level {}, score {:.2} ({}), next level {}",
            self.correct_count,
            self.total_questions,
            self.quiz_level,
            self.performance_score,
            self.rating,
            self.next_level
        )
    }
}

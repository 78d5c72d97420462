//! Cross-attempt statistics and level progression.
//!
//! The scorer itself looks at one attempt at a time; this module folds it
//! across a student's history to answer the questions teachers ask: where did
//! the adaptive level wander, how accurate is the student overall, and how do
//! their attempts split across the rating bands.

use serde::{Deserialize, Serialize};

use crate::model::{AnsweredQuestion, AttemptRecord, Rating};
use crate::scoring::{
    calculate_performance_score, calculate_total_time, determine_next_level,
    get_performance_rating,
};

/// One step of a student's adaptive level trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelStep {
    /// 1-based position of the attempt within the sequence.
    pub attempt: u32,
    /// Level the quiz was served at.
    pub level_before: f64,
    /// Performance score earned at `level_before`.
    pub score: f64,
    /// Rating label for `score`.
    pub rating: Rating,
    /// Level recommended for the following attempt.
    pub level_after: f64,
}

/// Replay a sequence of attempts through the scorer, feeding each recommended
/// level into the next attempt.
///
/// Returns one [`LevelStep`] per attempt, in order. The walk starts at
/// `start_level` and every `level_after` stays within the 1-10 range, so the
/// trajectory as a whole does too.
pub fn level_progression(start_level: f64, attempts: &[Vec<AnsweredQuestion>]) -> Vec<LevelStep> {
    let mut level = start_level;
    let mut steps = Vec::with_capacity(attempts.len());
    for (i, answers) in attempts.iter().enumerate() {
        let score = calculate_performance_score(answers, level);
        let rating = get_performance_rating(score);
        let next = determine_next_level(score, level);
        steps.push(LevelStep {
            attempt: (i + 1) as u32,
            level_before: level,
            score,
            rating,
            level_after: next,
        });
        level = next;
    }
    tracing::debug!(
        "walked {} attempts from level {start_level} to {level}",
        attempts.len()
    );
    steps
}

/// Attempt counts per rating band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingBreakdown {
    pub needs_improvement: usize,
    pub good: usize,
    pub very_good: usize,
    pub excellent: usize,
}

impl RatingBreakdown {
    fn record(&mut self, rating: Rating) {
        match rating {
            Rating::NeedsImprovement => self.needs_improvement += 1,
            Rating::Good => self.good += 1,
            Rating::VeryGood => self.very_good += 1,
            Rating::Excellent => self.excellent += 1,
        }
    }

    /// Total attempts counted across all bands.
    pub fn total(&self) -> usize {
        self.needs_improvement + self.good + self.very_good + self.excellent
    }
}

/// Aggregate statistics across a student's recorded attempts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStats {
    /// Number of recorded attempts.
    pub attempt_count: usize,
    /// Questions answered across all attempts.
    pub question_count: usize,
    /// Questions answered correctly across all attempts.
    pub correct_count: usize,
    /// Fraction of questions answered correctly, 0 when there are none.
    pub accuracy: f64,
    /// Mean performance score, each attempt scored at its recorded level.
    pub mean_score: f64,
    /// Highest attempt score, if any attempts exist.
    pub best_score: Option<f64>,
    /// Lowest attempt score, if any attempts exist.
    pub worst_score: Option<f64>,
    /// How the attempts split across the rating bands.
    pub ratings: RatingBreakdown,
    /// Total recorded seconds across all attempts.
    pub total_time_secs: f64,
    /// Mean seconds per timed question across all attempts.
    pub average_time_secs: f64,
}

/// Aggregate a student's attempt history.
pub fn compute_student_stats(records: &[AttemptRecord]) -> StudentStats {
    let mut question_count = 0usize;
    let mut correct_count = 0usize;
    let mut timed_count = 0usize;
    let mut total_time_secs = 0.0f64;
    let mut ratings = RatingBreakdown::default();
    let mut scores = Vec::with_capacity(records.len());

    for record in records {
        question_count += record.answers.len();
        correct_count += record.answers.iter().filter(|a| a.is_correct).count();
        timed_count += record.answers.iter().filter(|a| a.time_spent.is_some()).count();
        total_time_secs += calculate_total_time(&record.answers);

        let score = calculate_performance_score(&record.answers, record.quiz_level);
        ratings.record(get_performance_rating(score));
        scores.push(score);
    }

    let accuracy = if question_count == 0 {
        0.0
    } else {
        correct_count as f64 / question_count as f64
    };
    let mean_score = if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    };
    let average_time_secs = if timed_count == 0 {
        0.0
    } else {
        total_time_secs / timed_count as f64
    };

    tracing::debug!(
        "aggregated {} attempts: accuracy {accuracy:.3}, mean score {mean_score:.3}",
        records.len()
    );

    StudentStats {
        attempt_count: records.len(),
        question_count,
        correct_count,
        accuracy,
        mean_score,
        best_score: scores.iter().copied().reduce(f64::max),
        worst_score: scores.iter().copied().reduce(f64::min),
        ratings,
        total_time_secs,
        average_time_secs,
    }
}

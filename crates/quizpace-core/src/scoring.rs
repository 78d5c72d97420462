//! Adaptive quiz performance scoring.
//!
//! Implements the platform's scoring contract: each answered question earns a
//! base point plus a speed bonus, the per-question average is scaled by a
//! difficulty multiplier derived from the quiz level, and the resulting score
//! drives the rating label and the level recommended for the next quiz.
//!
//! All functions are deterministic pure computations over `f64`. Degenerate
//! input (no answers, out-of-range levels) yields a safe default rather than
//! an error, and only the final level recommendation is range-checked.

use crate::model::{AnsweredQuestion, Rating};

/// Maximum speed bonus a correct answer can earn on top of its base point.
pub const SPEED_FACTOR: f64 = 1.0;
/// Seconds at (or beyond) which the speed bonus bottoms out at zero.
pub const MAX_TIME_PER_QUESTION: f64 = 90.0;
/// Lowest level the scorer will ever recommend.
pub const MIN_QUIZ_LEVEL: f64 = 1.0;
/// Highest level the scorer will ever recommend.
pub const MAX_QUIZ_LEVEL: f64 = 10.0;

/// Score a single answered question.
///
/// Incorrect answers score 0. Correct answers score 1 plus a speed bonus that
/// decays linearly from `SPEED_FACTOR` at 0s to zero at
/// `MAX_TIME_PER_QUESTION`; a correct answer with no timing data scores
/// exactly 1. Negative times are taken at face value and push the bonus past
/// `SPEED_FACTOR`.
fn question_score(answer: &AnsweredQuestion) -> f64 {
    if !answer.is_correct {
        return 0.0;
    }
    match answer.time_spent {
        Some(secs) => {
            let time_ratio = (secs / MAX_TIME_PER_QUESTION).min(1.0);
            1.0 + SPEED_FACTOR * (1.0 - time_ratio)
        }
        None => 1.0,
    }
}

/// Collapse a quiz level into the difficulty tier used to scale the score.
///
/// Tier = ceil(level / 2), capped at 5: levels 1-2 share a tier, as do 3-4,
/// 5-6, 7-8, and 9-10. Levels outside 1-10 are not adjusted here, so a level
/// of 0 produces tier 0 and a multiplier below 1.
fn difficulty_tier(quiz_level: f64) -> f64 {
    (quiz_level / 2.0).ceil().min(5.0)
}

/// Compute the performance score for one finished attempt.
///
/// score = mean(question scores) * (1 + 0.2 * (tier - 1))
///
/// The mean runs over every answer, so incorrect answers drag it down as
/// zeros. An empty attempt scores 0 regardless of level.
pub fn calculate_performance_score(answers: &[AnsweredQuestion], quiz_level: f64) -> f64 {
    if answers.is_empty() {
        return 0.0;
    }
    let total: f64 = answers.iter().map(question_score).sum();
    let average = total / answers.len() as f64;
    let multiplier = 1.0 + 0.2 * (difficulty_tier(quiz_level) - 1.0);
    average * multiplier
}

/// Recommend the level for the student's next quiz.
///
/// Scores at or below 1.0 drop a level, scores up to 1.7 hold steady, scores
/// up to 2.4 climb one level, and anything higher skips an extra level for
/// each 0.2 it clears 2.4 by. The result is always clamped to
/// [`MIN_QUIZ_LEVEL`, `MAX_QUIZ_LEVEL`]; the incoming level is passed through
/// arithmetic untouched, so fractional levels stay fractional.
pub fn determine_next_level(performance_score: f64, current_level: f64) -> f64 {
    let next = if performance_score <= 1.0 {
        current_level - 1.0
    } else if performance_score <= 1.7 {
        current_level
    } else if performance_score <= 2.4 {
        current_level + 1.0
    } else {
        current_level + 1.0 + ((performance_score - 2.4) / 0.2).floor()
    };
    next.clamp(MIN_QUIZ_LEVEL, MAX_QUIZ_LEVEL)
}

/// Mean seconds across the answers that carry timing data.
///
/// Untimed answers are ignored entirely; an attempt with no timed answers
/// averages to 0.
pub fn calculate_average_time(answers: &[AnsweredQuestion]) -> f64 {
    let timed: Vec<f64> = answers.iter().filter_map(|a| a.time_spent).collect();
    if timed.is_empty() {
        return 0.0;
    }
    timed.iter().sum::<f64>() / timed.len() as f64
}

/// Total recorded seconds across the attempt, counting untimed answers as 0.
pub fn calculate_total_time(answers: &[AnsweredQuestion]) -> f64 {
    answers.iter().filter_map(|a| a.time_spent).sum()
}

/// Map a performance score onto its rating label.
///
/// Uses the same band edges as [`determine_next_level`]: both treat 1.0, 1.7,
/// and 2.4 as inclusive upper bounds.
pub fn get_performance_rating(performance_score: f64) -> Rating {
    if performance_score <= 1.0 {
        Rating::NeedsImprovement
    } else if performance_score <= 1.7 {
        Rating::Good
    } else if performance_score <= 2.4 {
        Rating::VeryGood
    } else {
        Rating::Excellent
    }
}

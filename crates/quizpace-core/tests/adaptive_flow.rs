//! End-to-end adaptive flow tests.
//!
//! These walk full quiz attempts through scoring, rating, and level
//! recommendation the way the platform does after each submission, and check
//! that multi-attempt histories aggregate consistently.

use quizpace_core::model::{AnsweredQuestion, AttemptRecord, Rating};
use quizpace_core::report::AttemptReport;
use quizpace_core::statistics::{compute_student_stats, level_progression};

fn correct(secs: f64) -> AnsweredQuestion {
    AnsweredQuestion {
        is_correct: true,
        time_spent: Some(secs),
    }
}

fn correct_untimed() -> AnsweredQuestion {
    AnsweredQuestion {
        is_correct: true,
        time_spent: None,
    }
}

fn incorrect() -> AnsweredQuestion {
    AnsweredQuestion {
        is_correct: false,
        time_spent: Some(30.0),
    }
}

// --- Single attempts ---

#[test]
fn brisk_level_one_quiz_moves_up_one_level() {
    // Twenty correct answers at 25s each: per-question score 1.722, no
    // difficulty scaling at level 1.
    let answers = vec![correct(25.0); 20];
    let report = AttemptReport::compute(&answers, 1.0);

    assert!(
        (report.performance_score - 1.7222222222222223).abs() < 1e-9,
        "expected ~1.722, got {}",
        report.performance_score
    );
    assert_eq!(report.rating, Rating::VeryGood);
    assert_eq!(report.next_level, 2.0);
    assert_eq!(report.correct_count, 20);
    assert!((report.average_time_secs - 25.0).abs() < 1e-9);
    assert!((report.total_time_secs - 500.0).abs() < 1e-9);
}

#[test]
fn mixed_attempt_lands_in_the_good_band() {
    // Six timed correct answers, two untimed correct, two wrong, at level 6.
    let mut answers: Vec<AnsweredQuestion> =
        [10.0, 20.0, 30.0, 40.0, 50.0, 60.0].map(correct).to_vec();
    answers.push(correct_untimed());
    answers.push(correct_untimed());
    answers.push(incorrect());
    answers.push(incorrect());

    let report = AttemptReport::compute(&answers, 6.0);

    assert!(
        (report.performance_score - 1.6333333333333333).abs() < 1e-9,
        "expected ~1.633, got {}",
        report.performance_score
    );
    assert_eq!(report.rating, Rating::Good);
    assert_eq!(report.next_level, 6.0, "Good band holds the level");
    assert_eq!(report.total_questions, 10);
    assert_eq!(report.correct_count, 8);
    assert_eq!(report.timed_count, 8);
}

#[test]
fn blank_submission_drops_a_level() {
    let report = AttemptReport::compute(&[], 7.0);
    assert_eq!(report.performance_score, 0.0);
    assert_eq!(report.rating, Rating::NeedsImprovement);
    assert_eq!(report.next_level, 6.0);
}

// --- Multi-attempt trajectories ---

#[test]
fn strong_run_accelerates_to_the_ceiling() {
    // Five fast perfect answers per attempt, starting from the bottom.
    let attempts = vec![vec![correct(5.0); 5]; 8];
    let steps = level_progression(1.0, &attempts);

    assert_eq!(steps.len(), 8);
    for pair in steps.windows(2) {
        assert!(
            pair[1].level_before >= pair[0].level_before,
            "a perfect run should never move down"
        );
        assert_eq!(pair[1].level_before, pair[0].level_after);
    }
    assert_eq!(steps.last().unwrap().level_after, 10.0);
    // The ceiling holds once reached.
    let at_ceiling: Vec<_> = steps.iter().filter(|s| s.level_before == 10.0).collect();
    assert!(!at_ceiling.is_empty(), "the run should reach level 10");
    assert!(at_ceiling.iter().all(|s| s.level_after == 10.0));
}

#[test]
fn struggling_run_collapses_to_the_floor() {
    let attempts = vec![vec![incorrect(); 5]; 10];
    let steps = level_progression(10.0, &attempts);

    let levels: Vec<f64> = steps.iter().map(|s| s.level_after).collect();
    assert_eq!(
        levels,
        vec![9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 1.0]
    );
    assert!(steps.iter().all(|s| s.rating == Rating::NeedsImprovement));
}

// --- History aggregation ---

#[test]
fn per_attempt_reports_agree_with_student_stats() {
    let records = vec![
        AttemptRecord::new("amelie", 1.0, vec![correct(25.0); 4]),
        AttemptRecord::new("amelie", 2.0, vec![correct(40.0), incorrect(), correct_untimed()]),
        AttemptRecord::new("amelie", 2.0, vec![incorrect(); 3]),
    ];

    let reports: Vec<AttemptReport> = records
        .iter()
        .map(|r| AttemptReport::compute(&r.answers, r.quiz_level))
        .collect();
    let stats = compute_student_stats(&records);

    assert_eq!(stats.attempt_count, reports.len());
    assert_eq!(
        stats.question_count,
        reports.iter().map(|r| r.total_questions).sum::<usize>()
    );
    assert_eq!(
        stats.correct_count,
        reports.iter().map(|r| r.correct_count).sum::<usize>()
    );

    let scores: Vec<f64> = reports.iter().map(|r| r.performance_score).collect();
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    assert!((stats.mean_score - mean).abs() < 1e-12);
    assert_eq!(stats.best_score, scores.iter().copied().reduce(f64::max));
    assert_eq!(stats.worst_score, scores.iter().copied().reduce(f64::min));

    let total: f64 = reports.iter().map(|r| r.total_time_secs).sum();
    assert!((stats.total_time_secs - total).abs() < 1e-12);

    let rated = |want: Rating| reports.iter().filter(|r| r.rating == want).count();
    assert_eq!(stats.ratings.needs_improvement, rated(Rating::NeedsImprovement));
    assert_eq!(stats.ratings.good, rated(Rating::Good));
    assert_eq!(stats.ratings.very_good, rated(Rating::VeryGood));
    assert_eq!(stats.ratings.excellent, rated(Rating::Excellent));
    assert_eq!(stats.ratings.total(), reports.len());
}

//! Quiz session scoring
//!
//! A session moves between two states per question: idle and awaiting an
//! answer. [`QuizSession::start_question`] starts the answer timer,
//! [`QuizSession::answer_question`] scores the answer and returns to idle.
//!
//! Transitions take the session by value and hand back the next one, so the
//! caller always holds exactly one current state.
//!
//! Points for a correct answer are `(base + time bonus) * combo multiplier`,
//! rounded half up:
//!
//! | new combo | multiplier |
//! |-----------|------------|
//! | 1         | 1.0        |
//! | 2         | 1.5        |
//! | 3         | 2.0        |
//! | 4         | 2.5        |
//! | 5+        | 3.0        |

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Points for a correct answer before bonuses
pub const DEFAULT_BASE_POINTS: u32 = 10;

/// Elapsed time assumed when an answer arrives without a started question.
/// Slow enough to earn no time bonus.
const UNTIMED_ELAPSED_SECONDS: f64 = 10.0;

/// Time bonus bands, fastest first: (answered within seconds, bonus)
const TIME_BONUS_BANDS: &[(f64, u32)] = &[(5.0, 5), (10.0, 2)];

/// Combo bands, highest first: (minimum combo, multiplier)
const COMBO_BANDS: &[(u32, f64)] = &[(5, 3.0), (4, 2.5), (3, 2.0), (2, 1.5)];

/// Bonus points for answering within `elapsed_seconds`.
pub fn time_bonus(elapsed_seconds: f64) -> u32 {
    TIME_BONUS_BANDS
        .iter()
        .find(|(limit, _)| elapsed_seconds < *limit)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0)
}

/// Multiplier for a streak of `combo` consecutive correct answers.
pub fn combo_multiplier(combo: u32) -> f64 {
    COMBO_BANDS
        .iter()
        .find(|(min_combo, _)| combo >= *min_combo)
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(1.0)
}

/// Result of scoring one answer, for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub points_earned: u32,
    pub time_bonus: u32,
    /// Multiplier for the new combo. Reported as 1.0 on a wrong answer.
    pub combo_multiplier: f64,
}

/// In-session quiz state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizSession {
    /// Current run of consecutive correct answers
    pub combo: u32,
    /// Longest combo reached this session
    pub max_combo: u32,
    pub total_points: u64,
    pub questions_answered: u32,
    pub correct_answers: u32,
    /// When the current question was shown; `None` while idle
    pub time_started: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// A fresh session with nothing answered
    pub fn new() -> Self {
        Self::default()
    }

    /// Start timing the current question. Restarts the timer if one is
    /// already running.
    #[must_use]
    pub fn start_question(self, now: DateTime<Utc>) -> Self {
        Self {
            time_started: Some(now),
            ..self
        }
    }

    /// Whether a question has been started and not yet answered
    pub fn is_awaiting_answer(&self) -> bool {
        self.time_started.is_some()
    }

    /// Score an answer worth [`DEFAULT_BASE_POINTS`].
    #[must_use]
    pub fn answer(self, correct: bool, now: DateTime<Utc>) -> (Self, AnswerOutcome) {
        self.answer_question(correct, DEFAULT_BASE_POINTS, now)
    }

    /// Score an answer and return to idle.
    #[must_use]
    pub fn answer_question(
        self,
        correct: bool,
        base_points: u32,
        now: DateTime<Utc>,
    ) -> (Self, AnswerOutcome) {
        let elapsed_seconds = match self.time_started {
            // A clock reading before the start counts as an instant answer
            Some(started) => {
                let elapsed = (now - started).max(Duration::zero());
                elapsed.num_milliseconds() as f64 / 1000.0
            }
            None => {
                tracing::debug!("answer without a started question, scoring as untimed");
                UNTIMED_ELAPSED_SECONDS
            }
        };
        let bonus = time_bonus(elapsed_seconds);

        let (new_combo, multiplier, points_earned) = if correct {
            let new_combo = self.combo + 1;
            let multiplier = combo_multiplier(new_combo);
            // Non-negative, so round() is round-half-up
            let points = (f64::from(base_points.saturating_add(bonus)) * multiplier).round() as u32;
            (new_combo, multiplier, points)
        } else {
            if self.combo > 0 {
                tracing::debug!(lost_combo = self.combo, "combo broken");
            }
            (0, 1.0, 0)
        };

        let next = Self {
            combo: new_combo,
            max_combo: self.max_combo.max(new_combo),
            total_points: self.total_points.saturating_add(u64::from(points_earned)),
            questions_answered: self.questions_answered + 1,
            correct_answers: self.correct_answers + u32::from(correct),
            time_started: None,
        };

        let outcome = AnswerOutcome {
            points_earned,
            time_bonus: bonus,
            combo_multiplier: multiplier,
        };

        (next, outcome)
    }

    /// Discard all session progress
    #[must_use]
    pub fn reset(self) -> Self {
        Self::new()
    }

    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            questions_answered: self.questions_answered,
            correct_answers: self.correct_answers,
            max_combo: self.max_combo,
            total_points: self.total_points,
        }
    }
}

/// End-of-session totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub questions_answered: u32,
    pub correct_answers: u32,
    pub max_combo: u32,
    pub total_points: u64,
}

impl QuizSummary {
    /// Fraction of questions answered correctly (0.0 - 1.0)
    pub fn accuracy(&self) -> f64 {
        if self.questions_answered == 0 {
            0.0
        } else {
            f64::from(self.correct_answers) / f64::from(self.questions_answered)
        }
    }

    pub fn is_perfect(&self) -> bool {
        self.questions_answered > 0 && self.correct_answers == self.questions_answered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn answer_after(
        session: QuizSession,
        correct: bool,
        seconds: i64,
    ) -> (QuizSession, AnswerOutcome) {
        let session = session.start_question(t0());
        session.answer(correct, t0() + Duration::seconds(seconds))
    }

    #[test]
    fn test_time_bonus_bands() {
        assert_eq!(time_bonus(0.0), 5);
        assert_eq!(time_bonus(4.999), 5);
        assert_eq!(time_bonus(5.0), 2);
        assert_eq!(time_bonus(9.9), 2);
        assert_eq!(time_bonus(10.0), 0);
        assert_eq!(time_bonus(120.0), 0);
    }

    #[test]
    fn test_combo_multiplier_table() {
        assert_eq!(combo_multiplier(0), 1.0);
        assert_eq!(combo_multiplier(1), 1.0);
        assert_eq!(combo_multiplier(2), 1.5);
        assert_eq!(combo_multiplier(3), 2.0);
        assert_eq!(combo_multiplier(4), 2.5);
        assert_eq!(combo_multiplier(5), 3.0);
        assert_eq!(combo_multiplier(50), 3.0);
    }

    #[test]
    fn test_fast_streak_multipliers() {
        let mut session = QuizSession::new();
        let mut multipliers = Vec::new();
        let mut points = Vec::new();

        for _ in 0..6 {
            let (next, outcome) = answer_after(session, true, 2);
            assert_eq!(outcome.time_bonus, 5);
            multipliers.push(outcome.combo_multiplier);
            points.push(outcome.points_earned);
            session = next;
        }

        assert_eq!(multipliers, vec![1.0, 1.5, 2.0, 2.5, 3.0, 3.0]);
        // 15 * multiplier, 22.5 rounds up
        assert_eq!(points, vec![15, 23, 30, 38, 45, 45]);
        assert_eq!(session.combo, 6);
        assert_eq!(session.max_combo, 6);
        assert_eq!(session.total_points, 196);
        assert_eq!(session.correct_answers, 6);
    }

    #[test]
    fn test_wrong_answer_resets_combo() {
        let (session, _) = answer_after(QuizSession::new(), true, 1);
        let (session, _) = answer_after(session, true, 1);
        let total_before = session.total_points;

        let (session, outcome) = answer_after(session, false, 1);
        assert_eq!(outcome.points_earned, 0);
        assert_eq!(outcome.combo_multiplier, 1.0);
        assert_eq!(outcome.time_bonus, 5);
        assert_eq!(session.combo, 0);
        assert_eq!(session.max_combo, 2);
        assert_eq!(session.total_points, total_before);
        assert_eq!(session.questions_answered, 3);
        assert_eq!(session.correct_answers, 2);

        let (session, outcome) = answer_after(session, true, 1);
        assert_eq!(outcome.combo_multiplier, 1.0);
        assert_eq!(session.max_combo, 2);
    }

    #[test]
    fn test_answer_without_start_earns_no_bonus() {
        let (session, outcome) = QuizSession::new().answer(true, t0());
        assert_eq!(outcome.time_bonus, 0);
        assert_eq!(outcome.points_earned, 10);
        assert_eq!(session.total_points, 10);
    }

    #[test]
    fn test_answer_before_start_is_clamped() {
        let session = QuizSession::new().start_question(t0());
        let (_, outcome) = session.answer(true, t0() - Duration::seconds(30));
        assert_eq!(outcome.time_bonus, 5);
        assert_eq!(outcome.points_earned, 15);

        // Same score as an answer at the exact start time
        let (_, instant) = QuizSession::new().start_question(t0()).answer(true, t0());
        assert_eq!(outcome, instant);
    }

    #[test]
    fn test_medium_and_slow_answers() {
        let (_, medium) = answer_after(QuizSession::new(), true, 7);
        assert_eq!(medium.time_bonus, 2);
        assert_eq!(medium.points_earned, 12);

        let (_, slow) = answer_after(QuizSession::new(), true, 30);
        assert_eq!(slow.time_bonus, 0);
        assert_eq!(slow.points_earned, 10);
    }

    #[test]
    fn test_custom_base_points() {
        let session = QuizSession::new().start_question(t0());
        let (_, outcome) = session.answer_question(true, 20, t0() + Duration::seconds(3));
        assert_eq!(outcome.points_earned, 25);
    }

    #[test]
    fn test_start_question_overwrites_timer() {
        let session = QuizSession::new()
            .start_question(t0())
            .start_question(t0() + Duration::seconds(20));
        assert!(session.is_awaiting_answer());

        let (session, outcome) = session.answer(true, t0() + Duration::seconds(22));
        assert_eq!(outcome.time_bonus, 5);
        assert!(!session.is_awaiting_answer());
    }

    #[test]
    fn test_reset_matches_new_session() {
        let (played, _) = answer_after(QuizSession::new(), true, 1);
        let (played, _) = answer_after(played, false, 12);
        let played = played.start_question(t0());

        let reset = played.reset();
        assert_eq!(reset, QuizSession::new());

        let (a, outcome_a) = answer_after(reset, true, 3);
        let (b, outcome_b) = answer_after(QuizSession::new(), true, 3);
        assert_eq!(a, b);
        assert_eq!(outcome_a, outcome_b);
    }

    #[test]
    fn test_summary() {
        assert_eq!(QuizSession::new().summary().accuracy(), 0.0);
        assert!(!QuizSession::new().summary().is_perfect());

        let (session, _) = answer_after(QuizSession::new(), true, 1);
        let (session, _) = answer_after(session, false, 1);
        let (session, _) = answer_after(session, true, 1);
        let (session, _) = answer_after(session, true, 1);

        let summary = session.summary();
        assert_eq!(summary.questions_answered, 4);
        assert_eq!(summary.correct_answers, 3);
        assert_eq!(summary.max_combo, 2);
        assert!((summary.accuracy() - 0.75).abs() < f64::EPSILON);
        assert!(!summary.is_perfect());
    }
}

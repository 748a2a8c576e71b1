//! Verse Quest - progression and scoring engine
//!
//! The gamification core behind the Bible-learning app: a leveling curve for
//! experience points, a regenerating hearts resource, and the quiz combo
//! scorer. Everything in [`progress`] is pure: callers pass in plain data and
//! a clock reading, and persist whatever comes back.
//!
//! ## Usage
//!
//! ```
//! use chrono::Utc;
//! use verse_quest::progress::{level_for_experience, QuizSession};
//!
//! let now = Utc::now();
//! let session = QuizSession::new().start_question(now);
//! let (session, outcome) = session.answer(true, now);
//!
//! assert_eq!(outcome.points_earned, 15);
//! assert_eq!(session.total_points, 15);
//! assert_eq!(level_for_experience(session.total_points), 1);
//! ```

pub mod config;
pub mod progress;

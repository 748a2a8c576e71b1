//! Progression engine: XP levels, hearts, and quiz scoring
//!
//! Three independent calculators. None of them reads a clock or touches
//! storage on its own; the current time is always passed in (see [`Clock`])
//! and the returned values are persisted by the caller.
//!
//! ```text
//!   caller ──(xp, hearts, session, now)──▶ engine ──(plain values)──▶ caller
//!                                                                     │
//!                                                    persist + present ◀┘
//! ```

mod clock;
mod error;
mod hearts;
mod levels;
mod quiz;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::ProgressError;
pub use hearts::{
    DEFAULT_MAX_HEARTS, HeartsConfig, HeartsState, REGEN_INTERVAL_MINUTES, effective_hearts,
    seconds_to_next_heart,
};
pub use levels::{
    LevelUp, PlayerLevel, experience_threshold, level_for_experience, level_up,
    next_level_threshold, progress_within_level,
};
pub use quiz::{
    AnswerOutcome, DEFAULT_BASE_POINTS, QuizSession, QuizSummary, combo_multiplier, time_bonus,
};

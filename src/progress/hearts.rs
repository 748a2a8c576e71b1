//! Hearts regeneration
//!
//! Hearts are stored as a count plus the time that count was last written.
//! Regeneration is computed lazily from the elapsed wall-clock time, so no
//! background timer is needed: one heart comes back every
//! [`REGEN_INTERVAL_MINUTES`], up to the cap.
//!
//! The query functions never move `updated_at`. Moving it is done exactly
//! once per state change, through the [`HeartsState`] transitions.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::error::ProgressError;

/// Default hearts cap
pub const DEFAULT_MAX_HEARTS: u32 = 5;

/// Minutes needed to regenerate one heart
pub const REGEN_INTERVAL_MINUTES: i64 = 30;

/// Validated hearts configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartsConfig {
    max_hearts: u32,
}

impl HeartsConfig {
    pub fn new(max_hearts: u32) -> Result<Self, ProgressError> {
        if max_hearts == 0 {
            return Err(ProgressError::InvalidMaxHearts(max_hearts));
        }
        Ok(Self { max_hearts })
    }

    pub fn max_hearts(&self) -> u32 {
        self.max_hearts
    }
}

impl Default for HeartsConfig {
    fn default() -> Self {
        Self {
            max_hearts: DEFAULT_MAX_HEARTS,
        }
    }
}

fn regen_interval() -> Duration {
    Duration::minutes(REGEN_INTERVAL_MINUTES)
}

/// Elapsed time since `updated_at`, clamped so a clock reading from before
/// the last write counts as no time at all.
fn elapsed_since(updated_at: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    (now - updated_at).max(Duration::zero())
}

/// Heart count as of `now`, including hearts regenerated since `updated_at`.
pub fn effective_hearts(
    stored_hearts: u32,
    updated_at: DateTime<Utc>,
    now: DateTime<Utc>,
    max_hearts: u32,
) -> u32 {
    let elapsed_minutes = elapsed_since(updated_at, now).num_minutes();
    let regenerated = u32::try_from(elapsed_minutes / REGEN_INTERVAL_MINUTES).unwrap_or(u32::MAX);
    stored_hearts.saturating_add(regenerated).min(max_hearts)
}

/// Whole seconds until the next heart regenerates, or `None` when the
/// stored count is already at the cap.
pub fn seconds_to_next_heart(
    stored_hearts: u32,
    updated_at: DateTime<Utc>,
    now: DateTime<Utc>,
    max_hearts: u32,
) -> Option<u64> {
    if stored_hearts >= max_hearts {
        return None;
    }

    let interval_ms = regen_interval().num_milliseconds();
    let into_interval_ms = elapsed_since(updated_at, now).num_milliseconds() % interval_ms;
    let remaining_ms = interval_ms - into_interval_ms;

    Some((remaining_ms / 1000) as u64)
}

/// Persisted hearts value: the count and when it was last written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartsState {
    pub hearts: u32,
    pub updated_at: DateTime<Utc>,
}

impl HeartsState {
    /// A full set of hearts as of `now`
    pub fn full(config: &HeartsConfig, now: DateTime<Utc>) -> Self {
        Self {
            hearts: config.max_hearts(),
            updated_at: now,
        }
    }

    pub fn effective(&self, config: &HeartsConfig, now: DateTime<Utc>) -> u32 {
        effective_hearts(self.hearts, self.updated_at, now, config.max_hearts())
    }

    pub fn seconds_to_next(&self, config: &HeartsConfig, now: DateTime<Utc>) -> Option<u64> {
        seconds_to_next_heart(self.hearts, self.updated_at, now, config.max_hearts())
    }

    /// Spend one heart on a failed attempt.
    ///
    /// Whole intervals regenerated up to `now` are settled into the count and
    /// the reference time moves forward by exactly those intervals, so time
    /// already spent toward the next heart carries over. From a full count
    /// the countdown starts at `now`.
    pub fn lose_heart(
        &self,
        config: &HeartsConfig,
        now: DateTime<Utc>,
    ) -> Result<Self, ProgressError> {
        let available = self.effective(config, now);
        if available == 0 {
            return Err(ProgressError::OutOfHearts);
        }

        let updated_at = if available >= config.max_hearts() {
            now
        } else {
            let elapsed_minutes = elapsed_since(self.updated_at, now).num_minutes();
            let intervals = elapsed_minutes / REGEN_INTERVAL_MINUTES;
            self.updated_at + Duration::minutes(intervals * REGEN_INTERVAL_MINUTES)
        };

        tracing::debug!(before = available, after = available - 1, "heart lost");
        Ok(Self {
            hearts: available - 1,
            updated_at,
        })
    }

    /// Restore all hearts (e.g. bought with coins)
    pub fn refill(&self, config: &HeartsConfig, now: DateTime<Utc>) -> Self {
        Self::full(config, now)
    }

    pub fn is_empty(&self, config: &HeartsConfig, now: DateTime<Utc>) -> bool {
        self.effective(config, now) == 0
    }
}

//! XP and level curve
//!
//! Level `n` starts at `50 * (n - 1) * n` cumulative XP, so each level costs
//! 100 XP more than the one before it: 0, 100, 300, 600, 1000, ...

use serde::{Deserialize, Serialize};

/// XP per unit of the triangular curve
const XP_STEP: u64 = 50;

/// Minimum cumulative XP required to be at `level`.
pub fn experience_threshold(level: u32) -> u64 {
    if level <= 1 {
        return 0;
    }
    let level = u64::from(level);
    XP_STEP.saturating_mul(level - 1).saturating_mul(level)
}

/// Cumulative XP required to reach `level + 1`.
pub fn next_level_threshold(level: u32) -> u64 {
    let level = u64::from(level);
    XP_STEP.saturating_mul(level).saturating_mul(level + 1)
}

/// Level for a cumulative XP total. Hitting a threshold exactly counts as
/// reaching that level.
pub fn level_for_experience(xp: u64) -> u32 {
    let mut level: u32 = 1;
    let mut threshold = next_level_threshold(level);
    // A saturated threshold means the curve ran out of representable XP
    while xp >= threshold && threshold != u64::MAX {
        level += 1;
        threshold = next_level_threshold(level);
    }
    level
}

/// XP earned inside `level` and XP the whole level spans, as
/// `(earned, needed)`. `needed` is never zero.
pub fn progress_within_level(xp: u64, level: u32) -> (u64, u64) {
    let floor = experience_threshold(level);
    let ceiling = next_level_threshold(level);
    (xp.saturating_sub(floor), ceiling - floor)
}

/// A level-up caused by an XP award
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    pub old_level: u32,
    pub new_level: u32,
}

impl LevelUp {
    /// Number of levels gained in one award (usually 1)
    pub fn levels_gained(&self) -> u32 {
        self.new_level - self.old_level
    }
}

/// Check whether awarding `gained` XP on top of `old_xp` crosses a level.
pub fn level_up(old_xp: u64, gained: u64) -> Option<LevelUp> {
    let old_level = level_for_experience(old_xp);
    let new_level = level_for_experience(old_xp.saturating_add(gained));

    if new_level > old_level {
        tracing::debug!(old_level, new_level, gained, "level up");
        Some(LevelUp {
            old_level,
            new_level,
        })
    } else {
        None
    }
}

/// Level snapshot derived from a player's XP total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLevel {
    pub total_xp: u64,
    pub level: u32,
    /// XP at which the current level started
    pub level_floor_xp: u64,
    /// XP at which the next level starts
    pub next_level_xp: u64,
}

impl PlayerLevel {
    pub fn new(total_xp: u64) -> Self {
        let level = level_for_experience(total_xp);
        Self {
            total_xp,
            level,
            level_floor_xp: experience_threshold(level),
            next_level_xp: next_level_threshold(level),
        }
    }

    /// XP earned since the current level started
    pub fn earned_in_level(&self) -> u64 {
        progress_within_level(self.total_xp, self.level).0
    }

    /// XP the current level spans
    pub fn needed_for_level(&self) -> u64 {
        progress_within_level(self.total_xp, self.level).1
    }

    /// XP still missing until the next level
    pub fn xp_to_next(&self) -> u64 {
        self.next_level_xp.saturating_sub(self.total_xp)
    }

    /// Progress through the current level (0.0 - 1.0, never 1.0)
    pub fn progress_fraction(&self) -> f32 {
        let (earned, needed) = progress_within_level(self.total_xp, self.level);
        (earned as f64 / needed as f64) as f32
    }
}

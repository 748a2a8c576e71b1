//! Settings configuration types

use serde::{Deserialize, Serialize};

use crate::progress::{DEFAULT_BASE_POINTS, DEFAULT_MAX_HEARTS, HeartsConfig, ProgressError};

/// Hearts settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartsSettings {
    /// Hearts cap. Regeneration stops here and refills restore to it.
    /// The regeneration interval itself is fixed at 30 minutes.
    #[serde(default = "default_max_hearts")]
    pub max_hearts: u32,
}

/// Quiz scoring settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    /// Points for a correct answer before time bonus and combo multiplier
    #[serde(default = "default_base_points")]
    pub base_points: u32,
}

fn default_max_hearts() -> u32 {
    DEFAULT_MAX_HEARTS
}

fn default_base_points() -> u32 {
    DEFAULT_BASE_POINTS
}

impl Default for HeartsSettings {
    fn default() -> Self {
        Self {
            max_hearts: default_max_hearts(),
        }
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            base_points: default_base_points(),
        }
    }
}

impl HeartsSettings {
    pub fn to_hearts_config(&self) -> Result<HeartsConfig, ProgressError> {
        HeartsConfig::new(self.max_hearts)
    }
}

impl QuizSettings {
    pub fn validated_base_points(&self) -> Result<u32, ProgressError> {
        if self.base_points == 0 {
            return Err(ProgressError::InvalidBasePoints);
        }
        Ok(self.base_points)
    }
}

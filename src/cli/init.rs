//! Init command implementation

use anyhow::{Result, bail};
use std::path::PathBuf;

use verse_quest::config::Config;

/// Default configuration content for verse-quest init
pub const DEFAULT_CONFIG: &str = r#"# Verse Quest Configuration
# =========================

# ============================================================================
# HEARTS - Attempt-limiting resource, one heart lost per wrong answer
# ============================================================================
#
#   max_hearts - Hearts cap; one heart regenerates every 30 minutes up to it (default: 5)

[hearts]
max_hearts = 5

# ============================================================================
# QUIZ - Scoring
# ============================================================================
#
#   base_points - Points per correct answer before time bonus and combo multiplier (default: 10)
#
# Time bonus: +5 under 5 seconds, +2 under 10 seconds.
# Combo multiplier: x1.5 at 2 in a row, x2 at 3, x2.5 at 4, x3 from 5.

[quiz]
base_points = 10
"#;

/// Write the default config to `config_path` (global config by default)
pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::write_config_file(&config_path, DEFAULT_CONFIG)?;
    tracing::debug!("Wrote default config to {}", config_path.display());
    println!("Created: {}", config_path.display());

    Ok(())
}

//! Hearts command implementation

use anyhow::{Context, Result};
use chrono::Duration;
use serde::Serialize;

use verse_quest::config::Config;
use verse_quest::progress::{Clock, HeartsConfig, HeartsState, SystemClock};

/// Keeps `now - minutes_ago` inside chrono's representable range
const MAX_MINUTES_AGO: i64 = 1_000_000_000;

#[derive(Serialize)]
struct HeartsReport {
    stored: u32,
    effective: u32,
    max_hearts: u32,
    seconds_to_next: Option<u64>,
}

/// Show effective hearts for a stored count written `minutes_ago`
pub fn hearts_command(
    config: &Config,
    stored: u32,
    minutes_ago: i64,
    max_override: Option<u32>,
    json: bool,
) -> Result<()> {
    let hearts_config = match max_override {
        Some(max) => HeartsConfig::new(max),
        None => config.hearts.to_hearts_config(),
    }
    .context("Invalid hearts cap")?;

    let now = SystemClock.now();
    let state = HeartsState {
        hearts: stored,
        updated_at: now - Duration::minutes(minutes_ago.clamp(0, MAX_MINUTES_AGO)),
    };

    let report = HeartsReport {
        stored,
        effective: state.effective(&hearts_config, now),
        max_hearts: hearts_config.max_hearts(),
        seconds_to_next: state.seconds_to_next(&hearts_config, now),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Hearts: {}/{}", report.effective, report.max_hearts);
    match report.seconds_to_next {
        Some(secs) if report.effective < report.max_hearts => {
            println!("  Next heart in {}:{:02}", secs / 60, secs % 60);
        }
        _ => println!("  Full"),
    }

    Ok(())
}

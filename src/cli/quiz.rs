//! Quiz command implementation
//!
//! Plays an answer pattern through the engine the way a quiz screen would:
//! time each question, score it, spend a heart on every wrong answer, and
//! credit the session points as XP at the end.

use anyhow::{Context, Result, bail};
use chrono::Duration;
use serde::Serialize;

use verse_quest::config::Config;
use verse_quest::progress::{
    AnswerOutcome, Clock, HeartsState, LevelUp, ManualClock, ProgressError, QuizSession,
    QuizSummary, SystemClock, level_up,
};

/// Default response time when `--seconds` is empty
const DEFAULT_ANSWER_SECONDS: f64 = 3.0;

/// Longest response time the simulation accepts
const MAX_ANSWER_SECONDS: f64 = 3600.0;

pub struct QuizOptions {
    pub answers: String,
    pub seconds: Vec<f64>,
    pub base_points: Option<u32>,
    pub starting_xp: u64,
}

#[derive(Debug, Serialize)]
struct AnswerRecord {
    number: usize,
    correct: bool,
    seconds: f64,
    combo: u32,
    #[serde(flatten)]
    outcome: AnswerOutcome,
}

#[derive(Debug, Serialize)]
struct QuizReport {
    answers: Vec<AnswerRecord>,
    summary: QuizSummary,
    accuracy: f64,
    hearts_left: u32,
    /// Set when the session stopped early because hearts ran out
    out_of_hearts: bool,
    xp_before: u64,
    xp_after: u64,
    level_up: Option<LevelUp>,
}

fn parse_answers(pattern: &str) -> Result<Vec<bool>> {
    pattern
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_ascii_lowercase() {
            'y' | '1' => Ok(true),
            'n' | '0' => Ok(false),
            other => bail!("Unknown answer '{}': use y for correct, n for wrong", other),
        })
        .collect()
}

/// Response time for answer `index`; the last given value repeats
fn seconds_for(seconds: &[f64], index: usize) -> f64 {
    seconds
        .get(index)
        .or_else(|| seconds.last())
        .copied()
        .unwrap_or(DEFAULT_ANSWER_SECONDS)
}

fn simulate(config: &Config, options: &QuizOptions) -> Result<QuizReport> {
    let answers = parse_answers(&options.answers)?;
    if answers.is_empty() {
        bail!("No answers given");
    }
    let out_of_range = |s: &&f64| !s.is_finite() || **s < 0.0 || **s > MAX_ANSWER_SECONDS;
    if let Some(bad) = options.seconds.iter().find(out_of_range) {
        bail!("Invalid response time: {}", bad);
    }

    let base_points = match options.base_points {
        Some(0) => return Err(ProgressError::InvalidBasePoints.into()),
        Some(points) => points,
        None => config.quiz.validated_base_points()?,
    };
    let hearts_config = config
        .hearts
        .to_hearts_config()
        .context("Invalid [hearts] settings")?;

    let clock = ManualClock::new(SystemClock.now());
    let mut hearts = HeartsState::full(&hearts_config, clock.now());
    let mut session = QuizSession::new();
    let mut records = Vec::with_capacity(answers.len());
    let mut out_of_hearts = false;

    for (index, correct) in answers.into_iter().enumerate() {
        if hearts.is_empty(&hearts_config, clock.now()) {
            tracing::info!("Out of hearts after {} answers", index);
            out_of_hearts = true;
            break;
        }

        let seconds = seconds_for(&options.seconds, index);
        session = session.start_question(clock.now());
        clock.advance(Duration::milliseconds((seconds * 1000.0) as i64));

        let (next, outcome) = session.answer_question(correct, base_points, clock.now());
        session = next;

        if !correct {
            hearts = hearts.lose_heart(&hearts_config, clock.now())?;
        }

        records.push(AnswerRecord {
            number: index + 1,
            correct,
            seconds,
            combo: session.combo,
            outcome,
        });
    }

    let summary = session.summary();
    let xp_after = options.starting_xp.saturating_add(summary.total_points);

    Ok(QuizReport {
        answers: records,
        accuracy: summary.accuracy(),
        summary,
        hearts_left: hearts.effective(&hearts_config, clock.now()),
        out_of_hearts,
        xp_before: options.starting_xp,
        xp_after,
        level_up: level_up(options.starting_xp, summary.total_points),
    })
}

/// Simulate a quiz session and print each scored answer
pub fn quiz_command(config: &Config, options: &QuizOptions, json: bool) -> Result<()> {
    let report = simulate(config, options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for record in &report.answers {
        println!(
            "  #{:<3} {:<5} {:>5.1}s  +{:<3} (bonus {}, x{:.1}, combo {})",
            record.number,
            if record.correct { "right" } else { "wrong" },
            record.seconds,
            record.outcome.points_earned,
            record.outcome.time_bonus,
            record.outcome.combo_multiplier,
            record.combo
        );
    }

    if report.out_of_hearts {
        println!("\nOut of hearts, session ended early.");
    }

    println!(
        "\nScore: {} points, {}/{} correct ({:.0}%), best combo {}",
        report.summary.total_points,
        report.summary.correct_answers,
        report.summary.questions_answered,
        report.accuracy * 100.0,
        report.summary.max_combo
    );
    println!("Hearts left: {}", report.hearts_left);
    println!("XP: {} -> {}", report.xp_before, report.xp_after);
    if let Some(up) = report.level_up {
        println!("Level up! {} -> {}", up.old_level, up.new_level);
    }

    Ok(())
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "verse-quest")]
#[command(about = "Inspect the Verse Quest progression engine: levels, hearts, and quiz scoring")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to .verse-quest/config.toml, then ~/.verse-quest/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the level and in-level progress for an XP total
    Level {
        /// Cumulative experience points
        xp: u64,
    },

    /// Show effective hearts and the regeneration countdown
    Hearts {
        /// Stored heart count
        #[arg(long)]
        stored: u32,

        /// Minutes since the stored count was last written
        #[arg(long, default_value_t = 0)]
        minutes_ago: i64,

        /// Override the configured hearts cap
        #[arg(long)]
        max: Option<u32>,
    },

    /// Simulate a quiz session from an answer pattern like "yyny"
    Quiz {
        /// One character per answer: y = correct, n = wrong
        answers: String,

        /// Seconds taken per answer, comma separated (last value repeats)
        #[arg(long, value_delimiter = ',', default_value = "3")]
        seconds: Vec<f64>,

        /// Override the configured base points
        #[arg(long)]
        base_points: Option<u32>,

        /// XP total before the session, for level-up reporting
        #[arg(long, default_value_t = 0)]
        xp: u64,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let work_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    match cli.command {
        Commands::Level { xp } => {
            cli::level::level_command(xp, cli.json)?;
        }
        Commands::Hearts {
            stored,
            minutes_ago,
            max,
        } => {
            let config = verse_quest::config::Config::load(cli.config.as_deref(), &work_dir)?;
            cli::hearts::hearts_command(&config, stored, minutes_ago, max, cli.json)?;
        }
        Commands::Quiz {
            answers,
            seconds,
            base_points,
            xp,
        } => {
            let config = verse_quest::config::Config::load(cli.config.as_deref(), &work_dir)?;
            let options = cli::quiz::QuizOptions {
                answers,
                seconds,
                base_points,
                starting_xp: xp,
            };
            cli::quiz::quiz_command(&config, &options, cli.json)?;
        }
        Commands::Init { force } => {
            cli::init::init_command(cli.config, force)?;
        }
    }

    Ok(())
}

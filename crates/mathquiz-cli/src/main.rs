//! mathquiz CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use mathquiz_core::model::{OperationType, QuestionLevel};

mod commands;

use commands::sample::SampleFormat;

#[derive(Parser)]
#[command(
    name = "mathquiz",
    version,
    about = "Console arithmetic quiz",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    // Options for the default `play` command.
    #[command(flatten)]
    play: PlayArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the interactive quiz (default)
    Play(PlayArgs),

    /// Print a worksheet of generated questions without playing
    Sample {
        /// Number of questions
        #[arg(long, default_value = "10", value_parser = clap::value_parser!(u64).range(1..=10_000))]
        count: u64,

        /// Level: easy, medium, hard, mixed (or 1-4)
        #[arg(long, default_value = "mixed")]
        level: QuestionLevel,

        /// Operation: addition, subtraction, multiplication, division, mixed (or 1-5)
        #[arg(long, default_value = "mixed")]
        operation: OperationType,

        /// Seed for reproducible questions
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: SampleFormat,

        /// Include the correct answers
        #[arg(long)]
        answers: bool,

        /// Use + − × ÷ instead of + - * /
        #[arg(long)]
        unicode: bool,
    },

    /// Create a starter mathquiz.toml
    Init,
}

#[derive(Args)]
pub struct PlayArgs {
    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for reproducible questions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of questions (skips the prompt)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=i32::MAX as u64))]
    pub questions: Option<u64>,

    /// Level: easy, medium, hard, mixed (skips the prompt)
    #[arg(long)]
    pub level: Option<QuestionLevel>,

    /// Operation: addition, subtraction, multiplication, division, mixed (skips the prompt)
    #[arg(long)]
    pub operation: Option<OperationType>,

    /// Disable colored feedback
    #[arg(long)]
    pub no_color: bool,

    /// Do not clear the screen between rounds
    #[arg(long)]
    pub no_clear: bool,

    /// Use + − × ÷ instead of + - * /
    #[arg(long)]
    pub unicode: bool,

    /// Show a per-question review after each report
    #[arg(long)]
    pub review: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mathquiz=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::play::execute(cli.play),
        Some(Commands::Play(args)) => commands::play::execute(args),
        Some(Commands::Sample {
            count,
            level,
            operation,
            seed,
            format,
            answers,
            unicode,
        }) => commands::sample::execute(count, level, operation, seed, format, answers, unicode),
        Some(Commands::Init) => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

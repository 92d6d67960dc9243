//! pathwise CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use pathwise_core::error::ScoringError;

mod commands;

#[derive(Parser)]
#[command(
    name = "pathwise",
    version,
    about = "Rule-based personalized learning and student risk detection"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take a diagnostic quiz and get a learning level
    Quiz {
        /// Question catalog TOML (defaults to the built-in networks catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Number of questions to draw
        #[arg(long)]
        count: Option<usize>,

        /// Shuffle seed for a reproducible quiz
        #[arg(long)]
        seed: Option<u64>,

        /// Comma-separated option indices (e.g. "0,1,2"); read from stdin if omitted
        #[arg(long)]
        answers: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Score engagement from usage counters
    Engagement {
        /// Minutes spent in the session
        #[arg(long, default_value = "0")]
        time_spent: u32,

        /// Quizzes attempted
        #[arg(long, default_value = "0")]
        quiz_attempts: u32,

        /// Interaction clicks on learning content
        #[arg(long, default_value = "0")]
        clicks: u32,

        /// Lesson sections completed
        #[arg(long, default_value = "0")]
        lessons: u32,
    },

    /// Score dropout risk from performance signals
    Risk {
        /// Latest quiz score (0-100)
        #[arg(long)]
        quiz_score: u32,

        /// Days active in the last week (0-7)
        #[arg(long)]
        login_frequency: u32,

        /// The latest assignment was not completed
        #[arg(long)]
        assignment_missing: bool,
    },

    /// Show the teacher dashboard for a roster
    Roster {
        /// Roster TOML file
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,

        /// Also save the report as JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show one student's record and teacher insight
    Insight {
        /// Student id
        #[arg(long)]
        student: String,

        /// Roster TOML file
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate catalog and roster TOML files
    Validate {
        /// Catalog file or directory
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Roster file
        #[arg(long)]
        roster: Option<PathBuf>,
    },

    /// Create a starter config, catalog, and roster
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pathwise=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Quiz {
            catalog,
            count,
            seed,
            answers,
            config,
        } => commands::quiz::execute(catalog, count, seed, answers, config),
        Commands::Engagement {
            time_spent,
            quiz_attempts,
            clicks,
            lessons,
        } => commands::engagement::execute(time_spent, quiz_attempts, clicks, lessons),
        Commands::Risk {
            quiz_score,
            login_frequency,
            assignment_missing,
        } => commands::risk::execute(quiz_score, login_frequency, assignment_missing),
        Commands::Roster {
            roster,
            format,
            output,
            config,
        } => commands::roster::execute(roster, format, output, config),
        Commands::Insight {
            student,
            roster,
            config,
        } => commands::insight::execute(student, roster, config),
        Commands::Validate { catalog, roster } => commands::validate::execute(catalog, roster),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(exit_code(&e));
    }
}

/// 2 for rejected input values, 1 for everything else (I/O, parse, config).
fn exit_code(err: &anyhow::Error) -> i32 {
    let invalid = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<ScoringError>())
        .any(ScoringError::is_invalid_argument);
    if invalid {
        2
    } else {
        1
    }
}

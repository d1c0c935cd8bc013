use clap::{Parser, Subcommand};
use skillmatch::{split_skills, MatchEngine};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// A skill-to-job matching engine with drift monitoring
#[derive(Parser, Debug)]
#[command(name = "skillmatch")]
#[command(about = "Match candidate skills against a job corpus", long_about = None)]
struct Args {
    /// Path to the job dataset CSV
    #[arg(short, long, default_value = "./dataset.csv")]
    dataset: PathBuf,

    /// Maximum number of matches to return
    #[arg(long, default_value_t = 5)]
    top_k: usize,

    /// Drift significance threshold
    #[arg(long, default_value_t = 0.05)]
    threshold: f64,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank the corpus against a comma-separated skill list
    Match {
        /// Candidate skills, e.g. "python, sql"
        skills: String,
    },
    /// Explain the score for one job role
    Explain {
        /// Candidate skills, e.g. "python, sql"
        skills: String,
        /// Exact job role name from the corpus
        job_role: String,
    },
    /// Check a batch of skill lists for distribution drift
    Drift {
        /// One comma-separated skill list per argument
        batch: Vec<String>,
    },
    /// Print the deduplicated skill vocabulary of the corpus
    Skills,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting skillmatch v{}", env!("CARGO_PKG_VERSION"));
    info!("Dataset: {:?}", args.dataset);

    let engine = MatchEngine::from_csv(&args.dataset)
        .with_top_k(args.top_k)
        .with_threshold(args.threshold);

    match args.command {
        Command::Match { skills } => {
            let results = engine.match_skills(&split_skills(&skills));
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Command::Explain { skills, job_role } => {
            let explanation = engine.explain(&split_skills(&skills), &job_role)?;
            println!("{}", serde_json::to_string_pretty(&explanation)?);
        }
        Command::Drift { batch } => {
            let batch: Vec<Vec<String>> = batch.iter().map(|row| split_skills(row)).collect();
            let report = engine.check_drift(&batch);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Skills => {
            println!("{}", serde_json::to_string_pretty(&engine.all_skills())?);
        }
    }

    Ok(())
}

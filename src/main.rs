use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use csv_quiz::{write_summary, Quiz, SummaryFormat, DEFAULT_QUESTIONS_PATH};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV file with questions in the format 'question,answer'
    #[arg(short, long, default_value = DEFAULT_QUESTIONS_PATH)]
    questions: PathBuf,

    /// Print the final score as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    // Prompts own stdout.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    let mut quiz = Quiz::from_csv(&args.questions)?;

    let score = quiz
        .run(io::stdin().lock(), io::stdout())
        .context("quiz aborted")?;

    let format = if args.json {
        SummaryFormat::Json
    } else {
        SummaryFormat::Text
    };
    write_summary(io::stdout().lock(), &score, format).context("cannot write the summary")?;

    Ok(())
}

//! impress-headlines CLI
//!
//! Filters near-duplicate headlines from a JSON row list or plain title list.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use impress_headlines::{
    headline_similarity, parse_rows, parse_titles, read_input, FilterOptions, FilterOutcome,
    HeadlineFilter, ResultRow,
};

#[derive(Parser, Debug)]
#[command(name = "impress-headlines", version, about = "Drop near-duplicate headlines")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Filter rows, writing the kept rows as JSON
    Filter(FilterArgs),
    /// Print the similarity (0-100) of two headlines
    Score { a: String, b: String },
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// JSON array of rows, or `-` for stdin
    input: Option<PathBuf>,

    /// Suppress headlines at or above this similarity
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
    threshold: Option<u8>,

    /// Maximum number of headlines to keep
    #[arg(short = 'n', long)]
    max_kept: Option<usize>,

    /// Options file (skips the standard ~/.impress and project lookups)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Project directory searched for .impress/headlines.toml
    #[arg(long)]
    project_root: Option<PathBuf>,

    /// Treat input as one plain title per line
    #[arg(long)]
    titles: bool,

    /// Write the full filter report instead of the kept rows
    #[arg(long)]
    report: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Filter(args) => run_filter(args),
        Command::Score { a, b } => {
            println!("{:.2}", headline_similarity(&a, &b));
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_filter(args: FilterArgs) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = match &args.config {
        Some(path) => FilterOptions::load(path)?,
        None => FilterOptions::load_standard(args.project_root.as_deref())?,
    };
    let filter = HeadlineFilter::new(loaded.with_overrides(args.threshold, args.max_kept));
    tracing::debug!("Filtering with {:?}", filter.options());

    let input = read_input(args.input.as_deref(), std::io::stdin().lock())?;

    let output = if args.titles {
        render(filter.apply(parse_titles(&input)), args.report)?
    } else {
        let rows: Vec<ResultRow> = parse_rows(&input)?;
        render(filter.apply(rows), args.report)?
    };

    println!("{}", output);
    Ok(())
}

fn render<T: serde::Serialize>(
    outcome: FilterOutcome<T>,
    report: bool,
) -> Result<String, serde_json::Error> {
    if report {
        serde_json::to_string_pretty(&outcome)
    } else {
        serde_json::to_string_pretty(&outcome.kept)
    }
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use schemagen::{GenerateConfig, GenerateSummary, Generator, Policy};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "schemagen", version)]
#[command(about = "Resolve JSON schema trees and embed them as Rust sources")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Emit one service per schema directory instead of a single package.
    #[arg(long, global = true)]
    separate: bool,
    /// Number of parallel jobs (default: number of CPUs).
    #[arg(long, global = true)]
    jobs: Option<usize>,
    // Glob mode when omitted.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a single schema tree into an output directory.
    Generate(GenerateArgs),
    /// Generate every schema tree found on the search path.
    Glob,
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Schema tree root.
    #[arg(long)]
    input: PathBuf,
    /// Directory receiving the generated sources; its name is the package.
    #[arg(long)]
    output: PathBuf,
    /// Also generate nested subtrees that own a definitions file.
    #[arg(long)]
    nested_scopes: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let mut config = match &cli.config {
        Some(path) => GenerateConfig::load(path).map_err(|e| e.to_string())?,
        None => GenerateConfig::default(),
    };
    if cli.separate {
        config.policy = Policy::Separate;
    }
    if cli.jobs.is_some() {
        config.jobs = cli.jobs;
    }

    let summaries = match cli.command {
        Some(Command::Generate(args)) => {
            config.nested_scopes |= args.nested_scopes;
            Generator::new(config)
                .generate_tree(&args.input, &args.output)
                .map_err(|e| e.to_string())?
        }
        Some(Command::Glob) | None => {
            let var = config.search_path_var.clone();
            let summaries = Generator::new(config)
                .generate_glob()
                .map_err(|e| e.to_string())?;
            if summaries.is_empty() {
                tracing::warn!(var = %var, "no schema trees found on the search path");
            }
            summaries
        }
    };

    print_summary(&summaries);
    Ok(())
}

fn print_summary(summaries: &[GenerateSummary]) {
    let services: usize = summaries.iter().map(|s| s.services.len()).sum();
    let schemas: usize = summaries.iter().map(|s| s.schemas).sum();
    for summary in summaries {
        tracing::info!(
            input = %summary.input.display(),
            output = %summary.output.display(),
            services = ?summary.services,
            "unit complete"
        );
    }
    println!("Generated {services} service(s) from {schemas} schema(s).");
}

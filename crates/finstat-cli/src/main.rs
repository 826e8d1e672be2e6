mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::metrics::{GrowthArgs, RatiosArgs, StructureArgs};
use commands::statement::{RecordsArgs, ResolveArgs, SummaryArgs};

/// Financial statement analysis
#[derive(Parser)]
#[command(
    name = "finstat",
    version,
    about = "Financial statement ratio, growth and asset structure analysis",
    long_about = "Derives canonical account values, financial ratios, year-over-year growth \
                  and asset composition from disclosure line items. Consolidated figures \
                  take priority over standalone ones; missing amounts count as zero."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log resolution details to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one account amount for a period
    Resolve(ResolveArgs),
    /// Headline account values for every period
    KeyAccounts(RecordsArgs),
    /// ROE, ROA, debt ratio, current ratio and margins with health status
    Ratios(RatiosArgs),
    /// Year-over-year growth of revenue, income and assets
    Growth(GrowthArgs),
    /// Current / non-current asset composition
    AssetStructure(StructureArgs),
    /// Run every analysis and wrap it with methodology and warnings
    Analyze(RatiosArgs),
    /// Render the text handed to the summarizer
    Summary(SummaryArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Resolve(args) => commands::statement::run_resolve(args),
        Commands::KeyAccounts(args) => commands::statement::run_key_accounts(args),
        Commands::Ratios(args) => commands::metrics::run_ratios(args),
        Commands::Growth(args) => commands::metrics::run_growth(args),
        Commands::AssetStructure(args) => commands::metrics::run_asset_structure(args),
        Commands::Analyze(args) => commands::metrics::run_analyze(args),
        Commands::Summary(args) => commands::statement::run_summary(args),
        Commands::Version => {
            println!("finstat {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}

//! fxharvest CLI - historical FX bar downloader.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod display;

#[derive(Parser)]
#[command(name = "fxharvest")]
#[command(about = "Download historical FX bars into per-pair CSV files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a batch: pairs crossed with date ranges at one interval
    Run {
        /// Batch configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Named preset from the configuration file
        #[arg(short, long)]
        preset: Option<String>,

        /// Currency pairs, comma separated (e.g. EURUSD,GBPUSD).
        /// Defaults to the config file's pairs, or the built-in list.
        #[arg(long, value_delimiter = ',')]
        pairs: Vec<String>,

        /// Start date (YYYY-MM-DD); required unless --preset is given
        #[arg(short, long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD, exclusive); required unless --preset is given
        #[arg(short, long)]
        end: Option<String>,

        /// Sampling interval
        #[arg(short, long, default_value = "1m")]
        interval: String,

        /// Output root directory; files land in <out-dir>/<PAIR>/
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Per-job timeout in seconds
        #[arg(long, default_value = "60")]
        timeout: u64,

        /// Report empty ranges instead of writing header-only files
        #[arg(long)]
        skip_empty: bool,
    },

    /// Fetch a single pair over a single date range
    Fetch {
        /// Currency pair (e.g. EURUSD)
        pair: String,

        /// Start date (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,

        /// End date (YYYY-MM-DD, exclusive)
        #[arg(short, long)]
        end: String,

        /// Sampling interval
        #[arg(short, long, default_value = "1m")]
        interval: String,

        /// Output root directory; the file lands in <out-dir>/<PAIR>/
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Per-job timeout in seconds
        #[arg(long, default_value = "60")]
        timeout: u64,

        /// Report an empty range instead of writing a header-only file
        #[arg(long)]
        skip_empty: bool,
    },

    /// List the pairs a run would use
    Pairs {
        /// Batch configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List supported sampling intervals
    Intervals,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    display::init_tracing(cli.verbose);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Run {
            config,
            preset,
            pairs,
            start,
            end,
            interval,
            out_dir,
            timeout,
            skip_empty,
        } => {
            commands::run::run(
                config.as_deref(),
                preset.as_deref(),
                &pairs,
                start.as_deref(),
                end.as_deref(),
                &interval,
                out_dir,
                timeout,
                skip_empty,
                cli.quiet,
            )
            .await
        }
        Commands::Fetch {
            pair,
            start,
            end,
            interval,
            out_dir,
            timeout,
            skip_empty,
        } => {
            commands::fetch::fetch(
                &pair, &start, &end, &interval, out_dir, timeout, skip_empty, cli.quiet,
            )
            .await
        }
        Commands::Pairs { config } => commands::pairs::list_pairs(config.as_deref()),
        Commands::Intervals => commands::intervals::list_intervals(),
    }
}

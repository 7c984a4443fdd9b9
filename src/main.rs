//! Spatter Gen CLI
//!
//! Splits gather/scatter kernel traces across lanes and exports the
//! per-lane kernel schedule.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use spatter_gen::commands::{
    display_schema, display_version, execute_check, execute_plan, print_report, validate_args,
    CheckArgs, PlanArgs,
};
use spatter_gen::utils::config::{
    DEFAULT_BASE_INDEX_ADDR, DEFAULT_BASE_VALUE_ADDR, DEFAULT_INDEX_SIZE, DEFAULT_VALUE_SIZE,
};

/// Spatter Gen - gather/scatter trace scheduling
#[derive(Parser, Debug)]
#[command(name = "spatter-gen")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Split a trace across lanes and export the schedule
    Plan {
        /// Trace file (JSON array of kernel records)
        #[arg(short, long)]
        trace: PathBuf,

        /// Number of lanes
        #[arg(short, long, env = "SPATTER_LANES")]
        lanes: usize,

        /// Base address of the index array
        #[arg(long, default_value_t = DEFAULT_BASE_INDEX_ADDR, value_parser = parse_addr)]
        base_index_addr: u64,

        /// Base address of the value array
        #[arg(long, default_value_t = DEFAULT_BASE_VALUE_ADDR, value_parser = parse_addr)]
        base_value_addr: u64,

        /// Index element size in bytes
        #[arg(long, default_value_t = DEFAULT_INDEX_SIZE)]
        index_size: u32,

        /// Value element size in bytes
        #[arg(long, default_value_t = DEFAULT_VALUE_SIZE)]
        value_size: u32,

        /// Generator clock override (e.g. "4GHz")
        #[arg(long)]
        clock: Option<String>,

        /// Output path for the JSON schedule
        #[arg(short, long, default_value = "artifacts/schedule.json")]
        output: PathBuf,

        /// Print per-lane summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a trace file without scheduling it
    Check {
        /// Trace file (JSON array of kernel records)
        #[arg(short, long)]
        trace: PathBuf,

        /// Also check every kernel can be split across this many lanes
        #[arg(short, long)]
        lanes: Option<usize>,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Plan {
            trace,
            lanes,
            base_index_addr,
            base_value_addr,
            index_size,
            value_size,
            clock,
            output,
            summary,
        } => {
            let args = PlanArgs {
                trace_path: trace,
                num_lanes: lanes,
                base_index_addr,
                base_value_addr,
                index_size,
                value_size,
                clock,
                output_json: output,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_plan(args)?;
        }

        Commands::Check { trace, lanes } => {
            let report = execute_check(&CheckArgs {
                trace_path: trace,
                num_lanes: lanes,
            })?;
            print_report(&report);

            if report.lanes.is_some() && !report.is_schedulable() {
                bail!("Trace cannot be scheduled across the requested lanes");
            }
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Parse an address given in decimal or 0x-prefixed hex
///
/// **Private** - clap value parser
fn parse_addr(value: &str) -> Result<u64, String> {
    let parsed = if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        u64::from_str_radix(&hex.replace('_', ""), 16)
    } else {
        value.replace('_', "").parse::<u64>()
    };
    parsed.map_err(|e| format!("invalid address '{}': {}", value, e))
}

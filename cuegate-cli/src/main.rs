//! `cuegate` command-line tool
//!
//! **Usage:**
//! ```bash
//! cuegate enhance raw.json --batch 2 --output enhanced.json
//! cuegate validate enhanced.json --strict
//! cuegate select enhanced.json --depth believing --interactions 4 --require heat_low
//! cuegate gate --target embodying --current believing --interactions 3
//! ```

use clap::{Parser, Subcommand};
use cuegate_cli::commands::{
    enforce_strict, load_config, output_path, read_input, run_enhance, run_gate, run_select,
    run_stats, run_validate, write_json,
};
use cuegate_cli::telemetry::{init_tracing, TelemetryConfig};
use cuegate_cli::CliResult;
use cuegate_core::{CueQuery, HeatLevel, KbeDepth, UserProgress};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

/// Cue classification and delivery gating
#[derive(Parser, Debug)]
#[command(name = "cuegate", version, about)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, value_name = "FILE", env = "CUEGATE_CONFIG")]
    config: Option<PathBuf>,

    /// Debug logging for all cuegate crates
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Enhance raw cues into fully classified records
    Enhance {
        /// Raw cue JSON array, or `-` for stdin
        input: PathBuf,

        /// Batch number the records belong to
        #[arg(long)]
        batch: u32,

        /// Write to FILE instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Validate enhanced records and print a report
    Validate {
        input: PathBuf,

        /// Exit with status 2 when any record is invalid
        #[arg(long)]
        strict: bool,
    },

    /// Print distribution counts per dimension
    Stats { input: PathBuf },

    /// Print the deliverable candidates for a user
    Select {
        input: PathBuf,

        /// User's current depth
        #[arg(long)]
        depth: KbeDepth,

        /// Interactions completed at the current depth
        #[arg(long, default_value_t = 0)]
        interactions: u32,

        /// Tag every candidate must carry (repeatable)
        #[arg(long = "require", value_name = "TAG")]
        required: Vec<String>,

        /// Tag no candidate may carry (repeatable)
        #[arg(long = "exclude", value_name = "TAG")]
        excluded: Vec<String>,

        #[arg(long)]
        pillar: Option<String>,

        #[arg(long)]
        schema: Option<String>,

        #[arg(long)]
        family: Option<String>,

        /// Exact target depth
        #[arg(long)]
        kbe: Option<KbeDepth>,

        #[arg(long)]
        heat: Option<HeatLevel>,

        /// Maximum number of candidates
        #[arg(long)]
        limit: Option<usize>,

        /// Override the progression threshold
        #[arg(long)]
        min_interactions: Option<u32>,
    },

    /// Decide whether a target depth is open to a user
    Gate {
        #[arg(long)]
        target: KbeDepth,

        #[arg(long)]
        current: KbeDepth,

        #[arg(long, default_value_t = 0)]
        interactions: u32,

        /// Override the progression threshold
        #[arg(long)]
        min_interactions: Option<u32>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut telemetry = TelemetryConfig::from_env();
    if cli.verbose {
        telemetry = telemetry.verbose();
    }
    if let Err(e) = init_tracing(&telemetry) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Enhance {
            input,
            batch,
            output,
        } => {
            let report = run_enhance(&read_input(&input)?, batch)?;
            write_json(&report.cues, output_path(&output))
        }

        Command::Validate { input, strict } => {
            config.strict_validation |= strict;
            let report = run_validate(&read_input(&input)?)?;
            write_json(&report, None)?;
            enforce_strict(&report, &config)
        }

        Command::Stats { input } => write_json(&run_stats(&read_input(&input)?)?, None),

        Command::Select {
            input,
            depth,
            interactions,
            required,
            excluded,
            pillar,
            schema,
            family,
            kbe,
            heat,
            limit,
            min_interactions,
        } => {
            if let Some(min) = min_interactions {
                config.min_interactions = min;
            }
            if limit.is_some() {
                config.max_candidates = limit;
            }
            config.validate()?;

            let query = CueQuery {
                required_tags: required,
                excluded_tags: excluded,
                pillar_id: pillar,
                schema,
                family,
                kbe_target: kbe,
                heat_level: heat,
            };
            let progress = UserProgress::new(depth, interactions);
            let candidates = run_select(&read_input(&input)?, &query, &progress, &config)?;
            write_json(&candidates, None)
        }

        Command::Gate {
            target,
            current,
            interactions,
            min_interactions,
        } => {
            if let Some(min) = min_interactions {
                config.min_interactions = min;
            }
            config.validate()?;
            write_json(
                &run_gate(target, current, interactions, config.min_interactions),
                None,
            )
        }
    }
}

//! CLI entry point for the success-table reduction tool.
//!
//! Provides subcommands that turn the loop-free and random benchmark result
//! matrices into tab-separated tables for plotting.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use success_tables::analyzers::types::{LoopFreeReport, RandomReport};
use success_tables::analyzers::{aggregate_loop_free, aggregate_random};
use success_tables::config::{RunConfig, SizeRange, TotalsMode};
use success_tables::methods::MethodTable;
use success_tables::output::print_json;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "success_tables")]
#[command(about = "Reduce benchmark result matrices into plotting tables", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CommonArgs {
    /// Directory holding the `loop-free-NN` and `random-N` matrices
    #[arg(short, long, env = "SUCCESS_TABLES_INPUT_DIR", default_value = ".")]
    input_dir: PathBuf,

    /// Directory the `.data` tables are written to
    #[arg(short, long, env = "SUCCESS_TABLES_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// JSON file describing the methods and their columns
    #[arg(short, long, env = "SUCCESS_TABLES_METHODS")]
    methods: Option<PathBuf>,

    /// Log the full report as JSON once the tables are written
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args)]
struct LoopFreeArgs {
    /// Smallest loop-free instance size
    #[arg(long, default_value_t = 4)]
    loop_free_min: u32,

    /// Largest loop-free instance size
    #[arg(long, default_value_t = 14)]
    loop_free_max: u32,

    /// Fail unless exactly this many loop-free trials were read (e.g. 495)
    #[arg(long)]
    expected_observations: Option<usize>,
}

#[derive(Args)]
struct RandomArgs {
    /// Smallest random instance size
    #[arg(long, default_value_t = 1)]
    random_min: u32,

    /// Largest random instance size
    #[arg(long, default_value_t = 10)]
    random_max: u32,

    /// Statistics used for the random totals table
    #[arg(long, value_enum, default_value_t = TotalsMode::LastSize)]
    totals: TotalsMode,
}

#[derive(Subcommand)]
enum Commands {
    /// Success percentages on the loop-free instances
    LoopFree {
        #[command(flatten)]
        args: LoopFreeArgs,
    },
    /// Mean, median and failure percentages on the random instances
    Random {
        #[command(flatten)]
        args: RandomArgs,
    },
    /// Run both jobs
    All {
        #[command(flatten)]
        loop_free: LoopFreeArgs,

        #[command(flatten)]
        random: RandomArgs,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/success_tables.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("success_tables.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let mut config = base_config(&cli.common)?;

    match cli.command {
        Commands::LoopFree { args } => {
            apply_loop_free(&mut config, &args)?;
            let report = run_loop_free(&config)?;
            if cli.common.json {
                print_json(&report)?;
            }
        }
        Commands::Random { args } => {
            apply_random(&mut config, &args)?;
            let report = run_random(&config)?;
            if cli.common.json {
                print_json(&report)?;
            }
        }
        Commands::All { loop_free, random } => {
            apply_loop_free(&mut config, &loop_free)?;
            apply_random(&mut config, &random)?;
            let loop_free = run_loop_free(&config)?;
            let random = run_random(&config)?;
            if cli.common.json {
                print_json(&loop_free)?;
                print_json(&random)?;
            }
        }
    }

    Ok(())
}

fn base_config(common: &CommonArgs) -> Result<RunConfig> {
    let mut config = RunConfig::with_dirs(&common.input_dir, &common.output_dir);
    if let Some(path) = &common.methods {
        config.methods = MethodTable::load(path)
            .with_context(|| format!("loading method table {}", path.display()))?;
        info!(path = %path.display(), methods = config.methods.len(), "Loaded method table");
    }
    Ok(config)
}

fn apply_loop_free(config: &mut RunConfig, args: &LoopFreeArgs) -> Result<()> {
    config.loop_free_sizes = SizeRange::new(args.loop_free_min, args.loop_free_max)?;
    config.expected_observations = args.expected_observations;
    Ok(())
}

fn apply_random(config: &mut RunConfig, args: &RandomArgs) -> Result<()> {
    config.random_sizes = SizeRange::new(args.random_min, args.random_max)?;
    config.totals_mode = args.totals;
    Ok(())
}

fn run_loop_free(config: &RunConfig) -> Result<LoopFreeReport> {
    let report = aggregate_loop_free(config).context("loop-free aggregation failed")?;
    for total in report.totals() {
        info!(
            method = total.method(),
            success = total.success_percent(),
            "Loop-free total"
        );
    }
    info!(
        sizes = report.sizes().len(),
        observations = report.observations(),
        "Loop-free tables written"
    );
    Ok(report)
}

fn run_random(config: &RunConfig) -> Result<RandomReport> {
    let report = aggregate_random(config).context("random aggregation failed")?;
    for total in report.written_totals() {
        info!(
            method = total.method(),
            success = total.success_percent(),
            "Random total"
        );
    }
    info!(sizes = report.sizes().len(), "Random tables written");
    Ok(report)
}

//! strdist - Strings Distance Automation
//!
//! Command-line entry point: reads host arguments, scores them, and prints
//! the result envelope on stdout.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use strdist::args::{COMPARE_STRING_KEY, DISTANCE_KEY, INPUT_STRING_KEY};
use strdist::config::{config_path, Config};
use strdist::entry::Entry;
use strdist::handler::{self, Invocation};
use strdist::{audit, CostModel, DistanceScorer};
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Host result envelope as JSON
    Json,
    /// Human-readable markdown table
    Markdown,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Reference string to compare against
    #[arg(short, long)]
    input: Option<String>,

    /// Comparison string(s); each value may be a comma-separated list
    #[arg(short, long)]
    compare: Vec<String>,

    /// Closeness threshold (default 3)
    #[arg(short, long)]
    distance: Option<String>,

    /// Use the legacy cost rule that charges 1 even for matching characters
    #[arg(long)]
    legacy_cost: bool,

    /// Read the host argument map (JSON) from a file, or `-` for stdin
    #[arg(long = "args", value_name = "PATH")]
    args_file: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the audit log even when enabled in config
    #[arg(long)]
    no_audit: bool,

    /// Write the effective config to the config path and exit
    #[arg(long)]
    init_config: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let config_file = args.config.clone().unwrap_or_else(config_path);
    let (config, config_problem) = Config::load_from(&config_file)?;

    // Setup logging
    let level = if args.verbose {
        Level::DEBUG
    } else {
        config.log_level.parse().unwrap_or(Level::INFO)
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Some(problem) = config_problem {
        warn!(
            "⚠️ Config file {} corrupted or invalid, using defaults: {}",
            config_file.display(),
            problem
        );
    }
    debug!("strdist v{} using {}", env!("CARGO_PKG_VERSION"), config_file.display());

    if args.init_config {
        config.save_to(&config_file)?;
        info!("✅ Wrote config to {}", config_file.display());
        return Ok(ExitCode::SUCCESS);
    }

    let host_args = build_host_args(&args)?;

    let mut scorer = DistanceScorer::from_config(&config);
    if args.legacy_cost {
        scorer.cost_model = CostModel::Legacy;
    }
    if scorer.cost_model == CostModel::Legacy {
        info!("Using legacy cost rule: matching characters are not free");
    }

    let invocation = handler::handle(&host_args, &scorer);

    if config.audit_enabled && !args.no_audit {
        if let Some(dir) = config_file.parent() {
            if let Err(e) = record_audit(dir, &invocation, scorer.cost_model) {
                warn!("Could not write audit log: {}", e);
            }
        }
    }

    let entries = invocation.entries();
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Markdown => {
            for entry in &entries {
                println!("{}", render_markdown(entry));
            }
        }
    }

    Ok(if invocation.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Merge the `--args` map with explicit flags; flags win
fn build_host_args(args: &Args) -> Result<Value> {
    let mut map = match &args.args_file {
        Some(source) => read_args_map(source)?,
        None => Map::new(),
    };

    if let Some(input) = &args.input {
        map.insert(INPUT_STRING_KEY.to_string(), Value::String(input.clone()));
    }
    if !args.compare.is_empty() {
        map.insert(
            COMPARE_STRING_KEY.to_string(),
            Value::String(args.compare.join(",")),
        );
    }
    if let Some(distance) = &args.distance {
        map.insert(DISTANCE_KEY.to_string(), Value::String(distance.clone()));
    }

    Ok(Value::Object(map))
}

fn read_args_map(source: &str) -> Result<Map<String, Value>> {
    let content = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read arguments from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read arguments from {}", source))?
    };

    match serde_json::from_str(&content).context("Arguments are not valid JSON")? {
        Value::Object(map) => Ok(map),
        other => bail!("Arguments must be a JSON object, got {}", other),
    }
}

fn record_audit(dir: &Path, invocation: &Invocation, model: CostModel) -> Result<()> {
    match (&invocation.request, &invocation.outcome) {
        (Some(request), outcome) => audit::log_invocation(dir, request, model, outcome),
        (None, Err(e)) => audit::log(dir, &format!("rejected arguments: {}", e)),
        (None, Ok(_)) => Ok(()),
    }
}

fn render_markdown(entry: &Entry) -> String {
    match (&entry.human_readable, &entry.contents) {
        (Some(text), _) => text.clone(),
        (None, Value::String(text)) => text.clone(),
        (None, other) => other.to_string(),
    }
}

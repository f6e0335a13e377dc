use crate::error::DistanceError;
use crate::scorer::{ComparisonRequest, ComparisonResult};
use crate::utils::CostModel;
use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Write an entry to `audit.log` inside `log_dir`
pub fn log(log_dir: &Path, entry: &str) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let log_path = log_dir.join("audit.log");

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    writeln!(
        file,
        "[{}] {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        entry
    )?;
    Ok(())
}

/// Record the outcome of one scoring invocation
pub fn log_invocation(
    log_dir: &Path,
    request: &ComparisonRequest,
    model: CostModel,
    outcome: &Result<Vec<ComparisonResult>, DistanceError>,
) -> Result<()> {
    log(log_dir, &describe(request, model, outcome))
}

fn describe(
    request: &ComparisonRequest,
    model: CostModel,
    outcome: &Result<Vec<ComparisonResult>, DistanceError>,
) -> String {
    let head = format!(
        "compared {} string(s) to '{}' (threshold {}, {})",
        request.comparisons.len(),
        request.input,
        request.threshold,
        model
    );
    match outcome {
        Ok(results) => {
            let close = results.iter().filter(|r| r.too_close).count();
            format!("{}: {} too close", head, close)
        }
        Err(e) => format!("{} failed: {}", head, e),
    }
}

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use loadprep_cli::pipeline::prepare;
use tracing::info;

pub fn handle(input_zip: &Path, output_csv: &Path) -> Result<()> {
    let start = Instant::now();
    info!(
        "Preparing {} from {}",
        output_csv.display(),
        input_zip.display()
    );
    let summary = prepare(input_zip, output_csv)
        .with_context(|| format!("preparing hourly dataset from {}", input_zip.display()))?;
    info!(
        "Wrote {} hourly rows from {} of {} samples in {:.2?}",
        summary.hours,
        summary.rows_kept,
        summary.rows_read,
        start.elapsed()
    );
    Ok(())
}

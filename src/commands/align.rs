use crate::utils::external_tools::{check_muscle, run_muscle};
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::Result;
use std::path::Path;
use std::time::Duration;

pub fn run(source: &Path, destination: &Path) -> Result<()> {
    check_muscle()?;

    let pb = ProgressBarBuilder::new(format!("Aligning {}", source.display()))
        .with_template("{spinner:.green} [{elapsed_precise}] {msg}")
        .with_tick(Duration::from_millis(200))
        .build()?;
    run_muscle(source, destination)?;
    pb.finish_with_message(format!("Wrote alignment to {}", destination.display()));
    Ok(())
}

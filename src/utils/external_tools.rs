use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

pub fn check_muscle() -> Result<()> {
    Command::new("muscle")
        .arg("-version")
        .output()
        .context("muscle not found. Please install MUSCLE (https://www.drive5.com/muscle/) and ensure it's in your PATH")
        .map(|_| ())
}

/// Align `source` into `destination` with `muscle -in <source> -out <destination>`.
pub fn run_muscle(source: &Path, destination: &Path) -> Result<()> {
    let status = Command::new("muscle")
        .arg("-in")
        .arg(source)
        .arg("-out")
        .arg(destination)
        .status()
        .with_context(|| format!("Failed to run muscle on {}", source.display()))?;
    if !status.success() {
        bail!("muscle exited with {} while aligning {}", status, source.display());
    }
    Ok(())
}

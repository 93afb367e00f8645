use super::open_source;
use crate::describe::{describe, SummaryReport};
use crate::types::{FileFormat, ReportFormat};
use crate::utils::progress_bar_builder::{track, ProgressBarBuilder};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Describe every file in `files`, one report row each, after a header row.
pub fn run(
    files: &[String],
    input_format: Option<FileFormat>,
    format: ReportFormat,
    width: usize,
    output: Option<&Path>,
) -> Result<()> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Failed to create output file {}", path.display())
        })?)),
        None => Box::new(std::io::stdout().lock()),
    };
    let mut report = SummaryReport::new(sink, format, width);
    report.write_header()?;

    for name in files {
        let source = open_source(name, input_format)?;
        let pb = ProgressBarBuilder::new(format!("Reading {}", source.name())).build()?;
        let records = source
            .open()
            .with_context(|| format!("Failed to read {}", source.name()))?;
        let summary = describe(source.name(), track(records, &pb))
            .with_context(|| format!("Failed to describe {}", source.name()))?;
        pb.finish_and_clear();
        report.write_summary(&summary)?;
    }
    Ok(())
}

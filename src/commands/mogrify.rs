use super::{compressed_writer, transform, write_atomically, write_options};
use crate::config::Config;
use crate::sequence_processor::core::RecordSource;
use crate::sequence_processor::readers::FileSource;
use crate::sequence_processor::TransformOptions;
use crate::types::FileFormat;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

/// Transform each file in place, keeping its compression. A file is only replaced once its whole
/// pipeline has succeeded; the first failure stops the run and leaves that
/// file, and every file after it, untouched.
pub fn run(
    files: &[PathBuf],
    input_format: Option<FileFormat>,
    options: &TransformOptions,
    line_wrap: Option<usize>,
    config: &Config,
) -> Result<()> {
    for path in files {
        let source = FileSource::new(path, input_format)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        let write_options = write_options(source.format(), line_wrap, config);

        info!("Rewriting {} in place", path.display());
        write_atomically(path, config.temp_dir.as_deref(), |file| {
            let sink = compressed_writer(file, source.compression())?;
            transform(options, &source, sink, &write_options)
        })
        .with_context(|| format!("{} was left unchanged", path.display()))?;
    }
    Ok(())
}

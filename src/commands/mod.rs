pub mod align;
pub mod convert;
pub mod info;
pub mod mogrify;

use crate::config::Config;
use crate::sequence_processor::core::{ProcessingStats, RecordSource};
use crate::sequence_processor::readers::{FileSource, OneShotSource};
use crate::sequence_processor::{compose, write_records, TransformOptions, WriteOptions};
use crate::types::FileFormat;
use crate::utils::progress_bar_builder::{track, ProgressBarBuilder};
use anyhow::{Context, Result};
use niffler::compression;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

/// Path name that stands for standard input or standard output.
pub const STDIO: &str = "-";

pub(crate) fn open_source(name: &str, format: Option<FileFormat>) -> Result<Box<dyn RecordSource>> {
    if name == STDIO {
        let format = format.context("Reading from standard input requires --input-format")?;
        return Ok(Box::new(OneShotSource::stdin(format)));
    }
    let source = FileSource::new(Path::new(name), format)
        .with_context(|| format!("Failed to open {}", name))?;
    Ok(Box::new(source))
}

/// A sink over `file` that compresses with `format`. The encoder finishes
/// its stream when the sink is dropped.
pub(crate) fn compressed_writer(file: &File, format: compression::Format) -> Result<Box<dyn Write>> {
    let plain: Box<dyn Write> = Box::new(file.try_clone()?);
    if format == compression::Format::No {
        return Ok(plain);
    }
    niffler::get_writer(plain, format, compression::Level::Six)
        .with_context(|| format!("Cannot write {:?} compressed output", format))
}

/// Explicit wrapping applies as given; the configured default only to FASTA.
pub(crate) fn write_options(format: FileFormat, line_wrap: Option<usize>, config: &Config) -> WriteOptions {
    let line_wrap = line_wrap.or(match format {
        FileFormat::Fasta => config.line_wrap,
        FileFormat::Fastq => None,
    });
    WriteOptions::new(format).with_line_wrap(line_wrap)
}

/// Run the pipeline `options` describe over `source`, writing to `sink`.
pub(crate) fn transform<W: Write>(
    options: &TransformOptions,
    source: &dyn RecordSource,
    sink: W,
    write_options: &WriteOptions,
) -> Result<ProcessingStats> {
    write_options.validate()?;
    let mut pipeline = compose(options, source)
        .with_context(|| format!("Failed to set up transforms for {}", source.name()))?;

    let pb = ProgressBarBuilder::new(format!("Transforming {}", source.name())).build()?;
    write_records(track(pipeline.by_ref(), &pb), sink, write_options)
        .with_context(|| format!("Failed to transform {}", source.name()))?;

    let stats = pipeline.stats();
    pb.finish_with_message(format!(
        "{}: read {}, wrote {}, dropped {}",
        source.name(),
        stats.read,
        stats.written,
        stats.dropped
    ));
    Ok(stats)
}

/// Write `destination` through a temporary file that only replaces it once
/// `write` has succeeded. On failure the destination is left as it was.
pub(crate) fn write_atomically<T>(
    destination: &Path,
    temp_dir: Option<&Path>,
    write: impl FnOnce(&mut File) -> Result<T>,
) -> Result<T> {
    let dir = match temp_dir {
        Some(dir) => dir.to_path_buf(),
        None => match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
    };
    let mut staged = NamedTempFile::new_in(&dir)
        .with_context(|| format!("Failed to create a temporary file in {}", dir.display()))?;

    let value = write(staged.as_file_mut())?;
    staged.as_file_mut().flush()?;

    staged
        .persist(destination)
        .with_context(|| format!("Failed to move output into place at {}", destination.display()))?;
    info!("Wrote {}", destination.display());
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_atomically_keeps_destination_on_failure() {
        let dir = tempdir().unwrap();
        let destination = dir.path().join("out.fasta");
        fs::write(&destination, ">a\nACGT\n").unwrap();

        let result: Result<()> = write_atomically(&destination, None, |file| {
            file.write_all(b">partial\n")?;
            anyhow::bail!("stage failed")
        });
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&destination).unwrap(), ">a\nACGT\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_configured_wrap_only_for_fasta() {
        let config = Config {
            line_wrap: Some(60),
            ..Config::default()
        };
        assert_eq!(write_options(FileFormat::Fasta, None, &config).line_wrap, Some(60));
        assert_eq!(write_options(FileFormat::Fastq, None, &config).line_wrap, None);
        assert_eq!(write_options(FileFormat::Fastq, Some(10), &config).line_wrap, Some(10));
    }

    #[test]
    fn test_stdin_needs_format() {
        assert!(open_source(STDIO, None).is_err());
        assert!(open_source(STDIO, Some(FileFormat::Fasta)).is_ok());
    }
}

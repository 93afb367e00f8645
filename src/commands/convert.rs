use super::{compressed_writer, open_source, transform, write_atomically, write_options, STDIO};
use crate::config::Config;
use crate::sequence_processor::readers::compression_from_path;
use crate::sequence_processor::TransformOptions;
use crate::types::FileFormat;
use anyhow::{Context, Result};
use std::path::Path;

/// Transform `source` into `destination`, either of which may be `-`.
///
/// The output format is `output_format` if given, otherwise guessed from the
/// destination's extension; standard output defaults to the input format.
/// A `.gz`, `.bz2`, `.xz` or `.zst` destination is written compressed.
pub fn run(
    source: &str,
    destination: &str,
    input_format: Option<FileFormat>,
    output_format: Option<FileFormat>,
    options: &TransformOptions,
    line_wrap: Option<usize>,
    config: &Config,
) -> Result<()> {
    let source = open_source(source, input_format)?;

    if destination == STDIO {
        let format = output_format.unwrap_or_else(|| source.format());
        let stdout = std::io::stdout();
        transform(
            options,
            source.as_ref(),
            stdout.lock(),
            &write_options(format, line_wrap, config),
        )?;
        return Ok(());
    }

    let destination = Path::new(destination);
    let format = match output_format {
        Some(format) => format,
        None => FileFormat::from_path(destination)
            .with_context(|| format!("Cannot choose an output format for {}", destination.display()))?,
    };
    let write_options = write_options(format, line_wrap, config);
    let compression = compression_from_path(destination);
    write_atomically(destination, config.temp_dir.as_deref(), |file| {
        let sink = compressed_writer(file, compression)?;
        transform(options, source.as_ref(), sink, &write_options)
    })?;
    Ok(())
}

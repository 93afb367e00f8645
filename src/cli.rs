use crate::sequence_processor::options::parse_cut_range;
use crate::sequence_processor::TransformOptions;
use crate::types::{Case, FileFormat, ReportFormat, SortOrder, Transcription, Translation};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Log each transform as it is added, and other debug detail
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log every record a filter drops
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert between sequence formats, applying transforms on the way
    Convert {
        /// Input file, or - for standard input
        source: String,
        /// Output file, or - for standard output
        destination: String,
        /// Input format (default: guessed from the extension)
        #[arg(long)]
        input_format: Option<FileFormat>,
        /// Output format (default: guessed from the extension)
        #[arg(long)]
        output_format: Option<FileFormat>,
        /// Residues per line in FASTA output; 0 disables wrapping
        #[arg(long)]
        line_wrap: Option<usize>,
        #[command(flatten)]
        transforms: TransformArgs,
    },

    /// Transform files in place
    Mogrify {
        /// Files to rewrite
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Input format (default: guessed from the extension)
        #[arg(long)]
        input_format: Option<FileFormat>,
        /// Residues per line in FASTA output; 0 disables wrapping
        #[arg(long)]
        line_wrap: Option<usize>,
        #[command(flatten)]
        transforms: TransformArgs,
    },

    /// Summarise sequence files: length range, mean length, count and
    /// whether they look aligned
    Info {
        /// Files to describe, or - for standard input
        #[arg(required = true)]
        files: Vec<String>,
        /// Input format (default: guessed from the extension)
        #[arg(long)]
        input_format: Option<FileFormat>,
        /// Report layout
        #[arg(long, value_enum, default_value = "tab")]
        format: ReportFormat,
        /// Column width for the align layout (default: from config, 15)
        #[arg(long)]
        width: Option<usize>,
        /// Write the report here instead of standard output
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },

    /// Align sequences with MUSCLE (must be on PATH)
    Align {
        /// Unaligned FASTA input
        source: PathBuf,
        /// Aligned FASTA output
        destination: PathBuf,
    },
}

/// Transform options shared by `convert` and `mogrify`. They always apply in
/// the same order, regardless of the order given on the command line.
#[derive(ClapArgs, Debug, Default)]
pub struct TransformArgs {
    /// Sort records before any other transform
    #[arg(long, value_enum)]
    pub sort: Option<SortOrder>,
    /// Discard sequences longer than this
    #[arg(long)]
    pub max_length: Option<usize>,
    /// Discard sequences shorter than this
    #[arg(long)]
    pub min_length: Option<usize>,
    /// Keep only the first record with each sequence (case-insensitive)
    #[arg(long)]
    pub deduplicate_sequences: bool,
    /// Keep only the first record per taxon, the id text before '|'
    #[arg(long)]
    pub deduplicate_taxa: bool,
    /// Replace '?' and '~' gaps with '-'
    #[arg(long)]
    pub dash_gap: bool,
    /// Drop the description, keeping only the id
    #[arg(long)]
    pub first_name: bool,
    /// Upper-case all residues
    #[arg(long, conflicts_with = "lower")]
    pub upper: bool,
    /// Lower-case all residues
    #[arg(long)]
    pub lower: bool,
    /// Discard sequences made only of gaps
    #[arg(long)]
    pub prune_empty: bool,
    /// Reverse sequences
    #[arg(long)]
    pub reverse: bool,
    /// Reverse complement sequences
    #[arg(long)]
    pub reverse_complement: bool,
    /// Remove gaps
    #[arg(long)]
    pub ungap: bool,
    /// Prepend to every id
    #[arg(long)]
    pub name_prefix: Option<String>,
    /// Append to every id
    #[arg(long)]
    pub name_suffix: Option<String>,
    /// Keep records whose id matches this regex (case-insensitive)
    #[arg(long)]
    pub pattern_include: Option<String>,
    /// Drop records whose id matches this regex (case-insensitive)
    #[arg(long)]
    pub pattern_exclude: Option<String>,
    /// Replace SEARCH with REPLACE in ids and descriptions. REPLACE may use
    /// $1 or ${name}; write ${1} when letters, digits or _ follow the group
    #[arg(long, num_args = 2, value_names = ["SEARCH", "REPLACE"])]
    pub pattern_replace: Option<Vec<String>>,
    /// Keep only the first N records
    #[arg(long, conflicts_with = "tail")]
    pub head: Option<usize>,
    /// Keep only the last N records
    #[arg(long)]
    pub tail: Option<usize>,
    /// Strip a trailing /start-stop range from ids
    #[arg(long)]
    pub strip_range: bool,
    /// Transcribe between DNA and RNA
    #[arg(long, value_enum)]
    pub transcribe: Option<Transcription>,
    /// Translate to protein
    #[arg(long, value_enum)]
    pub translate: Option<Translation>,
    /// Remove columns that are gaps in every sequence
    #[arg(long)]
    pub squeeze: bool,
    /// Keep residues START:END, 1-based and inclusive
    #[arg(long, value_parser = parse_cut_range, value_name = "START:END")]
    pub cut: Option<(usize, usize)>,
}

impl TransformArgs {
    pub fn to_options(&self) -> TransformOptions {
        let case = if self.upper {
            Some(Case::Upper)
        } else if self.lower {
            Some(Case::Lower)
        } else {
            None
        };
        let pattern_replace = self.pattern_replace.as_ref().and_then(|values| match values.as_slice() {
            [search, replacement] => Some((search.clone(), replacement.clone())),
            _ => None,
        });

        TransformOptions {
            sort: self.sort,
            max_length: self.max_length,
            min_length: self.min_length,
            deduplicate_sequences: self.deduplicate_sequences,
            deduplicate_taxa: self.deduplicate_taxa,
            dash_gap: self.dash_gap,
            first_name: self.first_name,
            case,
            prune_empty: self.prune_empty,
            reverse: self.reverse,
            reverse_complement: self.reverse_complement,
            ungap: self.ungap,
            name_prefix: self.name_prefix.clone(),
            name_suffix: self.name_suffix.clone(),
            include_pattern: self.pattern_include.clone(),
            exclude_pattern: self.pattern_exclude.clone(),
            pattern_replace,
            head: self.head,
            tail: self.tail,
            strip_range: self.strip_range,
            transcribe: self.transcribe,
            translate: self.translate,
            squeeze: self.squeeze,
            cut: self.cut,
        }
    }
}

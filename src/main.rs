//! seqrealign - FASTA/FASTQ validation and realignment
//!
//! ## Usage
//!
//! ```bash
//! seqrealign <sequence_file>                   # validate and print canonical form
//! seqrealign -a ACGTTG genome.fasta -o out.fa  # rotate every record onto an anchor
//! seqrealign -f fastq reads.txt                # force format
//! ```
//!
//! Set `RUST_LOG=debug` for details on each record.

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{error, info};

use seqrealign::alphabet::Alphabet;
use seqrealign::formats::fasta::records_to_fasta_string;
use seqrealign::formats::fastq::records_to_fastq_string;
use seqrealign::formats::{parse_file_with_options, FileFormat, Records};
use seqrealign::realign::realign_records;

/// File format specification for command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// FASTA format
    Fasta,
    /// FASTQ format
    Fastq,
    /// Auto-detect from extension and content
    Auto,
}

impl From<FormatArg> for Option<FileFormat> {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Fasta => Some(FileFormat::Fasta),
            FormatArg::Fastq => Some(FileFormat::Fastq),
            FormatArg::Auto => None,
        }
    }
}

/// seqrealign - validate FASTA/FASTQ files and realign circular sequences
///
/// Parses the input, then writes it back in canonical form (no trailing
/// newline after the last sequence line).
/// With -a/--anchor, every FASTA record is first rotated so the anchor
/// (or its reverse complement) starts at position 0.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Sequence file (FASTA or FASTQ format)
    file: PathBuf,

    /// Force a specific file format (overrides auto-detection)
    #[arg(short = 'f', long = "format", value_enum, default_value = "auto")]
    format: FormatArg,

    /// Anchor sequence to realign FASTA records on
    #[arg(short = 'a', long = "anchor")]
    anchor: Option<String>,

    /// Omit records whose anchor cannot be found instead of keeping them as-is
    #[arg(long = "drop-unmatched", requires = "anchor")]
    drop_unmatched: bool,

    /// Line width for FASTA output (0 = no wrapping)
    #[arg(short = 'w', long = "width", default_value = "70")]
    width: usize,

    /// Only accept A, C, G and T in sequence data
    #[arg(long = "strict")]
    strict: bool,

    /// Output file. Use "-" or omit for stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

/// Creates a writer for the output option, defaulting to stdout.
fn get_writer(output: &Option<String>) -> Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = match output.as_deref() {
        None | Some("-") => Box::new(BufWriter::new(io::stdout().lock())),
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("could not create {}", path))?,
        )),
    };
    Ok(writer)
}

fn try_main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let args = Args::parse();

    let alphabet = if args.strict { Alphabet::Dna } else { Alphabet::Iupac };
    let records = parse_file_with_options(&args.file, args.format.into(), alphabet)
        .with_context(|| format!("could not parse {}", args.file.display()))?;

    info!(
        "Read {} {} records from {} ({} alphabet)",
        records.len(),
        records.format(),
        args.file.display(),
        alphabet
    );

    let text = match records {
        Records::Fasta(records) => {
            let records = match &args.anchor {
                Some(anchor) => realign_records(records, anchor, args.drop_unmatched),
                None => records,
            };
            records_to_fasta_string(&records, args.width)
        }
        Records::Fastq(records) => {
            if args.anchor.is_some() {
                anyhow::bail!("Cannot realign: FASTQ reads have no circular sequence");
            }
            records_to_fastq_string(&records)
        }
    };

    let mut writer = get_writer(&args.output)?;
    write!(writer, "{}", text)?;
    writer.flush()?;

    if let Some(output) = args.output.as_deref().filter(|o| *o != "-") {
        info!("Wrote output to {}", output);
    }
    Ok(())
}

fn main() {
    if let Err(err) = try_main() {
        error!("{}", err);

        // report any errors that are produced
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));
        std::process::exit(1);
    }
}

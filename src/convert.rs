//! FASTQ → FASTA conversion
//!
//! The conversion is a strict line-position transform: a line's index
//! modulo 4 decides its fate. Headers are re-marked from `@` to `>`,
//! sequence lines pass through byte-for-byte, separator and quality
//! lines vanish. Nothing is parsed and nothing is buffered beyond the
//! current line, so a malformed tail converts as blindly as a good one;
//! the trailing line-count warning is the only hint the operator gets.
//!
//! [`run`] drives a whole invocation: every input is validated up front,
//! then file by file the destination is checked (directory writable,
//! overwrite confirmed) and the input streamed into its `.fasta`
//! sibling. The first failure, anywhere, stops everything.

use std::ffi::CString;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::confirm::Confirmation;
use crate::error::{Fq2FaError, Result};
use crate::io::fasta::FastaLineWriter;
use crate::io::fastq::{FrameReader, LineRole, RECORD_LINES};
use crate::validate;

/// Extension given to output files
pub const OUTPUT_EXTENSION: &str = ".fasta";

/// Per-file conversion summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Input file the conversion read
    pub input: PathBuf,
    /// Output file the conversion wrote
    pub output: PathBuf,
    /// Input lines consumed
    pub lines_read: u64,
    /// Output lines emitted (headers plus sequences)
    pub lines_written: u64,
    /// Complete 4-line records seen
    pub records: u64,
    /// True when the input line count is not a multiple of 4
    pub truncated: bool,
}

/// How a whole invocation ended, short of an error
#[derive(Debug)]
pub enum BatchOutcome {
    /// Every input converted; one report per file, in input order
    Completed(Vec<ConversionReport>),
    /// The operator declined to overwrite `output`; files converted
    /// before the decline remain on disk
    Cancelled {
        /// Output path whose overwrite was declined
        output: PathBuf,
    },
}

/// Readiness of one destination after the overwrite check
#[derive(Debug)]
enum Readiness {
    Proceed,
    Declined,
}

/// Convert every input file, in order, stopping at the first problem.
///
/// All inputs are validated before the first byte of output is written.
/// Then, per file: the destination directory is probed for writability,
/// an existing output file triggers a confirmation through `confirm`,
/// and the input is streamed into its `.fasta` sibling. Progress and
/// warning lines go to stdout as each file finishes.
///
/// A declined overwrite is not an error: the run stops cleanly with
/// [`BatchOutcome::Cancelled`] and outputs already written are kept.
///
/// # Errors
///
/// Any validation failure, an unwritable destination directory, or an
/// I/O failure mid-conversion aborts the whole run; remaining files are
/// not processed.
pub fn run(paths: &[PathBuf], confirm: &mut dyn Confirmation) -> Result<BatchOutcome> {
    validate::validate_paths(paths)?;

    let mut reports = Vec::with_capacity(paths.len());
    for input in paths {
        let output = fasta_output_path(input);
        match prepare_destination(&output, confirm)? {
            Readiness::Proceed => {}
            Readiness::Declined => return Ok(BatchOutcome::Cancelled { output }),
        }

        let report = convert_file(input, &output)?;
        if report.truncated {
            println!(
                "Warning: {} had incomplete records ({} lines).",
                input.display(),
                report.lines_read
            );
        }
        println!("  ✓ {} → {}", input.display(), output.display());
        reports.push(report);
    }

    Ok(BatchOutcome::Completed(reports))
}

/// Compute the output path for an input path.
///
/// The accepted extension (`.fastq` or `.fq`, any letter case) is
/// stripped and `.fasta` appended, so `reads.fq` and `READS.FASTQ` both
/// normalize to a `.fasta` sibling in the same directory. A path without
/// an accepted extension (which validation would have rejected) gets
/// `.fasta` appended to its full name instead.
///
/// # Example
///
/// ```
/// use std::path::{Path, PathBuf};
/// use fq2fa::convert::fasta_output_path;
///
/// assert_eq!(
///     fasta_output_path(Path::new("data/reads.fastq")),
///     PathBuf::from("data/reads.fasta"),
/// );
/// assert_eq!(
///     fasta_output_path(Path::new("READS.FQ")),
///     PathBuf::from("READS.fasta"),
/// );
/// ```
pub fn fasta_output_path(input: &Path) -> PathBuf {
    if let Some(name) = input.file_name().and_then(|name| name.to_str()) {
        for ext in validate::ACCEPTED_EXTENSIONS {
            if validate::ends_with_ignore_ascii_case(name, ext) {
                let stem = &name[..name.len() - ext.len()];
                return input.with_file_name(format!("{}{}", stem, OUTPUT_EXTENSION));
            }
        }
    }
    let mut fallback = input.as_os_str().to_os_string();
    fallback.push(OUTPUT_EXTENSION);
    PathBuf::from(fallback)
}

/// Stream framed FASTQ lines into a FASTA sink.
///
/// Returns the number of input lines consumed. Header and sequence
/// lines are written the moment they are read; separator and quality
/// lines are dropped. The caller decides what a non-multiple-of-4 line
/// count means.
///
/// # Errors
///
/// Propagates the first I/O error from either side.
pub fn convert_stream<R: BufRead, W: Write>(
    mut frames: FrameReader<R>,
    writer: &mut FastaLineWriter<W>,
) -> io::Result<u64> {
    for framed in &mut frames {
        let framed = framed?;
        match framed.role {
            LineRole::Header => writer.write_header_from_fastq(&framed.bytes)?,
            LineRole::Sequence => writer.write_sequence(&framed.bytes)?,
            LineRole::Separator | LineRole::Quality => {}
        }
    }
    Ok(frames.lines_read())
}

/// Convert a single validated input file into `output`.
///
/// The input is reopened from the start (validation's sniff used its own
/// handle), the output is created or truncated, and both handles are
/// released before this returns.
///
/// # Errors
///
/// [`Fq2FaError::Io`] naming the output for create and flush failures,
/// and the input for any failure while streaming, whether the read or
/// the write side raised it.
pub fn convert_file(input: &Path, output: &Path) -> Result<ConversionReport> {
    let frames = FrameReader::from_path(input).map_err(|e| Fq2FaError::Io {
        path: input.to_path_buf(),
        source: e,
    })?;
    let mut writer = FastaLineWriter::create(output).map_err(|e| Fq2FaError::Io {
        path: output.to_path_buf(),
        source: e,
    })?;

    let lines_read = convert_stream(frames, &mut writer).map_err(|e| Fq2FaError::Io {
        path: input.to_path_buf(),
        source: e,
    })?;
    let lines_written = writer.lines_written();
    writer.finish().map_err(|e| Fq2FaError::Io {
        path: output.to_path_buf(),
        source: e,
    })?;

    Ok(ConversionReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        lines_read,
        lines_written,
        records: lines_read / RECORD_LINES,
        truncated: lines_read % RECORD_LINES != 0,
    })
}

/// Check the destination before any output byte is written.
///
/// An unwritable destination directory fails without prompting. An
/// existing regular file at `output` asks the operator once; the answer
/// decides between overwriting and cancelling the run.
fn prepare_destination(output: &Path, confirm: &mut dyn Confirmation) -> Result<Readiness> {
    let dir = output_directory(output);
    if !directory_is_writable(&dir) {
        return Err(Fq2FaError::UnwritableDirectory { dir });
    }

    if output.is_file() {
        println!(
            "Warning: {} already exists and will be overwritten.",
            output.display()
        );
        let proceed = confirm
            .confirm("Do you want to continue? (y/n): ")
            .map_err(|e| Fq2FaError::Io {
                path: output.to_path_buf(),
                source: e,
            })?;
        if !proceed {
            return Ok(Readiness::Declined);
        }
    }

    Ok(Readiness::Proceed)
}

/// Directory that will receive `output`; a bare filename writes to `.`.
fn output_directory(output: &Path) -> PathBuf {
    match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Probe a directory for write access with access(2).
fn directory_is_writable(dir: &Path) -> bool {
    use std::os::unix::ffi::OsStrExt;

    let c_dir = match CString::new(dir.as_os_str().as_bytes()) {
        Ok(c_dir) => c_dir,
        Err(_) => return false,
    };
    // SAFETY: c_dir is a valid NUL-terminated path for the duration of
    // the call.
    unsafe { libc::access(c_dir.as_ptr(), libc::W_OK) == 0 }
}

//! Input validation
//!
//! Every path given on the command line is vetted before any conversion
//! starts, so a bad third file stops the first file from ever being
//! half-converted. Checks run in a fixed order per file: existence,
//! readability, extension, non-emptiness, then the structural sniff of
//! the first record. The first failure rejects the whole batch.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Fq2FaError, Result};
use crate::io::fastq;

/// Extensions accepted for input files, matched case-insensitively
pub const ACCEPTED_EXTENSIONS: [&str; 2] = [".fastq", ".fq"];

/// Validate every input path, stopping at the first problem.
///
/// All paths are checked before any file is converted; a failure on any
/// entry rejects the whole batch, valid entries included.
///
/// # Errors
///
/// - [`Fq2FaError::NoInputFiles`] when `paths` is empty
/// - the first failing path's error from [`validate_file`] otherwise
pub fn validate_paths(paths: &[PathBuf]) -> Result<()> {
    if paths.is_empty() {
        return Err(Fq2FaError::NoInputFiles);
    }
    for path in paths {
        validate_file(path)?;
    }
    Ok(())
}

/// Run the per-file checks, in order, stopping at the first failure.
///
/// # Errors
///
/// - [`Fq2FaError::NotFound`] if `path` is not an existing regular file
/// - [`Fq2FaError::PermissionDenied`] if the file cannot be opened for
///   reading
/// - [`Fq2FaError::InvalidExtension`] if the filename does not end in
///   `.fastq` or `.fq` (any letter case)
/// - [`Fq2FaError::EmptyFile`] if the file holds zero bytes
/// - [`Fq2FaError::InvalidFormat`] if the first record fails the sniff
/// - [`Fq2FaError::Io`] for any other I/O failure along the way
pub fn validate_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(Fq2FaError::NotFound {
            path: path.to_path_buf(),
        });
    }

    // The open doubles as the readability check; the same handle then
    // serves the size probe and the sniff, and drops before the converter
    // reopens the file from the start.
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            return Err(Fq2FaError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(Fq2FaError::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    if !has_accepted_extension(path) {
        return Err(Fq2FaError::InvalidExtension {
            path: path.to_path_buf(),
        });
    }

    let size = file
        .metadata()
        .map_err(|e| Fq2FaError::Io {
            path: path.to_path_buf(),
            source: e,
        })?
        .len();
    if size == 0 {
        return Err(Fq2FaError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    match fastq::leading_record_violation(BufReader::new(file)) {
        Ok(None) => Ok(()),
        Ok(Some(violation)) => Err(Fq2FaError::InvalidFormat {
            path: path.to_path_buf(),
            violation,
        }),
        Err(e) => Err(Fq2FaError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Does the filename end in one of [`ACCEPTED_EXTENSIONS`]?
///
/// Plain suffix comparison, ASCII case-insensitive, anchored to the end
/// of the filename. A bare `fastq` (no dot) does not match.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use fq2fa::validate::has_accepted_extension;
///
/// assert!(has_accepted_extension(Path::new("reads.fastq")));
/// assert!(has_accepted_extension(Path::new("READS.FQ")));
/// assert!(!has_accepted_extension(Path::new("reads.fasta")));
/// assert!(!has_accepted_extension(Path::new("fastq")));
/// ```
pub fn has_accepted_extension(path: &Path) -> bool {
    let name = match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => name,
        None => return false,
    };
    ACCEPTED_EXTENSIONS
        .iter()
        .any(|ext| ends_with_ignore_ascii_case(name, ext))
}

/// ASCII case-insensitive suffix test.
pub(crate) fn ends_with_ignore_ascii_case(name: &str, suffix: &str) -> bool {
    let name = name.as_bytes();
    let suffix = suffix.as_bytes();
    name.len() >= suffix.len() && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

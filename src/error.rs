//! Error types for fq2fa

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fq2fa operations
pub type Result<T> = std::result::Result<T, Fq2FaError>;

/// Structural problems the sniff can find in a file's leading record
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormatViolation {
    /// Fewer than four lines available for the first record
    #[error("first record has fewer than 4 lines")]
    IncompleteRecord,

    /// First line does not start with '@'
    #[error("header line does not start with '@'")]
    MissingHeaderMarker,

    /// Third line does not start with '+'
    #[error("separator line does not start with '+'")]
    MissingSeparatorMarker,
}

/// Error types that can occur in fq2fa
#[derive(Debug, Error)]
pub enum Fq2FaError {
    /// No input files were given on the command line
    #[error("no input files given")]
    NoInputFiles,

    /// Input path is not an existing regular file
    #[error("{} does not exist", .path.display())]
    NotFound {
        /// Path that failed the check
        path: PathBuf,
    },

    /// Input exists but cannot be opened for reading
    #[error("{} exists but cannot be read", .path.display())]
    PermissionDenied {
        /// Path that failed the check
        path: PathBuf,
    },

    /// Output directory refuses writes
    #[error("cannot write to directory {}", .dir.display())]
    UnwritableDirectory {
        /// Directory that failed the write probe
        dir: PathBuf,
    },

    /// Filename does not end in an accepted extension
    #[error("{} does not have a valid '.fastq' or '.fq' extension", .path.display())]
    InvalidExtension {
        /// Path that failed the check
        path: PathBuf,
    },

    /// File holds zero bytes
    #[error("{} is empty", .path.display())]
    EmptyFile {
        /// Path that failed the check
        path: PathBuf,
    },

    /// Leading record failed the structural sniff
    #[error("{} is not valid FASTQ ({})", .path.display(), .violation)]
    InvalidFormat {
        /// Path that failed the sniff
        path: PathBuf,
        /// Which structural rule was broken
        violation: FormatViolation,
    },

    /// I/O failure while validating, reading, or writing a file
    #[error("{}: {}", .path.display(), .source)]
    Io {
        /// File the operation was working on
        path: PathBuf,
        /// Underlying cause
        source: std::io::Error,
    },
}

//! # fq2fa
//!
//! Validate FASTQ sequencing files and convert them to FASTA.
//!
//! The conversion is line-oriented and streaming: each input line's
//! position modulo 4 decides whether it is rewritten (`@header` →
//! `>header`), copied verbatim (sequence), or dropped (separator and
//! quality). Inputs are vetted up front (existence, readability,
//! extension, non-emptiness, and a structural sniff of the first record)
//! before any output file is touched, and an existing output is only
//! overwritten after the operator agrees.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::PathBuf;
//! use fq2fa::{run, BatchOutcome, StdinConfirmation};
//!
//! # fn main() -> fq2fa::Result<()> {
//! let inputs = vec![PathBuf::from("sample.fastq")];
//! let mut confirm = StdinConfirmation;
//!
//! match run(&inputs, &mut confirm)? {
//!     BatchOutcome::Completed(reports) => {
//!         println!("converted {} file(s)", reports.len());
//!     }
//!     BatchOutcome::Cancelled { output } => {
//!         println!("stopped before overwriting {}", output.display());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`validate`]: eager per-file checks, whole batch fails fast
//! - [`io::fastq`]: frame reader and first-record sniff
//! - [`io::fasta`]: byte-verbatim FASTA line writer
//! - [`convert`]: output naming, overwrite guard, streaming conversion
//! - [`confirm`]: injectable operator confirmation
//! - [`error`]: error types

#![warn(missing_docs)]

pub mod confirm;
pub mod convert;
pub mod error;
pub mod io;
pub mod validate;

pub use confirm::{Confirmation, StdinConfirmation};
pub use convert::{
    convert_file, convert_stream, fasta_output_path, run, BatchOutcome, ConversionReport,
};
pub use error::{FormatViolation, Fq2FaError, Result};
pub use validate::{validate_file, validate_paths};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

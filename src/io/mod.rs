//! I/O module: line-oriented FASTQ input and FASTA output
//!
//! Both sides work on raw byte lines with terminators attached, so the
//! conversion can reproduce input bytes verbatim instead of reassembling
//! parsed records.

pub mod fasta;
pub mod fastq;

pub use fasta::FastaLineWriter;
pub use fastq::{FrameReader, FramedLine, LineRole};

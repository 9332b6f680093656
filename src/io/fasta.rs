//! Line-oriented FASTA output
//!
//! # Format
//!
//! FASTA carries one record per two lines:
//!
//! ```text
//! >read_1 description     <- header: '>' + identifier
//! ACGTACGT                <- sequence
//! ```
//!
//! # Architecture
//!
//! [`FastaLineWriter`] works on whole raw lines rather than parsed
//! records: the conversion feeds FASTQ lines straight through, so the
//! writer only rewrites the header marker and copies bytes. Sequence
//! lines are never wrapped, re-terminated, or otherwise touched.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Marker byte opening a FASTA header line
pub const HEADER_MARKER: u8 = b'>';

/// Byte-verbatim FASTA writer fed directly from FASTQ lines
///
/// # Example
///
/// ```
/// use fq2fa::io::fasta::FastaLineWriter;
///
/// # fn main() -> std::io::Result<()> {
/// let mut writer = FastaLineWriter::new(Vec::new());
/// writer.write_header_from_fastq(b"@r1\n")?;
/// writer.write_sequence(b"ACGT\n")?;
/// assert_eq!(writer.into_inner(), b">r1\nACGT\n");
/// # Ok(())
/// # }
/// ```
pub struct FastaLineWriter<W: Write> {
    writer: W,
    lines_written: u64,
}

impl FastaLineWriter<BufWriter<File>> {
    /// Create (or truncate) a FASTA file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> FastaLineWriter<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines_written: 0,
        }
    }

    /// Rewrite a FASTQ header line as a FASTA header line.
    ///
    /// Emits `>` followed by the input line minus its first byte, so the
    /// identifier, any description, and the original line terminator all
    /// carry over verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn write_header_from_fastq(&mut self, line: &[u8]) -> io::Result<()> {
        self.writer.write_all(&[HEADER_MARKER])?;
        if line.len() > 1 {
            self.writer.write_all(&line[1..])?;
        }
        self.lines_written += 1;
        Ok(())
    }

    /// Copy a sequence line through unchanged, terminator included.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn write_sequence(&mut self, line: &[u8]) -> io::Result<()> {
        self.writer.write_all(line)?;
        self.lines_written += 1;
        Ok(())
    }

    /// Number of lines written so far.
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Consume the writer and return the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Flush all buffered data.
    ///
    /// Must be called once writing is done; dropping the writer without
    /// finishing can lose buffered bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush fails.
    pub fn finish(mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_header_rewrite_drops_the_marker() {
        let mut writer = FastaLineWriter::new(Vec::new());
        writer.write_header_from_fastq(b"@read_1 lane=3\n").unwrap();
        assert_eq!(writer.into_inner(), b">read_1 lane=3\n");
    }

    #[test]
    fn test_header_rewrite_keeps_crlf() {
        let mut writer = FastaLineWriter::new(Vec::new());
        writer.write_header_from_fastq(b"@r1\r\n").unwrap();
        assert_eq!(writer.into_inner(), b">r1\r\n");
    }

    #[test]
    fn test_header_rewrite_of_bare_marker() {
        // A header of just "@" (no identifier, no terminator) still
        // becomes ">"
        let mut writer = FastaLineWriter::new(Vec::new());
        writer.write_header_from_fastq(b"@").unwrap();
        assert_eq!(writer.into_inner(), b">");
    }

    #[test]
    fn test_sequence_passes_through_verbatim() {
        let mut writer = FastaLineWriter::new(Vec::new());
        writer.write_sequence(b"acgtACGTnN\r\n").unwrap();
        writer.write_sequence(b"TTTT").unwrap();
        assert_eq!(writer.into_inner(), b"acgtACGTnN\r\nTTTT");
    }

    #[test]
    fn test_lines_written_counts_both_kinds() {
        let mut writer = FastaLineWriter::new(Vec::new());
        writer.write_header_from_fastq(b"@r1\n").unwrap();
        writer.write_sequence(b"ACGT\n").unwrap();
        writer.write_header_from_fastq(b"@r2\n").unwrap();
        assert_eq!(writer.lines_written(), 3);
    }

    #[test]
    fn test_create_writes_a_real_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.fasta");

        let mut writer = FastaLineWriter::create(&path).unwrap();
        writer.write_header_from_fastq(b"@r1\n").unwrap();
        writer.write_sequence(b"GATTACA\n").unwrap();
        writer.finish().unwrap();

        assert_eq!(fs::read(&path).unwrap(), b">r1\nGATTACA\n");
    }

    #[test]
    fn test_create_truncates_an_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.fasta");
        fs::write(&path, b"previous contents that are much longer\n").unwrap();

        let mut writer = FastaLineWriter::create(&path).unwrap();
        writer.write_header_from_fastq(b"@r1\n").unwrap();
        writer.finish().unwrap();

        assert_eq!(fs::read(&path).unwrap(), b">r1\n");
    }
}

//! Streaming FASTQ input
//!
//! # Format
//!
//! FASTQ carries one record per four lines:
//!
//! ```text
//! @read_1 description     <- header: '@' + identifier
//! ACGTACGT                <- sequence
//! +                       <- separator: '+', optionally + identifier
//! IIIIIIII                <- quality (never interpreted here)
//! ```
//!
//! # Architecture
//!
//! [`FrameReader`] streams a file line by line and tags each line with the
//! [`LineRole`] given by its position modulo 4. Lines stay raw bytes with
//! their terminators attached so a consumer can reproduce them verbatim;
//! nothing is decoded and no whole record is ever held in memory.
//!
//! [`leading_record_violation`] is the structural sniff used during
//! validation: it looks at the first four lines only and checks the two
//! frame markers.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::FormatViolation;

/// Number of lines in one FASTQ record
pub const RECORD_LINES: u64 = 4;

/// Marker byte opening a FASTQ header line
pub const HEADER_MARKER: u8 = b'@';

/// Marker byte opening a FASTQ separator line
pub const SEPARATOR_MARKER: u8 = b'+';

/// Role of a line within a FASTQ file, derived from its position
///
/// The role depends only on the line index modulo [`RECORD_LINES`]; the
/// line's content is never consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// Position 0: '@'-prefixed record header
    Header,
    /// Position 1: sequence bases
    Sequence,
    /// Position 2: '+'-prefixed separator
    Separator,
    /// Position 3: quality string
    Quality,
}

impl LineRole {
    /// Classify a zero-based line index.
    ///
    /// # Example
    ///
    /// ```
    /// use fq2fa::io::fastq::LineRole;
    ///
    /// assert_eq!(LineRole::of(0), LineRole::Header);
    /// assert_eq!(LineRole::of(5), LineRole::Sequence);
    /// assert_eq!(LineRole::of(7), LineRole::Quality);
    /// ```
    pub fn of(index: u64) -> LineRole {
        match index % RECORD_LINES {
            0 => LineRole::Header,
            1 => LineRole::Sequence,
            2 => LineRole::Separator,
            _ => LineRole::Quality,
        }
    }
}

/// One raw input line together with its file position and role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramedLine {
    /// Zero-based line index within the file
    pub index: u64,
    /// Role implied by the index modulo 4
    pub role: LineRole,
    /// Raw line bytes, terminator included when the file had one
    pub bytes: Vec<u8>,
}

/// Streaming line reader that tags each line with its frame position
///
/// Lines are read as raw bytes up to and including the `\n` terminator; a
/// final line without one is yielded as-is. `\r\n` endings and a missing
/// trailing newline therefore survive untouched.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use fq2fa::io::fastq::{FrameReader, LineRole};
///
/// let reader = FrameReader::new(Cursor::new("@r1\nACGT\n+\nFFFF\n"));
/// let roles: Vec<LineRole> = reader.map(|line| line.unwrap().role).collect();
/// assert_eq!(
///     roles,
///     [LineRole::Header, LineRole::Sequence, LineRole::Separator, LineRole::Quality],
/// );
/// ```
pub struct FrameReader<R: BufRead> {
    reader: R,
    next_index: u64,
}

impl FrameReader<BufReader<File>> {
    /// Open a file for frame reading.
    pub fn from_path<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> FrameReader<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            next_index: 0,
        }
    }

    /// Number of lines yielded so far.
    pub fn lines_read(&self) -> u64 {
        self.next_index
    }
}

impl<R: BufRead> Iterator for FrameReader<R> {
    type Item = io::Result<FramedLine>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut bytes = Vec::new();
        match self.reader.read_until(b'\n', &mut bytes) {
            Ok(0) => None,
            Ok(_) => {
                let index = self.next_index;
                self.next_index += 1;
                Some(Ok(FramedLine {
                    index,
                    role: LineRole::of(index),
                    bytes,
                }))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Structural sniff of a stream's leading record
///
/// Reads at most four lines and checks the FASTQ frame markers: the first
/// line must start with `@` and the third with `+`. Returns `Ok(None)`
/// when the leading record looks structurally sound, `Ok(Some(_))` naming
/// the first broken rule otherwise. Sequence and quality content is not
/// inspected; this is a check of record framing, not of the whole file.
///
/// # Errors
///
/// Propagates any I/O error raised while reading.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use fq2fa::io::fastq::leading_record_violation;
/// use fq2fa::FormatViolation;
///
/// let ok = leading_record_violation(Cursor::new("@r1\nACGT\n+\nFFFF\n")).unwrap();
/// assert_eq!(ok, None);
///
/// let bad = leading_record_violation(Cursor::new(">r1\nACGT\n+\nFFFF\n")).unwrap();
/// assert_eq!(bad, Some(FormatViolation::MissingHeaderMarker));
/// ```
pub fn leading_record_violation<R: BufRead>(reader: R) -> io::Result<Option<FormatViolation>> {
    let mut frames = FrameReader::new(reader);
    let mut record = Vec::with_capacity(RECORD_LINES as usize);

    for _ in 0..RECORD_LINES {
        match frames.next() {
            Some(Ok(line)) => record.push(line),
            Some(Err(e)) => return Err(e),
            None => return Ok(Some(FormatViolation::IncompleteRecord)),
        }
    }

    if record[0].bytes.first() != Some(&HEADER_MARKER) {
        return Ok(Some(FormatViolation::MissingHeaderMarker));
    }
    if record[2].bytes.first() != Some(&SEPARATOR_MARKER) {
        return Ok(Some(FormatViolation::MissingSeparatorMarker));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Cursor;

    #[test]
    fn test_line_role_cycles_every_four_lines() {
        assert_eq!(LineRole::of(0), LineRole::Header);
        assert_eq!(LineRole::of(1), LineRole::Sequence);
        assert_eq!(LineRole::of(2), LineRole::Separator);
        assert_eq!(LineRole::of(3), LineRole::Quality);
        assert_eq!(LineRole::of(4), LineRole::Header);
        assert_eq!(LineRole::of(402), LineRole::Separator);
    }

    #[test]
    fn test_frame_reader_keeps_terminators() {
        let input = "@r1\r\nACGT\n+\nFFFF";
        let lines: Vec<FramedLine> = FrameReader::new(Cursor::new(input))
            .collect::<io::Result<Vec<_>>>()
            .unwrap();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].bytes, b"@r1\r\n");
        assert_eq!(lines[1].bytes, b"ACGT\n");
        assert_eq!(lines[2].bytes, b"+\n");
        // Last line had no terminator; none is invented
        assert_eq!(lines[3].bytes, b"FFFF");
    }

    #[test]
    fn test_frame_reader_indexes_lines_in_order() {
        let input = "@r1\nACGT\n+\nFFFF\n@r2\nTTTT\n";
        let mut reader = FrameReader::new(Cursor::new(input));

        let mut indexes = Vec::new();
        for line in &mut reader {
            indexes.push(line.unwrap().index);
        }
        assert_eq!(indexes, [0, 1, 2, 3, 4, 5]);
        assert_eq!(reader.lines_read(), 6);
    }

    #[test]
    fn test_frame_reader_empty_input() {
        let mut reader = FrameReader::new(Cursor::new(""));
        assert!(reader.next().is_none());
        assert_eq!(reader.lines_read(), 0);
    }

    #[test]
    fn test_sniff_accepts_well_formed_record() {
        let result = leading_record_violation(Cursor::new("@r1\nACGT\n+\nFFFF\n")).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_sniff_accepts_separator_with_identifier() {
        let result = leading_record_violation(Cursor::new("@r1\nACGT\n+r1\nFFFF\n")).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_sniff_rejects_short_file() {
        let result = leading_record_violation(Cursor::new("@r1\nACGT\n")).unwrap();
        assert_eq!(result, Some(FormatViolation::IncompleteRecord));
    }

    #[test]
    fn test_sniff_rejects_missing_header_marker() {
        let result = leading_record_violation(Cursor::new(">r1\nACGT\n+\nFFFF\n")).unwrap();
        assert_eq!(result, Some(FormatViolation::MissingHeaderMarker));
    }

    #[test]
    fn test_sniff_rejects_blank_header_line() {
        let result = leading_record_violation(Cursor::new("\nACGT\n+\nFFFF\n")).unwrap();
        assert_eq!(result, Some(FormatViolation::MissingHeaderMarker));
    }

    #[test]
    fn test_sniff_rejects_missing_separator_marker() {
        let result = leading_record_violation(Cursor::new("@r1\nACGT\n*\nFFFF\n")).unwrap();
        assert_eq!(result, Some(FormatViolation::MissingSeparatorMarker));
    }

    #[test]
    fn test_sniff_reports_header_before_separator() {
        // Both markers are wrong; the header is checked first
        let result = leading_record_violation(Cursor::new(">r1\nACGT\n*\nFFFF\n")).unwrap();
        assert_eq!(result, Some(FormatViolation::MissingHeaderMarker));
    }

    #[test]
    fn test_sniff_ignores_everything_past_the_first_record() {
        let input = "@r1\nACGT\n+\nFFFF\nthis is not fastq at all\n";
        let result = leading_record_violation(Cursor::new(input)).unwrap();
        assert_eq!(result, None);
    }

    // Property-based test for frame-role assignment
    proptest! {
        #[test]
        fn test_roles_cycle_for_any_record_count(n in 1usize..50) {
            let mut input = String::new();
            for i in 0..n {
                input.push_str(&format!("@r{}\nACGT\n+\nFFFF\n", i));
            }

            let lines: Vec<FramedLine> = FrameReader::new(Cursor::new(input))
                .collect::<io::Result<Vec<_>>>()
                .unwrap();
            prop_assert_eq!(lines.len(), n * 4);

            for chunk in lines.chunks(4) {
                let roles: Vec<LineRole> = chunk.iter().map(|line| line.role).collect();
                let expected = vec![
                    LineRole::Header,
                    LineRole::Sequence,
                    LineRole::Separator,
                    LineRole::Quality,
                ];
                prop_assert_eq!(roles, expected);
            }
        }
    }
}

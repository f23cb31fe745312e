use std::fmt;
use std::io::{self, Write};

use tabwriter::TabWriter;

use crate::bom::Bom;

/// Where the CSV data of a buffer begins, and what was skipped to get there.
#[derive(Debug, Clone, PartialEq)]
pub struct DataStart {
    /// Offset of the first data byte in the original buffer.
    pub offset: usize,
    /// Byte-order mark found at the start of the buffer, if BOM detection was enabled.
    pub bom: Option<Bom>,
    /// Number of rows skipped after the BOM (requested rows plus trailing blank and comment
    /// lines).
    pub skipped_rows: usize,
    /// Number of bytes from `offset` to the end of the buffer.
    pub remaining_bytes: usize,
    /// Number of lines from `offset` to the end of the buffer. Only `\n` is counted as a line
    /// break; a final line without one still counts.
    pub remaining_lines: usize,
    /// Whether the bytes from `offset` on are valid UTF-8.
    pub is_utf8: bool,
}

impl DataStart {
    pub(crate) fn new(
        bytes: &[u8],
        offset: usize,
        bom: Option<Bom>,
        skipped_rows: usize,
    ) -> DataStart {
        let data = &bytes[offset..];
        let mut remaining_lines = bytecount::count(data, b'\n');
        if data.last().is_some_and(|&b| b != b'\n') {
            remaining_lines += 1;
        }
        DataStart {
            offset,
            bom,
            skipped_rows,
            remaining_bytes: data.len(),
            remaining_lines,
            is_utf8: simdutf8::basic::from_utf8(data).is_ok(),
        }
    }

    /// The data portion of `bytes`, which must be the buffer this `DataStart` was computed from.
    /// Returns an empty slice if `bytes` is shorter than `offset`.
    pub fn data<'a>(&self, bytes: &'a [u8]) -> &'a [u8] {
        bytes.get(self.offset..).unwrap_or_default()
    }

    fn render(&self) -> io::Result<Vec<u8>> {
        let mut tw = TabWriter::new(vec![]);
        writeln!(tw, "Data start")?;
        writeln!(tw, "==========")?;
        writeln!(tw, "Offset:\t{}", self.offset)?;
        writeln!(tw, "Byte-order mark:\t{}", match self.bom {
            Some(bom) => bom.encoding_name(),
            None => "none",
        })?;
        writeln!(tw, "Skipped rows:\t{}", self.skipped_rows)?;
        writeln!(tw, "Remaining bytes:\t{}", self.remaining_bytes)?;
        writeln!(tw, "Remaining lines:\t{}", self.remaining_lines)?;
        writeln!(tw, "Valid UTF-8?:\t{}", self.is_utf8)?;
        tw.flush()?;
        tw.into_inner()
            .map_err(|err| io::Error::new(err.error().kind(), err.error().to_string()))
    }
}

impl fmt::Display for DataStart {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let out = self.render().map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&out))
    }
}

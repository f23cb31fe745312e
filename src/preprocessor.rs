use std::io::Cursor;
use std::path::Path;

use csv::{Reader, ReaderBuilder};
use tracing::debug;

use crate::bom::{detect_bom, Bom};
use crate::data_start::DataStart;
use crate::error::*;
use crate::skip::RowSkipper;
use crate::source::{MemorySource, Source};

/// Locates the start of CSV data in a buffer: strips a byte-order mark, then skips a number of
/// leading rows along with the blank and comment lines that follow them.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    skip: i64,
    skip_empty_rows: bool,
    comment: Vec<u8>,
    skip_bom: bool,
    has_header_row: bool,
}
impl Default for Preprocessor {
    fn default() -> Preprocessor {
        Preprocessor {
            skip: 0,
            skip_empty_rows: true,
            comment: vec![],
            skip_bom: true,
            has_header_row: true,
        }
    }
}
impl Preprocessor {
    /// Create a new preprocessor. By default it strips a BOM, skips no rows, skips blank lines
    /// and recognizes no comments.
    pub fn new() -> Preprocessor {
        Preprocessor::default()
    }
    /// Number of leading rows to skip. Non-positive values skip none.
    pub fn skip(&mut self, n: i64) -> &mut Preprocessor {
        self.skip = n;
        self
    }
    /// Whether blank lines following the skipped rows are skipped as well.
    pub fn skip_empty_rows(&mut self, yes: bool) -> &mut Preprocessor {
        self.skip_empty_rows = yes;
        self
    }
    /// Specify the comment prefix. Lines starting with it are skipped; an empty prefix disables
    /// comments.
    pub fn comment<C: AsRef<[u8]>>(&mut self, prefix: C) -> &mut Preprocessor {
        self.comment = prefix.as_ref().to_vec();
        self
    }
    /// Whether a leading byte-order mark is detected and skipped.
    pub fn skip_bom(&mut self, yes: bool) -> &mut Preprocessor {
        self.skip_bom = yes;
        self
    }
    /// Whether the first row after the skipped ones is a header row. Only affects the readers
    /// returned by `open_reader` and `open_path`.
    pub fn has_header_row(&mut self, yes: bool) -> &mut Preprocessor {
        self.has_header_row = yes;
        self
    }

    pub fn locate(&self, bytes: &[u8]) -> DataStart {
        self.locate_with(&mut RowSkipper::new(), bytes)
    }

    /// Like `locate`, but skipping through an existing `RowSkipper`, whose count keeps
    /// accumulating. The returned `skipped_rows` only covers this call.
    ///
    /// A byte-order mark is looked for at the start of `bytes` on every call (unless disabled
    /// with `skip_bom(false)`), so `bytes` is expected to be the start of a source. When feeding
    /// later parts of the same source, disable BOM detection so leading bytes such as `FF FE`
    /// are not mistaken for a mark.
    pub fn locate_with(&self, skipper: &mut RowSkipper, bytes: &[u8]) -> DataStart {
        let bom = if self.skip_bom { detect_bom(bytes) } else { None };
        let begin = bom.map_or(0, Bom::len);

        let before = skipper.skipped_rows();
        let offset = begin
            + skipper.skip_lines(&bytes[begin..], self.skip, self.skip_empty_rows, &self.comment);
        let start = DataStart::new(bytes, offset, bom, skipper.skipped_rows() - before);
        debug!(
            offset = start.offset,
            bom = ?start.bom,
            skipped_rows = start.skipped_rows,
            "located data start"
        );
        start
    }

    pub fn locate_source<S: Source + ?Sized>(&self, source: &S) -> DataStart {
        self.locate(source.bytes())
    }

    pub fn locate_path<P: AsRef<Path>>(&self, path: P) -> Result<DataStart> {
        let source = MemorySource::from_path(path)?;
        Ok(self.locate_source(&source))
    }

    /// Open a CSV reader over the data portion of `bytes`.
    ///
    /// A single-byte comment prefix is passed on to the reader, so comment lines further down
    /// in the data are skipped too.
    pub fn open_reader<'a>(&self, bytes: &'a [u8]) -> Reader<&'a [u8]> {
        let start = self.locate(bytes);
        self.reader_builder().from_reader(start.data(bytes))
    }

    /// Load the file at `path` and open a CSV reader over its data portion.
    pub fn open_path<P: AsRef<Path>>(&self, path: P) -> Result<Reader<Cursor<Vec<u8>>>> {
        let mut bytes = MemorySource::from_path(path)?.into_inner();
        let start = self.locate(&bytes);
        bytes.drain(..start.offset);
        Ok(self.reader_builder().from_reader(Cursor::new(bytes)))
    }

    fn reader_builder(&self) -> ReaderBuilder {
        let mut bldr = ReaderBuilder::new();
        bldr.has_headers(self.has_header_row).flexible(true);
        if let [chr] = self.comment.as_slice() {
            bldr.comment(Some(*chr));
        }
        bldr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let pre = Preprocessor::new();
        assert!(pre.skip_bom);
        assert!(pre.skip_empty_rows);
        assert!(pre.has_header_row);
        assert_eq!(pre.skip, 0);
        assert!(pre.comment.is_empty());
    }

    #[test]
    fn bom_is_kept_when_disabled() {
        let start = Preprocessor::new().skip_bom(false).locate(b"\xEF\xBB\xBFa\nb\n");
        assert_eq!(start.bom, None);
        assert_eq!(start.offset, 0);
    }

    #[test]
    fn locate_with_accumulates() {
        let mut skipper = RowSkipper::new();
        let pre = Preprocessor::new().skip(1).clone();
        assert_eq!(pre.locate_with(&mut skipper, b"a\nb\n").skipped_rows, 1);
        assert_eq!(pre.locate_with(&mut skipper, b"c\nd\n").skipped_rows, 1);
        assert_eq!(skipper.skipped_rows(), 2);
    }

    #[test]
    fn continuation_keeps_bom_like_bytes() {
        let mut skipper = RowSkipper::new();
        let first = Preprocessor::new().skip(1).locate_with(&mut skipper, b"\xEF\xBB\xBFh\nx\n");
        assert_eq!(first.bom, Some(Bom::Utf8));
        assert_eq!(first.offset, 5);

        let rest = b"\xFF\xFE,1\n";
        let next = Preprocessor::new().skip_bom(false).locate_with(&mut skipper, rest);
        assert_eq!(next.bom, None);
        assert_eq!(next.offset, 0);
        assert_eq!(skipper.skipped_rows(), 1);
    }
}

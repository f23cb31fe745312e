use memchr::memchr2;
use tracing::trace;

/// Skips leading logical rows of a CSV-like buffer, keeping a running count of every row it has
/// skipped.
///
/// A row ends at `\n`, `\r` or `\r\n`. Terminators between a pair of `"` or `'` characters do not
/// end a row, and a physical line starting with the comment prefix is skipped as a whole, quotes
/// included. Quoting is naive: there is no support for escaped or doubled quotes, so a field such
/// as `"a""b"` toggles the quote state four times.
///
/// One skipper should be used per source; the count accumulates across calls and is only reset
/// by creating a new skipper.
#[derive(Debug, Default, Clone)]
pub struct RowSkipper {
    skipped_rows: usize,
}

impl RowSkipper {
    pub fn new() -> RowSkipper {
        RowSkipper::default()
    }

    /// Total number of rows skipped by every call made through this skipper.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Skip `n` logical rows from the start of `bytes` and return the offset of the first byte
    /// that was not consumed.
    ///
    /// After `n` rows have been consumed, any directly following blank lines (if
    /// `skip_empty_rows` is set) and comment lines (if `comment` is non-empty) are consumed as
    /// well, so the returned offset is the start of the next data line or `bytes.len()`.
    /// Comment lines met while skipping the first `n` rows count towards `n`.
    ///
    /// A non-positive `n` skips no data rows, but blank and comment lines at the start of `bytes`
    /// are still consumed. An unterminated quote runs to the end of `bytes`.
    ///
    /// ```
    /// use qsv_preamble::RowSkipper;
    ///
    /// let data = b"a,b\n\n# comment\ne,f\n";
    /// let mut skipper = RowSkipper::new();
    /// let offset = skipper.skip_lines(data, 1, true, b"#");
    /// assert_eq!(&data[offset..], b"e,f\n");
    /// assert_eq!(skipper.skipped_rows(), 3);
    /// ```
    pub fn skip_lines(
        &mut self,
        bytes: &[u8],
        n: i64,
        skip_empty_rows: bool,
        comment: &[u8],
    ) -> usize {
        let before = self.skipped_rows;
        let is_comment_at = |pos: usize| !comment.is_empty() && bytes[pos..].starts_with(comment);

        let mut remaining = n.max(0);
        let mut pos = 0;
        let mut line_start = true;
        let mut in_quote = false;

        while remaining > 0 && pos < bytes.len() {
            // line_start is only ever set outside of a quote
            if line_start && is_comment_at(pos) {
                pos = line_end(bytes, pos);
                if pos == bytes.len() {
                    // unterminated comment line at the end still counts as a skipped row
                    self.skipped_rows += 1;
                    break;
                }
                pos = past_terminator(bytes, pos);
                remaining -= 1;
                self.skipped_rows += 1;
                continue;
            }
            match bytes[pos] {
                b'"' | b'\'' => {
                    in_quote = !in_quote;
                    line_start = false;
                    pos += 1;
                }
                _ if in_quote => pos += 1,
                b'\n' | b'\r' => {
                    pos = past_terminator(bytes, pos);
                    remaining -= 1;
                    self.skipped_rows += 1;
                    line_start = true;
                }
                _ => {
                    line_start = false;
                    pos += 1;
                }
            }
        }

        // trailing blank and comment lines
        loop {
            match bytes.get(pos) {
                Some(&(b'\n' | b'\r')) if skip_empty_rows => {
                    pos = past_terminator(bytes, pos);
                }
                Some(_) if is_comment_at(pos) => {
                    let end = line_end(bytes, pos);
                    pos = if end < bytes.len() {
                        past_terminator(bytes, end)
                    } else {
                        end
                    };
                }
                _ => break,
            }
            self.skipped_rows += 1;
        }

        trace!(
            requested = n,
            skipped = self.skipped_rows - before,
            offset = pos,
            unterminated_quote = in_quote,
            "skipped leading rows"
        );
        pos
    }
}

/// Offset of the next `\n` or `\r` at or after `pos`, or `bytes.len()` if the line runs to the
/// end.
fn line_end(bytes: &[u8], pos: usize) -> usize {
    memchr2(b'\n', b'\r', &bytes[pos..]).map_or(bytes.len(), |i| pos + i)
}

/// `pos` must point at a terminator byte. A `\r\n` pair is consumed as one line break.
fn past_terminator(bytes: &[u8], pos: usize) -> usize {
    if bytes[pos] == b'\r' && bytes.get(pos + 1) == Some(&b'\n') {
        pos + 2
    } else {
        pos + 1
    }
}

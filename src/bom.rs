//! Unicode byte-order mark detection.
//!
//! Only detection is provided: the bytes following a BOM are left untouched, no transcoding takes
//! place. Recognized signatures
//! (see <https://en.wikipedia.org/wiki/Byte_order_mark#Byte_order_marks_by_encoding>):
//!
//! | Bytes         | Encoding |
//! |---------------|----------|
//! | `00 00 FE FF` | UTF-32BE |
//! | `FF FE 00 00` | UTF-32LE |
//! | `FE FF`       | UTF-16BE |
//! | `FF FE`       | UTF-16LE |
//! | `EF BB BF`    | UTF-8    |

use std::fmt;

/// A recognized byte-order mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bom {
    /// `EF BB BF`
    Utf8,
    /// `FE FF`
    Utf16Be,
    /// `FF FE`
    Utf16Le,
    /// `00 00 FE FF`
    Utf32Be,
    /// `FF FE 00 00`
    Utf32Le,
}

impl Bom {
    /// The exact byte sequence of this mark.
    pub const fn signature(self) -> &'static [u8] {
        match self {
            Bom::Utf8 => &[0xEF, 0xBB, 0xBF],
            Bom::Utf16Be => &[0xFE, 0xFF],
            Bom::Utf16Le => &[0xFF, 0xFE],
            Bom::Utf32Be => &[0x00, 0x00, 0xFE, 0xFF],
            Bom::Utf32Le => &[0xFF, 0xFE, 0x00, 0x00],
        }
    }

    /// Number of bytes the mark occupies.
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(self) -> usize {
        self.signature().len()
    }

    pub const fn encoding_name(self) -> &'static str {
        match self {
            Bom::Utf8 => "UTF-8",
            Bom::Utf16Be => "UTF-16BE",
            Bom::Utf16Le => "UTF-16LE",
            Bom::Utf32Be => "UTF-32BE",
            Bom::Utf32Le => "UTF-32LE",
        }
    }
}

impl fmt::Display for Bom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.encoding_name())
    }
}

/// Detect the byte-order mark at the start of `bytes`, if any.
///
/// `FF FE` is shared by UTF-16LE and UTF-32LE; the four-byte UTF-32LE mark wins when the two
/// following bytes are `00 00`. A buffer too short to hold a full signature never matches it.
pub fn detect_bom(bytes: &[u8]) -> Option<Bom> {
    match bytes {
        [0x00, 0x00, 0xFE, 0xFF, ..] => Some(Bom::Utf32Be),
        [0xEF, 0xBB, 0xBF, ..] => Some(Bom::Utf8),
        [0xFE, 0xFF, ..] => Some(Bom::Utf16Be),
        [0xFF, 0xFE, 0x00, 0x00, ..] => Some(Bom::Utf32Le),
        [0xFF, 0xFE, ..] => Some(Bom::Utf16Le),
        _ => None,
    }
}

/// Returns the offset of the first byte after any byte-order mark at the start of `bytes`, or
/// `0` if there is none.
///
/// ```
/// use qsv_preamble::skip_bom;
///
/// assert_eq!(skip_bom(b"\xEF\xBB\xBFa,b\n"), 3);
/// assert_eq!(skip_bom(b"a,b\n"), 0);
/// ```
pub fn skip_bom(bytes: &[u8]) -> usize {
    detect_bom(bytes).map_or(0, Bom::len)
}

//! Find where the data of a CSV-like buffer begins.
//!
//! Two building blocks are provided: [`skip_bom`] / [`detect_bom`] recognize a leading Unicode
//! byte-order mark, and [`RowSkipper`] skips leading rows while honoring quoted fields and
//! comment lines. [`Preprocessor`] combines both over any [`Source`](source::Source) and can hand
//! the remaining bytes to a `csv::Reader`.
//!
//! ```
//! use qsv_preamble::Preprocessor;
//!
//! let data = b"\xEF\xBB\xBFexported by tool\n# generated\nname,age\nann,31\n";
//! let start = Preprocessor::new().skip(1).comment("#").locate(data);
//! assert_eq!(&data[start.offset..], b"name,age\nann,31\n");
//! assert_eq!(start.skipped_rows, 2);
//! ```

pub mod bom;
pub use bom::{detect_bom, skip_bom, Bom};

mod skip;
pub use skip::RowSkipper;

pub mod source;
pub use source::MemorySource;

mod data_start;
pub use data_start::DataStart;

mod preprocessor;
pub use preprocessor::Preprocessor;

pub mod error;
pub use error::{PreambleError, Result};

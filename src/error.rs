use std::error::Error;
use std::fmt;
use std::io;

/// An error that occurs while loading or handing off CSV data.
///
/// Locating the data start never fails on its own; these errors come from the byte sources
/// (opening or reading a file) and from the `csv` reader the remaining bytes are handed to.
#[derive(Debug)]
pub enum PreambleError {
    /// An I/O error
    Io(io::Error),
    /// A CSV parsing error (from the csv crate)
    Csv(csv::Error),
}

/// A specialized `Result` type for preprocessing operations.
pub type Result<T> = ::std::result::Result<T, PreambleError>;

impl fmt::Display for PreambleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PreambleError::Io(ref err) => write!(f, "IO error: {}", err),
            PreambleError::Csv(ref err) => write!(f, "CSV read error: {}", err),
        }
    }
}

impl Error for PreambleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            PreambleError::Io(ref err) => Some(err),
            PreambleError::Csv(ref err) => Some(err),
        }
    }
}

impl From<io::Error> for PreambleError {
    fn from(err: io::Error) -> PreambleError {
        PreambleError::Io(err)
    }
}
impl From<csv::Error> for PreambleError {
    fn from(err: csv::Error) -> PreambleError {
        PreambleError::Csv(err)
    }
}

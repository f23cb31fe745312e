//! Byte sources to locate CSV data in.
//!
//! A [Source] only has to expose its contents as one contiguous byte range; where the bytes come
//! from (memory, a file, a decompressing reader) is up to the implementation.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::*;

/// A provider of a contiguous, immutable byte range `[0, bytes().len())`.
pub trait Source {
    /// The full contents of this source.
    fn bytes(&self) -> &[u8];

    fn len(&self) -> usize {
        self.bytes().len()
    }

    fn is_empty(&self) -> bool {
        self.bytes().is_empty()
    }
}

impl Source for [u8] {
    fn bytes(&self) -> &[u8] {
        self
    }
}

impl Source for Vec<u8> {
    fn bytes(&self) -> &[u8] {
        self
    }
}

impl<S: Source + ?Sized> Source for &S {
    fn bytes(&self) -> &[u8] {
        (**self).bytes()
    }
}

/// A source that owns its data in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySource {
    data: Vec<u8>,
}

impl MemorySource {
    pub fn from_vec(data: Vec<u8>) -> MemorySource {
        MemorySource { data }
    }

    /// Read an entire file into memory.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<MemorySource> {
        let path = path.as_ref();
        let source = MemorySource::from_reader(File::open(path)?)?;
        debug!(path = %path.display(), len = source.data.len(), "loaded source file");
        Ok(source)
    }

    /// Drain `reader` into memory. Any reader works, including decompressing ones.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<MemorySource> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(MemorySource { data })
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

impl From<Vec<u8>> for MemorySource {
    fn from(data: Vec<u8>) -> MemorySource {
        MemorySource::from_vec(data)
    }
}

impl Source for MemorySource {
    fn bytes(&self) -> &[u8] {
        &self.data
    }
}

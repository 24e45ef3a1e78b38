//! Coordinate-list text codec
//!
//! Reads and writes matrices in the line format
//!
//! ```text
//! rows=<R>
//! cols=<C>
//! (r, c, v)
//! ```
//!
//! File handles live only for the duration of one `load` or `save` call and
//! are closed on every exit path when they drop.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use spmat_core::{Decoded, Decoder, EntryLine, Header, MatrixElement, SparseStore};
use tracing::{debug, trace};

use crate::{Error, Result};

/// Loader and writer for the coordinate-list format
pub struct TextCodec;

impl TextCodec {
    /// Load a matrix from a file
    pub fn load<T: MatrixElement, P: AsRef<Path>>(path: P) -> Result<SparseStore<T>> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading matrix");

        let file = File::open(path).map_err(|source| Error::Io {
            action: "open",
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::read_from(BufReader::new(file))
            .map_err(|err| err.with_path("read", path.to_path_buf()))?;

        debug!(
            path = %path.display(),
            rows = store.nrows(),
            cols = store.ncols(),
            nnz = store.nnz(),
            "matrix loaded"
        );
        Ok(store)
    }

    /// Decode a matrix from any buffered reader
    ///
    /// Decoding stops at the first bad line; the error carries its 1-based
    /// line number.
    pub fn read_from<T: MatrixElement, R: BufRead>(reader: R) -> Result<SparseStore<T>> {
        let mut decoder = Decoder::new();
        let mut lines = 0;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            lines = index + 1;

            match decoder.process_line(&line) {
                Ok(Decoded::ZeroEntry { row, col }) => {
                    trace!(line = lines, row, col, "dropping zero-valued entry");
                }
                Ok(_) => {}
                Err(source) => return Err(Error::at_line(source, lines, &line)),
            }
        }

        decoder
            .finish()
            .map_err(|source| Error::Truncated { lines, source })
    }

    /// Save a matrix to a file, replacing any existing content
    pub fn save<T: MatrixElement, P: AsRef<Path>>(store: &SparseStore<T>, path: P) -> Result<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), nnz = store.nnz(), "saving matrix");

        let file = File::create(path).map_err(|source| Error::Io {
            action: "create",
            path: path.to_path_buf(),
            source,
        })?;
        Self::write_to(store, BufWriter::new(file))
            .map_err(|err| err.with_path("write to", path.to_path_buf()))
    }

    /// Encode a matrix into any writer
    ///
    /// Entries are written in row-major order; the writer is flushed before
    /// returning.
    pub fn write_to<T: MatrixElement, W: Write>(
        store: &SparseStore<T>,
        mut writer: W,
    ) -> Result<()> {
        writeln!(writer, "{}", Header::new(store.nrows(), store.ncols()))?;
        for entry in store.non_zero_entries() {
            writeln!(writer, "{}", EntryLine::from(entry))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Encode a matrix into a string
    pub fn to_text<T: MatrixElement>(store: &SparseStore<T>) -> Result<String> {
        let mut buffer = Vec::new();
        Self::write_to(store, &mut buffer)?;
        String::from_utf8(buffer).map_err(|err| {
            Error::Stream(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
        })
    }
}

use crate::core::models::raw::RawArchive;
use crate::core::models::record::ArchiveRecord;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;

/// Defines the interface for reading and writing archive file formats.
///
/// Reading returns the raw content of a file so that callers decide which
/// validation rules apply. Writing takes a record, which is well-formed by
/// construction.
pub trait ArchiveFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads every array stored in `reader`, in storage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the container cannot be decoded or an array has an
    /// element type that cannot be represented.
    fn read_from<R: Read + Seek>(reader: R) -> Result<RawArchive, Self::Error>;

    /// Writes all arrays of `record` to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the writer reports an I/O error.
    fn write_to<W: Write + Seek>(record: &ArchiveRecord, writer: W) -> Result<(), Self::Error>;

    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<RawArchive, Self::Error> {
        let file = File::open(path)?;
        Self::read_from(BufReader::new(file))
    }

    fn write_to_path<P: AsRef<Path>>(record: &ArchiveRecord, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        Self::write_to(record, BufWriter::new(file))
    }
}

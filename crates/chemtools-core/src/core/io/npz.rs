use crate::core::io::traits::ArchiveFile;
use crate::core::models::array::ArrayData;
use crate::core::models::raw::RawArchive;
use crate::core::models::record::ArchiveRecord;
use crate::engine::config::ValidationConfig;
use crate::engine::error::ValidationError;
use ndarray::{IxDyn, OwnedRepr};
use ndarray_npy::{NpzReader, NpzWriter, ReadNpyError, ReadNpzError, WriteNpzError};
use std::io::{self, Read, Seek, Write};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to read archive: {0}")]
    ReadNpz(#[from] ReadNpzError),
    #[error("Failed to write archive: {0}")]
    WriteNpz(#[from] WriteNpzError),
    #[error("Array '{name}' has an unsupported element type (expected int32, int64, float32 or float64)")]
    UnsupportedElementType {
        name: String,
        #[source]
        source: ReadNpzError,
    },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// The NumPy `.npz` archive format.
pub struct NpzArchive;

impl NpzArchive {
    /// Reads the archive at `path` and validates it into a record.
    pub fn read_record<P: AsRef<Path>>(
        path: P,
        config: &ValidationConfig,
    ) -> Result<ArchiveRecord, ArchiveError> {
        let path = path.as_ref();
        let raw = Self::read_from_path(path)?;
        let record = ArchiveRecord::from_raw(raw, config)?;
        info!(
            "Read {} arrays from '{}'.",
            record.len(),
            path.display()
        );
        Ok(record)
    }
}

fn is_wrong_element_type(err: &ReadNpzError) -> bool {
    matches!(err, ReadNpzError::Npy(ReadNpyError::WrongDescriptor(_)))
}

/// Reads one member, widening 32-bit element types to their 64-bit counterparts.
fn read_entry<R: Read + Seek>(
    reader: &mut NpzReader<R>,
    index: usize,
    name: &str,
) -> Result<ArrayData, ArchiveError> {
    match reader.by_index::<OwnedRepr<i64>, IxDyn>(index) {
        Ok(array) => return Ok(ArrayData::Int(array)),
        Err(e) if is_wrong_element_type(&e) => {}
        Err(e) => return Err(e.into()),
    }
    match reader.by_index::<OwnedRepr<i32>, IxDyn>(index) {
        Ok(array) => return Ok(ArrayData::Int(array.mapv(i64::from))),
        Err(e) if is_wrong_element_type(&e) => {}
        Err(e) => return Err(e.into()),
    }
    match reader.by_index::<OwnedRepr<f64>, IxDyn>(index) {
        Ok(array) => return Ok(ArrayData::Float(array)),
        Err(e) if is_wrong_element_type(&e) => {}
        Err(e) => return Err(e.into()),
    }
    match reader.by_index::<OwnedRepr<f32>, IxDyn>(index) {
        Ok(array) => Ok(ArrayData::Float(array.mapv(f64::from))),
        Err(source) if is_wrong_element_type(&source) => {
            Err(ArchiveError::UnsupportedElementType {
                name: name.to_string(),
                source,
            })
        }
        Err(e) => Err(e.into()),
    }
}

impl ArchiveFile for NpzArchive {
    type Error = ArchiveError;

    fn read_from<R: Read + Seek>(reader: R) -> Result<RawArchive, Self::Error> {
        let mut npz = NpzReader::new(reader)?;
        // Member names come back in storage order with one `.npy` suffix removed.
        let names = npz.names()?;
        let mut raw = RawArchive::new();
        for (index, name) in names.into_iter().enumerate() {
            let data = read_entry(&mut npz, index, &name)?;
            debug!(
                name = name.as_str(),
                dtype = data.dtype_name(),
                shape = ?data.shape(),
                "Read array."
            );
            raw.push(name, data);
        }
        Ok(raw)
    }

    fn write_to<W: Write + Seek>(record: &ArchiveRecord, writer: W) -> Result<(), Self::Error> {
        let mut npz = NpzWriter::new_compressed(writer);
        for array in record.iter() {
            let name = array.key().to_string();
            debug!(name = name.as_str(), shape = ?array.data().shape(), "Writing array.");
            match array.data() {
                ArrayData::Int(a) => npz.add_array(name, a)?,
                ArrayData::Float(a) => npz.add_array(name, a)?,
            }
        }
        let mut writer = npz.finish()?;
        writer.flush()?;
        Ok(())
    }
}

use super::array::{ArrayData, NamedArray};
use super::raw::RawArchive;
use crate::core::keys::{ArchiveKey, CriticalPointKind};
use crate::engine::config::ValidationConfig;
use crate::engine::error::ValidationError;
use crate::engine::report::{ValidationReport, Violation};
use crate::engine::rules::Validator;
use nalgebra::Point3;
use ndarray::{ArrayView1, ArrayView2, Ix1, Ix2};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("duplicate key '{0}'")]
    DuplicateKey(String),
}

/// A set of uniquely keyed arrays produced by one computation.
///
/// Records are immutable: they are assembled once through
/// [`ArchiveRecordBuilder`] or [`ArchiveRecord::from_raw`], and regenerating a
/// quantity means building and writing a new record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArchiveRecord {
    arrays: BTreeMap<String, NamedArray>,
    ignored_keys: Vec<String>,
}

impl ArchiveRecord {
    pub fn builder() -> ArchiveRecordBuilder {
        ArchiveRecordBuilder::new()
    }

    /// Validates a raw archive and turns it into a record.
    ///
    /// Entries with unknown keys that the configuration ignores are dropped
    /// and listed in [`ArchiveRecord::ignored_keys`].
    pub fn from_raw(raw: RawArchive, config: &ValidationConfig) -> Result<Self, ValidationError> {
        let report = Validator::new(config.clone()).validate(&raw);
        if !report.is_valid() {
            return Err(ValidationError::new(report));
        }

        let mut builder = ArchiveRecordBuilder::new();
        for entry in raw.into_entries() {
            let (name, data) = entry.into_parts();
            match name.parse::<ArchiveKey>() {
                Ok(key) => {
                    builder.insert(key, data).map_err(|e| match e {
                        RecordError::DuplicateKey(key) => {
                            let mut report = ValidationReport::default();
                            report.push(Violation::DuplicateKey { key });
                            ValidationError::new(report)
                        }
                    })?;
                }
                Err(_) => builder.ignore(name),
            }
        }
        Ok(builder.build())
    }

    /// Re-runs the validation rules on this record.
    pub fn validate(&self, config: &ValidationConfig) -> ValidationReport {
        Validator::new(config.clone()).validate(&RawArchive::from(self))
    }

    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }

    pub fn contains(&self, key: &ArchiveKey) -> bool {
        self.arrays.contains_key(&key.to_string())
    }

    pub fn get(&self, key: &ArchiveKey) -> Option<&NamedArray> {
        self.arrays.get(&key.to_string())
    }

    /// Looks up an entry by its key string.
    pub fn get_str(&self, key: &str) -> Option<&NamedArray> {
        self.arrays.get(key)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &NamedArray> {
        self.arrays.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &ArchiveKey> {
        self.arrays.values().map(NamedArray::key)
    }

    /// Names of entries dropped while reading because they were outside the vocabulary.
    pub fn ignored_keys(&self) -> &[String] {
        &self.ignored_keys
    }

    fn data(&self, key: &str) -> Option<&ArrayData> {
        self.arrays.get(key).map(NamedArray::data)
    }

    pub fn atomic_numbers(&self) -> Option<ArrayView1<'_, i64>> {
        self.data("nums")?.as_int()?.into_dimensionality::<Ix1>().ok()
    }

    /// Number of atoms, from `nums` or else from `coords`.
    pub fn atom_count(&self) -> Option<usize> {
        self.atomic_numbers()
            .map(|nums| nums.len())
            .or_else(|| self.coordinates().map(|c| c.len()))
    }

    pub fn coordinates(&self) -> Option<Vec<Point3<f64>>> {
        self.point_rows("coords")
    }

    pub fn points(&self) -> Option<Vec<Point3<f64>>> {
        self.point_rows("points")
    }

    pub fn critical_points(&self, kind: CriticalPointKind) -> Option<Vec<Point3<f64>>> {
        self.point_rows(kind.key())
    }

    /// A floating point field as a 1-D view, e.g. `dens` or `nuc_elf`.
    pub fn scalar_field(&self, key: &ArchiveKey) -> Option<ArrayView1<'_, f64>> {
        self.get(key)?
            .data()
            .as_float()?
            .into_dimensionality::<Ix1>()
            .ok()
    }

    fn point_rows(&self, key: &str) -> Option<Vec<Point3<f64>>> {
        let view: ArrayView2<'_, f64> = self
            .data(key)?
            .as_float()?
            .into_dimensionality::<Ix2>()
            .ok()?;
        if view.ncols() != 3 {
            return None;
        }
        Some(
            view.rows()
                .into_iter()
                .map(|row| Point3::new(row[0], row[1], row[2]))
                .collect(),
        )
    }
}

/// Assembles an [`ArchiveRecord`], refusing duplicate keys.
///
/// The builder checks key uniqueness only; shape rules are applied by
/// [`ArchiveRecord::validate`] or when reading through [`ArchiveRecord::from_raw`].
#[derive(Debug, Default)]
pub struct ArchiveRecordBuilder {
    arrays: BTreeMap<String, NamedArray>,
    ignored_keys: Vec<String>,
}

impl ArchiveRecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        key: ArchiveKey,
        data: impl Into<ArrayData>,
    ) -> Result<&mut Self, RecordError> {
        let name = key.to_string();
        if self.arrays.contains_key(&name) {
            return Err(RecordError::DuplicateKey(name));
        }
        self.arrays.insert(name, NamedArray::new(key, data.into()));
        Ok(self)
    }

    pub fn with(mut self, key: ArchiveKey, data: impl Into<ArrayData>) -> Result<Self, RecordError> {
        self.insert(key, data)?;
        Ok(self)
    }

    pub(crate) fn ignore(&mut self, name: String) {
        self.ignored_keys.push(name);
    }

    pub fn build(self) -> ArchiveRecord {
        ArchiveRecord {
            arrays: self.arrays,
            ignored_keys: self.ignored_keys,
        }
    }
}

use super::array::ArrayData;
use super::record::ArchiveRecord;

/// An entry as stored in a file: the name has not been interpreted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    name: String,
    data: ArrayData,
}

impl RawEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &ArrayData {
        &self.data
    }

    pub fn into_parts(self) -> (String, ArrayData) {
        (self.name, self.data)
    }
}

/// The arrays of an archive file in storage order.
///
/// Names may repeat or fall outside the key vocabulary; deciding whether the
/// content forms a valid record is the job of [`crate::engine::rules::Validator`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawArchive {
    entries: Vec<RawEntry>,
}

impl RawArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, data: impl Into<ArrayData>) {
        self.entries.push(RawEntry {
            name: name.into(),
            data: data.into(),
        });
    }

    pub fn with(mut self, name: impl Into<String>, data: impl Into<ArrayData>) -> Self {
        self.push(name, data);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RawEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// The first entry stored under `name`.
    pub fn get(&self, name: &str) -> Option<&ArrayData> {
        self.entries.iter().find(|e| e.name == name).map(|e| &e.data)
    }

    pub fn into_entries(self) -> Vec<RawEntry> {
        self.entries
    }
}

impl From<&ArchiveRecord> for RawArchive {
    fn from(record: &ArchiveRecord) -> Self {
        let mut raw = RawArchive::new();
        for array in record.iter() {
            raw.push(array.key().to_string(), array.data().clone());
        }
        raw
    }
}

use crate::core::io::npz::{ArchiveError, NpzArchive};
use crate::core::io::traits::ArchiveFile;
use crate::core::keys::ArchiveKey;
use crate::core::models::raw::RawArchive;
use serde::{Serialize, Serializer};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// What one stored array is, as far as the key vocabulary can tell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArraySummary {
    pub name: String,
    /// Whether the name parses as a vocabulary key.
    pub known: bool,
    pub description: String,
    #[serde(rename = "dtype")]
    pub element_type: &'static str,
    #[serde(serialize_with = "serialize_shape")]
    pub shape: Vec<usize>,
}

fn serialize_shape<S: Serializer>(shape: &[usize], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_shape(shape))
}

/// NumPy-style shape text, e.g. `(5,)` or `(100, 3)`.
pub fn format_shape(shape: &[usize]) -> String {
    match shape {
        [] => "()".to_string(),
        [n] => format!("({},)", n),
        dims => format!(
            "({})",
            dims.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

pub fn summarize(raw: &RawArchive) -> Vec<ArraySummary> {
    raw.iter()
        .map(|entry| {
            let (known, description) = match entry.name().parse::<ArchiveKey>() {
                Ok(key) => (true, key.describe()),
                Err(e) if e.is_unknown() => (false, String::new()),
                Err(e) => (false, e.to_string()),
            };
            ArraySummary {
                name: entry.name().to_string(),
                known,
                description,
                element_type: entry.data().dtype_name(),
                shape: entry.data().shape().to_vec(),
            }
        })
        .collect()
}

/// Describes every array stored in the archive at `path`.
pub fn run(path: &Path) -> Result<Vec<ArraySummary>, ArchiveError> {
    let raw = NpzArchive::read_from_path(path)?;
    let summaries = summarize(&raw);
    info!(
        "'{}' holds {} array(s), {} outside the vocabulary.",
        path.display(),
        summaries.len(),
        summaries.iter().filter(|s| !s.known).count()
    );
    Ok(summaries)
}

pub fn write_csv<W: Write>(summaries: &[ArraySummary], writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for summary in summaries {
        wtr.serialize(summary)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2, Array3, array};

    fn sample() -> RawArchive {
        RawArchive::new()
            .with("nums", array![8i64, 1, 1])
            .with("hess", Array3::<f64>::zeros((10, 3, 3)))
            .with("nuc_orb_2", Array1::<f64>::zeros(3))
            .with("mo_energies", array![-0.5f64])
            .with("orb_01", Array2::<f64>::zeros((1, 1)))
    }

    #[test]
    fn summaries_describe_known_and_unknown_arrays() {
        let summaries = summarize(&sample());
        assert_eq!(summaries.len(), 5);

        assert!(summaries[0].known);
        assert_eq!(summaries[0].element_type, "int64");
        assert_eq!(summaries[1].shape, vec![10, 3, 3]);
        assert_eq!(
            summaries[2].description,
            "Orbital value for orbital index 2 at the nuclear positions"
        );

        assert!(!summaries[3].known);
        assert!(summaries[3].description.is_empty());

        assert!(!summaries[4].known);
        assert!(summaries[4].description.contains("invalid orbital index"));
    }

    #[test]
    fn shapes_use_numpy_notation() {
        assert_eq!(format_shape(&[]), "()");
        assert_eq!(format_shape(&[5]), "(5,)");
        assert_eq!(format_shape(&[100, 3, 3]), "(100, 3, 3)");
    }

    #[test]
    fn csv_has_a_header_and_one_row_per_array() {
        let summaries = summarize(&RawArchive::new().with("coords", Array2::<f64>::zeros((2, 3))));
        let mut out = Vec::new();
        write_csv(&summaries, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "name,known,description,dtype,shape");
        assert_eq!(lines[1], "coords,true,Cartesian coordinates of the nuclei,float64,\"(2, 3)\"");
    }
}

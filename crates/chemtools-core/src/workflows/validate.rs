use crate::core::io::npz::{ArchiveError, NpzArchive};
use crate::core::io::traits::ArchiveFile;
use crate::engine::config::ValidationConfig;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::report::ValidationReport;
use crate::engine::rules::Validator;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

/// The result of validating one file.
///
/// `result` is `Err` when the file could not be read at all; a readable file
/// with rule violations yields an `Ok` report that is not valid.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<ValidationReport, ArchiveError>,
}

impl FileOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(&self.result, Ok(report) if report.is_valid())
    }
}

/// Reads `path` and applies the rules of `validator` without building a record.
pub fn validate_file(path: &Path, validator: &Validator) -> Result<ValidationReport, ArchiveError> {
    let raw = NpzArchive::read_from_path(path)?;
    Ok(validator.validate(&raw))
}

/// Validates every file in `paths` on the rayon pool.
///
/// Outcomes are returned in input order.
#[instrument(skip_all, name = "validate_workflow", fields(files = paths.len()))]
pub fn run(
    paths: &[PathBuf],
    config: &ValidationConfig,
    reporter: &ProgressReporter,
) -> Vec<FileOutcome> {
    reporter.report(Progress::BatchStart {
        total_files: paths.len() as u64,
    });
    info!("Validating {} archive file(s).", paths.len());

    let validator = Validator::new(config.clone());
    let outcomes: Vec<FileOutcome> = paths
        .par_iter()
        .map(|path| {
            reporter.report(Progress::FileStart { path: path.clone() });
            let result = validate_file(path, &validator);
            let outcome = FileOutcome {
                path: path.clone(),
                result,
            };
            match &outcome.result {
                Ok(report) if report.is_valid() => {}
                Ok(report) => warn!(
                    "'{}' has {} violation(s).",
                    path.display(),
                    report.violations().len()
                ),
                Err(e) => warn!("Could not read '{}': {}", path.display(), e),
            }
            reporter.report(Progress::FileFinish {
                path: path.clone(),
                valid: outcome.is_valid(),
            });
            outcome
        })
        .collect();

    let valid = outcomes.iter().filter(|o| o.is_valid()).count();
    info!("{} of {} file(s) valid.", valid, outcomes.len());
    reporter.report(Progress::BatchFinish);
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::keys::ArchiveKey;
    use crate::core::models::record::ArchiveRecord;
    use crate::engine::config::{UnknownKeyPolicy, ValidationConfigBuilder};
    use crate::engine::report::Violation;
    use ndarray::{Array1, Array2, array};
    use ndarray_npy::NpzWriter;
    use std::fs::File;
    use std::sync::Mutex;
    use tempfile::{TempDir, tempdir};

    fn write_valid(dir: &TempDir, name: &str, atoms: usize) -> PathBuf {
        let path = dir.path().join(name);
        let record = ArchiveRecord::builder()
            .with("nums".parse::<ArchiveKey>().unwrap(), Array1::<i64>::ones(atoms))
            .unwrap()
            .with("coords".parse().unwrap(), Array2::<f64>::zeros((atoms, 3)))
            .unwrap()
            .with("nuc_elf".parse().unwrap(), Array1::<f64>::zeros(atoms))
            .unwrap()
            .build();
        NpzArchive::write_to_path(&record, &path).unwrap();
        path
    }

    fn write_with_extra(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut npz = NpzWriter::new(File::create(&path).unwrap());
        npz.add_array("nums", &array![1i64, 1]).unwrap();
        npz.add_array("mo_energies", &array![-0.6f64, 0.2]).unwrap();
        npz.finish().unwrap();
        path
    }

    #[test]
    fn outcomes_follow_input_order() {
        let dir = tempdir().unwrap();
        let paths = vec![
            write_valid(&dir, "a.npz", 2),
            dir.path().join("missing.npz"),
            write_with_extra(&dir, "b.npz"),
            write_valid(&dir, "c.npz", 7),
        ];

        let outcomes = run(&paths, &ValidationConfig::default(), &ProgressReporter::new());
        let order: Vec<_> = outcomes.iter().map(|o| o.path.clone()).collect();
        assert_eq!(order, paths);

        assert!(outcomes[0].is_valid());
        assert!(matches!(outcomes[1].result, Err(ArchiveError::Io(_))));
        let report = outcomes[2].result.as_ref().unwrap();
        assert_eq!(
            report.violations(),
            &[Violation::UnknownKey {
                key: "mo_energies".into()
            }]
        );
        assert!(outcomes[3].is_valid());
    }

    #[test]
    fn configuration_is_applied_to_every_file() {
        let dir = tempdir().unwrap();
        let paths = vec![write_with_extra(&dir, "x.npz")];
        let config = ValidationConfigBuilder::new()
            .unknown_keys(UnknownKeyPolicy::Ignore)
            .build();

        let outcomes = run(&paths, &config, &ProgressReporter::new());
        let report = outcomes[0].result.as_ref().unwrap();
        assert!(report.is_valid());
        assert_eq!(report.ignored_keys(), &["mo_energies".to_string()]);
    }

    #[test]
    fn progress_is_reported_per_file() {
        let dir = tempdir().unwrap();
        let paths = vec![write_valid(&dir, "a.npz", 1), write_valid(&dir, "b.npz", 3)];
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));

        run(&paths, &ValidationConfig::default(), &reporter);
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert!(matches!(events.first(), Some(Progress::BatchStart { total_files: 2 })));
        assert!(matches!(events.last(), Some(Progress::BatchFinish)));
        let finished = events
            .iter()
            .filter(|e| matches!(e, Progress::FileFinish { valid: true, .. }))
            .count();
        assert_eq!(finished, 2);
    }
}

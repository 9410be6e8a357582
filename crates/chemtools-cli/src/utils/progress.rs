use chemtools::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Drives a file-count progress bar on stderr from validation progress events.
#[derive(Clone)]
pub struct CliProgressHandler {
    bar: Arc<Mutex<ProgressBar>>,
    invalid: Arc<AtomicUsize>,
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr())
            .with_style(Self::files_style());
        bar.finish_and_clear();

        Self {
            bar: Arc::new(Mutex::new(bar)),
            invalid: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let bar = Arc::clone(&self.bar);
        let invalid = Arc::clone(&self.invalid);

        Box::new(move |event: Progress| {
            let Ok(bar) = bar.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match event {
                Progress::BatchStart { total_files } => {
                    invalid.store(0, Ordering::Relaxed);
                    bar.reset();
                    bar.set_length(total_files);
                    bar.set_message("");
                }
                Progress::FileStart { path } => bar.set_message(file_label(&path)),
                Progress::FileFinish { valid, .. } => {
                    if !valid {
                        invalid.fetch_add(1, Ordering::Relaxed);
                    }
                    bar.inc(1);
                }
                Progress::BatchFinish => {
                    let summary = match invalid.load(Ordering::Relaxed) {
                        0 => "✓ all valid".to_string(),
                        n => format!("✗ {} invalid", n),
                    };
                    bar.finish_with_message(summary);
                }
            }
        })
    }

    fn files_style() -> ProgressStyle {
        ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} files {elapsed} {wide_msg}")
            .expect("Failed to create progress bar template")
            .progress_chars("=> ")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::thread;

    #[test]
    fn starts_finished_and_empty() {
        let handler = CliProgressHandler::new();
        let bar = handler.bar.lock().unwrap();
        assert_eq!(bar.length(), Some(0));
        assert!(bar.is_finished());
        assert_eq!(handler.invalid.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn follows_a_batch_of_files() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        callback(Progress::BatchStart { total_files: 2 });
        {
            let bar = handler.bar.lock().unwrap();
            assert_eq!(bar.length(), Some(2));
            assert_eq!(bar.position(), 0);
            assert!(!bar.is_finished());
        }

        callback(Progress::FileStart {
            path: PathBuf::from("/data/water.npz"),
        });
        assert_eq!(handler.bar.lock().unwrap().message(), "water.npz");

        callback(Progress::FileFinish {
            path: PathBuf::from("/data/water.npz"),
            valid: true,
        });
        callback(Progress::FileFinish {
            path: PathBuf::from("/data/broken.npz"),
            valid: false,
        });
        assert_eq!(handler.bar.lock().unwrap().position(), 2);
        assert_eq!(handler.invalid.load(Ordering::Relaxed), 1);

        callback(Progress::BatchFinish);
        let bar = handler.bar.lock().unwrap();
        assert!(bar.is_finished());
        assert_eq!(bar.message(), "✗ 1 invalid");
    }

    #[test]
    fn invalid_files_are_counted_and_the_bar_advances() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        callback(Progress::BatchStart { total_files: 1 });
        callback(Progress::FileStart {
            path: PathBuf::from("broken.npz"),
        });
        callback(Progress::FileFinish {
            path: PathBuf::from("broken.npz"),
            valid: false,
        });
        let bar = handler.bar.lock().unwrap();
        assert_eq!(bar.position(), 1);
        assert_eq!(bar.message(), "broken.npz");
        assert_eq!(handler.invalid.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn a_new_batch_resets_the_invalid_count() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        callback(Progress::BatchStart { total_files: 1 });
        callback(Progress::FileFinish {
            path: PathBuf::from("a.npz"),
            valid: false,
        });
        callback(Progress::BatchStart { total_files: 1 });
        assert_eq!(handler.invalid.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn callback_can_be_used_from_another_thread() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        thread::spawn(move || {
            callback(Progress::BatchStart { total_files: 1 });
            callback(Progress::FileFinish {
                path: PathBuf::from("a.npz"),
                valid: true,
            });
            callback(Progress::BatchFinish);
        })
        .join()
        .unwrap();

        let bar = handler.bar.lock().unwrap();
        assert!(bar.is_finished());
        assert_eq!(bar.message(), "✓ all valid");
    }
}

use crate::cli::ValidateArgs;
use crate::config::PartialConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use chemtools::engine::progress::ProgressReporter;
use chemtools::workflows::validate::{self as workflow, FileOutcome};
use tracing::info;

pub fn run(args: ValidateArgs) -> Result<()> {
    let partial_config = PartialConfig::load(args.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the core validation workflow...");
    let outcomes = workflow::run(&args.archives, &config, &reporter);

    for outcome in &outcomes {
        println!("{}", render_outcome(outcome));
    }

    let invalid = outcomes.iter().filter(|o| !o.is_valid()).count();
    let total = outcomes.len();
    println!("{} of {} archive(s) valid.", total - invalid, total);
    if invalid > 0 {
        return Err(CliError::Invalid { invalid, total });
    }
    Ok(())
}

fn render_outcome(outcome: &FileOutcome) -> String {
    let path = outcome.path.display();
    match &outcome.result {
        Ok(report) if report.is_valid() => {
            let mut line = format!("✓ {}", path);
            if !report.ignored_keys().is_empty() {
                line.push_str(&format!(
                    " (ignored: {})",
                    report.ignored_keys().join(", ")
                ));
            }
            line
        }
        Ok(report) => {
            let mut lines = vec![format!("✗ {}", path)];
            lines.extend(report.violations().iter().map(|v| format!("    - {}", v)));
            lines.join("\n")
        }
        Err(e) => format!("✗ {}\n    - {}", path, e),
    }
}

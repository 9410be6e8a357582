use crate::cli::InspectArgs;
use crate::error::{CliError, Result};
use chemtools::workflows::inspect::{self as workflow, ArraySummary};
use std::io::{self, Write};
use tracing::info;

pub fn run(args: InspectArgs) -> Result<()> {
    info!("Inspecting {:?}", &args.archive);
    let summaries = workflow::run(&args.archive)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.csv {
        workflow::write_csv(&summaries, &mut out).map_err(|e| CliError::Other(e.into()))?;
    } else if summaries.is_empty() {
        writeln!(out, "{} contains no arrays.", args.archive.display())?;
    } else {
        write_table(&summaries, &mut out)?;
    }
    Ok(())
}

fn write_table<W: Write>(summaries: &[ArraySummary], mut out: W) -> io::Result<()> {
    let shapes: Vec<String> = summaries
        .iter()
        .map(|s| workflow::format_shape(&s.shape))
        .collect();
    let name_width = summaries
        .iter()
        .map(|s| s.name.len())
        .chain(std::iter::once("NAME".len()))
        .max()
        .unwrap_or(0);
    let shape_width = shapes
        .iter()
        .map(String::len)
        .chain(std::iter::once("SHAPE".len()))
        .max()
        .unwrap_or(0);

    writeln!(
        out,
        "{:<name_width$}  {:<7}  {:<shape_width$}  DESCRIPTION",
        "NAME", "DTYPE", "SHAPE"
    )?;
    for (summary, shape) in summaries.iter().zip(&shapes) {
        let marker = if summary.known { "" } else { "? " };
        writeln!(
            out,
            "{:<name_width$}  {:<7}  {:<shape_width$}  {}{}",
            summary.name, summary.element_type, shape, marker, summary.description
        )?;
    }
    Ok(())
}

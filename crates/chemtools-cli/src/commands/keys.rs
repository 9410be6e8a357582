use crate::error::Result;
use chemtools::core::keys::{KeySpec, vocabulary};
use std::io::{self, Write};

pub fn run() -> Result<()> {
    let stdout = io::stdout();
    write_vocabulary(vocabulary(), &mut stdout.lock())?;
    Ok(())
}

fn write_vocabulary<W: Write>(specs: &[KeySpec], mut out: W) -> io::Result<()> {
    let width = specs.iter().map(|s| s.pattern.len()).max().unwrap_or(0);
    for spec in specs {
        let nuclear = if spec.nuclear { "nuc_" } else { "" };
        writeln!(
            out,
            "{:<width$}  {:<9}  {:<14}  {:<4}  {}",
            spec.pattern,
            spec.shape.notation(),
            spec.shape.element_type().to_string(),
            nuclear,
            spec.description
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_vocabulary_entry_once() {
        let mut out = Vec::new();
        write_vocabulary(vocabulary(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), vocabulary().len());
        assert!(text.lines().next().unwrap().starts_with("nums "));
        let coords = text.lines().find(|l| l.starts_with("coords ")).unwrap();
        assert!(coords.contains("(N, 3)"));
        assert!(coords.ends_with("Cartesian coordinates of the nuclei"));
        assert!(text.lines().any(|l| l.starts_with("orb_{xx}") && l.contains("nuc_")));
    }
}

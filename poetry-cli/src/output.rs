use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

use poetry_core::{Poem, Report};

/// Writes each poem's rendering on its own line group, with no separators
pub fn write_poems<W: Write>(out: &mut W, poems: &[&Poem]) -> io::Result<()> {
    for poem in poems {
        writeln!(out, "{}", poem)?;
    }
    Ok(())
}

pub fn print_poems(poems: &[&Poem]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_poems(&mut out, poems)?;
    out.flush()?;
    Ok(())
}

/// Prints a report, or saves it when a destination is given
pub fn deliver_report(report: &Report<'_>, destination: Option<&Path>) -> Result<()> {
    match destination {
        Some(path) => {
            report
                .save_to_file(path)
                .with_context(|| format!("Failed to save report to {}", path.display()))?;
            println!("{}", format!("Report saved to {}", path.display()).green());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            report.write_console(&mut out)?;
            out.flush()?;
        }
    }
    Ok(())
}

//! Scripted subcommands
//!
//! Each command loads the collection file (a missing file counts as an empty
//! collection), operates on it, and saves it back only if something changed.

use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use poetry_core::{LoadOutcome, Poem, PoemCollection, ReportCriteria};

use crate::cli::ReportKind;
use crate::output::deliver_report;

/// Loads the collection file; a missing file is an empty collection
pub fn load_collection(file: &Path) -> Result<PoemCollection> {
    let mut collection = PoemCollection::new();
    let outcome = collection
        .load_from_file(file)
        .with_context(|| format!("Failed to load collection from {}", file.display()))?;
    if outcome == LoadOutcome::Missing {
        debug!(file = ?file, "no collection file yet, starting empty");
    }
    Ok(collection)
}

pub fn save_collection(collection: &PoemCollection, file: &Path) -> Result<()> {
    collection
        .save_to_file(file)
        .with_context(|| format!("Failed to save collection to {}", file.display()))
}

/// Appends a poem to the collection file
pub fn add_poem(file: &Path, poem: Poem) -> Result<()> {
    let mut collection = load_collection(file)?;
    collection.add_poem(poem);
    save_collection(&collection, file)
}

/// Deletes the first poem titled exactly `title`
///
/// Returns `false` without rewriting the file when nothing matched.
pub fn delete_poem(file: &Path, title: &str) -> Result<bool> {
    let mut collection = load_collection(file)?;
    if collection.delete_poem(title).is_none() {
        return Ok(false);
    }
    save_collection(&collection, file)?;
    Ok(true)
}

/// Where a report goes: `None` prints it, otherwise the file to write
pub fn report_destination(
    criteria: &ReportCriteria,
    save: bool,
    output: Option<&Path>,
) -> Option<PathBuf> {
    if !save {
        return None;
    }
    Some(
        output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(criteria.default_file_name())),
    )
}

/// Builds a report from the collection file and prints or saves it
///
/// The kind and value are validated before the file is touched.
pub fn generate_report(
    file: &Path,
    kind: ReportKind,
    value: Option<&str>,
    save: bool,
    output: Option<&Path>,
) -> Result<()> {
    let criteria = kind.criteria(value).map_err(|e| anyhow!(e))?;
    let destination = report_destination(&criteria, save, output);

    let collection = load_collection(file)?;
    let report = collection.report(criteria);
    deliver_report(&report, destination.as_deref())
}

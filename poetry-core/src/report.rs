//! Report generation
//!
//! A report is a filtered (or, for the length report, re-sorted) view of the
//! collection. It can be written to the console or saved to a text file.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{PoetryError, Result};
use crate::models::Poem;

/// What a report selects on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportCriteria {
    /// Case-insensitive exact match on title
    Title(String),
    /// Case-insensitive exact match on author
    Author(String),
    /// Case-insensitive exact match on theme
    Theme(String),
    /// Case-insensitive substring of the text
    WordInText(String),
    /// Exact year
    Year(i32),
    /// Every poem, ordered by text length
    Length,
}

impl ReportCriteria {
    /// File name used when a report is saved without an explicit path
    pub fn default_file_name(&self) -> &'static str {
        match self {
            ReportCriteria::Title(_) => "ReportByTitle.txt",
            ReportCriteria::Author(_) => "ReportByAuthor.txt",
            ReportCriteria::Theme(_) => "ReportByTheme.txt",
            ReportCriteria::WordInText(_) => "ReportByWordInText.txt",
            ReportCriteria::Year(_) => "ReportByYear.txt",
            ReportCriteria::Length => "ReportByLength.txt",
        }
    }

    /// Whether a poem belongs in this report
    pub fn matches(&self, poem: &Poem) -> bool {
        match self {
            ReportCriteria::Title(title) => eq_ignore_case(&poem.title, title),
            ReportCriteria::Author(author) => eq_ignore_case(&poem.author, author),
            ReportCriteria::Theme(theme) => eq_ignore_case(&poem.theme, theme),
            ReportCriteria::WordInText(word) => contains_ignore_case(&poem.text, word),
            ReportCriteria::Year(year) => poem.year == *year,
            ReportCriteria::Length => true,
        }
    }
}

impl fmt::Display for ReportCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportCriteria::Title(title) => write!(f, "title \"{}\"", title),
            ReportCriteria::Author(author) => write!(f, "author \"{}\"", author),
            ReportCriteria::Theme(theme) => write!(f, "theme \"{}\"", theme),
            ReportCriteria::WordInText(word) => write!(f, "word in text \"{}\"", word),
            ReportCriteria::Year(year) => write!(f, "year {}", year),
            ReportCriteria::Length => write!(f, "length"),
        }
    }
}

pub(crate) fn eq_ignore_case(value: &str, wanted: &str) -> bool {
    value.to_lowercase() == wanted.to_lowercase()
}

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// The poems selected by a [`ReportCriteria`], in report order
#[derive(Debug, Clone)]
pub struct Report<'a> {
    criteria: ReportCriteria,
    poems: Vec<&'a Poem>,
}

impl<'a> Report<'a> {
    /// Builds a report over `poems`, keeping their order except for the
    /// length report, which is stably sorted by text length.
    pub fn build<I>(criteria: ReportCriteria, poems: I) -> Self
    where
        I: IntoIterator<Item = &'a Poem>,
    {
        let mut selected: Vec<&Poem> = poems
            .into_iter()
            .filter(|p| criteria.matches(p))
            .collect();

        if criteria == ReportCriteria::Length {
            selected.sort_by_key(|p| p.text_length());
        }

        debug!(criteria = %criteria, matched = selected.len(), "generated report");
        Self {
            criteria,
            poems: selected,
        }
    }

    /// The criteria this report was built from
    pub fn criteria(&self) -> &ReportCriteria {
        &self.criteria
    }

    /// Selected poems in report order
    pub fn poems(&self) -> &[&'a Poem] {
        &self.poems
    }

    /// Number of selected poems
    pub fn len(&self) -> usize {
        self.poems.len()
    }

    /// Whether nothing matched
    pub fn is_empty(&self) -> bool {
        self.poems.is_empty()
    }

    /// Text written to a report file: renderings separated by a blank line
    pub fn render_file(&self) -> String {
        self.poems
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Writes the report for console display
    ///
    /// Filter reports leave a blank line after every poem; the length report
    /// lists poems back to back.
    pub fn write_console<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for poem in &self.poems {
            writeln!(out, "{}", poem)?;
            if self.criteria != ReportCriteria::Length {
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// Saves the report to `path`, overwriting any existing file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.render_file()).map_err(|source| PoetryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = ?path, criteria = %self.criteria, "saved report");
        Ok(())
    }
}

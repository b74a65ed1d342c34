use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use poetry_core::{ReportCriteria, DEFAULT_COLLECTION_FILE};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Manage a personal collection of poems")]
pub struct Cli {
    /// Path to the poem collection file
    #[clap(long, env = "POETRY_FILE", default_value = DEFAULT_COLLECTION_FILE)]
    pub file: PathBuf,

    /// Show debug logging on stderr
    #[clap(long, short = 'v')]
    pub verbose: bool,

    /// Disable colored output
    #[clap(long)]
    pub no_color: bool,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the interactive menu (default)
    Menu,

    /// List all poems in the collection file
    List,

    /// Search title, author, text and theme, ignoring case
    Search {
        /// Text to look for
        term: String,
    },

    /// Add a poem to the collection file
    Add {
        #[clap(long)]
        title: String,

        #[clap(long)]
        author: String,

        #[clap(long, allow_hyphen_values = true)]
        year: i32,

        #[clap(long)]
        text: String,

        #[clap(long)]
        theme: String,
    },

    /// Delete the first poem with exactly this title
    Delete {
        /// Title to match, case-sensitive
        title: String,
    },

    /// Generate a report
    Report {
        /// What to report on
        #[clap(value_enum)]
        kind: ReportKind,

        /// Value to match (not used for the length report)
        #[clap(allow_hyphen_values = true)]
        value: Option<String>,

        /// Save the report to a file instead of printing it
        #[clap(long)]
        save: bool,

        /// Report file (defaults to ReportBy<Kind>.txt)
        #[clap(long, short = 'o', requires = "save")]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportKind {
    Title,
    Author,
    Theme,
    Word,
    Year,
    Length,
}

impl ReportKind {
    /// Turns the command-line kind and value into report criteria
    pub fn criteria(self, value: Option<&str>) -> Result<ReportCriteria, String> {
        if self == ReportKind::Length {
            return Ok(ReportCriteria::Length);
        }

        let value = value
            .map(str::to_string)
            .ok_or_else(|| format!("A value is required for the {:?} report", self))?;

        Ok(match self {
            ReportKind::Title => ReportCriteria::Title(value),
            ReportKind::Author => ReportCriteria::Author(value),
            ReportKind::Theme => ReportCriteria::Theme(value),
            ReportKind::Word => ReportCriteria::WordInText(value),
            ReportKind::Year => ReportCriteria::Year(
                value
                    .trim()
                    .parse()
                    .map_err(|_| format!("Invalid year: {}", value))?,
            ),
            ReportKind::Length => ReportCriteria::Length,
        })
    }
}

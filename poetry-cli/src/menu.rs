//! Interactive menu loop
//!
//! The menu owns nothing: `main` builds the collection and lends it here for
//! the lifetime of the loop. Save and Load always use the configured
//! collection file.

use anyhow::{Context, Result};
use colored::Colorize;
use inquire::{InquireError, Select};
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

use poetry_core::{LoadOutcome, PoemCollection, ReportCriteria};

use crate::output::{deliver_report, print_poems};
use crate::prompts;

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    Delete,
    Update,
    Search,
    Save,
    Load,
    List,
    ReportByTitle,
    ReportByAuthor,
    ReportByTheme,
    ReportByWordInText,
    ReportByYear,
    ReportByLength,
    Exit,
}

impl MenuAction {
    /// Every action, in menu order
    pub const ALL: [MenuAction; 14] = [
        MenuAction::Add,
        MenuAction::Delete,
        MenuAction::Update,
        MenuAction::Search,
        MenuAction::Save,
        MenuAction::Load,
        MenuAction::List,
        MenuAction::ReportByTitle,
        MenuAction::ReportByAuthor,
        MenuAction::ReportByTheme,
        MenuAction::ReportByWordInText,
        MenuAction::ReportByYear,
        MenuAction::ReportByLength,
        MenuAction::Exit,
    ];

    /// 1-based position shown in the menu
    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|a| *a == self)
            .map(|i| i + 1)
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Add => "Add Poem",
            MenuAction::Delete => "Delete Poem",
            MenuAction::Update => "Update Poem",
            MenuAction::Search => "Search Poems",
            MenuAction::Save => "Save Collection to File",
            MenuAction::Load => "Load Collection from File",
            MenuAction::List => "List All Poems",
            MenuAction::ReportByTitle => "Generate Report by Title",
            MenuAction::ReportByAuthor => "Generate Report by Author",
            MenuAction::ReportByTheme => "Generate Report by Theme",
            MenuAction::ReportByWordInText => "Generate Report by Word in Text",
            MenuAction::ReportByYear => "Generate Report by Year",
            MenuAction::ReportByLength => "Generate Report by Length",
            MenuAction::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// Runs the menu until Exit or Ctrl-C
pub fn run_menu(collection: &mut PoemCollection, file: &Path) -> Result<()> {
    loop {
        println!("\n{}", "PoetryManagerApp".blue().bold());

        let choice = Select::new("Select an option:", MenuAction::ALL.to_vec())
            .with_page_size(MenuAction::ALL.len())
            .prompt();

        let action = match choice {
            Ok(MenuAction::Exit) => return Ok(()),
            Ok(action) => action,
            Err(InquireError::OperationCanceled) => {
                println!("{}", "Invalid option. Please try again.".yellow());
                continue;
            }
            Err(InquireError::OperationInterrupted) => return Ok(()),
            Err(e) => return Err(e).context("Failed to read menu selection"),
        };

        debug!(?action, "menu action selected");
        if let Err(err) = run_action(action, collection, file) {
            match err.downcast_ref::<InquireError>() {
                Some(InquireError::OperationInterrupted) => return Ok(()),
                Some(InquireError::OperationCanceled) => {
                    println!("{}", "Action cancelled.".yellow());
                }
                _ => {
                    warn!(?action, "menu action failed: {:#}", err);
                    println!("{} {:#}", "Error:".red().bold(), err);
                }
            }
        }
    }
}

fn run_action(action: MenuAction, collection: &mut PoemCollection, file: &Path) -> Result<()> {
    match action {
        MenuAction::Add => {
            let poem = prompts::prompt_new_poem()?;
            collection.add_poem(poem);
            println!("{}", "Poem added.".green());
        }
        MenuAction::Delete => {
            let title = prompts::prompt_existing_title("delete")?;
            collection.delete_poem(&title);
            println!("{}", "Poem deleted.".green());
        }
        MenuAction::Update => {
            let title = prompts::prompt_existing_title("update")?;
            let updated = prompts::prompt_updated_poem()?;
            collection.update_poem(&title, updated);
            println!("{}", "Poem updated.".green());
        }
        MenuAction::Search => {
            let term = prompts::prompt_value("search term")?;
            let results = collection.search_poems(&term);
            println!("{}", "Search results:".blue());
            print_poems(&results)?;
        }
        MenuAction::Save => {
            collection
                .save_to_file(file)
                .with_context(|| format!("Failed to save collection to {}", file.display()))?;
            println!("{}", "Collection saved to file.".green());
        }
        MenuAction::Load => {
            let outcome = collection
                .load_from_file(file)
                .with_context(|| format!("Failed to load collection from {}", file.display()))?;
            match outcome {
                LoadOutcome::Loaded(_) => println!("{}", "Collection loaded from file.".green()),
                LoadOutcome::Missing => println!(
                    "{}",
                    format!("No collection file found at {}.", file.display()).yellow()
                ),
            }
        }
        MenuAction::List => {
            let all: Vec<_> = collection.poems().iter().collect();
            print_poems(&all)?;
        }
        MenuAction::ReportByTitle => {
            let title = prompts::prompt_value("title")?;
            report(collection, ReportCriteria::Title(title))?;
        }
        MenuAction::ReportByAuthor => {
            let author = prompts::prompt_value("author")?;
            report(collection, ReportCriteria::Author(author))?;
        }
        MenuAction::ReportByTheme => {
            let theme = prompts::prompt_value("theme")?;
            report(collection, ReportCriteria::Theme(theme))?;
        }
        MenuAction::ReportByWordInText => {
            let word = prompts::prompt_value("word in text")?;
            report(collection, ReportCriteria::WordInText(word))?;
        }
        MenuAction::ReportByYear => {
            let year = prompts::prompt_year("Enter year:")?;
            report(collection, ReportCriteria::Year(year))?;
        }
        MenuAction::ReportByLength => {
            report(collection, ReportCriteria::Length)?;
        }
        MenuAction::Exit => {}
    }

    Ok(())
}

fn report(collection: &PoemCollection, criteria: ReportCriteria) -> Result<()> {
    let destination = prompts::prompt_report_destination(&criteria)?;
    let report = collection.report(criteria);
    deliver_report(&report, destination.as_deref())
}

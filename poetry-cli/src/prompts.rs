use anyhow::Result;
use inquire::{Confirm, CustomType, Text};
use std::path::PathBuf;

use poetry_core::{Poem, ReportCriteria};

/// Prompts for an integer year, re-asking until the input parses
pub fn prompt_year(message: &str) -> Result<i32> {
    let year = CustomType::<i32>::new(message)
        .with_error_message("Please enter a whole number, e.g. 1850")
        .prompt()?;
    Ok(year)
}

/// Prompts the user for all five fields of a poem
///
/// Any cancelled prompt returns an error before a `Poem` exists, so a
/// half-filled poem never reaches the collection.
fn prompt_poem(field_prefix: &str) -> Result<Poem> {
    let title = Text::new(&format!("{}title:", field_prefix)).prompt()?;
    let author = Text::new(&format!("{}author:", field_prefix)).prompt()?;
    let year = prompt_year(&format!("{}year:", field_prefix))?;
    let text = Text::new(&format!("{}text:", field_prefix)).prompt()?;
    let theme = Text::new(&format!("{}theme:", field_prefix)).prompt()?;

    Ok(Poem::new(title, author, year, text, theme))
}

/// Prompts for a new poem
pub fn prompt_new_poem() -> Result<Poem> {
    prompt_poem("Enter ")
}

/// Prompts for the title of an existing poem
pub fn prompt_existing_title(action: &str) -> Result<String> {
    let title = Text::new(&format!("Enter the title of the poem to {}:", action)).prompt()?;
    Ok(title)
}

/// Prompts for the replacement fields of an update
pub fn prompt_updated_poem() -> Result<Poem> {
    prompt_poem("Enter new ")
}

/// Prompts for a free-text value such as a search term or report filter
pub fn prompt_value(label: &str) -> Result<String> {
    let value = Text::new(&format!("Enter {}:", label)).prompt()?;
    Ok(value)
}

/// Asks whether a report goes to a file, and where
///
/// Returns `None` for console output.
pub fn prompt_report_destination(criteria: &ReportCriteria) -> Result<Option<PathBuf>> {
    let save = Confirm::new("Save report to file?")
        .with_default(false)
        .prompt()?;

    if !save {
        return Ok(None);
    }

    let path = Text::new("Report file:")
        .with_default(criteria.default_file_name())
        .prompt()?;

    let path = path.trim();
    if path.is_empty() {
        Ok(Some(PathBuf::from(criteria.default_file_name())))
    } else {
        Ok(Some(PathBuf::from(path)))
    }
}

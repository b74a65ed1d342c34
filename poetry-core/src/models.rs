use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a single poem in the collection
///
/// The title doubles as the lookup key for delete/update, but nothing
/// prevents two poems from sharing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Poem {
    /// Title of the poem
    #[serde(alias = "title")]
    pub title: String,

    /// Name of the author
    #[serde(alias = "author")]
    pub author: String,

    /// Year the poem was written (not validated, may be zero or negative)
    #[serde(alias = "year")]
    pub year: i32,

    /// Full body of the poem
    #[serde(alias = "text")]
    pub text: String,

    /// Free-form theme tag
    #[serde(alias = "theme")]
    pub theme: String,
}

impl Poem {
    /// Creates a new poem from all five fields
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        text: impl Into<String>,
        theme: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            text: text.into(),
            theme: theme.into(),
        }
    }

    /// Length of the body in characters, not bytes
    pub fn text_length(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for Poem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Year: {}, Theme: {}\nText: {}",
            self.title, self.author, self.year, self.theme, self.text
        )
    }
}

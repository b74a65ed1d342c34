//! The in-memory poem collection
//!
//! `PoemCollection` owns an ordered list of poems. Insertion order is kept for
//! every operation; only the length report hands back a re-sorted view, and
//! it never reorders the collection itself.
//!
//! Mutations look poems up by exact, case-sensitive title and touch only the
//! first match. Searching and reports compare case-insensitively.

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::Poem;
use crate::report::{contains_ignore_case, Report, ReportCriteria};
use crate::storage::Storage;

/// What happened on [`PoemCollection::load_from_file`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read and replaced the collection
    Loaded(usize),
    /// The file does not exist; the collection was left as it was
    Missing,
}

/// Ordered collection of poems with CRUD, search and report operations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoemCollection {
    poems: Vec<Poem>,
}

impl PoemCollection {
    /// Creates an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing list of poems, keeping its order
    pub fn from_poems(poems: Vec<Poem>) -> Self {
        Self { poems }
    }

    /// All poems in collection order
    pub fn poems(&self) -> &[Poem] {
        &self.poems
    }

    /// Number of poems
    pub fn len(&self) -> usize {
        self.poems.len()
    }

    /// Whether the collection has no poems
    pub fn is_empty(&self) -> bool {
        self.poems.is_empty()
    }

    /// Appends a poem. Duplicate titles are allowed.
    pub fn add_poem(&mut self, poem: Poem) {
        debug!(title = %poem.title, "adding poem");
        self.poems.push(poem);
    }

    fn position_of(&self, title: &str) -> Option<usize> {
        self.poems.iter().position(|p| p.title == title)
    }

    /// Removes the first poem titled exactly `title`
    ///
    /// Returns the removed poem, or `None` if nothing matched, in which case
    /// the collection is untouched.
    pub fn delete_poem(&mut self, title: &str) -> Option<Poem> {
        match self.position_of(title) {
            Some(index) => {
                debug!(title, index, "deleting poem");
                Some(self.poems.remove(index))
            }
            None => {
                debug!(title, "delete: no poem with that title");
                None
            }
        }
    }

    /// Replaces the first poem titled exactly `title` with `updated`
    ///
    /// All fields are replaced, title included, so this can rename a poem.
    /// Returns `false` if nothing matched.
    pub fn update_poem(&mut self, title: &str, updated: Poem) -> bool {
        match self.position_of(title) {
            Some(index) => {
                debug!(title, new_title = %updated.title, index, "updating poem");
                self.poems[index] = updated;
                true
            }
            None => {
                debug!(title, "update: no poem with that title");
                false
            }
        }
    }

    /// Poems where `term` appears, ignoring case, in the title, author, text
    /// or theme
    pub fn search_poems(&self, term: &str) -> Vec<&Poem> {
        let results: Vec<&Poem> = self
            .poems
            .iter()
            .filter(|p| {
                contains_ignore_case(&p.title, term)
                    || contains_ignore_case(&p.author, term)
                    || contains_ignore_case(&p.text, term)
                    || contains_ignore_case(&p.theme, term)
            })
            .collect();

        debug!(term, matched = results.len(), "searched poems");
        results
    }

    /// Builds a report for arbitrary criteria
    pub fn report(&self, criteria: ReportCriteria) -> Report<'_> {
        Report::build(criteria, &self.poems)
    }

    /// Poems whose title equals `title`, ignoring case
    pub fn report_by_title(&self, title: &str) -> Report<'_> {
        self.report(ReportCriteria::Title(title.to_string()))
    }

    /// Poems by `author`, ignoring case
    pub fn report_by_author(&self, author: &str) -> Report<'_> {
        self.report(ReportCriteria::Author(author.to_string()))
    }

    /// Poems tagged `theme`, ignoring case
    pub fn report_by_theme(&self, theme: &str) -> Report<'_> {
        self.report(ReportCriteria::Theme(theme.to_string()))
    }

    /// Poems whose text contains `word`, ignoring case
    pub fn report_by_word_in_text(&self, word: &str) -> Report<'_> {
        self.report(ReportCriteria::WordInText(word.to_string()))
    }

    /// Poems from exactly `year`
    pub fn report_by_year(&self, year: i32) -> Report<'_> {
        self.report(ReportCriteria::Year(year))
    }

    /// Every poem, shortest text first; equal lengths keep collection order
    pub fn report_by_length(&self) -> Report<'_> {
        self.report(ReportCriteria::Length)
    }

    /// Writes the whole collection to `path` as an indented JSON array
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        Storage::new(path).save(&self.poems)
    }

    /// Replaces the collection with the contents of `path`
    ///
    /// A missing file leaves the collection as it was. The file is fully
    /// parsed before anything is replaced, so a parse error also leaves the
    /// collection as it was.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadOutcome> {
        match Storage::new(path).load()? {
            Some(poems) => {
                let count = poems.len();
                self.poems = poems;
                Ok(LoadOutcome::Loaded(count))
            }
            None => Ok(LoadOutcome::Missing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PoetryError;
    use std::fs;
    use tempfile::tempdir;

    fn poem(title: &str) -> Poem {
        Poem::new(title, "Author", 2000, format!("text of {title}"), "theme")
    }

    fn titles(poems: &[&Poem]) -> Vec<String> {
        poems.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut collection = PoemCollection::new();
        let added: Vec<Poem> = ["C", "A", "B"].iter().map(|t| poem(t)).collect();
        for p in &added {
            collection.add_poem(p.clone());
        }

        assert_eq!(collection.poems(), added.as_slice());
        assert_eq!(collection.len(), 3);
    }

    #[test]
    fn test_add_allows_duplicate_titles() {
        let mut collection = PoemCollection::new();
        collection.add_poem(poem("X"));
        collection.add_poem(poem("X"));
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_delete_missing_title_is_noop() {
        let mut collection = PoemCollection::from_poems(vec![poem("A"), poem("B")]);
        let before = collection.clone();

        assert!(collection.delete_poem("Z").is_none());
        assert_eq!(collection, before);
    }

    #[test]
    fn test_delete_is_case_sensitive() {
        let mut collection = PoemCollection::from_poems(vec![poem("Dawn")]);
        assert!(collection.delete_poem("dawn").is_none());
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_delete_removes_first_match_only() {
        let p1 = Poem::new("X", "first", 1, "one", "t");
        let p2 = Poem::new("X", "second", 2, "two", "t");
        let mut collection = PoemCollection::from_poems(vec![p1.clone(), p2.clone()]);

        assert_eq!(collection.delete_poem("X"), Some(p1));
        assert_eq!(collection.poems(), &[p2]);
    }

    #[test]
    fn test_update_renames_poem() {
        let mut collection = PoemCollection::from_poems(vec![poem("Old"), poem("Other")]);
        let renamed = Poem::new("New", "Someone", 1999, "fresh words", "change");

        assert!(collection.update_poem("Old", renamed.clone()));
        assert_eq!(collection.poems()[0], renamed);
        assert_eq!(titles(&collection.search_poems("New")), ["New"]);
        assert!(collection.search_poems("Old").is_empty());
    }

    #[test]
    fn test_update_touches_first_match_only() {
        let mut collection = PoemCollection::from_poems(vec![poem("X"), poem("X")]);
        collection.update_poem("X", poem("Y"));

        let all: Vec<&str> = collection.poems().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(all, ["Y", "X"]);
    }

    #[test]
    fn test_update_missing_title_is_noop() {
        let mut collection = PoemCollection::from_poems(vec![poem("A")]);
        let before = collection.clone();

        assert!(!collection.update_poem("Z", poem("B")));
        assert_eq!(collection, before);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let mut collection = PoemCollection::new();
        collection.add_poem(Poem::new("Sonnet", "Will", 1609, "shall I compare", "Love"));
        collection.add_poem(Poem::new("Ode", "John", 1819, "thou still unravish'd", "art"));

        assert_eq!(titles(&collection.search_poems("love")), ["Sonnet"]);
        assert_eq!(titles(&collection.search_poems("LOVE")), ["Sonnet"]);
        assert_eq!(titles(&collection.search_poems("john")), ["Ode"]);
        assert_eq!(titles(&collection.search_poems("COMPARE")), ["Sonnet"]);
        assert_eq!(titles(&collection.search_poems("o")), ["Sonnet", "Ode"]);
        assert!(collection.search_poems("xyz").is_empty());
        assert_eq!(collection.search_poems("").len(), collection.len());
    }

    #[test]
    fn test_year_and_length_reports() {
        let mut collection = PoemCollection::new();
        collection.add_poem(Poem::new("long", "a", 1, "x".repeat(50), "t"));
        collection.add_poem(Poem::new("short", "a", 2, "x".repeat(10), "t"));
        collection.add_poem(Poem::new("mid", "a", 1, "x".repeat(30), "t"));

        assert_eq!(titles(collection.report_by_year(1).poems()), ["long", "mid"]);
        assert_eq!(
            titles(collection.report_by_length().poems()),
            ["short", "mid", "long"]
        );
        // the collection itself is not reordered
        assert_eq!(collection.poems()[0].title, "long");
    }

    #[test]
    fn test_named_reports_use_matching_criteria() {
        let collection = PoemCollection::from_poems(vec![poem("A")]);

        assert_eq!(
            collection.report_by_title("a").criteria(),
            &ReportCriteria::Title("a".into())
        );
        assert_eq!(collection.report_by_author("author").len(), 1);
        assert_eq!(collection.report_by_theme("THEME").len(), 1);
        assert_eq!(collection.report_by_word_in_text("TEXT OF").len(), 1);
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poems.json");

        let original = PoemCollection::from_poems(vec![
            Poem::new("Dawn", "A", 2000, "light rises", "nature"),
            Poem::new("Zero", "B", 0, "", ""),
            Poem::new("Dawn", "C", -12, "again\nwith a newline", "repeat"),
        ]);
        original.save_to_file(&path).unwrap();

        let mut loaded = PoemCollection::new();
        assert_eq!(loaded.load_from_file(&path).unwrap(), LoadOutcome::Loaded(3));
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_load_missing_file_leaves_collection() {
        let dir = tempdir().unwrap();
        let mut collection = PoemCollection::from_poems(vec![poem("A"), poem("B")]);
        let before = collection.clone();

        let outcome = collection
            .load_from_file(dir.path().join("missing.json"))
            .unwrap();

        assert_eq!(outcome, LoadOutcome::Missing);
        assert_eq!(collection, before);
    }

    #[test]
    fn test_load_replaces_collection() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poems.json");
        PoemCollection::from_poems(vec![poem("Saved")])
            .save_to_file(&path)
            .unwrap();

        let mut collection = PoemCollection::from_poems(vec![poem("A"), poem("B")]);
        collection.load_from_file(&path).unwrap();

        assert_eq!(collection.poems(), &[poem("Saved")]);
    }

    #[test]
    fn test_load_malformed_file_keeps_prior_collection() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poems.json");
        let mut collection = PoemCollection::from_poems(vec![poem("A")]);
        let before = collection.clone();

        for content in ["null", "[{\"Title\": \"half\"}]", "{\"Title\": \"A\"}", "[,"] {
            fs::write(&path, content).unwrap();
            let err = collection.load_from_file(&path).unwrap_err();
            assert!(matches!(err, PoetryError::Parse { .. }));
            assert_eq!(collection, before);
        }
    }

    #[test]
    fn test_load_empty_array_empties_collection() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poems.json");
        fs::write(&path, "[]").unwrap();

        let mut collection = PoemCollection::from_poems(vec![poem("A")]);
        assert_eq!(collection.load_from_file(&path).unwrap(), LoadOutcome::Loaded(0));
        assert!(collection.is_empty());
    }
}

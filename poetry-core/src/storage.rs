use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PoetryError, Result};
use crate::models::Poem;

/// Default collection file, resolved against the working directory
pub const DEFAULT_COLLECTION_FILE: &str = "poems.json";

/// Handles saving and loading the poem collection as a single JSON file
///
/// Every call opens, reads or writes the whole file, and closes it again.
/// Nothing is kept open between calls.
#[derive(Debug, Clone)]
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    /// Creates a new Storage instance
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Returns the path to the storage file
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Whether the storage file is present on disk
    pub fn exists(&self) -> bool {
        self.file_path.exists()
    }

    /// Loads poems from the JSON file
    ///
    /// Returns `Ok(None)` when the file does not exist. Anything other than a
    /// JSON array of poem objects is a parse error.
    pub fn load(&self) -> Result<Option<Vec<Poem>>> {
        if !self.exists() {
            debug!(path = ?self.file_path, "collection file not found");
            return Ok(None);
        }

        let content = fs::read_to_string(&self.file_path).map_err(|source| PoetryError::Io {
            path: self.file_path.clone(),
            source,
        })?;

        let poems: Vec<Poem> =
            serde_json::from_str(&content).map_err(|source| PoetryError::Parse {
                path: self.file_path.clone(),
                source,
            })?;

        debug!(path = ?self.file_path, count = poems.len(), "loaded collection");
        Ok(Some(poems))
    }

    /// Saves poems to the JSON file, replacing whatever was there
    pub fn save(&self, poems: &[Poem]) -> Result<()> {
        let json = serde_json::to_string_pretty(poems)?;
        fs::write(&self.file_path, json).map_err(|source| PoetryError::Io {
            path: self.file_path.clone(),
            source,
        })?;

        debug!(path = ?self.file_path, count = poems.len(), "saved collection");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_load_missing_file_returns_none() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path().join("absent.json"));

        assert!(!storage.exists());
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_file = NamedTempFile::new().unwrap();
        let storage = Storage::new(temp_file.path());

        let poems = vec![
            Poem::new("Dawn", "A", 2000, "light rises", "nature"),
            Poem::new("Dusk", "A", 2001, "light fades", "nature"),
        ];
        storage.save(&poems).unwrap();

        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded, poems);
    }

    #[test]
    fn test_save_writes_indented_array() {
        let temp_file = NamedTempFile::new().unwrap();
        let storage = Storage::new(temp_file.path());

        storage
            .save(&[Poem::new("Dawn", "A", 2000, "light rises", "nature")])
            .unwrap();

        let content = fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.starts_with("[\n"));
        assert!(content.contains("  {\n    \"Title\": \"Dawn\""));
    }

    #[test]
    fn test_load_accepts_compact_json() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(
            temp_file.path(),
            r#"[{"Title":"T","Author":"A","Year":-5,"Text":"x","Theme":"y"}]"#,
        )
        .unwrap();

        let loaded = Storage::new(temp_file.path()).load().unwrap().unwrap();
        assert_eq!(loaded, vec![Poem::new("T", "A", -5, "x", "y")]);
    }

    #[test]
    fn test_load_rejects_non_array() {
        let temp_file = NamedTempFile::new().unwrap();
        let storage = Storage::new(temp_file.path());

        for content in ["null", "{}", "\"poems\"", "[1, 2]", "not json"] {
            fs::write(temp_file.path(), content).unwrap();
            let err = storage.load().unwrap_err();
            assert!(
                matches!(err, PoetryError::Parse { .. }),
                "expected parse error for {content:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path());

        assert!(storage.exists());
        let err = storage.load().unwrap_err();
        assert!(matches!(err, PoetryError::Io { .. }), "got {err:?}");
    }

    #[test]
    fn test_save_to_missing_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path().join("no-such-dir").join("poems.json"));

        let err = storage.save(&[]).unwrap_err();
        assert!(matches!(err, PoetryError::Io { .. }));
    }
}

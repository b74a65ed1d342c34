//! Core library for the poetry manager
//!
//! Holds the [`Poem`] record, the [`PoemCollection`] store with its search
//! and report operations, and JSON file [`Storage`]. Nothing in here reads
//! from stdin; the CLI crate drives it.

pub mod collection;
pub mod error;
pub mod models;
pub mod report;
pub mod storage;

// Re-export commonly used types
pub use collection::{LoadOutcome, PoemCollection};
pub use error::{PoetryError, Result};
pub use models::Poem;
pub use report::{Report, ReportCriteria};
pub use storage::{Storage, DEFAULT_COLLECTION_FILE};

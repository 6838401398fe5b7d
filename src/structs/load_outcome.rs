//! The outcome of loading a schema.

use super::MissingTables;

/// What a call to [`SchemaLoader::load`](crate::loader::SchemaLoader::load)
/// did.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LoadOutcome {
    /// The database was tested first. Holds the tables found missing before
    /// loading, which are the tables the load created.
    Tested(MissingTables),
    /// Every statement of the schema was executed without testing.
    Loaded,
}

impl LoadOutcome {
    /// Returns the missing tables found by the test preceding the load, if
    /// one was run.
    #[must_use]
    pub fn missing_tables(&self) -> Option<&MissingTables> {
        match self {
            LoadOutcome::Tested(missing) => Some(missing),
            LoadOutcome::Loaded => None,
        }
    }

    /// Returns whether the load was preceded by a test for missing tables.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_loader::prelude::*;
    ///
    /// assert!(!LoadOutcome::Loaded.is_tested());
    /// assert!(LoadOutcome::Tested(MissingTables::NoneMissing).is_tested());
    /// ```
    #[must_use]
    pub fn is_tested(&self) -> bool {
        matches!(self, LoadOutcome::Tested(_))
    }
}

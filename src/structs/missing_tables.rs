//! The outcome of checking which tables of a schema are absent from a
//! database.

/// Tables declared by a schema which were absent from the database when it
/// was checked.
///
/// The variant distinguishes "nothing to create" from a list of tables, so
/// [`MissingTables::Missing`] never holds an empty list when built through
/// [`MissingTables::from_vec`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum MissingTables {
    /// Every table declared by the schema exists, or the schema declares no
    /// tables at all.
    #[default]
    NoneMissing,
    /// The names of the missing tables, in order of appearance in the schema.
    /// A table declared twice appears twice.
    Missing(Vec<String>),
}

impl MissingTables {
    /// Creates a `MissingTables` from a list of table names, mapping an empty
    /// list to [`MissingTables::NoneMissing`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_loader::prelude::*;
    ///
    /// assert_eq!(MissingTables::from_vec(Vec::new()), MissingTables::NoneMissing);
    /// assert_eq!(
    ///     MissingTables::from_vec(vec!["foo".to_owned()]),
    ///     MissingTables::Missing(vec!["foo".to_owned()])
    /// );
    /// ```
    #[must_use]
    pub fn from_vec(tables: Vec<String>) -> Self {
        if tables.is_empty() { MissingTables::NoneMissing } else { MissingTables::Missing(tables) }
    }

    /// Returns whether no table is missing.
    #[must_use]
    pub fn is_none_missing(&self) -> bool {
        self.tables().is_empty()
    }

    /// Returns the names of the missing tables, empty when none is missing.
    #[must_use]
    pub fn tables(&self) -> &[String] {
        match self {
            MissingTables::NoneMissing => &[],
            MissingTables::Missing(tables) => tables,
        }
    }

    /// Returns the number of missing table entries, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables().len()
    }

    /// Returns whether there is no missing table entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_none_missing()
    }

    /// Returns whether the table with the provided name is missing.
    #[must_use]
    pub fn contains(&self, table_name: &str) -> bool {
        self.tables().iter().any(|table| table == table_name)
    }

    /// Consumes the value, returning the names of the missing tables.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            MissingTables::NoneMissing => Vec::new(),
            MissingTables::Missing(tables) => tables,
        }
    }
}

impl From<Vec<String>> for MissingTables {
    fn from(tables: Vec<String>) -> Self {
        Self::from_vec(tables)
    }
}

//! Schema struct holding the statements to load into a database.

use std::path::Path;

use super::StatementSplitter;
use crate::{
    errors::Error,
    utils::{create_table_name, search_sql_documents},
};

/// A schema: the SQL text to load and the statements it was cut into.
///
/// A schema is immutable once built. Only non-blank statements are kept, in
/// the order they appear in the source, with their text untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Schema {
    /// The raw text of the schema.
    text: String,
    /// The non-blank statements of the schema.
    statements: Vec<String>,
}

impl Schema {
    /// Creates a schema from a designator, which is either the path of a
    /// `.sql` file (or of a directory of them) or literal SQL text.
    ///
    /// # Arguments
    ///
    /// * `designator` - A path to an existing file or directory, or SQL text.
    /// * `splitter` - How to cut the text into statements.
    ///
    /// # Errors
    ///
    /// * [`Error::MissingSchema`] if the designator is empty.
    /// * [`Error::Io`] if the path exists but cannot be read.
    /// * [`Error::Tokenizer`] if a tokenized splitter rejects the text.
    ///
    /// # Example
    ///
    /// ```rust
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use schema_loader::prelude::*;
    ///
    /// let schema = Schema::from_designator(
    ///     "CREATE TABLE foo (id INT); CREATE TABLE bar (id INT);",
    ///     &StatementSplitter::Naive,
    /// )?;
    /// assert_eq!(schema.len(), 2);
    /// assert!(Schema::from_designator("", &StatementSplitter::Naive).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_designator(designator: &str, splitter: &StatementSplitter) -> Result<Self, Error> {
        let path = Path::new(designator);
        if !designator.is_empty() && path.exists() {
            Self::from_path(path, splitter)
        } else {
            Self::from_text(designator, splitter)
        }
    }

    /// Creates a schema from literal SQL text.
    ///
    /// # Errors
    ///
    /// * [`Error::MissingSchema`] if the text is empty. Whitespace-only text
    ///   is accepted and yields a schema without statements.
    /// * [`Error::Tokenizer`] if a tokenized splitter rejects the text.
    pub fn from_text(text: impl Into<String>, splitter: &StatementSplitter) -> Result<Self, Error> {
        let text = text.into();
        if text.is_empty() {
            return Err(Error::MissingSchema);
        }
        let statements = splitter.split(&text)?;
        Ok(Self { text, statements })
    }

    /// Creates a schema from the `.sql` file at the provided path, or from
    /// every `.sql` file below it when it is a directory.
    ///
    /// Files of a directory are read in path order, except `down.sql` files,
    /// and each is split on its own. An empty file yields an empty schema.
    ///
    /// # Errors
    ///
    /// * [`Error::Io`] if the path does not exist or cannot be read.
    /// * [`Error::Tokenizer`] if a tokenized splitter rejects a file.
    pub fn from_path(path: &Path, splitter: &StatementSplitter) -> Result<Self, Error> {
        let io_error = |source| Error::Io { path: path.to_path_buf(), source };

        if !path.is_dir() {
            let text = std::fs::read_to_string(path).map_err(io_error)?;
            let statements = splitter.split(&text)?;
            return Ok(Self { text, statements });
        }

        let mut texts = Vec::new();
        let mut statements = Vec::new();
        for sql_path in search_sql_documents(path).map_err(io_error)? {
            let text = std::fs::read_to_string(&sql_path)
                .map_err(|source| Error::Io { path: sql_path.clone(), source })?;
            statements.extend(splitter.split(&text)?);
            texts.push(text);
        }
        Ok(Self { text: texts.join("\n"), statements })
    }

    /// Returns the raw text of the schema.
    ///
    /// For a directory, this is the text of its files joined by newlines.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns an iterator over the non-blank statements of the schema.
    pub fn statements(&self) -> impl Iterator<Item = &str> {
        self.statements.iter().map(String::as_str)
    }

    /// Returns the number of non-blank statements in the schema.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Returns whether the schema has no statement.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Returns an iterator over the names of the tables created by the
    /// schema, in order of appearance, duplicates included.
    ///
    /// # Example
    ///
    /// ```rust
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use schema_loader::prelude::*;
    ///
    /// let schema = Schema::from_text(
    ///     "CREATE TABLE `foo` (id INT);
    ///      CREATE INDEX foo_id ON foo (id);
    ///      CREATE TABLE IF NOT EXISTS bar (id INT);",
    ///     &StatementSplitter::Naive,
    /// )?;
    /// assert_eq!(schema.table_names().collect::<Vec<_>>(), vec!["foo", "bar"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.statements().filter_map(create_table_name)
    }
}

//! Builder for constructing a `SchemaLoader` instance.

use std::path::PathBuf;

use sqlparser::dialect::Dialect;

use super::SchemaLoader;
use crate::{
    connection::Connection,
    errors::Error,
    structs::{Schema, StatementSplitter},
};

/// Where the builder obtains its schema from.
#[derive(Debug)]
enum SchemaSource {
    /// A path or literal SQL text, told apart when building.
    Designator(String),
    /// Literal SQL text.
    Text(String),
    /// A `.sql` file or a directory of them.
    Path(PathBuf),
    /// A schema built beforehand.
    Schema(Schema),
}

/// Builder for constructing a [`SchemaLoader`] instance.
///
/// # Example
///
/// ```rust
/// # #[cfg(not(feature = "sqlite"))]
/// # fn main() {}
/// # #[cfg(feature = "sqlite")]
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use schema_loader::prelude::*;
/// use sqlparser::dialect::MySqlDialect;
///
/// let connection = rusqlite::Connection::open_in_memory()?;
/// let loader = SchemaLoader::builder(connection)
///     .schema_text("CREATE TABLE notes (body TEXT DEFAULT 'a;b');")
///     .tokenized::<MySqlDialect>()
///     .build()?;
/// assert_eq!(loader.schema().len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SchemaLoaderBuilder<C: Connection> {
    /// Connection handed over to the loader.
    connection: C,
    /// Source of the schema, if one was set.
    source: Option<SchemaSource>,
    /// How the schema text is cut into statements.
    splitter: StatementSplitter,
}

impl<C: Connection> SchemaLoaderBuilder<C> {
    #[must_use]
    /// Creates a new `SchemaLoaderBuilder` instance.
    pub fn new(connection: C) -> Self {
        Self { connection, source: None, splitter: StatementSplitter::default() }
    }

    /// Sets the schema designator: the path of a `.sql` file or directory if
    /// such a path exists, literal SQL text otherwise.
    #[must_use]
    pub fn schema(mut self, designator: impl Into<String>) -> Self {
        self.source = Some(SchemaSource::Designator(designator.into()));
        self
    }

    /// Sets literal SQL text as the schema.
    #[must_use]
    pub fn schema_text(mut self, text: impl Into<String>) -> Self {
        self.source = Some(SchemaSource::Text(text.into()));
        self
    }

    /// Sets the path of a `.sql` file, or of a directory of them, as the
    /// schema.
    #[must_use]
    pub fn schema_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(SchemaSource::Path(path.into()));
        self
    }

    /// Sets an already built schema. The splitter is then ignored.
    #[must_use]
    pub fn parsed_schema(mut self, schema: Schema) -> Self {
        self.source = Some(SchemaSource::Schema(schema));
        self
    }

    /// Sets how the schema text is cut into statements.
    #[must_use]
    #[inline]
    pub fn splitter(mut self, splitter: StatementSplitter) -> Self {
        self.splitter = splitter;
        self
    }

    /// Cuts the schema text with the tokenizer of the dialect `D`.
    #[must_use]
    #[inline]
    pub fn tokenized<D: Dialect + Default>(self) -> Self {
        self.splitter(StatementSplitter::tokenized::<D>())
    }

    /// Builds the loader, reading and splitting the schema.
    ///
    /// # Errors
    ///
    /// * [`Error::MissingSchema`] if no schema was set, or if the schema text
    ///   is empty.
    /// * [`Error::Io`] if the schema path cannot be read.
    /// * [`Error::Tokenizer`] if a tokenized splitter rejects the text.
    pub fn build(self) -> Result<SchemaLoader<C>, Error> {
        let schema = match self.source.ok_or(Error::MissingSchema)? {
            SchemaSource::Designator(designator) => {
                Schema::from_designator(&designator, &self.splitter)?
            }
            SchemaSource::Text(text) => Schema::from_text(text, &self.splitter)?,
            SchemaSource::Path(path) => Schema::from_path(&path, &self.splitter)?,
            SchemaSource::Schema(schema) => schema,
        };
        Ok(SchemaLoader::with_schema(self.connection, schema))
    }
}

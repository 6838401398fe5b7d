//! Submodule providing the [`SchemaLoader`], which creates the tables of a
//! schema that are missing from a database.
//!
//! Statements run one at a time, in schema order, and the first failure
//! aborts the load. Nothing is rolled back: statements executed before the
//! failing one stay applied. Callers needing atomicity can run the load
//! inside a transaction of their own, on databases with transactional DDL.

mod builder;

pub use builder::SchemaLoaderBuilder;
use tracing::{debug, info, warn};

use crate::{
    connection::Connection,
    errors::Error,
    structs::{LoadOutcome, MissingTables, Schema},
    utils::contains_any,
};

/// Loads a [`Schema`] into the database behind a [`Connection`].
///
/// The loader keeps no state besides its schema and connection, so
/// [`test`](Self::test) and [`load`](Self::load) can be called any number of
/// times, each call looking at the database afresh.
///
/// # Example
///
/// ```rust
/// # #[cfg(not(feature = "sqlite"))]
/// # fn main() {}
/// # #[cfg(feature = "sqlite")]
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use schema_loader::prelude::*;
///
/// let mut connection = rusqlite::Connection::open_in_memory()?;
/// let mut loader = SchemaLoader::new(
///     &mut connection,
///     "CREATE TABLE foo (id INT); CREATE TABLE bar (id INT);",
/// )?;
///
/// let expected = MissingTables::Missing(vec!["foo".to_owned(), "bar".to_owned()]);
/// assert_eq!(loader.test()?, expected);
/// assert_eq!(loader.load(true)?, LoadOutcome::Tested(expected));
/// assert_eq!(loader.load(true)?, LoadOutcome::Tested(MissingTables::NoneMissing));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SchemaLoader<C: Connection> {
    /// The database the schema is loaded into.
    connection: C,
    /// The schema to load.
    schema: Schema,
}

impl<C: Connection> SchemaLoader<C> {
    /// Creates a loader from a connection and a schema designator: the path
    /// of a `.sql` file or directory, or literal SQL text.
    ///
    /// # Errors
    ///
    /// * [`Error::MissingSchema`] if the designator is empty.
    /// * [`Error::Io`] if the designated path cannot be read.
    pub fn new(connection: C, designator: &str) -> Result<Self, Error> {
        Self::builder(connection).schema(designator).build()
    }

    /// Creates a loader from a connection and an already built schema.
    #[must_use]
    pub fn with_schema(connection: C, schema: Schema) -> Self {
        Self { connection, schema }
    }

    /// Returns a builder for a loader using the provided connection.
    #[must_use]
    pub fn builder(connection: C) -> SchemaLoaderBuilder<C> {
        SchemaLoaderBuilder::new(connection)
    }

    /// Returns the schema of the loader.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns a reference to the connection of the loader.
    #[must_use]
    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// Returns a mutable reference to the connection of the loader.
    #[must_use]
    pub fn connection_mut(&mut self) -> &mut C {
        &mut self.connection
    }

    /// Consumes the loader, returning its connection.
    #[must_use]
    pub fn into_connection(self) -> C {
        self.connection
    }

    /// Returns the tables created by the schema which do not exist in the
    /// database, in order of appearance in the schema.
    ///
    /// Only existence checks are issued: the database is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] as soon as an existence check fails. A
    /// failed check is never taken to mean that the table is missing.
    pub fn test(&mut self) -> Result<MissingTables, Error> {
        let mut missing = Vec::new();
        for table_name in self.schema.table_names() {
            let exists = self.connection.table_exists(table_name)?;
            debug!(table = table_name, exists, "Checked table existence");
            if !exists {
                missing.push(table_name.to_owned());
            }
        }

        let missing = MissingTables::from_vec(missing);
        info!(missing = ?missing.tables(), "Tested schema for missing tables");
        Ok(missing)
    }

    /// Loads the schema into the database.
    ///
    /// When `test` is true, the database is first [tested](Self::test). If no
    /// table is missing nothing is executed. Otherwise every statement whose
    /// text contains the name of a missing table is executed, in schema
    /// order. This coarse substring match also runs the statements merely
    /// mentioning a missing table, such as indices on it or tables with a
    /// foreign key to it, and it over-matches when a missing table's name
    /// occurs inside another name or in a comment. The returned outcome holds
    /// the tables found missing before the load.
    ///
    /// When `test` is false, every statement of the schema is executed
    /// unconditionally.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] on the first failing query, existence
    /// checks included. Statements after the failing one are not executed
    /// and those before it are not rolled back.
    pub fn load(&mut self, test: bool) -> Result<LoadOutcome, Error> {
        if test {
            Ok(LoadOutcome::Tested(self.load_missing()?))
        } else {
            self.load_all()?;
            Ok(LoadOutcome::Loaded)
        }
    }

    /// Loads the statements concerning missing tables, as `load(true)` does,
    /// returning the tables found missing before the load.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] on the first failing query.
    pub fn load_missing(&mut self) -> Result<MissingTables, Error> {
        let missing = self.test()?;
        if missing.is_none_missing() {
            info!("No missing tables, nothing to load");
            return Ok(missing);
        }

        let mut executed = 0_usize;
        for statement in self.schema.statements() {
            if contains_any(statement, missing.tables()) {
                Self::execute(&mut self.connection, statement)?;
                executed += 1;
            } else {
                debug!(statement = statement.trim(), "Skipping statement");
            }
        }
        info!(executed, missing = ?missing.tables(), "Loaded missing tables");
        Ok(missing)
    }

    /// Executes every statement of the schema, as `load(false)` does.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] on the first failing statement.
    pub fn load_all(&mut self) -> Result<(), Error> {
        for statement in self.schema.statements() {
            Self::execute(&mut self.connection, statement)?;
        }
        info!(executed = self.schema.len(), "Loaded schema");
        Ok(())
    }

    fn execute(connection: &mut C, statement: &str) -> Result<(), Error> {
        debug!(statement = statement.trim(), "Executing statement");
        connection.execute(statement).map_err(|error| {
            warn!(code = error.code(), message = error.message(), "Statement failed");
            Error::from(error)
        })
    }
}

//! Submodule providing the minimal database capability a
//! [`SchemaLoader`](crate::loader::SchemaLoader) needs.
//!
//! The loader never opens nor closes connections: it only issues statements
//! through the [`Connection`] trait. Since `&mut C` implements the trait
//! whenever `C` does, a caller can hand a loader a mutable borrow and keep
//! control of the connection lifecycle, including any transaction wrapping
//! the whole load.

#[cfg(feature = "sqlite")]
mod sqlite;

/// An error reported by a database driver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DriverError {
    /// Numeric error code reported by the driver.
    code: i32,
    /// Message reported by the driver.
    message: String,
}

impl DriverError {
    /// Creates a new `DriverError` from a driver error code and message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_loader::connection::DriverError;
    ///
    /// let error = DriverError::new(1050, "Table 'foo' already exists");
    /// assert_eq!(error.code(), 1050);
    /// assert_eq!(error.message(), "Table 'foo' already exists");
    /// ```
    #[must_use]
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Returns the numeric error code reported by the driver.
    #[must_use]
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Returns the message reported by the driver.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error, returning its message.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl std::fmt::Display for DriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for DriverError {}

/// A trait for database handles a schema can be loaded into.
///
/// Every call blocks until the driver returns.
pub trait Connection {
    /// Executes a single SQL statement, discarding any rows it returns.
    ///
    /// # Arguments
    ///
    /// * `sql` - The statement text, exactly as it appears in the schema.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the statement fails.
    fn execute(&mut self, sql: &str) -> Result<(), DriverError>;

    /// Returns whether a table with the given name exists in the current
    /// schema or catalog of the database.
    ///
    /// # Arguments
    ///
    /// * `table_name` - The unquoted name of the table.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the existence check itself fails.
    fn table_exists(&mut self, table_name: &str) -> Result<bool, DriverError>;
}

impl<C: Connection + ?Sized> Connection for &mut C {
    #[inline]
    fn execute(&mut self, sql: &str) -> Result<(), DriverError> {
        (**self).execute(sql)
    }

    #[inline]
    fn table_exists(&mut self, table_name: &str) -> Result<bool, DriverError> {
        (**self).table_exists(table_name)
    }
}

impl<C: Connection + ?Sized> Connection for Box<C> {
    #[inline]
    fn execute(&mut self, sql: &str) -> Result<(), DriverError> {
        (**self).execute(sql)
    }

    #[inline]
    fn table_exists(&mut self, table_name: &str) -> Result<bool, DriverError> {
        (**self).table_exists(table_name)
    }
}

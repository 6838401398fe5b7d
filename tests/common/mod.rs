//! Shared helpers for the integration tests.

use schema_loader::{
    connection::{Connection, DriverError},
    utils::create_table_name,
};

/// MySQL error code for `CREATE TABLE` on an existing table.
pub const TABLE_EXISTS_ERROR: i32 = 1050;

/// An in-memory stand-in for a database connection, recording every call it
/// receives.
#[derive(Debug, Default)]
pub struct RecordingConnection {
    /// Tables currently present.
    tables: Vec<String>,
    /// Statements executed successfully, in order.
    executed: Vec<String>,
    /// Table names checked for existence, in order.
    checked: Vec<String>,
    /// Statements containing this text fail with the given error.
    failing_statement: Option<(String, DriverError)>,
    /// Existence checks fail with this error.
    failing_check: Option<DriverError>,
}

impl RecordingConnection {
    /// Creates a connection whose database holds the provided tables.
    pub fn with_tables(tables: &[&str]) -> Self {
        Self { tables: tables.iter().map(|table| (*table).to_owned()).collect(), ..Self::default() }
    }

    /// Makes every statement containing `needle` fail with `error`.
    pub fn fail_statements_containing(mut self, needle: &str, error: DriverError) -> Self {
        self.failing_statement = Some((needle.to_owned(), error));
        self
    }

    /// Makes every existence check fail with `error`.
    pub fn fail_existence_checks(mut self, error: DriverError) -> Self {
        self.failing_check = Some(error);
        self
    }

    /// Removes a table from the database.
    pub fn drop_table(&mut self, table_name: &str) {
        self.tables.retain(|table| table != table_name);
    }

    /// Returns whether the table exists.
    pub fn has_table(&self, table_name: &str) -> bool {
        self.tables.iter().any(|table| table == table_name)
    }

    /// Returns the statements executed so far, trimmed.
    pub fn executed(&self) -> Vec<&str> {
        self.executed.iter().map(|statement| statement.trim()).collect()
    }

    /// Returns the table names checked for existence so far.
    pub fn checked(&self) -> &[String] {
        &self.checked
    }
}

impl Connection for RecordingConnection {
    fn execute(&mut self, sql: &str) -> Result<(), DriverError> {
        if let Some((needle, error)) = &self.failing_statement
            && sql.contains(needle.as_str())
        {
            return Err(error.clone());
        }
        if let Some(table_name) = create_table_name(sql) {
            if self.has_table(table_name) {
                return Err(DriverError::new(
                    TABLE_EXISTS_ERROR,
                    format!("Table '{table_name}' already exists"),
                ));
            }
            self.tables.push(table_name.to_owned());
        }
        self.executed.push(sql.to_owned());
        Ok(())
    }

    fn table_exists(&mut self, table_name: &str) -> Result<bool, DriverError> {
        if let Some(error) = &self.failing_check {
            return Err(error.clone());
        }
        self.checked.push(table_name.to_owned());
        Ok(self.has_table(table_name))
    }
}

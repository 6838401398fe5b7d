//! Submodule implementing the [`Connection`] trait for `rusqlite`'s
//! [`Connection`](rusqlite::Connection).
//!
//! Statements are run through `execute_batch`, so a statement carrying
//! leading or trailing comments is accepted as-is. Driver error codes are
//! SQLite extended result codes.

use super::{Connection, DriverError};

/// Query used to check whether a table exists. SQLite table names are
/// case-insensitive, so the name comparison is too.
const TABLE_EXISTS_QUERY: &str =
    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1 COLLATE NOCASE";

impl From<rusqlite::Error> for DriverError {
    fn from(error: rusqlite::Error) -> Self {
        let code = error.sqlite_error().map_or(-1, |failure| failure.extended_code);
        DriverError::new(code, error.to_string())
    }
}

fn execute(connection: &rusqlite::Connection, sql: &str) -> Result<(), DriverError> {
    connection.execute_batch(sql)?;
    Ok(())
}

fn table_exists(connection: &rusqlite::Connection, table_name: &str) -> Result<bool, DriverError> {
    let rows: i64 = connection.query_row(TABLE_EXISTS_QUERY, [table_name], |row| row.get(0))?;
    Ok(rows == 1)
}

impl Connection for rusqlite::Connection {
    #[inline]
    fn execute(&mut self, sql: &str) -> Result<(), DriverError> {
        execute(self, sql)
    }

    #[inline]
    fn table_exists(&mut self, table_name: &str) -> Result<bool, DriverError> {
        table_exists(self, table_name)
    }
}

/// Shared borrows are enough for `rusqlite`, which lets a loader run inside a
/// [`Transaction`](rusqlite::Transaction) by borrowing it as `&*transaction`.
impl Connection for &rusqlite::Connection {
    #[inline]
    fn execute(&mut self, sql: &str) -> Result<(), DriverError> {
        execute(self, sql)
    }

    #[inline]
    fn table_exists(&mut self, table_name: &str) -> Result<bool, DriverError> {
        table_exists(self, table_name)
    }
}

//! Error enumeration used in the `schema_loader` crate.

use std::path::PathBuf;

use sqlparser::tokenizer::TokenizerError;

use crate::connection::DriverError;

#[derive(Debug, thiserror::Error)]
/// Defines the `Error` enum representing various error types
pub enum Error {
    #[error("Missing schema: neither a path nor SQL text was provided.")]
    /// No usable schema text could be obtained when constructing a loader.
    MissingSchema,
    #[error("Error {code}: {message}")]
    /// A query issued against the database failed at the driver level.
    Database {
        /// Numeric error code reported by the driver.
        code: i32,
        /// Message reported by the driver.
        message: String,
    },
    #[error("IO error while reading schema `{}`: {source}", .path.display())]
    /// A schema path could not be read.
    Io {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Wrapper around SQL tokenizer errors, raised by the tokenized splitter.
    #[error("SQL tokenizer error: {0}")]
    Tokenizer(#[from] TokenizerError),
}

impl Error {
    /// Exception code of configuration errors.
    pub const CONFIGURATION: u8 = 1;
    /// Exception code of database errors.
    pub const DATABASE: u8 = 2;

    /// Returns the numeric category of the error: [`Error::CONFIGURATION`]
    /// for anything preventing the schema from being obtained, and
    /// [`Error::DATABASE`] for driver failures.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_loader::errors::Error;
    ///
    /// assert_eq!(Error::MissingSchema.code(), Error::CONFIGURATION);
    /// let error = Error::Database { code: 1050, message: "Table exists".to_owned() };
    /// assert_eq!(error.code(), Error::DATABASE);
    /// ```
    #[must_use]
    pub fn code(&self) -> u8 {
        match self {
            Error::Database { .. } => Self::DATABASE,
            Error::MissingSchema | Error::Io { .. } | Error::Tokenizer(_) => Self::CONFIGURATION,
        }
    }

    /// Returns whether the error was raised while obtaining the schema.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        self.code() == Self::CONFIGURATION
    }

    /// Returns whether the error was raised by the database driver.
    #[must_use]
    pub fn is_database(&self) -> bool {
        self.code() == Self::DATABASE
    }
}

impl From<DriverError> for Error {
    fn from(error: DriverError) -> Self {
        Error::Database { code: error.code(), message: error.into_message() }
    }
}

//! Strategies for cutting a schema into statements.

use sqlparser::dialect::Dialect;

use crate::{
    errors::Error,
    utils::{split_statements, tokenized_statements},
};

/// How a schema text is cut into statements.
#[derive(Debug, Default)]
pub enum StatementSplitter {
    /// Split on every `;`, wherever it appears.
    #[default]
    Naive,
    /// Split on the `;` tokens found by the tokenizer of the given dialect,
    /// ignoring those inside literals, quoted identifiers and comments.
    Tokenized(Box<dyn Dialect>),
}

impl StatementSplitter {
    /// Creates a tokenized splitter for the dialect `D`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use schema_loader::prelude::*;
    /// use sqlparser::dialect::MySqlDialect;
    ///
    /// let splitter = StatementSplitter::tokenized::<MySqlDialect>();
    /// assert_eq!(splitter.split("SELECT ';'; SELECT 2")?.len(), 2);
    /// assert_eq!(StatementSplitter::Naive.split("SELECT ';'; SELECT 2")?.len(), 3);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn tokenized<D: Dialect + Default>() -> Self {
        StatementSplitter::Tokenized(Box::new(D::default()))
    }

    /// Returns the non-blank statements of the provided SQL text, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Tokenizer`] if a tokenized splitter cannot tokenize
    /// the text. The naive splitter never fails.
    pub fn split(&self, sql: &str) -> Result<Vec<String>, Error> {
        match self {
            StatementSplitter::Naive => Ok(split_statements(sql).map(str::to_owned).collect()),
            StatementSplitter::Tokenized(dialect) => Ok(tokenized_statements(sql, &**dialect)?),
        }
    }
}

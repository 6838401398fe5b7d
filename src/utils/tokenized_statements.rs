//! SQL-aware splitting of a schema into statements, built on the `sqlparser`
//! tokenizer.

use sqlparser::{
    dialect::Dialect,
    tokenizer::{Token, Tokenizer, TokenizerError},
};

/// Splits the provided SQL text into its non-blank statements, using the
/// tokenizer of the given dialect to find statement terminators.
///
/// Unlike [`split_statements`](crate::utils::split_statements), a `;` inside
/// a string literal, a quoted identifier or a comment does not terminate a
/// statement. Literals are kept escaped, so each statement is rebuilt from
/// its tokens with the same text it has in the source.
///
/// # Arguments
///
/// * `sql` - The SQL text to split.
/// * `dialect` - The dialect whose lexical rules apply.
///
/// # Errors
///
/// Returns an error if the text cannot be tokenized, for instance because of
/// an unterminated string literal.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use schema_loader::utils::tokenized_statements;
/// use sqlparser::dialect::MySqlDialect;
///
/// let statements = tokenized_statements(
///     "CREATE TABLE foo (note VARCHAR(8) DEFAULT 'a;b'); INSERT INTO foo VALUES ('x');",
///     &MySqlDialect {},
/// )?;
/// assert_eq!(
///     statements,
///     vec!["CREATE TABLE foo (note VARCHAR(8) DEFAULT 'a;b')", " INSERT INTO foo VALUES ('x')"]
/// );
/// # Ok(())
/// # }
/// ```
pub fn tokenized_statements(
    sql: &str,
    dialect: &dyn Dialect,
) -> Result<Vec<String>, TokenizerError> {
    let tokens = Tokenizer::new(dialect, sql).with_unescape(false).tokenize()?;

    let mut statements = Vec::new();
    let mut current = String::new();
    for token in tokens {
        match token {
            Token::SemiColon => {
                if !current.trim().is_empty() {
                    statements.push(std::mem::take(&mut current));
                }
                current.clear();
            }
            Token::EOF => {}
            token => current.push_str(&token.to_string()),
        }
    }
    if !current.trim().is_empty() {
        statements.push(current);
    }

    Ok(statements)
}

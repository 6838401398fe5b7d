//! Naive splitting of a schema into statements.

/// Splits the provided SQL text on every `;`, yielding the non-blank
/// statements in source order.
///
/// Statements are yielded verbatim, surrounding whitespace included. No
/// attempt is made to recognize `;` inside string literals, quoted
/// identifiers or comments: use
/// [`tokenized_statements`](crate::utils::tokenized_statements) for that.
///
/// # Arguments
///
/// * `sql` - The SQL text to split.
///
/// # Examples
///
/// ```
/// use schema_loader::utils::split_statements;
///
/// let statements: Vec<&str> =
///     split_statements("CREATE TABLE foo (id INT);\n\nCREATE TABLE bar (id INT);\n").collect();
/// assert_eq!(statements, vec!["CREATE TABLE foo (id INT)", "\n\nCREATE TABLE bar (id INT)"]);
///
/// // Semicolons inside literals are split on as well.
/// assert_eq!(split_statements("SELECT 'a;b'").count(), 2);
/// ```
pub fn split_statements(sql: &str) -> impl Iterator<Item = &str> {
    sql.split(';').filter(|statement| !statement.trim().is_empty())
}

//! Extraction of the table name declared by a `CREATE TABLE` statement.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Matches `CREATE TABLE [IF NOT EXISTS] <name>` anywhere in a statement,
/// where the name is a backtick-quoted identifier, a double-quoted identifier
/// or a bare word, optionally qualified by a schema.
static CREATE_TABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)create\s+table\s+(?:if\s+not\s+exists\s+)?",
        r#"(?:(?:`[^`]+`|"[^"]+"|\w+)\.)?"#,
        r#"(?:`([^`]+)`|"([^"]+)"|(\w+))"#,
    ))
    .unwrap()
});

/// Returns the name of the table created by the provided statement, if the
/// statement contains a `CREATE TABLE` clause.
///
/// The search is case-insensitive and not anchored: a `CREATE TABLE` clause
/// preceded by comments is still found. Quotes around the name are stripped.
/// For qualified names the schema is dropped, so `CREATE TABLE app.users`
/// yields `users`.
///
/// # Arguments
///
/// * `statement` - A single SQL statement.
///
/// # Examples
///
/// ```
/// use schema_loader::utils::create_table_name;
///
/// assert_eq!(create_table_name("CREATE TABLE foo (id INT)"), Some("foo"));
/// assert_eq!(create_table_name("\n create table if not exists `bar` (id INT)"), Some("bar"));
/// assert_eq!(create_table_name("CREATE TABLE \"Baz\" (id INT)"), Some("Baz"));
/// assert_eq!(create_table_name("CREATE TABLE main.qux (id INT)"), Some("qux"));
/// assert_eq!(create_table_name("INSERT INTO foo VALUES (1)"), None);
/// assert_eq!(create_table_name("   "), None);
/// ```
#[must_use]
pub fn create_table_name(statement: &str) -> Option<&str> {
    let captures = CREATE_TABLE_RE.captures(statement)?;
    captures.get(1).or_else(|| captures.get(2)).or_else(|| captures.get(3)).map(|m| m.as_str())
}

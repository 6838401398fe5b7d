//! Substring search for several needles at once.

/// Returns whether the haystack contains at least one of the needles.
///
/// The search is a case-sensitive substring search: a needle matches inside
/// longer identifiers, string literals and comments alike.
///
/// # Examples
///
/// ```
/// use schema_loader::utils::contains_any;
///
/// let statement = "CREATE TABLE orders (user_id INT REFERENCES users (id))";
/// assert!(contains_any(statement, ["users"]));
/// assert!(contains_any(statement, ["missing", "orders"]));
/// assert!(!contains_any(statement, ["ORDERS"]));
/// assert!(!contains_any(statement, Vec::<String>::new()));
/// ```
#[must_use]
pub fn contains_any<I>(haystack: &str, needles: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    needles.into_iter().any(|needle| haystack.contains(needle.as_ref()))
}

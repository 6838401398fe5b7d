//! Discovery of SQL documents below a path.

use std::path::{Path, PathBuf};

/// Returns the `.sql` files found at the provided path, sorted.
///
/// Directories are searched recursively, without following symbolic links to
/// directories. Files named `down.sql` are skipped, as they revert a migration
/// rather than declare a schema.
///
/// # Errors
///
/// Returns an error if a directory cannot be read.
pub fn search_sql_documents(path: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut sql_files = Vec::new();
    collect_sql_documents(path, &mut sql_files)?;
    sql_files.sort_unstable();
    Ok(sql_files)
}

fn collect_sql_documents(path: &Path, sql_files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    if path.is_dir() {
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let path = entry.path();
            if file_type.is_dir() {
                collect_sql_documents(&path, sql_files)?;
            } else if !path.is_dir()
                && is_sql_document(&path)
                && path.file_name().is_some_and(|name| name != "down.sql")
            {
                sql_files.push(path);
            }
        }
    } else if is_sql_document(path) {
        sql_files.push(path.to_path_buf());
    }
    Ok(())
}

fn is_sql_document(path: &Path) -> bool {
    path.extension().is_some_and(|extension| extension == "sql")
}

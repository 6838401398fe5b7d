//! Submodule providing the pure text utilities the loader is built on.

mod contains_any;
pub use contains_any::contains_any;
mod create_table_name;
pub use create_table_name::create_table_name;
mod search_sql_documents;
pub use search_sql_documents::search_sql_documents;
mod split_statements;
pub use split_statements::split_statements;
mod tokenized_statements;
pub use tokenized_statements::tokenized_statements;

//! Submodule providing the structs describing a schema and the outcome of
//! loading it.

mod load_outcome;
mod missing_tables;
mod schema;
mod statement_splitter;

pub use load_outcome::LoadOutcome;
pub use missing_tables::MissingTables;
pub use schema::Schema;
pub use statement_splitter::StatementSplitter;

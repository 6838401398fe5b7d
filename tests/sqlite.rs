//! Integration tests loading schemas into in-memory SQLite databases.
#![cfg(feature = "sqlite")]

use std::path::PathBuf;

use rusqlite::Connection as SqliteConnection;
use schema_loader::prelude::*;

const LTI_TABLES: [&str; 5] =
    ["lti_consumer", "lti_context", "lti_user", "lti_nonce", "lti_share_key"];

fn schema_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/schema.sql")
}

fn lti_tables() -> MissingTables {
    MissingTables::Missing(LTI_TABLES.iter().map(|table| (*table).to_owned()).collect())
}

fn table_exists(connection: &mut SqliteConnection, table_name: &str) -> bool {
    Connection::table_exists(connection, table_name).unwrap()
}

#[test]
fn test_schema_from_path() {
    let mut connection = SqliteConnection::open_in_memory().unwrap();
    let path = schema_path();
    let mut loader = SchemaLoader::new(&mut connection, path.to_str().unwrap()).unwrap();

    assert_eq!(loader.schema().len(), 6);
    assert_eq!(loader.test().unwrap(), lti_tables());
}

#[test]
fn test_schema_from_text() {
    let text = std::fs::read_to_string(schema_path()).unwrap();
    let mut connection = SqliteConnection::open_in_memory().unwrap();
    let mut loader = SchemaLoader::new(&mut connection, &text).unwrap();

    assert_eq!(loader.schema().text(), text);
    assert_eq!(loader.test().unwrap(), lti_tables());
}

#[test]
fn test_load_then_reload() {
    let mut connection = SqliteConnection::open_in_memory().unwrap();
    let mut loader =
        SchemaLoader::builder(&mut connection).schema_path(schema_path()).build().unwrap();

    assert_eq!(loader.load(true).unwrap(), LoadOutcome::Tested(lti_tables()));
    assert_eq!(loader.load(true).unwrap(), LoadOutcome::Tested(MissingTables::NoneMissing));
    drop(loader);

    for table in LTI_TABLES {
        assert!(table_exists(&mut connection, table), "{table} should exist");
    }
}

#[test]
fn test_load_without_test_fails_once_loaded() {
    let mut connection = SqliteConnection::open_in_memory().unwrap();
    let mut loader =
        SchemaLoader::builder(&mut connection).schema_path(schema_path()).build().unwrap();

    loader.load_all().unwrap();
    let error = loader.load(false).unwrap_err();
    assert!(error.is_database());
    assert!(matches!(
        &error,
        Error::Database { message, .. } if message.contains("already exists")
    ));
}

#[test]
fn test_partial_load() {
    let mut connection = SqliteConnection::open_in_memory().unwrap();
    let mut loader =
        SchemaLoader::builder(&mut connection).schema_path(schema_path()).build().unwrap();
    loader.load_all().unwrap();

    loader.connection_mut().execute_batch("DROP TABLE lti_nonce").unwrap();
    assert_eq!(loader.test().unwrap(), MissingTables::Missing(vec!["lti_nonce".to_owned()]));
    assert_eq!(
        loader.load_missing().unwrap(),
        MissingTables::Missing(vec!["lti_nonce".to_owned()])
    );
    drop(loader);

    assert!(table_exists(&mut connection, "lti_nonce"));
    // The index mentions the missing table, so it was created again too.
    let indices: i64 = connection
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master \
             WHERE type = 'index' AND name = 'lti_nonce_expires'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(indices, 1);
}

#[test]
fn test_failure_leaves_earlier_statements_applied() {
    let schema =
        "CREATE TABLE foo (id INT); CREATE TABLE foo (id INT); CREATE TABLE bar (id INT);";
    let mut connection = SqliteConnection::open_in_memory().unwrap();
    let mut loader = SchemaLoader::new(&mut connection, schema).unwrap();

    assert_eq!(
        loader.test().unwrap(),
        MissingTables::Missing(vec!["foo".to_owned(), "foo".to_owned(), "bar".to_owned()])
    );
    let error = loader.load(true).unwrap_err();
    assert!(matches!(error, Error::Database { code: 1, .. }));
    drop(loader);

    assert!(table_exists(&mut connection, "foo"));
    assert!(!table_exists(&mut connection, "bar"));
}

#[test]
fn test_table_names_differing_in_case_are_not_missing() {
    let mut connection = SqliteConnection::open_in_memory().unwrap();
    connection.execute_batch("CREATE TABLE foo (id INT)").unwrap();
    let mut loader = SchemaLoader::new(&mut connection, "CREATE TABLE Foo (id INT);").unwrap();

    assert_eq!(loader.test().unwrap(), MissingTables::NoneMissing);
    assert_eq!(loader.load(true).unwrap(), LoadOutcome::Tested(MissingTables::NoneMissing));
}

#[test]
fn test_qualified_table_names_reload_as_a_no_op() {
    let mut connection = SqliteConnection::open_in_memory().unwrap();
    let mut loader =
        SchemaLoader::new(&mut connection, "CREATE TABLE main.users (id INT);").unwrap();

    assert_eq!(
        loader.load(true).unwrap(),
        LoadOutcome::Tested(MissingTables::Missing(vec!["users".to_owned()]))
    );
    assert_eq!(loader.load(true).unwrap(), LoadOutcome::Tested(MissingTables::NoneMissing));
}

#[test]
fn test_load_inside_rolled_back_transaction() {
    let mut connection = SqliteConnection::open_in_memory().unwrap();

    let transaction = connection.transaction().unwrap();
    {
        let mut loader =
            SchemaLoader::builder(&*transaction).schema_path(schema_path()).build().unwrap();
        assert_eq!(loader.load_missing().unwrap(), lti_tables());
        assert!(loader.test().unwrap().is_none_missing());
    }
    transaction.rollback().unwrap();

    let mut loader =
        SchemaLoader::builder(&mut connection).schema_path(schema_path()).build().unwrap();
    assert_eq!(loader.test().unwrap(), lti_tables());
}

#[test]
fn test_tokenized_splitter_keeps_literals_intact() {
    let schema = "
        CREATE TABLE notes (body TEXT DEFAULT 'first; second');
        INSERT INTO notes DEFAULT VALUES;
    ";
    let mut connection = SqliteConnection::open_in_memory().unwrap();

    let naive = SchemaLoader::new(&mut connection, schema).unwrap();
    assert_eq!(naive.schema().len(), 3);
    drop(naive);

    let mut loader = SchemaLoader::builder(&mut connection)
        .schema(schema)
        .tokenized::<sqlparser::dialect::SQLiteDialect>()
        .build()
        .unwrap();
    assert_eq!(loader.schema().len(), 2);
    assert_eq!(
        loader.load(true).unwrap(),
        LoadOutcome::Tested(MissingTables::Missing(vec!["notes".to_owned()]))
    );
    drop(loader);

    let body: String =
        connection.query_row("SELECT body FROM notes", [], |row| row.get(0)).unwrap();
    assert_eq!(body, "first; second");
}

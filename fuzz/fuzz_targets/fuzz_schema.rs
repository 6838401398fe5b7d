use honggfuzz::fuzz;
use schema_loader::utils::{create_table_name, split_statements, tokenized_statements};
use sqlparser::dialect::{GenericDialect, MySqlDialect};

fn main() {
    loop {
        fuzz!(|sql: &str| {
            if sql.len() > 1_000 {
                // Skip excessively long inputs to avoid timeouts during fuzzing.
                return;
            }

            for statement in split_statements(sql) {
                let _ = create_table_name(statement);
            }
            let _ = tokenized_statements(sql, &GenericDialect {});
            let _ = tokenized_statements(sql, &MySqlDialect {});
        });
    }
}

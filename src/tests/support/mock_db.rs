use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Everything a `MockDatabase` connection was asked to run, flattened to one
/// string so tests can look for the predicates that reached the store.
pub fn recorded_statements(db: Arc<DatabaseConnection>) -> String {
    let conn = match Arc::try_unwrap(db) {
        Ok(conn) => conn,
        Err(_) => panic!("mock connection is still shared"),
    };
    format!("{:?}", conn.into_transaction_log()).replace('\\', "")
}

/// Asserts a statement filtered on `status = 'active'`.
pub fn assert_filters_active(log: &str) {
    assert!(
        log.contains(r#""status" = $"#) && log.contains(r#"String(Some("active"))"#),
        "no active-status predicate in: {log}"
    );
}

use sea_orm::{DbErr, SqlErr};

/// True when the error is a unique-constraint violation (SQLSTATE 23505).
///
/// `sql_err()` covers errors raised by the driver; the text match covers
/// errors that only reach us as strings (mock connections, raw statements).
pub fn is_unique_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }

    let msg = err.to_string().to_lowercase();
    msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
}

use crate::domain::errors::DomainError;

#[must_use]
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.is_unique_violation() {
                return DomainError::Conflict("unique constraint violated".into());
            }
            if db_err.is_foreign_key_violation() {
                return DomainError::NotFound("author not found".into());
            }
            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// `map_sqlx` that records the failed operation first. Used on every query so
/// row-level read failures leave a trace before they are surfaced.
pub(crate) fn log_sqlx(operation: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |err| {
        tracing::error!(operation, error = %err, "store query failed");
        map_sqlx(err)
    }
}

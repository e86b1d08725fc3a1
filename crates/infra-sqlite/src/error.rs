// sqlx error mapping and id checks shared by the repositories

use simplq_core::error::AppError;
use simplq_core::port::IdProvider;

/// Convert sqlx::Error to AppError::Unavailable with structured information
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.code() {
            // SQLite extended result codes: https://www.sqlite.org/rescode.html
            Some(code) => match code.as_ref() {
                "2067" | "1555" => AppError::Unavailable(format!(
                    "Unique constraint violation: {} ({})",
                    db_err.message(),
                    code
                )),
                "5" | "517" => AppError::Unavailable(format!(
                    "Database locked (SQLITE_BUSY): {}",
                    db_err.message()
                )),
                "13" => AppError::Unavailable(format!("Database full: {}", db_err.message())),
                other => AppError::Unavailable(format!(
                    "Database error [{}]: {}",
                    other,
                    db_err.message()
                )),
            },
            None => AppError::Unavailable(format!("Database error: {}", db_err.message())),
        },
        sqlx::Error::PoolTimedOut => {
            AppError::Unavailable("Timed out waiting for a database connection".to_string())
        }
        sqlx::Error::ColumnNotFound(col) => {
            AppError::Unavailable(format!("Column not found: {}", col))
        }
        _ => AppError::Unavailable(err.to_string()),
    }
}

/// Reject ids the store could never have assigned
pub(crate) fn check_id(ids: &dyn IdProvider, kind: &str, id: &str) -> Result<(), AppError> {
    if ids.is_well_formed(id) {
        Ok(())
    } else {
        Err(AppError::InvalidArgument(format!(
            "Malformed {} id: '{}'",
            kind, id
        )))
    }
}

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn singer_not_found(singer_id: i64) -> Self {
        Self::NotFound(format!("singer {singer_id} not found"))
    }

    /// Unique-key violations become `Conflict`; everything else is a dependency failure.
    fn from_sql_err(sql_err: Option<SqlErr>, detail: String) -> Self {
        match sql_err {
            Some(SqlErr::UniqueConstraintViolation(msg)) => ServiceError::Conflict(msg),
            _ => ServiceError::Db(detail),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        Self::from_sql_err(err.sql_err(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_db_errors_are_dependency_failures() {
        let err: ServiceError = DbErr::Custom("connection reset".into()).into();
        assert!(matches!(err, ServiceError::Db(msg) if msg.contains("connection reset")));
    }

    #[test]
    fn unique_violation_is_conflict() {
        let violation = SqlErr::UniqueConstraintViolation(
            "duplicate key value violates unique constraint \"Singers_pkey\"".into(),
        );
        let err = ServiceError::from_sql_err(Some(violation), "db error".into());
        assert!(matches!(err, ServiceError::Conflict(msg) if msg.contains("Singers_pkey")));
    }

    #[test]
    fn other_constraint_violations_stay_dependency_failures() {
        let violation = SqlErr::ForeignKeyConstraintViolation("fk".into());
        let err = ServiceError::from_sql_err(Some(violation), "db error".into());
        assert!(matches!(err, ServiceError::Db(msg) if msg == "db error"));
    }

    #[test]
    fn singer_not_found_names_the_id() {
        let err = ServiceError::singer_not_found(42);
        assert!(matches!(err, ServiceError::NotFound(msg) if msg == "singer 42 not found"));
    }

    #[test]
    fn model_validation_is_wrapped() {
        let err: ServiceError = models::errors::ModelError::Validation("bad".into()).into();
        assert!(matches!(err, ServiceError::Model(_)));
    }
}

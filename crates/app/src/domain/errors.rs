//! Entities service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::entity::ValidationError;

#[derive(Debug, Error)]
pub enum EntitiesServiceError {
    #[error("entity not found")]
    NotFound,

    #[error("invalid entity: {0}")]
    Validation(#[from] ValidationError),

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("storage error")]
    Persistence(#[source] Error),
}

impl From<Error> for EntitiesServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation | ErrorKind::CheckViolation) => {
                Self::MissingRequiredData
            }
            _ => Self::Persistence(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let error = EntitiesServiceError::from(Error::RowNotFound);

        assert!(
            matches!(error, EntitiesServiceError::NotFound),
            "expected NotFound, got {error:?}"
        );
    }

    #[test]
    fn test_pool_timeout_maps_to_persistence() {
        let error = EntitiesServiceError::from(Error::PoolTimedOut);

        assert!(
            matches!(error, EntitiesServiceError::Persistence(_)),
            "expected Persistence, got {error:?}"
        );
    }

    #[tokio::test]
    async fn test_unique_violation_maps_to_persistence() -> TestResult {
        let ctx = TestContext::new().await?;
        let mut tx = ctx.db.begin().await?;

        sqlx::query("INSERT INTO Categories (Id, Name) VALUES (1, 'Books')")
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("INSERT INTO Categories (Id, Name) VALUES (1, 'Games')")
            .execute(&mut *tx)
            .await;

        let Err(error) = result else {
            return Err("duplicate primary key was accepted".into());
        };

        let error = EntitiesServiceError::from(error);

        assert!(
            matches!(error, EntitiesServiceError::Persistence(_)),
            "expected Persistence, got {error:?}"
        );

        Ok(())
    }
}

//! Entity capability shared by every persisted record.

use std::fmt::Debug;

use rust_decimal::Decimal;
use thiserror::Error;

/// Store-assigned integer identity.
pub type EntityId = i64;

/// Reasons a record is rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{0} must not be negative")]
    Negative(&'static str),
}

/// A persisted record with a unique integer identity.
pub trait Entity: Debug + Clone + Send + Sync + 'static {
    /// Short lowercase name used in logs and spans.
    fn type_as_str() -> &'static str;

    fn id(&self) -> EntityId;

    /// Returns the record carrying the given identity.
    #[must_use]
    fn with_id(self, id: EntityId) -> Self;

    /// Checks the record's required fields.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    fn validate(&self) -> Result<(), ValidationError>;
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }

    Ok(())
}

pub(crate) fn require_non_negative(
    field: &'static str,
    value: Decimal,
) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::Negative(field));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_rejects_blank() {
        assert_eq!(
            require_text("name", "   "),
            Err(ValidationError::Required("name"))
        );
        assert_eq!(require_text("name", ""), Err(ValidationError::Required("name")));
        assert_eq!(require_text("name", "Books"), Ok(()));
    }

    #[test]
    fn test_require_non_negative() {
        assert_eq!(
            require_non_negative("price", Decimal::new(-1, 2)),
            Err(ValidationError::Negative("price"))
        );
        assert_eq!(require_non_negative("price", Decimal::ZERO), Ok(()));
        assert_eq!(require_non_negative("price", Decimal::new(1000, 2)), Ok(()));
    }
}

//! Product Models

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::domain::entity::{
    Entity, EntityId, ValidationError, require_non_negative, require_text,
};

/// Product Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: EntityId,
    pub title: String,
    pub price: Decimal,

    /// Sale price. Not required to be lower than `price`.
    pub discounted_price: Decimal,
    pub description: String,

    /// Image URI or path.
    pub image: String,

    /// Ids of the categories this product belongs to.
    pub categories: BTreeSet<EntityId>,
}

impl Entity for Product {
    fn type_as_str() -> &'static str {
        "product"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn with_id(self, id: EntityId) -> Self {
        Self { id, ..self }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        require_non_negative("price", self.price)?;
        require_non_negative("discountedPrice", self.discounted_price)?;
        require_text("description", &self.description)?;
        require_text("image", &self.image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guide() -> Product {
        Product {
            id: 0,
            title: "Go Guide".to_string(),
            price: Decimal::new(1000, 2),
            discounted_price: Decimal::new(800, 2),
            description: "A guide".to_string(),
            image: "guide.png".to_string(),
            categories: BTreeSet::new(),
        }
    }

    #[test]
    fn test_valid_product_passes() {
        assert_eq!(guide().validate(), Ok(()));
    }

    #[test]
    fn test_discounted_price_may_exceed_price() {
        let product = Product {
            discounted_price: Decimal::new(2000, 2),
            ..guide()
        };

        assert_eq!(product.validate(), Ok(()));
    }

    #[test]
    fn test_negative_discounted_price_rejected() {
        let product = Product {
            discounted_price: Decimal::new(-1, 0),
            ..guide()
        };

        assert_eq!(
            product.validate(),
            Err(ValidationError::Negative("discountedPrice"))
        );
    }

    #[test]
    fn test_blank_image_rejected() {
        let product = Product {
            image: String::new(),
            ..guide()
        };

        assert_eq!(product.validate(), Err(ValidationError::Required("image")));
    }
}

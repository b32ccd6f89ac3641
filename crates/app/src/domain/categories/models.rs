//! Category Models

use std::collections::BTreeSet;

use crate::domain::entity::{Entity, EntityId, ValidationError, require_text};

/// Category Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: EntityId,
    pub name: String,

    /// Ids of the products in this category.
    pub products: BTreeSet<EntityId>,
}

impl Entity for Category {
    fn type_as_str() -> &'static str {
        "category"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn with_id(self, id: EntityId) -> Self {
        Self { id, ..self }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

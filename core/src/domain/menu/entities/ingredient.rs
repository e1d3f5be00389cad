use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{allergen::entities::AllergenTag, common::generate_timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub allergen_tags: Vec<AllergenTag>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub updated_by: Uuid,
}

impl Ingredient {
    pub fn new(name: String, allergen_tags: Vec<AllergenTag>, created_by: Uuid) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            allergen_tags,
            created_at: now,
            updated_at: now,
            created_by,
            updated_by: created_by,
        }
    }
}

/// A named replacement for an ingredient occurrence, carrying its own
/// allergen tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Substitute {
    pub name: String,
    pub allergen_tags: Vec<AllergenTag>,
}

/// Dish-to-ingredient link with per-occurrence modification flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DishIngredientLink {
    pub id: Uuid,
    pub dish_id: Uuid,
    pub ingredient_id: Uuid,
    pub is_removable: bool,
    pub is_substitutable: bool,
    /// Ordered substitute list; only meaningful when `is_substitutable`.
    pub substitutes: Vec<Substitute>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub updated_by: Uuid,
}

#[derive(Debug, Clone)]
pub struct DishIngredientLinkConfig {
    pub dish_id: Uuid,
    pub ingredient_id: Uuid,
    pub is_removable: bool,
    pub is_substitutable: bool,
    pub substitutes: Vec<Substitute>,
    pub created_by: Uuid,
}

impl DishIngredientLink {
    pub fn new(config: DishIngredientLinkConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            dish_id: config.dish_id,
            ingredient_id: config.ingredient_id,
            is_removable: config.is_removable,
            is_substitutable: config.is_substitutable,
            substitutes: config.substitutes,
            created_at: now,
            updated_at: now,
            created_by: config.created_by,
            updated_by: config.created_by,
        }
    }
}

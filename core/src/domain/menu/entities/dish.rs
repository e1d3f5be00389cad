use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{allergen::entities::AllergenTag, common::generate_timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Dish {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub description: String,
    /// Allergen tags derived from the dish description. They describe the
    /// dish as served and are never modifiable.
    pub description_allergens: Vec<AllergenTag>,
    pub nutrition: NutritionFacts,
    /// Legacy free-text modification policy, kept for back-compat.
    pub modification_policy: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub updated_by: Uuid,
}

/// Per-serving nutrition scalars. Every field is nullable; a missing value
/// means the operator never supplied it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionFacts {
    pub calories: Option<f64>,
    pub carbs_g: Option<f64>,
    pub protein_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub sodium_mg: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct DishConfig {
    pub name: String,
    pub category: String,
    pub description: String,
    pub description_allergens: Vec<AllergenTag>,
    pub nutrition: NutritionFacts,
    pub modification_policy: Option<String>,
    pub is_active: bool,
    pub created_by: Uuid,
}

impl Dish {
    pub fn new(config: DishConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: config.name,
            category: config.category,
            description: config.description,
            description_allergens: config.description_allergens,
            nutrition: config.nutrition,
            modification_policy: config.modification_policy,
            is_active: config.is_active,
            created_at: now,
            updated_at: now,
            created_by: config.created_by,
            updated_by: config.created_by,
        }
    }
}

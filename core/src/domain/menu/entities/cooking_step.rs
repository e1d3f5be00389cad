use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{allergen::entities::AllergenTag, common::generate_timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CookingStep {
    pub id: Uuid,
    pub dish_id: Uuid,
    pub step_number: i32,
    pub description: String,
    /// Allergens this step can expose the dish to through shared
    /// equipment or environment.
    pub cross_contact_risks: Vec<AllergenTag>,
    pub is_modifiable: bool,
    /// Subset of `cross_contact_risks` the kitchen can work around.
    /// Empty means every risk tag on this step is modifiable.
    pub modifiable_allergens: Vec<AllergenTag>,
    pub modification_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub updated_by: Uuid,
}

#[derive(Debug, Clone)]
pub struct CookingStepConfig {
    pub dish_id: Uuid,
    pub step_number: i32,
    pub description: String,
    pub cross_contact_risks: Vec<AllergenTag>,
    pub is_modifiable: bool,
    pub modifiable_allergens: Vec<AllergenTag>,
    pub modification_notes: Option<String>,
    pub created_by: Uuid,
}

impl CookingStep {
    pub fn new(config: CookingStepConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            dish_id: config.dish_id,
            step_number: config.step_number,
            description: config.description,
            cross_contact_risks: config.cross_contact_risks,
            is_modifiable: config.is_modifiable,
            modifiable_allergens: config.modifiable_allergens,
            modification_notes: config.modification_notes,
            created_at: now,
            updated_at: now,
            created_by: config.created_by,
            updated_by: config.created_by,
        }
    }
}

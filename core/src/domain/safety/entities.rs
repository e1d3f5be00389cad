use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SafetyStatus {
    Safe,
    SafeWithModifications,
    Unsafe,
}

/// Per-dish, per-profile verdict with human-readable supporting detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DishSafetyAssessment {
    pub dish_id: Uuid,
    pub dish_name: String,
    pub status: SafetyStatus,
    pub reasons: Vec<String>,
    /// Modification suggestions, populated when the status is
    /// `SafeWithModifications`.
    pub suggestions: Vec<String>,
    /// Preparation risks that cannot be worked around.
    pub cross_contact_risks: Vec<String>,
}

impl DishSafetyAssessment {
    pub fn safe(dish_id: Uuid, dish_name: String) -> Self {
        Self {
            dish_id,
            dish_name,
            status: SafetyStatus::Safe,
            reasons: Vec::new(),
            suggestions: Vec::new(),
            cross_contact_risks: Vec::new(),
        }
    }
}

use uuid::Uuid;

use crate::domain::allergen::value_objects::AllergenProfile;

#[derive(Debug, Clone)]
pub struct CheckDishSafetyInput {
    pub dish_id: Uuid,
    pub profile: AllergenProfile,
}

#[derive(Debug, Clone)]
pub struct CheckMenuSafetyInput {
    pub profile: AllergenProfile,
}

/// Whether an ingredient occurrence's allergen contribution can be
/// neutralized for a given profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModificationOutcome {
    Resolvable { suggestion: String },
    Unresolved,
}

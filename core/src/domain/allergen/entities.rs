use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Closed allergen taxonomy. Every tag on an ingredient, dish description,
/// substitute, or cooking step is one of these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AllergenTag {
    Milk,
    Eggs,
    Fish,
    Shellfish,
    TreeNuts,
    Peanuts,
    Wheat,
    Soybeans,
    Sesame,
    Gluten,
    Mustard,
    Celery,
    Sulfites,
    Lupin,
    Molluscs,
}

impl AllergenTag {
    /// Human-readable label, also the string all matching runs against.
    pub fn label(&self) -> &'static str {
        match self {
            AllergenTag::Milk => "Milk",
            AllergenTag::Eggs => "Eggs",
            AllergenTag::Fish => "Fish",
            AllergenTag::Shellfish => "Shellfish",
            AllergenTag::TreeNuts => "Tree Nuts",
            AllergenTag::Peanuts => "Peanuts",
            AllergenTag::Wheat => "Wheat",
            AllergenTag::Soybeans => "Soybeans",
            AllergenTag::Sesame => "Sesame",
            AllergenTag::Gluten => "Gluten",
            AllergenTag::Mustard => "Mustard",
            AllergenTag::Celery => "Celery",
            AllergenTag::Sulfites => "Sulfites",
            AllergenTag::Lupin => "Lupin",
            AllergenTag::Molluscs => "Molluscs",
        }
    }

    pub fn all() -> &'static [AllergenTag] {
        &[
            AllergenTag::Milk,
            AllergenTag::Eggs,
            AllergenTag::Fish,
            AllergenTag::Shellfish,
            AllergenTag::TreeNuts,
            AllergenTag::Peanuts,
            AllergenTag::Wheat,
            AllergenTag::Soybeans,
            AllergenTag::Sesame,
            AllergenTag::Gluten,
            AllergenTag::Mustard,
            AllergenTag::Celery,
            AllergenTag::Sulfites,
            AllergenTag::Lupin,
            AllergenTag::Molluscs,
        ]
    }
}

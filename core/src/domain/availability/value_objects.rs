use serde::{Deserialize, Serialize};

use crate::domain::{
    compatibility::entities::{CategoryRule, DietaryCategory},
    menu::{entities::NutritionFacts, value_objects::DishSnapshot},
};

/// Dish digest handed to the classification collaborator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DishSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub description_allergens: Vec<String>,
    pub nutrition: NutritionFacts,
    pub ingredients: Vec<IngredientSummary>,
    pub cooking_steps: Vec<CookingStepSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientSummary {
    pub name: String,
    pub allergen_tags: Vec<String>,
    pub removable: bool,
    pub substitutable: bool,
    pub substitutes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CookingStepSummary {
    pub step_number: i32,
    pub description: String,
    pub cross_contact_risks: Vec<String>,
    pub modifiable: bool,
}

/// Category digest handed to the collaborator alongside the menu.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: String,
    pub display_name: String,
    pub requirement: String,
}

impl DishSummary {
    pub fn from_snapshot(snapshot: &DishSnapshot) -> Self {
        Self {
            id: snapshot.dish.id.to_string(),
            name: snapshot.dish.name.clone(),
            description: snapshot.dish.description.clone(),
            description_allergens: snapshot
                .dish
                .description_allergens
                .iter()
                .map(|tag| tag.label().to_string())
                .collect(),
            nutrition: snapshot.dish.nutrition.clone(),
            ingredients: snapshot
                .ingredients
                .iter()
                .map(|occurrence| IngredientSummary {
                    name: occurrence.ingredient.name.clone(),
                    allergen_tags: occurrence
                        .ingredient
                        .allergen_tags
                        .iter()
                        .map(|tag| tag.label().to_string())
                        .collect(),
                    removable: occurrence.link.is_removable,
                    substitutable: occurrence.link.is_substitutable,
                    substitutes: occurrence
                        .link
                        .substitutes
                        .iter()
                        .map(|substitute| substitute.name.clone())
                        .collect(),
                })
                .collect(),
            cooking_steps: snapshot
                .cooking_steps
                .iter()
                .map(|step| CookingStepSummary {
                    step_number: step.step_number,
                    description: step.description.clone(),
                    cross_contact_risks: step
                        .cross_contact_risks
                        .iter()
                        .map(|tag| tag.label().to_string())
                        .collect(),
                    modifiable: step.is_modifiable,
                })
                .collect(),
        }
    }
}

impl CategorySummary {
    pub fn from_category(category: &DietaryCategory) -> Self {
        let requirement = match &category.rule {
            CategoryRule::AllergenFree { aliases } => {
                format!("Free of: {}", aliases.join(", "))
            }
            CategoryRule::DietaryStyle {
                banned_keywords,
                exempt_keywords,
                ..
            } => {
                if exempt_keywords.is_empty() {
                    format!("Excludes: {}", banned_keywords.join(", "))
                } else {
                    format!(
                        "Excludes: {} (except: {})",
                        banned_keywords.join(", "),
                        exempt_keywords.join(", ")
                    )
                }
            }
            CategoryRule::HealthFocused { metric, max_value } => {
                use crate::domain::compatibility::entities::NutritionMetric;
                let metric_name = match metric {
                    NutritionMetric::CarbsGrams => "carbohydrates (g)",
                    NutritionMetric::SodiumMg => "sodium (mg)",
                };
                format!("Requires {metric_name} below {max_value}")
            }
        };

        Self {
            id: category.id.clone(),
            display_name: category.display_name.clone(),
            requirement,
        }
    }
}

/// Collaborator reply, camelCase on the wire. Everything below the
/// `categories` array is optional; malformed entries are dropped during the
/// merge rather than failing the whole analysis.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMenuAnalysis {
    pub categories: Vec<RawCategoryJudgment>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCategoryJudgment {
    #[serde(default)]
    pub category_id: Option<String>,
    /// Collaborator's own status and totals are untrusted; bucketing is
    /// recomputed from the dish list.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_available: Option<u32>,
    #[serde(default)]
    pub available_dishes: Vec<RawCompliantDish>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub warning: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCompliantDish {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub requires_modification: bool,
    #[serde(default)]
    pub modifications: Vec<String>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::allergen::entities::AllergenTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityStatus {
    Compatible,
    CanModify,
    NotCompatible,
}

/// Nutrition scalar a health-focused category thresholds on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NutritionMetric {
    CarbsGrams,
    SodiumMg,
}

/// Rule definition for one dietary category. One evaluator per variant;
/// adding a variant will not compile until every evaluator handles it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CategoryRule {
    /// Alias keyword list matched against description tags, cross-contact
    /// tags, ingredient tags and ingredient names.
    AllergenFree { aliases: Vec<String> },
    /// Banned ingredient-keyword family plus blocker allergen tags; exempt
    /// keywords carve matches back out of the banned list.
    DietaryStyle {
        banned_keywords: Vec<String>,
        exempt_keywords: Vec<String>,
        blocker_tags: Vec<AllergenTag>,
    },
    /// Strict upper bound on a nutrition scalar. A dish with no data never
    /// qualifies.
    HealthFocused { metric: NutritionMetric, max_value: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DietaryCategory {
    pub id: String,
    pub display_name: String,
    pub rule: CategoryRule,
}

/// Column header of the compatibility matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MatrixCategory {
    pub id: String,
    pub display_name: String,
}

/// One dish's tri-state entries, aligned with the matrix category order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DishCompatibilityRow {
    pub dish_id: Uuid,
    pub dish_name: String,
    pub dish_category: String,
    pub entries: Vec<CompatibilityStatus>,
}

/// Dish × category compatibility grid for reporting and export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompatibilityMatrix {
    pub generated_at: DateTime<Utc>,
    pub categories: Vec<MatrixCategory>,
    pub rows: Vec<DishCompatibilityRow>,
}

/// Flat (dish, category, status) record for export consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MatrixExportRow {
    pub dish_id: Uuid,
    pub dish_name: String,
    pub category_id: String,
    pub status: CompatibilityStatus,
}

impl CompatibilityMatrix {
    pub fn export_rows(&self) -> Vec<MatrixExportRow> {
        let mut export = Vec::with_capacity(self.rows.len() * self.categories.len());
        for row in &self.rows {
            for (category, status) in self.categories.iter().zip(row.entries.iter()) {
                export.push(MatrixExportRow {
                    dish_id: row.dish_id,
                    dish_name: row.dish_name.clone(),
                    category_id: category.id.clone(),
                    status: *status,
                });
            }
        }
        export
    }
}

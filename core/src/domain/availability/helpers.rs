use std::collections::HashMap;

use chrono::Utc;

use crate::domain::{
    availability::{
        entities::{
            AvailabilityStatus, AvailabilitySummary, CategoryAvailability, CompliantDish,
            MenuAvailabilityReport,
        },
        value_objects::{CategorySummary, DishSummary, RawCategoryJudgment, RawMenuAnalysis},
    },
    common::entities::app_errors::CoreError,
    compatibility::catalog::DietaryCategoryCatalog,
    menu::value_objects::DishSnapshot,
};

const MENU_ANALYSIS_PROMPT: &str = "You are analyzing a restaurant menu for dietary plan availability. \
For every category listed below, judge which of the menu's dishes comply with the category \
requirement, either as served or after reasonable modifications (note the modifications). \
Respond with JSON matching the provided schema, one entry per category, using the given category ids.\n\n\
Categories:\n{categories}\n\nMenu:\n{menu}";

pub fn build_dish_summaries(snapshots: &[DishSnapshot]) -> Vec<DishSummary> {
    snapshots.iter().map(DishSummary::from_snapshot).collect()
}

/// Fill the analysis prompt template with the category digests and the menu.
pub fn render_analysis_prompt(
    summaries: &[DishSummary],
    catalog: &DietaryCategoryCatalog,
) -> Result<String, CoreError> {
    let categories: Vec<CategorySummary> = catalog
        .categories()
        .iter()
        .map(CategorySummary::from_category)
        .collect();

    let categories_json =
        serde_json::to_string_pretty(&categories).map_err(|_| CoreError::InternalServerError)?;
    let menu_json =
        serde_json::to_string_pretty(summaries).map_err(|_| CoreError::InternalServerError)?;

    Ok(MENU_ANALYSIS_PROMPT
        .replace("{categories}", &categories_json)
        .replace("{menu}", &menu_json))
}

/// Parse and shape-validate the collaborator reply. Semantic correctness is
/// not checked here; a reply that does not even parse is an unavailable
/// analysis, not a crash.
pub fn parse_menu_analysis(raw_response: &str) -> Result<RawMenuAnalysis, CoreError> {
    serde_json::from_str(raw_response).map_err(|e| {
        tracing::error!("Failed to parse menu analysis response: {}", e);
        CoreError::ExternalServiceError(format!("Failed to parse menu analysis response: {e}"))
    })
}

/// Merge raw per-category judgments into a report over the full catalog.
///
/// Judgments for unknown categories are dropped; categories the reply never
/// addressed are reported unavailable. Dish entries without a usable name
/// are dropped. Counts and buckets are recomputed from the merged dish
/// lists — the collaborator's own status and totals are ignored.
pub fn merge_raw_analysis(
    catalog: &DietaryCategoryCatalog,
    raw: RawMenuAnalysis,
) -> MenuAvailabilityReport {
    let mut judgments: HashMap<String, RawCategoryJudgment> = HashMap::new();
    for judgment in raw.categories {
        match judgment.category_id.clone() {
            Some(id) if catalog.get(&id).is_some() => {
                judgments.entry(id).or_insert(judgment);
            }
            Some(id) => {
                tracing::warn!("Dropping judgment for unknown category {}", id);
            }
            None => {
                tracing::warn!("Dropping judgment without a category id");
            }
        }
    }

    let mut categories = Vec::with_capacity(catalog.len());
    let mut summary = AvailabilitySummary::default();

    for category in catalog.categories() {
        let (dishes, reason, warning) = match judgments.remove(&category.id) {
            Some(judgment) => {
                let dishes: Vec<CompliantDish> = judgment
                    .available_dishes
                    .into_iter()
                    .filter_map(|raw_dish| match raw_dish.name {
                        Some(name) if !name.trim().is_empty() => Some(CompliantDish {
                            dish_id: raw_dish.id,
                            name,
                            requires_modification: raw_dish.requires_modification,
                            modifications: raw_dish.modifications,
                        }),
                        _ => {
                            tracing::warn!(
                                "Dropping unnamed dish entry for category {}",
                                category.id
                            );
                            None
                        }
                    })
                    .collect();
                (dishes, judgment.reason, judgment.warning)
            }
            None => (
                Vec::new(),
                Some("No judgment returned for this category".to_string()),
                None,
            ),
        };

        let status = AvailabilityStatus::from_compliant_count(dishes.len());
        match status {
            AvailabilityStatus::Available => summary.available += 1,
            AvailabilityStatus::Limited => summary.limited += 1,
            AvailabilityStatus::Unavailable => summary.unavailable += 1,
        }

        categories.push(CategoryAvailability {
            category_id: category.id.clone(),
            display_name: category.display_name.clone(),
            status,
            total_available: dishes.len(),
            dishes,
            reason,
            warning,
        });
    }

    MenuAvailabilityReport {
        generated_at: Utc::now(),
        categories,
        summary,
    }
}

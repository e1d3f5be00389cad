use crate::domain::{
    allergen::{entities::AllergenTag, helpers::allergen_matches},
    compatibility::entities::{CategoryRule, CompatibilityStatus, DietaryCategory, NutritionMetric},
    menu::{
        entities::NutritionFacts,
        value_objects::{DishSnapshot, IngredientOccurrence},
    },
    safety::helpers::step_tag_modifiable,
};

/// Evaluate one dish against one category. Profile-independent and
/// deterministic; no external calls.
pub fn evaluate_dish(snapshot: &DishSnapshot, category: &DietaryCategory) -> CompatibilityStatus {
    match &category.rule {
        CategoryRule::AllergenFree { aliases } => evaluate_allergen_free(snapshot, aliases),
        CategoryRule::DietaryStyle {
            banned_keywords,
            exempt_keywords,
            blocker_tags,
        } => evaluate_dietary_style(snapshot, banned_keywords, exempt_keywords, blocker_tags),
        CategoryRule::HealthFocused { metric, max_value } => {
            evaluate_health_focused(&snapshot.dish.nutrition, *metric, *max_value)
        }
    }
}

/// Tracks the forced-vs-modifiable precedence shared by the allergen-free
/// and dietary-style evaluators: any forced match wins, then any modifiable
/// candidate, then compatible.
#[derive(Debug, Default)]
struct Precedence {
    forced: bool,
    can_modify: bool,
}

impl Precedence {
    fn force(&mut self) {
        self.forced = true;
    }

    fn candidate(&mut self) {
        self.can_modify = true;
    }

    fn occurrence(&mut self, occurrence: &IngredientOccurrence) {
        if occurrence.link.is_removable || occurrence.link.is_substitutable {
            self.candidate();
        } else {
            self.force();
        }
    }

    fn status(&self) -> CompatibilityStatus {
        if self.forced {
            CompatibilityStatus::NotCompatible
        } else if self.can_modify {
            CompatibilityStatus::CanModify
        } else {
            CompatibilityStatus::Compatible
        }
    }
}

fn matches_any(label: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|keyword| allergen_matches(label, keyword))
}

fn evaluate_allergen_free(snapshot: &DishSnapshot, aliases: &[String]) -> CompatibilityStatus {
    let mut precedence = Precedence::default();

    for tag in &snapshot.dish.description_allergens {
        if matches_any(tag.label(), aliases) {
            precedence.force();
        }
    }

    for step in &snapshot.cooking_steps {
        for tag in &step.cross_contact_risks {
            if !matches_any(tag.label(), aliases) {
                continue;
            }
            if step_tag_modifiable(step, *tag) {
                precedence.candidate();
            } else {
                precedence.force();
            }
        }
    }

    for occurrence in &snapshot.ingredients {
        let tag_match = occurrence
            .ingredient
            .allergen_tags
            .iter()
            .any(|tag| matches_any(tag.label(), aliases));
        let name_match = matches_any(&occurrence.ingredient.name, aliases);

        if tag_match || name_match {
            precedence.occurrence(occurrence);
        }
    }

    precedence.status()
}

fn evaluate_dietary_style(
    snapshot: &DishSnapshot,
    banned_keywords: &[String],
    exempt_keywords: &[String],
    blocker_tags: &[AllergenTag],
) -> CompatibilityStatus {
    let mut precedence = Precedence::default();

    // Description tags are as-served claims; a blocker match is forced.
    for tag in &snapshot.dish.description_allergens {
        if blocker_tags.contains(tag) {
            precedence.force();
        }
    }

    for step in &snapshot.cooking_steps {
        for tag in &step.cross_contact_risks {
            if !blocker_tags.contains(tag) {
                continue;
            }
            if step_tag_modifiable(step, *tag) {
                precedence.candidate();
            } else {
                precedence.force();
            }
        }
    }

    for occurrence in &snapshot.ingredients {
        let name = &occurrence.ingredient.name;
        let name_banned =
            matches_any(name, banned_keywords) && !matches_any(name, exempt_keywords);
        let tag_blocked = occurrence
            .ingredient
            .allergen_tags
            .iter()
            .any(|tag| blocker_tags.contains(tag));

        if name_banned || tag_blocked {
            precedence.occurrence(occurrence);
        }
    }

    precedence.status()
}

fn evaluate_health_focused(
    nutrition: &NutritionFacts,
    metric: NutritionMetric,
    max_value: f64,
) -> CompatibilityStatus {
    let value = match metric {
        NutritionMetric::CarbsGrams => nutrition.carbs_g,
        NutritionMetric::SodiumMg => nutrition.sodium_mg,
    };

    // No claim without data.
    match value {
        Some(value) if value < max_value => CompatibilityStatus::Compatible,
        _ => CompatibilityStatus::NotCompatible,
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        compatibility::catalog::DietaryCategoryCatalog,
        menu::entities::{
            CookingStep, CookingStepConfig, Dish, DishConfig, DishIngredientLink,
            DishIngredientLinkConfig, Ingredient, Substitute,
        },
    };

    fn dish(description_allergens: Vec<AllergenTag>, nutrition: NutritionFacts) -> Dish {
        Dish::new(DishConfig {
            name: "Test Dish".to_string(),
            category: "Mains".to_string(),
            description: "A test dish".to_string(),
            description_allergens,
            nutrition,
            modification_policy: None,
            is_active: true,
            created_by: Uuid::new_v4(),
        })
    }

    fn occurrence(
        dish: &Dish,
        name: &str,
        tags: Vec<AllergenTag>,
        removable: bool,
        substitutable: bool,
    ) -> IngredientOccurrence {
        let ingredient = Ingredient::new(name.to_string(), tags, Uuid::new_v4());
        let link = DishIngredientLink::new(DishIngredientLinkConfig {
            dish_id: dish.id,
            ingredient_id: ingredient.id,
            is_removable: removable,
            is_substitutable: substitutable,
            substitutes: Vec::<Substitute>::new(),
            created_by: Uuid::new_v4(),
        });
        IngredientOccurrence { ingredient, link }
    }

    fn step(dish: &Dish, risks: Vec<AllergenTag>, modifiable: bool) -> CookingStep {
        CookingStep::new(CookingStepConfig {
            dish_id: dish.id,
            step_number: 1,
            description: "Cook on shared equipment".to_string(),
            cross_contact_risks: risks,
            is_modifiable: modifiable,
            modifiable_allergens: vec![],
            modification_notes: None,
            created_by: Uuid::new_v4(),
        })
    }

    fn snapshot(
        dish: Dish,
        ingredients: Vec<IngredientOccurrence>,
        cooking_steps: Vec<CookingStep>,
    ) -> DishSnapshot {
        DishSnapshot {
            dish,
            ingredients,
            cooking_steps,
        }
    }

    fn category(id: &str) -> DietaryCategory {
        DietaryCategoryCatalog::builtin()
            .get(id)
            .cloned()
            .unwrap_or_else(|| panic!("missing builtin category {id}"))
    }

    #[test]
    fn test_shellfish_alias_matches_ingredient_name() {
        let d = dish(vec![], NutritionFacts::default());
        let occ = occurrence(&d, "Grilled Shrimp", vec![], false, false);
        let snap = snapshot(d, vec![occ], vec![]);

        let status = evaluate_dish(&snap, &category("shellfish-free"));
        assert_eq!(status, CompatibilityStatus::NotCompatible);
    }

    #[test]
    fn test_removable_match_is_can_modify() {
        let d = dish(vec![], NutritionFacts::default());
        let occ = occurrence(&d, "Feta Cheese", vec![AllergenTag::Milk], true, false);
        let snap = snapshot(d, vec![occ], vec![]);

        let status = evaluate_dish(&snap, &category("dairy-free"));
        assert_eq!(status, CompatibilityStatus::CanModify);
    }

    #[test]
    fn test_description_tag_forces_not_compatible_over_removable() {
        let d = dish(vec![AllergenTag::Milk], NutritionFacts::default());
        let occ = occurrence(&d, "Feta Cheese", vec![AllergenTag::Milk], true, false);
        let snap = snapshot(d, vec![occ], vec![]);

        let status = evaluate_dish(&snap, &category("dairy-free"));
        assert_eq!(status, CompatibilityStatus::NotCompatible);
    }

    #[test]
    fn test_modifiable_cross_contact_is_can_modify() {
        let d = dish(vec![], NutritionFacts::default());
        let s = step(&d, vec![AllergenTag::Peanuts], true);
        let snap = snapshot(d, vec![], vec![s]);

        let status = evaluate_dish(&snap, &category("peanut-free"));
        assert_eq!(status, CompatibilityStatus::CanModify);
    }

    #[test]
    fn test_fixed_cross_contact_is_not_compatible() {
        let d = dish(vec![], NutritionFacts::default());
        let s = step(&d, vec![AllergenTag::Peanuts], false);
        let snap = snapshot(d, vec![], vec![s]);

        let status = evaluate_dish(&snap, &category("peanut-free"));
        assert_eq!(status, CompatibilityStatus::NotCompatible);
    }

    #[test]
    fn test_clean_dish_is_compatible() {
        let d = dish(vec![], NutritionFacts::default());
        let occ = occurrence(&d, "Rice", vec![], false, false);
        let snap = snapshot(d, vec![occ], vec![]);

        let status = evaluate_dish(&snap, &category("peanut-free"));
        assert_eq!(status, CompatibilityStatus::Compatible);
    }

    #[test]
    fn test_vegan_bans_honey_by_keyword() {
        let d = dish(vec![], NutritionFacts::default());
        let occ = occurrence(&d, "Wildflower Honey", vec![], false, false);
        let snap = snapshot(d, vec![occ], vec![]);

        assert_eq!(
            evaluate_dish(&snap, &category("vegan")),
            CompatibilityStatus::NotCompatible
        );
        assert_eq!(
            evaluate_dish(&snap, &category("vegetarian")),
            CompatibilityStatus::Compatible
        );
    }

    #[test]
    fn test_pescatarian_carve_out_keeps_seafood() {
        let d = dish(vec![], NutritionFacts::default());
        // "Crabmeat" hits the "meat" keyword; the seafood exemption wins.
        let occ = occurrence(&d, "Crabmeat", vec![AllergenTag::Shellfish], false, false);
        let snap = snapshot(d, vec![occ], vec![]);

        assert_eq!(
            evaluate_dish(&snap, &category("pescatarian")),
            CompatibilityStatus::Compatible
        );
        assert_eq!(
            evaluate_dish(&snap, &category("vegetarian")),
            CompatibilityStatus::NotCompatible
        );
    }

    #[test]
    fn test_vegan_description_blocker_is_forced() {
        let d = dish(vec![AllergenTag::Milk], NutritionFacts::default());
        let snap = snapshot(d, vec![], vec![]);

        assert_eq!(
            evaluate_dish(&snap, &category("vegan")),
            CompatibilityStatus::NotCompatible
        );
    }

    #[test]
    fn test_substitutable_banned_ingredient_is_can_modify() {
        let d = dish(vec![], NutritionFacts::default());
        let occ = occurrence(&d, "Chicken Breast", vec![], false, true);
        let snap = snapshot(d, vec![occ], vec![]);

        assert_eq!(
            evaluate_dish(&snap, &category("vegetarian")),
            CompatibilityStatus::CanModify
        );
    }

    #[test]
    fn test_low_carb_threshold() {
        let under = dish(
            vec![],
            NutritionFacts {
                carbs_g: Some(12.0),
                ..NutritionFacts::default()
            },
        );
        let over = dish(
            vec![],
            NutritionFacts {
                carbs_g: Some(45.0),
                ..NutritionFacts::default()
            },
        );

        assert_eq!(
            evaluate_dish(&snapshot(under, vec![], vec![]), &category("low-carb")),
            CompatibilityStatus::Compatible
        );
        assert_eq!(
            evaluate_dish(&snapshot(over, vec![], vec![]), &category("low-carb")),
            CompatibilityStatus::NotCompatible
        );
    }

    #[test]
    fn test_missing_nutrition_is_never_compatible() {
        let d = dish(vec![], NutritionFacts::default());
        let snap = snapshot(d, vec![], vec![]);

        assert_eq!(
            evaluate_dish(&snap, &category("low-carb")),
            CompatibilityStatus::NotCompatible
        );
        assert_eq!(
            evaluate_dish(&snap, &category("low-sodium")),
            CompatibilityStatus::NotCompatible
        );
    }

    #[test]
    fn test_low_sodium_threshold() {
        let d = dish(
            vec![],
            NutritionFacts {
                sodium_mg: Some(420.0),
                ..NutritionFacts::default()
            },
        );
        let snap = snapshot(d, vec![], vec![]);

        assert_eq!(
            evaluate_dish(&snap, &category("low-sodium")),
            CompatibilityStatus::Compatible
        );
    }
}

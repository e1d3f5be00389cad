use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    allergen::{entities::AllergenTag, helpers::allergen_matches, value_objects::AllergenProfile},
    menu::{
        entities::CookingStep,
        value_objects::{DishSnapshot, IngredientOccurrence},
    },
    safety::{
        entities::{DishSafetyAssessment, SafetyStatus},
        value_objects::ModificationOutcome,
    },
};

/// Legacy free-text policies that imply an ingredient can come off a dish.
static REMOVABLE_POLICY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(remov|optional|substitut)").expect("policy keyword pattern is valid")
});

/// One allergen source that matched the profile, tagged with whether it can
/// be neutralized. The verdict compares these per item, never by count.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FoundSignal {
    label: String,
    state: SignalState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SignalState {
    Forced { reason: String },
    Modifiable { suggestion: String },
}

/// Decide whether an ingredient occurrence's allergen contribution can be
/// neutralized, in priority order: removal, then a substitute free of
/// profile allergens, then the legacy free-text policy fallback.
pub fn resolve_ingredient(
    occurrence: &IngredientOccurrence,
    modification_policy: Option<&str>,
    profile: &AllergenProfile,
) -> ModificationOutcome {
    let ingredient = &occurrence.ingredient;
    let link = &occurrence.link;

    if link.is_removable {
        return ModificationOutcome::Resolvable {
            suggestion: format!("Remove {}", ingredient.name),
        };
    }

    if link.is_substitutable {
        let safe_substitutes: Vec<&str> = link
            .substitutes
            .iter()
            .filter(|substitute| {
                !substitute
                    .allergen_tags
                    .iter()
                    .any(|tag| profile.matched_entry(tag.label()).is_some())
            })
            .map(|substitute| substitute.name.as_str())
            .collect();

        if safe_substitutes.is_empty() {
            return ModificationOutcome::Unresolved;
        }

        return ModificationOutcome::Resolvable {
            suggestion: format!(
                "Substitute {} with {}",
                ingredient.name,
                safe_substitutes.join(" or ")
            ),
        };
    }

    if modification_policy.is_some_and(|policy| REMOVABLE_POLICY.is_match(policy)) {
        return ModificationOutcome::Resolvable {
            suggestion: format!("Remove {}", ingredient.name),
        };
    }

    ModificationOutcome::Unresolved
}

/// A cooking-step risk tag is modifiable only when the step itself is, and
/// the tag is in the step's modifiable subset (empty subset means every
/// risk tag on the step is).
pub fn step_tag_modifiable(step: &CookingStep, tag: AllergenTag) -> bool {
    if !step.is_modifiable {
        return false;
    }

    step.modifiable_allergens.is_empty()
        || step
            .modifiable_allergens
            .iter()
            .any(|modifiable| allergen_matches(tag.label(), modifiable.label()))
}

/// Classify one dish against one profile.
///
/// Pure and deterministic: identical inputs always produce the identical
/// assessment. Any single non-modifiable signal (a description-level tag or
/// a fixed cross-contact risk) forces `Unsafe`, even when every
/// ingredient-level allergen is individually resolvable.
pub fn classify_dish(snapshot: &DishSnapshot, profile: &AllergenProfile) -> DishSafetyAssessment {
    let dish = &snapshot.dish;

    if profile.is_empty() {
        return DishSafetyAssessment::safe(dish.id, dish.name.clone());
    }

    let mut signals: Vec<FoundSignal> = Vec::new();

    // Description tags describe the dish as served; a match is never
    // modifiable.
    for tag in &dish.description_allergens {
        if profile.matched_entry(tag.label()).is_some() {
            signals.push(FoundSignal {
                label: tag.label().to_string(),
                state: SignalState::Forced {
                    reason: format!("Menu description indicates {}", tag.label()),
                },
            });
        }
    }

    for occurrence in &snapshot.ingredients {
        let matched_tags: Vec<AllergenTag> = occurrence
            .ingredient
            .allergen_tags
            .iter()
            .copied()
            .filter(|tag| profile.matched_entry(tag.label()).is_some())
            .collect();

        if matched_tags.is_empty() {
            continue;
        }

        let outcome = resolve_ingredient(occurrence, dish.modification_policy.as_deref(), profile);
        for tag in matched_tags {
            let state = match &outcome {
                ModificationOutcome::Resolvable { suggestion } => SignalState::Modifiable {
                    suggestion: suggestion.clone(),
                },
                ModificationOutcome::Unresolved => SignalState::Forced {
                    reason: format!(
                        "Contains {} ({}) and it cannot be removed or substituted",
                        occurrence.ingredient.name,
                        tag.label()
                    ),
                },
            };
            signals.push(FoundSignal {
                label: tag.label().to_string(),
                state,
            });
        }
    }

    for step in &snapshot.cooking_steps {
        for tag in &step.cross_contact_risks {
            if profile.matched_entry(tag.label()).is_none() {
                continue;
            }

            let state = if step_tag_modifiable(step, *tag) {
                let suggestion = match &step.modification_notes {
                    Some(notes) if !notes.trim().is_empty() => notes.clone(),
                    _ => format!("Preparation step {} can be adjusted on request", step.step_number),
                };
                SignalState::Modifiable { suggestion }
            } else {
                SignalState::Forced {
                    reason: format!(
                        "Cross-contact risk with {} during step {}: {}",
                        tag.label(),
                        step.step_number,
                        step.description
                    ),
                }
            };
            signals.push(FoundSignal {
                label: tag.label().to_string(),
                state,
            });
        }
    }

    build_assessment(snapshot, signals)
}

fn build_assessment(snapshot: &DishSnapshot, signals: Vec<FoundSignal>) -> DishSafetyAssessment {
    let dish = &snapshot.dish;

    if signals.is_empty() {
        return DishSafetyAssessment::safe(dish.id, dish.name.clone());
    }

    let found_labels = dedup(signals.iter().map(|signal| signal.label.clone()));
    let contains_line = format!("Contains: {}", found_labels.join(", "));

    let forced_reasons: Vec<String> = signals
        .iter()
        .filter_map(|signal| match &signal.state {
            SignalState::Forced { reason } => Some(reason.clone()),
            SignalState::Modifiable { .. } => None,
        })
        .collect();

    let suggestions = dedup(signals.iter().filter_map(|signal| match &signal.state {
        SignalState::Modifiable { suggestion } => Some(suggestion.clone()),
        SignalState::Forced { .. } => None,
    }));

    let cross_contact_risks = dedup(
        forced_reasons
            .iter()
            .filter(|reason| reason.starts_with("Cross-contact risk"))
            .cloned(),
    );

    if forced_reasons.is_empty() {
        return DishSafetyAssessment {
            dish_id: dish.id,
            dish_name: dish.name.clone(),
            status: SafetyStatus::SafeWithModifications,
            reasons: vec![contains_line],
            suggestions,
            cross_contact_risks: Vec::new(),
        };
    }

    let mut reasons = dedup(forced_reasons.iter().cloned());
    reasons.push(contains_line);

    DishSafetyAssessment {
        dish_id: dish.id,
        dish_name: dish.name.clone(),
        status: SafetyStatus::Unsafe,
        reasons,
        suggestions: Vec::new(),
        cross_contact_risks,
    }
}

fn dedup<I: IntoIterator<Item = String>>(items: I) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}

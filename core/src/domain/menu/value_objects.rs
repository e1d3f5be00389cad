use crate::domain::menu::entities::{CookingStep, Dish, DishIngredientLink, Ingredient};

/// One ingredient as it occurs on a dish: the ingredient itself plus the
/// link flags governing removal and substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientOccurrence {
    pub ingredient: Ingredient,
    pub link: DishIngredientLink,
}

/// A dish with its resolved ingredient occurrences and ordered cooking
/// steps. Classification runs against this, never against raw links.
#[derive(Debug, Clone, PartialEq)]
pub struct DishSnapshot {
    pub dish: Dish,
    pub ingredients: Vec<IngredientOccurrence>,
    pub cooking_steps: Vec<CookingStep>,
}

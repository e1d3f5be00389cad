use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::entities::{CookingStep, Dish, DishIngredientLink, Ingredient},
};

/// Read-only port onto the persisted dish graph. The menu-authoring
/// workflow owns writes; this engine only consumes snapshots.
#[cfg_attr(test, mockall::automock)]
pub trait MenuRepository: Send + Sync {
    fn get_dish_by_id(
        &self,
        dish_id: Uuid,
    ) -> impl Future<Output = Result<Option<Dish>, CoreError>> + Send;

    fn list_active_dishes(&self) -> impl Future<Output = Result<Vec<Dish>, CoreError>> + Send;

    fn get_ingredient_links(
        &self,
        dish_id: Uuid,
    ) -> impl Future<Output = Result<Vec<DishIngredientLink>, CoreError>> + Send;

    fn get_ingredient_by_id(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    fn get_cooking_steps(
        &self,
        dish_id: Uuid,
    ) -> impl Future<Output = Result<Vec<CookingStep>, CoreError>> + Send;
}

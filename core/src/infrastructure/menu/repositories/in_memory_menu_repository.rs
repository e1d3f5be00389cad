use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{
        entities::{CookingStep, Dish, DishIngredientLink, Ingredient},
        ports::MenuRepository,
    },
};

/// Process-local `MenuRepository` adapter, seeded through the insert
/// methods. Persistence proper lives upstream; this backs embedded use
/// and tests.
#[derive(Debug, Default)]
pub struct InMemoryMenuRepository {
    dishes: RwLock<HashMap<Uuid, Dish>>,
    ingredients: RwLock<HashMap<Uuid, Ingredient>>,
    links_by_dish: RwLock<HashMap<Uuid, Vec<DishIngredientLink>>>,
    steps_by_dish: RwLock<HashMap<Uuid, Vec<CookingStep>>>,
}

impl InMemoryMenuRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_dish(&self, dish: Dish) {
        if let Ok(mut dishes) = self.dishes.write() {
            dishes.insert(dish.id, dish);
        }
    }

    pub fn insert_ingredient(&self, ingredient: Ingredient) {
        if let Ok(mut ingredients) = self.ingredients.write() {
            ingredients.insert(ingredient.id, ingredient);
        }
    }

    pub fn insert_ingredient_link(&self, link: DishIngredientLink) {
        if let Ok(mut links) = self.links_by_dish.write() {
            links.entry(link.dish_id).or_default().push(link);
        }
    }

    pub fn insert_cooking_step(&self, step: CookingStep) {
        if let Ok(mut steps) = self.steps_by_dish.write() {
            steps.entry(step.dish_id).or_default().push(step);
        }
    }
}

impl MenuRepository for InMemoryMenuRepository {
    async fn get_dish_by_id(&self, dish_id: Uuid) -> Result<Option<Dish>, CoreError> {
        let dishes = self.dishes.read().map_err(|_| CoreError::InternalServerError)?;
        Ok(dishes.get(&dish_id).cloned())
    }

    async fn list_active_dishes(&self) -> Result<Vec<Dish>, CoreError> {
        let dishes = self.dishes.read().map_err(|_| CoreError::InternalServerError)?;
        Ok(dishes.values().filter(|dish| dish.is_active).cloned().collect())
    }

    async fn get_ingredient_links(
        &self,
        dish_id: Uuid,
    ) -> Result<Vec<DishIngredientLink>, CoreError> {
        let links = self
            .links_by_dish
            .read()
            .map_err(|_| CoreError::InternalServerError)?;
        Ok(links.get(&dish_id).cloned().unwrap_or_default())
    }

    async fn get_ingredient_by_id(
        &self,
        ingredient_id: Uuid,
    ) -> Result<Option<Ingredient>, CoreError> {
        let ingredients = self
            .ingredients
            .read()
            .map_err(|_| CoreError::InternalServerError)?;
        Ok(ingredients.get(&ingredient_id).cloned())
    }

    async fn get_cooking_steps(&self, dish_id: Uuid) -> Result<Vec<CookingStep>, CoreError> {
        let steps = self
            .steps_by_dish
            .read()
            .map_err(|_| CoreError::InternalServerError)?;
        Ok(steps.get(&dish_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::entities::{DishConfig, NutritionFacts};

    fn dish(name: &str, is_active: bool) -> Dish {
        Dish::new(DishConfig {
            name: name.to_string(),
            category: "Mains".to_string(),
            description: String::new(),
            description_allergens: vec![],
            nutrition: NutritionFacts::default(),
            modification_policy: None,
            is_active,
            created_by: Uuid::new_v4(),
        })
    }

    #[tokio::test]
    async fn test_list_active_dishes_filters_inactive() {
        let repository = InMemoryMenuRepository::new();
        repository.insert_dish(dish("Active", true));
        repository.insert_dish(dish("Retired", false));

        let dishes = repository.list_active_dishes().await.expect("list succeeds");
        assert_eq!(dishes.len(), 1);
        assert_eq!(dishes[0].name, "Active");
    }

    #[tokio::test]
    async fn test_missing_dish_is_none() {
        let repository = InMemoryMenuRepository::new();
        let found = repository
            .get_dish_by_id(Uuid::new_v4())
            .await
            .expect("lookup succeeds");
        assert!(found.is_none());
    }
}

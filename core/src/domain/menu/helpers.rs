use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{
        entities::Dish,
        ports::MenuRepository,
        value_objects::{DishSnapshot, IngredientOccurrence},
    },
};

/// Resolve a dish's ingredient links and cooking steps into a snapshot.
///
/// A link pointing at a missing ingredient is skipped from allergen
/// computation — the occurrence contributes nothing, favorable or not.
pub async fn load_dish_snapshot<M>(menu_repository: &M, dish: Dish) -> Result<DishSnapshot, CoreError>
where
    M: MenuRepository,
{
    let links = menu_repository.get_ingredient_links(dish.id).await?;

    let mut ingredients = Vec::with_capacity(links.len());
    for link in links {
        match menu_repository.get_ingredient_by_id(link.ingredient_id).await? {
            Some(ingredient) => ingredients.push(IngredientOccurrence { ingredient, link }),
            None => {
                tracing::warn!(
                    "Skipping ingredient link {} on dish {}: ingredient {} not found",
                    link.id,
                    dish.id,
                    link.ingredient_id
                );
            }
        }
    }

    let mut cooking_steps = menu_repository.get_cooking_steps(dish.id).await?;
    cooking_steps.sort_by_key(|step| step.step_number);

    Ok(DishSnapshot {
        dish,
        ingredients,
        cooking_steps,
    })
}

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    availability::ports::LlmClient,
    common::{entities::app_errors::CoreError, services::Service},
    compatibility::{
        entities::{CompatibilityMatrix, DishCompatibilityRow, MatrixCategory},
        helpers::evaluate_dish,
        ports::CompatibilityMatrixService,
    },
    menu::{helpers::load_dish_snapshot, ports::MenuRepository, value_objects::DishSnapshot},
};

impl<M, L> CompatibilityMatrixService for Service<M, L>
where
    M: MenuRepository,
    L: LlmClient,
{
    async fn build_matrix(&self) -> Result<CompatibilityMatrix, CoreError> {
        let mut dishes = self.menu_repository.list_active_dishes().await?;
        dishes.sort_by(|a, b| a.category.cmp(&b.category).then(a.name.cmp(&b.name)));

        let categories: Vec<MatrixCategory> = self
            .category_catalog
            .categories()
            .iter()
            .map(|category| MatrixCategory {
                id: category.id.clone(),
                display_name: category.display_name.clone(),
            })
            .collect();

        let mut rows = Vec::with_capacity(dishes.len());
        for dish in dishes {
            let snapshot = load_dish_snapshot(&self.menu_repository, dish).await?;
            rows.push(self.evaluate_row(&snapshot));
        }

        tracing::debug!(
            "Built compatibility matrix: {} dishes x {} categories",
            rows.len(),
            categories.len()
        );

        Ok(CompatibilityMatrix {
            generated_at: Utc::now(),
            categories,
            rows,
        })
    }

    async fn dish_compatibility(&self, dish_id: Uuid) -> Result<DishCompatibilityRow, CoreError> {
        let dish = self
            .menu_repository
            .get_dish_by_id(dish_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let snapshot = load_dish_snapshot(&self.menu_repository, dish).await?;

        Ok(self.evaluate_row(&snapshot))
    }
}

impl<M, L> Service<M, L>
where
    M: MenuRepository,
    L: LlmClient,
{
    fn evaluate_row(&self, snapshot: &DishSnapshot) -> DishCompatibilityRow {
        let entries = self
            .category_catalog
            .categories()
            .iter()
            .map(|category| evaluate_dish(snapshot, category))
            .collect();

        DishCompatibilityRow {
            dish_id: snapshot.dish.id,
            dish_name: snapshot.dish.name.clone(),
            dish_category: snapshot.dish.category.clone(),
            entries,
        }
    }
}

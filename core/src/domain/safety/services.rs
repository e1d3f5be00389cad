use crate::domain::{
    availability::ports::LlmClient,
    common::{entities::app_errors::CoreError, services::Service},
    menu::{helpers::load_dish_snapshot, ports::MenuRepository},
    safety::{
        entities::DishSafetyAssessment,
        helpers::classify_dish,
        ports::DishSafetyService,
        value_objects::{CheckDishSafetyInput, CheckMenuSafetyInput},
    },
};

impl<M, L> DishSafetyService for Service<M, L>
where
    M: MenuRepository,
    L: LlmClient,
{
    async fn check_dish(
        &self,
        input: CheckDishSafetyInput,
    ) -> Result<DishSafetyAssessment, CoreError> {
        let dish = self
            .menu_repository
            .get_dish_by_id(input.dish_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let snapshot = load_dish_snapshot(&self.menu_repository, dish).await?;

        Ok(classify_dish(&snapshot, &input.profile))
    }

    async fn check_menu(
        &self,
        input: CheckMenuSafetyInput,
    ) -> Result<Vec<DishSafetyAssessment>, CoreError> {
        let mut dishes = self.menu_repository.list_active_dishes().await?;

        // Display ordering only; verdicts are per-dish and order-free.
        dishes.sort_by(|a, b| a.category.cmp(&b.category).then(a.name.cmp(&b.name)));

        let mut assessments = Vec::with_capacity(dishes.len());
        for dish in dishes {
            let snapshot = load_dish_snapshot(&self.menu_repository, dish).await?;
            assessments.push(classify_dish(&snapshot, &input.profile));
        }

        tracing::debug!(
            "Classified {} active dishes against a {}-entry profile",
            assessments.len(),
            input.profile.entries().len()
        );

        Ok(assessments)
    }
}

use crate::domain::{
    availability::{
        entities::{AvailabilityAnalysis, MenuAvailabilityReport},
        helpers::{
            build_dish_summaries, merge_raw_analysis, parse_menu_analysis, render_analysis_prompt,
        },
        ports::{DietaryAvailabilityService, LlmClient},
        schema::get_menu_availability_schema,
    },
    common::{entities::app_errors::CoreError, services::Service},
    menu::{helpers::load_dish_snapshot, ports::MenuRepository},
};

impl<M, L> DietaryAvailabilityService for Service<M, L>
where
    M: MenuRepository,
    L: LlmClient,
{
    async fn analyze_menu(&self) -> Result<MenuAvailabilityReport, CoreError> {
        // 1. Load and order the active menu
        let mut dishes = self.menu_repository.list_active_dishes().await?;
        dishes.sort_by(|a, b| a.category.cmp(&b.category).then(a.name.cmp(&b.name)));

        let mut snapshots = Vec::with_capacity(dishes.len());
        for dish in dishes {
            snapshots.push(load_dish_snapshot(&self.menu_repository, dish).await?);
        }

        // 2. Prepare the collaborator input
        let summaries = build_dish_summaries(&snapshots);
        let prompt = render_analysis_prompt(&summaries, &self.category_catalog)?;
        let response_schema = get_menu_availability_schema();

        // 3. Call the collaborator
        let raw_response = match self.llm_client.generate_with_text(prompt, response_schema).await
        {
            Ok(raw_response) => raw_response,
            Err(e) => {
                return Err(self
                    .mark_analysis_unavailable(format!("Menu analysis call failed: {e}"))
                    .await);
            }
        };

        // 4. Shape-validate the reply
        let raw_analysis = match parse_menu_analysis(&raw_response) {
            Ok(raw_analysis) => raw_analysis,
            Err(e) => {
                return Err(self
                    .mark_analysis_unavailable(format!("Menu analysis response rejected: {e}"))
                    .await);
            }
        };

        // 5. Merge, bucket, and supersede the previous report wholesale
        let report = merge_raw_analysis(&self.category_catalog, raw_analysis);

        let mut state = self.availability_state.write().await;
        *state = AvailabilityAnalysis::Ready {
            report: report.clone(),
        };

        Ok(report)
    }

    async fn latest_analysis(&self) -> AvailabilityAnalysis {
        self.availability_state.read().await.clone()
    }

    async fn clear_analysis(&self) {
        let mut state = self.availability_state.write().await;
        *state = AvailabilityAnalysis::NotYetAnalyzed;
    }
}

impl<M, L> Service<M, L>
where
    M: MenuRepository,
    L: LlmClient,
{
    async fn mark_analysis_unavailable(&self, message: String) -> CoreError {
        tracing::error!("Menu analysis unavailable: {}", message);

        let mut state = self.availability_state.write().await;
        let last_report = match &*state {
            AvailabilityAnalysis::Ready { report } => Some(report.clone()),
            AvailabilityAnalysis::Unavailable { last_report, .. } => last_report.clone(),
            AvailabilityAnalysis::NotYetAnalyzed => None,
        };
        *state = AvailabilityAnalysis::Unavailable {
            message: message.clone(),
            last_report,
        };

        CoreError::AnalysisUnavailable(message)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::{
        domain::{
            availability::entities::AvailabilityStatus,
            menu::entities::{Dish, DishConfig, NutritionFacts},
        },
        infrastructure::menu::repositories::InMemoryMenuRepository,
    };

    struct StaticLlm {
        response: Result<String, CoreError>,
    }

    impl LlmClient for StaticLlm {
        async fn generate_with_text(
            &self,
            _prompt: String,
            _response_schema: serde_json::Value,
        ) -> Result<String, CoreError> {
            self.response.clone()
        }
    }

    fn seeded_repository() -> InMemoryMenuRepository {
        let repository = InMemoryMenuRepository::new();
        repository.insert_dish(Dish::new(DishConfig {
            name: "Garden Bowl".to_string(),
            category: "Mains".to_string(),
            description: "Greens and grains".to_string(),
            description_allergens: vec![],
            nutrition: NutritionFacts::default(),
            modification_policy: None,
            is_active: true,
            created_by: Uuid::new_v4(),
        }));
        repository
    }

    fn ready_response() -> String {
        r#"{"categories": [
            {"categoryId": "vegan", "availableDishes": [
                {"name": "Garden Bowl", "requiresModification": true, "modifications": ["skip feta"]}
            ]}
        ]}"#
        .to_string()
    }

    #[tokio::test]
    async fn test_analyze_menu_stores_ready_report() {
        let service = Service::new(
            seeded_repository(),
            StaticLlm {
                response: Ok(ready_response()),
            },
        );

        let report = service.analyze_menu().await.expect("analysis succeeds");
        let vegan = report
            .categories
            .iter()
            .find(|category| category.category_id == "vegan")
            .expect("vegan present");
        assert_eq!(vegan.status, AvailabilityStatus::Limited);

        match service.latest_analysis().await {
            AvailabilityAnalysis::Ready { report: stored } => assert_eq!(stored, report),
            state => panic!("expected ready state, got {state:?}"),
        }
    }

    #[tokio::test]
    async fn test_failed_call_surfaces_unavailable_without_prior_report() {
        let service = Service::new(
            seeded_repository(),
            StaticLlm {
                response: Err(CoreError::ExternalServiceError("timeout".to_string())),
            },
        );

        let err = service.analyze_menu().await.expect_err("analysis fails");
        assert!(matches!(err, CoreError::AnalysisUnavailable(_)));

        match service.latest_analysis().await {
            AvailabilityAnalysis::Unavailable { last_report, .. } => {
                assert!(last_report.is_none());
            }
            state => panic!("expected unavailable state, got {state:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_reply_retains_previous_report() {
        let repository = seeded_repository();
        let service = Service::new(
            repository,
            StaticLlm {
                response: Ok(ready_response()),
            },
        );
        let first = service.analyze_menu().await.expect("first analysis succeeds");

        // Swap in a collaborator that now replies with garbage.
        let service = Service::with_catalog(
            service.menu_repository,
            StaticLlm {
                response: Ok("not json".to_string()),
            },
            service.category_catalog,
        );
        {
            let mut state = service.availability_state.write().await;
            *state = AvailabilityAnalysis::Ready {
                report: first.clone(),
            };
        }

        let err = service.analyze_menu().await.expect_err("analysis fails");
        assert!(matches!(err, CoreError::AnalysisUnavailable(_)));

        match service.latest_analysis().await {
            AvailabilityAnalysis::Unavailable { last_report, .. } => {
                assert_eq!(last_report, Some(first));
            }
            state => panic!("expected unavailable state, got {state:?}"),
        }
    }

    #[tokio::test]
    async fn test_clear_analysis_resets_state() {
        let service = Service::new(
            seeded_repository(),
            StaticLlm {
                response: Ok(ready_response()),
            },
        );
        service.analyze_menu().await.expect("analysis succeeds");

        service.clear_analysis().await;
        assert_eq!(
            service.latest_analysis().await,
            AvailabilityAnalysis::NotYetAnalyzed
        );
    }
}

use std::future::Future;

use crate::domain::{
    availability::entities::{AvailabilityAnalysis, MenuAvailabilityReport},
    common::entities::app_errors::CoreError,
};

/// LLM client trait for the external classification collaborator.
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for whole-menu dietary availability analysis.
#[cfg_attr(test, mockall::automock)]
pub trait DietaryAvailabilityService: Send + Sync {
    /// Explicit re-analyze trigger. Calls the collaborator once; a failed
    /// or malformed reply keeps the previous report and surfaces the
    /// unavailable state.
    fn analyze_menu(
        &self,
    ) -> impl Future<Output = Result<MenuAvailabilityReport, CoreError>> + Send;

    fn latest_analysis(&self) -> impl Future<Output = AvailabilityAnalysis> + Send;

    /// Drop any retained report and return to the not-yet-analyzed state.
    fn clear_analysis(&self) -> impl Future<Output = ()> + Send;
}

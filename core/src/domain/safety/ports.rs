use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    safety::{
        entities::DishSafetyAssessment,
        value_objects::{CheckDishSafetyInput, CheckMenuSafetyInput},
    },
};

/// Service trait for per-dish and whole-menu safety classification.
#[cfg_attr(test, mockall::automock)]
pub trait DishSafetyService: Send + Sync {
    fn check_dish(
        &self,
        input: CheckDishSafetyInput,
    ) -> impl Future<Output = Result<DishSafetyAssessment, CoreError>> + Send;

    fn check_menu(
        &self,
        input: CheckMenuSafetyInput,
    ) -> impl Future<Output = Result<Vec<DishSafetyAssessment>, CoreError>> + Send;
}

use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    compatibility::entities::{CompatibilityMatrix, DishCompatibilityRow},
};

/// Service trait for the dish × category compatibility matrix.
#[cfg_attr(test, mockall::automock)]
pub trait CompatibilityMatrixService: Send + Sync {
    fn build_matrix(&self) -> impl Future<Output = Result<CompatibilityMatrix, CoreError>> + Send;

    fn dish_compatibility(
        &self,
        dish_id: Uuid,
    ) -> impl Future<Output = Result<DishCompatibilityRow, CoreError>> + Send;
}

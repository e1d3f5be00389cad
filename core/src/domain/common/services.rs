use tokio::sync::RwLock;

use crate::domain::{
    availability::{entities::AvailabilityAnalysis, ports::LlmClient},
    compatibility::catalog::DietaryCategoryCatalog,
    menu::ports::MenuRepository,
};

/// Aggregate service object every `*Service` trait is implemented on.
///
/// Holds the read-only menu port, the external classification collaborator,
/// the injected category catalog, and the latest menu availability analysis.
pub struct Service<M, L>
where
    M: MenuRepository,
    L: LlmClient,
{
    pub menu_repository: M,
    pub llm_client: L,
    pub category_catalog: DietaryCategoryCatalog,
    pub(crate) availability_state: RwLock<AvailabilityAnalysis>,
}

impl<M, L> Service<M, L>
where
    M: MenuRepository,
    L: LlmClient,
{
    pub fn new(menu_repository: M, llm_client: L) -> Self {
        Self::with_catalog(menu_repository, llm_client, DietaryCategoryCatalog::builtin())
    }

    /// Build a service around a custom category catalog (e.g. a newer
    /// taxonomy revision).
    pub fn with_catalog(
        menu_repository: M,
        llm_client: L,
        category_catalog: DietaryCategoryCatalog,
    ) -> Self {
        Self {
            menu_repository,
            llm_client,
            category_catalog,
            availability_state: RwLock::new(AvailabilityAnalysis::NotYetAnalyzed),
        }
    }
}

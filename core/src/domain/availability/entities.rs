use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A category is `available` from this many compliant dishes up.
pub const AVAILABLE_MIN_DISHES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    Available,
    Limited,
    Unavailable,
}

impl AvailabilityStatus {
    /// Fixed bucketing: 0 compliant dishes ⇒ unavailable, 1–4 ⇒ limited,
    /// 5 or more ⇒ available.
    pub fn from_compliant_count(count: usize) -> Self {
        if count == 0 {
            AvailabilityStatus::Unavailable
        } else if count >= AVAILABLE_MIN_DISHES {
            AvailabilityStatus::Available
        } else {
            AvailabilityStatus::Limited
        }
    }
}

/// One dish the collaborator judged compliant for a category. The id is an
/// opaque annotation from the collaborator, not a verified lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CompliantDish {
    pub dish_id: Option<String>,
    pub name: String,
    pub requires_modification: bool,
    pub modifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryAvailability {
    pub category_id: String,
    pub display_name: String,
    pub status: AvailabilityStatus,
    pub total_available: usize,
    pub dishes: Vec<CompliantDish>,
    pub reason: Option<String>,
    pub warning: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AvailabilitySummary {
    pub available: usize,
    pub limited: usize,
    pub unavailable: usize,
}

/// Whole-menu availability across the category catalog. A re-run replaces
/// the previous report wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuAvailabilityReport {
    pub generated_at: DateTime<Utc>,
    pub categories: Vec<CategoryAvailability>,
    pub summary: AvailabilitySummary,
}

/// Current state of the menu analysis. Failure keeps the last good report
/// around instead of silently substituting a verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AvailabilityAnalysis {
    NotYetAnalyzed,
    Ready {
        report: MenuAvailabilityReport,
    },
    Unavailable {
        message: String,
        last_report: Option<MenuAvailabilityReport>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucketing_thresholds() {
        assert_eq!(
            AvailabilityStatus::from_compliant_count(0),
            AvailabilityStatus::Unavailable
        );
        assert_eq!(
            AvailabilityStatus::from_compliant_count(1),
            AvailabilityStatus::Limited
        );
        assert_eq!(
            AvailabilityStatus::from_compliant_count(4),
            AvailabilityStatus::Limited
        );
        assert_eq!(
            AvailabilityStatus::from_compliant_count(5),
            AvailabilityStatus::Available
        );
        assert_eq!(
            AvailabilityStatus::from_compliant_count(12),
            AvailabilityStatus::Available
        );
    }
}

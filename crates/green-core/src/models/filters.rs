//! Filter types for querying plantings.

use super::PlantingStatus;

/// Filter options for querying plantings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlantingFilter {
    /// Only plantings in this garden
    pub garden_id: Option<u64>,

    /// Only plantings in this area
    pub area_id: Option<u64>,

    /// Filter by planting status.
    /// If None, every status is returned.
    pub status: Option<PlantingStatus>,
}

impl From<&crate::params::ListPlantings> for PlantingFilter {
    /// Convert ListPlantings parameters to a PlantingFilter.
    ///
    /// - `removed: false` → active plantings only
    /// - `removed: true` → removed plantings only
    ///
    /// # Examples
    ///
    /// ```rust
    /// use green_core::{models::{PlantingFilter, PlantingStatus}, params::ListPlantings};
    ///
    /// let params = ListPlantings { garden_id: Some(2), area_id: None, removed: false };
    /// let filter: PlantingFilter = (&params).into();
    /// assert_eq!(filter.garden_id, Some(2));
    /// assert_eq!(filter.status, Some(PlantingStatus::Active));
    /// ```
    fn from(params: &crate::params::ListPlantings) -> Self {
        Self {
            garden_id: params.garden_id,
            area_id: params.area_id,
            status: Some(if params.removed {
                PlantingStatus::Removed
            } else {
                PlantingStatus::Active
            }),
        }
    }
}

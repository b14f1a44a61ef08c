//! Floor-area zoning compliance
//!
//! Checks whether one building's gross floor area is permitted by each
//! zoning district overlapping a parcel. Every district yields a three-valued
//! verdict; malformed or missing constraint data degrades to "allowed" or
//! "indeterminate" and never fails the evaluation.

pub mod config;
pub mod extractors;
pub mod resolver;
pub mod rules;

pub use config::EvaluatorConfig;
pub use resolver::{
    from_fn, DistrictTableResolver, Resolution, ZoningRequirementResolver, NO_REQUIREMENTS_MESSAGE,
};

use tracing::{debug, warn};
use zoning_types::{BuildingRecord, ComplianceResult, ParcelContext, ZoningDistrict};

/// Floor-area evaluator entry point
#[derive(Debug, Clone, Default)]
pub struct FloorAreaEvaluator {
    config: EvaluatorConfig,
}

impl FloorAreaEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluate one building against every district, in input order.
    ///
    /// `buildings` must hold exactly one row. Anything else is ambiguous and
    /// yields an empty result set, which callers should read as "evaluation
    /// could not proceed" rather than "no districts".
    pub fn evaluate<R>(
        &self,
        resolver: &R,
        buildings: &[BuildingRecord],
        districts: &[ZoningDistrict],
        parcel: Option<&ParcelContext>,
    ) -> Vec<ComplianceResult>
    where
        R: ZoningRequirementResolver + ?Sized,
    {
        let building = match buildings {
            [building] => building,
            _ => {
                warn!(
                    buildings = buildings.len(),
                    "Expected exactly one building, skipping floor-area evaluation"
                );
                return Vec::new();
            }
        };

        districts
            .iter()
            .enumerate()
            .map(|(zoning_id, district)| {
                self.evaluate_district(resolver, building, zoning_id, district, parcel)
            })
            .collect()
    }

    /// Evaluate one building against a single district
    pub fn evaluate_district<R>(
        &self,
        resolver: &R,
        building: &BuildingRecord,
        zoning_id: usize,
        district: &ZoningDistrict,
        parcel: Option<&ParcelContext>,
    ) -> ComplianceResult
    where
        R: ZoningRequirementResolver + ?Sized,
    {
        let resolution = resolver.resolve(building, district, parcel);
        if resolution.is_empty() {
            debug!(zoning_id, %resolution, "No constraints resolved, district allows building");
            return ComplianceResult::unrestricted(zoning_id);
        }

        let mut fl_area_rows = resolution
            .constraints()
            .iter()
            .filter(|row| row.is_fl_area());
        let Some(row) = fl_area_rows.next() else {
            debug!(zoning_id, "District has no floor-area constraint");
            return ComplianceResult::unrestricted(zoning_id);
        };

        let ignored = fl_area_rows.count();
        if ignored > 0 {
            debug!(zoning_id, ignored, "Extra floor-area rows ignored");
        }

        let allowed = rules::fl_area::check_floor_area(row, building.gross_fl_area, &self.config);
        debug!(zoning_id, district = ?district.name, %allowed, "Evaluated floor area");

        ComplianceResult {
            zoning_id,
            allowed,
            constraint_min_note: row.constraint_min_note.clone(),
            constraint_max_note: row.constraint_max_note.clone(),
        }
    }
}

/// Check floor-area compliance with the default configuration
pub fn check_fl_area<R>(
    resolver: &R,
    buildings: &[BuildingRecord],
    districts: &[ZoningDistrict],
    parcel: Option<&ParcelContext>,
) -> Vec<ComplianceResult>
where
    R: ZoningRequirementResolver + ?Sized,
{
    FloorAreaEvaluator::new().evaluate(resolver, buildings, districts, parcel)
}

/// Floor area of the single building in `buildings`, if there is exactly one
pub fn single_floor_area(buildings: &[BuildingRecord]) -> Option<f64> {
    match buildings {
        [building] => Some(building.gross_fl_area),
        _ => None,
    }
}

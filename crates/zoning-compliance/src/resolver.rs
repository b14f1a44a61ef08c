//! Zoning requirement resolution
//!
//! The evaluator does not know how a district's rules are looked up. A
//! resolver turns (building, district, parcel) into the constraint rows that
//! apply, or reports that the district records no requirements at all.

use std::fmt;

use zoning_types::{BuildingRecord, ConstraintRecord, ParcelContext, ZoningDistrict};

pub const NO_REQUIREMENTS_MESSAGE: &str = "No zoning requirements recorded for this district";

/// Outcome of resolving one district
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The district has no recorded zoning requirements
    NoRequirements,
    /// Constraint rows that apply to the building; may be empty
    Constraints(Vec<ConstraintRecord>),
}

impl Resolution {
    pub fn constraints(&self) -> &[ConstraintRecord] {
        match self {
            Resolution::NoRequirements => &[],
            Resolution::Constraints(rows) => rows,
        }
    }

    /// True when nothing was resolved for the district
    pub fn is_empty(&self) -> bool {
        self.constraints().is_empty()
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::NoRequirements => f.write_str(NO_REQUIREMENTS_MESSAGE),
            Resolution::Constraints(rows) => write!(f, "{} constraint row(s)", rows.len()),
        }
    }
}

/// Looks up the constraints a district imposes on a building
pub trait ZoningRequirementResolver {
    fn resolve(
        &self,
        building: &BuildingRecord,
        district: &ZoningDistrict,
        parcel: Option<&ParcelContext>,
    ) -> Resolution;
}

/// Resolver backed by a closure, see [`from_fn`]
pub struct FnResolver<F>(F);

impl<F> ZoningRequirementResolver for FnResolver<F>
where
    F: Fn(&BuildingRecord, &ZoningDistrict, Option<&ParcelContext>) -> Resolution,
{
    fn resolve(
        &self,
        building: &BuildingRecord,
        district: &ZoningDistrict,
        parcel: Option<&ParcelContext>,
    ) -> Resolution {
        (self.0)(building, district, parcel)
    }
}

/// Build a resolver from a closure
pub fn from_fn<F>(f: F) -> FnResolver<F>
where
    F: Fn(&BuildingRecord, &ZoningDistrict, Option<&ParcelContext>) -> Resolution,
{
    FnResolver(f)
}

/// Resolver that reads the constraint rows recorded on each district.
///
/// A district without a `constraints` field resolves to
/// [`Resolution::NoRequirements`]; an empty list resolves to an empty set.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistrictTableResolver;

impl ZoningRequirementResolver for DistrictTableResolver {
    fn resolve(
        &self,
        _building: &BuildingRecord,
        district: &ZoningDistrict,
        _parcel: Option<&ParcelContext>,
    ) -> Resolution {
        match &district.constraints {
            None => Resolution::NoRequirements,
            Some(rows) => Resolution::Constraints(rows.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_resolver_distinguishes_missing_and_empty() {
        let building = BuildingRecord::with_floor_area(800.0);
        let missing = ZoningDistrict::named("R-1");
        let empty = ZoningDistrict::named("R-2").with_constraints(vec![]);

        assert_eq!(
            DistrictTableResolver.resolve(&building, &missing, None),
            Resolution::NoRequirements
        );
        assert_eq!(
            DistrictTableResolver.resolve(&building, &empty, None),
            Resolution::Constraints(vec![])
        );
    }

    #[test]
    fn test_table_resolver_returns_recorded_rows() {
        let rows = vec![ConstraintRecord::new("height"), ConstraintRecord::fl_area()];
        let district = ZoningDistrict::named("C-1").with_constraints(rows.clone());
        let building = BuildingRecord::with_floor_area(800.0);
        let resolution = DistrictTableResolver.resolve(&building, &district, None);
        assert_eq!(resolution.constraints(), rows.as_slice());
        assert!(!resolution.is_empty());
    }

    #[test]
    fn test_fn_resolver_sees_parcel() {
        let resolver = from_fn(|_, _, parcel| match parcel {
            Some(_) => Resolution::Constraints(vec![ConstraintRecord::fl_area()]),
            None => Resolution::NoRequirements,
        });
        let building = BuildingRecord::with_floor_area(800.0);
        let district = ZoningDistrict::default();
        let parcel = ParcelContext {
            parcel_id: Some("10".to_string()),
            ..ParcelContext::default()
        };

        let with_parcel = resolver.resolve(&building, &district, Some(&parcel));
        assert!(resolver.resolve(&building, &district, None).is_empty());
        assert_eq!(with_parcel.constraints().len(), 1);
    }

    #[test]
    fn test_no_requirements_message() {
        assert_eq!(
            Resolution::NoRequirements.to_string(),
            "No zoning requirements recorded for this district"
        );
    }
}

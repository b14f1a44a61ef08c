pub mod constraint;
pub mod report;
pub mod types;
pub mod units;

pub use constraint::{BoundEntry, BoundValue, ConstraintRecord, SelectMode, SpecType};
pub use report::{EvaluationReport, VerdictSummary};
pub use types::{BuildingRecord, ComplianceResult, ParcelContext, Verdict, ZoningDistrict};
pub use units::AreaUnit;

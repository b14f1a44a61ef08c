//! Floor-area constraint check
//!
//! A floor-area row can list several candidate bounds. With `either` the
//! building only has to satisfy one of them; with `unique` all candidates
//! must agree before the check is decisive, and a split outcome is
//! indeterminate.

use tracing::{debug, warn};
use zoning_types::{AreaUnit, ConstraintRecord, SelectMode, Verdict};

use crate::config::EvaluatorConfig;
use crate::extractors::BoundRange;

/// Resolve two bound checks under a selection mode
pub fn select(check_low: bool, check_high: bool, mode: Option<SelectMode>) -> Verdict {
    match mode {
        Some(SelectMode::Unique) => match (check_low, check_high) {
            (true, true) => Verdict::Allowed,
            (false, false) => Verdict::Denied,
            _ => Verdict::Indeterminate,
        },
        _ => Verdict::from(check_low || check_high),
    }
}

/// Minimum check: the building must be at least as large as the bound
pub fn check_minimum(range: BoundRange, fl_area: f64, mode: Option<SelectMode>) -> Verdict {
    select(range.low <= fl_area, range.high <= fl_area, mode)
}

/// Maximum check: the building must be no larger than the bound
pub fn check_maximum(range: BoundRange, fl_area: f64, mode: Option<SelectMode>) -> Verdict {
    select(range.low >= fl_area, range.high >= fl_area, mode)
}

/// Evaluate a single `fl_area` row against a floor area in square feet.
///
/// Rows flagged with the OZFS error sentinel never block a building.
pub fn check_floor_area(row: &ConstraintRecord, fl_area: f64, config: &EvaluatorConfig) -> Verdict {
    let sentinel = Some(SelectMode::OzfsError);
    if row.min_select == sentinel || row.max_select == sentinel {
        warn!("Floor-area constraint carries invalid source data, treating as allowed");
        return Verdict::Allowed;
    }

    for (side, mode) in [("min", row.min_select), ("max", row.max_select)] {
        if mode == Some(SelectMode::Unrecognized) {
            warn!(side, "Unrecognized selection mode, treating as \"either\"");
        }
    }

    let unit = AreaUnit::from_label(row.unit.as_deref());
    let min_range = BoundRange::from_bound(row.min_value.as_ref(), config.default_min_value, unit);
    let max_range = BoundRange::from_bound(row.max_value.as_ref(), config.default_max_value, unit);

    let min_allowed = check_minimum(min_range, fl_area, row.min_select);
    let max_allowed = check_maximum(max_range, fl_area, row.max_select);

    debug!(
        fl_area,
        unit = unit.label(),
        min_low = min_range.low,
        min_high = min_range.high,
        max_low = max_range.low,
        max_high = max_range.high,
        %min_allowed,
        %max_allowed,
        "Checked floor-area bounds"
    );

    min_allowed.combine(max_allowed)
}

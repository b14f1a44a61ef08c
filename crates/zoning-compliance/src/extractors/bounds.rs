// Bound extraction and defaulting for loosely typed constraint values
use zoning_types::{AreaUnit, BoundEntry, BoundValue};

/// Flatten a raw bound into the list of usable numbers it holds.
///
/// Absent values, NaN, text placeholders and any other non-numeric shape are
/// unusable. A list keeps only its usable entries. Whenever nothing usable
/// remains the result is `[default]`, so the returned list is never empty.
pub fn normalize_bound(value: Option<&BoundValue>, default: f64) -> Vec<f64> {
    let values: Vec<f64> = match value {
        Some(BoundValue::Number(v)) if !v.is_nan() => vec![*v],
        Some(BoundValue::List(entries)) => entries
            .iter()
            .filter_map(|entry| match entry {
                Some(BoundEntry::Number(v)) if !v.is_nan() => Some(*v),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };

    if values.is_empty() {
        vec![default]
    } else {
        values
    }
}

/// Smallest and largest candidate of a bound, in square feet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundRange {
    pub low: f64,
    pub high: f64,
}

impl BoundRange {
    /// Returns `None` for an empty slice
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let (first, rest) = values.split_first()?;
        Some(rest.iter().fold(
            BoundRange {
                low: *first,
                high: *first,
            },
            |range, v| BoundRange {
                low: range.low.min(*v),
                high: range.high.max(*v),
            },
        ))
    }

    /// Normalize a raw bound, convert it from `unit` into square feet and
    /// take its extremes.
    pub fn from_bound(value: Option<&BoundValue>, default: f64, unit: AreaUnit) -> Self {
        let sq_ft: Vec<f64> = normalize_bound(value, default)
            .into_iter()
            .map(|v| unit.to_square_feet(v))
            .collect();

        // normalize_bound never returns an empty list
        Self::from_values(&sq_ft).unwrap_or(BoundRange {
            low: unit.to_square_feet(default),
            high: unit.to_square_feet(default),
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn entry_strategy() -> impl Strategy<Value = Option<BoundEntry>> {
        prop_oneof![
            (0.0f64..1.0e6).prop_map(|v| Some(BoundEntry::Number(v))),
            Just(Some(BoundEntry::Number(f64::NAN))),
            "[a-z ]{0,12}".prop_map(|s| Some(BoundEntry::Text(s))),
            Just(None),
        ]
    }

    proptest! {
        /// Property: normalized bounds are never empty and never NaN
        #[test]
        fn normalized_list_is_usable(
            entries in prop::collection::vec(entry_strategy(), 0..8),
            default in 0.0f64..1.0e6,
        ) {
            let values = normalize_bound(Some(&BoundValue::List(entries)), default);
            prop_assert!(!values.is_empty());
            prop_assert!(values.iter().all(|v| !v.is_nan()));
        }

        /// Property: low never exceeds high
        #[test]
        fn range_is_ordered(values in prop::collection::vec(-1.0e6f64..1.0e6, 1..10)) {
            let range = BoundRange::from_values(&values).unwrap();
            prop_assert!(range.low <= range.high);
            prop_assert!(values.iter().all(|v| *v >= range.low && *v <= range.high));
        }
    }
}

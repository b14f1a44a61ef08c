use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::constraint::ConstraintRecord;

/// A proposed building. Floor area is expressed in square feet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildingRecord {
    pub gross_fl_area: f64,
    /// Remaining building attributes, forwarded to the requirement resolver
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl BuildingRecord {
    pub fn with_floor_area(gross_fl_area: f64) -> Self {
        Self {
            gross_fl_area,
            attributes: Map::new(),
        }
    }
}

/// One candidate zoning district overlapping the parcel.
///
/// The evaluator treats districts as opaque and identifies them by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoningDistrict {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Constraint rows recorded for this district. `None` means nothing was
    /// recorded at all, which is distinct from an empty list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<ConstraintRecord>>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl ZoningDistrict {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn with_constraints(mut self, constraints: Vec<ConstraintRecord>) -> Self {
        self.constraints = Some(constraints);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParcelContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parcel_id: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Three-valued compliance verdict.
///
/// Serialized as `true`, `false` or `"MAYBE"` so result tables stay
/// compatible with the boolean-or-marker column consumers already read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Allowed,
    Denied,
    Indeterminate,
}

pub const INDETERMINATE_MARKER: &str = "MAYBE";

impl Verdict {
    /// Combine a minimum and a maximum verdict.
    ///
    /// Any indeterminate operand makes the whole verdict indeterminate, even
    /// when the other operand is `Denied`.
    pub fn combine(self, other: Verdict) -> Verdict {
        match (self, other) {
            (Verdict::Indeterminate, _) | (_, Verdict::Indeterminate) => Verdict::Indeterminate,
            (Verdict::Allowed, Verdict::Allowed) => Verdict::Allowed,
            _ => Verdict::Denied,
        }
    }
}

impl From<bool> for Verdict {
    fn from(allowed: bool) -> Self {
        if allowed {
            Verdict::Allowed
        } else {
            Verdict::Denied
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Allowed => f.write_str("true"),
            Verdict::Denied => f.write_str("false"),
            Verdict::Indeterminate => f.write_str(INDETERMINATE_MARKER),
        }
    }
}

impl Serialize for Verdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Verdict::Allowed => serializer.serialize_bool(true),
            Verdict::Denied => serializer.serialize_bool(false),
            Verdict::Indeterminate => serializer.serialize_str(INDETERMINATE_MARKER),
        }
    }
}

impl<'de> Deserialize<'de> for Verdict {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Marker(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Flag(flag) => Ok(Verdict::from(flag)),
            Raw::Marker(marker) if marker == INDETERMINATE_MARKER => Ok(Verdict::Indeterminate),
            Raw::Marker(other) => Err(serde::de::Error::custom(format!(
                "expected true, false or \"{}\", found \"{}\"",
                INDETERMINATE_MARKER, other
            ))),
        }
    }
}

/// Floor-area verdict for one district, keyed by the district's input position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    pub zoning_id: usize,
    pub allowed: Verdict,
    pub constraint_min_note: Option<String>,
    pub constraint_max_note: Option<String>,
}

impl ComplianceResult {
    /// A district with nothing restricting floor area
    pub fn unrestricted(zoning_id: usize) -> Self {
        Self {
            zoning_id,
            allowed: Verdict::Allowed,
            constraint_min_note: None,
            constraint_max_note: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_indeterminate_absorbs_denied() {
        assert_eq!(
            Verdict::Indeterminate.combine(Verdict::Denied),
            Verdict::Indeterminate
        );
        assert_eq!(
            Verdict::Denied.combine(Verdict::Indeterminate),
            Verdict::Indeterminate
        );
    }

    #[test]
    fn test_combine_requires_both_allowed() {
        assert_eq!(Verdict::Allowed.combine(Verdict::Allowed), Verdict::Allowed);
        assert_eq!(Verdict::Allowed.combine(Verdict::Denied), Verdict::Denied);
        assert_eq!(Verdict::Denied.combine(Verdict::Denied), Verdict::Denied);
    }

    #[test]
    fn test_verdict_serializes_as_table_values() {
        let json = serde_json::to_string(&vec![
            Verdict::Allowed,
            Verdict::Denied,
            Verdict::Indeterminate,
        ])
        .unwrap();
        assert_eq!(json, r#"[true,false,"MAYBE"]"#);
    }

    #[test]
    fn test_verdict_deserialize_rejects_unknown_marker() {
        let parsed: Vec<Verdict> = serde_json::from_str(r#"[true,"MAYBE",false]"#).unwrap();
        assert_eq!(
            parsed,
            vec![Verdict::Allowed, Verdict::Indeterminate, Verdict::Denied]
        );
        assert!(serde_json::from_str::<Verdict>(r#""PERHAPS""#).is_err());
    }

    #[test]
    fn test_building_keeps_extra_attributes() {
        let building: BuildingRecord =
            serde_json::from_str(r#"{"gross_fl_area": 800.0, "height": 30, "stories": 2}"#)
                .unwrap();
        assert_eq!(building.gross_fl_area, 800.0);
        assert_eq!(building.attributes.get("stories"), Some(&Value::from(2)));
    }

    #[test]
    fn test_district_distinguishes_missing_and_empty_constraints() {
        let missing: ZoningDistrict = serde_json::from_str(r#"{"name": "R-1"}"#).unwrap();
        let empty: ZoningDistrict =
            serde_json::from_str(r#"{"name": "R-2", "constraints": []}"#).unwrap();
        assert!(missing.constraints.is_none());
        assert_eq!(empty.constraints, Some(vec![]));
    }

    #[test]
    fn test_result_serializes_null_notes() {
        let json = serde_json::to_value(ComplianceResult::unrestricted(3)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "zoning_id": 3,
                "allowed": true,
                "constraint_min_note": null,
                "constraint_max_note": null,
            })
        );
    }
}

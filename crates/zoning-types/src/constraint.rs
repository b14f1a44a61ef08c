//! Constraint rows produced by a zoning requirement resolver
//!
//! A row describes one category of restriction (`spec_type`) with optional
//! lower and upper bounds. Bounds arrive loosely typed: a number, a list of
//! numbers that may contain holes or placeholders, or a bare text
//! placeholder when the source data could not be read.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const FL_AREA: &str = "fl_area";

/// Category of a zoning constraint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SpecType {
    /// Total floor area
    FlArea,
    /// Any other category (height, setbacks, lot coverage, ...), kept verbatim
    Other(String),
}

impl From<String> for SpecType {
    fn from(value: String) -> Self {
        if value == FL_AREA {
            SpecType::FlArea
        } else {
            SpecType::Other(value)
        }
    }
}

impl From<&str> for SpecType {
    fn from(value: &str) -> Self {
        SpecType::from(value.to_string())
    }
}

impl From<SpecType> for String {
    fn from(value: SpecType) -> Self {
        match value {
            SpecType::FlArea => FL_AREA.to_string(),
            SpecType::Other(name) => name,
        }
    }
}

impl fmt::Display for SpecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecType::FlArea => f.write_str(FL_AREA),
            SpecType::Other(name) => f.write_str(name),
        }
    }
}

/// How multiple bound values combine into a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectMode {
    /// Satisfying any one bound is enough
    #[serde(rename = "either")]
    Either,
    /// Every bound must agree for a decisive verdict
    #[serde(rename = "unique")]
    Unique,
    /// The resolver could not parse the underlying constraint data
    #[serde(rename = "OZFS Error")]
    OzfsError,
    #[serde(rename = "unrecognized", other)]
    Unrecognized,
}

/// One entry of a list-valued bound
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundEntry {
    Number(f64),
    Text(String),
    /// Any other JSON shape (booleans, objects, nested lists)
    Other(serde_json::Value),
}

/// Raw `min_value` / `max_value` of a constraint row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundValue {
    Number(f64),
    List(Vec<Option<BoundEntry>>),
    /// Placeholder text standing in for a value that could not be computed
    Text(String),
    /// Any other JSON shape. Kept so one malformed row cannot fail a whole
    /// district table; it is never a usable bound.
    Other(serde_json::Value),
}

impl From<f64> for BoundValue {
    fn from(value: f64) -> Self {
        BoundValue::Number(value)
    }
}

impl From<Vec<f64>> for BoundValue {
    fn from(values: Vec<f64>) -> Self {
        BoundValue::List(
            values
                .into_iter()
                .map(|v| Some(BoundEntry::Number(v)))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintRecord {
    pub spec_type: SpecType,
    #[serde(default)]
    pub min_value: Option<BoundValue>,
    #[serde(default)]
    pub max_value: Option<BoundValue>,
    #[serde(default)]
    pub min_select: Option<SelectMode>,
    #[serde(default)]
    pub max_select: Option<SelectMode>,
    /// Unit label such as "square feet", "square meters" or "acres"
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub constraint_min_note: Option<String>,
    #[serde(default)]
    pub constraint_max_note: Option<String>,
}

impl ConstraintRecord {
    pub fn new(spec_type: impl Into<SpecType>) -> Self {
        Self {
            spec_type: spec_type.into(),
            min_value: None,
            max_value: None,
            min_select: None,
            max_select: None,
            unit: None,
            constraint_min_note: None,
            constraint_max_note: None,
        }
    }

    pub fn fl_area() -> Self {
        Self::new(SpecType::FlArea)
    }

    pub fn with_min(mut self, value: impl Into<BoundValue>, select: Option<SelectMode>) -> Self {
        self.min_value = Some(value.into());
        self.min_select = select;
        self
    }

    pub fn with_max(mut self, value: impl Into<BoundValue>, select: Option<SelectMode>) -> Self {
        self.max_value = Some(value.into());
        self.max_select = select;
        self
    }

    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    pub fn with_notes(mut self, min_note: Option<&str>, max_note: Option<&str>) -> Self {
        self.constraint_min_note = min_note.map(str::to_string);
        self.constraint_max_note = max_note.map(str::to_string);
        self
    }

    pub fn is_fl_area(&self) -> bool {
        self.spec_type == SpecType::FlArea
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_spec_type_round_trips_unknown_names() {
        let parsed: SpecType = serde_json::from_str(r#""height""#).unwrap();
        assert_eq!(parsed, SpecType::Other("height".to_string()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#""height""#);
        assert_eq!(
            serde_json::from_str::<SpecType>(r#""fl_area""#).unwrap(),
            SpecType::FlArea
        );
    }

    #[test]
    fn test_select_mode_parses_sentinel_and_unknown() {
        let modes: Vec<SelectMode> =
            serde_json::from_str(r#"["either", "unique", "OZFS Error", "whichever"]"#).unwrap();
        assert_eq!(
            modes,
            vec![
                SelectMode::Either,
                SelectMode::Unique,
                SelectMode::OzfsError,
                SelectMode::Unrecognized
            ]
        );
    }

    #[test]
    fn test_bound_value_shapes() {
        let row: ConstraintRecord = serde_json::from_str(
            r#"{
                "spec_type": "fl_area",
                "min_value": [500, null, "see note", 900],
                "max_value": "unknown",
                "unit": "square feet"
            }"#,
        )
        .unwrap();

        assert!(row.is_fl_area());
        assert_eq!(
            row.min_value,
            Some(BoundValue::List(vec![
                Some(BoundEntry::Number(500.0)),
                None,
                Some(BoundEntry::Text("see note".to_string())),
                Some(BoundEntry::Number(900.0)),
            ]))
        );
        assert_eq!(row.max_value, Some(BoundValue::Text("unknown".to_string())));
        assert_eq!(row.min_select, None);
    }

    #[test]
    fn test_malformed_bounds_still_parse() {
        let row: ConstraintRecord = serde_json::from_str(
            r#"{"spec_type": "fl_area", "min_value": [500, true], "max_value": {"v": 1}}"#,
        )
        .unwrap();

        assert_eq!(
            row.min_value,
            Some(BoundValue::List(vec![
                Some(BoundEntry::Number(500.0)),
                Some(BoundEntry::Other(serde_json::Value::Bool(true))),
            ]))
        );
        assert_eq!(
            row.max_value,
            Some(BoundValue::Other(serde_json::json!({ "v": 1 })))
        );
    }

    #[test]
    fn test_missing_fields_default_to_none() {
        let row: ConstraintRecord = serde_json::from_str(r#"{"spec_type": "lot_cov"}"#).unwrap();
        assert_eq!(row, ConstraintRecord::new("lot_cov"));
        assert!(!row.is_fl_area());
    }
}

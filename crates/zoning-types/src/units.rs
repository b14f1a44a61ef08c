//! Area units accepted on constraint rows
//!
//! Building floor area is always square feet. Constraint bounds carry a unit
//! label and are converted into square feet before comparison.

use serde::{Deserialize, Serialize};

/// 1 ft = 0.3048 m exactly, so 1 m² = 1 / 0.3048² ft²
pub const SQ_FT_PER_SQ_M: f64 = 1.0 / (0.3048 * 0.3048);

/// 1 acre = 43,560 ft²
pub const SQ_FT_PER_ACRE: f64 = 43_560.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaUnit {
    #[default]
    SquareFeet,
    SquareMeters,
    Acres,
}

impl AreaUnit {
    /// Map a constraint row's unit label to a unit.
    ///
    /// Missing or unrecognized labels fall back to square feet.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("square feet") => AreaUnit::SquareFeet,
            Some("square meters") => AreaUnit::SquareMeters,
            Some("acres") => AreaUnit::Acres,
            _ => AreaUnit::SquareFeet,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AreaUnit::SquareFeet => "square feet",
            AreaUnit::SquareMeters => "square meters",
            AreaUnit::Acres => "acres",
        }
    }

    /// Square feet in one of this unit
    pub fn sq_ft_factor(&self) -> f64 {
        match self {
            AreaUnit::SquareFeet => 1.0,
            AreaUnit::SquareMeters => SQ_FT_PER_SQ_M,
            AreaUnit::Acres => SQ_FT_PER_ACRE,
        }
    }

    pub fn to_square_feet(&self, value: f64) -> f64 {
        value * self.sq_ft_factor()
    }

    pub fn from_square_feet(&self, sq_ft: f64) -> f64 {
        sq_ft / self.sq_ft_factor()
    }
}

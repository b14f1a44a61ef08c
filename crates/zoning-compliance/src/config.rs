//! Evaluator configuration

use serde::{Deserialize, Serialize};

/// Lower bound used when a row has no usable minimum
pub const DEFAULT_MIN_VALUE: f64 = 0.0;

/// Upper bound used when a row has no usable maximum
pub const DEFAULT_MAX_VALUE: f64 = 1_000_000.0;

/// Configuration for the floor-area evaluator.
///
/// The fallback bounds stand for "no real constraint". They are expressed
/// in the constraint row's own unit and converted alongside real bounds.
///
/// # Examples
///
/// ```
/// use zoning_compliance::EvaluatorConfig;
///
/// let config = EvaluatorConfig::default().with_default_max(2_000_000.0);
/// assert_eq!(config.default_min_value, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    pub default_min_value: f64,
    pub default_max_value: f64,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            default_min_value: DEFAULT_MIN_VALUE,
            default_max_value: DEFAULT_MAX_VALUE,
        }
    }
}

impl EvaluatorConfig {
    pub fn with_default_min(mut self, value: f64) -> Self {
        self.default_min_value = value;
        self
    }

    pub fn with_default_max(mut self, value: f64) -> Self {
        self.default_max_value = value;
        self
    }
}

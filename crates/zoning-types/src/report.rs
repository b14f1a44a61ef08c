use serde::{Deserialize, Serialize};

use crate::types::{ComplianceResult, Verdict};

/// Counts of each verdict across a result table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictSummary {
    pub allowed: usize,
    pub denied: usize,
    pub indeterminate: usize,
}

impl VerdictSummary {
    pub fn total(&self) -> usize {
        self.allowed + self.denied + self.indeterminate
    }
}

/// Floor-area evaluation of one building against every district of a parcel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub parcel_id: Option<String>,
    /// `None` when the building input did not resolve to a single floor area
    pub gross_fl_area: Option<f64>,
    pub results: Vec<ComplianceResult>,
    pub summary: VerdictSummary,
    pub checked_at: u64,
}

impl EvaluationReport {
    pub fn new(
        parcel_id: Option<String>,
        gross_fl_area: Option<f64>,
        results: Vec<ComplianceResult>,
    ) -> Self {
        let summary = Self::summarize(&results);
        Self {
            parcel_id,
            gross_fl_area,
            results,
            summary,
            checked_at: chrono::Utc::now().timestamp() as u64,
        }
    }

    pub fn summarize(results: &[ComplianceResult]) -> VerdictSummary {
        results
            .iter()
            .fold(VerdictSummary::default(), |mut summary, result| {
                match result.allowed {
                    Verdict::Allowed => summary.allowed += 1,
                    Verdict::Denied => summary.denied += 1,
                    Verdict::Indeterminate => summary.indeterminate += 1,
                }
                summary
            })
    }

    /// True when at least one district allows the building outright
    pub fn is_permitted_somewhere(&self) -> bool {
        self.summary.allowed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn result(zoning_id: usize, allowed: Verdict) -> ComplianceResult {
        ComplianceResult {
            zoning_id,
            allowed,
            constraint_min_note: None,
            constraint_max_note: None,
        }
    }

    #[test]
    fn test_summary_counts_each_verdict() {
        let results = vec![
            result(0, Verdict::Allowed),
            result(1, Verdict::Denied),
            result(2, Verdict::Indeterminate),
            result(3, Verdict::Allowed),
        ];
        let summary = EvaluationReport::summarize(&results);
        assert_eq!(
            summary,
            VerdictSummary {
                allowed: 2,
                denied: 1,
                indeterminate: 1,
            }
        );
        assert_eq!(summary.total(), results.len());
    }

    #[test]
    fn test_report_stamps_check_time() {
        let report = EvaluationReport::new(Some("10".to_string()), Some(800.0), vec![]);
        assert!(report.checked_at > 0);
        assert_eq!(report.summary.total(), 0);
        assert!(!report.is_permitted_somewhere());
    }
}

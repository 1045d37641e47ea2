use serde::Serialize;

use crate::{core::analysis::AnalysisResult, quantity::cost::Cost};

/// Audit totals across the invoice history.
#[must_use]
#[derive(Copy, Clone, Debug, Default, Serialize)]
pub struct AuditSummary {
    pub total_reactive_penalty: Cost,
    pub total_demand_penalty: Cost,

    /// Always the sum of the two totals above.
    pub total_potential_savings: Cost,

    pub n_invoices: usize,

    /// Number of invoices with the power factor below the minimum.
    pub n_non_compliant: usize,
}

/// Fold the per-invoice results into the totals.
pub fn summarize<'a>(results: impl IntoIterator<Item = &'a AnalysisResult>) -> AuditSummary {
    let mut summary = AuditSummary::default();
    for result in results {
        summary.total_reactive_penalty += result.reactive_penalty;
        summary.total_demand_penalty += result.demand_penalty;
        summary.n_invoices += 1;
        if !result.is_power_factor_compliant {
            summary.n_non_compliant += 1;
        }
    }
    summary.total_potential_savings = summary.total_reactive_penalty + summary.total_demand_penalty;
    summary
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::core::analysis::{analyze_invoice, tests::record};

    #[test]
    fn test_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_reactive_penalty, Cost::ZERO);
        assert_eq!(summary.total_demand_penalty, Cost::ZERO);
        assert_eq!(summary.total_potential_savings, Cost::ZERO);
        assert_eq!(summary.n_invoices, 0);
    }

    #[test]
    fn test_totals() {
        let mut results = [
            analyze_invoice(&record(1000.0, 0.0, 100.0, 100.0)),
            analyze_invoice(&record(1000.0, 0.0, 100.0, 100.0)),
            analyze_invoice(&record(1000.0, 0.0, 100.0, 100.0)),
        ];
        for (result, (reactive_penalty, demand_penalty)) in
            results.iter_mut().zip([(10.0, 600.0), (0.0, 0.0), (5.0, 0.0)])
        {
            result.reactive_penalty = Cost(reactive_penalty);
            result.demand_penalty = Cost(demand_penalty);
        }

        let summary = summarize(&results);
        assert_abs_diff_eq!(summary.total_reactive_penalty.0, 15.0);
        assert_abs_diff_eq!(summary.total_demand_penalty.0, 600.0);
        assert_abs_diff_eq!(summary.total_potential_savings.0, 615.0);
        assert_eq!(summary.n_invoices, 3);
    }

    #[test]
    fn test_savings_is_exact_sum() {
        let results = [
            analyze_invoice(&record(1000.0, 600.0, 100.0, 120.0)),
            analyze_invoice(&record(730.0, 512.3, 75.5, 81.7)),
            analyze_invoice(&record(0.0, 10.0, 0.0, 3.3)),
        ];
        let summary = summarize(&results);
        assert_eq!(
            summary.total_potential_savings,
            summary.total_reactive_penalty + summary.total_demand_penalty,
        );
        assert_eq!(summary.n_non_compliant, 2);
    }
}

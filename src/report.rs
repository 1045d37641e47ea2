use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::Serialize;

use crate::{
    client::ClientProfile,
    core::{
        analysis::{AnalysisResult, analyze_invoice},
        invoice::InvoiceRecord,
        summary::{AuditSummary, summarize},
    },
    prelude::*,
    tables::{build_analysis_table, build_client_table, build_summary_table},
};

/// Everything the rendered audit report consists of.
#[must_use]
#[derive(Serialize)]
pub struct Report<'a> {
    pub client: &'a ClientProfile,
    pub analyses: Vec<AnalysisResult>,
    pub summary: AuditSummary,
}

impl<'a> Report<'a> {
    #[instrument(skip_all, fields(n_records = records.len()))]
    pub fn audit(client: &'a ClientProfile, records: &[InvoiceRecord]) -> Self {
        let analyses = records.iter().map(analyze_invoice).collect_vec();
        for analysis in &analyses {
            debug!(
                period = %analysis.period,
                power_factor = ?analysis.power_factor,
                reactive_penalty = %analysis.reactive_penalty,
                demand_penalty = %analysis.demand_penalty,
                capacitor_bank = ?analysis.capacitor_bank,
                "analyzed",
            );
        }
        let summary = summarize(&analyses);
        info!(
            n_invoices = summary.n_invoices,
            n_non_compliant = summary.n_non_compliant,
            total_potential_savings = %summary.total_potential_savings,
            "audited",
        );
        Self { client, analyses, summary }
    }

    pub const fn with_currency<'r>(&'r self, currency: &'r str) -> WithCurrency<'r, 'a> {
        WithCurrency { report: self, currency }
    }
}

/// Report rendered as terminal tables with the given currency symbol.
pub struct WithCurrency<'r, 'a> {
    report: &'r Report<'a>,
    currency: &'r str,
}

impl Display for WithCurrency<'_, '_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", build_client_table(self.report.client))?;
        writeln!(f, "{}", build_summary_table(&self.report.summary, self.currency))?;
        write!(f, "{}", build_analysis_table(&self.report.analyses, self.currency))
    }
}

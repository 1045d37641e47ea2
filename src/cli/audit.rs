use clap::Parser;

use crate::{
    cli::{HistoryArgs, ReportArgs},
    history::InvoiceHistory,
    prelude::*,
    report::Report,
};

#[derive(Parser)]
pub struct AuditArgs {
    #[clap(flatten)]
    history: HistoryArgs,

    /// Print the report as JSON instead of tables.
    #[clap(long)]
    json: bool,
}

impl AuditArgs {
    #[instrument(skip_all)]
    pub fn run(self, report_args: &ReportArgs) -> Result {
        let history = InvoiceHistory::read_from(&self.history.path)?;
        if history.is_empty() {
            warn!(path = ?self.history.path, "no invoices to audit, use `add` to enter some");
        }
        let records = history.try_into_records()?;
        let report = Report::audit(&report_args.client, &records);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", report.with_currency(&report_args.currency));
        }
        Ok(())
    }
}

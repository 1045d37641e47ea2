use clap::Parser;

use crate::{
    cli::{ReportArgs, invoice::InvoiceArgs},
    core::invoice::InvoiceRecord,
    prelude::*,
    report::Report,
};

#[derive(Parser)]
pub struct AnalyzeArgs {
    #[clap(flatten)]
    invoice: InvoiceArgs,

    /// Print the report as JSON instead of tables.
    #[clap(long)]
    json: bool,
}

impl AnalyzeArgs {
    #[instrument(skip_all)]
    pub fn run(self, report_args: &ReportArgs) -> Result {
        let record = InvoiceRecord::try_from(self.invoice.to_entry())?;
        let report = Report::audit(&report_args.client, &[record]);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", report.with_currency(&report_args.currency));
        }
        Ok(())
    }
}

use clap::Parser;

use crate::{
    cli::{HistoryArgs, ReportArgs, invoice::InvoiceArgs},
    core::{analysis::analyze_invoice, invoice::InvoiceRecord},
    history::InvoiceHistory,
    prelude::*,
    tables::build_analysis_table,
};

#[derive(Parser)]
pub struct AddArgs {
    #[clap(flatten)]
    history: HistoryArgs,

    #[clap(flatten)]
    invoice: InvoiceArgs,
}

impl AddArgs {
    #[instrument(skip_all)]
    pub fn run(self, report_args: &ReportArgs) -> Result {
        let entry = self.invoice.to_entry();
        let record = InvoiceRecord::try_from(entry).context("the invoice is not added")?;

        let mut history = InvoiceHistory::read_from(&self.history.path)?;
        if history.entries.iter().any(|it| (it.month, it.year) == (entry.month, entry.year)) {
            warn!(period = %record.period(), "the history already has an invoice for this period");
        }
        history.push(entry);
        history.write_to(&self.history.path)?;
        info!(period = %record.period(), n_invoices = history.len(), "added");

        println!("{}", build_analysis_table(&[analyze_invoice(&record)], &report_args.currency));
        Ok(())
    }
}

mod add;
mod analyze;
mod audit;
mod invoice;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    cli::{add::AddArgs, analyze::AnalyzeArgs, audit::AuditArgs},
    client::ClientProfile,
    prelude::*,
    tables::build_catalog_table,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub report: ReportArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Audit the entire invoice history and print the report.
    #[clap(name = "audit")]
    Audit(AuditArgs),

    /// Validate an invoice and append it to the history.
    #[clap(name = "add")]
    Add(Box<AddArgs>),

    /// Audit a single invoice given on the command line, without storing it.
    #[clap(name = "analyze")]
    Analyze(Box<AnalyzeArgs>),

    /// Print the available capacitor bank ratings.
    #[clap(name = "catalog")]
    Catalog,
}

impl Command {
    pub fn run(self, report: &ReportArgs) -> Result {
        match self {
            Self::Audit(args) => args.run(report),
            Self::Add(args) => args.run(report),
            Self::Analyze(args) => args.run(report),
            Self::Catalog => {
                println!("{}", build_catalog_table());
                Ok(())
            }
        }
    }
}

/// Report presentation settings.
#[derive(Parser)]
pub struct ReportArgs {
    #[clap(flatten)]
    pub client: ClientProfile,

    /// Currency symbol printed in front of the amounts.
    #[clap(long = "currency-symbol", default_value = "R$", env = "CURRENCY_SYMBOL")]
    pub currency: String,
}

#[derive(Parser)]
pub struct HistoryArgs {
    /// Invoice history file.
    #[clap(long = "invoices", env = "INVOICES_PATH", default_value = "invoices.toml")]
    pub path: PathBuf,
}

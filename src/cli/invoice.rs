use chrono::{Datelike, Local};
use clap::Parser;

use crate::{
    history::InvoiceEntry,
    quantity::{
        energy::{KilovarHours, KilowattHours},
        power::Kilowatts,
        rate::{KilowattHourRate, KilowattRate},
    },
};

/// Invoice fields entered on the command line.
#[derive(Parser)]
pub struct InvoiceArgs {
    /// Billing month, 1 to 12. Defaults to the current month.
    #[clap(long)]
    pub month: Option<u32>,

    /// Billing year. Defaults to the current year.
    #[clap(long)]
    pub year: Option<i32>,

    #[clap(long = "active-energy-kwh", default_value = "0")]
    pub active_energy: KilowattHours,

    #[clap(long = "reactive-energy-kvarh", default_value = "0")]
    pub reactive_energy: KilovarHours,

    #[clap(long = "contracted-demand-kw", default_value = "0")]
    pub contracted_demand: Kilowatts,

    #[clap(long = "measured-demand-kw", default_value = "0")]
    pub measured_demand: Kilowatts,

    /// Energy tariff, also applied to the excess reactive energy.
    #[clap(long = "energy-tariff-per-kwh", default_value = "0")]
    pub energy_tariff: KilowattHourRate,

    #[clap(long = "demand-tariff-per-kw", default_value = "0")]
    pub demand_tariff: KilowattRate,
}

impl InvoiceArgs {
    pub fn to_entry(&self) -> InvoiceEntry {
        let today = Local::now().date_naive();
        InvoiceEntry {
            month: self.month.unwrap_or_else(|| today.month()),
            year: self.year.unwrap_or_else(|| today.year()),
            active_energy: self.active_energy,
            reactive_energy: self.reactive_energy,
            contracted_demand: self.contracted_demand,
            measured_demand: self.measured_demand,
            energy_tariff: self.energy_tariff,
            demand_tariff: self.demand_tariff,
        }
    }
}

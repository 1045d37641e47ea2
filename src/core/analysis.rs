use serde::Serialize;

use crate::{
    core::{
        capacitor::CapacitorBank,
        invoice::{InvoiceRecord, Period},
        power_factor::PowerFactor,
    },
    quantity::{
        cost::Cost,
        energy::KilovarHours,
        power::Kilowatts,
        ratios::Percentage,
    },
};

/// Maximal reactive energy allowed per unit of active energy.
pub const REACTIVE_LIMIT_RATIO: f64 = 0.5;

/// Surcharge applied to the demand tariff above the contracted demand.
pub const DEMAND_OVERRUN_MULTIPLIER: f64 = 1.5;

/// Audit outcome for a single invoice.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct AnalysisResult {
    pub period: Period,
    pub power_factor: PowerFactor,

    /// Informational only: the reactive penalty follows the energy ratio rule.
    pub is_power_factor_compliant: bool,

    pub excess_reactive_energy: KilovarHours,
    pub reactive_penalty: Cost,
    pub demand_overrun: Kilowatts,
    pub demand_penalty: Cost,

    /// Zero when there is no contracted demand.
    #[serde(rename = "demand_utilization_percent")]
    pub demand_utilization: Percentage,

    pub capacitor_bank: CapacitorBank,
}

impl AnalysisResult {
    pub fn potential_savings(&self) -> Cost {
        self.reactive_penalty + self.demand_penalty
    }
}

/// Run the reactive energy, demand overrun, and capacitor bank checks on the invoice.
pub fn analyze_invoice(record: &InvoiceRecord) -> AnalysisResult {
    let allowed_reactive_energy = KilovarHours(record.active_energy().0 * REACTIVE_LIMIT_RATIO);
    let excess_reactive_energy =
        (record.reactive_energy() - allowed_reactive_energy).max(KilovarHours::zero());

    let demand_overrun =
        (record.measured_demand() - record.contracted_demand()).max(Kilowatts::zero());
    let demand_utilization = if record.contracted_demand() > Kilowatts::zero() {
        Percentage::of(record.measured_demand(), record.contracted_demand())
    } else {
        Percentage::zero()
    };

    AnalysisResult {
        period: record.period(),
        power_factor: record.power_factor(),
        is_power_factor_compliant: record.power_factor().is_compliant(),
        excess_reactive_energy,
        reactive_penalty: excess_reactive_energy * record.energy_tariff(),
        demand_overrun,
        demand_penalty: demand_overrun * DEMAND_OVERRUN_MULTIPLIER * record.demand_tariff(),
        demand_utilization,
        capacitor_bank: CapacitorBank::size(record.active_energy(), record.power_factor()),
    }
}

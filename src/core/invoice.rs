use std::fmt::{Debug, Display, Formatter};

use serde_with::SerializeDisplay;

use crate::{
    core::power_factor::PowerFactor,
    quantity::{
        energy::{KilovarHours, KilowattHours},
        power::Kilowatts,
        rate::{KilowattHourRate, KilowattRate},
    },
};

/// Billing period.
#[must_use]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, SerializeDisplay)]
pub struct Period {
    // Field order matters for the ordering.
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub const fn new(month: u32, year: i32) -> Self {
        Self { year, month }
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}

impl Debug for Period {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// Single monthly invoice.
///
/// The power factor is derived from the energies when the record is built, and cannot be set
/// on its own.
#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct InvoiceRecord {
    period: Period,
    active_energy: KilowattHours,
    reactive_energy: KilovarHours,
    contracted_demand: Kilowatts,
    measured_demand: Kilowatts,

    /// Rate applied to every unit of excess reactive energy.
    energy_tariff: KilowattHourRate,

    /// Rate applied to every unit of demand overrun.
    demand_tariff: KilowattRate,

    power_factor: PowerFactor,
}

#[bon::bon]
impl InvoiceRecord {
    #[builder]
    pub fn new(
        period: Period,
        active_energy: KilowattHours,
        reactive_energy: KilovarHours,
        contracted_demand: Kilowatts,
        measured_demand: Kilowatts,
        energy_tariff: KilowattHourRate,
        demand_tariff: KilowattRate,
    ) -> Self {
        Self {
            period,
            active_energy,
            reactive_energy,
            contracted_demand,
            measured_demand,
            energy_tariff,
            demand_tariff,
            power_factor: PowerFactor::from_energies(active_energy, reactive_energy),
        }
    }
}

impl InvoiceRecord {
    pub const fn period(&self) -> Period {
        self.period
    }

    pub const fn active_energy(&self) -> KilowattHours {
        self.active_energy
    }

    pub const fn reactive_energy(&self) -> KilovarHours {
        self.reactive_energy
    }

    pub const fn contracted_demand(&self) -> Kilowatts {
        self.contracted_demand
    }

    pub const fn measured_demand(&self) -> Kilowatts {
        self.measured_demand
    }

    pub const fn energy_tariff(&self) -> KilowattHourRate {
        self.energy_tariff
    }

    pub const fn demand_tariff(&self) -> KilowattRate {
        self.demand_tariff
    }

    pub const fn power_factor(&self) -> PowerFactor {
        self.power_factor
    }
}

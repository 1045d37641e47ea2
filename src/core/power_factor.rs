use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::quantity::energy::{KilovarHours, KilowattHours};

/// Ratio of active to apparent energy over a billing period.
#[must_use]
#[derive(Copy, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PowerFactor(f64);

ordered_float!(PowerFactor);

impl PowerFactor {
    /// Minimal power factor accepted by the regulation.
    pub const MIN: Self = Self(0.92);

    pub const UNITY: Self = Self(1.0);

    /// Smallest positive value representable with 4 decimal places.
    const SMALLEST: f64 = 0.0001;

    /// Calculate the power factor from the energies, rounded to 4 decimal places.
    ///
    /// Without active energy there is no displacement to penalize, so the power factor is unity
    /// regardless of the reactive reading. With active energy the result never rounds down
    /// to zero: it stays within `(0, 1]`, and so the phase angle tangent stays finite.
    ///
    /// Ties are rounded away from zero, not to even. The two only disagree on exact binary ties
    /// at the 5th decimal place, which real meter readings do not produce.
    pub fn from_energies(active: KilowattHours, reactive: KilovarHours) -> Self {
        if active == KilowattHours::zero() {
            return Self::UNITY;
        }
        let apparent = active.0.hypot(reactive.0);
        Self(((active.0 / apparent * 10_000.0).round() / 10_000.0).max(Self::SMALLEST))
    }

    pub const fn get(self) -> f64 {
        self.0
    }

    pub fn is_compliant(self) -> bool {
        self >= Self::MIN
    }

    /// Tangent of the phase angle, that is the reactive-to-active ratio.
    pub fn tan_phi(self) -> f64 {
        self.0.acos().tan()
    }
}

impl Display for PowerFactor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.*}", f.precision().unwrap_or(2), self.0)
    }
}

impl Debug for PowerFactor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "cos φ = {:.4}", self.0)
    }
}

use serde::Serialize;

use crate::{
    core::power_factor::PowerFactor,
    quantity::{energy::KilowattHours, power::Kilovars},
};

/// Commercially available capacitor bank ratings, ascending.
pub const CATALOG: [Kilovars; 14] = [
    Kilovars(5.0),
    Kilovars(10.0),
    Kilovars(15.0),
    Kilovars(20.0),
    Kilovars(25.0),
    Kilovars(30.0),
    Kilovars(35.0),
    Kilovars(40.0),
    Kilovars(50.0),
    Kilovars(60.0),
    Kilovars(75.0),
    Kilovars(100.0),
    Kilovars(150.0),
    Kilovars(200.0),
];

/// Capacitor bank sizing outcome.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "recommendation", rename_all = "snake_case")]
pub enum CapacitorBank {
    /// The power factor already complies.
    NotRequired,

    Recommended {
        /// Theoretical compensation needed to reach the minimal power factor.
        #[serde(rename = "required_kvar")]
        required: Kilovars,

        /// Smallest catalog rating that covers the requirement.
        #[serde(rename = "commercial_kvar")]
        commercial: Kilovars,
    },
}

impl CapacitorBank {
    /// Size the bank that lifts the power factor to [`PowerFactor::MIN`].
    pub fn size(active_energy: KilowattHours, power_factor: PowerFactor) -> Self {
        if power_factor.is_compliant() {
            return Self::NotRequired;
        }
        let required =
            Kilovars(active_energy.0 * (power_factor.tan_phi() - PowerFactor::MIN.tan_phi()));
        Self::Recommended { required, commercial: commercial_rating(required) }
    }

    pub const fn is_recommended(self) -> bool {
        matches!(self, Self::Recommended { .. })
    }

    pub const fn required(self) -> Kilovars {
        match self {
            Self::NotRequired => Kilovars::zero(),
            Self::Recommended { required, .. } => required,
        }
    }

    pub const fn commercial(self) -> Kilovars {
        match self {
            Self::NotRequired => Kilovars::zero(),
            Self::Recommended { commercial, .. } => commercial,
        }
    }
}

/// Smallest catalog rating not less than the requirement, or the largest one if none is enough.
pub fn commercial_rating(required: Kilovars) -> Kilovars {
    let largest = CATALOG[CATALOG.len() - 1];
    CATALOG.iter().copied().find(|rating| *rating >= required).unwrap_or(largest)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::energy::KilovarHours;

    #[test]
    fn test_catalog_is_ascending() {
        assert!(CATALOG.is_sorted());
    }

    #[test]
    fn test_commercial_rating_exact_match() {
        assert_eq!(commercial_rating(Kilovars(25.0)), Kilovars(25.0));
    }

    #[test]
    fn test_commercial_rating_rounds_up() {
        assert_eq!(commercial_rating(Kilovars(0.1)), Kilovars(5.0));
        assert_eq!(commercial_rating(Kilovars(24.06)), Kilovars(25.0));
        assert_eq!(commercial_rating(Kilovars(173.98)), Kilovars(200.0));
    }

    #[test]
    fn test_commercial_rating_falls_back_to_largest() {
        assert_eq!(commercial_rating(Kilovars(200.01)), Kilovars(200.0));
        assert_eq!(commercial_rating(Kilovars(10_000.0)), Kilovars(200.0));
    }

    #[test]
    fn test_not_required_when_compliant() {
        let bank = CapacitorBank::size(KilowattHours(1000.0), PowerFactor::MIN);
        assert_eq!(bank, CapacitorBank::NotRequired);
        assert_eq!(bank.required(), Kilovars::zero());
        assert_eq!(bank.commercial(), Kilovars::zero());
    }

    #[test]
    fn test_sized_below_threshold() {
        let power_factor = PowerFactor::from_energies(KilowattHours(1000.0), KilovarHours(450.0));
        assert_abs_diff_eq!(power_factor.get(), 0.9119);
        let bank = CapacitorBank::size(KilowattHours(1000.0), power_factor);
        assert!(bank.is_recommended());
        assert_abs_diff_eq!(bank.required().0, 24.065, epsilon = 0.001);
        assert_eq!(bank.commercial(), Kilovars(25.0));
    }

    #[test]
    fn test_serialize() {
        let bank = CapacitorBank::Recommended {
            required: Kilovars(17.5),
            commercial: Kilovars(20.0),
        };
        assert_eq!(
            serde_json::to_string(&bank).unwrap(),
            r#"{"recommendation":"recommended","required_kvar":17.5,"commercial_kvar":20.0}"#,
        );
        assert_eq!(
            serde_json::to_string(&CapacitorBank::NotRequired).unwrap(),
            r#"{"recommendation":"not_required"}"#,
        );
    }
}

use crate::quantity::{cost::Cost, rate::KilowattHourRate};

quantity!(
    /// Active energy, the useful energy actually consumed.
    KilowattHours, via: f64, suffix: " kWh", precision: 0
);

quantity!(
    /// Reactive energy drawn by inductive or capacitive loads.
    KilovarHours, via: f64, suffix: " kVArh", precision: 0
);

// Excess reactive energy is billed at the active energy tariff.
implement_mul!(KilovarHours, KilowattHourRate, Cost);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_reactive_energy_cost() {
        let cost = KilovarHours(100.0) * KilowattHourRate(0.10);
        assert_abs_diff_eq!(cost.0, 10.0, epsilon = 1e-9);
        assert_eq!(KilowattHourRate(0.10) * KilovarHours(100.0), cost);
    }

    #[test]
    fn test_display() {
        assert_eq!(KilowattHours(1234.4).to_string(), "1234 kWh");
        assert_eq!(format!("{:.1}", KilovarHours(12.34)), "12.3 kVArh");
    }

    #[test]
    fn test_ordering_with_nan() {
        assert!(KilowattHours(f64::NAN) > KilowattHours(1.0));
    }
}

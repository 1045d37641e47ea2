use crate::quantity::{cost::Cost, rate::KilowattRate};

quantity!(
    /// Contracted or measured demand.
    Kilowatts, via: f64, suffix: " kW", precision: 1
);

quantity!(
    /// Reactive power, the rating unit of capacitor banks.
    Kilovars, via: f64, suffix: " kVAr", precision: 0
);

implement_mul!(Kilowatts, KilowattRate, Cost);

quantity!(
    /// Currency per kilowatt-hour.
    KilowattHourRate, via: f64, suffix: "/kWh", precision: 2
);

quantity!(
    /// Currency per kilowatt of demand.
    KilowattRate, via: f64, suffix: "/kW", precision: 2
);

quantity!(Percentage, via: f64, suffix: "%", precision: 1);

impl Percentage {
    /// Express `numerator / denominator` in percent.
    pub fn of<T: std::ops::Div<Output = f64>>(numerator: T, denominator: T) -> Self {
        Self(numerator / denominator * 100.0)
    }
}

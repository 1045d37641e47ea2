use std::{fmt::Debug, fs, path::Path};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    core::invoice::{InvoiceRecord, Period},
    prelude::*,
    quantity::{
        energy::{KilovarHours, KilowattHours},
        power::Kilowatts,
        rate::{KilowattHourRate, KilowattRate},
    },
};

/// Invoice as entered by the user, not yet validated.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct InvoiceEntry {
    pub month: u32,
    pub year: i32,

    #[serde(rename = "active_energy_kwh")]
    pub active_energy: KilowattHours,

    #[serde(rename = "reactive_energy_kvarh")]
    pub reactive_energy: KilovarHours,

    #[serde(rename = "contracted_demand_kw")]
    pub contracted_demand: Kilowatts,

    #[serde(rename = "measured_demand_kw")]
    pub measured_demand: Kilowatts,

    #[serde(rename = "energy_tariff_per_kwh")]
    pub energy_tariff: KilowattHourRate,

    #[serde(rename = "demand_tariff_per_kw")]
    pub demand_tariff: KilowattRate,
}

impl TryFrom<InvoiceEntry> for InvoiceRecord {
    type Error = Error;

    fn try_from(entry: InvoiceEntry) -> Result<Self> {
        ensure!(
            (1..=12).contains(&entry.month),
            "month must be within 1..=12, got {}",
            entry.month,
        );
        NaiveDate::from_ymd_opt(entry.year, entry.month, 1)
            .with_context(|| format!("year {} is out of range", entry.year))?;

        ensure_non_negative("active energy", entry.active_energy)?;
        ensure_non_negative("reactive energy", entry.reactive_energy)?;
        ensure_non_negative("contracted demand", entry.contracted_demand)?;
        ensure_non_negative("measured demand", entry.measured_demand)?;
        ensure_non_negative("energy tariff", entry.energy_tariff)?;
        ensure_non_negative("demand tariff", entry.demand_tariff)?;

        Ok(Self::builder()
            .period(Period::new(entry.month, entry.year))
            .active_energy(entry.active_energy)
            .reactive_energy(entry.reactive_energy)
            .contracted_demand(entry.contracted_demand)
            .measured_demand(entry.measured_demand)
            .energy_tariff(entry.energy_tariff)
            .demand_tariff(entry.demand_tariff)
            .build())
    }
}

fn ensure_non_negative<T>(name: &str, value: T) -> Result
where
    T: Copy + Debug + Into<f64>,
{
    let raw: f64 = value.into();
    ensure!(raw.is_finite(), "{name} must be a finite number, got {value:?}");
    ensure!(raw >= 0.0, "{name} must not be negative, got {value:?}");
    Ok(())
}

/// Ordered invoice history of a single client.
#[must_use]
#[derive(Default, Serialize, Deserialize)]
pub struct InvoiceHistory {
    #[serde(default, rename = "invoice")]
    pub entries: Vec<InvoiceEntry>,
}

impl InvoiceHistory {
    /// Read the history, or start an empty one if the file does not exist yet.
    #[instrument(skip_all, fields(path = ?path.as_ref()))]
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            warn!("history file does not exist, starting a new one");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read the invoice history from `{}`", path.display())
        })?;
        let history: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse the invoice history `{}`", path.display()))?;
        debug!(n_entries = history.entries.len(), "read");
        Ok(history)
    }

    #[instrument(skip_all, fields(path = ?path.as_ref()))]
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result {
        let path = path.as_ref();
        fs::write(path, toml::to_string(self)?).with_context(|| {
            format!("failed to write the invoice history to `{}`", path.display())
        })?;
        debug!(n_entries = self.entries.len(), "written");
        Ok(())
    }

    pub fn push(&mut self, entry: InvoiceEntry) {
        self.entries.push(entry);
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate all the entries, keeping the order.
    pub fn try_into_records(&self) -> Result<Vec<InvoiceRecord>> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                InvoiceRecord::try_from(*entry).with_context(|| {
                    format!("invoice #{} ({:02}/{}) is invalid", i + 1, entry.month, entry.year)
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const HISTORY: &str = r#"
        [[invoice]]
        month = 1
        year = 2024
        active_energy_kwh = 1000.0
        reactive_energy_kvarh = 600.0
        contracted_demand_kw = 100.0
        measured_demand_kw = 120.0
        energy_tariff_per_kwh = 0.1
        demand_tariff_per_kw = 20.0

        [[invoice]]
        month = 2
        year = 2024
        active_energy_kwh = 0.0
        reactive_energy_kvarh = 50.0
        contracted_demand_kw = 0.0
        measured_demand_kw = 0.0
        energy_tariff_per_kwh = 0.1
        demand_tariff_per_kw = 20.0
    "#;

    fn entry() -> InvoiceEntry {
        InvoiceEntry {
            month: 5,
            year: 2024,
            active_energy: KilowattHours(1000.0),
            reactive_energy: KilovarHours(300.0),
            contracted_demand: Kilowatts(100.0),
            measured_demand: Kilowatts(90.0),
            energy_tariff: KilowattHourRate(0.1),
            demand_tariff: KilowattRate(20.0),
        }
    }

    #[test]
    fn test_parse_history() {
        let history: InvoiceHistory = toml::from_str(HISTORY).unwrap();
        assert_eq!(history.len(), 2);

        let records = history.try_into_records().unwrap();
        assert_eq!(records[0].period(), Period::new(1, 2024));
        assert_abs_diff_eq!(records[0].power_factor().get(), 0.8575);
        assert_eq!(records[1].period(), Period::new(2, 2024));
        assert_abs_diff_eq!(records[1].power_factor().get(), 1.0);
    }

    #[test]
    fn test_empty_history() {
        let history: InvoiceHistory = toml::from_str("").unwrap();
        assert!(history.is_empty());
        assert!(history.try_into_records().unwrap().is_empty());
    }

    #[test]
    fn test_valid_entry() {
        let record = InvoiceRecord::try_from(entry()).unwrap();
        assert_eq!(record.period().to_string(), "05/2024");
    }

    #[test]
    fn test_invalid_month() {
        for month in [0, 13] {
            let error = InvoiceRecord::try_from(InvoiceEntry { month, ..entry() }).unwrap_err();
            assert!(error.to_string().contains("month"), "{error}");
        }
    }

    #[test]
    fn test_negative_quantity() {
        let error = InvoiceRecord::try_from(InvoiceEntry {
            reactive_energy: KilovarHours(-1.0),
            ..entry()
        })
        .unwrap_err();
        assert_eq!(error.to_string(), "reactive energy must not be negative, got -1.0kVArh");
    }

    #[test]
    fn test_not_finite_quantity() {
        let error = InvoiceRecord::try_from(InvoiceEntry {
            measured_demand: Kilowatts(f64::NAN),
            ..entry()
        })
        .unwrap_err();
        assert!(error.to_string().starts_with("measured demand must be a finite number"), "{error}");
    }

    #[test]
    fn test_invalid_entry_is_located() {
        let mut history = InvoiceHistory::default();
        history.push(entry());
        history.push(InvoiceEntry { month: 13, ..entry() });
        let error = history.try_into_records().unwrap_err();
        assert_eq!(error.to_string(), "invoice #2 (13/2024) is invalid");
    }

    #[test]
    fn test_round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("kvar-audit-{}.toml", std::process::id()));
        let mut history = InvoiceHistory::default();
        history.push(entry());
        history.write_to(&path).unwrap();

        let history = InvoiceHistory::read_from(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.entries[0].reactive_energy, KilovarHours(300.0));
    }

    #[test]
    fn test_missing_file() {
        let history = InvoiceHistory::read_from("/nonexistent/invoices.toml").unwrap();
        assert!(history.is_empty());
    }
}

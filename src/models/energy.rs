use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use super::error::AppError;

/// One day's metered consumption for a property.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EnergyReading {
    pub date: NaiveDate,
    pub kwh_consumed: f64,
}

/// The full reading history for one property. Readings arrive in
/// chronological order from the backend and are read-only on the
/// client.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EnergyData {
    pub property_id: String,
    pub readings: Vec<EnergyReading>,
}

/// Aggregate consumption figures derived from a reading sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyStats {
    pub total: f64,
    pub average: f64,
    pub peak: f64,
    pub days: usize,
}

impl EnergyData {
    pub fn new(property_id: impl Into<String>, readings: Vec<EnergyReading>) -> Self {
        Self {
            property_id: property_id.into(),
            readings,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Derives total, daily average and peak-day consumption by a
    /// single pass over the readings.
    pub fn stats(&self) -> Result<EnergyStats, AppError> {
        if self.readings.is_empty() {
            return Err(AppError::DataError("No readings available".to_string()));
        }

        let values: Vec<f64> = self.readings.iter().map(|r| r.kwh_consumed).collect();

        let total: f64 = values.iter().sum();
        let average = total / values.len() as f64;
        let peak = values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));

        Ok(EnergyStats {
            total,
            average,
            peak,
            days: values.len(),
        })
    }

    /// Maps readings into chart series data: a day-first date label and
    /// the kWh value rounded to two decimals, preserving reading order.
    pub fn series_data(&self) -> (Vec<String>, Vec<f64>) {
        let labels = self.readings.iter().map(|r| format_date_label(r.date)).collect();
        let values = self
            .readings
            .iter()
            .map(|r| (r.kwh_consumed * 100.0).round() / 100.0)
            .collect();

        (labels, values)
    }
}

/// Short axis label, e.g. "5 Jan".
fn format_date_label(date: NaiveDate) -> String {
    format!("{} {}", date.day(), date.format("%b"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(date: NaiveDate, kwh: f64) -> EnergyReading {
        EnergyReading {
            date,
            kwh_consumed: kwh,
        }
    }

    #[test]
    fn test_stats_reduction() {
        let base = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let data = EnergyData::new(
            "p1",
            vec![
                reading(base, 10.0),
                reading(base.succ_opt().unwrap(), 20.0),
                reading(base.succ_opt().unwrap().succ_opt().unwrap(), 30.0),
            ],
        );

        let stats = data.stats().unwrap();
        assert_eq!(stats.total, 60.0);
        assert_eq!(stats.average, 20.0);
        assert_eq!(stats.peak, 30.0);
        assert_eq!(stats.days, 3);
    }

    #[test]
    fn test_stats_empty_is_error() {
        let data = EnergyData::new("p1", vec![]);
        assert!(data.stats().is_err());
    }

    #[test]
    fn test_date_label_format() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_date_label(date), "5 Jan");

        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(format_date_label(date), "31 Dec");
    }
}

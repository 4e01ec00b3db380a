//! Tariff resolution
//!
//! Answers two different questions over the same set of tariff windows:
//! - which tariff applies right now (`tariff_for_hour`, `current_rate`):
//!   only windows that are active *and* valid on the given date
//! - what the household pays on average (`average_rate`): every active
//!   window, ignoring validity dates
//!
//! Dashboard figures use the average; the "current tariff" display uses the
//! exact lookup.

use crate::core::{Error, Result, TariffKind, TariffWindow, DEFAULT_RATE_PER_KWH};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tariff that applies at a given moment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentRate {
    /// Tariff name, `None` when the default rate is used
    pub name: Option<String>,
    pub kind: Option<TariffKind>,
    pub rate_per_kwh: f64,
    pub start_hour: Option<u32>,
    pub end_hour: Option<u32>,
    /// True when no tariff window was available
    pub is_default: bool,
}

/// Resolves tariffs over a caller-supplied window list
///
/// The order of `windows` matters: when several windows cover the same hour
/// the first one wins. Overlaps are not rejected.
pub struct TariffResolver<'a> {
    windows: &'a [TariffWindow],
    default_rate: f64,
}

impl<'a> TariffResolver<'a> {
    /// Create a resolver using the built-in default rate
    pub fn new(windows: &'a [TariffWindow]) -> Self {
        Self {
            windows,
            default_rate: DEFAULT_RATE_PER_KWH,
        }
    }

    /// Use a different fallback rate (from the pricing configuration)
    pub fn with_default_rate(mut self, rate: f64) -> Self {
        if rate.is_finite() && rate > 0.0 {
            self.default_rate = rate;
        } else {
            log::warn!("Ignoring invalid default rate {}, keeping {}", rate, self.default_rate);
        }
        self
    }

    /// Windows that are active and valid on `date`, in caller order
    pub fn valid_on(&self, date: NaiveDate) -> Vec<&'a TariffWindow> {
        let windows: &'a [TariffWindow] = self.windows;
        windows.iter().filter(|w| w.is_valid_on(date)).collect()
    }

    /// Windows with the active flag set, regardless of validity dates
    pub fn active(&self) -> Vec<&'a TariffWindow> {
        let windows: &'a [TariffWindow] = self.windows;
        windows.iter().filter(|w| w.is_active).collect()
    }

    /// Find the tariff applying at `hour` on `date`
    ///
    /// Returns the first valid window covering the hour, otherwise the first
    /// valid window, otherwise `None`.
    pub fn tariff_for_hour(&self, date: NaiveDate, hour: u32) -> Result<Option<&'a TariffWindow>> {
        if hour > 23 {
            return Err(Error::invalid(format!("hour must be within 0-23, got {}", hour)));
        }

        let mut fallback = None;
        for window in self.valid_on(date) {
            if window.covers_hour(hour) {
                return Ok(Some(window));
            }
            if fallback.is_none() {
                fallback = Some(window);
            }
        }

        if let Some(window) = fallback {
            log::debug!("No tariff covers hour {}, falling back to '{}'", hour, window.name);
        }
        Ok(fallback)
    }

    /// Mean rate of the active windows, or the default rate when there are none
    pub fn average_rate(&self) -> f64 {
        let (sum, count) = self
            .active()
            .into_iter()
            .fold((0.0, 0usize), |(sum, count), w| (sum + w.rate_per_kwh, count + 1));

        if count == 0 {
            log::debug!("No active tariffs, using default rate {}", self.default_rate);
            self.default_rate
        } else {
            sum / count as f64
        }
    }

    /// Rate applying at `hour` on `date`, substituting the default when no tariff exists
    pub fn current_rate(&self, date: NaiveDate, hour: u32) -> Result<CurrentRate> {
        let current = match self.tariff_for_hour(date, hour)? {
            Some(window) => CurrentRate {
                name: Some(window.name.clone()),
                kind: Some(window.kind),
                rate_per_kwh: window.rate_per_kwh,
                start_hour: Some(window.start_hour),
                end_hour: Some(window.end_hour),
                is_default: false,
            },
            None => CurrentRate {
                name: None,
                kind: None,
                rate_per_kwh: self.default_rate,
                start_hour: None,
                end_hour: None,
                is_default: true,
            },
        };
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn two_zone_tariffs() -> Vec<TariffWindow> {
        vec![
            TariffWindow::new(1, "Night", TariffKind::Night, 2.5, 23, 7, date(2024, 1, 1)),
            TariffWindow::new(2, "Day", TariffKind::Peak, 6.5, 7, 23, date(2024, 1, 1)),
        ]
    }

    #[test]
    fn test_average_rate_defaults_when_empty() {
        let resolver = TariffResolver::new(&[]);
        assert_eq!(resolver.average_rate(), 5.5);
    }

    #[test]
    fn test_average_rate_is_mean_of_active() {
        let mut tariffs = two_zone_tariffs();
        let resolver = TariffResolver::new(&tariffs);
        assert!((resolver.average_rate() - 4.5).abs() < 1e-9);

        tariffs.reverse();
        let resolver = TariffResolver::new(&tariffs);
        assert!((resolver.average_rate() - 4.5).abs() < 1e-9);

        tariffs[0].is_active = false;
        let resolver = TariffResolver::new(&tariffs);
        assert!((resolver.average_rate() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_average_rate_ignores_validity_dates() {
        let mut tariffs = two_zone_tariffs();
        tariffs[1].valid_to = Some(date(2024, 3, 31));
        let resolver = TariffResolver::new(&tariffs);

        // Expired window still counts for the average...
        assert!((resolver.average_rate() - 4.5).abs() < 1e-9);
        // ...but not for the hourly lookup
        assert_eq!(resolver.valid_on(date(2024, 6, 1)).len(), 1);
    }

    #[test]
    fn test_tariff_for_hour_wraparound() {
        let tariffs = two_zone_tariffs();
        let resolver = TariffResolver::new(&tariffs);
        let today = date(2024, 5, 10);

        for hour in [23, 0, 3, 6] {
            assert_eq!(resolver.tariff_for_hour(today, hour).unwrap().unwrap().id, 1);
        }
        for hour in [7, 12, 22] {
            assert_eq!(resolver.tariff_for_hour(today, hour).unwrap().unwrap().id, 2);
        }
    }

    #[test]
    fn test_overlapping_windows_first_wins() {
        let tariffs = vec![
            TariffWindow::new(1, "Evening peak", TariffKind::Peak, 8.0, 17, 21, date(2024, 1, 1)),
            TariffWindow::new(2, "Day", TariffKind::Shoulder, 6.0, 7, 23, date(2024, 1, 1)),
        ];
        let resolver = TariffResolver::new(&tariffs);
        let today = date(2024, 5, 10);

        for _ in 0..3 {
            assert_eq!(resolver.tariff_for_hour(today, 18).unwrap().unwrap().id, 1);
        }
        assert_eq!(resolver.tariff_for_hour(today, 10).unwrap().unwrap().id, 2);
    }

    #[test]
    fn test_fallback_to_first_valid_window() {
        let mut tariffs = vec![
            TariffWindow::new(1, "Expired", TariffKind::Flat, 9.0, 0, 23, date(2020, 1, 1)),
            TariffWindow::new(2, "Morning", TariffKind::Peak, 7.0, 6, 10, date(2024, 1, 1)),
        ];
        tariffs[0].valid_to = Some(date(2020, 12, 31));
        let resolver = TariffResolver::new(&tariffs);

        let found = resolver.tariff_for_hour(date(2024, 5, 10), 20).unwrap().unwrap();
        assert_eq!(found.id, 2);
    }

    #[test]
    fn test_no_valid_tariff_uses_default_rate() {
        let mut tariffs = two_zone_tariffs();
        for t in &mut tariffs {
            t.is_active = false;
        }
        let resolver = TariffResolver::new(&tariffs).with_default_rate(4.2);

        assert!(resolver.tariff_for_hour(date(2024, 5, 10), 12).unwrap().is_none());
        let current = resolver.current_rate(date(2024, 5, 10), 12).unwrap();
        assert!(current.is_default);
        assert_eq!(current.rate_per_kwh, 4.2);
        assert_eq!(current.name, None);
    }

    #[test]
    fn test_future_tariff_not_valid_yet() {
        let tariffs = vec![TariffWindow::new(1, "Next year", TariffKind::Flat, 7.0, 0, 0, date(2030, 1, 1))];
        let resolver = TariffResolver::new(&tariffs);
        assert!(resolver.tariff_for_hour(date(2024, 5, 10), 12).unwrap().is_none());
    }

    #[test]
    fn test_hour_out_of_range() {
        let tariffs = two_zone_tariffs();
        let resolver = TariffResolver::new(&tariffs);
        assert!(matches!(
            resolver.tariff_for_hour(date(2024, 5, 10), 24),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_current_rate_reports_tariff() {
        let tariffs = two_zone_tariffs();
        let resolver = TariffResolver::new(&tariffs);
        let current = resolver.current_rate(date(2024, 5, 10), 2).unwrap();

        assert_eq!(current.name.as_deref(), Some("Night"));
        assert_eq!(current.kind, Some(TariffKind::Night));
        assert_eq!(current.rate_per_kwh, 2.5);
        assert_eq!((current.start_hour, current.end_hour), (Some(23), Some(7)));
        assert!(!current.is_default);
    }
}

//! Month-end and yearly consumption projections
//!
//! Both projections are linear run-rates: the average daily consumption is
//! assumed to hold for the rest of the period. No seasonal adjustment.

use crate::consumption::round_half_up;
use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};

const DAYS_PER_YEAR: f64 = 365.0;

/// Projection for the end of the current month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProjection {
    pub projected_kwh: f64,
    pub projected_cost: f64,
    /// Days left after today
    pub remaining_days: u32,
    pub average_daily_kwh: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyProjection {
    pub kwh: f64,
    pub cost: f64,
}

/// Project the month-end total from the month-to-date figure
///
/// `days_elapsed` includes today. Cost is computed from the unrounded energy,
/// then both are rounded half-up to 2 decimals.
pub fn project_monthly(
    month_to_date_kwh: f64,
    average_daily_kwh: f64,
    days_elapsed: u32,
    days_in_month: u32,
    average_rate: f64,
) -> Result<MonthlyProjection> {
    check_non_negative("month-to-date consumption", month_to_date_kwh)?;
    check_non_negative("average daily consumption", average_daily_kwh)?;
    check_non_negative("average rate", average_rate)?;

    if days_elapsed > days_in_month {
        return Err(Error::invalid(format!(
            "{} days elapsed in a {}-day month",
            days_elapsed, days_in_month
        )));
    }

    let remaining_days = days_in_month - days_elapsed;
    let projected_kwh = month_to_date_kwh + average_daily_kwh * f64::from(remaining_days);

    log::debug!(
        "Monthly projection: {:.2} kWh so far, {} days remaining",
        month_to_date_kwh,
        remaining_days
    );

    Ok(MonthlyProjection {
        projected_kwh: round_half_up(projected_kwh, 2),
        projected_cost: round_half_up(projected_kwh * average_rate, 2),
        remaining_days,
        average_daily_kwh: round_half_up(average_daily_kwh, 2),
    })
}

/// Project a full year at the current daily consumption
pub fn project_yearly(average_daily_kwh: f64, average_rate: f64) -> Result<YearlyProjection> {
    check_non_negative("average daily consumption", average_daily_kwh)?;
    check_non_negative("average rate", average_rate)?;

    let kwh = average_daily_kwh * DAYS_PER_YEAR;
    Ok(YearlyProjection {
        kwh: round_half_up(kwh, 2),
        cost: round_half_up(kwh * average_rate, 2),
    })
}

fn check_non_negative(what: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(format!("{} must be a non-negative number, got {}", what, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_monthly() {
        let p = project_monthly(60.0, 3.0, 20, 30, 5.0).unwrap();
        assert_eq!(p.remaining_days, 10);
        assert!((p.projected_kwh - 90.0).abs() < 1e-9);
        assert!((p.projected_cost - 450.0).abs() < 1e-9);
        assert!((p.average_daily_kwh - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_last_day_projects_month_to_date() {
        let p = project_monthly(87.5, 3.0, 31, 31, 5.0).unwrap();
        assert_eq!(p.remaining_days, 0);
        assert!((p.projected_kwh - 87.5).abs() < 1e-9);
    }

    #[test]
    fn test_cost_uses_unrounded_energy() {
        // 1.994 kWh shows as 1.99 but costs 19.94, not 19.90
        let p = project_monthly(1.994, 0.0, 30, 30, 10.0).unwrap();
        assert!((p.projected_kwh - 1.99).abs() < 1e-9);
        assert!((p.projected_cost - 19.94).abs() < 1e-9);

        let p = project_monthly(0.0, 0.001, 0, 30, 0.1).unwrap();
        assert!((p.projected_kwh - 0.03).abs() < 1e-9);
        assert!((p.projected_cost - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(matches!(project_monthly(10.0, 1.0, 31, 30, 5.0), Err(Error::InvalidInput(_))));
        assert!(project_monthly(-1.0, 1.0, 10, 30, 5.0).is_err());
        assert!(project_monthly(10.0, f64::NAN, 10, 30, 5.0).is_err());
        assert!(project_yearly(-2.0, 5.0).is_err());
    }

    #[test]
    fn test_project_yearly() {
        let y = project_yearly(10.0, 5.5).unwrap();
        assert!((y.kwh - 3650.0).abs() < 1e-9);
        assert!((y.cost - 20075.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_consumption() {
        let p = project_monthly(0.0, 0.0, 1, 30, 5.5).unwrap();
        assert_eq!(p.projected_kwh, 0.0);
        assert_eq!(p.projected_cost, 0.0);
    }
}

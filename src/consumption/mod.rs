//! Appliance energy and cost calculation
//!
//! Converts nameplate power, daily usage hours and quantity into daily and
//! monthly kWh. Months are a fixed 30 days, not calendar months.

use crate::core::ApplianceSnapshot;

/// Days in the billing month used for monthly figures
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Daily consumption in kWh
///
/// Negative inputs are clamped to zero and usage above 24 hours to 24, so the
/// result is never negative.
pub fn daily_kwh(appliance: &ApplianceSnapshot) -> f64 {
    let power = non_negative(appliance.power_watts);
    let hours = non_negative(appliance.daily_usage_hours).min(24.0);
    power * hours * appliance.quantity as f64 / 1000.0
}

/// Monthly consumption in kWh (30-day month)
pub fn monthly_kwh(appliance: &ApplianceSnapshot) -> f64 {
    daily_kwh(appliance) * DAYS_PER_MONTH
}

/// Daily cost at the given rate per kWh
pub fn daily_cost(appliance: &ApplianceSnapshot, rate_per_kwh: f64) -> f64 {
    daily_kwh(appliance) * non_negative(rate_per_kwh)
}

/// Monthly cost at the given rate per kWh
pub fn monthly_cost(appliance: &ApplianceSnapshot, rate_per_kwh: f64) -> f64 {
    monthly_kwh(appliance) * non_negative(rate_per_kwh)
}

/// Round half up to `decimals` places (2.125 -> 2.13, -2.25 -> -2.2)
pub fn round_half_up(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor + 0.5).floor() / factor
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

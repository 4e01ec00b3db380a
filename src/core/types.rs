//! Common types used across the advisor

use crate::consumption;
use crate::core::{Error, Result};
use chrono::{Datelike, Local, Months, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

fn default_true() -> bool { true }
fn default_quantity() -> u32 { 1 }

/// An appliance as supplied by the caller
///
/// Energy figures are never stored on the snapshot; they are derived from
/// power, usage hours and quantity on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceSnapshot {
    pub id: i64,
    /// Owning group, if any. The group may have been deleted independently.
    #[serde(default)]
    pub group_id: Option<i64>,
    /// Group display name, when the source joined it in
    #[serde(default)]
    pub group_name: Option<String>,
    pub name: String,
    /// Nameplate power in watts
    pub power_watts: f64,
    /// Hours of use per day (0-24)
    pub daily_usage_hours: f64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ApplianceSnapshot {
    pub fn new(id: i64, name: &str, power_watts: f64, daily_usage_hours: f64, quantity: u32) -> Self {
        Self {
            id,
            group_id: None,
            group_name: None,
            name: name.to_string(),
            power_watts,
            daily_usage_hours,
            quantity,
            is_active: true,
        }
    }

    pub fn in_group(mut self, group_id: i64) -> Self {
        self.group_id = Some(group_id);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn daily_kwh(&self) -> f64 {
        consumption::daily_kwh(self)
    }

    pub fn monthly_kwh(&self) -> f64 {
        consumption::monthly_kwh(self)
    }

    pub fn daily_cost(&self, rate_per_kwh: f64) -> f64 {
        consumption::daily_cost(self, rate_per_kwh)
    }

    pub fn monthly_cost(&self, rate_per_kwh: f64) -> f64 {
        consumption::monthly_cost(self, rate_per_kwh)
    }

    /// Check the stored-record invariants (power > 0, hours in 0-24, quantity >= 1)
    pub fn validate(&self) -> Result<()> {
        if !self.power_watts.is_finite() || self.power_watts <= 0.0 {
            return Err(Error::invalid(format!(
                "appliance '{}': power must be positive, got {}",
                self.name, self.power_watts
            )));
        }
        if !self.daily_usage_hours.is_finite() || !(0.0..=24.0).contains(&self.daily_usage_hours) {
            return Err(Error::invalid(format!(
                "appliance '{}': daily usage must be within 0-24 hours, got {}",
                self.name, self.daily_usage_hours
            )));
        }
        if self.quantity == 0 {
            return Err(Error::invalid(format!(
                "appliance '{}': quantity must be at least 1",
                self.name
            )));
        }
        Ok(())
    }
}

/// Tariff zone type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TariffKind {
    Peak,
    Night,
    Shoulder,
    Flat,
    #[serde(other)]
    Other,
}

impl TariffKind {
    /// Catalog key of the localized display name
    pub fn label_key(&self) -> &'static str {
        match self {
            TariffKind::Peak => "tariff.kind.peak",
            TariffKind::Night => "tariff.kind.night",
            TariffKind::Shoulder => "tariff.kind.shoulder",
            TariffKind::Flat => "tariff.kind.flat",
            TariffKind::Other => "tariff.kind.other",
        }
    }
}

/// A tariff rate applying during an hour range and a validity period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffWindow {
    pub id: i64,
    pub name: String,
    pub kind: TariffKind,
    pub rate_per_kwh: f64,
    /// First hour of the window (0-23), inclusive
    pub start_hour: u32,
    /// Hour the window ends (0-23), exclusive. Smaller than `start_hour`
    /// for windows spanning midnight.
    pub end_hour: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub valid_from: NaiveDate,
    /// Last valid day, inclusive. `None` means open-ended.
    #[serde(default)]
    pub valid_to: Option<NaiveDate>,
}

impl TariffWindow {
    pub fn new(
        id: i64,
        name: &str,
        kind: TariffKind,
        rate_per_kwh: f64,
        start_hour: u32,
        end_hour: u32,
        valid_from: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            kind,
            rate_per_kwh,
            start_hour,
            end_hour,
            is_active: true,
            valid_from,
            valid_to: None,
        }
    }

    /// Whether the window's hour range contains `hour`
    pub fn covers_hour(&self, hour: u32) -> bool {
        if self.start_hour <= self.end_hour {
            hour >= self.start_hour && hour < self.end_hour
        } else {
            // Overnight window, e.g. 23 -> 7
            hour >= self.start_hour || hour < self.end_hour
        }
    }

    /// Active flag set and `date` inside [valid_from, valid_to]
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.is_active
            && self.valid_from <= date
            && self.valid_to.map_or(true, |to| date <= to)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.rate_per_kwh.is_finite() || self.rate_per_kwh <= 0.0 {
            return Err(Error::invalid(format!(
                "tariff '{}': rate must be positive, got {}",
                self.name, self.rate_per_kwh
            )));
        }
        if self.start_hour > 23 || self.end_hour > 23 {
            return Err(Error::invalid(format!(
                "tariff '{}': hours must be within 0-23, got {}-{}",
                self.name, self.start_hour, self.end_hour
            )));
        }
        if let Some(to) = self.valid_to {
            if to < self.valid_from {
                return Err(Error::invalid(format!(
                    "tariff '{}': validity ends ({}) before it starts ({})",
                    self.name, to, self.valid_from
                )));
            }
        }
        Ok(())
    }
}

/// A persisted daily measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub date: NaiveDate,
    pub consumption_kwh: f64,
    pub cost: f64,
    #[serde(default)]
    pub tariff_label: Option<String>,
    #[serde(default)]
    pub usage_hours: Option<f64>,
    /// Appliance the measurement belongs to; `None` for whole-household records
    #[serde(default)]
    pub appliance_name: Option<String>,
}

impl HistoricalRecord {
    pub fn new(date: NaiveDate, consumption_kwh: f64, cost: f64) -> Self {
        Self {
            date,
            consumption_kwh,
            cost,
            tariff_label: None,
            usage_hours: None,
            appliance_name: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.consumption_kwh.is_finite() || self.consumption_kwh < 0.0 {
            return Err(Error::invalid(format!(
                "record of {}: consumption must be non-negative, got {}",
                self.date, self.consumption_kwh
            )));
        }
        Ok(())
    }
}

fn default_group_color() -> String { "#3498db".to_string() }
fn default_group_icon() -> String { "folder".to_string() }

/// A named collection of appliances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceGroup {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_group_icon")]
    pub icon: String,
    #[serde(default = "default_group_color")]
    pub color: String,
}

impl ApplianceGroup {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: None,
            icon: default_group_icon(),
            color: default_group_color(),
        }
    }
}

/// Per-group consumption summary over active appliances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupAggregate {
    pub group_id: i64,
    pub name: String,
    pub color: String,
    pub appliance_count: usize,
    pub daily_kwh: f64,
    pub monthly_kwh: f64,
}

/// Recommendation priority. Declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    /// A specific appliance uses a lot of energy
    HighConsumption,
    /// Shift load from the peak to the night tariff
    TariffOptimization,
    /// General best-practice advice
    General,
}

/// An energy-saving suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Appliance display name for per-appliance advice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appliance: Option<String>,
    pub message: String,
    pub priority: Priority,
    /// Daily kWh for consumption advice, savings per kWh for tariff advice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// Wall-clock snapshot supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    pub date: NaiveDate,
    /// Hour of day (0-23)
    pub hour: u32,
}

impl Clock {
    pub fn new(date: NaiveDate, hour: u32) -> Result<Self> {
        if hour > 23 {
            return Err(Error::invalid(format!("hour must be within 0-23, got {}", hour)));
        }
        Ok(Self { date, hour })
    }

    /// Read the local system clock. Only entry points call this.
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            date: now.date_naive(),
            hour: now.hour(),
        }
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.date.year(), self.date.month())
    }

    /// (year, month) of the calendar month before this one
    pub fn previous_month(&self) -> (i32, u32) {
        match self.date.checked_sub_months(Months::new(1)) {
            Some(d) => (d.year(), d.month()),
            None => (self.date.year(), self.date.month()),
        }
    }
}

/// Number of days in a calendar month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
        _ => 30,
    }
}

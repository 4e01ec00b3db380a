//! Household views
//!
//! Combines the calculators over one [`Household`] snapshot and produces the
//! serializable, rounded and localized structures the binaries print.
//! Costs shown per appliance and per group use the average tariff rate.

pub mod export;

pub use export::{export_csv, export_csv_string};

use crate::advisor::{ApplianceTip, RecommendationEngine};
use crate::analytics::{self, history, history::DailyPoint, history::MonthlyStat};
use crate::consumption::round_half_up;
use crate::core::{
    ApplianceSnapshot, Clock, Config, GroupAggregate, HistoricalRecord, Recommendation, Result,
    TariffKind,
};
use crate::forecast::{self, MonthlyProjection, YearlyProjection};
use crate::household::{Household, HouseholdSource};
use crate::i18n::I18n;
use crate::pricing::TariffResolver;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Main dashboard figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub daily_kwh: f64,
    pub monthly_kwh: f64,
    pub daily_cost: f64,
    pub monthly_cost: f64,
    /// Recorded consumption change against the previous month, in percent
    pub comparison_percent: f64,
    pub current_month_kwh: f64,
    pub current_month_cost: f64,
    pub appliance_count: usize,
    pub group_count: usize,
    pub current_tariff: String,
    pub current_rate: f64,
    pub currency: String,
}

/// An appliance with its derived consumption and advice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceView {
    #[serde(flatten)]
    pub appliance: ApplianceSnapshot,
    pub daily_kwh: f64,
    pub monthly_kwh: f64,
    pub daily_cost: f64,
    pub monthly_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<ApplianceTip>,
}

/// Totals over every appliance of the household
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionStats {
    pub appliance_count: usize,
    pub active_appliance_count: usize,
    pub daily_kwh: f64,
    pub monthly_kwh: f64,
    pub daily_cost: f64,
    pub monthly_cost: f64,
    pub average_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupView {
    #[serde(flatten)]
    pub group: GroupAggregate,
    pub daily_cost: f64,
    pub monthly_cost: f64,
}

/// The tariff applying now, or the default one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<TariffKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind_label: Option<String>,
    pub rate_per_kwh: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_hour: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_hour: Option<u32>,
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyView {
    #[serde(flatten)]
    pub stat: MonthlyStat,
    pub month_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastView {
    pub month: MonthlyProjection,
    pub year: YearlyProjection,
}

/// Builds every view of a household at a given moment
pub struct Reporter<'a> {
    household: &'a Household,
    appliances: Vec<ApplianceSnapshot>,
    config: &'a Config,
    i18n: &'a I18n,
    clock: Clock,
}

impl<'a> Reporter<'a> {
    pub fn new(household: &'a Household, config: &'a Config, i18n: &'a I18n, clock: Clock) -> Result<Self> {
        Ok(Self {
            appliances: household.appliances()?,
            household,
            config,
            i18n,
            clock,
        })
    }

    fn resolver(&self) -> TariffResolver<'a> {
        TariffResolver::new(&self.household.tariffs)
            .with_default_rate(self.config.pricing.default_rate_per_kwh)
    }

    fn engine(&self) -> RecommendationEngine<'a> {
        RecommendationEngine::new(self.i18n, self.config.advisor.clone())
    }

    fn records(&self) -> &'a [HistoricalRecord] {
        &self.household.history
    }

    pub fn average_rate(&self) -> f64 {
        self.resolver().average_rate()
    }

    pub fn dashboard(&self) -> Result<Dashboard> {
        let rate = self.average_rate();
        let totals = analytics::totals(&self.appliances, rate);

        let current = history::current_month(self.records(), &self.clock);
        let previous = history::previous_month(self.records(), &self.clock);
        let comparison = analytics::comparison_with_previous_month(current.kwh, previous.kwh);

        let tariff = self.current_tariff()?;

        Ok(Dashboard {
            daily_kwh: round_half_up(totals.daily_kwh, 2),
            monthly_kwh: round_half_up(totals.monthly_kwh, 2),
            daily_cost: round_half_up(totals.daily_cost, 2),
            monthly_cost: round_half_up(totals.monthly_cost, 2),
            comparison_percent: round_half_up(comparison, 1),
            current_month_kwh: round_half_up(current.kwh, 2),
            current_month_cost: round_half_up(current.cost, 2),
            appliance_count: self.appliances.len(),
            group_count: self.household.groups.len(),
            current_tariff: tariff.name,
            current_rate: tariff.rate_per_kwh,
            currency: self.config.pricing.currency.clone(),
        })
    }

    fn appliance_view(&self, appliance: &ApplianceSnapshot, rate: f64) -> ApplianceView {
        let daily_kwh = appliance.daily_kwh();
        ApplianceView {
            appliance: appliance.clone(),
            daily_kwh: round_half_up(daily_kwh, 3),
            monthly_kwh: round_half_up(appliance.monthly_kwh(), 2),
            daily_cost: round_half_up(appliance.daily_cost(rate), 2),
            monthly_cost: round_half_up(appliance.monthly_cost(rate), 2),
            tip: self.engine().appliance_tip(&appliance.name, daily_kwh),
        }
    }

    /// Every appliance, in source order
    pub fn appliances(&self) -> Vec<ApplianceView> {
        let rate = self.average_rate();
        self.appliances
            .iter()
            .map(|a| self.appliance_view(a, rate))
            .collect()
    }

    /// Biggest active consumers; `limit` defaults to the configured list size
    pub fn top_consumers(&self, limit: Option<usize>) -> Vec<ApplianceView> {
        let rate = self.average_rate();
        let limit = limit.unwrap_or(self.config.analysis.top_consumers_limit);
        analytics::top_consumers(&self.appliances, limit)
            .into_iter()
            .map(|a| self.appliance_view(a, rate))
            .collect()
    }

    pub fn stats(&self) -> CollectionStats {
        let rate = self.average_rate();
        let totals = analytics::totals(&self.appliances, rate);
        CollectionStats {
            appliance_count: self.appliances.len(),
            active_appliance_count: self.household.active_appliance_count(),
            daily_kwh: round_half_up(totals.daily_kwh, 2),
            monthly_kwh: round_half_up(totals.monthly_kwh, 2),
            daily_cost: round_half_up(totals.daily_cost, 2),
            monthly_cost: round_half_up(totals.monthly_cost, 2),
            average_rate: round_half_up(rate, 2),
        }
    }

    /// Per-group consumption, ordered by group name
    pub fn group_stats(&self) -> Vec<GroupView> {
        let rate = self.average_rate();
        analytics::group_aggregates(&self.household.groups, &self.appliances)
            .into_iter()
            .map(|mut group| {
                let daily_cost = round_half_up(group.daily_kwh * rate, 2);
                let monthly_cost = round_half_up(group.monthly_kwh * rate, 2);
                group.daily_kwh = round_half_up(group.daily_kwh, 2);
                group.monthly_kwh = round_half_up(group.monthly_kwh, 2);
                GroupView {
                    group,
                    daily_cost,
                    monthly_cost,
                }
            })
            .collect()
    }

    /// Tariff applying at the clock's hour, with the localized default as fallback
    pub fn current_tariff(&self) -> Result<TariffView> {
        let current = self.resolver().current_rate(self.clock.date, self.clock.hour)?;
        Ok(TariffView {
            name: current
                .name
                .unwrap_or_else(|| self.i18n.get("tariff.default_name")),
            kind: current.kind,
            kind_label: current.kind.map(|kind| self.i18n.get(kind.label_key())),
            rate_per_kwh: current.rate_per_kwh,
            start_hour: current.start_hour,
            end_hour: current.end_hour,
            is_default: current.is_default,
        })
    }

    /// Daily history; `days` defaults to the configured window
    pub fn daily(&self, days: Option<u32>) -> Vec<DailyPoint> {
        let days = days.unwrap_or(self.config.analysis.daily_history_days);
        history::daily_series(self.records(), self.clock.date, days)
            .into_iter()
            .map(|p| DailyPoint {
                date: p.date,
                kwh: round_half_up(p.kwh, 2),
                cost: round_half_up(p.cost, 2),
            })
            .collect()
    }

    /// Monthly history with localized month names, newest first
    pub fn monthly(&self, months: Option<u32>) -> Vec<MonthlyView> {
        let months = months.unwrap_or(self.config.analysis.monthly_history_months);
        history::monthly_stats(self.records(), self.clock.date, months)
            .into_iter()
            .map(|mut stat| {
                stat.total_kwh = round_half_up(stat.total_kwh, 2);
                stat.total_cost = round_half_up(stat.total_cost, 2);
                stat.avg_daily_kwh = round_half_up(stat.avg_daily_kwh, 2);
                MonthlyView {
                    month_name: self.i18n.month_name(stat.month),
                    stat,
                }
            })
            .collect()
    }

    /// Month-end and yearly projection from the current appliance load
    pub fn forecast(&self) -> Result<ForecastView> {
        let rate = self.average_rate();
        let daily_kwh = analytics::total_daily_kwh(&self.appliances);
        let month_to_date = history::current_month(self.records(), &self.clock);

        Ok(ForecastView {
            month: forecast::project_monthly(
                month_to_date.kwh,
                daily_kwh,
                self.clock.day_of_month(),
                self.clock.days_in_month(),
                rate,
            )?,
            year: forecast::project_yearly(daily_kwh, rate)?,
        })
    }

    pub fn recommendations(&self) -> Vec<Recommendation> {
        self.engine()
            .recommend(&self.appliances, &self.household.tariffs, self.clock.date)
    }

    pub fn appliance_tip(&self, name: &str, daily_kwh: f64) -> Option<ApplianceTip> {
        self.engine().appliance_tip(name, daily_kwh)
    }

    /// CSV of the recorded history between two dates
    pub fn export(&self, from: NaiveDate, to: NaiveDate) -> Result<String> {
        export_csv_string(self.records(), from, to, self.i18n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ApplianceGroup, TariffWindow};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn household() -> Household {
        let mut history = Vec::new();
        for day in 1..=10 {
            history.push(HistoricalRecord::new(date(2024, 4, day), 10.0, 45.0));
        }
        for day in 1..=20 {
            history.push(HistoricalRecord::new(date(2024, 3, day), 4.0, 18.0));
        }

        Household {
            name: "Test".to_string(),
            appliances: vec![
                ApplianceSnapshot::new(1, "Fridge", 150.0, 24.0, 1).in_group(1), // 3.6
                ApplianceSnapshot::new(2, "Heater", 2000.0, 4.0, 1).in_group(2), // 8.0
                ApplianceSnapshot::new(3, "Lamp", 10.0, 5.0, 4).in_group(1),     // 0.2
                ApplianceSnapshot::new(4, "Old TV", 100.0, 2.0, 1).inactive(),
            ],
            tariffs: vec![
                TariffWindow::new(1, "Night", TariffKind::Night, 2.5, 23, 7, date(2024, 1, 1)),
                TariffWindow::new(2, "Day", TariffKind::Peak, 6.5, 7, 23, date(2024, 1, 1)),
            ],
            groups: vec![ApplianceGroup::new(1, "Kitchen"), ApplianceGroup::new(2, "Bedroom")],
            history,
        }
    }

    fn clock() -> Clock {
        Clock::new(date(2024, 4, 10), 14).unwrap()
    }

    #[test]
    fn test_dashboard() {
        let household = household();
        let config = Config::default();
        let i18n = I18n::new("en");
        let reporter = Reporter::new(&household, &config, &i18n, clock()).unwrap();
        let dashboard = reporter.dashboard().unwrap();

        assert!((dashboard.daily_kwh - 11.8).abs() < 1e-9);
        assert!((dashboard.monthly_kwh - 354.0).abs() < 1e-9);
        // Average of 2.5 and 6.5
        assert!((dashboard.daily_cost - 53.1).abs() < 1e-9);
        assert!((dashboard.current_month_kwh - 100.0).abs() < 1e-9);
        // 100 kWh in April against 80 in March
        assert!((dashboard.comparison_percent - 25.0).abs() < 1e-9);
        assert_eq!(dashboard.appliance_count, 4);
        assert_eq!(dashboard.group_count, 2);
        assert_eq!(dashboard.current_tariff, "Day");
        assert_eq!(dashboard.current_rate, 6.5);
    }

    #[test]
    fn test_current_tariff_default() {
        let mut household = household();
        household.tariffs.clear();
        let config = Config::default();
        let i18n = I18n::new("ru");
        let reporter = Reporter::new(&household, &config, &i18n, clock()).unwrap();

        let tariff = reporter.current_tariff().unwrap();
        assert!(tariff.is_default);
        assert_eq!(tariff.name, "Стандартный");
        assert_eq!(tariff.rate_per_kwh, 5.5);
        assert_eq!(reporter.average_rate(), 5.5);
    }

    #[test]
    fn test_current_tariff_localized_kind() {
        let household = household();
        let config = Config::default();
        let i18n = I18n::new("en");
        let night = Clock::new(date(2024, 4, 10), 2).unwrap();
        let reporter = Reporter::new(&household, &config, &i18n, night).unwrap();

        let tariff = reporter.current_tariff().unwrap();
        assert_eq!(tariff.name, "Night");
        assert_eq!(tariff.kind_label.as_deref(), Some("Night"));
        assert_eq!(tariff.start_hour, Some(23));
    }

    #[test]
    fn test_appliance_views() {
        let household = household();
        let config = Config::default();
        let i18n = I18n::new("en");
        let reporter = Reporter::new(&household, &config, &i18n, clock()).unwrap();
        let views = reporter.appliances();

        assert_eq!(views.len(), 4);
        assert_eq!(views[0].appliance.group_name.as_deref(), Some("Kitchen"));
        assert!((views[0].daily_kwh - 3.6).abs() < 1e-9);
        assert!((views[0].monthly_cost - 486.0).abs() < 1e-9);
        assert!(views[0].tip.is_some());
        // Lamp: 0.2 kWh, recognised by name
        assert!(views[2].tip.is_some());
    }

    #[test]
    fn test_top_consumers_view() {
        let household = household();
        let config = Config::default();
        let i18n = I18n::new("en");
        let reporter = Reporter::new(&household, &config, &i18n, clock()).unwrap();

        let names: Vec<String> = reporter
            .top_consumers(Some(2))
            .into_iter()
            .map(|v| v.appliance.name)
            .collect();
        assert_eq!(names, vec!["Heater", "Fridge"]);
        assert_eq!(reporter.top_consumers(None).len(), 3);
    }

    #[test]
    fn test_group_stats() {
        let household = household();
        let config = Config::default();
        let i18n = I18n::new("en");
        let reporter = Reporter::new(&household, &config, &i18n, clock()).unwrap();
        let groups = reporter.group_stats();

        assert_eq!(groups[0].group.name, "Bedroom");
        assert_eq!(groups[1].group.appliance_count, 2);
        assert!((groups[1].group.daily_kwh - 3.8).abs() < 1e-9);
        assert!((groups[1].daily_cost - 17.1).abs() < 1e-9);
    }

    #[test]
    fn test_history_views() {
        let household = household();
        let config = Config::default();
        let i18n = I18n::new("en");
        let reporter = Reporter::new(&household, &config, &i18n, clock()).unwrap();

        let daily = reporter.daily(Some(5));
        assert_eq!(daily.len(), 6);
        assert_eq!(daily.last().map(|p| p.date), Some(date(2024, 4, 10)));

        let monthly = reporter.monthly(None);
        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly[0].month_name, "April");
        assert_eq!(monthly[1].stat.days_recorded, 20);
    }

    #[test]
    fn test_forecast_view() {
        let household = household();
        let config = Config::default();
        let i18n = I18n::new("en");
        let reporter = Reporter::new(&household, &config, &i18n, clock()).unwrap();
        let forecast = reporter.forecast().unwrap();

        // 100 kWh so far plus 11.8 kWh for each of the 20 remaining days
        assert_eq!(forecast.month.remaining_days, 20);
        assert!((forecast.month.projected_kwh - 336.0).abs() < 1e-9);
        assert!((forecast.month.projected_cost - 1512.0).abs() < 1e-9);
        assert!((forecast.year.kwh - 4307.0).abs() < 1e-9);
    }

    #[test]
    fn test_recommendations_view() {
        let household = household();
        let config = Config::default();
        let i18n = I18n::new("en");
        let reporter = Reporter::new(&household, &config, &i18n, clock()).unwrap();
        let recs = reporter.recommendations();

        assert_eq!(recs[0].appliance.as_deref(), Some("Heater"));
        assert!(recs
            .iter()
            .any(|r| r.kind == crate::core::RecommendationKind::TariffOptimization));
    }

    #[test]
    fn test_json_output_flattens_views() {
        let household = household();
        let config = Config::default();
        let i18n = I18n::new("en");
        let reporter = Reporter::new(&household, &config, &i18n, clock()).unwrap();

        let json = serde_json::to_value(&reporter.monthly(None)[0]).unwrap();
        assert_eq!(json["month"], 4);
        assert_eq!(json["month_name"], "April");
    }
}

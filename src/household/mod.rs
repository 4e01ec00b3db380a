//! Household data sources
//!
//! Computation never reads storage directly: a [`HouseholdSource`] supplies
//! appliances, tariffs, groups and history, and [`Household`] is the
//! in-memory snapshot every report works on.

use crate::core::{
    ApplianceGroup, ApplianceSnapshot, Error, HistoricalRecord, Result, TariffWindow,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Trait for household data providers
pub trait HouseholdSource {
    /// All appliances, active or not
    fn appliances(&self) -> Result<Vec<ApplianceSnapshot>>;

    /// All tariff windows, in the order they should be matched
    fn tariffs(&self) -> Result<Vec<TariffWindow>>;

    fn groups(&self) -> Result<Vec<ApplianceGroup>>;

    /// Recorded daily measurements
    fn history(&self) -> Result<Vec<HistoricalRecord>>;

    /// Name of this source
    fn name(&self) -> &str;
}

fn default_name() -> String { "household".to_string() }

/// In-memory household snapshot, loadable from JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Household {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub appliances: Vec<ApplianceSnapshot>,
    #[serde(default)]
    pub tariffs: Vec<TariffWindow>,
    #[serde(default)]
    pub groups: Vec<ApplianceGroup>,
    #[serde(default)]
    pub history: Vec<HistoricalRecord>,
}

impl Household {
    /// Take a snapshot of any source
    pub fn collect<S: HouseholdSource + ?Sized>(source: &S) -> Result<Self> {
        let household = Self {
            name: source.name().to_string(),
            appliances: source.appliances()?,
            tariffs: source.tariffs()?,
            groups: source.groups()?,
            history: source.history()?,
        };
        log::debug!(
            "Loaded '{}': {} appliances, {} tariffs, {} groups, {} records",
            household.name,
            household.appliances.len(),
            household.tariffs.len(),
            household.groups.len(),
            household.history.len()
        );
        Ok(household)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| Error::Serialization(format!("Failed to parse household: {}", e)))
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Check every appliance and tariff, returning all problems found
    pub fn validate(&self) -> Result<()> {
        let mut problems: Vec<String> = Vec::new();

        let checks = self
            .appliances
            .iter()
            .map(ApplianceSnapshot::validate)
            .chain(self.tariffs.iter().map(TariffWindow::validate))
            .chain(self.history.iter().map(HistoricalRecord::validate));
        for check in checks {
            match check {
                Ok(()) => {}
                Err(Error::InvalidInput(msg)) => problems.push(msg),
                Err(other) => problems.push(other.to_string()),
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::invalid(problems.join("; ")))
        }
    }

    /// Drop appliances, tariffs and history records that fail validation
    pub fn without_invalid(mut self) -> Self {
        self.appliances.retain(|a| match a.validate() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Skipping appliance: {}", e);
                false
            }
        });
        self.tariffs.retain(|t| match t.validate() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Skipping tariff: {}", e);
                false
            }
        });
        self.history.retain(|r| match r.validate() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Skipping history record: {}", e);
                false
            }
        });
        self
    }

    /// Number of appliances with the active flag set
    pub fn active_appliance_count(&self) -> usize {
        self.appliances.iter().filter(|a| a.is_active).count()
    }
}

impl HouseholdSource for Household {
    /// Appliances with `group_name` filled in from the group list when missing
    fn appliances(&self) -> Result<Vec<ApplianceSnapshot>> {
        let names: HashMap<i64, &str> = self
            .groups
            .iter()
            .map(|g| (g.id, g.name.as_str()))
            .collect();

        Ok(self
            .appliances
            .iter()
            .cloned()
            .map(|mut a| {
                if a.group_name.is_none() {
                    a.group_name = a
                        .group_id
                        .and_then(|id| names.get(&id))
                        .map(|name| name.to_string());
                }
                a
            })
            .collect())
    }

    fn tariffs(&self) -> Result<Vec<TariffWindow>> {
        Ok(self.tariffs.clone())
    }

    fn groups(&self) -> Result<Vec<ApplianceGroup>> {
        Ok(self.groups.clone())
    }

    fn history(&self) -> Result<Vec<HistoricalRecord>> {
        Ok(self.history.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Clock, Config, TariffKind};
    use crate::i18n::I18n;
    use crate::report::Reporter;
    use chrono::NaiveDate;

    const SAMPLE: &str = r#"{
        "name": "Flat 12",
        "groups": [{"id": 1, "name": "Kitchen"}],
        "appliances": [
            {"id": 1, "group_id": 1, "name": "Fridge", "power_watts": 150, "daily_usage_hours": 24},
            {"id": 2, "group_id": 9, "name": "Lamp", "power_watts": 10, "daily_usage_hours": 5, "quantity": 4},
            {"id": 3, "name": "Old TV", "power_watts": 200, "daily_usage_hours": 5, "is_active": false}
        ],
        "tariffs": [
            {"id": 1, "name": "Night", "kind": "night", "rate_per_kwh": 2.5,
             "start_hour": 23, "end_hour": 7, "valid_from": "2024-01-01"}
        ],
        "history": [
            {"date": "2024-04-01", "consumption_kwh": 12.5, "cost": 68.75, "appliance_name": "Fridge"}
        ]
    }"#;

    #[test]
    fn test_load_from_json() {
        let household = Household::from_json_str(SAMPLE).unwrap();

        assert_eq!(household.name, "Flat 12");
        assert_eq!(household.appliances.len(), 3);
        assert_eq!(household.active_appliance_count(), 2);
        assert_eq!(household.tariffs[0].kind, TariffKind::Night);
        assert_eq!(household.history[0].date, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        assert_eq!(household.groups[0].color, "#3498db");
        assert!(household.validate().is_ok());
    }

    #[test]
    fn test_empty_document_is_an_empty_household() {
        let household = Household::from_json_str("{}").unwrap();
        assert_eq!(household.name, "household");
        assert!(household.appliances.is_empty());
        assert!(household.validate().is_ok());
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = Household::from_json_str("{\"appliances\": 3}").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_source_joins_group_names() {
        let household = Household::from_json_str(SAMPLE).unwrap();
        let appliances = household.appliances().unwrap();

        assert_eq!(appliances[0].group_name.as_deref(), Some("Kitchen"));
        // Group 9 does not exist
        assert_eq!(appliances[1].group_name, None);
    }

    #[test]
    fn test_collect_from_source() {
        let household = Household::from_json_str(SAMPLE).unwrap();
        let copy = Household::collect(&household).unwrap();
        assert_eq!(copy.name, "Flat 12");
        assert_eq!(copy.appliances[0].group_name.as_deref(), Some("Kitchen"));
        assert_eq!(copy.history, household.history);
    }

    #[test]
    fn test_validate_reports_every_problem() {
        let mut household = Household::from_json_str(SAMPLE).unwrap();
        household.appliances[0].power_watts = 0.0;
        household.tariffs[0].end_hour = 30;

        match household.validate() {
            Err(Error::InvalidInput(msg)) => {
                assert!(msg.contains("Fridge"));
                assert!(msg.contains("Night"));
            }
            other => panic!("expected invalid input, got {:?}", other),
        }
    }

    #[test]
    fn test_without_invalid_drops_bad_records() {
        let mut household = Household::from_json_str(SAMPLE).unwrap();
        household.appliances[1].daily_usage_hours = 30.0;

        let cleaned = household.without_invalid();
        assert_eq!(cleaned.appliances.len(), 2);
        assert_eq!(cleaned.tariffs.len(), 1);
    }

    #[test]
    fn test_negative_history_record_is_dropped() {
        let mut household = Household::from_json_str(SAMPLE).unwrap();
        household.history.push(HistoricalRecord::new(
            NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            -3.0,
            0.0,
        ));
        household.history.push(HistoricalRecord::new(
            NaiveDate::from_ymd_opt(2024, 4, 3).unwrap(),
            f64::NAN,
            0.0,
        ));
        assert!(household.validate().is_err());

        let cleaned = household.without_invalid();
        assert_eq!(cleaned.history.len(), 1);
        assert!(cleaned.validate().is_ok());

        let config = Config::default();
        let i18n = I18n::new("en");
        let clock = Clock::new(NaiveDate::from_ymd_opt(2024, 4, 10).unwrap(), 12).unwrap();
        let reporter = Reporter::new(&cleaned, &config, &i18n, clock).unwrap();
        let forecast = reporter.forecast().unwrap();
        // 12.5 kWh so far plus 3.8 kWh for each of the 20 remaining days
        assert_eq!(forecast.month.remaining_days, 20);
        assert!((forecast.month.projected_kwh - 88.5).abs() < 1e-9);
    }
}

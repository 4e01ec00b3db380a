//! Consumption aggregation over appliance collections
//!
//! Inactive appliances are excluded from every aggregate. Historical record
//! aggregation lives in [`history`].

pub mod history;

use crate::consumption::DAYS_PER_MONTH;
use crate::core::{ApplianceGroup, ApplianceSnapshot, GroupAggregate};
use serde::{Deserialize, Serialize};

/// Totals for a set of appliances at a given rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionTotals {
    pub daily_kwh: f64,
    pub monthly_kwh: f64,
    pub daily_cost: f64,
    pub monthly_cost: f64,
}

/// Sum of daily kWh over active appliances
pub fn total_daily_kwh(appliances: &[ApplianceSnapshot]) -> f64 {
    appliances
        .iter()
        .filter(|a| a.is_active)
        .map(ApplianceSnapshot::daily_kwh)
        .sum()
}

/// Daily and monthly energy and cost of the active appliances
pub fn totals(appliances: &[ApplianceSnapshot], rate_per_kwh: f64) -> ConsumptionTotals {
    let daily_kwh = total_daily_kwh(appliances);
    let monthly_kwh = daily_kwh * DAYS_PER_MONTH;
    ConsumptionTotals {
        daily_kwh,
        monthly_kwh,
        daily_cost: daily_kwh * rate_per_kwh,
        monthly_cost: monthly_kwh * rate_per_kwh,
    }
}

/// Active appliances sorted by daily kWh, biggest first, at most `n` of them
///
/// Equal consumers keep their input order.
pub fn top_consumers(appliances: &[ApplianceSnapshot], n: usize) -> Vec<&ApplianceSnapshot> {
    let mut active: Vec<&ApplianceSnapshot> = appliances.iter().filter(|a| a.is_active).collect();
    active.sort_by(|a, b| b.daily_kwh().total_cmp(&a.daily_kwh()));
    active.truncate(n);
    active
}

/// Appliance count and consumption of one group's active appliances
pub fn group_aggregate(group: &ApplianceGroup, appliances: &[ApplianceSnapshot]) -> GroupAggregate {
    let members = appliances
        .iter()
        .filter(|a| a.is_active && a.group_id == Some(group.id));

    let (count, daily_kwh) = members.fold((0usize, 0.0), |(count, kwh), a| (count + 1, kwh + a.daily_kwh()));

    GroupAggregate {
        group_id: group.id,
        name: group.name.clone(),
        color: group.color.clone(),
        appliance_count: count,
        daily_kwh,
        monthly_kwh: daily_kwh * DAYS_PER_MONTH,
    }
}

/// Aggregates for every group, ordered by group name
pub fn group_aggregates(groups: &[ApplianceGroup], appliances: &[ApplianceSnapshot]) -> Vec<GroupAggregate> {
    let mut result: Vec<GroupAggregate> = groups
        .iter()
        .map(|g| group_aggregate(g, appliances))
        .collect();
    result.sort_by(|a, b| a.name.cmp(&b.name));
    result
}

/// Percent change of `current` against `previous`
///
/// A zero (or negative) previous month reports 0% rather than an infinite change.
pub fn comparison_with_previous_month(current: f64, previous: f64) -> f64 {
    if previous > 0.0 {
        (current - previous) / previous * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn household() -> Vec<ApplianceSnapshot> {
        vec![
            ApplianceSnapshot::new(1, "Fridge", 150.0, 24.0, 1).in_group(1),   // 3.6
            ApplianceSnapshot::new(2, "Lamp", 10.0, 5.0, 4).in_group(2),       // 0.2
            ApplianceSnapshot::new(3, "Heater", 2000.0, 4.0, 1).in_group(1),   // 8.0
            ApplianceSnapshot::new(4, "Old TV", 200.0, 5.0, 1).inactive(),     // 1.0, inactive
            ApplianceSnapshot::new(5, "Router", 10.0, 20.0, 1),                // 0.2
        ]
    }

    #[test]
    fn test_total_excludes_inactive() {
        let total = total_daily_kwh(&household());
        assert!((total - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_totals_at_rate() {
        let t = totals(&household(), 5.0);
        assert!((t.daily_kwh - 12.0).abs() < 1e-9);
        assert!((t.monthly_kwh - 360.0).abs() < 1e-9);
        assert!((t.daily_cost - 60.0).abs() < 1e-9);
        assert!((t.monthly_cost - 1800.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_collection_totals_zero() {
        assert_eq!(total_daily_kwh(&[]), 0.0);
        assert!(top_consumers(&[], 5).is_empty());
    }

    #[test]
    fn test_top_consumers_sorted_and_truncated() {
        let appliances = household();
        let top = top_consumers(&appliances, 2);
        let ids: Vec<i64> = top.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_top_consumers_ties_keep_input_order() {
        let appliances = household();
        let top = top_consumers(&appliances, 10);
        let ids: Vec<i64> = top.iter().map(|a| a.id).collect();
        // Lamp and Router both use 0.2 kWh; the lamp comes first in the input
        assert_eq!(ids, vec![3, 1, 2, 5]);
    }

    #[test]
    fn test_group_aggregate() {
        let appliances = household();
        let kitchen = ApplianceGroup::new(1, "Kitchen");
        let agg = group_aggregate(&kitchen, &appliances);

        assert_eq!(agg.appliance_count, 2);
        assert!((agg.daily_kwh - 11.6).abs() < 1e-9);
        assert!((agg.monthly_kwh - 348.0).abs() < 1e-9);
    }

    #[test]
    fn test_group_aggregates_sorted_by_name() {
        let appliances = household();
        let groups = vec![
            ApplianceGroup::new(1, "Kitchen"),
            ApplianceGroup::new(2, "Bedroom"),
            ApplianceGroup::new(3, "Garage"),
        ];
        let aggs = group_aggregates(&groups, &appliances);
        let names: Vec<&str> = aggs.iter().map(|g| g.name.as_str()).collect();

        assert_eq!(names, vec!["Bedroom", "Garage", "Kitchen"]);
        assert_eq!(aggs[1].appliance_count, 0);
        assert_eq!(aggs[1].daily_kwh, 0.0);
    }

    #[test]
    fn test_comparison_with_previous_month() {
        assert_eq!(comparison_with_previous_month(0.0, 0.0), 0.0);
        assert_eq!(comparison_with_previous_month(150.0, 100.0), 50.0);
        assert_eq!(comparison_with_previous_month(50.0, 100.0), -50.0);
        assert_eq!(comparison_with_previous_month(80.0, 0.0), 0.0);
    }
}

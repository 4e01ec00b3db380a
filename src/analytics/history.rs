//! Aggregation of recorded daily measurements
//!
//! Several records may share a date (one per appliance plus whole-household
//! readings); they are summed per date before any further grouping.

use crate::core::{Clock, HistoricalRecord};
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Consumption of a single day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub kwh: f64,
    pub cost: f64,
}

/// Totals of one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStat {
    pub year: i32,
    pub month: u32,
    pub total_kwh: f64,
    pub total_cost: f64,
    /// Mean kWh per day that has at least one record
    pub avg_daily_kwh: f64,
    pub days_recorded: usize,
}

/// Energy and cost summed over a period
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodTotals {
    pub kwh: f64,
    pub cost: f64,
}

/// Per-date sums for dates in `[today - days, today]`, oldest first
pub fn daily_series(records: &[HistoricalRecord], today: NaiveDate, days: u32) -> Vec<DailyPoint> {
    let from = today
        .checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN);

    let mut by_date: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
    for record in records.iter().filter(|r| r.date >= from && r.date <= today) {
        let entry = by_date.entry(record.date).or_insert((0.0, 0.0));
        entry.0 += record.consumption_kwh;
        entry.1 += record.cost;
    }

    by_date
        .into_iter()
        .map(|(date, (kwh, cost))| DailyPoint { date, kwh, cost })
        .collect()
}

/// Per-month totals for records dated from `today - months` up to `today`, newest first
pub fn monthly_stats(records: &[HistoricalRecord], today: NaiveDate, months: u32) -> Vec<MonthlyStat> {
    let from = today
        .checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN);

    let mut by_month: BTreeMap<(i32, u32), (f64, f64, BTreeSet<NaiveDate>)> = BTreeMap::new();
    for record in records.iter().filter(|r| r.date >= from && r.date <= today) {
        let entry = by_month
            .entry((record.date.year(), record.date.month()))
            .or_insert_with(|| (0.0, 0.0, BTreeSet::new()));
        entry.0 += record.consumption_kwh;
        entry.1 += record.cost;
        entry.2.insert(record.date);
    }

    by_month
        .into_iter()
        .rev()
        .map(|((year, month), (total_kwh, total_cost, days))| {
            let days_recorded = days.len();
            let avg_daily_kwh = if days_recorded > 0 {
                total_kwh / days_recorded as f64
            } else {
                0.0
            };
            MonthlyStat {
                year,
                month,
                total_kwh,
                total_cost,
                avg_daily_kwh,
                days_recorded,
            }
        })
        .collect()
}

/// Sum of all records dated within the given calendar month
pub fn month_totals(records: &[HistoricalRecord], year: i32, month: u32) -> PeriodTotals {
    sum_records(
        records
            .iter()
            .filter(|r| r.date.year() == year && r.date.month() == month),
    )
}

/// Month-to-date totals; records dated after the clock are ignored
pub fn current_month(records: &[HistoricalRecord], clock: &Clock) -> PeriodTotals {
    sum_records(records.iter().filter(|r| {
        r.date <= clock.date && r.date.year() == clock.year() && r.date.month() == clock.month()
    }))
}

fn sum_records<'a>(records: impl Iterator<Item = &'a HistoricalRecord>) -> PeriodTotals {
    records.fold(PeriodTotals::default(), |acc, r| PeriodTotals {
        kwh: acc.kwh + r.consumption_kwh,
        cost: acc.cost + r.cost,
    })
}

pub fn previous_month(records: &[HistoricalRecord], clock: &Clock) -> PeriodTotals {
    let (year, month) = clock.previous_month();
    month_totals(records, year, month)
}

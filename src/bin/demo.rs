//! Energy Advisor - Demo report
//!
//! Builds a sample household with two months of history ending today and
//! prints a text report: summary, top consumers, groups, forecast, monthly
//! history and recommendations.

use anyhow::Result;
use chrono::{Days, NaiveDate};

use energy_advisor_lib::core::{
    ApplianceGroup, ApplianceSnapshot, Clock, Config, HistoricalRecord, TariffKind, TariffWindow,
};
use energy_advisor_lib::household::Household;
use energy_advisor_lib::i18n::I18n;
use energy_advisor_lib::report::Reporter;

fn sample_household(today: NaiveDate) -> Household {
    let since = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(today);

    let appliances = vec![
        ApplianceSnapshot::new(1, "Refrigerator", 150.0, 24.0, 1).in_group(1),
        ApplianceSnapshot::new(2, "Electric kettle", 2000.0, 0.5, 1).in_group(1),
        ApplianceSnapshot::new(3, "Washing machine", 2200.0, 1.0, 1).in_group(2),
        ApplianceSnapshot::new(4, "Oil heater", 1500.0, 5.0, 1).in_group(3),
        ApplianceSnapshot::new(5, "Ceiling lamp", 60.0, 5.0, 3).in_group(3),
        ApplianceSnapshot::new(6, "Television", 120.0, 4.0, 1).in_group(3),
        ApplianceSnapshot::new(7, "Desktop PC", 300.0, 6.0, 1),
        ApplianceSnapshot::new(8, "Aquarium pump", 120.0, 24.0, 1),
        ApplianceSnapshot::new(9, "Old freezer", 200.0, 24.0, 1).inactive(),
    ];

    let tariffs = vec![
        TariffWindow::new(1, "Night", TariffKind::Night, 2.8, 23, 7, since),
        TariffWindow::new(2, "Day", TariffKind::Peak, 6.4, 7, 23, since),
    ];

    let groups = vec![
        ApplianceGroup::new(1, "Kitchen"),
        ApplianceGroup::new(2, "Bathroom"),
        ApplianceGroup::new(3, "Living room"),
    ];

    // Whole-household readings for the last 60 days, slightly uneven
    let history = (0..60u64)
        .filter_map(|offset| {
            let date = today.checked_sub_days(Days::new(offset))?;
            let kwh = 14.0 + (offset % 7) as f64 * 0.8;
            Some(HistoricalRecord::new(date, kwh, kwh * 4.6))
        })
        .collect();

    Household {
        name: "Sample flat".to_string(),
        appliances,
        tariffs,
        groups,
        history,
    }
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::default();
    let i18n = I18n::new(&config.general.language);
    let clock = Clock::now();
    let household = sample_household(clock.date);
    let reporter = Reporter::new(&household, &config, &i18n, clock)?;

    let currency = &config.pricing.currency_symbol;
    let kwh = i18n.get("unit.kilowatt_hours");

    println!("==============================================");
    println!("   {} - {}", i18n.get("report.title"), household.name);
    println!("==============================================\n");
    println!("  {}: {} {:02}:00\n", i18n.get("report.date"), clock.date, clock.hour);

    // 1. Summary
    let dashboard = reporter.dashboard()?;
    println!("=== {} ===\n", i18n.get("report.summary"));
    println!("  {:<30} {}", i18n.get("report.appliances"), dashboard.appliance_count);
    println!("  {:<30} {}", i18n.get("report.groups"), dashboard.group_count);
    println!("  {:<30} {:.2} {}", i18n.get("report.daily_consumption"), dashboard.daily_kwh, kwh);
    println!("  {:<30} {:.2} {}", i18n.get("report.monthly_consumption"), dashboard.monthly_kwh, kwh);
    println!("  {:<30} {:.2} {}", i18n.get("report.daily_cost"), dashboard.daily_cost, currency);
    println!("  {:<30} {:.2} {}", i18n.get("report.monthly_cost"), dashboard.monthly_cost, currency);
    println!(
        "  {:<30} {:.2} {}{}",
        i18n.get("report.average_rate"),
        reporter.average_rate(),
        currency,
        i18n.get("unit.per_kwh")
    );
    println!(
        "  {:<30} {} ({:.2} {}{})",
        i18n.get("report.current_tariff"),
        dashboard.current_tariff,
        dashboard.current_rate,
        currency,
        i18n.get("unit.per_kwh")
    );
    println!(
        "  {:<30} {:.2} {} / {:.2} {}",
        i18n.get("report.current_month"),
        dashboard.current_month_kwh,
        kwh,
        dashboard.current_month_cost,
        currency
    );
    println!("  {:<30} {:+.1}%\n", i18n.get("report.comparison"), dashboard.comparison_percent);

    // 2. Top consumers
    println!("=== {} ===\n", i18n.get("report.top_consumers"));
    for view in reporter.top_consumers(None) {
        println!(
            "  {:<24} {:>8.3} {}{} {:>10.2} {}{}",
            view.appliance.name,
            view.daily_kwh,
            kwh,
            i18n.get("unit.per_day"),
            view.monthly_cost,
            currency,
            i18n.get("unit.per_month")
        );
        if let Some(tip) = view.tip {
            println!("      {}", tip.message);
        }
    }
    println!();

    // 3. Groups
    println!("=== {} ===\n", i18n.get("report.groups"));
    for view in reporter.group_stats() {
        println!(
            "  {:<24} {:>3} {:>8.2} {}{} {:>10.2} {}{}",
            view.group.name,
            view.group.appliance_count,
            view.group.daily_kwh,
            kwh,
            i18n.get("unit.per_day"),
            view.monthly_cost,
            currency,
            i18n.get("unit.per_month")
        );
    }
    println!();

    // 4. Forecast
    let forecast = reporter.forecast()?;
    println!("=== {} ===\n", i18n.get("report.forecast"));
    println!(
        "  {:<30} {:.2} {} / {:.2} {}",
        i18n.get("report.projected_month"),
        forecast.month.projected_kwh,
        kwh,
        forecast.month.projected_cost,
        currency
    );
    println!("  {:<30} {}", i18n.get("report.remaining_days"), forecast.month.remaining_days);
    println!(
        "  {:<30} {:.2} {} / {:.2} {}\n",
        i18n.get("report.projected_year"),
        forecast.year.kwh,
        kwh,
        forecast.year.cost,
        currency
    );

    // 5. Monthly history
    println!("=== {} ===\n", i18n.get("report.monthly_history"));
    let monthly = reporter.monthly(Some(3));
    if monthly.is_empty() {
        println!("  {}", i18n.get("report.no_data"));
    }
    for view in monthly {
        println!(
            "  {:<10} {} {:>9.2} {} {:>10.2} {}",
            view.month_name,
            view.stat.year,
            view.stat.total_kwh,
            kwh,
            view.stat.total_cost,
            currency
        );
    }
    println!();

    // 6. Recommendations
    println!("=== {} ===\n", i18n.get("report.recommendations"));
    for rec in reporter.recommendations() {
        let priority = i18n.get(&format!("priority.{}", rec.priority.as_str()));
        match rec.title {
            Some(title) => println!("  [{}] {}", priority, title),
            None => println!("  [{}]", priority),
        }
        println!("      {}", rec.message);
    }

    println!("\n==============================================\n");
    Ok(())
}

//! Energy Advisor - Command line interface
//!
//! Loads a household snapshot (JSON) and prints the requested view as JSON.
//! `export` prints CSV instead.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use energy_advisor_lib::core::{Clock, Config};
use energy_advisor_lib::household::Household;
use energy_advisor_lib::i18n::I18n;
use energy_advisor_lib::report::Reporter;

#[derive(Parser)]
#[command(name = "energy-advisor")]
#[command(about = "Household electricity consumption and savings advisor", long_about = None)]
struct Cli {
    /// Household snapshot in JSON; an empty household is used when omitted
    #[arg(short = 'H', long, global = true)]
    household: Option<PathBuf>,

    /// Configuration file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Evaluate at this date (YYYY-MM-DD) instead of today
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// Evaluate at this hour (0-23) instead of the current one
    #[arg(long, global = true)]
    hour: Option<u32>,

    /// Output language: auto, en, ru
    #[arg(short, long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Main dashboard figures
    Dashboard,
    /// Every appliance with its consumption, cost and tip
    Appliances,
    /// Biggest active consumers
    Top {
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Totals over all appliances
    Stats,
    /// Per-group consumption
    Groups,
    /// Tariff applying now
    Tariff,
    /// Daily history
    Daily {
        #[arg(long)]
        days: Option<u32>,
    },
    /// Monthly history
    Monthly {
        #[arg(long)]
        months: Option<u32>,
    },
    /// Month-end and yearly projection
    Forecast,
    /// Energy-saving recommendations
    Recommendations,
    /// Tip for a single appliance name
    Tip {
        name: String,
        /// Daily consumption of the appliance, kWh
        #[arg(long, default_value_t = 0.0)]
        daily_kwh: f64,
    },
    /// History records between two dates as CSV
    Export {
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
    },
    /// Check the household snapshot for invalid records
    Validate,
}

fn load_config(path: Option<&PathBuf>) -> Config {
    let loaded = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    })
}

fn load_household(path: Option<&PathBuf>) -> Result<Household> {
    match path {
        Some(path) => Household::from_json_file(path)
            .with_context(|| format!("Failed to load household from {}", path.display())),
        None => {
            log::warn!("No household given, using an empty one");
            Ok(Household::default())
        }
    }
}

fn clock(cli: &Cli) -> Result<Clock> {
    let now = Clock::now();
    let clock = Clock::new(cli.date.unwrap_or(now.date), cli.hour.unwrap_or(now.hour))?;
    Ok(clock)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    // Keep stdout clean for JSON
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref());
    let language = cli.lang.clone().unwrap_or_else(|| config.general.language.clone());
    let i18n = I18n::new(&language);
    let clock = clock(&cli)?;

    let household = load_household(cli.household.as_ref())?;

    if let Command::Validate = cli.command {
        household.validate()?;
        println!(
            "{}: {} appliances, {} tariffs, {} groups, {} records OK",
            household.name,
            household.appliances.len(),
            household.tariffs.len(),
            household.groups.len(),
            household.history.len()
        );
        return Ok(());
    }

    let household = household.without_invalid();
    let reporter = Reporter::new(&household, &config, &i18n, clock)?;

    match cli.command {
        Command::Dashboard => print_json(&reporter.dashboard()?)?,
        Command::Appliances => print_json(&reporter.appliances())?,
        Command::Top { limit } => print_json(&reporter.top_consumers(limit))?,
        Command::Stats => print_json(&reporter.stats())?,
        Command::Groups => print_json(&reporter.group_stats())?,
        Command::Tariff => print_json(&reporter.current_tariff()?)?,
        Command::Daily { days } => print_json(&reporter.daily(days))?,
        Command::Monthly { months } => print_json(&reporter.monthly(months))?,
        Command::Forecast => print_json(&reporter.forecast()?)?,
        Command::Recommendations => print_json(&reporter.recommendations())?,
        Command::Tip { ref name, daily_kwh } => {
            if !daily_kwh.is_finite() || daily_kwh < 0.0 {
                bail!("daily consumption must be a non-negative number, got {}", daily_kwh);
            }
            print_json(&reporter.appliance_tip(name, daily_kwh))?
        }
        Command::Export { from, to } => print!("{}", reporter.export(from, to)?),
        Command::Validate => {}
    }

    Ok(())
}

//! Core module - Configuration, errors, and common types

mod config;
mod error;
mod types;

pub use config::{Config, GeneralConfig, PricingConfig, AnalysisConfig, AdvisorConfig, DEFAULT_RATE_PER_KWH};
pub use error::{Error, Result};
pub use types::{ApplianceSnapshot, TariffKind, TariffWindow, HistoricalRecord, ApplianceGroup, GroupAggregate, Priority, RecommendationKind, Recommendation, Clock, days_in_month};

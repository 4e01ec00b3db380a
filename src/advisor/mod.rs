//! Energy-saving recommendations
//!
//! Produces per-appliance warnings, tariff-shifting advice and the general
//! tip catalog. All texts come from the active [`I18n`] catalog.

pub mod catalog;

pub use catalog::{classify, ApplianceClass, CatalogTip, TipTier, GENERAL_TIPS};

use crate::analytics;
use crate::consumption::round_half_up;
use crate::core::{
    AdvisorConfig, ApplianceSnapshot, Priority, Recommendation, RecommendationKind, TariffKind,
    TariffWindow,
};
use crate::i18n::I18n;
use crate::pricing::TariffResolver;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Advice attached to a single appliance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceTip {
    pub tier: TipTier,
    /// Recognised class, `None` for threshold-based tips
    pub class: Option<ApplianceClass>,
    pub message: String,
}

/// Rule-based recommendation generator
pub struct RecommendationEngine<'a> {
    i18n: &'a I18n,
    config: AdvisorConfig,
}

impl<'a> RecommendationEngine<'a> {
    pub fn new(i18n: &'a I18n, config: AdvisorConfig) -> Self {
        Self { i18n, config }
    }

    /// Build the full recommendation list for a household
    ///
    /// The result is ordered high priority first, keeps evaluation order
    /// inside a priority and never contains two entries with the same kind,
    /// appliance and message. The general tips are always present.
    pub fn recommend(
        &self,
        appliances: &[ApplianceSnapshot],
        tariffs: &[TariffWindow],
        today: NaiveDate,
    ) -> Vec<Recommendation> {
        let mut recommendations = self.high_consumption(appliances);
        recommendations.extend(self.tariff_shift(tariffs, today));
        recommendations.extend(self.general_tips());

        let mut seen = HashSet::new();
        recommendations.retain(|r| seen.insert((r.kind, r.appliance.clone(), r.message.clone())));
        recommendations.sort_by_key(|r| r.priority);

        log::debug!("Generated {} recommendations", recommendations.len());
        recommendations
    }

    /// Flag the biggest consumers above the configured threshold
    fn high_consumption(&self, appliances: &[ApplianceSnapshot]) -> Vec<Recommendation> {
        analytics::top_consumers(appliances, self.config.top_consumers)
            .into_iter()
            .filter(|a| a.daily_kwh() > self.config.high_consumption_kwh)
            .map(|a| {
                let daily_kwh = a.daily_kwh();
                Recommendation {
                    kind: RecommendationKind::HighConsumption,
                    title: Some(self.i18n.get("recommendation.high_consumption.title")),
                    appliance: Some(a.name.clone()),
                    message: self.i18n.format(
                        "recommendation.high_consumption.message",
                        &[("name", a.name.as_str()), ("kwh", format!("{:.2}", daily_kwh).as_str())],
                    ),
                    priority: Priority::High,
                    value: Some(round_half_up(daily_kwh, 2)),
                }
            })
            .collect()
    }

    /// Suggest moving load to the night tariff when both night and peak apply today
    ///
    /// With several night or peak windows the last of each kind is used.
    fn tariff_shift(&self, tariffs: &[TariffWindow], today: NaiveDate) -> Option<Recommendation> {
        let valid = TariffResolver::new(tariffs).valid_on(today);
        let night = valid.iter().rev().find(|t| t.kind == TariffKind::Night)?;
        let peak = valid.iter().rev().find(|t| t.kind == TariffKind::Peak)?;

        let savings = peak.rate_per_kwh - night.rate_per_kwh;
        Some(Recommendation {
            kind: RecommendationKind::TariffOptimization,
            title: Some(self.i18n.get("recommendation.tariff.title")),
            appliance: None,
            message: self.i18n.format(
                "recommendation.tariff.message",
                &[
                    ("start", night.start_hour.to_string().as_str()),
                    ("end", night.end_hour.to_string().as_str()),
                    ("savings", format!("{:.2}", savings).as_str()),
                ],
            ),
            priority: Priority::Medium,
            value: Some(savings),
        })
    }

    fn general_tips(&self) -> Vec<Recommendation> {
        GENERAL_TIPS
            .iter()
            .map(|tip| Recommendation {
                kind: RecommendationKind::General,
                title: Some(self.i18n.get(&format!("tip.{}.title", tip.key))),
                appliance: None,
                message: self.i18n.get(&format!("tip.{}.message", tip.key)),
                priority: tip.priority,
                value: None,
            })
            .collect()
    }

    /// Tip for one appliance, from its name first and its consumption second
    pub fn appliance_tip(&self, name: &str, daily_kwh: f64) -> Option<ApplianceTip> {
        if let Some(class) = classify(name) {
            let tier = class.tier();
            return Some(ApplianceTip {
                tier,
                class: Some(class),
                message: self.with_prefix(tier, self.i18n.get(class.tip_key())),
            });
        }

        let (tier, key, threshold) = if daily_kwh > self.config.warning_kwh {
            (TipTier::Warning, "appliance_tip.very_high", self.config.warning_kwh)
        } else if daily_kwh > self.config.high_consumption_kwh {
            (TipTier::Advice, "appliance_tip.high", self.config.high_consumption_kwh)
        } else {
            return None;
        };

        let body = self.i18n.format(key, &[("kwh", format_threshold(threshold).as_str())]);
        Some(ApplianceTip {
            tier,
            class: None,
            message: self.with_prefix(tier, body),
        })
    }

    fn with_prefix(&self, tier: TipTier, body: String) -> String {
        let prefix = match tier {
            TipTier::Advice => self.i18n.get("appliance_tip.prefix.advice"),
            TipTier::Warning => self.i18n.get("appliance_tip.prefix.warning"),
        };
        format!("{}{}", prefix, body)
    }
}

/// Whole thresholds print without decimals ("5", not "5.00")
fn format_threshold(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

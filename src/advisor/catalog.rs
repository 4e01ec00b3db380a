//! Static advice tables
//!
//! Keyword rules are evaluated in declaration order and the first class whose
//! keyword matches the lowercased appliance name wins. Cyrillic keywords are
//! word stems matched anywhere in the name. Latin keywords match whole words
//! (a trailing plural `s` is allowed), so "iron" does not match "environment".
//! Keep more specific classes (water heater, microwave) ahead of the broader
//! ones they overlap with (heater, stove).

use crate::core::Priority;
use serde::{Deserialize, Serialize};

/// A best-practice tip shown to every household
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogTip {
    /// Translation key stem: `tip.<key>.title` and `tip.<key>.message`
    pub key: &'static str,
    pub priority: Priority,
}

pub const GENERAL_TIPS: &[CatalogTip] = &[
    CatalogTip { key: "lighting", priority: Priority::High },
    CatalogTip { key: "standby", priority: Priority::Medium },
    CatalogTip { key: "refrigerator", priority: Priority::Medium },
    CatalogTip { key: "washing", priority: Priority::Medium },
    CatalogTip { key: "kettle", priority: Priority::Low },
    CatalogTip { key: "air_conditioning", priority: Priority::High },
    CatalogTip { key: "daylight", priority: Priority::Low },
    CatalogTip { key: "heaters", priority: Priority::High },
    CatalogTip { key: "computer", priority: Priority::Low },
    CatalogTip { key: "iron", priority: Priority::Low },
    CatalogTip { key: "dishwasher", priority: Priority::Medium },
    CatalogTip { key: "television", priority: Priority::Low },
    CatalogTip { key: "efficiency_class", priority: Priority::Medium },
];

/// Severity of an appliance tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipTier {
    Advice,
    Warning,
}

/// Appliance category recognised from its name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplianceClass {
    Refrigerator,
    Kettle,
    WashingMachine,
    AirConditioner,
    Heater,
    Television,
    Computer,
    Laptop,
    Iron,
    Dishwasher,
    Microwave,
    WaterHeater,
    HairDryer,
    Lighting,
    Stove,
}

impl ApplianceClass {
    /// Translation key of the class tip
    pub fn tip_key(&self) -> &'static str {
        match self {
            ApplianceClass::Refrigerator => "appliance_tip.refrigerator",
            ApplianceClass::Kettle => "appliance_tip.kettle",
            ApplianceClass::WashingMachine => "appliance_tip.washing_machine",
            ApplianceClass::AirConditioner => "appliance_tip.air_conditioner",
            ApplianceClass::Heater => "appliance_tip.heater",
            ApplianceClass::Television => "appliance_tip.television",
            ApplianceClass::Computer => "appliance_tip.computer",
            ApplianceClass::Laptop => "appliance_tip.laptop",
            ApplianceClass::Iron => "appliance_tip.iron",
            ApplianceClass::Dishwasher => "appliance_tip.dishwasher",
            ApplianceClass::Microwave => "appliance_tip.microwave",
            ApplianceClass::WaterHeater => "appliance_tip.water_heater",
            ApplianceClass::HairDryer => "appliance_tip.hair_dryer",
            ApplianceClass::Lighting => "appliance_tip.lighting",
            ApplianceClass::Stove => "appliance_tip.stove",
        }
    }

    /// Heaters and water heaters get a warning, everything else advice
    pub fn tier(&self) -> TipTier {
        match self {
            ApplianceClass::Heater | ApplianceClass::WaterHeater => TipTier::Warning,
            _ => TipTier::Advice,
        }
    }
}

const KEYWORD_RULES: &[(ApplianceClass, &[&str])] = &[
    (ApplianceClass::Refrigerator, &["холодильник", "fridge", "refrigerator", "freezer"]),
    (ApplianceClass::Kettle, &["чайник", "kettle"]),
    (ApplianceClass::WashingMachine, &["стирал", "washing machine", "laundry"]),
    (ApplianceClass::AirConditioner, &["кондиционер", "air conditioner", "air conditioning", "aircon"]),
    (
        ApplianceClass::Heater,
        &["обогреватель", "конвектор", "радиатор", "space heater", "convector", "radiator", "oil heater"],
    ),
    (ApplianceClass::Television, &["телевизор", "тв", "television", "tv"]),
    (ApplianceClass::Computer, &["компьютер", "пк", "computer", "desktop", "pc"]),
    (ApplianceClass::Laptop, &["ноутбук", "laptop", "notebook"]),
    (ApplianceClass::Iron, &["утюг", "iron"]),
    (ApplianceClass::Dishwasher, &["посудомо", "dishwasher"]),
    (ApplianceClass::Microwave, &["микроволн", "microwave"]),
    (ApplianceClass::WaterHeater, &["бойлер", "водонагреватель", "boiler", "water heater"]),
    (ApplianceClass::Heater, &["heater"]),
    (ApplianceClass::HairDryer, &["фен", "hair dryer", "hairdryer"]),
    (ApplianceClass::Lighting, &["лампа", "люстра", "свет", "lamp", "light", "chandelier"]),
    (ApplianceClass::Stove, &["плит", "духов", "stove", "oven", "cooker"]),
];

/// Recognise the appliance class from a display name, case-insensitively
pub fn classify(name: &str) -> Option<ApplianceClass> {
    let name = name.to_lowercase();
    let words: Vec<&str> = name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    KEYWORD_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| keyword_matches(&name, &words, k)))
        .map(|(class, _)| *class)
}

fn keyword_matches(name: &str, words: &[&str], keyword: &str) -> bool {
    if !keyword.is_ascii() {
        return name.contains(keyword);
    }
    let parts: Vec<&str> = keyword.split(' ').collect();
    words
        .windows(parts.len())
        .any(|window| window.iter().zip(&parts).all(|(word, part)| word_matches(word, part)))
}

fn word_matches(word: &str, keyword: &str) -> bool {
    word == keyword || word.strip_suffix('s') == Some(keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("Старый Холодильник"), Some(ApplianceClass::Refrigerator));
        assert_eq!(classify("KITCHEN KETTLE"), Some(ApplianceClass::Kettle));
        assert_eq!(classify("Стиральная машина"), Some(ApplianceClass::WashingMachine));
    }

    #[test]
    fn test_first_rule_wins() {
        // Matches both refrigerator and lighting keywords
        assert_eq!(classify("Fridge light"), Some(ApplianceClass::Refrigerator));
        // Boiler precedes the generic lighting and stove rules
        assert_eq!(classify("Boiler room lamp"), Some(ApplianceClass::WaterHeater));
        assert_eq!(classify("Microwave oven"), Some(ApplianceClass::Microwave));
    }

    #[test]
    fn test_water_heater_is_not_a_space_heater() {
        assert_eq!(classify("Water heater"), Some(ApplianceClass::WaterHeater));
        assert_eq!(classify("Oil heater"), Some(ApplianceClass::Heater));
        assert_eq!(classify("Конвектор"), Some(ApplianceClass::Heater));
    }

    #[test]
    fn test_plain_heater_names() {
        assert_eq!(classify("Heater"), Some(ApplianceClass::Heater));
        assert_eq!(classify("Electric heater"), Some(ApplianceClass::Heater));
        assert_eq!(classify("Bathroom heaters"), Some(ApplianceClass::Heater));
        assert_eq!(classify("Hot water heater"), Some(ApplianceClass::WaterHeater));
    }

    #[test]
    fn test_latin_keywords_match_whole_words() {
        assert_eq!(classify("Environment sensor"), None);
        assert_eq!(classify("Flight simulator rig"), None);
        assert_eq!(classify("Hair conditioner warmer"), None);
        assert_eq!(classify("Steam iron"), Some(ApplianceClass::Iron));
        assert_eq!(classify("Hall lights"), Some(ApplianceClass::Lighting));
        assert_eq!(classify("hair-dryer"), Some(ApplianceClass::HairDryer));
        assert_eq!(classify("Bedroom air conditioner"), Some(ApplianceClass::AirConditioner));
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(classify("Aquarium pump"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_tiers() {
        assert_eq!(ApplianceClass::Heater.tier(), TipTier::Warning);
        assert_eq!(ApplianceClass::WaterHeater.tier(), TipTier::Warning);
        assert_eq!(ApplianceClass::Kettle.tier(), TipTier::Advice);
    }

    #[test]
    fn test_general_tip_keys_are_unique() {
        let mut keys: Vec<&str> = GENERAL_TIPS.iter().map(|t| t.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), GENERAL_TIPS.len());
    }
}

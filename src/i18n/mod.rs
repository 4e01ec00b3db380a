//! Internationalization module
//!
//! Provides translations for English (en) and Russian (ru).
//! Supports automatic language detection based on system locale.

mod en;
mod ru;

use std::collections::HashMap;

/// Internationalization manager
pub struct I18n {
    current_lang: String,
    translations: HashMap<String, String>,
}

impl I18n {
    /// Create a new I18n instance with the specified language
    pub fn new(lang: &str) -> Self {
        let mut i18n = Self {
            current_lang: String::new(),
            translations: HashMap::new(),
        };
        i18n.set_language(lang);
        i18n
    }

    /// Set the current language
    pub fn set_language(&mut self, lang: &str) {
        let lang = if lang == "auto" {
            detect_system_language()
        } else {
            lang.to_string()
        };

        self.translations = match lang.as_str() {
            "ru" => ru::get_translations(),
            "en" => en::get_translations(),
            other => {
                log::warn!("Unsupported language '{}', using English", other);
                en::get_translations()
            }
        };
        self.current_lang = if lang == "ru" { lang } else { "en".to_string() };

        log::info!("Language set to: {}", self.current_lang);
    }

    /// Get a translated string by key, or the key itself when missing
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Get a translated string with `{name}` placeholders substituted
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.get(key);
        for (name, value) in args {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }

    /// Localized name of a month (1-12)
    pub fn month_name(&self, month: u32) -> String {
        if (1..=12).contains(&month) {
            self.get(&format!("month.{}", month))
        } else {
            month.to_string()
        }
    }

    /// Get the current language code
    pub fn current_language(&self) -> &str {
        &self.current_lang
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("auto")
    }
}

/// Detect system language
fn detect_system_language() -> String {
    let lang_env = std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .or_else(|_| std::env::var("LANG"))
        .unwrap_or_else(|_| "en".to_string());

    language_from_locale(&lang_env).to_string()
}

/// Extract a supported language code (e.g. "ru_RU.UTF-8" -> "ru")
fn language_from_locale(locale: &str) -> &'static str {
    let lang_code = locale
        .split('_')
        .next()
        .unwrap_or("en")
        .split('.')
        .next()
        .unwrap_or("en");

    match lang_code.to_ascii_lowercase().as_str() {
        "ru" => "ru",
        _ => "en",
    }
}

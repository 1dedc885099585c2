//! Internationalization (i18n) support for RateStars
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations
//! - zh.rs: Chinese translations

mod en;
mod zh;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Get language display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "中文",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    /// Parse a language code, unknown codes fall back to English
    pub fn from_code(code: &str) -> Self {
        match code {
            "zh" => Language::Chinese,
            _ => Language::English,
        }
    }

    /// All available languages
    #[cfg(test)]
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Chinese]
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    AppName,

    // Rating screen
    RateTitle,
    SendButton,

    // Feedback alert
    AlertTitle,
    AlertMessage,
    AlertClose,
}

impl Key {
    /// Every key, used to check translation completeness
    #[cfg(test)]
    pub fn all() -> &'static [Key] {
        &[
            Key::AppName,
            Key::RateTitle,
            Key::SendButton,
            Key::AlertTitle,
            Key::AlertMessage,
            Key::AlertClose,
        ]
    }
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::Chinese => zh::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_is_translated() {
        for lang in Language::all() {
            for key in Key::all() {
                assert_ne!(t(*lang, *key), "???", "{:?} missing for {:?}", key, lang);
            }
        }
    }

    #[test]
    fn alert_texts_in_english() {
        let locale = Locale::default();
        assert_eq!(locale.get(Key::AlertTitle), "Info");
        assert_eq!(locale.get(Key::AlertClose), "Close");
        assert!(locale.get(Key::AlertMessage).starts_with("Thank you very much"));
    }

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), *lang);
        }
        assert_eq!(Language::from_code("fr"), Language::English);
    }
}

//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert(Key::AppName, "RateStars");

    // Rating screen
    m.insert(Key::RateTitle, "Rate our service");
    m.insert(Key::SendButton, "Send");

    // Feedback alert
    m.insert(Key::AlertTitle, "Info");
    m.insert(
        Key::AlertMessage,
        "Thank you very much for your feedback!\nWe value everyone and strive to be better.",
    );
    m.insert(Key::AlertClose, "Close");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}

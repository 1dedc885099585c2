//! Chinese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert(Key::AppName, "RateStars");

    // Rating screen
    m.insert(Key::RateTitle, "为我们的服务评分");
    m.insert(Key::SendButton, "发送");

    // Feedback alert
    m.insert(Key::AlertTitle, "提示");
    m.insert(
        Key::AlertMessage,
        "非常感谢您的反馈！\n我们重视每一位用户，并努力做得更好。",
    );
    m.insert(Key::AlertClose, "关闭");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}

//! Flag registry: Single source of truth for the flag reactions the bot answers.
//!
//! This module maps flag emoji to the language code the message is translated
//! into. It uses a singleton pattern with `OnceLock` so the table is built once
//! and shared read-only by every event and the dashboard.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::i18n::Language;

/// Global flag registry singleton.
///
/// Several flags may point at the same language (🇬🇧, 🇺🇸 and 🏴󠁧󠁢󠁥󠁮󠁧󠁿 all map to
/// English), but each flag maps to exactly one language code.
pub struct FlagRegistry {
    flags: BTreeMap<&'static str, &'static str>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<FlagRegistry> = OnceLock::new();

impl FlagRegistry {
    /// Get the global flag registry instance.
    pub fn get() -> &'static FlagRegistry {
        REGISTRY.get_or_init(|| FlagRegistry {
            flags: default_flags().into_iter().collect(),
        })
    }

    /// Resolve a flag emoji to its target language.
    ///
    /// # Returns
    /// * `Some(Language)` if the flag is registered
    /// * `None` for any other emoji; callers ignore the reaction silently
    pub fn resolve(&self, flag: &str) -> Option<Language> {
        self.flags.get(flag).map(|&code| Language::new(code))
    }

    /// The full flag → language code mapping, in stable order.
    pub fn flags(&self) -> &BTreeMap<&'static str, &'static str> {
        &self.flags
    }

    /// Number of registered flags.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

fn default_flags() -> Vec<(&'static str, &'static str)> {
    vec![
        ("🇲🇫", "fr"),
        ("🏴\u{e0067}\u{e0062}\u{e0065}\u{e006e}\u{e0067}\u{e007f}", "en"),
        ("🇩🇪", "de"),
        ("🇬🇧", "en"),
        ("🇺🇸", "en"),
        ("🇫🇷", "fr"),
        ("🇪🇸", "es"),
        ("🇮🇹", "it"),
        ("🇯🇵", "ja"),
        ("🇷🇺", "ru"),
        ("🇨🇳", "zh-cn"),
        ("🇰🇷", "ko"),
        ("🇳🇱", "nl"),
        ("🇧🇪", "nl"),
        ("🇵🇹", "pt"),
        ("🇧🇷", "pt"),
        ("🇸🇪", "sv"),
        ("🇳🇴", "no"),
        ("🇩🇰", "da"),
        ("🇫🇮", "fi"),
        ("🇵🇱", "pl"),
        ("🇨🇿", "cs"),
        ("🇸🇰", "sk"),
        ("🇭🇺", "hu"),
        ("🇬🇷", "el"),
        ("🇹🇷", "tr"),
        ("🇮🇳", "hi"),
        ("🇦🇪", "ar"),
        ("🇸🇦", "ar"),
        ("🇮🇱", "he"),
        ("🇹🇭", "th"),
        ("🇻🇳", "vi"),
        ("🇮🇩", "id"),
        ("🇲🇾", "ms"),
        ("🇺🇦", "uk"),
        ("🇧🇬", "bg"),
        ("🇷🇴", "ro"),
        ("🇭🇷", "hr"),
        ("🇷🇸", "sr"),
        ("🇸🇮", "sl"),
        ("🇱🇹", "lt"),
        ("🇱🇻", "lv"),
        ("🇪🇪", "et"),
        ("🇹🇼", "zh-tw"),
        ("🇮🇷", "fa"),
    ]
}

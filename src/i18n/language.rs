//! Language type: a resolved translation target.
//!
//! A `Language` is only produced by the flag registry, so every instance
//! carries a code the translation provider accepts.

use crate::i18n::strings::{localized_word, Concept};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// Provider language code (e.g., "de", "zh-cn")
    code: &'static str,
}

impl Language {
    /// German, the base language of every user-facing string.
    pub const GERMAN: Language = Language { code: "de" };

    pub(crate) fn new(code: &'static str) -> Self {
        Language { code }
    }

    /// The provider language code (e.g., "de", "zh-cn").
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// The label used in front of the translated line, e.g. "ZH-CN".
    pub fn label(&self) -> String {
        self.code.to_uppercase()
    }

    /// The word for "Translation" in this language.
    pub fn translation_word(&self) -> &'static str {
        localized_word(Concept::Translation, self.code)
    }

    /// The word for "Original" in this language.
    pub fn original_word(&self) -> &'static str {
        localized_word(Concept::Original, self.code)
    }
}

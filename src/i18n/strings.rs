//! Localized words used in translation replies, plus the fixed notices
//! sent to users.
//!
//! Notices are in German, the base language; the two reply labels are looked
//! up per target language and fall back to German when a language has no entry.

use crate::i18n::Language;

/// Language whose words are used when a target language has no entry.
pub const BASE_LANGUAGE: &str = Language::GERMAN.code();

/// The two labelled concepts in a translation reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Concept {
    /// Header word, e.g. "Übersetzung"
    Translation,
    /// Label in front of the source text, e.g. "Original"
    Original,
}

/// Icon in front of every translation reply header.
pub const HEADER_ICON: &str = "🌐";

/// Sent when the reacted-to message has no text.
pub const NOTHING_TO_TRANSLATE: &str = "❌ Die Nachricht enthält keinen Text zum Übersetzen.";

/// Prefix of the direct message sent when a translation fails.
pub const TRANSLATION_FAILED_PREFIX: &str = "⚠️ Fehler beim Übersetzen:";

const TRANSLATION_WORDS: &[(&str, &str)] = &[
    ("en", "Translation"),
    ("de", "Übersetzung"),
    ("fr", "Traduction"),
    ("es", "Traducción"),
    ("it", "Traduzione"),
    ("ja", "翻訳"),
    ("ru", "Перевод"),
    ("zh-cn", "翻译"),
    ("ko", "번역"),
    ("nl", "Vertaling"),
    ("pt", "Tradução"),
    ("sv", "Översättning"),
    ("no", "Oversettelse"),
    ("da", "Oversættelse"),
    ("fi", "Käännös"),
    ("pl", "Tłumaczenie"),
    ("cs", "Překlad"),
    ("sk", "Preklad"),
    ("hu", "Fordítás"),
    ("el", "Μετάφραση"),
    ("tr", "Çeviri"),
    ("hi", "अनुवाद"),
    ("ar", "ترجمة"),
    ("he", "תרגום"),
    ("th", "การแปล"),
    ("vi", "Bản dịch"),
    ("id", "Terjemahan"),
    ("ms", "Terjemahan"),
    ("uk", "Переклад"),
    ("bg", "Превод"),
    ("ro", "Traducere"),
    ("hr", "Prijevod"),
    ("sr", "Превод"),
    ("sl", "Prevod"),
    ("lt", "Vertimas"),
    ("lv", "Tulkojums"),
    ("et", "Tõlge"),
    ("zh-tw", "翻譯"),
    ("fa", "ترجمه"),
];

const ORIGINAL_WORDS: &[(&str, &str)] = &[
    ("en", "Original"),
    ("de", "Original"),
    ("fr", "Original"),
    ("es", "Original"),
    ("it", "Originale"),
    ("ja", "元のテキスト"),
    ("ru", "Оригинал"),
    ("zh-cn", "原文"),
    ("ko", "원문"),
    ("nl", "Origineel"),
    ("pt", "Original"),
    ("sv", "Original"),
    ("no", "Original"),
    ("da", "Original"),
    ("fi", "Alkuperäinen"),
    ("pl", "Oryginalny"),
    ("cs", "Originál"),
    ("sk", "Originál"),
    ("hu", "Eredeti"),
    ("el", "Πρωτότυπο"),
    ("tr", "Orijinal"),
    ("hi", "मूल"),
    ("ar", "الأصل"),
    ("he", "מקורי"),
    ("th", "ต้นฉบับ"),
    ("vi", "Bản gốc"),
    ("id", "Asli"),
    ("ms", "Asal"),
    ("uk", "Оригінал"),
    ("bg", "Оригинал"),
    ("ro", "Original"),
    ("hr", "Izvornik"),
    ("sr", "Оригинал"),
    ("sl", "Izvirnik"),
    ("lt", "Originalas"),
    ("lv", "Oriģināls"),
    ("et", "Originaal"),
    ("zh-tw", "原文"),
    ("fa", "اصل"),
];

fn table(concept: Concept) -> &'static [(&'static str, &'static str)] {
    match concept {
        Concept::Translation => TRANSLATION_WORDS,
        Concept::Original => ORIGINAL_WORDS,
    }
}

fn lookup(concept: Concept, code: &str) -> Option<&'static str> {
    table(concept)
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, word)| *word)
}

/// Look up the word for `concept` in `code`, falling back to the base language.
pub fn localized_word(concept: Concept, code: &str) -> &'static str {
    lookup(concept, code)
        .or_else(|| lookup(concept, BASE_LANGUAGE))
        .unwrap_or(match concept {
            Concept::Translation => "Übersetzung",
            Concept::Original => "Original",
        })
}

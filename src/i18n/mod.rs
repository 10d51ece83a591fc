//! Internationalization (i18n) module for flag-driven translation.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the flag emoji the bot reacts to
//! - `language`: Type-safe `Language` produced by resolving a flag
//! - `strings`: Localized reply labels and the fixed user notices
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::FlagRegistry;
//!
//! let german = FlagRegistry::get().resolve("🇩🇪").unwrap();
//! assert_eq!(german.translation_word(), "Übersetzung");
//! ```

mod language;
mod registry;
pub mod strings;

pub use language::Language;
pub use registry::FlagRegistry;
pub use strings::{localized_word, Concept};

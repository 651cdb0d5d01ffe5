//! Internationalization (i18n) module for multi-language support.
//!
//! All locale-related logic and UI strings live here.
//!
//! # Architecture
//!
//! - `registry`: Built-in language table and the configured `LocaleRegistry`
//! - `language`: Type-safe `Language` that always has translations
//! - `negotiate`: `Accept-Language` parsing and locale matching
//! - `strings`: Localized UI strings
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{negotiate, LocaleRegistry};
//!
//! let registry = LocaleRegistry::new(&["en", "pl"], "en")?;
//! let language = negotiate(Some("pl-PL,pl;q=0.9"), &registry);
//! let title = language.strings().app_title;
//! ```

mod language;
mod negotiate;
mod registry;
mod strings;

pub use language::Language;
pub use negotiate::{best_match, negotiate, parse_accept_language, LanguageRange};
pub use registry::{LanguageConfig, LocaleRegistry};
pub use strings::LanguageStrings;

//! Language type: a locale tag the application has translations for.
//!
//! A `Language` can only be obtained from the built-in language table, so
//! holding one guarantees that UI strings exist for it.

use crate::i18n::registry::{LanguageConfig, ENGLISH_CONFIG, KNOWN_LANGUAGES, POLISH_CONFIG};
use crate::i18n::LanguageStrings;
use std::fmt;

/// A language with a full set of UI strings.
#[derive(Clone, Copy)]
pub struct Language {
    config: &'static LanguageConfig,
}

impl Language {
    pub const ENGLISH: Language = Language {
        config: &ENGLISH_CONFIG,
    };

    pub const POLISH: Language = Language {
        config: &POLISH_CONFIG,
    };

    /// Look up a language by its exact tag (e.g. "en", "pl").
    ///
    /// # Returns
    /// * `Some(Language)` if the application ships strings for the tag
    /// * `None` otherwise; matching is case-sensitive, as in URL segments
    pub fn from_code(code: &str) -> Option<Language> {
        KNOWN_LANGUAGES
            .iter()
            .find(|language| language.code() == code)
            .copied()
    }

    /// Locale tag as used in URL prefixes and the `lang` attribute.
    pub fn code(&self) -> &'static str {
        self.config.code
    }

    /// English name of the language (e.g., "Polish").
    pub fn name(&self) -> &'static str {
        self.config.name
    }

    /// Name of the language in the language itself (e.g., "Polski").
    pub fn native_name(&self) -> &'static str {
        self.config.native_name
    }

    /// UI strings for this language.
    pub fn strings(&self) -> &'static LanguageStrings {
        self.config.strings
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for Language {}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Language").field(&self.code()).finish()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

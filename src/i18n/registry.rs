//! Locale registry: the configured set of supported locales.
//!
//! The built-in table lists every language the application has strings for.
//! A `LocaleRegistry` is the subset enabled by configuration plus the
//! default locale. It is built once at startup, validated, and then passed
//! to whoever needs it; there is no global instance.

use crate::i18n::strings::{ENGLISH_STRINGS, POLISH_STRINGS};
use crate::i18n::{Language, LanguageStrings};
use anyhow::{bail, Result};

/// Static metadata for a language the application ships strings for.
#[derive(Debug)]
pub struct LanguageConfig {
    /// Locale tag used in URL prefixes (e.g., "en", "pl")
    pub code: &'static str,

    /// English name of the language
    pub name: &'static str,

    /// Native name of the language, shown in the language switcher
    pub native_name: &'static str,

    pub strings: &'static LanguageStrings,
}

pub(crate) const ENGLISH_CONFIG: LanguageConfig = LanguageConfig {
    code: "en",
    name: "English",
    native_name: "English",
    strings: &ENGLISH_STRINGS,
};

pub(crate) const POLISH_CONFIG: LanguageConfig = LanguageConfig {
    code: "pl",
    name: "Polish",
    native_name: "Polski",
    strings: &POLISH_STRINGS,
};

/// Every language with translations, in display order.
pub(crate) static KNOWN_LANGUAGES: [Language; 2] = [Language::ENGLISH, Language::POLISH];

/// Supported locales and the default one.
///
/// Invariants (checked by [`LocaleRegistry::new`]): the supported list is
/// non-empty, has no duplicates, and contains the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRegistry {
    supported: Vec<Language>,
    default: Language,
}

impl LocaleRegistry {
    /// Build a registry from locale tags.
    ///
    /// # Arguments
    /// * `supported` - Locale tags to serve, in preference order for ties
    /// * `default` - Tag used when negotiation finds nothing better
    ///
    /// # Returns
    /// * `Err` if the list is empty, repeats a tag, names a tag without
    ///   translations, or does not contain the default
    pub fn new<S: AsRef<str>>(supported: &[S], default: &str) -> Result<Self> {
        if supported.is_empty() {
            bail!("At least one supported locale must be configured");
        }

        let mut languages: Vec<Language> = Vec::with_capacity(supported.len());
        for code in supported {
            let code = code.as_ref().trim();
            let Some(language) = Language::from_code(code) else {
                bail!("Unknown locale '{}': no translations available", code);
            };
            if languages.contains(&language) {
                bail!("Locale '{}' is listed more than once", code);
            }
            languages.push(language);
        }

        let Some(default) = languages.iter().copied().find(|l| l.code() == default.trim())
        else {
            bail!(
                "Default locale '{}' is not among the supported locales ({})",
                default,
                languages
                    .iter()
                    .map(Language::code)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        };

        Ok(Self {
            supported: languages,
            default,
        })
    }

    /// Supported languages in configured order.
    pub fn supported(&self) -> &[Language] {
        &self.supported
    }

    pub fn default_language(&self) -> Language {
        self.default
    }

    /// Find a supported language by its exact tag.
    pub fn get(&self, code: &str) -> Option<Language> {
        self.supported.iter().copied().find(|l| l.code() == code)
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.get(code).is_some()
    }
}

impl Default for LocaleRegistry {
    /// English and Polish, English by default.
    fn default() -> Self {
        Self {
            supported: KNOWN_LANGUAGES.to_vec(),
            default: Language::ENGLISH,
        }
    }
}

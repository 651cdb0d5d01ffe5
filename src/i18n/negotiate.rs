//! `Accept-Language` parsing and locale negotiation.
//!
//! Parsing never fails: malformed entries are dropped, so a garbage header
//! behaves like an absent one and negotiation falls back to the default
//! locale. Entries with `q=0` mark a language as not acceptable.

use crate::i18n::{Language, LocaleRegistry};
use regex::Regex;
use std::sync::OnceLock;

/// One entry of an `Accept-Language` header.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageRange {
    /// Language tag as sent by the client (e.g. "pl-PL") or "*"
    pub tag: String,

    /// Quality weight in `0.0..=1.0`
    pub quality: f32,
}

impl LanguageRange {
    pub fn is_wildcard(&self) -> bool {
        self.tag == "*"
    }

    /// Primary language subtag ("pl" for "pl-PL").
    pub fn primary(&self) -> &str {
        primary_subtag(&self.tag)
    }
}

static TAG_REGEX: OnceLock<Regex> = OnceLock::new();

fn tag_regex() -> &'static Regex {
    TAG_REGEX.get_or_init(|| {
        Regex::new(r"^(\*|[A-Za-z]{1,8}(-[A-Za-z0-9]{1,8})*)$").expect("valid tag regex")
    })
}

fn primary_subtag(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

/// Parse an `Accept-Language` value into preferences, best first.
///
/// Entries with an invalid tag or quality are skipped. Entries with `q=0`
/// are kept and sort last. Entries of equal quality keep header order.
pub fn parse_accept_language(header: &str) -> Vec<LanguageRange> {
    let mut ranges: Vec<LanguageRange> = header.split(',').filter_map(parse_range).collect();

    ranges.sort_by(|a, b| b.quality.total_cmp(&a.quality));
    ranges
}

fn parse_range(entry: &str) -> Option<LanguageRange> {
    let mut parts = entry.split(';');
    let tag = parts.next()?.trim();
    if !tag_regex().is_match(tag) {
        return None;
    }

    let mut quality = 1.0;
    for param in parts {
        let (key, value) = param.split_once('=')?;
        if key.trim().eq_ignore_ascii_case("q") {
            quality = value.trim().parse::<f32>().ok()?;
            if !(0.0..=1.0).contains(&quality) {
                return None;
            }
        }
    }

    Some(LanguageRange {
        tag: tag.to_string(),
        quality,
    })
}

/// Pick the best supported language for a set of preferences.
///
/// Preferences are tried in order. For each one an exact tag match wins over
/// a primary-language match (`pl-PL` selects `pl`), and a wildcard selects
/// the default. Nothing matching falls back to the default.
///
/// Tags sent with `q=0` are never chosen by a wildcard or by the fallback;
/// the default is still used when every supported language is excluded.
pub fn best_match(ranges: &[LanguageRange], registry: &LocaleRegistry) -> Language {
    let (excluded, preferred): (Vec<&LanguageRange>, Vec<&LanguageRange>) =
        ranges.iter().partition(|range| range.quality <= 0.0);

    preferred
        .iter()
        .find_map(|range| match_range(range, registry, &excluded))
        .or_else(|| first_acceptable(registry, &excluded))
        .unwrap_or_else(|| registry.default_language())
}

/// True if the range `tag` covers `code` (`en` covers `en` and `en-GB`).
fn covers(tag: &str, code: &str) -> bool {
    code.eq_ignore_ascii_case(tag)
        || (code.len() > tag.len()
            && code.is_char_boundary(tag.len())
            && code[..tag.len()].eq_ignore_ascii_case(tag)
            && code[tag.len()..].starts_with('-'))
}

fn is_excluded(language: Language, excluded: &[&LanguageRange]) -> bool {
    excluded
        .iter()
        .any(|range| !range.is_wildcard() && covers(&range.tag, language.code()))
}

/// The default if acceptable, otherwise the first acceptable supported one.
fn first_acceptable(registry: &LocaleRegistry, excluded: &[&LanguageRange]) -> Option<Language> {
    std::iter::once(registry.default_language())
        .chain(registry.supported().iter().copied())
        .find(|language| !is_excluded(*language, excluded))
}

fn match_range(
    range: &LanguageRange,
    registry: &LocaleRegistry,
    excluded: &[&LanguageRange],
) -> Option<Language> {
    if range.is_wildcard() {
        return first_acceptable(registry, excluded);
    }

    let supported = registry.supported();
    supported
        .iter()
        .find(|language| language.code().eq_ignore_ascii_case(&range.tag))
        .or_else(|| {
            supported.iter().find(|language| {
                primary_subtag(language.code()).eq_ignore_ascii_case(range.primary())
            })
        })
        .copied()
}

/// Negotiate a locale from an optional raw header value.
pub fn negotiate(header: Option<&str>, registry: &LocaleRegistry) -> Language {
    match header {
        Some(value) => best_match(&parse_accept_language(value), registry),
        None => registry.default_language(),
    }
}

use alloc::vec::Vec;

use crate::catalog::LocaleCatalog;
use crate::locale::LocaleCode;

/// One entry of a weighted language-preference header.
#[derive(Clone, Debug, PartialEq)]
pub struct LanguageRange {
    pub locale: LocaleCode,
    pub weight: f32,
}

/// Parses a raw `Accept-Language` value into the supported candidates,
/// preserving input order.
///
/// Unrecognized or unsupported locales are dropped silently; an empty or
/// garbage input is a benign empty result, never an error. A range without
/// a weight part defaults to `1.0`; a weight that fails to parse coerces
/// to `0.0`.
pub fn parse_ranges(raw: &str, catalog: &LocaleCatalog) -> Vec<LanguageRange> {
    let mut candidates = Vec::new();
    for token in raw.split(',') {
        let (locale_part, weight_part) = match token.split_once(';') {
            Some((locale, weight)) => (locale, Some(weight)),
            None => (token, None),
        };
        let Ok(locale) = LocaleCode::sanitize(locale_part) else {
            continue;
        };
        if !catalog.is_supported(&locale) {
            continue;
        }
        candidates.push(LanguageRange {
            locale,
            weight: parse_weight(weight_part),
        });
    }
    candidates
}

// Expected form is `q=<number>`; the two-character prefix is skipped
// positionally. Anything that does not parse to a finite float, a literal
// `NaN` included, coerces to 0.0.
fn parse_weight(part: Option<&str>) -> f32 {
    let Some(part) = part else {
        return 1.0;
    };
    let part = part.trim();
    if part.is_empty() {
        return 1.0;
    }
    let value = part.get(2..).unwrap_or("").trim();
    match value.parse::<f32>() {
        Ok(weight) if weight.is_finite() => weight,
        _ => 0.0,
    }
}

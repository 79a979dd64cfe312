use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::accept::LanguageRange;
use crate::locale::LocaleCode;

/// Picks the winning candidate: highest weight, with ties going to the
/// entry listed latest in the original input.
///
/// A stable ascending sort keeps equal weights in input order, so popping
/// the last element implements both rules at once. Weights are finite
/// after parsing, so the comparison never falls back to `Equal` in
/// practice.
pub fn select(mut candidates: Vec<LanguageRange>) -> Option<LocaleCode> {
    candidates.sort_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal));
    candidates.pop().map(|range| range.locale)
}

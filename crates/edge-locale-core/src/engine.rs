use alloc::vec::Vec;
use core::fmt;

use crate::accept::parse_ranges;
use crate::catalog::LocaleCatalog;
use crate::cookie::cookie_locale;
use crate::error::CoreError;
use crate::locale::LocaleCode;
use crate::select::select;

/// A raw negotiation input as handed over by the request envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal<'a> {
    /// The header was not present on the request.
    Absent,
    /// The first value of the header, as text.
    Text(&'a str),
    /// The header was present but its value was not string-shaped.
    Malformed(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    DefaultAssignment,
    CookieExtraction,
    HeaderNegotiation,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::DefaultAssignment => f.write_str("assigning default language"),
            Stage::CookieExtraction => f.write_str("extracting cookie language"),
            Stage::HeaderNegotiation => f.write_str("performing language negotiation"),
        }
    }
}

/// A contained per-stage failure. Faults never abort negotiation; they
/// are carried back so the boundary adapter can log them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageFault {
    pub stage: Stage,
    pub error: CoreError,
}

/// Which signal produced the winning locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocaleSource {
    Cookie,
    Header,
    Default,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Negotiation {
    pub selected: LocaleCode,
    pub source: LocaleSource,
    pub faults: Vec<StageFault>,
}

/// Resolves one locale from the cookie and `Accept-Language` signals.
///
/// The catalog default is established up front and the two signals are
/// layered on top in priority order: cookie over header over default.
/// Each stage is fault-isolated, so a malformed cookie never stops
/// header negotiation and vice versa. The returned locale is always a
/// member of the catalog's supported set or its default.
pub fn negotiate(
    cookie_header: Signal<'_>,
    accept_language: Signal<'_>,
    cookie_name: &str,
    catalog: &LocaleCatalog,
) -> Negotiation {
    let mut faults = Vec::new();

    let from_cookie = match cookie_header {
        Signal::Absent => None,
        Signal::Text(raw) => cookie_locale(raw, cookie_name, catalog),
        Signal::Malformed(message) => {
            faults.push(StageFault {
                stage: Stage::CookieExtraction,
                error: CoreError::Extraction(message),
            });
            None
        }
    };

    let from_header = match accept_language {
        Signal::Absent => None,
        Signal::Text(raw) => select(parse_ranges(raw, catalog)),
        Signal::Malformed(message) => {
            faults.push(StageFault {
                stage: Stage::HeaderNegotiation,
                error: CoreError::Parse(message),
            });
            None
        }
    };

    let (selected, source) = if let Some(code) = from_cookie {
        (code, LocaleSource::Cookie)
    } else if let Some(code) = from_header {
        (code, LocaleSource::Header)
    } else {
        (catalog.default_locale().clone(), LocaleSource::Default)
    };

    Negotiation {
        selected,
        source,
        faults,
    }
}

use crate::catalog::LocaleCatalog;
use crate::locale::LocaleCode;

/// Finds the named cookie's raw value inside a `;`-delimited `Cookie`
/// header. Names and values may be surrounded by whitespace.
///
/// A missing cookie falls through to `None` rather than an error, and so
/// does a present-but-empty value; callers treat both as "no cookie
/// locale".
pub fn extract_cookie_value<'a>(cookie_header: &'a str, cookie_name: &str) -> Option<&'a str> {
    for pair in cookie_header.split(';') {
        let Some((name, value)) = pair.split_once('=') else {
            continue;
        };
        if name.trim() == cookie_name {
            let value = value.trim();
            if value.is_empty() {
                return None;
            }
            return Some(value);
        }
    }
    None
}

/// Extraction, sanitation and catalog filtering for the cookie signal,
/// treated as a single-element candidate set.
pub fn cookie_locale(
    cookie_header: &str,
    cookie_name: &str,
    catalog: &LocaleCatalog,
) -> Option<LocaleCode> {
    let raw = extract_cookie_value(cookie_header, cookie_name)?;
    let code = LocaleCode::sanitize(raw).ok()?;
    catalog.is_supported(&code).then_some(code)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{cookie_locale, extract_cookie_value};
    use crate::catalog::LocaleCatalog;
    use crate::locale::LocaleCode;

    fn catalog() -> LocaleCatalog {
        let en = LocaleCode::sanitize("en").expect("valid code");
        let es = LocaleCode::sanitize("es").expect("valid code");
        LocaleCatalog::new(vec![en.clone(), es], en)
    }

    #[test]
    fn finds_named_cookie() {
        let value = extract_cookie_value("SomeCookie=1; locale=es-419; AnotherOne=A", "locale");
        assert_eq!(value, Some("es-419"));
    }

    #[test]
    fn tolerates_whitespace_around_names() {
        let value = extract_cookie_value("a=1;  locale = fr ;b=2", "locale");
        assert_eq!(value, Some("fr"));
    }

    #[test]
    fn missing_cookie_yields_none() {
        assert_eq!(extract_cookie_value("SomeCookie=1; AnotherOne=A", "locale"), None);
    }

    #[test]
    fn empty_value_yields_none() {
        assert_eq!(extract_cookie_value("locale=; other=1", "locale"), None);
    }

    #[test]
    fn skips_pairs_without_separator() {
        let value = extract_cookie_value("garbage; locale=en", "locale");
        assert_eq!(value, Some("en"));
    }

    #[test]
    fn cookie_locale_filters_through_catalog() {
        let code = cookie_locale("locale=es-419", "locale", &catalog()).expect("supported");
        assert_eq!(code.as_str(), "es");
        assert_eq!(cookie_locale("locale=de", "locale", &catalog()), None);
    }

    #[test]
    fn cookie_locale_absent_when_cookie_missing() {
        assert_eq!(cookie_locale("other=1", "locale", &catalog()), None);
    }
}

use alloc::vec::Vec;

use crate::locale::LocaleCode;

/// The fixed set of locales a deployment can serve, plus its fallback
/// default. Built once at startup and shared read-only across requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleCatalog {
    supported: Vec<LocaleCode>,
    default_locale: LocaleCode,
}

impl LocaleCatalog {
    pub fn new(supported: Vec<LocaleCode>, default_locale: LocaleCode) -> Self {
        Self {
            supported,
            default_locale,
        }
    }

    pub fn is_supported(&self, code: &LocaleCode) -> bool {
        self.supported.iter().any(|candidate| candidate == code)
    }

    pub fn supported(&self) -> &[LocaleCode] {
        &self.supported
    }

    pub fn default_locale(&self) -> &LocaleCode {
        &self.default_locale
    }
}

use alloc::string::String;
use core::fmt;

use crate::{CoreError, CoreResult};

/// A sanitized locale code: the first two characters of a raw locale
/// token, ASCII-lowercased.
///
/// Full tags collapse onto their primary language subtag, so `en-US`,
/// `EN` and `en_GB` all sanitize to `en`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LocaleCode(String);

impl LocaleCode {
    pub fn sanitize(raw: &str) -> CoreResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidInput("locale token is empty"));
        }
        let mut code = String::with_capacity(2);
        for ch in trimmed.chars().take(2) {
            code.push(ch.to_ascii_lowercase());
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

use edge_locale_core::{LocaleCatalog, LocaleCode, Stage, negotiate};
use serde_json::Value;
use tracing::error;

use crate::config::NegotiationConfig;
use crate::error::ConfigError;
use crate::event::{ACCEPT_LANGUAGE_HEADER, COOKIE_HEADER, first_header_value, request_mut};

/// A negotiation handler compiled once from configuration and shared
/// read-only across requests.
pub struct Negotiator {
    catalog: LocaleCatalog,
    cookie_name: String,
    custom_header: String,
}

impl Negotiator {
    pub fn from_config(config: &NegotiationConfig) -> Result<Self, ConfigError> {
        let mut supported = Vec::with_capacity(config.supported_locales.len());
        for locale in &config.supported_locales {
            supported.push(LocaleCode::sanitize(locale)?);
        }
        let default_locale = LocaleCode::sanitize(&config.default_locale)?;
        Ok(Self {
            catalog: LocaleCatalog::new(supported, default_locale),
            cookie_name: config.cookie_name.clone(),
            custom_header: config.custom_header.clone(),
        })
    }

    /// Handles one viewer-request event: negotiates a locale from the
    /// request's `Cookie` and `Accept-Language` headers and writes it
    /// into the configured custom header.
    ///
    /// The request is always forwarded, whatever the inputs look like;
    /// contained stage errors are visible only in the log.
    pub fn handle(&self, mut event: Value) -> Value {
        let request = request_mut(&mut event);
        self.apply(request);
        event
    }

    /// Runs negotiation against a bare request object, mutating its
    /// headers in place.
    pub fn apply(&self, request: &mut Value) {
        let Some(headers) = request.get_mut("headers").and_then(Value::as_object_mut) else {
            // Without a headers object the default cannot be assigned;
            // the request goes on with no custom header at all.
            error!(
                "Error {}: request headers are missing or not an object",
                Stage::DefaultAssignment
            );
            return;
        };

        let cookie = first_header_value(headers, COOKIE_HEADER);
        let accept_language = first_header_value(headers, ACCEPT_LANGUAGE_HEADER);
        let negotiation = negotiate(cookie, accept_language, &self.cookie_name, &self.catalog);

        for fault in &negotiation.faults {
            error!("Error {}: {}", fault.stage, fault.error);
        }

        headers.insert(
            self.custom_header.clone(),
            Value::Array(vec![Value::String(negotiation.selected.as_str().to_string())]),
        );
    }
}

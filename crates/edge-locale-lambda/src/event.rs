use edge_locale_core::Signal;
use serde_json::{Map, Value};

pub(crate) const COOKIE_HEADER: &str = "Cookie";
pub(crate) const ACCEPT_LANGUAGE_HEADER: &str = "Accept-Language";

/// Digs the viewer request out of a CloudFront-style event
/// (`Records[0].cf.request`). A value without that wrapper is treated as
/// the request itself.
pub fn request_mut(event: &mut Value) -> &mut Value {
    let wrapped = event
        .get("Records")
        .and_then(|records| records.get(0))
        .and_then(|record| record.get("cf"))
        .and_then(|cf| cf.get("request"))
        .is_some();
    if wrapped {
        &mut event["Records"][0]["cf"]["request"]
    } else {
        event
    }
}

/// Returns the first value of the named header as a typed signal.
///
/// Header names are matched ASCII case-insensitively. Multi-value
/// headers arrive as arrays and only the first element is consumed;
/// later values are ignored. A present element that is not a JSON
/// string is the malformed-input case the engine must contain.
pub fn first_header_value<'a>(headers: &'a Map<String, Value>, name: &str) -> Signal<'a> {
    let Some(value) = headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value)
    else {
        return Signal::Absent;
    };

    let first = match value {
        Value::Array(values) => match values.first() {
            Some(first) => first,
            None => return Signal::Absent,
        },
        Value::Null => return Signal::Absent,
        other => other,
    };

    match first {
        Value::String(text) => Signal::Text(text),
        _ => Signal::Malformed("header value is not a string"),
    }
}

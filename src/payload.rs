//! Upload payload decoding.
//!
//! A body is treated as UTF-8 text and parsed as JSON. Anything that does not
//! parse is kept verbatim under a single `raw` key, so decoding never fails.

use std::fmt;

use serde_json::{Map, Value};

/// Key holding the original text when a body is not JSON.
pub const RAW_KEY: &str = "raw";

/// The value derived from an upload body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Body parsed as JSON.
    Json(Value),
    /// Body text that failed to parse.
    Raw(String),
}

impl Payload {
    /// JSON shape of the payload: the parsed value, or `{"raw": <text>}`.
    pub fn to_value(&self) -> Value {
        match self {
            Payload::Json(value) => value.clone(),
            Payload::Raw(text) => {
                let mut map = Map::with_capacity(1);
                map.insert(RAW_KEY.to_string(), Value::String(text.clone()));
                Value::Object(map)
            }
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Payload::Json(_))
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

/// Decode a received body into a [`Payload`].
///
/// Invalid UTF-8 sequences become U+FFFD before parsing.
pub fn decode(body: &[u8]) -> Payload {
    let text = String::from_utf8_lossy(body);
    match serde_json::from_str::<Value>(&text) {
        Ok(value) => Payload::Json(value),
        Err(_) => Payload::Raw(text.into_owned()),
    }
}

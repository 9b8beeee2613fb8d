//! Streamed event records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A record: a flat header map plus an opaque payload.
///
/// Headers keep insertion order, which is the order all-headers rendering
/// emits them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Header name to value.
    #[serde(default)]
    pub headers: IndexMap<String, String>,
    /// Raw payload bytes. Serialized as UTF-8 text.
    #[serde(default, with = "body_text")]
    pub body: Vec<u8>,
}

impl Event {
    /// Creates an event with no headers.
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self {
            headers: IndexMap::new(),
            body: body.into(),
        }
    }

    /// Adds a header and returns `self`.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// The header map.
    pub fn headers(&self) -> &IndexMap<String, String> {
        &self.headers
    }

    /// The payload.
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

mod body_text {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(body: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(body))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        String::deserialize(deserializer).map(String::into_bytes)
    }
}

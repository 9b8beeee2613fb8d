//! Test fixtures.
//!
//! Shorthand for building options, header maps and serializers from
//! string slices.

use hdrfmt_core::{Event, EventSerializer, FormatConfig, HeaderSerializer, Options};
use indexmap::IndexMap;

/// Builds an option set from `(key, value)` pairs.
pub fn options(pairs: &[(&str, &str)]) -> Options {
    pairs.iter().copied().collect()
}

/// Builds an ordered header map from `(name, value)` pairs.
pub fn headers(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Builds an event from header pairs and a body.
pub fn event(pairs: &[(&str, &str)], body: &str) -> Event {
    Event {
        headers: headers(pairs),
        body: body.as_bytes().to_vec(),
    }
}

/// Renders the prefix for `header_pairs` under `option_pairs`.
pub fn render_with(option_pairs: &[(&str, &str)], header_pairs: &[(&str, &str)]) -> String {
    FormatConfig::from_source(&options(option_pairs)).render(&headers(header_pairs))
}

/// Serializes `events` into a byte buffer under `option_pairs`.
///
/// # Panics
///
/// Panics if writing to the in-memory buffer fails, which it never does.
pub fn serialize_all(option_pairs: &[(&str, &str)], events: &[Event]) -> Vec<u8> {
    let mut serializer = HeaderSerializer::from_source(Vec::new(), &options(option_pairs));
    serializer.after_create().expect("after_create failed");
    for event in events {
        serializer.write(event).expect("write to Vec failed");
    }
    serializer.flush().expect("flush failed");
    serializer.before_close().expect("before_close failed");
    serializer.into_inner()
}

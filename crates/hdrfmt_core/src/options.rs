//! Key/value configuration sources.
//!
//! The engine never reads configuration files itself. Hosts hand it an
//! already-resolved bag of options through [`ConfigSource`]; [`Options`] is
//! the in-memory implementation used by the CLI and the tests.

use crate::error::{HeaderError, HeaderResult};
use indexmap::IndexMap;

/// A source of already-resolved configuration values.
///
/// Getters return `Ok(None)` for absent keys and an error only when a value
/// is present but unusable. Each key is read independently, so one bad value
/// never prevents the others from being read.
pub trait ConfigSource {
    /// Returns the raw string value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::ConfigField`] if the value cannot be read.
    fn get_string(&self, key: &str) -> HeaderResult<Option<String>>;

    /// Returns the boolean value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::ConfigField`] if the value is not a boolean.
    fn get_bool(&self, key: &str) -> HeaderResult<Option<bool>>;
}

/// An ordered, in-memory set of options.
///
/// Values are stored verbatim: surrounding blanks in templates and
/// separators are significant and are never trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    values: IndexMap<String, String>,
}

impl Options {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Sets `key` to `value` and returns `self`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Applies a `key=value` assignment.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::InvalidAssignment`] if `input` has no `=` or an
    /// empty key.
    pub fn apply_assignment(&mut self, input: &str) -> HeaderResult<()> {
        let (key, value) = parse_assignment(input)?;
        self.set(key, value);
        Ok(())
    }

    /// Removes `key`, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.shift_remove(key)
    }

    /// Returns the raw value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the options whose keys start with `prefix`, with the prefix
    /// stripped.
    ///
    /// Hosts scope serializer settings under a prefix such as
    /// `serializer.`; this yields the plain keys the engine understands.
    #[must_use]
    pub fn sub_options(&self, prefix: &str) -> Options {
        self.values
            .iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(prefix)
                    .filter(|rest| !rest.is_empty())
                    .map(|rest| (rest.to_string(), value.clone()))
            })
            .collect()
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no options are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the options in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Options::new();
        for (key, value) in iter {
            options.set(key, value);
        }
        options
    }
}

impl ConfigSource for Options {
    fn get_string(&self, key: &str) -> HeaderResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn get_bool(&self, key: &str) -> HeaderResult<Option<bool>> {
        self.values
            .get(key)
            .map(|raw| parse_bool(key, raw))
            .transpose()
    }
}

/// Splits a `key=value` assignment at the first `=`.
///
/// The key is trimmed; the value is kept verbatim.
///
/// # Errors
///
/// Returns [`HeaderError::InvalidAssignment`] if there is no `=` or the key
/// is empty.
pub fn parse_assignment(input: &str) -> HeaderResult<(String, String)> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| HeaderError::invalid_assignment(input))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(HeaderError::invalid_assignment(input));
    }
    Ok((key.to_string(), value.to_string()))
}

fn parse_bool(key: &str, raw: &str) -> HeaderResult<bool> {
    let value = raw.trim();
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(HeaderError::config_field(
            key,
            format!("'{raw}' is not a boolean"),
        ))
    }
}

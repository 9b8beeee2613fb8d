//! Header format configuration.

use crate::options::ConfigSource;
use crate::template::GeneralTemplate;
use serde::Serialize;
use tracing::{error, info, trace};

/// Option keys understood by [`FormatConfig::from_source`].
pub mod keys {
    /// Append a line feed after each payload.
    pub const APPEND_NEWLINE: &str = "appendNewline";
    /// Space-separated header names, or `*` for all headers.
    pub const HEADERS: &str = "headers";
    /// Per-header general-format template.
    pub const GENERAL_FORMAT: &str = "headers_gf";
    /// General-format opening wrapper.
    pub const GENERAL_OPEN: &str = "headers_gf_o";
    /// General-format separator.
    pub const GENERAL_SEPARATOR: &str = "headers_gf_s";
    /// General-format closing wrapper.
    pub const GENERAL_CLOSE: &str = "headers_gf_c";
    /// Composite-format template.
    pub const COMPOSITE_FORMAT: &str = "headers_cf";
}

/// Default general-format template.
pub const DEFAULT_GENERAL_TEMPLATE: &str = "%H=%V";
/// Default general-format opening wrapper.
pub const DEFAULT_GENERAL_OPEN: &str = "{";
/// Default general-format separator.
pub const DEFAULT_GENERAL_SEPARATOR: &str = ";";
/// Default general-format closing wrapper.
pub const DEFAULT_GENERAL_CLOSE: &str = "}";

const ALL_HEADERS: &str = "*";

/// Which headers take part in rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "names", rename_all = "lowercase")]
pub enum HeaderSelection {
    /// No headers are selected.
    #[default]
    None,
    /// Every header present on the record.
    All,
    /// The named headers, in this order.
    Explicit(Vec<String>),
}

impl HeaderSelection {
    /// Parses a `headers` option value.
    ///
    /// `*` (surrounding whitespace ignored) selects all headers. Anything
    /// else is split on single spaces; empty tokens are dropped, and a value
    /// with no names left selects nothing.
    pub fn parse(raw: &str) -> Self {
        if raw.trim() == ALL_HEADERS {
            return Self::All;
        }
        let names: Vec<String> = raw
            .split(' ')
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        if names.is_empty() {
            Self::None
        } else {
            Self::Explicit(names)
        }
    }

    /// Whether the selection can never yield a header.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::All => false,
            Self::Explicit(names) => names.is_empty(),
        }
    }

    /// Explicitly selected names; empty for [`HeaderSelection::All`].
    pub fn names(&self) -> &[String] {
        match self {
            Self::Explicit(names) => names,
            Self::None | Self::All => &[],
        }
    }
}

/// Resolved header format configuration.
///
/// Immutable once built. Reconfiguration builds a new value; share it
/// between streams with `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatConfig {
    selection: HeaderSelection,
    general_template: String,
    #[serde(skip)]
    general_pieces: GeneralTemplate,
    general_open: String,
    general_separator: String,
    general_close: String,
    composite_template: String,
    append_newline: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfigBuilder::default().build()
    }
}

impl FormatConfig {
    /// Starts a builder with every field at its default.
    #[must_use]
    pub fn builder() -> FormatConfigBuilder {
        FormatConfigBuilder::default()
    }

    /// Builds a configuration from `source`.
    ///
    /// Never fails: a field that cannot be read is logged and keeps its
    /// default.
    pub fn from_source<S: ConfigSource + ?Sized>(source: &S) -> Self {
        info!("Configuring header format");
        let mut builder = FormatConfigBuilder::default();

        if let Some(raw) = read_string(source, keys::HEADERS) {
            builder = builder.headers(&raw);
        }
        if let Some(value) = read_string(source, keys::GENERAL_FORMAT) {
            builder = builder.general_template(value);
        }
        if let Some(value) = read_string(source, keys::GENERAL_OPEN) {
            builder = builder.general_open(value);
        }
        if let Some(value) = read_string(source, keys::GENERAL_SEPARATOR) {
            builder = builder.general_separator(value);
        }
        if let Some(value) = read_string(source, keys::GENERAL_CLOSE) {
            builder = builder.general_close(value);
        }
        if let Some(value) = read_string(source, keys::COMPOSITE_FORMAT) {
            builder = builder.composite_template(value);
        }
        if let Some(value) = read_bool(source, keys::APPEND_NEWLINE) {
            builder = builder.append_newline(value);
        }

        let config = builder.build();
        info!(
            "Header format configured: selection={:?} general={} composite={}",
            config.selection,
            config.has_general(),
            config.has_composite()
        );
        config
    }

    /// The header selection.
    pub fn selection(&self) -> &HeaderSelection {
        &self.selection
    }

    /// The raw general-format template.
    pub fn general_template(&self) -> &str {
        &self.general_template
    }

    pub(crate) fn general_pieces(&self) -> &GeneralTemplate {
        &self.general_pieces
    }

    /// The general-format opening wrapper.
    pub fn general_open(&self) -> &str {
        &self.general_open
    }

    /// The general-format separator.
    pub fn general_separator(&self) -> &str {
        &self.general_separator
    }

    /// The general-format closing wrapper.
    pub fn general_close(&self) -> &str {
        &self.general_close
    }

    /// The composite-format template; empty when not configured.
    pub fn composite_template(&self) -> &str {
        &self.composite_template
    }

    /// Whether a line feed follows each payload.
    pub fn append_newline(&self) -> bool {
        self.append_newline
    }

    /// Whether a general-format template is configured.
    pub fn has_general(&self) -> bool {
        !self.general_template.is_empty()
    }

    /// Whether a composite-format template is configured.
    pub fn has_composite(&self) -> bool {
        !self.composite_template.is_empty()
    }
}

/// Builder for [`FormatConfig`].
#[derive(Debug, Clone)]
pub struct FormatConfigBuilder {
    selection: HeaderSelection,
    general_template: String,
    general_open: String,
    general_separator: String,
    general_close: String,
    composite_template: String,
    append_newline: bool,
}

impl Default for FormatConfigBuilder {
    fn default() -> Self {
        Self {
            selection: HeaderSelection::None,
            general_template: DEFAULT_GENERAL_TEMPLATE.to_string(),
            general_open: DEFAULT_GENERAL_OPEN.to_string(),
            general_separator: DEFAULT_GENERAL_SEPARATOR.to_string(),
            general_close: DEFAULT_GENERAL_CLOSE.to_string(),
            composite_template: String::new(),
            append_newline: true,
        }
    }
}

impl FormatConfigBuilder {
    /// Sets the header selection.
    #[must_use]
    pub fn selection(mut self, selection: HeaderSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the selection from a `headers` option value.
    #[must_use]
    pub fn headers(self, raw: &str) -> Self {
        self.selection(HeaderSelection::parse(raw))
    }

    /// Sets the general-format template. An empty template disables it.
    #[must_use]
    pub fn general_template(mut self, template: impl Into<String>) -> Self {
        self.general_template = template.into();
        self
    }

    /// Sets the general-format opening wrapper.
    #[must_use]
    pub fn general_open(mut self, open: impl Into<String>) -> Self {
        self.general_open = open.into();
        self
    }

    /// Sets the general-format separator.
    #[must_use]
    pub fn general_separator(mut self, separator: impl Into<String>) -> Self {
        self.general_separator = separator.into();
        self
    }

    /// Sets the general-format closing wrapper.
    #[must_use]
    pub fn general_close(mut self, close: impl Into<String>) -> Self {
        self.general_close = close.into();
        self
    }

    /// Sets the composite-format template.
    #[must_use]
    pub fn composite_template(mut self, template: impl Into<String>) -> Self {
        self.composite_template = template.into();
        self
    }

    /// Sets whether a line feed follows each payload.
    #[must_use]
    pub fn append_newline(mut self, value: bool) -> Self {
        self.append_newline = value;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> FormatConfig {
        FormatConfig {
            general_pieces: GeneralTemplate::parse(&self.general_template),
            selection: self.selection,
            general_template: self.general_template,
            general_open: self.general_open,
            general_separator: self.general_separator,
            general_close: self.general_close,
            composite_template: self.composite_template,
            append_newline: self.append_newline,
        }
    }
}

fn read_string<S: ConfigSource + ?Sized>(source: &S, key: &str) -> Option<String> {
    match source.get_string(key) {
        Ok(value) => {
            trace!("{}= {:?}", key, value);
            value
        }
        Err(err) => {
            error!("Keeping default for '{}': {}", key, err);
            None
        }
    }
}

fn read_bool<S: ConfigSource + ?Sized>(source: &S, key: &str) -> Option<bool> {
    match source.get_bool(key) {
        Ok(value) => {
            trace!("{}= {:?}", key, value);
            value
        }
        Err(err) => {
            error!("Keeping default for '{}': {}", key, err);
            None
        }
    }
}

//! # hdrfmt core
//!
//! Formats the headers attached to a streamed record into a textual prefix
//! that is written immediately before the record's payload.
//!
//! Two formats are supported:
//!
//! - **General format**: a per-header template (`%H` = name, `%V` = value)
//!   applied to every selected header, joined by a separator and wrapped by
//!   an opening and closing string: `{filename=/opt/app.log;host=n1}`.
//! - **Composite format**: one free-form template referencing headers by
//!   name (`%name` = the name, `$name` = its value):
//!   `[ %filename = $filename ]` becomes `[ filename = /opt/app.log ]`.
//!   Composite format takes precedence when both are configured.
//!
//! ## Options
//!
//! | Key | Default | Meaning |
//! |---|---|---|
//! | `appendNewline` | `true` | line feed after each payload |
//! | `headers` | none | space-separated names, `*` for all |
//! | `headers_gf` | `%H=%V` | general template |
//! | `headers_gf_o` | `{` | general opening wrapper |
//! | `headers_gf_s` | `;` | general separator |
//! | `headers_gf_c` | `}` | general closing wrapper |
//! | `headers_cf` | empty | composite template |
//!
//! ## Usage
//!
//! ```
//! use hdrfmt_core::{Event, EventSerializer, HeaderSerializer, Options};
//!
//! let options = Options::new().with("headers", "host file");
//! let mut serializer = HeaderSerializer::from_source(Vec::new(), &options);
//!
//! let event = Event::new("started")
//!     .with_header("host", "n1")
//!     .with_header("file", "/var/log/app.log");
//! serializer.write(&event).unwrap();
//!
//! assert_eq!(
//!     serializer.into_inner(),
//!     b"{host=n1;file=/var/log/app.log}started\n".to_vec()
//! );
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod event;
mod headers;
mod options;
mod render;
mod serializer;
mod template;

pub use config::{
    keys, FormatConfig, FormatConfigBuilder, HeaderSelection, DEFAULT_GENERAL_CLOSE,
    DEFAULT_GENERAL_OPEN, DEFAULT_GENERAL_SEPARATOR, DEFAULT_GENERAL_TEMPLATE,
};
pub use error::{HeaderError, HeaderResult};
pub use event::Event;
pub use headers::Headers;
pub use options::{parse_assignment, ConfigSource, Options};
pub use render::{HeaderRenderer, RenderMode};
pub use serializer::{EventSerializer, HeaderSerializer, HeaderSerializerBuilder};
pub use template::{render_composite, GeneralTemplate};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

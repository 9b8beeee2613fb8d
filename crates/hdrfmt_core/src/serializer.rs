//! Event serializer that prefixes each payload with its formatted headers.

use crate::config::FormatConfig;
use crate::error::HeaderResult;
use crate::event::Event;
use crate::options::ConfigSource;
use crate::render::HeaderRenderer;
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info, trace};

/// The lifecycle a host drives an event serializer through.
///
/// # Invariants
///
/// - `write` emits exactly one record per call and never buffers
/// - errors from the output sink are returned unchanged
pub trait EventSerializer {
    /// Called once after the output stream has been created.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot be prepared.
    fn after_create(&mut self) -> HeaderResult<()>;

    /// Called after the output stream has been reopened.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot be prepared.
    fn after_reopen(&mut self) -> HeaderResult<()>;

    /// Serializes one event to the output stream.
    ///
    /// # Errors
    ///
    /// Returns [`crate::HeaderError::Io`] if writing to the sink fails.
    fn write(&mut self, event: &Event) -> HeaderResult<()>;

    /// Flushes the output stream.
    ///
    /// # Errors
    ///
    /// Returns [`crate::HeaderError::Io`] if the sink cannot be flushed.
    fn flush(&mut self) -> HeaderResult<()>;

    /// Called before the output stream is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot be finalized.
    fn before_close(&mut self) -> HeaderResult<()>;

    /// Whether the serializer can continue a reopened stream.
    fn supports_reopen(&self) -> bool;
}

/// Writes `prefix + body [+ '\n']` for every event.
pub struct HeaderSerializer<W: Write> {
    out: W,
    config: Arc<FormatConfig>,
}

impl<W: Write> HeaderSerializer<W> {
    /// Creates a serializer writing to `out` with `config`.
    pub fn new(out: W, config: impl Into<Arc<FormatConfig>>) -> Self {
        Self {
            out,
            config: config.into(),
        }
    }

    /// Creates a serializer configured from `source`.
    pub fn from_source<S: ConfigSource + ?Sized>(out: W, source: &S) -> Self {
        Self::new(out, FormatConfig::from_source(source))
    }

    /// Rebuilds the configuration from `source` and swaps it in.
    pub fn configure<S: ConfigSource + ?Sized>(&mut self, source: &S) {
        self.set_config(Arc::new(FormatConfig::from_source(source)));
    }

    /// Replaces the configuration used for subsequent writes.
    pub fn set_config(&mut self, config: Arc<FormatConfig>) {
        self.config = config;
    }

    /// The configuration in use.
    pub fn config(&self) -> &Arc<FormatConfig> {
        &self.config
    }

    /// A reference to the output sink.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consumes the serializer, returning the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSerializer for HeaderSerializer<W> {
    fn after_create(&mut self) -> HeaderResult<()> {
        debug!("after_create: nothing to do");
        Ok(())
    }

    fn after_reopen(&mut self) -> HeaderResult<()> {
        debug!("after_reopen: nothing to do");
        Ok(())
    }

    fn write(&mut self, event: &Event) -> HeaderResult<()> {
        let prefix = HeaderRenderer::render(self.config.as_ref(), event.headers());
        trace!("formattedHeaders= {}", prefix);

        self.out.write_all(prefix.as_bytes())?;
        self.out.write_all(event.body())?;
        if self.config.append_newline() {
            self.out.write_all(b"\n")?;
        }
        Ok(())
    }

    fn flush(&mut self) -> HeaderResult<()> {
        self.out.flush()?;
        Ok(())
    }

    fn before_close(&mut self) -> HeaderResult<()> {
        debug!("before_close: nothing to do");
        Ok(())
    }

    fn supports_reopen(&self) -> bool {
        false
    }
}

/// Builds boxed [`HeaderSerializer`]s for hosts that pick serializers by
/// name.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeaderSerializerBuilder;

impl HeaderSerializerBuilder {
    /// Builds a serializer for `out` configured from `source`.
    pub fn build<'w, W: Write + 'w>(
        &self,
        source: &dyn ConfigSource,
        out: W,
    ) -> Box<dyn EventSerializer + 'w> {
        info!("Building header serializer");
        Box::new(HeaderSerializer::from_source(out, source))
    }
}

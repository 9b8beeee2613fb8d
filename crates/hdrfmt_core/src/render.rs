//! Header prefix rendering.

use crate::config::{FormatConfig, HeaderSelection};
use crate::headers::Headers;
use crate::template::render_composite;
use tracing::{debug, trace, warn};

/// The format a render call will use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// The composite template, filled in once.
    Composite,
    /// The general template, once per header, wrapped and separated.
    General,
    /// Nothing is rendered.
    Empty,
}

/// Renders header prefixes from a [`FormatConfig`].
///
/// Stateless: every call depends only on the configuration and the header
/// map it is given.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeaderRenderer;

impl HeaderRenderer {
    /// Chooses the format for `config`.
    ///
    /// Composite wins whenever it is configured and the selection is not
    /// empty. Otherwise general format applies to an all-headers selection,
    /// or to a non-empty explicit selection when a general template exists.
    pub fn mode(config: &FormatConfig) -> RenderMode {
        let selected = !config.selection().is_empty();
        if config.has_composite() && selected {
            RenderMode::Composite
        } else if matches!(config.selection(), HeaderSelection::All)
            || (config.has_general() && selected)
        {
            RenderMode::General
        } else {
            RenderMode::Empty
        }
    }

    /// Renders the header prefix for one record.
    ///
    /// Never fails. Headers that are selected but absent are logged and
    /// either left as a verbatim `$name` token (composite) or skipped
    /// entirely (general).
    pub fn render<H: Headers + ?Sized>(config: &FormatConfig, headers: &H) -> String {
        let rendered = match Self::mode(config) {
            RenderMode::Composite => Self::composite(config, headers),
            RenderMode::General => Self::general(config, headers),
            RenderMode::Empty => String::new(),
        };
        debug!("formatted headers= {}", rendered);
        rendered
    }

    fn composite<H: Headers + ?Sized>(config: &FormatConfig, headers: &H) -> String {
        let names: Vec<&str> = match config.selection() {
            HeaderSelection::All => headers.entries().map(|(name, _)| name).collect(),
            selection => selection.names().iter().map(String::as_str).collect(),
        };

        for name in &names {
            if let Err(err) = headers.require(name) {
                warn!("composite format: {}", err);
            }
        }

        render_composite(config.composite_template(), &names, |name| headers.get(name))
    }

    fn general<H: Headers + ?Sized>(config: &FormatConfig, headers: &H) -> String {
        let template = config.general_pieces();
        let separator = config.general_separator();
        let mut out = String::from(config.general_open());

        match config.selection() {
            HeaderSelection::All => {
                for (name, value) in headers.entries() {
                    trace!("general format: {}= {}", name, value);
                    template.render_into(&mut out, name, value);
                    out.push_str(separator);
                }
            }
            selection => {
                for name in selection.names() {
                    match headers.require(name) {
                        Ok(value) => {
                            trace!("general format: {}= {}", name, value);
                            template.render_into(&mut out, name, value);
                            out.push_str(separator);
                        }
                        Err(err) => warn!("general format: {}", err),
                    }
                }
            }
        }

        // One trailing separator is dropped, even when it belongs to the opener.
        if !separator.is_empty() && out.ends_with(separator) {
            out.truncate(out.len() - separator.len());
        }
        out.push_str(config.general_close());
        out
    }
}

impl FormatConfig {
    /// Renders the header prefix for one record. See [`HeaderRenderer::render`].
    pub fn render<H: Headers + ?Sized>(&self, headers: &H) -> String {
        HeaderRenderer::render(self, headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::keys;
    use crate::options::Options;
    use indexmap::IndexMap;
    use std::collections::HashMap;

    fn headers(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_configuration_renders_nothing() {
        let config = FormatConfig::default();
        assert_eq!(HeaderRenderer::mode(&config), RenderMode::Empty);
        assert_eq!(config.render(&headers(&[("a", "1")])), "");
    }

    #[test]
    fn explicit_general_format() {
        let config = FormatConfig::builder().headers("a b").build();
        let out = config.render(&headers(&[("b", "2"), ("a", "1")]));
        assert_eq!(out, "{a=1;b=2}");
    }

    #[test]
    fn missing_header_is_skipped_without_separator() {
        let config = FormatConfig::builder().headers("a b").build();
        assert_eq!(config.render(&headers(&[("a", "1")])), "{a=1}");

        let config = FormatConfig::builder().headers("b a").build();
        assert_eq!(config.render(&headers(&[("a", "1")])), "{a=1}");
    }

    #[test]
    fn all_headers_missing_renders_bare_enclosure() {
        let config = FormatConfig::builder().headers("x y").build();
        assert_eq!(config.render(&headers(&[("a", "1")])), "{}");
    }

    #[test]
    fn opener_ending_in_separator_loses_it_when_nothing_renders() {
        let config = FormatConfig::builder()
            .headers("*")
            .general_open("|")
            .general_separator("|")
            .general_close("|")
            .build();
        assert_eq!(config.render(&headers(&[])), "|");
        assert_eq!(config.render(&headers(&[("a", "1")])), "|a=1|");
    }

    #[test]
    fn every_selected_header_missing_strips_opener_separator() {
        let config = FormatConfig::builder()
            .headers("b")
            .general_open("{;")
            .build();
        assert_eq!(config.render(&headers(&[("a", "1")])), "{}");
    }

    #[test]
    fn all_headers_general_format() {
        let config = FormatConfig::builder().headers("*").build();
        assert_eq!(HeaderRenderer::mode(&config), RenderMode::General);

        let out = config.render(&headers(&[("h1", "v1"), ("h2", "v2")]));
        assert_eq!(out, "{h1=v1;h2=v2}");
    }

    #[test]
    fn all_headers_with_empty_map() {
        let config = FormatConfig::builder().headers("*").build();
        assert_eq!(config.render(&headers(&[])), "{}");
    }

    #[test]
    fn all_headers_without_general_template() {
        let config = FormatConfig::builder()
            .headers("*")
            .general_template("")
            .build();
        assert_eq!(HeaderRenderer::mode(&config), RenderMode::General);
        assert_eq!(config.render(&headers(&[("a", "1"), ("b", "2")])), "{;}");
    }

    #[test]
    fn explicit_without_general_template_renders_nothing() {
        let config = FormatConfig::builder()
            .headers("a")
            .general_template("")
            .build();
        assert_eq!(HeaderRenderer::mode(&config), RenderMode::Empty);
        assert_eq!(config.render(&headers(&[("a", "1")])), "");
    }

    #[test]
    fn custom_enclosures_and_separator() {
        let config = FormatConfig::builder()
            .headers("filename hostname")
            .general_template(" %H=%V")
            .general_open("{")
            .general_separator(";")
            .general_close("}")
            .build();
        let out = config.render(&headers(&[
            ("filename", "/opt/app/logs/app.log"),
            ("hostname", "mymachine.domain.com"),
        ]));
        assert_eq!(
            out,
            "{ filename=/opt/app/logs/app.log; hostname=mymachine.domain.com}"
        );
    }

    #[test]
    fn empty_separator_concatenates() {
        let config = FormatConfig::builder()
            .headers("a b")
            .general_template("[%H:%V]")
            .general_open("")
            .general_separator("")
            .general_close("")
            .build();
        assert_eq!(config.render(&headers(&[("a", "1"), ("b", "2")])), "[a:1][b:2]");
    }

    #[test]
    fn separator_inside_last_segment_is_kept() {
        let config = FormatConfig::builder()
            .headers("a")
            .general_template("%H=%V;")
            .build();
        assert_eq!(config.render(&headers(&[("a", "1")])), "{a=1;}");
    }

    #[test]
    fn composite_format() {
        let config = FormatConfig::builder()
            .headers("x")
            .composite_template("[ %x = $x ]")
            .build();
        assert_eq!(HeaderRenderer::mode(&config), RenderMode::Composite);
        assert_eq!(config.render(&headers(&[("x", "/tmp/f")])), "[ x = /tmp/f ]");
    }

    #[test]
    fn composite_takes_precedence_over_general() {
        let options = Options::new()
            .with(keys::HEADERS, "filename hostname")
            .with(keys::GENERAL_FORMAT, "%H=%V")
            .with(
                keys::COMPOSITE_FORMAT,
                "{ %filename = $filename; %hostname = $hostname }",
            );
        let config = FormatConfig::from_source(&options);
        let out = config.render(&headers(&[
            ("hostname", "mymachine.domain.com"),
            ("filename", "/opt/app/logs/app.log"),
        ]));
        assert_eq!(
            out,
            "{ filename = /opt/app/logs/app.log; hostname = mymachine.domain.com }"
        );
    }

    #[test]
    fn composite_missing_header_left_verbatim() {
        let config = FormatConfig::builder()
            .headers("a b")
            .composite_template("%a=$a %b=$b")
            .build();
        assert_eq!(config.render(&headers(&[("a", "1")])), "a=1 b=$b");
    }

    #[test]
    fn composite_requires_a_selection() {
        let config = FormatConfig::builder()
            .composite_template("[ %x = $x ]")
            .build();
        assert_eq!(HeaderRenderer::mode(&config), RenderMode::Empty);
        assert_eq!(config.render(&headers(&[("x", "1")])), "");
    }

    #[test]
    fn composite_with_all_headers_uses_record_names() {
        let config = FormatConfig::builder()
            .headers("*")
            .composite_template("<$host|$file|$user>")
            .build();
        let out = config.render(&headers(&[("host", "n1"), ("file", "f.log")]));
        assert_eq!(out, "<n1|f.log|$user>");
    }

    #[test]
    fn works_with_hash_map() {
        let config = FormatConfig::builder().headers("k").build();
        let map: HashMap<String, String> = HashMap::from([("k".to_string(), "v".to_string())]);
        assert_eq!(HeaderRenderer::render(&config, &map), "{k=v}");
    }

    #[test]
    fn rendering_is_repeatable() {
        let config = FormatConfig::builder().headers("*").build();
        let map = headers(&[("a", "1"), ("b", "2"), ("c", "3")]);
        assert_eq!(config.render(&map), config.render(&map));
    }
}

//! Render test vectors.
//!
//! Each vector pins the exact prefix bytes a downstream consumer of the
//! serialized stream relies on. Other implementations can load them from
//! [`all_vectors_json`].

use serde::{Deserialize, Serialize};

/// A render case: options and headers in, prefix out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderVector {
    /// Unique identifier for this vector.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Option key/value pairs.
    pub options: Vec<(String, String)>,
    /// Header name/value pairs, in map order.
    pub headers: Vec<(String, String)>,
    /// Expected rendered prefix.
    pub expected: String,
}

fn vector(
    id: &str,
    description: &str,
    options: &[(&str, &str)],
    headers: &[(&str, &str)],
    expected: &str,
) -> RenderVector {
    fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
    RenderVector {
        id: id.into(),
        description: description.into(),
        options: owned(options),
        headers: owned(headers),
        expected: expected.into(),
    }
}

/// Render vectors covering both formats and the missing-header policy.
pub fn render_vectors() -> Vec<RenderVector> {
    vec![
        vector(
            "empty_config",
            "No selection and no overrides renders nothing",
            &[],
            &[("a", "1")],
            "",
        ),
        vector(
            "general_all_headers",
            "Star selection renders every header in map order",
            &[("headers", "*")],
            &[("h1", "v1"), ("h2", "v2")],
            "{h1=v1;h2=v2}",
        ),
        vector(
            "general_explicit_missing",
            "A missing header leaves neither a segment nor a separator",
            &[("headers", "a b")],
            &[("a", "1")],
            "{a=1}",
        ),
        vector(
            "general_explicit_order",
            "Explicit selection follows list order, not map order",
            &[("headers", "b a")],
            &[("a", "1"), ("b", "2")],
            "{b=2;a=1}",
        ),
        vector(
            "general_custom_wrappers",
            "Blanks in templates and wrappers are significant",
            &[
                ("headers", "filename hostname"),
                ("headers_gf", " %H=%V"),
                ("headers_gf_o", "{"),
                ("headers_gf_s", ";"),
                ("headers_gf_c", "}"),
            ],
            &[
                ("filename", "/opt/app/logs/app.log"),
                ("hostname", "mymachime.domain.com"),
            ],
            "{ filename=/opt/app/logs/app.log; hostname=mymachime.domain.com}",
        ),
        vector(
            "general_empty_wrappers",
            "Explicitly empty wrappers are kept empty",
            &[
                ("headers", "a b"),
                ("headers_gf", "%H:%V "),
                ("headers_gf_o", ""),
                ("headers_gf_s", ""),
                ("headers_gf_c", ""),
            ],
            &[("a", "1"), ("b", "2")],
            "a:1 b:2 ",
        ),
        vector(
            "composite_basic",
            "Composite replaces %name and $name",
            &[("headers", "x"), ("headers_cf", "[ %x = $x ]")],
            &[("x", "/tmp/f")],
            "[ x = /tmp/f ]",
        ),
        vector(
            "composite_precedence",
            "Composite wins over general when both are set",
            &[
                ("headers", "filename hostname"),
                ("headers_gf", "%H=%V"),
                (
                    "headers_cf",
                    "{ %filename = $filename; %hostname = $hostname }",
                ),
            ],
            &[
                ("filename", "/opt/app/logs/app.log"),
                ("hostname", "mymachime.domain.com"),
            ],
            "{ filename = /opt/app/logs/app.log; hostname = mymachime.domain.com }",
        ),
        vector(
            "composite_missing",
            "A missing header keeps its $name token",
            &[("headers", "a b"), ("headers_cf", "%a=$a %b=$b")],
            &[("a", "1")],
            "a=1 b=$b",
        ),
        vector(
            "composite_no_selection",
            "Composite without a selection renders nothing",
            &[("headers_cf", "[ %x = $x ]")],
            &[("x", "1")],
            "",
        ),
        vector(
            "composite_literal_sigils",
            "Sigils that start no selected name are copied as-is",
            &[("headers", "p"), ("headers_cf", "$p%% $$$p")],
            &[("p", "50")],
            "50%% $$50",
        ),
    ]
}

/// Returns all vectors as pretty-printed JSON.
///
/// # Panics
///
/// Panics if serialization fails, which it cannot for these types.
pub fn all_vectors_json() -> String {
    serde_json::to_string_pretty(&render_vectors()).expect("Failed to serialize vectors")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hdrfmt_core::{FormatConfig, Options};
    use indexmap::IndexMap;

    #[test]
    fn test_render_vectors() {
        for vector in render_vectors() {
            let options: Options = vector.options.iter().cloned().collect();
            let headers: IndexMap<String, String> = vector.headers.iter().cloned().collect();

            let out = FormatConfig::from_source(&options).render(&headers);
            assert_eq!(
                out, vector.expected,
                "Vector {} failed: {}",
                vector.id, vector.description
            );
        }
    }

    #[test]
    fn vector_ids_are_unique() {
        let vectors = render_vectors();
        let mut ids: Vec<&str> = vectors.iter().map(|v| v.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), vectors.len());
    }

    #[test]
    fn test_all_vectors_json() {
        let json = all_vectors_json();
        assert!(json.contains("general_all_headers"));
        assert!(json.contains("composite_basic"));
    }
}

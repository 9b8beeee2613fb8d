//! Property-based test generators using proptest.
//!
//! Names and values avoid the placeholder sigils and the default
//! enclosure/separator characters so that rendered output can be taken
//! apart again in assertions.

use indexmap::IndexMap;
use proptest::prelude::*;

/// Strategy for generating header names.
pub fn header_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_.]{0,11}").expect("Invalid regex")
}

/// Strategy for generating header values.
pub fn header_value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9/._ -]{0,16}").expect("Invalid regex")
}

/// Strategy for generating header maps with unique names.
pub fn header_map_strategy(max_len: usize) -> impl Strategy<Value = IndexMap<String, String>> {
    prop::collection::vec((header_name_strategy(), header_value_strategy()), 0..=max_len)
        .prop_map(|pairs| pairs.into_iter().collect())
}

/// Strategy for generating a header map together with an explicit
/// selection drawn partly from its names and partly from absent names.
pub fn map_and_selection_strategy(
) -> impl Strategy<Value = (IndexMap<String, String>, Vec<String>)> {
    (header_map_strategy(6), prop::collection::vec(header_name_strategy(), 0..3)).prop_flat_map(
        |(map, extra)| {
            let mut pool: Vec<String> = map.keys().cloned().collect();
            for name in extra {
                if !pool.contains(&name) {
                    pool.push(name);
                }
            }
            let len = pool.len();
            (
                Just(map),
                prop::sample::subsequence(pool, 0..=len).prop_shuffle(),
            )
        },
    )
}

/// Strategy for generating a `headers` option value with irregular spacing.
pub fn spaced_selection_strategy() -> impl Strategy<Value = (String, Vec<String>)> {
    prop::collection::vec((header_name_strategy(), 1usize..4), 1..5).prop_map(|parts| {
        let names: Vec<String> = parts.iter().map(|(name, _)| name.clone()).collect();
        let raw = parts
            .iter()
            .map(|(name, gap)| format!("{}{}", " ".repeat(*gap), name))
            .collect::<String>();
        (raw, names)
    })
}

/// Case budget for the renderer property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Cases per property.
    pub cases: u32,
    /// Shrink iterations allowed on failure.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// A smaller budget for the generator self-checks.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Converts to a [`ProptestConfig`], keeping proptest's other defaults.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #![proptest_config(PropTestConfig::quick().to_proptest_config())]

        #[test]
        fn header_names_are_placeholder_safe(name in header_name_strategy()) {
            prop_assert!(!name.is_empty());
            prop_assert!(!name.contains(['%', '$', ' ', ';', '=']));
        }

        #[test]
        fn selection_is_drawn_from_pool((map, selection) in map_and_selection_strategy()) {
            prop_assert!(selection.len() <= map.len() + 2);
            let mut seen = std::collections::HashSet::new();
            for name in &selection {
                prop_assert!(seen.insert(name.clone()), "duplicate {}", name);
            }
        }

        #[test]
        fn spaced_selection_lists_names((raw, names) in spaced_selection_strategy()) {
            prop_assert!(raw.starts_with(' '));
            prop_assert_eq!(raw.split(' ').filter(|s| !s.is_empty()).count(), names.len());
        }
    }
}

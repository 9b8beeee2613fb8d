//! Read-only access to a record's header map.

use crate::error::{HeaderError, HeaderResult};
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A flat string-to-string header map attached to a record.
///
/// In all-headers mode the renderer emits entries in the order
/// [`Headers::entries`] yields them; the engine never sorts them.
pub trait Headers {
    /// Returns the value of header `name`, if present.
    fn get(&self, name: &str) -> Option<&str>;

    /// Iterates over all headers in the map's native order.
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_>;

    /// Returns the value of header `name`.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::HeaderMissing`] if the header is absent.
    fn require(&self, name: &str) -> HeaderResult<&str> {
        self.get(name)
            .ok_or_else(|| HeaderError::header_missing(name))
    }

    /// Number of headers.
    fn header_count(&self) -> usize {
        self.entries().count()
    }
}

impl<S: BuildHasher> Headers for IndexMap<String, String, S> {
    fn get(&self, name: &str) -> Option<&str> {
        IndexMap::get(self, name).map(String::as_str)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    fn header_count(&self) -> usize {
        self.len()
    }
}

impl<S: BuildHasher> Headers for HashMap<String, String, S> {
    fn get(&self, name: &str) -> Option<&str> {
        HashMap::get(self, name).map(String::as_str)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    fn header_count(&self) -> usize {
        self.len()
    }
}

impl Headers for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<&str> {
        BTreeMap::get(self, name).map(String::as_str)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    fn header_count(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_map_keeps_insertion_order() {
        let mut headers = IndexMap::new();
        headers.insert("zeta".to_string(), "1".to_string());
        headers.insert("alpha".to_string(), "2".to_string());

        let keys: Vec<&str> = headers.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
        assert_eq!(headers.header_count(), 2);
    }

    #[test]
    fn require_reports_missing_header() {
        let headers: HashMap<String, String> =
            HashMap::from([("host".to_string(), "node-1".to_string())]);

        assert_eq!(headers.require("host").unwrap(), "node-1");
        let err = headers.require("file").unwrap_err();
        assert!(matches!(err, HeaderError::HeaderMissing { ref name } if name == "file"));
    }

    #[test]
    fn btree_map_iterates_sorted() {
        let headers: BTreeMap<String, String> = [("b", "2"), ("a", "1")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let keys: Vec<&str> = headers.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(Headers::get(&headers, "a"), Some("1"));
    }
}

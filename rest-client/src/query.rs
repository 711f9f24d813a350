//! Query-string marshaling helpers

/// Ordered set of query parameters for a single request
///
/// The upstream API takes scalar parameters, optional parameters that
/// are omitted entirely when unset, and multi-value parameters that
/// repeat the key once per element. `Query` covers all three forms.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a required parameter
    pub fn pair(mut self, name: &str, value: impl ToString) -> Self {
        self.pairs.push((name.to_string(), value.to_string()));
        self
    }

    /// Append a parameter only when a value is present
    pub fn opt<T: ToString>(mut self, name: &str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.pairs.push((name.to_string(), value.to_string()));
        }
        self
    }

    /// Append a multi-value parameter, repeating the key per element
    ///
    /// An empty slice appends nothing.
    pub fn multi<T: ToString>(mut self, name: &str, values: &[T]) -> Self {
        for value in values {
            self.pairs.push((name.to_string(), value.to_string()));
        }
        self
    }

    /// True when no parameters were added
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate the pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Percent-encode a value for use as a single URL path segment
pub fn encode_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_preserves_order() {
        let query = Query::new().pair("supportsSync", true).pair("userId", "abc");
        let pairs: Vec<_> = query.iter().collect();
        assert_eq!(
            pairs,
            vec![("supportsSync", "true"), ("userId", "abc")]
        );
    }

    #[test]
    fn test_opt_none_appends_nothing() {
        let query = Query::new().opt::<u32>("limit", None);
        assert!(query.is_empty());
    }

    #[test]
    fn test_opt_some_appends_value() {
        let query = Query::new().opt("limit", Some(200));
        let pairs: Vec<_> = query.iter().collect();
        assert_eq!(pairs, vec![("limit", "200")]);
    }

    #[test]
    fn test_multi_repeats_key() {
        let query = Query::new().multi("fields", &["Genres", "Overview"]);
        let pairs: Vec<_> = query.iter().collect();
        assert_eq!(pairs, vec![("fields", "Genres"), ("fields", "Overview")]);
    }

    #[test]
    fn test_multi_empty_slice_appends_nothing() {
        let query = Query::new().multi::<&str>("fields", &[]);
        assert!(query.is_empty());
    }

    #[test]
    fn test_encode_segment_escapes_reserved_characters() {
        assert_eq!(encode_segment("Hard Rock"), "Hard%20Rock");
        assert_eq!(encode_segment("R&B/Soul"), "R%26B%2FSoul");
        assert_eq!(encode_segment("plain"), "plain");
    }
}

use std::fmt;

/// The trimmed text of one search invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        SearchQuery(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(SearchQuery::new("  smart watch \n").as_str(), "smart watch");
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert!(SearchQuery::new(" \t ").is_empty());
        assert!(!SearchQuery::new("a").is_empty());
    }
}

use urlencoding::encode;

/// Percent-encode key/value pairs into `k=v&k=v`.
pub fn build_query_string(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_characters_are_encoded() {
        let qs = build_query_string(&[("query".into(), "a&b=c ?#/%".into())]);
        assert_eq!(qs, "query=a%26b%3Dc%20%3F%23%2F%25");
    }

    #[test]
    fn test_pairs_joined_with_ampersand() {
        let qs = build_query_string(&[("q".into(), "tv".into()), ("page".into(), "2".into())]);
        assert_eq!(qs, "q=tv&page=2");
        assert_eq!(build_query_string(&[]), "");
    }
}

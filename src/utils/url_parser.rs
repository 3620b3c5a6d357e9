/// Host part of a URL, scheme and path stripped. Empty input gives "".
pub fn hostname_from_url(u: &str) -> String {
    let s = u.trim();
    let without_scheme = s.split_once("://").map(|(_, rest)| rest).unwrap_or(s);
    without_scheme.split('/').next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hostname_from_url() {
        assert_eq!(hostname_from_url("http://localhost:5000/api"), "localhost:5000");
        assert_eq!(hostname_from_url("search.internal"), "search.internal");
        assert_eq!(hostname_from_url("   "), "");
    }
}

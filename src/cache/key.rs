//! Cache Key Module
//!
//! Derives deterministic cache keys from a URL and its parameters.

// == Generate Cache Key ==
/// Builds `"<url>?<name=value&...>"` with parameters sorted by name.
///
/// Two parameter sets that contain the same pairs produce the same key no
/// matter what order they were supplied in. Pairs sharing a name are ordered
/// by value.
///
/// Values are concatenated as-is. A value containing `&`, `=` or `?` can make
/// two different parameter sets render to the same key.
///
/// # Example
/// ```
/// use response_cache::cache::generate_cache_key;
///
/// let key = generate_cache_key("/api/posts", [("page", "2"), ("limit", "10")]);
/// assert_eq!(key, "/api/posts?limit=10&page=2");
/// ```
pub fn generate_cache_key<I, K, V>(url: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut pairs: Vec<(K, V)> = params.into_iter().collect();
    pairs.sort_by(|(ak, av), (bk, bv)| {
        ak.as_ref()
            .cmp(bk.as_ref())
            .then_with(|| av.as_ref().cmp(bv.as_ref()))
    });

    let rendered: Vec<String> = pairs
        .iter()
        .map(|(name, value)| format!("{}={}", name.as_ref(), value.as_ref()))
        .collect();

    format!("{}?{}", url, rendered.join("&"))
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_key_sorts_params() {
        let key = generate_cache_key("/api/content", [("b", "2"), ("a", "1")]);
        assert_eq!(key, "/api/content?a=1&b=2");
    }

    #[test]
    fn test_key_without_params() {
        let key = generate_cache_key("/api/content", Vec::<(String, String)>::new());
        assert_eq!(key, "/api/content?");
    }

    #[test]
    fn test_key_order_independent() {
        let first = generate_cache_key("/u", [("x", "1"), ("y", "2"), ("z", "3")]);
        let second = generate_cache_key("/u", [("z", "3"), ("x", "1"), ("y", "2")]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_key_from_hashmap() {
        let mut params = HashMap::new();
        params.insert("topic".to_string(), "rust".to_string());
        params.insert("lang".to_string(), "en".to_string());

        let key = generate_cache_key("/api/content", &params);
        assert_eq!(key, "/api/content?lang=en&topic=rust");
    }

    #[test]
    fn test_key_duplicate_names_sorted_by_value() {
        let first = generate_cache_key("/t", [("tag", "b"), ("tag", "a")]);
        let second = generate_cache_key("/t", [("tag", "a"), ("tag", "b")]);
        assert_eq!(first, "/t?tag=a&tag=b");
        assert_eq!(first, second);
    }

    #[test]
    fn test_key_values_not_escaped() {
        // Known collision: an '&' inside a value looks like a separator.
        let packed = generate_cache_key("/q", [("a", "1&b=2")]);
        let split = generate_cache_key("/q", [("a", "1"), ("b", "2")]);
        assert_eq!(packed, split);
    }
}

/// Upper bound on autocomplete results
pub const MAX_SEARCH_RESULTS: usize = 20;

/// Rank known keys against an already normalized query
///
/// Keys starting with the query come first, then keys that only contain it. Within
/// each group the order of `keys` is kept. There is no fuzzy matching or scoring.
pub fn rank_keys<'a>(keys: &'a [String], normalized_query: &str, limit: usize) -> Vec<&'a str> {
    if normalized_query.is_empty() {
        return Vec::new();
    }

    let mut prefixed = Vec::new();
    let mut containing = Vec::new();

    for key in keys {
        if key.starts_with(normalized_query) {
            prefixed.push(key.as_str());
            if prefixed.len() == limit {
                break;
            }
        } else if key.contains(normalized_query) {
            containing.push(key.as_str());
        }
    }

    prefixed.into_iter().chain(containing).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_prefix_matches_before_substring_matches() {
        let keys = keys(&["peanut butter", "butter", "apple butter", "buttermilk", "milk"]);

        assert_eq!(
            rank_keys(&keys, "butter", MAX_SEARCH_RESULTS),
            ["butter", "buttermilk", "peanut butter", "apple butter"]
        );
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let keys = keys(&["butter", "milk"]);
        assert!(rank_keys(&keys, "", MAX_SEARCH_RESULTS).is_empty());
    }

    #[test]
    fn test_no_match() {
        let keys = keys(&["butter", "milk"]);
        assert!(rank_keys(&keys, "saffron", MAX_SEARCH_RESULTS).is_empty());
    }

    #[test]
    fn test_limit_applies_across_groups() {
        let mut values: Vec<String> = (0..15).map(|i| format!("salt {i}")).collect();
        values.extend((0..15).map(|i| format!("sea salt {i}")));

        let ranked = rank_keys(&values, "salt", MAX_SEARCH_RESULTS);
        assert_eq!(ranked.len(), MAX_SEARCH_RESULTS);
        assert!(ranked[..15].iter().all(|key| key.starts_with("salt")));
        assert!(ranked[15..].iter().all(|key| key.starts_with("sea salt")));
    }

    #[test]
    fn test_limit_reached_by_prefix_group_alone() {
        let mut values = vec!["sea salt".to_string()];
        values.extend((0..30).map(|i| format!("salt {i}")));

        let ranked = rank_keys(&values, "salt", 5);
        assert_eq!(ranked, ["salt 0", "salt 1", "salt 2", "salt 3", "salt 4"]);
    }
}

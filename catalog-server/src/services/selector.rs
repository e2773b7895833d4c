//! Selector Parsing
//!
//! Decodes the path segment of `GET /v1/{url}` into a category slug plus an
//! ordered facet-key → tokens mapping. The encoding joins segments with a
//! double underscore; each facet segment is `key_value`:
//!
//! ```text
//! shoes__color_red__color_blue__size_42
//! ```

use indexmap::IndexMap;

/// Decoded selector path
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSelector {
    /// Category slug (first segment)
    pub url: String,
    /// Facet key → raw value tokens, insertion order preserved per key
    pub filters: IndexMap<String, Vec<String>>,
    /// Every value token across all keys, in path order
    pub url_values: Vec<String>,
}

impl ParsedSelector {
    pub fn has_tokens(&self) -> bool {
        !self.url_values.is_empty()
    }
}

/// Parse an encoded slug+selector path
///
/// Malformed facet segments (no `_` separator, or empty key) are skipped
/// silently. Numeric-looking tokens stay strings; the selector pipeline is
/// string-only end to end.
pub fn parse(raw: &str) -> ParsedSelector {
    let mut segments = raw.split("__");

    let url = segments.next().unwrap_or_default().to_string();

    let mut filters: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut url_values = Vec::new();

    for segment in segments {
        let Some((key, value)) = segment.split_once('_') else {
            continue;
        };
        if key.is_empty() {
            continue;
        }
        filters
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
        url_values.push(value.to_string());
    }

    ParsedSelector {
        url,
        filters,
        url_values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_slug_has_no_tokens() {
        let parsed = parse("shoes");
        assert_eq!(parsed.url, "shoes");
        assert!(parsed.filters.is_empty());
        assert!(!parsed.has_tokens());
    }

    #[test]
    fn values_accumulate_per_key_in_order() {
        let parsed = parse("shoes__color_red__size_42__color_blue");
        assert_eq!(parsed.url, "shoes");
        assert_eq!(
            parsed.filters.get("color"),
            Some(&vec!["red".to_string(), "blue".to_string()])
        );
        assert_eq!(parsed.filters.get("size"), Some(&vec!["42".to_string()]));
        // keys keep first-seen order
        let keys: Vec<_> = parsed.filters.keys().cloned().collect();
        assert_eq!(keys, vec!["color", "size"]);
        assert_eq!(parsed.url_values, vec!["red", "42", "blue"]);
    }

    #[test]
    fn malformed_segments_are_skipped() {
        // "red" has no separator, "_blue" has an empty key
        let parsed = parse("shoes__red___blue__color_green");
        assert_eq!(parsed.url, "shoes");
        assert_eq!(parsed.url_values, vec!["green"]);
    }

    #[test]
    fn value_may_contain_underscores() {
        let parsed = parse("shoes__color_dark_red");
        assert_eq!(
            parsed.filters.get("color"),
            Some(&vec!["dark_red".to_string()])
        );
    }

    #[test]
    fn numeric_tokens_stay_strings() {
        let parsed = parse("shoes__size_42");
        assert_eq!(parsed.url_values, vec!["42".to_string()]);
    }
}

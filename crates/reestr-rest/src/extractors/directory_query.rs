//! Query string of the directory listing.

use serde::Deserialize;
use utoipa::IntoParams;

/// `?search=&page=` parameters.
///
/// Both are optional. `page` is kept as text so a malformed value falls
/// back to the first page instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DirectoryQuery {
    /// Case-insensitive substring to look for in names and attributes.
    #[serde(default)]
    pub search: Option<String>,
    /// 1-based page number.
    #[serde(default)]
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
}

impl DirectoryQuery {
    /// The search term, empty when absent.
    #[must_use]
    pub fn search_term(&self) -> &str {
        self.search.as_deref().unwrap_or_default()
    }

    /// The requested page.
    ///
    /// Reads the leading integer of the value ("3", " 3 ", "3rd" are all
    /// page 3). Missing, unparsable and zero values mean page 1; negative
    /// numbers are passed through and clamped downstream.
    #[must_use]
    pub fn page_number(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(leading_integer)
            .filter(|page| *page != 0)
            .unwrap_or(1)
    }
}

fn leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(digits.len(), |(i, _)| i);

    if end == 0 {
        return None;
    }

    // Out-of-range values saturate instead of failing.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(raw: Option<&str>) -> i64 {
        DirectoryQuery {
            search: None,
            page: raw.map(str::to_string),
        }
        .page_number()
    }

    #[test]
    fn test_missing_page_is_first() {
        assert_eq!(page(None), 1);
        assert_eq!(page(Some("")), 1);
    }

    #[test]
    fn test_numeric_page() {
        assert_eq!(page(Some("4")), 4);
        assert_eq!(page(Some(" 12 ")), 12);
        assert_eq!(page(Some("+2")), 2);
    }

    #[test]
    fn test_garbage_page_is_first() {
        assert_eq!(page(Some("abc")), 1);
        assert_eq!(page(Some("-")), 1);
        assert_eq!(page(Some("0")), 1);
    }

    #[test]
    fn test_leading_digits_are_used() {
        assert_eq!(page(Some("3rd")), 3);
        assert_eq!(page(Some("7.9")), 7);
    }

    #[test]
    fn test_negative_page_passes_through() {
        assert_eq!(page(Some("-5")), -5);
    }

    #[test]
    fn test_huge_page_saturates() {
        assert_eq!(page(Some("99999999999999999999999")), i64::MAX);
    }

    #[test]
    fn test_search_term_defaults_to_empty() {
        assert_eq!(DirectoryQuery::default().search_term(), "");
    }
}

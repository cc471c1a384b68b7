//! # Order Text Parsing
//!
//! Splits a spoken-style order line into a product name and its extras.
//!
//! ```text
//!   "Medium Coffee with extra milk, special roast coffee"
//!            │          │         │
//!            │   reserved word    └── extras, split on ','
//!            ▼
//!   product = "medium coffee"
//!   extras  = ["extra milk", "special roast coffee"]
//! ```
//!
//! The whole line is lowercased first. `with` only counts as the reserved
//! word when it stands alone: whitespace before it, whitespace or the end of
//! the line after it. "without" or a line starting with "with" are plain
//! product text.

use crate::error::CoreResult;
use crate::validation::validate_order_text;
use crate::WITH_KEYWORD;

/// A parsed order line, before it is matched against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOrder {
    pub product: String,
    pub extras: Vec<String>,
}

/// Parses an order line.
///
/// ## Errors
/// `ValidationError::Required` for a blank line.
///
/// ## Example
/// ```rust
/// use coffee_core::parse::parse_order;
///
/// let parsed = parse_order("Large Coffee with foamed milk").unwrap();
/// assert_eq!(parsed.product, "large coffee");
/// assert_eq!(parsed.extras, ["foamed milk"]);
/// ```
pub fn parse_order(text: &str) -> CoreResult<ParsedOrder> {
    let text = validate_order_text(text)?;

    let Some(at) = find_with_keyword(&text) else {
        return Ok(ParsedOrder {
            product: text,
            extras: Vec::new(),
        });
    };

    let product = text[..at].trim().to_string();

    // skip the keyword and one separating character
    let mut rest = text[at + WITH_KEYWORD.len()..].chars();
    rest.next();
    let list = rest.as_str();

    let mut segments: Vec<&str> = list.split(',').collect();
    // empty segments at the end are dropped, unless the list itself is empty
    if !list.is_empty() {
        while segments.last().is_some_and(|segment| segment.is_empty()) {
            segments.pop();
        }
    }
    let extras = segments
        .into_iter()
        .map(|extra| extra.trim().to_string())
        .collect();

    Ok(ParsedOrder { product, extras })
}

/// Byte offset of the first standalone `with`.
fn find_with_keyword(text: &str) -> Option<usize> {
    text.match_indices(WITH_KEYWORD)
        .map(|(at, _)| at)
        .find(|&at| {
            let before = text[..at].chars().next_back();
            let after = text[at + WITH_KEYWORD.len()..].chars().next();
            before.is_some_and(char::is_whitespace) && after.map_or(true, char::is_whitespace)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};

    #[test]
    fn test_plain_product() {
        let parsed = parse_order("  Orange Juice ").unwrap();
        assert_eq!(parsed.product, "orange juice");
        assert!(parsed.extras.is_empty());
    }

    #[test]
    fn test_product_with_extras() {
        let parsed = parse_order("medium coffee with extra milk,  special roast coffee").unwrap();
        assert_eq!(parsed.product, "medium coffee");
        assert_eq!(parsed.extras, ["extra milk", "special roast coffee"]);
    }

    #[test]
    fn test_only_first_with_is_reserved() {
        let parsed = parse_order("small coffee with foamed milk with love").unwrap();
        assert_eq!(parsed.product, "small coffee");
        assert_eq!(parsed.extras, ["foamed milk with love"]);
    }

    #[test]
    fn test_with_inside_a_word_is_not_reserved() {
        let parsed = parse_order("coffee without milk").unwrap();
        assert_eq!(parsed.product, "coffee without milk");
        assert!(parsed.extras.is_empty());

        let parsed = parse_order("with milk").unwrap();
        assert_eq!(parsed.product, "with milk");
        assert!(parsed.extras.is_empty());
    }

    #[test]
    fn test_trailing_with_yields_empty_extra() {
        let parsed = parse_order("medium coffee with").unwrap();
        assert_eq!(parsed.product, "medium coffee");
        assert_eq!(parsed.extras, [""]);
    }

    #[test]
    fn test_empty_segments_are_kept() {
        let parsed = parse_order("medium coffee with extra milk,,foamed milk").unwrap();
        assert_eq!(parsed.extras, ["extra milk", "", "foamed milk"]);
    }

    #[test]
    fn test_trailing_empty_segments_are_dropped() {
        let parsed = parse_order("medium coffee with extra milk,").unwrap();
        assert_eq!(parsed.extras, ["extra milk"]);

        let parsed = parse_order("medium coffee with extra milk,,").unwrap();
        assert_eq!(parsed.extras, ["extra milk"]);

        let parsed = parse_order("medium coffee with ,").unwrap();
        assert!(parsed.extras.is_empty());
    }

    #[test]
    fn test_blank_segment_before_trailing_comma_is_kept() {
        let parsed = parse_order("medium coffee with extra milk, ,").unwrap();
        assert_eq!(parsed.extras, ["extra milk", ""]);
    }

    #[test]
    fn test_blank_line_is_rejected() {
        assert!(matches!(
            parse_order(""),
            Err(CoreError::Validation(ValidationError::Required { .. }))
        ));
        assert!(parse_order("   ").is_err());
    }
}

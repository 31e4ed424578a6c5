//! Typed query state for requests rendered without client script.

use crate::context::{parse_query_string, RawQuery};

/// Query parameter names understood by the product block.
pub mod keys {
    pub const INCREMENT_QTY: &str = "incrementQty";
    pub const DECREMENT_QTY: &str = "decrementQty";
    pub const SELECTED_IMAGE_IDX: &str = "selectedImageIdx";
    pub const ADD_TO_CART: &str = "addToCart";
    pub const OPEN_CART: &str = "openCart";
    pub const SHOW_FULL_DESCRIPTION: &str = "showFullDescription";
}

/// Query parameters that seed component state on AMP requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub increment_qty: bool,
    pub decrement_qty: bool,
    pub selected_image_idx: Option<usize>,
    /// Product id the visitor asked to add to the cart.
    pub add_to_cart: Option<String>,
    pub open_cart: bool,
    pub show_full_description: Option<bool>,
}

impl QueryParams {
    /// Extract the block's parameters from a decoded query.
    pub fn from_query(query: &RawQuery) -> Self {
        let get = |key: &str| query.get(key).map(String::as_str);

        Self {
            increment_qty: get(keys::INCREMENT_QTY).is_some_and(flag),
            decrement_qty: get(keys::DECREMENT_QTY).is_some_and(flag),
            selected_image_idx: get(keys::SELECTED_IMAGE_IDX).and_then(|v| v.trim().parse().ok()),
            add_to_cart: get(keys::ADD_TO_CART)
                .filter(|v| !v.is_empty())
                .map(String::from),
            open_cart: get(keys::OPEN_CART).is_some_and(flag),
            show_full_description: get(keys::SHOW_FULL_DESCRIPTION).map(flag),
        }
    }

    /// Parse from a raw query string (without the leading `?`).
    pub fn from_query_string(qs: &str) -> Self {
        Self::from_query(&parse_query_string(qs))
    }
}

/// Presence flag: any value except an explicit `false`/`0` counts as set.
fn flag(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "false" | "0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_params() {
        let q = QueryParams::from_query_string(
            "incrementQty=true&decrementQty=true&selectedImageIdx=2&addToCart=abc&openCart=true",
        );
        assert!(q.increment_qty);
        assert!(q.decrement_qty);
        assert_eq!(q.selected_image_idx, Some(2));
        assert_eq!(q.add_to_cart.as_deref(), Some("abc"));
        assert!(q.open_cart);
        assert_eq!(q.show_full_description, None);
    }

    #[test]
    fn test_presence_flags() {
        assert!(QueryParams::from_query_string("incrementQty").increment_qty);
        assert!(QueryParams::from_query_string("incrementQty=1").increment_qty);
        assert!(!QueryParams::from_query_string("incrementQty=false").increment_qty);
        assert!(!QueryParams::from_query_string("incrementQty=0").increment_qty);
        assert!(!QueryParams::from_query_string("").increment_qty);
    }

    #[test]
    fn test_invalid_image_index_is_ignored() {
        assert_eq!(
            QueryParams::from_query_string("selectedImageIdx=abc").selected_image_idx,
            None
        );
        assert_eq!(
            QueryParams::from_query_string("selectedImageIdx=-1").selected_image_idx,
            None
        );
    }

    #[test]
    fn test_show_full_description() {
        let q = QueryParams::from_query_string("showFullDescription=false");
        assert_eq!(q.show_full_description, Some(false));
        let q = QueryParams::from_query_string("showFullDescription=true");
        assert_eq!(q.show_full_description, Some(true));
    }
}

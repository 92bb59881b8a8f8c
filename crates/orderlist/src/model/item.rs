//! Item access for the controller.
//!
//! The controller treats items as opaque values. It only looks inside them
//! in two ways: reading a named field for filtering, and comparing two items
//! for equality when locating them in the collection or the selection.
//! Both are pluggable.

use std::fmt;
use std::sync::Arc;

/// Trait for items that can expose named fields to the filter.
///
/// Implement this for domain types that should be filterable directly.
/// Return `None` for unknown fields; an item whose configured fields are all
/// `None` never matches a positive filter.
///
/// # Example
///
/// ```
/// use orderlist::model::FieldAccess;
///
/// #[derive(Clone, PartialEq)]
/// struct Product {
///     name: String,
///     code: String,
/// }
///
/// impl FieldAccess for Product {
///     fn field(&self, name: &str) -> Option<String> {
///         match name {
///             "name" => Some(self.name.clone()),
///             "code" => Some(self.code.clone()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait FieldAccess {
    /// Returns the textual value of a field.
    fn field(&self, name: &str) -> Option<String>;
}

/// Plain strings expose themselves under every field name.
impl FieldAccess for String {
    fn field(&self, _name: &str) -> Option<String> {
        Some(self.clone())
    }
}

/// JSON values resolve dotted paths such as `address.city`.
///
/// Strings are returned verbatim, numbers and booleans are formatted, `null`
/// and missing keys resolve to `None`. Arrays can be indexed numerically
/// (`tags.0`).
impl FieldAccess for serde_json::Value {
    fn field(&self, name: &str) -> Option<String> {
        let mut current = self;
        for segment in name.split('.') {
            current = match current {
                serde_json::Value::Object(map) => map.get(segment)?,
                serde_json::Value::Array(values) => values.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }

        match current {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Type alias for a field extractor function.
pub type FieldExtractor<T> = Arc<dyn Fn(&T, &str) -> Option<String> + Send + Sync>;

/// Type alias for an equality function.
pub type EqualityFn<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// The equality used to locate items.
///
/// Defaults to `PartialEq`. Items with duplicate values are indistinguishable
/// under value equality; supply a key-based comparator (see
/// [`ItemComparator::by_key`]) when the collection may hold duplicates.
pub struct ItemComparator<T> {
    eq: EqualityFn<T>,
}

impl<T> Clone for ItemComparator<T> {
    fn clone(&self) -> Self {
        Self {
            eq: Arc::clone(&self.eq),
        }
    }
}

impl<T> fmt::Debug for ItemComparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemComparator").finish_non_exhaustive()
    }
}

impl<T: PartialEq + 'static> Default for ItemComparator<T> {
    fn default() -> Self {
        Self::value()
    }
}

impl<T: 'static> ItemComparator<T> {
    /// Creates a comparator from an arbitrary function.
    pub fn new<F>(eq: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self { eq: Arc::new(eq) }
    }

    /// Compares items by a derived key.
    pub fn by_key<K, F>(key: F) -> Self
    where
        K: PartialEq,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::new(move |a, b| key(a) == key(b))
    }
}

impl<T> ItemComparator<T> {
    /// Returns `true` if the two items are considered the same item.
    pub fn eq(&self, a: &T, b: &T) -> bool {
        (self.eq)(a, b)
    }

    /// Finds the first position of `item` in `items`.
    pub fn position(&self, item: &T, items: &[T]) -> Option<usize> {
        items.iter().position(|candidate| self.eq(candidate, item))
    }
}

impl<T: PartialEq + 'static> ItemComparator<T> {
    /// Compares items with `PartialEq`.
    pub fn value() -> Self {
        Self::new(|a: &T, b: &T| a == b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_field_paths() {
        let item = json!({
            "name": "Bamboo Watch",
            "price": 65,
            "inStock": true,
            "address": { "city": "Lisbon" },
            "tags": ["wood", "watch"],
            "note": null
        });

        assert_eq!(item.field("name").as_deref(), Some("Bamboo Watch"));
        assert_eq!(item.field("price").as_deref(), Some("65"));
        assert_eq!(item.field("inStock").as_deref(), Some("true"));
        assert_eq!(item.field("address.city").as_deref(), Some("Lisbon"));
        assert_eq!(item.field("tags.1").as_deref(), Some("watch"));
        assert_eq!(item.field("note"), None);
        assert_eq!(item.field("missing"), None);
        assert_eq!(item.field("name.first"), None);
    }

    #[test]
    fn test_string_field() {
        let item = "Apple".to_string();
        assert_eq!(item.field("anything").as_deref(), Some("Apple"));
    }

    #[test]
    fn test_comparator_by_key() {
        #[derive(Debug)]
        struct Row {
            id: u32,
            label: &'static str,
        }

        let cmp = ItemComparator::by_key(|row: &Row| row.id);
        let rows = vec![
            Row { id: 1, label: "a" },
            Row { id: 2, label: "b" },
        ];

        let probe = Row { id: 2, label: "other" };
        assert_eq!(cmp.position(&probe, &rows), Some(1));
        assert_eq!(rows[1].label, "b");
        assert!(!cmp.eq(&rows[0], &probe));
    }

    #[test]
    fn test_value_comparator_finds_first_duplicate() {
        let cmp = ItemComparator::<&str>::value();
        let items = ["x", "y", "x"];
        assert_eq!(cmp.position(&"x", &items), Some(0));
        assert_eq!(cmp.position(&"z", &items), None);
    }
}

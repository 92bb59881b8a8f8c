//! Selection state for the order list.
//!
//! This module provides [`OrderSelection`], which tracks the chosen subset
//! of an ordered collection and implements the click semantics of the
//! widget.
//!
//! # Ordering
//!
//! The selection is a sequence, not a set. Items added through
//! [`toggle`](OrderSelection::toggle) are inserted at the position that
//! matches their order in the collection, so a multi-selection built by
//! clicking reads top-to-bottom regardless of click order. Items set via
//! [`set_items`](OrderSelection::set_items) keep the order they were given
//! in; the move commands iterate the selection in this stored order.
//!
//! # Example
//!
//! ```
//! use orderlist::model::{ItemComparator, OrderSelection};
//!
//! let collection = vec!["A", "B", "C", "D"];
//! let mut selection = OrderSelection::new();
//! let cmp = ItemComparator::value();
//!
//! selection.toggle(&"C", 2, true, &collection, &cmp);
//! selection.toggle(&"A", 0, true, &collection, &cmp);
//! assert_eq!(selection.items(), &["A", "C"]);
//! ```

use super::item::ItemComparator;

/// How a click should combine with the existing selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickMode {
    /// Meta-key selection: a plain click replaces the selection, a click
    /// with a modifier adds or removes the item.
    MetaKey {
        /// A meta/ctrl/shift modifier was held.
        modifier: bool,
    },
    /// Every click toggles the item without clearing the rest.
    Toggle,
}

impl ClickMode {
    /// Resolves the click mode from the widget settings and event state.
    ///
    /// A click that follows a touch is always treated as a toggle.
    pub fn resolve(meta_key_selection: bool, touched: bool, modifier: bool) -> Self {
        if meta_key_selection && !touched {
            Self::MetaKey { modifier }
        } else {
            Self::Toggle
        }
    }
}

/// Tracks selected items in insertion order.
#[derive(Debug, Clone)]
pub struct OrderSelection<T> {
    items: Vec<T>,
}

impl<T> Default for OrderSelection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> OrderSelection<T> {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected items in stored order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the number of selected items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replaces the selection, keeping the given order.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> OrderSelection<T> {
    /// Finds the position of `item` within the selection.
    pub fn position(&self, item: &T, cmp: &ItemComparator<T>) -> Option<usize> {
        cmp.position(item, &self.items)
    }

    /// Returns `true` if `item` is selected.
    pub fn is_selected(&self, item: &T, cmp: &ItemComparator<T>) -> bool {
        self.position(item, cmp).is_some()
    }

    /// Toggles `item`.
    ///
    /// A selected item is removed. Otherwise the item is inserted in
    /// collection order, after clearing the selection when `additive` is
    /// false. `index` is the item's position in `collection`.
    pub fn toggle(
        &mut self,
        item: &T,
        index: usize,
        additive: bool,
        collection: &[T],
        cmp: &ItemComparator<T>,
    ) {
        if let Some(pos) = self.position(item, cmp) {
            self.items.remove(pos);
            return;
        }
        if !additive {
            self.items.clear();
        }
        self.insert_ordered(item.clone(), index, collection, cmp);
    }

    /// Applies a click on `item` according to `mode`.
    pub fn click(
        &mut self,
        item: &T,
        index: usize,
        mode: ClickMode,
        collection: &[T],
        cmp: &ItemComparator<T>,
    ) {
        let selected = self.position(item, cmp);
        match (mode, selected) {
            (ClickMode::MetaKey { modifier: true }, _) | (ClickMode::Toggle, _) => {
                self.toggle(item, index, true, collection, cmp);
            }
            (ClickMode::MetaKey { modifier: false }, Some(_)) if self.items.len() == 1 => {
                self.items.clear();
            }
            (ClickMode::MetaKey { modifier: false }, _) => {
                self.items.clear();
                self.insert_ordered(item.clone(), index, collection, cmp);
            }
        }
    }

    /// Inserts `item` before the first selected entry that sits later in the
    /// collection than `index`, or appends it.
    ///
    /// Entries that are no longer in the collection never trigger the
    /// insertion.
    fn insert_ordered(&mut self, item: T, index: usize, collection: &[T], cmp: &ItemComparator<T>) {
        let at = self.items.iter().position(|selected| {
            cmp.position(selected, collection)
                .is_some_and(|selected_index| selected_index > index)
        });
        match at {
            Some(at) => self.items.insert(at, item),
            None => self.items.push(item),
        }
    }
}

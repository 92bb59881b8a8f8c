//! The authoritative ordered collection.
//!
//! `OrderStore<T>` owns the items of an order list and is the single source
//! of truth for their order. Every mutation goes through a method on the
//! store and bumps its [`version`](OrderStore::version), so observers can
//! tell whether the order changed without comparing the items themselves.

use orderlist_core::logging::targets;

use super::item::ItemComparator;

/// Moves the element at `from` to `to`, shifting the elements in between.
///
/// Returns `true` if the slice changed. Out-of-range indices leave the
/// slice untouched.
pub fn move_item_in_slice<T>(items: &mut [T], from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else {
        items[to..=from].rotate_right(1);
    }
    true
}

/// An owned, versioned, ordered sequence of items.
///
/// # Example
///
/// ```
/// use orderlist::model::{ItemComparator, OrderStore};
///
/// let mut store = OrderStore::new(vec!["a", "b", "c"], ItemComparator::value());
/// assert_eq!(store.locate(&"c"), Some(2));
///
/// store.swap(0, 2);
/// assert_eq!(store.items(), &["c", "b", "a"]);
/// assert_eq!(store.version(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct OrderStore<T> {
    items: Vec<T>,
    comparator: ItemComparator<T>,
    version: u64,
}

impl<T> OrderStore<T> {
    /// Creates a store over `items` using `comparator` for lookups.
    pub fn new(items: Vec<T>, comparator: ItemComparator<T>) -> Self {
        Self {
            items,
            comparator,
            version: 0,
        }
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the items in their current order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the item at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns the mutation counter.
    ///
    /// Starts at zero and increases by one for every mutation that changed
    /// the order or replaced the items.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns the comparator used by [`locate`](Self::locate).
    pub fn comparator(&self) -> &ItemComparator<T> {
        &self.comparator
    }

    /// Replaces the comparator used for lookups.
    pub fn set_comparator(&mut self, comparator: ItemComparator<T>) {
        self.comparator = comparator;
    }

    /// Finds the position of `item`, scanning from the start.
    pub fn locate(&self, item: &T) -> Option<usize> {
        self.comparator.position(item, &self.items)
    }

    /// Replaces all items.
    pub fn replace(&mut self, items: Vec<T>) {
        tracing::debug!(
            target: targets::STORE,
            old_len = self.items.len(),
            new_len = items.len(),
            "replacing items"
        );
        self.items = items;
        self.bump();
    }

    /// Provides mutable access to the whole sequence via a closure.
    ///
    /// The version is bumped unconditionally.
    pub fn mutate<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Vec<T>) -> R,
    {
        let result = f(&mut self.items);
        self.bump();
        result
    }

    /// Swaps two items. Out-of-range indices are ignored.
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a >= self.items.len() || b >= self.items.len() || a == b {
            return false;
        }
        self.items.swap(a, b);
        self.bump();
        true
    }

    /// Moves the item at `from` to `to`. Out-of-range indices are ignored.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        let moved = move_item_in_slice(&mut self.items, from, to);
        if moved {
            self.bump();
        }
        moved
    }

    /// Removes the item at `index` and reinserts it at the front.
    pub fn move_to_front(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.move_item(index, 0)
    }

    /// Removes the item at `index` and appends it.
    pub fn move_to_back(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.move_item(index, self.items.len() - 1)
    }

    /// Consumes the store, returning the items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
        tracing::trace!(target: targets::STORE, version = self.version, "store mutated");
    }
}

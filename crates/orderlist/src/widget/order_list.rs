//! The order-list controller.
//!
//! [`OrderList`] owns an ordered collection, a selection over it and an
//! optional filter, and keeps the three consistent while the user clicks,
//! types, runs move commands and drags items around. It renders nothing:
//! a presentation layer forwards input to the `on_*` entry points and
//! redraws when the signals fire.
//!
//! # Example
//!
//! ```
//! use orderlist::config::OrderListConfig;
//! use orderlist::widget::{KeyboardModifiers, OrderList};
//!
//! let config = OrderListConfig {
//!     filter_by: Some("name".to_string()),
//!     ..Default::default()
//! };
//! let mut list = OrderList::new(vec![
//!     "Apple".to_string(),
//!     "Banana".to_string(),
//!     "Cherry".to_string(),
//! ])
//! .with_config(config);
//!
//! list.reordered.connect(|event| {
//!     println!("{:?} moved {} item(s)", event.cause, event.moved);
//! });
//!
//! list.on_item_click(&"Cherry".to_string(), 2, KeyboardModifiers::NONE);
//! list.move_up();
//! assert_eq!(list.value(), &["Apple", "Cherry", "Banana"]);
//! ```

use std::fmt;
use std::sync::Arc;

use orderlist_core::logging::targets;
use orderlist_core::{InstanceId, Signal, next_instance_id};

use crate::config::OrderListConfig;
use crate::model::{
    ClickMode, Edge, FieldAccess, FieldExtractor, FilterEngine, FilterMatchMode, ItemComparator,
    MoveDirection, MoveOutcome, OrderSelection, OrderStore, move_item_in_slice, move_selection,
};

use super::events::{DropEvent, Key, KeyboardModifiers, ReorderCause, ReorderEvent, ScrollHint};
use super::navigation::{ItemNavigator, MaskNavigator};
use super::templates::{EmptySlots, SlotTemplates};

/// Ordered, filterable, multi-select list controller.
///
/// Rows passed to and reported by the controller are indices into the
/// collection ([`value`](Self::value)), except for [`DropEvent`] indices,
/// which refer to the list as displayed.
pub struct OrderList<T> {
    id: InstanceId,
    config: OrderListConfig,
    store: OrderStore<T>,
    selection: OrderSelection<T>,
    filter: FilterEngine<T>,
    extractor: FieldExtractor<T>,
    navigator: Option<Box<dyn ItemNavigator>>,
    item_touched: bool,

    // Signals
    /// Emitted when a click or key press changes the selection. Parameter is
    /// the new selection.
    pub selection_changed: Signal<Vec<T>>,
    /// Emitted after a move command or a drop.
    pub reordered: Signal<ReorderEvent<T>>,
    /// Emitted by [`filter`](Self::filter). Parameter is the displayed items.
    pub filter_applied: Signal<Vec<T>>,
    /// Emitted after a move command with the row that should be scrolled into view.
    pub scroll_hint: Signal<ScrollHint>,
    /// Emitted when keyboard navigation moves focus. Parameter is the row.
    pub focus_requested: Signal<usize>,
}

impl<T> OrderList<T>
where
    T: Clone + PartialEq + FieldAccess + Send + 'static,
{
    /// Creates a controller over `items`, reading filter fields through
    /// [`FieldAccess`].
    pub fn new(items: Vec<T>) -> Self {
        Self::with_extractor(items, |item: &T, field: &str| item.field(field))
    }
}

impl<T> OrderList<T>
where
    T: Clone + PartialEq + Send + 'static,
{
    /// Creates a controller over `items` with a custom field extractor.
    pub fn with_extractor<F>(items: Vec<T>, extractor: F) -> Self
    where
        F: Fn(&T, &str) -> Option<String> + Send + Sync + 'static,
    {
        Self::from_parts(items, ItemComparator::value(), Arc::new(extractor))
    }
}

impl<T> OrderList<T>
where
    T: Clone + Send + 'static,
{
    /// Creates a controller from its parts.
    ///
    /// This is the only constructor available for items without `PartialEq`.
    pub fn from_parts(
        items: Vec<T>,
        comparator: ItemComparator<T>,
        extractor: FieldExtractor<T>,
    ) -> Self {
        let id = next_instance_id();
        tracing::debug!(target: targets::STORE, %id, len = items.len(), "order list created");

        let config = OrderListConfig::default();
        Self {
            id,
            filter: Self::filter_engine(&config),
            config,
            store: OrderStore::new(items, comparator),
            selection: OrderSelection::new(),
            extractor,
            navigator: None,
            item_touched: false,
            selection_changed: Signal::new(),
            reordered: Signal::new(),
            filter_applied: Signal::new(),
            scroll_hint: Signal::new(),
            focus_requested: Signal::new(),
        }
    }

    /// Applies `config`, builder style.
    pub fn with_config(mut self, config: OrderListConfig) -> Self {
        self.set_config(config);
        self
    }

    /// Replaces the item comparator, builder style.
    pub fn with_comparator(mut self, comparator: ItemComparator<T>) -> Self {
        self.set_comparator(comparator);
        self
    }

    /// Installs a keyboard navigator, builder style.
    pub fn with_navigator(mut self, navigator: impl ItemNavigator + 'static) -> Self {
        self.set_navigator(Some(Box::new(navigator)));
        self
    }

    fn filter_engine(config: &OrderListConfig) -> FilterEngine<T> {
        FilterEngine::new(
            config.filter_fields(),
            config.filter_match_mode,
            config.filter_locale.clone(),
        )
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// The identifier of this instance.
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// The current configuration.
    pub fn config(&self) -> &OrderListConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// The current query is kept and re-applied with the new filter options.
    pub fn set_config(&mut self, config: OrderListConfig) {
        self.filter.set_fields(config.filter_fields());
        self.filter.set_match_mode(config.filter_match_mode);
        self.filter.set_locale(config.filter_locale.clone());
        self.config = config;
        self.refilter();
    }

    /// Returns `true` if the controller rejects mutating gestures.
    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Enables or disables the controller.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    /// Sets whether plain clicks replace the selection.
    pub fn set_meta_key_selection(&mut self, enabled: bool) {
        self.config.meta_key_selection = enabled;
    }

    /// Enables or disables drag and drop.
    pub fn set_dragdrop(&mut self, enabled: bool) {
        self.config.dragdrop = enabled;
    }

    /// Sets the comma-separated filter fields.
    pub fn set_filter_by(&mut self, filter_by: Option<String>) {
        self.config.filter_by = filter_by;
        self.filter.set_fields(self.config.filter_fields());
        self.refilter();
    }

    /// Sets the filter match mode.
    pub fn set_filter_match_mode(&mut self, mode: FilterMatchMode) {
        self.config.filter_match_mode = mode;
        self.filter.set_match_mode(mode);
        self.refilter();
    }

    /// Sets the locale used to lowercase queries and field values.
    pub fn set_filter_locale(&mut self, locale: Option<String>) {
        self.config.filter_locale = locale.clone();
        self.filter.set_locale(locale);
        self.refilter();
    }

    /// Replaces the item comparator.
    pub fn set_comparator(&mut self, comparator: ItemComparator<T>) {
        self.store.set_comparator(comparator);
    }

    /// Installs or removes the keyboard navigator.
    ///
    /// Without a navigator, arrow keys step over rows hidden by the filter.
    pub fn set_navigator(&mut self, navigator: Option<Box<dyn ItemNavigator>>) {
        self.navigator = navigator;
    }

    // =========================================================================
    // Collection and selection
    // =========================================================================

    /// The items in their current order.
    pub fn value(&self) -> &[T] {
        self.store.items()
    }

    /// Replaces the collection.
    ///
    /// The selection is kept as is, including entries that are no longer in
    /// the collection.
    pub fn set_value(&mut self, items: Vec<T>) {
        self.store.replace(items);
        self.refilter();
    }

    /// Mutates the collection in place.
    pub fn mutate_value<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Vec<T>) -> R,
    {
        let result = self.store.mutate(f);
        self.refilter();
        result
    }

    /// The mutation counter of the collection.
    pub fn version(&self) -> u64 {
        self.store.version()
    }

    /// Finds the row of `item`.
    pub fn locate(&self, item: &T) -> Option<usize> {
        self.store.locate(item)
    }

    /// The selected items.
    pub fn selection(&self) -> &[T] {
        self.selection.items()
    }

    /// Replaces the selection without emitting `selection_changed`.
    pub fn set_selection(&mut self, items: Vec<T>) {
        self.selection.set_items(items);
    }

    /// Returns `true` if `item` is selected.
    pub fn is_selected(&self, item: &T) -> bool {
        self.selection.is_selected(item, self.store.comparator())
    }

    /// Toggles `item` at `row` and emits `selection_changed`.
    ///
    /// With `additive` false, selecting an item clears the others. Ignored
    /// while disabled.
    pub fn toggle_selection(&mut self, item: &T, row: usize, additive: bool) {
        if self.is_disabled() {
            tracing::debug!(target: targets::SELECTION, row, "toggle ignored, list disabled");
            return;
        }
        self.selection
            .toggle(item, row, additive, self.store.items(), self.store.comparator());
        self.selection_changed.emit(self.selection.items().to_vec());
    }

    /// Handles a click on `item` at `row`.
    pub fn on_item_click(&mut self, item: &T, row: usize, modifiers: KeyboardModifiers) {
        if self.is_disabled() {
            tracing::debug!(target: targets::SELECTION, row, "click ignored, list disabled");
            return;
        }

        let touched = std::mem::take(&mut self.item_touched);
        let mode = ClickMode::resolve(
            self.config.meta_key_selection,
            touched,
            modifiers.extends_selection(),
        );
        self.selection
            .click(item, row, mode, self.store.items(), self.store.comparator());

        tracing::debug!(
            target: targets::SELECTION,
            row,
            ?mode,
            selected = self.selection.len(),
            "item clicked"
        );
        self.selection_changed.emit(self.selection.items().to_vec());
    }

    /// Handles the end of a touch on an item.
    ///
    /// The next click is treated as a toggle, whatever the modifiers and
    /// the meta-key setting say.
    pub fn on_item_touch_end(&mut self) {
        self.item_touched = true;
    }

    /// Handles a key press on `item` at `row`.
    ///
    /// Returns `true` if the key was handled.
    pub fn on_item_keydown(
        &mut self,
        key: Key,
        item: &T,
        row: usize,
        modifiers: KeyboardModifiers,
    ) -> bool {
        match key {
            Key::ArrowDown => {
                if let Some(next) = self.adjacent_row(row, Direction::Next) {
                    self.focus_requested.emit(next);
                }
                true
            }
            Key::ArrowUp => {
                if let Some(previous) = self.adjacent_row(row, Direction::Previous) {
                    self.focus_requested.emit(previous);
                }
                true
            }
            key if key.is_activation() => {
                self.on_item_click(item, row, modifiers);
                true
            }
            _ => false,
        }
    }

    fn adjacent_row(&self, row: usize, direction: Direction) -> Option<usize> {
        let fallback;
        let navigator: &dyn ItemNavigator = match self.navigator.as_deref() {
            Some(navigator) => navigator,
            None => {
                fallback = MaskNavigator::new(
                    self.store
                        .items()
                        .iter()
                        .map(|item| self.is_item_visible(item))
                        .collect(),
                );
                &fallback
            }
        };
        match direction {
            Direction::Next => navigator.next_visible(row),
            Direction::Previous => navigator.previous_visible(row),
        }
    }

    // =========================================================================
    // Move commands
    // =========================================================================

    /// Returns `true` when move commands are unavailable: the list is
    /// disabled or nothing is selected.
    pub fn move_disabled(&self) -> bool {
        self.is_disabled() || self.selection.is_empty()
    }

    /// Moves the selected items one row up.
    pub fn move_up(&mut self) -> Option<MoveOutcome> {
        self.run_move(MoveDirection::Up)
    }

    /// Moves the selected items to the top.
    pub fn move_top(&mut self) -> Option<MoveOutcome> {
        self.run_move(MoveDirection::Top)
    }

    /// Moves the selected items one row down.
    pub fn move_down(&mut self) -> Option<MoveOutcome> {
        self.run_move(MoveDirection::Down)
    }

    /// Moves the selected items to the bottom.
    pub fn move_bottom(&mut self) -> Option<MoveOutcome> {
        self.run_move(MoveDirection::Bottom)
    }

    /// Runs a move command. Returns `None` if moving is disabled.
    fn run_move(&mut self, direction: MoveDirection) -> Option<MoveOutcome> {
        if self.move_disabled() {
            tracing::debug!(target: targets::MOVE, ?direction, "move rejected");
            return None;
        }

        let outcome = move_selection(&mut self.store, self.selection.items(), direction);
        self.refilter();

        self.reordered.emit(ReorderEvent {
            cause: ReorderCause::from(direction),
            items: self.selection.items().to_vec(),
            moved: outcome.moved,
        });
        self.scroll_hint.emit(self.scroll_target(direction.edge()));
        Some(outcome)
    }

    fn scroll_target(&self, edge: Edge) -> ScrollHint {
        let mut rows = self
            .store
            .items()
            .iter()
            .enumerate()
            .filter(|(_, item)| self.is_selected(item) && self.is_item_visible(item))
            .map(|(row, _)| row);
        let row = match edge {
            Edge::Start => rows.next(),
            Edge::End => rows.last(),
        };
        ScrollHint { edge, row }
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Filters the list by `query` and emits `filter_applied`.
    ///
    /// The query is trimmed and lowercased. An empty query, or a list with
    /// no filter fields configured, shows every item.
    pub fn filter(&mut self, query: &str) {
        self.filter.set_query(query);
        self.filter.recompute(self.store.items(), &self.extractor);
        self.filter_applied.emit(self.visible_items().to_vec());
    }

    /// Clears the query.
    pub fn reset_filter(&mut self) {
        tracing::debug!(target: targets::FILTER, "filter reset");
        self.filter.reset();
    }

    /// The normalized query, if one is set.
    pub fn filter_query(&self) -> Option<&str> {
        self.filter.query()
    }

    /// Returns `true` while a query narrows the displayed items.
    pub fn is_filtering(&self) -> bool {
        self.filter.is_active()
    }

    /// The items as displayed.
    pub fn visible_items(&self) -> &[T] {
        if self.filter.is_active() {
            self.filter.visible().unwrap_or_default()
        } else {
            self.store.items()
        }
    }

    /// Returns `true` if `item` is displayed.
    pub fn is_item_visible(&self, item: &T) -> bool {
        self.filter.is_item_visible(item, self.store.comparator())
    }

    /// Returns `true` if nothing is displayed.
    pub fn is_empty(&self) -> bool {
        self.visible_items().is_empty()
    }

    /// Decides which empty-state messages `templates` should show.
    pub fn empty_slots<F>(&self, templates: &SlotTemplates<F>) -> EmptySlots {
        templates.empty_slots(self.is_empty(), self.is_filtering())
    }

    fn refilter(&mut self) {
        if self.filter.is_active() {
            self.filter.recompute(self.store.items(), &self.extractor);
        }
    }

    // =========================================================================
    // Drag and drop
    // =========================================================================

    /// Handles a completed drag gesture.
    ///
    /// Returns `true` if the collection was reordered.
    pub fn on_drop(&mut self, event: DropEvent<T>) -> bool {
        let DropEvent {
            previous_index,
            current_index,
            item,
        } = event;

        if previous_index == current_index {
            return false;
        }
        if self.is_disabled() || !self.config.dragdrop {
            tracing::debug!(target: targets::DRAG, "drop ignored, drag and drop unavailable");
            return false;
        }

        let displayed = self.visible_items();
        let in_range = previous_index < displayed.len() && current_index < displayed.len();
        if !in_range || !self.store.comparator().eq(&displayed[previous_index], &item) {
            tracing::warn!(
                target: targets::DRAG,
                previous_index,
                current_index,
                len = displayed.len(),
                "drop ignored, indices do not match the displayed list"
            );
            return false;
        }

        let (from, to) = if self.filter.is_active() {
            let target = &displayed[current_index];
            match (self.store.locate(&item), self.store.locate(target)) {
                (Some(from), Some(to)) => (from, to),
                _ => {
                    tracing::warn!(
                        target: targets::DRAG,
                        previous_index,
                        current_index,
                        "drop ignored, dragged item or drop target not found"
                    );
                    return false;
                }
            }
        } else {
            (previous_index, current_index)
        };

        if let Some(visible) = self.filter.visible_mut() {
            move_item_in_slice(visible, previous_index, current_index);
        }
        let moved = self.store.move_item(from, to);

        tracing::debug!(target: targets::DRAG, from, to, moved, "item dropped");
        self.reordered.emit(ReorderEvent {
            cause: ReorderCause::Drop,
            items: vec![item],
            moved: usize::from(moved),
        });
        moved
    }
}

impl<T> fmt::Debug for OrderList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderList")
            .field("id", &self.id)
            .field("len", &self.store.len())
            .field("version", &self.store.version())
            .field("selected", &self.selection.len())
            .field("query", &self.filter.query())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(OrderList<String>: Send, Sync);

#[derive(Clone, Copy)]
enum Direction {
    Next,
    Previous,
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn list(items: &[&str]) -> OrderList<String> {
        OrderList::new(strings(items))
    }

    fn filterable(items: &[&str]) -> OrderList<String> {
        list(items).with_config(OrderListConfig {
            filter_by: Some("name".to_string()),
            dragdrop: true,
            ..Default::default()
        })
    }

    fn click(list: &mut OrderList<String>, item: &str, modifiers: KeyboardModifiers) {
        let item = item.to_string();
        let row = list.locate(&item).unwrap();
        list.on_item_click(&item, row, modifiers);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = list(&["A"]);
        let b = list(&["A"]);
        assert_ne!(a.id(), b.id());
        assert!(a.id().to_string().starts_with("ol_id_"));
    }

    #[test]
    fn test_click_emits_selection() {
        let mut l = list(&["A", "B", "C"]);
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();
        l.selection_changed.connect(move |selection| {
            received_clone.lock().push(selection.clone());
        });

        click(&mut l, "B", KeyboardModifiers::NONE);
        click(&mut l, "A", KeyboardModifiers::CTRL);

        assert_eq!(*received.lock(), vec![strings(&["B"]), strings(&["A", "B"])]);
    }

    #[test]
    fn test_touch_forces_toggle_once() {
        let mut l = list(&["A", "B", "C"]);
        click(&mut l, "A", KeyboardModifiers::NONE);

        l.on_item_touch_end();
        click(&mut l, "C", KeyboardModifiers::NONE);
        assert_eq!(l.selection(), strings(&["A", "C"]).as_slice());

        // flag is consumed, plain click replaces again
        click(&mut l, "B", KeyboardModifiers::NONE);
        assert_eq!(l.selection(), strings(&["B"]).as_slice());
    }

    #[test]
    fn test_meta_key_selection_disabled() {
        let mut l = list(&["A", "B", "C"]);
        l.set_meta_key_selection(false);
        click(&mut l, "C", KeyboardModifiers::NONE);
        click(&mut l, "A", KeyboardModifiers::NONE);
        assert_eq!(l.selection(), strings(&["A", "C"]).as_slice());
        click(&mut l, "C", KeyboardModifiers::NONE);
        assert_eq!(l.selection(), strings(&["A"]).as_slice());
    }

    #[test]
    fn test_disabled_rejects_gestures() {
        let mut l = list(&["A", "B", "C"]);
        l.set_selection(strings(&["B"]));
        l.set_disabled(true);

        click(&mut l, "C", KeyboardModifiers::NONE);
        assert_eq!(l.selection(), strings(&["B"]).as_slice());

        assert!(l.move_disabled());
        assert_eq!(l.move_up(), None);
        assert_eq!(l.version(), 0);

        l.set_dragdrop(true);
        assert!(!l.on_drop(DropEvent::new(0, 2, "A".to_string())));
        assert_eq!(l.value(), strings(&["A", "B", "C"]).as_slice());
    }

    #[test]
    fn test_move_emits_reorder_and_scroll_hint() {
        let mut l = list(&["A", "B", "C", "D"]);
        l.set_selection(strings(&["B", "D"]));

        let reorders = Arc::new(Mutex::new(Vec::new()));
        let hints = Arc::new(Mutex::new(Vec::new()));
        let reorders_clone = reorders.clone();
        let hints_clone = hints.clone();
        l.reordered.connect(move |event| reorders_clone.lock().push(event.clone()));
        l.scroll_hint.connect(move |hint| hints_clone.lock().push(*hint));

        let outcome = l.move_down().unwrap();
        assert!(outcome.stopped_at_edge);
        assert_eq!(l.value(), strings(&["A", "C", "B", "D"]).as_slice());

        let reorders = reorders.lock();
        assert_eq!(reorders.len(), 1);
        assert_eq!(reorders[0].cause, ReorderCause::MoveDown);
        assert_eq!(reorders[0].items, strings(&["B", "D"]));
        assert_eq!(reorders[0].moved, 1);

        assert_eq!(
            *hints.lock(),
            vec![ScrollHint {
                edge: Edge::End,
                row: Some(3)
            }]
        );
    }

    #[test]
    fn test_move_with_empty_selection_is_rejected() {
        let mut l = list(&["A", "B"]);
        let count = Arc::new(Mutex::new(0));
        let count_clone = count.clone();
        l.reordered.connect(move |_| *count_clone.lock() += 1);

        assert!(l.move_disabled());
        assert_eq!(l.move_top(), None);
        assert_eq!(*count.lock(), 0);
    }

    #[test]
    fn test_filter_applied_payload() {
        let mut l = filterable(&["Apple", "Banana", "Blueberry"]);
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();
        l.filter_applied.connect(move |visible| {
            received_clone.lock().push(visible.clone());
        });

        l.filter(" B ");
        l.filter("");

        let received = received.lock();
        assert_eq!(received[0], strings(&["Banana", "Blueberry"]));
        assert_eq!(received[1], strings(&["Apple", "Banana", "Blueberry"]));
    }

    #[test]
    fn test_filter_without_fields_shows_everything() {
        let mut l = list(&["Apple", "Banana"]);
        l.filter("zzz");
        assert!(!l.is_filtering());
        assert_eq!(l.visible_items().len(), 2);
        assert!(!l.is_empty());
    }

    #[test]
    fn test_is_empty_follows_filter() {
        let mut l = filterable(&["Apple", "Banana"]);
        l.filter("kiwi");
        assert!(l.is_empty());
        l.reset_filter();
        assert!(!l.is_empty());

        let empty = list(&[]);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_set_value_refilters() {
        let mut l = filterable(&["Apple", "Banana"]);
        l.filter("an");
        assert_eq!(l.visible_items(), strings(&["Banana"]).as_slice());

        l.set_value(strings(&["Mango", "Kiwi", "Orange"]));
        assert_eq!(l.visible_items(), strings(&["Mango", "Orange"]).as_slice());

        l.mutate_value(|items| items.push("Banana".to_string()));
        assert_eq!(
            l.visible_items(),
            strings(&["Mango", "Orange", "Banana"]).as_slice()
        );
    }

    #[test]
    fn test_config_change_reapplies_query() {
        let mut l = filterable(&["Apple", "Banana", "Grape"]);
        l.filter("ap");
        assert_eq!(l.visible_items(), strings(&["Apple", "Grape"]).as_slice());

        l.set_filter_match_mode(FilterMatchMode::StartsWith);
        assert_eq!(l.visible_items(), strings(&["Apple"]).as_slice());

        l.set_filter_by(None);
        assert!(!l.is_filtering());
        assert_eq!(l.visible_items().len(), 3);
    }

    #[test]
    fn test_keyboard_navigation_skips_hidden_rows() {
        let mut l = filterable(&["Apple", "Kiwi", "Avocado", "Apricot"]);
        l.filter("a");
        // Kiwi is hidden
        let focus = Arc::new(Mutex::new(Vec::new()));
        let focus_clone = focus.clone();
        l.focus_requested.connect(move |row| focus_clone.lock().push(*row));

        let apple = "Apple".to_string();
        assert!(l.on_item_keydown(Key::ArrowDown, &apple, 0, KeyboardModifiers::NONE));
        let avocado = "Avocado".to_string();
        assert!(l.on_item_keydown(Key::ArrowUp, &avocado, 2, KeyboardModifiers::NONE));
        assert!(l.on_item_keydown(Key::ArrowUp, &apple, 0, KeyboardModifiers::NONE));
        assert!(!l.on_item_keydown(Key::Other(65), &apple, 0, KeyboardModifiers::NONE));

        assert_eq!(*focus.lock(), vec![2, 0]);
    }

    #[test]
    fn test_installed_navigator_is_used() {
        struct Wrapping(usize);

        impl ItemNavigator for Wrapping {
            fn next_visible(&self, row: usize) -> Option<usize> {
                Some((row + 1) % self.0)
            }
            fn previous_visible(&self, row: usize) -> Option<usize> {
                Some((row + self.0 - 1) % self.0)
            }
        }

        let mut l = list(&["A", "B", "C"]).with_navigator(Wrapping(3));
        let focus = Arc::new(Mutex::new(Vec::new()));
        let focus_clone = focus.clone();
        l.focus_requested.connect(move |row| focus_clone.lock().push(*row));

        let c = "C".to_string();
        l.on_item_keydown(Key::ArrowDown, &c, 2, KeyboardModifiers::NONE);
        assert_eq!(*focus.lock(), vec![0]);
    }

    #[test]
    fn test_enter_acts_as_click() {
        let mut l = list(&["A", "B"]);
        let b = "B".to_string();
        assert!(l.on_item_keydown(Key::Enter, &b, 1, KeyboardModifiers::NONE));
        assert_eq!(l.selection(), strings(&["B"]).as_slice());
        assert!(l.on_item_keydown(Key::NumpadEnter, &b, 1, KeyboardModifiers::NONE));
        assert!(l.selection().is_empty());
    }

    #[test]
    fn test_drop_requires_dragdrop() {
        let mut l = list(&["A", "B", "C"]);
        assert!(!l.on_drop(DropEvent::new(0, 2, "A".to_string())));

        l.set_dragdrop(true);
        assert!(l.on_drop(DropEvent::new(0, 2, "A".to_string())));
        assert_eq!(l.value(), strings(&["B", "C", "A"]).as_slice());
        assert!(!l.on_drop(DropEvent::new(1, 1, "C".to_string())));
    }

    #[test]
    fn test_stale_drop_is_ignored() {
        let mut l = filterable(&["Apple", "Banana", "Blueberry"]);
        l.filter("b");
        let version = l.version();

        assert!(!l.on_drop(DropEvent::new(0, 1, "Cherry".to_string())));
        assert!(!l.on_drop(DropEvent::new(0, 5, "Banana".to_string())));
        assert_eq!(l.version(), version);
        assert_eq!(l.visible_items(), strings(&["Banana", "Blueberry"]).as_slice());
    }

    #[test]
    fn test_toggle_ignored_while_disabled() {
        let mut l = list(&["A", "B", "C"]);
        let notifications = Arc::new(Mutex::new(0));
        let notifications_clone = notifications.clone();
        l.selection_changed.connect(move |_| *notifications_clone.lock() += 1);

        l.set_selection(strings(&["B"]));
        l.set_disabled(true);
        l.toggle_selection(&"C".to_string(), 2, true);
        assert_eq!(l.selection(), strings(&["B"]).as_slice());
        assert_eq!(*notifications.lock(), 0);

        l.set_disabled(false);
        l.toggle_selection(&"C".to_string(), 2, true);
        assert_eq!(l.selection(), strings(&["B", "C"]).as_slice());
        assert_eq!(*notifications.lock(), 1);
    }

    #[test]
    fn test_drop_out_of_range_is_ignored() {
        let mut l = list(&["A", "B", "C"]);
        l.set_dragdrop(true);
        let reorders = Arc::new(Mutex::new(0));
        let reorders_clone = reorders.clone();
        l.reordered.connect(move |_| *reorders_clone.lock() += 1);

        assert!(!l.on_drop(DropEvent::new(9, 0, "A".to_string())));
        assert!(!l.on_drop(DropEvent::new(0, 3, "A".to_string())));
        assert_eq!(l.value(), strings(&["A", "B", "C"]).as_slice());
        assert_eq!(l.version(), 0);
        assert_eq!(*reorders.lock(), 0);
    }

    #[test]
    fn test_drop_item_must_match_previous_index() {
        let mut l = list(&["A", "B", "C"]);
        l.set_dragdrop(true);

        assert!(!l.on_drop(DropEvent::new(2, 0, "A".to_string())));
        assert_eq!(l.value(), strings(&["A", "B", "C"]).as_slice());

        assert!(l.on_drop(DropEvent::new(2, 0, "C".to_string())));
        assert_eq!(l.value(), strings(&["C", "A", "B"]).as_slice());
    }

    #[test]
    fn test_filtered_drop_checks_displayed_item() {
        let mut l = filterable(&["Apple", "Banana", "Cherry", "Blueberry"]);
        l.filter("b");

        // Blueberry is displayed at row 1, not row 0
        assert!(!l.on_drop(DropEvent::new(0, 1, "Blueberry".to_string())));
        assert_eq!(l.visible_items(), strings(&["Banana", "Blueberry"]).as_slice());
        assert_eq!(l.version(), 0);
    }

    #[test]
    fn test_debug_output() {
        let mut l = filterable(&["Apple", "Banana"]);
        l.filter("an");
        let debug = format!("{l:?}");
        assert!(debug.starts_with("OrderList"));
        assert!(debug.contains("query: Some(\"an\")"));
    }

    #[test]
    fn test_empty_slots() {
        let templates = SlotTemplates::from_tagged([("emptyfilter", ())]);
        let mut l = filterable(&["Apple"]);
        assert_eq!(l.empty_slots(&templates), EmptySlots::default());

        l.filter("kiwi");
        assert!(l.empty_slots(&templates).empty_filter);
    }
}

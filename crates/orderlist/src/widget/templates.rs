//! Named presentation slots.
//!
//! A presentation layer registers callbacks (render functions, builders,
//! whatever `F` is) under string tags. The tags are resolved into a fixed
//! set of [`TemplateSlot`]s once, when the templates are built; rendering
//! code then looks slots up by variant.

use std::fmt;
use std::str::FromStr;

/// The slots an order list can be customized through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateSlot {
    /// Renders a single item.
    Item,
    /// The list header.
    Header,
    /// Message shown when the list has no items.
    Empty,
    /// Message shown when the filter matches nothing.
    EmptyFilter,
    /// Replacement for the filter input.
    Filter,
    /// Icon of the move-up control.
    MoveUpIcon,
    /// Icon of the move-to-top control.
    MoveTopIcon,
    /// Icon of the move-down control.
    MoveDownIcon,
    /// Icon of the move-to-bottom control.
    MoveBottomIcon,
    /// Icon inside the filter input.
    FilterIcon,
}

impl TemplateSlot {
    /// All slots.
    pub const ALL: [Self; 10] = [
        Self::Item,
        Self::Header,
        Self::Empty,
        Self::EmptyFilter,
        Self::Filter,
        Self::MoveUpIcon,
        Self::MoveTopIcon,
        Self::MoveDownIcon,
        Self::MoveBottomIcon,
        Self::FilterIcon,
    ];

    /// The registration tag of this slot.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Header => "header",
            Self::Empty => "empty",
            Self::EmptyFilter => "emptyfilter",
            Self::Filter => "filter",
            Self::MoveUpIcon => "moveupicon",
            Self::MoveTopIcon => "movetopicon",
            Self::MoveDownIcon => "movedownicon",
            Self::MoveBottomIcon => "movebottomicon",
            Self::FilterIcon => "filtericon",
        }
    }

    /// Resolves a registration tag. Unknown tags fall back to [`TemplateSlot::Item`].
    pub fn from_tag(tag: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|slot| slot.tag() == tag)
            .unwrap_or(Self::Item)
    }
}

impl fmt::Display for TemplateSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for TemplateSlot {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

/// Which empty-state messages should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptySlots {
    /// Show the [`TemplateSlot::Empty`] message.
    pub empty: bool,
    /// Show the [`TemplateSlot::EmptyFilter`] message.
    pub empty_filter: bool,
}

/// Callbacks keyed by slot.
///
/// A later registration for the same slot replaces the earlier one.
pub struct SlotTemplates<F> {
    slots: [Option<F>; 10],
}

impl<F> Default for SlotTemplates<F> {
    fn default() -> Self {
        Self {
            slots: Default::default(),
        }
    }
}

impl<F> fmt::Debug for SlotTemplates<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(TemplateSlot::ALL.into_iter().filter(|slot| self.has(*slot)))
            .finish()
    }
}

impl<F> SlotTemplates<F> {
    /// Creates an empty set of templates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `(tag, callback)` registrations.
    pub fn from_tagged<I, S>(registrations: I) -> Self
    where
        I: IntoIterator<Item = (S, F)>,
        S: AsRef<str>,
    {
        let mut templates = Self::new();
        for (tag, callback) in registrations {
            templates.register(TemplateSlot::from_tag(tag.as_ref()), callback);
        }
        templates
    }

    /// Registers `callback` for `slot`, returning the one it replaces.
    pub fn register(&mut self, slot: TemplateSlot, callback: F) -> Option<F> {
        self.slots[Self::index(slot)].replace(callback)
    }

    /// Returns the callback registered for `slot`.
    pub fn get(&self, slot: TemplateSlot) -> Option<&F> {
        self.slots[Self::index(slot)].as_ref()
    }

    /// Returns `true` if a callback is registered for `slot`.
    pub fn has(&self, slot: TemplateSlot) -> bool {
        self.get(slot).is_some()
    }

    /// Decides which empty-state messages to show.
    ///
    /// Nothing is shown for a non-empty list. While filtering, the
    /// empty-filter slot is preferred; the plain empty message is used when
    /// not filtering or when no empty-filter slot is registered.
    pub fn empty_slots(&self, list_empty: bool, filtering: bool) -> EmptySlots {
        if !list_empty {
            return EmptySlots::default();
        }
        let empty_filter = filtering && self.has(TemplateSlot::EmptyFilter);
        EmptySlots {
            empty: !empty_filter,
            empty_filter,
        }
    }

    fn index(slot: TemplateSlot) -> usize {
        slot as usize
    }
}

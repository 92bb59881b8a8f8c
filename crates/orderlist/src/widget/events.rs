//! Input events and notification payloads of the order list.
//!
//! The presentation layer translates its native input into these types
//! before calling into the controller; the controller answers with the
//! payload types emitted on its signals.

use crate::model::{Edge, MoveDirection};

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Meta modifier only.
    pub const META: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: true,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if a modifier that extends the selection is pressed.
    ///
    /// Meta, Control and Shift count; Alt does not.
    pub fn extends_selection(&self) -> bool {
        self.meta || self.control || self.shift
    }
}

/// Keys the order list reacts to.
///
/// Anything else arrives as [`Key::Other`] and is left unhandled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Move focus to the next visible item.
    ArrowDown,
    /// Move focus to the previous visible item.
    ArrowUp,
    /// Activate the focused item.
    Enter,
    /// Activate the focused item (keypad).
    NumpadEnter,
    /// Any other key, identified by its raw code.
    Other(u16),
}

impl Key {
    /// Check if this key activates an item.
    pub fn is_activation(&self) -> bool {
        matches!(self, Key::Enter | Key::NumpadEnter)
    }
}

/// A completed drag gesture inside the list.
///
/// Indices are positions in the list as displayed, which is the visible
/// subset while a filter is active.
#[derive(Debug, Clone, PartialEq)]
pub struct DropEvent<T> {
    /// Displayed position the item was dragged from.
    pub previous_index: usize,
    /// Displayed position the item was dropped at.
    pub current_index: usize,
    /// The dragged item.
    pub item: T,
}

impl<T> DropEvent<T> {
    /// Creates a new drop event.
    pub fn new(previous_index: usize, current_index: usize, item: T) -> Self {
        Self {
            previous_index,
            current_index,
            item,
        }
    }
}

/// What triggered a reorder notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReorderCause {
    /// The move-up command.
    MoveUp,
    /// The move-to-top command.
    MoveTop,
    /// The move-down command.
    MoveDown,
    /// The move-to-bottom command.
    MoveBottom,
    /// A drag and drop gesture.
    Drop,
}

impl From<MoveDirection> for ReorderCause {
    fn from(direction: MoveDirection) -> Self {
        match direction {
            MoveDirection::Up => Self::MoveUp,
            MoveDirection::Top => Self::MoveTop,
            MoveDirection::Down => Self::MoveDown,
            MoveDirection::Bottom => Self::MoveBottom,
        }
    }
}

/// Payload of the `reordered` signal.
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderEvent<T> {
    /// What triggered the reorder.
    pub cause: ReorderCause,
    /// The selection for move commands, the dragged item for drops.
    pub items: Vec<T>,
    /// Number of positions that actually changed.
    pub moved: usize,
}

/// Payload of the `scroll_hint` signal.
///
/// `row` is the collection index of the first (for [`Edge::Start`]) or last
/// (for [`Edge::End`]) selected, visible item, or `None` when no selected
/// item is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrollHint {
    /// The edge of the list the move went towards.
    pub edge: Edge,
    /// The row to bring into view.
    pub row: Option<usize>,
}

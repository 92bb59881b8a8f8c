//! The order-list controller and its input/output types.
//!
//! - [`OrderList`]: the controller
//! - [`events`]: keyboard, drop and notification payloads
//! - [`navigation`]: keyboard focus traversal
//! - [`templates`]: named presentation slots

pub mod events;
pub mod navigation;
mod order_list;
pub mod templates;

pub use events::{DropEvent, Key, KeyboardModifiers, ReorderCause, ReorderEvent, ScrollHint};
pub use navigation::{ItemNavigator, MaskNavigator};
pub use order_list::OrderList;
pub use templates::{EmptySlots, SlotTemplates, TemplateSlot};

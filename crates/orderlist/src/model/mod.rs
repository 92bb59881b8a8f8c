//! State model of the order list.
//!
//! The model is split into four independent pieces that the
//! [`OrderList`](crate::widget::OrderList) controller composes:
//!
//! - [`OrderStore`]: the authoritative, versioned item order
//! - [`OrderSelection`]: the selected subset and click semantics
//! - [`FilterEngine`]: the query and the derived visible subset
//! - [`move_selection`]: the move commands
//!
//! Each piece can be used on its own; none of them emits notifications.

mod filter;
mod item;
mod moves;
mod selection;
mod store;

pub use filter::{FilterEngine, FilterMatchMode, parse_fields, to_locale_lowercase};
pub use item::{EqualityFn, FieldAccess, FieldExtractor, ItemComparator};
pub use moves::{Edge, MoveDirection, MoveOutcome, WalkOrder, move_selection};
pub use selection::{ClickMode, OrderSelection};
pub use store::{OrderStore, move_item_in_slice};

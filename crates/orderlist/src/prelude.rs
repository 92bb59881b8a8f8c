//! Prelude module for the order list.
//!
//! ```
//! use orderlist::prelude::*;
//! ```

// ============================================================================
// Controller
// ============================================================================

pub use crate::widget::{
    DropEvent, ItemNavigator, Key, KeyboardModifiers, OrderList, ReorderCause, ReorderEvent,
    ScrollHint,
};

// ============================================================================
// Model
// ============================================================================

pub use crate::model::{Edge, FieldAccess, FilterMatchMode, ItemComparator, MoveDirection};

// ============================================================================
// Configuration and errors
// ============================================================================

pub use crate::config::{ControlsPosition, OrderListConfig};
pub use crate::error::OrderListError;

// ============================================================================
// Signals
// ============================================================================

pub use orderlist_core::{ConnectionId, Signal};

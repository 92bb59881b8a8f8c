//! Ordered, filterable, multi-select list controller.
//!
//! This crate implements the state behind an order-list widget: a list of
//! caller-defined items that the user reorders with move commands or drag
//! and drop, selects with mouse, touch and keyboard, and narrows with a text
//! filter. Rendering is left to the host toolkit; the controller exposes
//! entry points for input and [`Signal`](orderlist_core::Signal)s for
//! everything the view needs to react to.
//!
//! # Example
//!
//! ```
//! use orderlist::prelude::*;
//! use serde_json::json;
//!
//! let products = vec![
//!     json!({ "name": "Bamboo Watch", "category": "Accessories" }),
//!     json!({ "name": "Black Watch", "category": "Accessories" }),
//!     json!({ "name": "Blue Band", "category": "Fitness" }),
//! ];
//!
//! let mut list = OrderList::new(products).with_config(OrderListConfig {
//!     filter_by: Some("name,category".to_string()),
//!     dragdrop: true,
//!     ..Default::default()
//! });
//!
//! list.filter("watch");
//! assert_eq!(list.visible_items().len(), 2);
//!
//! // Drag "Black Watch" above "Bamboo Watch" in the filtered view
//! let black = list.visible_items()[1].clone();
//! list.on_drop(DropEvent::new(1, 0, black));
//! assert_eq!(list.value()[0]["name"], "Black Watch");
//! ```
//!
//! # Crate Layout
//!
//! - [`model`]: store, selection, filter and move algorithms
//! - [`widget`]: the [`OrderList`](widget::OrderList) controller
//! - [`config`]: serde-backed configuration
//!
//! # Features
//!
//! - `localization`: locale-aware lowercasing of filter input via ICU4X

pub mod config;
mod error;
pub mod model;
pub mod prelude;
pub mod widget;

pub use error::{OrderListError, Result};

pub use orderlist_core::{ConnectionId, IdGenerator, InstanceId, Signal};

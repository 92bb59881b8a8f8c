//! Core systems for the order-list controller.
//!
//! This crate provides the small runtime the controller is built on:
//!
//! - **Signal/Slot System**: Type-safe observer notifications
//! - **Instance Ids**: Explicit, process-wide id generation for widget instances
//! - **Logging**: `tracing` targets and performance spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use orderlist_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Instance Id Example
//!
//! ```
//! use orderlist_core::IdGenerator;
//!
//! static IDS: IdGenerator = IdGenerator::new("list_");
//!
//! let first = IDS.next_id();
//! let second = IDS.next_id();
//! assert_ne!(first, second);
//! assert!(first.to_string().starts_with("list_"));
//! ```

mod error;
pub mod id;
pub mod logging;
pub mod signal;

pub use error::{Result, SignalError};
pub use id::{IdGenerator, InstanceId, next_instance_id};
pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};

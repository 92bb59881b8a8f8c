//! Signal/slot system.
//!
//! This module provides a type-safe, Qt-inspired signal/slot mechanism used
//! by the controller to publish notifications. Signals are emitted when
//! state changes, and connected slots (callbacks) are invoked in response.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The main signal type for emitting notifications
//! - [`ConnectionId`] - Unique identifier returned when connecting a slot
//!
//! # Invocation
//!
//! Slots are always invoked synchronously on the emitting thread. The set of
//! connected slots is captured when `emit` starts, so a slot may connect or
//! disconnect other slots (or itself) without deadlocking. Such changes take
//! effect on the next emit.
//!
//! # Example
//!
//! ```
//! use orderlist_core::Signal;
//!
//! // Create a signal that passes a string argument
//! let text_changed = Signal::<String>::new();
//!
//! // Connect a slot (closure)
//! let conn_id = text_changed.connect(|text| {
//!     println!("Text changed to: {}", text);
//! });
//!
//! // Emit the signal
//! text_changed.emit("Hello, World!".to_string());
//!
//! // Disconnect when done
//! text_changed.disconnect(conn_id);
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::error::{Result, SignalError};
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    /// The ID remains valid until the connection is explicitly disconnected or
    /// the signal is dropped.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A type-safe signal that can have multiple connected slots.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for signals
///   with no arguments, or a tuple like `(String, i32)` for multiple arguments.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

static_assertions::assert_impl_all!(Signal<()>: Send, Sync);

impl<Args: Send + 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connections.lock().len())
            .field("blocked", &self.blocked.load(Ordering::SeqCst))
            .finish()
    }
}

impl<Args: Send + 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    ///
    /// # Example
    ///
    /// ```
    /// use orderlist_core::Signal;
    ///
    /// let signal = Signal::<String>::new();
    /// let id = signal.connect(|s| println!("Got: {}", s));
    /// signal.emit("Hello".to_string());
    /// ```
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect a slot, reporting an unknown ID as an error.
    pub fn try_disconnect(&self, id: ConnectionId) -> Result<()> {
        if self.disconnect(id) {
            Ok(())
        } else {
            Err(SignalError::InvalidConnection)
        }
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` will do nothing. This is useful
    /// during initialization or batch updates to prevent cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots.
    ///
    /// If the signal is blocked, this does nothing.
    #[tracing::instrument(skip_all, target = "orderlist_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Log<T> = Arc<Mutex<Vec<T>>>;

    fn recorder<T: Clone + Send + 'static>(signal: &Signal<T>) -> (ConnectionId, Log<T>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        let id = signal.connect(move |payload: &T| sink.lock().push(payload.clone()));
        (id, log)
    }

    fn selection(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_selection_payloads_arrive_in_emit_order() {
        let selection_changed = Signal::<Vec<String>>::new();
        let (_, log) = recorder(&selection_changed);

        selection_changed.emit(selection(&["B"]));
        selection_changed.emit(selection(&["A", "B"]));
        selection_changed.emit(Vec::new());

        assert_eq!(
            *log.lock(),
            vec![selection(&["B"]), selection(&["A", "B"]), Vec::new()]
        );
    }

    #[test]
    fn test_disconnected_slot_stops_receiving() {
        let focus_requested = Signal::<usize>::new();
        let (id, log) = recorder(&focus_requested);

        focus_requested.emit(3);
        focus_requested.disconnect(id);
        focus_requested.emit(4);

        assert_eq!(*log.lock(), vec![3]);
        assert_eq!(
            focus_requested.try_disconnect(id),
            Err(SignalError::InvalidConnection)
        );
    }

    #[test]
    fn test_blocked_signal_drops_payloads() {
        let reordered = Signal::<(usize, usize)>::new();
        let (_, log) = recorder(&reordered);

        reordered.set_blocked(true);
        reordered.emit((0, 2));
        assert!(reordered.is_blocked());
        reordered.set_blocked(false);
        reordered.emit((2, 0));

        assert_eq!(*log.lock(), vec![(2, 0)]);
    }

    #[test]
    fn test_every_listener_sees_each_emit() {
        let filter_applied = Signal::<Vec<String>>::new();
        let listeners: Vec<_> = (0..3).map(|_| recorder(&filter_applied).1).collect();
        assert_eq!(filter_applied.connection_count(), 3);

        filter_applied.emit(selection(&["Banana", "Blueberry"]));
        for log in &listeners {
            assert_eq!(log.lock().len(), 1);
        }

        filter_applied.disconnect_all();
        filter_applied.emit(Vec::new());
        assert_eq!(filter_applied.connection_count(), 0);
        assert!(listeners.iter().all(|log| log.lock().len() == 1));
    }

    #[test]
    fn test_slot_may_disconnect_itself() {
        let signal = Arc::new(Signal::<usize>::new());
        let calls = Arc::new(Mutex::new(0));
        let own_id = Arc::new(Mutex::new(None));

        let signal_clone = signal.clone();
        let calls_clone = calls.clone();
        let own_id_clone = own_id.clone();
        let id = signal.connect(move |_| {
            *calls_clone.lock() += 1;
            if let Some(id) = own_id_clone.lock().take() {
                signal_clone.disconnect(id);
            }
        });
        *own_id.lock() = Some(id);

        signal.emit(1);
        signal.emit(2);
        assert_eq!(*calls.lock(), 1);
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_slot_connected_during_emit_waits_for_next_emit() {
        let signal = Arc::new(Signal::<usize>::new());
        let late_rows = Arc::new(Mutex::new(Vec::new()));

        let signal_clone = signal.clone();
        let late_clone = late_rows.clone();
        signal.connect(move |_| {
            let late = late_clone.clone();
            signal_clone.connect(move |&row| late.lock().push(row));
        });

        signal.emit(1);
        assert!(late_rows.lock().is_empty());
        signal.emit(2);
        assert_eq!(*late_rows.lock(), vec![2]);
    }

    #[test]
    fn test_rows_emitted_from_worker_threads() {
        let signal = Arc::new(Signal::<usize>::new());
        let (_, log) = recorder(&signal);

        let handles: Vec<_> = (0..8)
            .map(|row| {
                let signal = signal.clone();
                std::thread::spawn(move || signal.emit(row))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut rows = log.lock().clone();
        rows.sort_unstable();
        assert_eq!(rows, (0..8).collect::<Vec<_>>());
    }
}

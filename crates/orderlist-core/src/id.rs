//! Instance id generation.
//!
//! Every widget instance gets an [`InstanceId`] that can be used to scope
//! per-instance resources (style rules, element ids, log fields). Ids come
//! from an [`IdGenerator`], a monotonically increasing counter with a
//! textual prefix. Generators are plain values: create one explicitly where
//! a separate id space is needed, or use [`next_instance_id`] for the
//! process-wide default space.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A unique, prefixed identifier for a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId {
    prefix: &'static str,
    value: u64,
}

impl InstanceId {
    /// The numeric part of the id.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The prefix of the generator that produced this id.
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.value)
    }
}

/// A monotonically increasing id counter.
///
/// `IdGenerator::new` is `const`, so generators can live in `static` items.
#[derive(Debug)]
pub struct IdGenerator {
    prefix: &'static str,
    next: AtomicU64,
}

impl IdGenerator {
    /// Create a generator whose ids start at zero.
    pub const fn new(prefix: &'static str) -> Self {
        Self::starting_at(prefix, 0)
    }

    /// Create a generator whose first id is `start`.
    pub const fn starting_at(prefix: &'static str, start: u64) -> Self {
        Self {
            prefix,
            next: AtomicU64::new(start),
        }
    }

    /// Allocate the next id.
    pub fn next_id(&self) -> InstanceId {
        InstanceId {
            prefix: self.prefix,
            value: self.next.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// The prefix applied to every id from this generator.
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }
}

static INSTANCE_IDS: IdGenerator = IdGenerator::new("ol_id_");

/// Allocate an id from the process-wide generator.
pub fn next_instance_id() -> InstanceId {
    INSTANCE_IDS.next_id()
}

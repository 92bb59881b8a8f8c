//! Logging facilities.
//!
//! The crates in this workspace use the `tracing` crate for instrumentation.
//! To see logs, install a subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("orderlist=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Every event is emitted with one of the [`targets`] below so a subsystem
//! can be filtered independently.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "orderlist_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "orderlist_core::signal";
    /// Performance spans.
    pub const PERF: &str = "orderlist::perf";
    /// Ordered collection mutations.
    pub const STORE: &str = "orderlist::store";
    /// Selection changes.
    pub const SELECTION: &str = "orderlist::selection";
    /// Filtering.
    pub const FILTER: &str = "orderlist::filter";
    /// Move commands.
    pub const MOVE: &str = "orderlist::move";
    /// Drag and drop reordering.
    pub const DRAG: &str = "orderlist::drag";
}

/// A guard for timing an operation.
///
/// Creates a tracing span on construction that is exited when dropped.
/// Useful for profiling specific operations.
///
/// # Example
///
/// ```
/// use orderlist_core::PerfSpan;
///
/// fn expensive_operation() {
///     let _span = PerfSpan::new("expensive_operation");
///     // ... do work ...
/// } // span ends here
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

impl std::fmt::Debug for PerfSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerfSpan").finish_non_exhaustive()
    }
}

//! Discrete move commands.
//!
//! The four commands (up, top, down, bottom) share one algorithm: walk the
//! selection in a fixed order, locate each item in the store and move it one
//! step or all the way towards an edge. The walk stops at the first selected
//! item that already sits on the target edge; items after it are left where
//! they are for this call.
//!
//! | direction | walk order | action |
//! |---|---|---|
//! | up | forward | swap with predecessor |
//! | top | reverse | move to front |
//! | down | forward | swap with successor |
//! | bottom | forward | move to back |
//!
//! Walking `top` in reverse keeps the relative order of the moved items:
//! each item is pushed in front of the ones moved before it.

use orderlist_core::logging::targets;

use super::store::OrderStore;

/// The edge of the list a command moves towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Index zero.
    Start,
    /// The last index.
    End,
}

/// Order in which the selection is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOrder {
    /// First selected item first.
    Forward,
    /// Last selected item first.
    Reverse,
}

/// A move command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// One step towards the start.
    Up,
    /// All the way to the start.
    Top,
    /// One step towards the end.
    Down,
    /// All the way to the end.
    Bottom,
}

impl MoveDirection {
    /// The edge this command moves towards.
    pub fn edge(self) -> Edge {
        match self {
            Self::Up | Self::Top => Edge::Start,
            Self::Down | Self::Bottom => Edge::End,
        }
    }

    /// The order in which the selection is walked.
    pub fn walk_order(self) -> WalkOrder {
        match self {
            Self::Top => WalkOrder::Reverse,
            Self::Up | Self::Down | Self::Bottom => WalkOrder::Forward,
        }
    }

    /// Whether the command moves an item all the way to the edge.
    pub fn is_extreme(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// What a move command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Number of items that changed position.
    pub moved: usize,
    /// Number of selected items that could not be found in the store.
    pub missing: usize,
    /// The walk stopped at an item already on the edge.
    pub stopped_at_edge: bool,
}

/// Moves the `selected` items within `store`.
pub fn move_selection<T>(
    store: &mut OrderStore<T>,
    selected: &[T],
    direction: MoveDirection,
) -> MoveOutcome {
    let mut outcome = MoveOutcome::default();
    if store.is_empty() {
        return outcome;
    }

    let walk: Box<dyn Iterator<Item = &T>> = match direction.walk_order() {
        WalkOrder::Forward => Box::new(selected.iter()),
        WalkOrder::Reverse => Box::new(selected.iter().rev()),
    };

    for item in walk {
        let Some(index) = store.locate(item) else {
            outcome.missing += 1;
            continue;
        };

        let last = store.len() - 1;
        let on_edge = match direction.edge() {
            Edge::Start => index == 0,
            Edge::End => index == last,
        };
        if on_edge {
            outcome.stopped_at_edge = true;
            break;
        }

        let moved = match direction {
            MoveDirection::Up => store.swap(index, index - 1),
            MoveDirection::Down => store.swap(index, index + 1),
            MoveDirection::Top => store.move_to_front(index),
            MoveDirection::Bottom => store.move_to_back(index),
        };
        if moved {
            outcome.moved += 1;
        }
    }

    tracing::debug!(
        target: targets::MOVE,
        ?direction,
        moved = outcome.moved,
        missing = outcome.missing,
        stopped_at_edge = outcome.stopped_at_edge,
        "selection moved"
    );
    outcome
}

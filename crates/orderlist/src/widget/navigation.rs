//! Keyboard focus traversal.
//!
//! Focus traversal belongs to the presentation layer: only it knows which
//! rows are rendered, hidden or otherwise skipped. The controller asks an
//! [`ItemNavigator`] for the neighbouring row and announces the answer on
//! its `focus_requested` signal.

/// Finds the neighbouring focusable row.
///
/// Rows are collection indices. Implementations should skip rows that are
/// not displayed.
pub trait ItemNavigator: Send + Sync {
    /// Returns the next displayed row after `row`.
    fn next_visible(&self, row: usize) -> Option<usize>;

    /// Returns the previous displayed row before `row`.
    fn previous_visible(&self, row: usize) -> Option<usize>;
}

/// Navigator that walks a visibility mask.
///
/// This is what the controller falls back to when no navigator is
/// installed: `visible[row]` tells whether the row is displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskNavigator {
    visible: Vec<bool>,
}

impl MaskNavigator {
    /// Creates a navigator over a visibility mask.
    pub fn new(visible: Vec<bool>) -> Self {
        Self { visible }
    }
}

impl ItemNavigator for MaskNavigator {
    fn next_visible(&self, row: usize) -> Option<usize> {
        let start = row.checked_add(1)?;
        (start..self.visible.len()).find(|&r| self.visible[r])
    }

    fn previous_visible(&self, row: usize) -> Option<usize> {
        (0..row.min(self.visible.len())).rev().find(|&r| self.visible[r])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_navigation_skips_hidden_rows() {
        let nav = MaskNavigator::new(vec![true, false, false, true, true]);
        assert_eq!(nav.next_visible(0), Some(3));
        assert_eq!(nav.next_visible(3), Some(4));
        assert_eq!(nav.next_visible(4), None);

        assert_eq!(nav.previous_visible(3), Some(0));
        assert_eq!(nav.previous_visible(0), None);
    }

    #[test]
    fn test_mask_navigation_out_of_range() {
        let nav = MaskNavigator::new(vec![true, true]);
        assert_eq!(nav.next_visible(9), None);
        assert_eq!(nav.previous_visible(9), Some(1));
        assert_eq!(nav.next_visible(usize::MAX), None);
    }
}

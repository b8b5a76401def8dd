//! Sliding window over a menu's items.
//!
//! The window is the inclusive index range of items offered for drawing.
//! It holds the selection, spends at most `max_on_screen` slots on
//! visible items (hidden items inside the range are free), and moves by
//! extension when the selection steps out of it so the list never jumps.

use crate::item::MenuItem;
use crate::items::MenuItems;
use tracing::trace;

/// Inclusive index range of on-screen items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisibleWindow {
    /// First index in the window
    pub first: usize,
    /// Last index in the window (inclusive)
    pub last: usize,
}

impl VisibleWindow {
    /// Create a window.
    #[must_use]
    pub const fn new(first: usize, last: usize) -> Self {
        Self { first, last }
    }

    /// Check if `index` lies in the window.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.first && index <= self.last
    }

    /// Number of indices spanned, hidden items included.
    #[must_use]
    pub const fn span(&self) -> usize {
        self.last - self.first + 1
    }
}

/// Window bounds carried between recomputations.
///
/// `None` means nothing is on screen: the budget is zero, the collection
/// is empty, or no item is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowState {
    window: Option<VisibleWindow>,
}

impl WindowState {
    /// Create an empty state.
    #[must_use]
    pub const fn new() -> Self {
        Self { window: None }
    }

    /// Current window.
    #[must_use]
    pub const fn window(&self) -> Option<VisibleWindow> {
        self.window
    }

    /// Recompute the window for a selection and budget.
    ///
    /// # Panics
    ///
    /// Panics if the computed bounds are inverted. That can only follow
    /// from a defect in this module.
    pub fn recompute(
        &mut self,
        items: &MenuItems,
        selected: usize,
        max_on_screen: usize,
    ) -> Option<VisibleWindow> {
        self.window = compute(items, self.window, selected, max_on_screen);
        trace!(
            selected,
            max_on_screen,
            window = ?self.window,
            "recomputed visible window"
        );
        self.window
    }
}

fn compute(
    items: &MenuItems,
    previous: Option<VisibleWindow>,
    selected: usize,
    max_on_screen: usize,
) -> Option<VisibleWindow> {
    if max_on_screen == 0 || items.is_empty() {
        return None;
    }
    let (lo, hi) = items.visible_bounds()?;
    if max_on_screen >= items.len() {
        return Some(VisibleWindow::new(0, items.len() - 1));
    }

    let selected = selected.clamp(lo, hi);
    let previous = previous.unwrap_or(VisibleWindow::new(0, 0));

    let window = if selected < previous.first {
        extend_from_first(items, selected, max_on_screen, lo, hi)
    } else if selected > previous.last {
        extend_from_last(items, selected, max_on_screen, lo, hi)
    } else {
        let refreshed = extend_from_first(items, previous.first, max_on_screen, lo, hi);
        if refreshed.contains(selected) {
            refreshed
        } else {
            extend_from_last(items, selected, max_on_screen, lo, hi)
        }
    };

    let first = window.first.max(lo);
    let last = window.last.min(hi);
    assert!(
        last >= first,
        "visible window inverted: last ({last}) < first ({first})"
    );
    Some(VisibleWindow::new(first, last))
}

/// Window starting at `first`; pulled back from `hi` when the tail runs
/// out of visible items before the budget is spent.
fn extend_from_first(
    items: &MenuItems,
    first: usize,
    max_on_screen: usize,
    lo: usize,
    hi: usize,
) -> VisibleWindow {
    match scan_forward(items, first, max_on_screen) {
        Some(last) => VisibleWindow::new(first, last),
        None => {
            let start = scan_backward(items, hi, max_on_screen).unwrap_or(lo);
            VisibleWindow::new(start.min(first), hi)
        }
    }
}

/// Window ending at `last`; pushed forward from `lo` when the head runs
/// out of visible items before the budget is spent.
fn extend_from_last(
    items: &MenuItems,
    last: usize,
    max_on_screen: usize,
    lo: usize,
    hi: usize,
) -> VisibleWindow {
    match scan_backward(items, last, max_on_screen) {
        Some(first) => VisibleWindow::new(first, last),
        None => {
            let end = scan_forward(items, lo, max_on_screen).unwrap_or(hi);
            VisibleWindow::new(lo, end.max(last))
        }
    }
}

/// Index at which the `budget`-th visible item is found walking forward
/// from `from`.
fn scan_forward(items: &MenuItems, from: usize, budget: usize) -> Option<usize> {
    let mut count = 0;
    for (index, item) in items.iter().enumerate().skip(from) {
        if item.is_visible() {
            count += 1;
            if count == budget {
                return Some(index);
            }
        }
    }
    None
}

/// Index at which the `budget`-th visible item is found walking backward
/// from `from`.
fn scan_backward(items: &MenuItems, from: usize, budget: usize) -> Option<usize> {
    let mut count = 0;
    for index in (0..=from.min(items.len().saturating_sub(1))).rev() {
        if items.get(index).is_some_and(MenuItem::is_visible) {
            count += 1;
            if count == budget {
                return Some(index);
            }
        }
    }
    None
}

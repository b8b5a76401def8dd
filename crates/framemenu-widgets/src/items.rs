//! Ordered, owning collection of menu items.

use crate::item::MenuItem;
use framemenu_core::{MenuError, Result};
use std::ops::{Index, IndexMut};

/// Items of one menu, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItems {
    items: Vec<MenuItem>,
}

impl MenuItems {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items, visible or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    /// Get an item mutably.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut MenuItem> {
        self.items.get_mut(index)
    }

    /// Append an item.
    pub fn push(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    /// Insert an item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::IndexOutOfBounds`] if `index > len`.
    pub fn insert(&mut self, index: usize, item: MenuItem) -> Result<()> {
        if index > self.items.len() {
            return Err(MenuError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        self.items.insert(index, item);
        Ok(())
    }

    /// Remove and return the item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::IndexOutOfBounds`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<MenuItem> {
        if index >= self.items.len() {
            return Err(MenuError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Index of the first item with the given text.
    #[must_use]
    pub fn position_by_text(&self, text: &str) -> Option<usize> {
        self.items.iter().position(|i| i.text() == text)
    }

    /// Index of the first item matching `pred`.
    pub fn position(&self, pred: impl FnMut(&MenuItem) -> bool) -> Option<usize> {
        self.items.iter().position(pred)
    }

    /// Iterate over items.
    pub fn iter(&self) -> std::slice::Iter<'_, MenuItem> {
        self.items.iter()
    }

    /// Iterate mutably over items.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, MenuItem> {
        self.items.iter_mut()
    }

    /// Whether at least one item is visible.
    #[must_use]
    pub fn any_visible(&self) -> bool {
        self.items.iter().any(MenuItem::is_visible)
    }

    /// First and last index of visible items.
    #[must_use]
    pub fn visible_bounds(&self) -> Option<(usize, usize)> {
        let first = self.items.iter().position(MenuItem::is_visible)?;
        let last = self.items.iter().rposition(MenuItem::is_visible)?;
        Some((first, last))
    }

    /// Nearest eligible index before `from`, wrapping to the last eligible
    /// item when none precedes it.
    #[must_use]
    pub fn previous_eligible(&self, from: usize) -> Option<usize> {
        let before = from.min(self.items.len());
        self.items[..before]
            .iter()
            .rposition(MenuItem::is_eligible)
            .or_else(|| self.items.iter().rposition(MenuItem::is_eligible))
    }

    /// Nearest eligible index after `from`, wrapping to the first eligible
    /// item when none follows it.
    #[must_use]
    pub fn next_eligible(&self, from: usize) -> Option<usize> {
        let start = from.saturating_add(1).min(self.items.len());
        self.items[start..]
            .iter()
            .position(MenuItem::is_eligible)
            .map(|offset| start + offset)
            .or_else(|| self.items.iter().position(MenuItem::is_eligible))
    }

    /// Number of eligible items and the 1-based rank of `index` among them.
    #[must_use]
    pub fn eligible_rank(&self, index: usize) -> (usize, usize) {
        let total = self.items.iter().filter(|i| i.is_eligible()).count();
        let rank = self
            .items
            .iter()
            .take(index.saturating_add(1))
            .filter(|i| i.is_eligible())
            .count();
        (rank, total)
    }
}

impl Index<usize> for MenuItems {
    type Output = MenuItem;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl IndexMut<usize> for MenuItems {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.items[index]
    }
}

impl FromIterator<MenuItem> for MenuItems {
    fn from_iter<T: IntoIterator<Item = MenuItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<MenuItem> for MenuItems {
    fn extend<T: IntoIterator<Item = MenuItem>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

impl From<Vec<MenuItem>> for MenuItems {
    fn from(items: Vec<MenuItem>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a MenuItems {
    type Item = &'a MenuItem;
    type IntoIter = std::slice::Iter<'a, MenuItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> MenuItems {
        ["A", "B", "C"].into_iter().map(MenuItem::new).collect()
    }

    // =========================================================================
    // Collection
    // =========================================================================

    #[test]
    fn test_push_get_len() {
        let mut items = MenuItems::new();
        assert!(items.is_empty());
        items.push(MenuItem::new("A"));
        assert_eq!(items.len(), 1);
        assert_eq!(items.get(0).map(MenuItem::text), Some("A"));
        assert_eq!(items[0].text(), "A");
        assert!(items.get(1).is_none());
    }

    #[test]
    fn test_insert_and_remove() {
        let mut items = abc();
        items.insert(1, MenuItem::new("X")).unwrap();
        assert_eq!(items.position_by_text("X"), Some(1));
        assert_eq!(items.remove(1).unwrap().text(), "X");
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_insert_remove_out_of_bounds() {
        let mut items = abc();
        assert_eq!(
            items.insert(5, MenuItem::new("X")),
            Err(MenuError::IndexOutOfBounds { index: 5, len: 3 })
        );
        assert!(items.remove(3).is_err());
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_visible_bounds_skips_hidden_edges() {
        let mut items = abc();
        items.push(MenuItem::new("D").visible(false));
        items[0].set_visible(false);
        assert_eq!(items.visible_bounds(), Some((1, 2)));

        for item in items.iter_mut() {
            item.set_visible(false);
        }
        assert_eq!(items.visible_bounds(), None);
        assert!(!items.any_visible());
    }

    // =========================================================================
    // Eligibility search
    // =========================================================================

    #[test]
    fn test_next_eligible_wraps() {
        let items = abc();
        assert_eq!(items.next_eligible(0), Some(1));
        assert_eq!(items.next_eligible(2), Some(0));
    }

    #[test]
    fn test_previous_eligible_wraps() {
        let items = abc();
        assert_eq!(items.previous_eligible(1), Some(0));
        assert_eq!(items.previous_eligible(0), Some(2));
    }

    #[test]
    fn test_search_skips_ineligible() {
        let items: MenuItems = vec![
            MenuItem::new("A"),
            MenuItem::new("B").disabled(true),
            MenuItem::new("C").visible(false),
            MenuItem::new("D"),
        ]
        .into();
        assert_eq!(items.next_eligible(0), Some(3));
        assert_eq!(items.previous_eligible(3), Some(0));
    }

    #[test]
    fn test_search_none_eligible() {
        let items: MenuItems = vec![MenuItem::new("A").visible(false)].into();
        assert_eq!(items.next_eligible(0), None);
        assert_eq!(items.previous_eligible(0), None);
        assert_eq!(MenuItems::new().next_eligible(0), None);
    }

    #[test]
    fn test_eligible_rank() {
        let items: MenuItems = vec![
            MenuItem::new("A"),
            MenuItem::new("B").visible(false),
            MenuItem::new("C"),
        ]
        .into();
        assert_eq!(items.eligible_rank(0), (1, 2));
        assert_eq!(items.eligible_rank(2), (2, 2));
    }
}

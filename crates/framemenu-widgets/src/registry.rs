//! Owner of every live menu and of the navigation stacks between them.
//!
//! A navigation stack is the chain of menus opened from one root: each
//! entry is the parent of the next, and only the top entry is visible.
//! Stacks hold handles, never references, so a chain cannot form a cycle.

use crate::menu::{FrameOutcome, Menu};
use framemenu_core::{AudioSink, Canvas, ControlSource, MenuError, Result};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

/// Handle of a menu registered in a [`MenuRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuId(u32);

impl MenuId {
    /// Raw handle value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "menu#{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct NavigationStack {
    entries: Vec<MenuId>,
}

impl NavigationStack {
    fn position(&self, id: MenuId) -> Option<usize> {
        self.entries.iter().position(|&e| e == id)
    }
}

/// Registry of menus.
///
/// Menus are created by the host, handed over with [`MenuRegistry::add`]
/// and addressed by [`MenuId`] afterwards.
#[derive(Debug, Default)]
pub struct MenuRegistry {
    menus: BTreeMap<MenuId, Menu>,
    stacks: Vec<NavigationStack>,
    next_id: u32,
}

impl MenuRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a menu.
    pub fn add(&mut self, menu: Menu) -> MenuId {
        let id = MenuId(self.next_id);
        self.next_id += 1;
        debug!(%id, "menu registered");
        self.menus.insert(id, menu);
        id
    }

    /// Hide and unregister a menu.
    ///
    /// Returns `false` if the menu was already disposed or never existed.
    pub fn dispose(&mut self, id: MenuId) -> bool {
        if !self.menus.contains_key(&id) {
            return false;
        }
        self.hide_unchecked(id, false);
        self.menus.remove(&id);
        debug!(%id, "menu disposed");
        true
    }

    /// Number of registered menus.
    #[must_use]
    pub fn len(&self) -> usize {
        self.menus.len()
    }

    /// Check if no menu is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    /// Check if `id` is registered.
    #[must_use]
    pub fn contains(&self, id: MenuId) -> bool {
        self.menus.contains_key(&id)
    }

    /// Look up a menu.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::MenuDisposed`] for a disposed handle and
    /// [`MenuError::UnknownMenu`] for one never issued by this registry.
    pub fn menu(&self, id: MenuId) -> Result<&Menu> {
        self.menus.get(&id).ok_or_else(|| self.missing(id))
    }

    /// Look up a menu mutably.
    ///
    /// # Errors
    ///
    /// See [`MenuRegistry::menu`].
    pub fn menu_mut(&mut self, id: MenuId) -> Result<&mut Menu> {
        let missing = self.missing(id);
        self.menus.get_mut(&id).ok_or(missing)
    }

    /// Look up a menu, `None` if not registered.
    #[must_use]
    pub fn get(&self, id: MenuId) -> Option<&Menu> {
        self.menus.get(&id)
    }

    /// Look up a menu mutably, `None` if not registered.
    pub fn get_mut(&mut self, id: MenuId) -> Option<&mut Menu> {
        self.menus.get_mut(&id)
    }

    fn missing(&self, id: MenuId) -> MenuError {
        if id.0 < self.next_id {
            MenuError::MenuDisposed(id.0)
        } else {
            MenuError::UnknownMenu(id.0)
        }
    }

    fn ensure(&self, id: MenuId) -> Result<()> {
        if self.menus.contains_key(&id) {
            Ok(())
        } else {
            let err = self.missing(id);
            warn!(%id, error = %err, "navigation request for missing menu");
            Err(err)
        }
    }

    // === Visibility ===

    /// Whether any registered menu is visible.
    #[must_use]
    pub fn is_any_menu_visible(&self) -> bool {
        self.menus.values().any(Menu::is_visible)
    }

    /// Show a menu as the root of a new navigation stack.
    ///
    /// Any children it had open are hidden.
    ///
    /// # Errors
    ///
    /// Fails if `id` is not registered.
    pub fn show(&mut self, id: MenuId) -> Result<()> {
        self.ensure(id)?;
        self.detach(id);
        self.stacks.push(NavigationStack { entries: vec![id] });
        self.open(id);
        self.prune();
        debug!(%id, "menu shown");
        Ok(())
    }

    /// Show `child` on top of `parent`, hiding the parent.
    ///
    /// # Errors
    ///
    /// Fails if either menu is not registered, or if they are the same menu.
    pub fn show_child(&mut self, parent: MenuId, child: MenuId) -> Result<()> {
        if parent == child {
            return Err(MenuError::InvalidParent(child.0));
        }
        self.ensure(parent)?;
        self.ensure(child)?;

        self.detach(child);
        let stack = match self.locate(parent) {
            Some((stack, pos)) => {
                self.hide_above(stack, pos);
                stack
            }
            None => {
                self.stacks.push(NavigationStack {
                    entries: vec![parent],
                });
                self.stacks.len() - 1
            }
        };
        self.stacks[stack].entries.push(child);

        self.set_visible(parent, false);
        self.open(child);
        self.prune();
        debug!(%parent, %child, "child menu shown");
        Ok(())
    }

    /// Hide a menu and every child it has open.
    ///
    /// With `restore_parent`, the menu's parent is shown again, still
    /// linked to its own parent so a further back step can reach it.
    ///
    /// # Errors
    ///
    /// Fails if `id` is not registered.
    pub fn hide(&mut self, id: MenuId, restore_parent: bool) -> Result<()> {
        self.ensure(id)?;
        self.hide_unchecked(id, restore_parent);
        Ok(())
    }

    fn hide_unchecked(&mut self, id: MenuId, restore_parent: bool) {
        if let Some((stack, pos)) = self.locate(id) {
            self.hide_above(stack, pos);
            self.stacks[stack].entries.truncate(pos);
            if restore_parent && pos > 0 {
                let parent = self.stacks[stack].entries[pos - 1];
                self.open(parent);
                debug!(%id, %parent, "parent menu restored");
            }
        }
        self.set_visible(id, false);
        self.prune();
        debug!(%id, restore_parent, "menu hidden");
    }

    /// Parent of `id` in its navigation stack.
    #[must_use]
    pub fn parent_of(&self, id: MenuId) -> Option<MenuId> {
        let (stack, pos) = self.locate(id)?;
        pos.checked_sub(1).map(|p| self.stacks[stack].entries[p])
    }

    /// Child `id` has open, if any.
    #[must_use]
    pub fn child_of(&self, id: MenuId) -> Option<MenuId> {
        let (stack, pos) = self.locate(id)?;
        self.stacks[stack].entries.get(pos + 1).copied()
    }

    /// Whether `id` or any menu opened from it is visible.
    #[must_use]
    pub fn is_any_child_menu_visible(&self, id: MenuId) -> bool {
        if self.is_visible(id) {
            return true;
        }
        self.locate(id).is_some_and(|(stack, pos)| {
            self.stacks[stack].entries[pos + 1..]
                .iter()
                .any(|&e| self.is_visible(e))
        })
    }

    fn is_visible(&self, id: MenuId) -> bool {
        self.menus.get(&id).is_some_and(Menu::is_visible)
    }

    fn locate(&self, id: MenuId) -> Option<(usize, usize)> {
        self.stacks
            .iter()
            .enumerate()
            .find_map(|(i, s)| s.position(id).map(|pos| (i, pos)))
    }

    /// Hide every entry above `pos`, leaving them out of the stack.
    fn hide_above(&mut self, stack: usize, pos: usize) {
        let above = self.stacks[stack].entries.split_off(pos + 1);
        for id in above {
            self.set_visible(id, false);
        }
    }

    /// Take `id` out of whatever stack holds it, closing its children.
    ///
    /// Leaves emptied stacks behind; callers prune once the new chain is
    /// in place.
    fn detach(&mut self, id: MenuId) {
        if let Some((stack, pos)) = self.locate(id) {
            self.hide_above(stack, pos);
            self.stacks[stack].entries.truncate(pos);
        }
    }

    /// Drop stacks with nothing left on screen.
    fn prune(&mut self) {
        let menus = &self.menus;
        self.stacks.retain(|s| {
            s.entries
                .iter()
                .any(|id| menus.get(id).is_some_and(Menu::is_visible))
        });
    }

    fn open(&mut self, id: MenuId) {
        if let Some(menu) = self.menus.get_mut(&id) {
            menu.set_visible(true);
            menu.mark_opened();
        }
    }

    fn set_visible(&mut self, id: MenuId, visible: bool) {
        if let Some(menu) = self.menus.get_mut(&id) {
            menu.set_visible(visible);
        }
    }

    // === Frame ===

    /// Process one frame for every visible menu.
    ///
    /// A menu that accepts back is hidden and its parent restored before
    /// the next menu is processed.
    pub fn process_frame(&mut self, input: &mut dyn ControlSource, audio: &mut dyn AudioSink) {
        let visible: Vec<MenuId> = self
            .menus
            .iter()
            .filter(|(_, m)| m.is_visible())
            .map(|(&id, _)| id)
            .collect();

        for id in visible {
            let Some(menu) = self.menus.get_mut(&id) else {
                continue;
            };
            if menu.process(input, audio) == FrameOutcome::Back {
                self.hide_unchecked(id, true);
            }
        }
    }

    /// Draw every visible menu.
    pub fn draw_frame(&self, canvas: &mut dyn Canvas) {
        for menu in self.menus.values().filter(|m| m.is_visible()) {
            menu.draw(canvas);
        }
    }
}

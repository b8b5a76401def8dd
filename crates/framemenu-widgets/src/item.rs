//! Menu items and their per-kind navigation hooks.
//!
//! Items get first refusal over every navigation action aimed at them.
//! A hook answers with an [`Intercept`], which tells the owning menu
//! whether to run its own default behavior afterwards.

use crate::numeric_scroller::NumericScroller;
use crate::scroller::{ScrollerOptions, TextScroller};

/// Answer of an item hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intercept {
    /// The item ignores the action; the menu runs its default.
    Declined,
    /// The item consumed the action; the menu does nothing else.
    Handled,
    /// The item reacted, and the menu still runs its default.
    HandledWithDefault,
}

impl Intercept {
    /// Whether the menu's default action runs after this answer.
    #[must_use]
    pub const fn runs_default(self) -> bool {
        !matches!(self, Self::Handled)
    }

    /// Whether the item did anything.
    #[must_use]
    pub const fn is_handled(self) -> bool {
        !matches!(self, Self::Declined)
    }
}

/// Kind-specific state of an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// Text only
    Plain,
    /// On/off toggle flipped by accept
    Checkbox {
        /// Current state
        checked: bool,
    },
    /// Pick one of several strings with left/right
    Scroller(TextScroller),
    /// Pick a decimal value with left/right
    NumericScroller(NumericScroller),
}

/// A selectable row in a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    text: String,
    description: Option<String>,
    visible: bool,
    disabled: bool,
    skip_if_disabled: bool,
    kind: ItemKind,
}

impl MenuItem {
    /// Create a plain item.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_kind(text, ItemKind::Plain)
    }

    /// Create a checkbox item.
    #[must_use]
    pub fn checkbox(text: impl Into<String>, checked: bool) -> Self {
        Self::with_kind(text, ItemKind::Checkbox { checked })
    }

    /// Create a text scroller item.
    #[must_use]
    pub fn scroller(text: impl Into<String>, scroller: TextScroller) -> Self {
        Self::with_kind(text, ItemKind::Scroller(scroller))
    }

    /// Create a numeric scroller item.
    #[must_use]
    pub fn numeric(text: impl Into<String>, scroller: NumericScroller) -> Self {
        Self::with_kind(text, ItemKind::NumericScroller(scroller))
    }

    /// Create an item of any kind.
    #[must_use]
    pub fn with_kind(text: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            text: text.into(),
            description: None,
            visible: true,
            disabled: false,
            skip_if_disabled: true,
            kind,
        }
    }

    /// Set the description shown while the item is selected.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set visibility.
    #[must_use]
    pub const fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether up/down navigation skips this item while disabled.
    #[must_use]
    pub const fn skip_if_disabled(mut self, skip: bool) -> Self {
        self.skip_if_disabled = skip;
        self
    }

    // === Accessors ===

    /// Display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Description, if any.
    #[must_use]
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether the item is rendered at all.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the item rejects left/right/accept.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether navigation skips this item while it is disabled.
    #[must_use]
    pub const fn is_skipped_if_disabled(&self) -> bool {
        self.skip_if_disabled
    }

    /// Whether up/down navigation may land on this item.
    #[must_use]
    pub const fn is_eligible(&self) -> bool {
        self.visible && !(self.disabled && self.skip_if_disabled)
    }

    /// Kind-specific state.
    #[must_use]
    pub const fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// Mutable kind-specific state.
    pub fn kind_mut(&mut self) -> &mut ItemKind {
        &mut self.kind
    }

    /// Checkbox state, if this is a checkbox.
    #[must_use]
    pub const fn checked(&self) -> Option<bool> {
        match self.kind {
            ItemKind::Checkbox { checked } => Some(checked),
            _ => None,
        }
    }

    /// Option view of either scroller kind.
    #[must_use]
    pub fn scroller_options(&self) -> Option<&dyn ScrollerOptions> {
        match &self.kind {
            ItemKind::Scroller(s) => Some(s),
            ItemKind::NumericScroller(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric scroller, if this is one.
    #[must_use]
    pub const fn numeric_scroller(&self) -> Option<&NumericScroller> {
        match &self.kind {
            ItemKind::NumericScroller(s) => Some(s),
            _ => None,
        }
    }

    /// Mutable numeric scroller, if this is one.
    pub fn numeric_scroller_mut(&mut self) -> Option<&mut NumericScroller> {
        match &mut self.kind {
            ItemKind::NumericScroller(s) => Some(s),
            _ => None,
        }
    }

    // === Mutators ===

    /// Set display text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Set or clear the description.
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Set visibility.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Set disabled state.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Set whether navigation skips this item while disabled.
    pub fn set_skip_if_disabled(&mut self, skip: bool) {
        self.skip_if_disabled = skip;
    }

    // === Navigation hooks ===

    /// Up was pressed while this item is selected.
    pub fn on_move_up(&mut self) -> Intercept {
        Intercept::Declined
    }

    /// Down was pressed while this item is selected.
    pub fn on_move_down(&mut self) -> Intercept {
        Intercept::Declined
    }

    /// Left was pressed while this item is selected.
    pub fn on_move_left(&mut self) -> Intercept {
        match &mut self.kind {
            ItemKind::Scroller(s) => {
                s.step_left();
                Intercept::HandledWithDefault
            }
            ItemKind::NumericScroller(s) => {
                s.step_left();
                Intercept::Handled
            }
            ItemKind::Plain | ItemKind::Checkbox { .. } => Intercept::Declined,
        }
    }

    /// Right was pressed while this item is selected.
    pub fn on_move_right(&mut self) -> Intercept {
        match &mut self.kind {
            ItemKind::Scroller(s) => {
                s.step_right();
                Intercept::HandledWithDefault
            }
            ItemKind::NumericScroller(s) => {
                s.step_right();
                Intercept::Handled
            }
            ItemKind::Plain | ItemKind::Checkbox { .. } => Intercept::Declined,
        }
    }

    /// Accept was pressed while this item is selected.
    pub fn on_accept(&mut self) -> Intercept {
        match &mut self.kind {
            ItemKind::Checkbox { checked } => {
                *checked = !*checked;
                Intercept::HandledWithDefault
            }
            _ => Intercept::Declined,
        }
    }

    /// Back was pressed while this item is selected.
    pub fn on_back(&mut self) -> Intercept {
        Intercept::Declined
    }
}

//! Menu chrome: the non-item components drawn around the item list.
//!
//! Each component refreshes its derived state in `process` once per
//! frame and is drawn by the menu's style.

use crate::items::MenuItems;
use crate::style::MenuStyle;
use framemenu_core::Size;

/// Slot in a style's draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Title banner
    Banner,
    /// Subtitle bar with optional counter
    Subtitle,
    /// Backdrop behind the item rows
    Background,
    /// The on-screen item rows
    Items,
    /// Scroll indicator
    UpDownDisplay,
    /// Description of the selected item
    Description,
}

impl ComponentKind {
    /// Top-to-bottom order used by the default style.
    pub const DEFAULT_ORDER: [Self; 6] = [
        Self::Banner,
        Self::Subtitle,
        Self::Background,
        Self::Items,
        Self::UpDownDisplay,
        Self::Description,
    ];
}

/// Title banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuBanner {
    title: String,
}

impl MenuBanner {
    /// Create a banner.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Banner title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }
}

/// Subtitle bar.
///
/// With the counter enabled it shows `current/total`, counting only the
/// items navigation can land on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSubtitle {
    text: String,
    show_counter: bool,
    counter: Option<String>,
}

impl MenuSubtitle {
    /// Create a subtitle with the counter enabled.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            show_counter: true,
            counter: None,
        }
    }

    /// Subtitle text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether the counter is shown.
    #[must_use]
    pub const fn shows_counter(&self) -> bool {
        self.show_counter
    }

    /// Toggle the counter.
    pub fn set_show_counter(&mut self, show: bool) {
        self.show_counter = show;
        if !show {
            self.counter = None;
        }
    }

    /// Counter text computed by the last `process`.
    #[must_use]
    pub fn counter_text(&self) -> Option<&str> {
        self.counter.as_deref()
    }

    /// Refresh the counter from the current selection.
    pub fn process(&mut self, items: &MenuItems, selected: usize) {
        self.counter = if self.show_counter && !items.is_empty() {
            let (rank, total) = items.eligible_rank(selected);
            Some(format!("{rank}/{total}"))
        } else {
            None
        };
    }
}

/// Backdrop behind the item rows.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MenuBackground {
    height: f32,
}

impl MenuBackground {
    /// Create a background.
    #[must_use]
    pub const fn new() -> Self {
        Self { height: 0.0 }
    }

    /// Height covering the on-screen rows.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Size the background to `rows` item rows.
    pub fn process(&mut self, rows: usize, item_height: f32) {
        self.height = rows as f32 * item_height;
    }
}

/// Scroll indicator, shown only when the list is longer than the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuUpDownDisplay {
    shown: bool,
}

impl MenuUpDownDisplay {
    /// Create a hidden indicator.
    #[must_use]
    pub const fn new() -> Self {
        Self { shown: false }
    }

    /// Whether the indicator is drawn this frame.
    #[must_use]
    pub const fn is_shown(&self) -> bool {
        self.shown
    }

    /// Show the indicator when `item_count` exceeds `max_on_screen`.
    pub fn process(&mut self, item_count: usize, max_on_screen: usize) {
        self.shown = item_count > max_on_screen;
    }
}

/// Description box for the selected item.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuDescription {
    text: Option<String>,
    formatted: String,
    size: Size,
}

impl Default for MenuDescription {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuDescription {
    /// Create an empty description.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: None,
            formatted: String::new(),
            size: Size::ZERO,
        }
    }

    /// Raw description text.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Text as wrapped by the style.
    #[must_use]
    pub fn formatted_text(&self) -> &str {
        &self.formatted
    }

    /// Measured size of the wrapped text.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Whether there is anything to draw.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        !self.formatted.is_empty()
    }

    /// Take the selected item's description, reformatting only when it
    /// changed.
    pub fn process(&mut self, description: Option<&str>, style: &dyn MenuStyle) {
        let description = description.filter(|d| !d.is_empty());
        if self.text.as_deref() == description {
            return;
        }
        self.text = description.map(str::to_string);
        match description {
            Some(text) => {
                let (formatted, size) = style.format_description_text(text);
                self.formatted = formatted;
                self.size = size;
            }
            None => {
                self.formatted.clear();
                self.size = Size::ZERO;
            }
        }
    }
}

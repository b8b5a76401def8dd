//! Scroller items: a row whose value is picked from a list of options
//! with left/right.

/// Discrete option set behind a scroller item.
///
/// Styles draw scrollers through this trait, so both the text and the
/// numeric scroller render the same way.
pub trait ScrollerOptions {
    /// Number of selectable options.
    fn option_count(&self) -> usize;

    /// Index of the current option.
    fn selected_index(&self) -> usize;

    /// Select an option; out-of-range indices are clamped.
    fn set_selected_index(&mut self, index: usize);

    /// Display text of the current option.
    fn selected_option_text(&self) -> String;
}

/// Scroller over a fixed list of strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextScroller {
    options: Vec<String>,
    selected_index: usize,
    wrap_around: bool,
}

impl TextScroller {
    /// Create a scroller over `options`, selecting the first one.
    #[must_use]
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            selected_index: 0,
            wrap_around: true,
        }
    }

    /// Set whether stepping past either end wraps to the other end.
    #[must_use]
    pub const fn wrap_around(mut self, wrap: bool) -> Self {
        self.wrap_around = wrap;
        self
    }

    /// Select the initial option.
    #[must_use]
    pub fn selected(mut self, index: usize) -> Self {
        self.set_selected_index(index);
        self
    }

    /// The option strings.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Whether stepping wraps around.
    #[must_use]
    pub const fn wraps(&self) -> bool {
        self.wrap_around
    }

    /// Step to the previous option.
    pub fn step_left(&mut self) {
        let count = self.options.len();
        if count == 0 {
            return;
        }
        self.selected_index = match self.selected_index {
            0 if self.wrap_around => count - 1,
            0 => 0,
            i => i - 1,
        };
    }

    /// Step to the next option.
    pub fn step_right(&mut self) {
        let count = self.options.len();
        if count == 0 {
            return;
        }
        self.selected_index = if self.selected_index + 1 < count {
            self.selected_index + 1
        } else if self.wrap_around {
            0
        } else {
            count - 1
        };
    }
}

impl ScrollerOptions for TextScroller {
    fn option_count(&self) -> usize {
        self.options.len()
    }

    fn selected_index(&self) -> usize {
        self.selected_index
    }

    fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index.min(self.options.len().saturating_sub(1));
    }

    fn selected_option_text(&self) -> String {
        self.options
            .get(self.selected_index)
            .cloned()
            .unwrap_or_default()
    }
}

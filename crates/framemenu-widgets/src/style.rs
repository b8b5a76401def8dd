//! Styles: layout metrics and the draw operations for each component.

use crate::components::{
    ComponentKind, MenuBackground, MenuBanner, MenuDescription, MenuSubtitle, MenuUpDownDisplay,
};
use crate::item::{ItemKind, MenuItem};
use crate::scroller::ScrollerOptions;
use framemenu_core::{Canvas, Color, FontWeight, Point, Rect, Size, TextAlign, TextStyle};
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

/// Fixed layout metrics of a style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleMetrics {
    /// Where a new menu is placed
    pub initial_location: Point,
    /// Width of every component
    pub menu_width: f32,
    /// Banner height
    pub banner_height: f32,
    /// Subtitle bar height
    pub subtitle_height: f32,
    /// Height of one item row
    pub item_height: f32,
    /// Scroll indicator height
    pub up_down_height: f32,
}

impl Default for StyleMetrics {
    fn default() -> Self {
        Self {
            initial_location: Point::new(30.0, 23.0),
            menu_width: 432.0,
            banner_height: 108.0,
            subtitle_height: 37.0,
            item_height: 37.0,
            up_down_height: 38.0,
        }
    }
}

/// Rendering collaborator of a menu.
///
/// Every draw operation starts at `cursor` and advances it past what it
/// drew, so components stack in [`MenuStyle::draw_order`].
pub trait MenuStyle {
    /// Layout metrics.
    fn metrics(&self) -> &StyleMetrics;

    /// Order in which components are processed and drawn.
    fn draw_order(&self) -> &[ComponentKind] {
        &ComponentKind::DEFAULT_ORDER
    }

    /// Draw the title banner.
    fn draw_banner(&self, canvas: &mut dyn Canvas, banner: &MenuBanner, cursor: &mut Point);

    /// Draw the subtitle bar.
    fn draw_subtitle(&self, canvas: &mut dyn Canvas, subtitle: &MenuSubtitle, cursor: &mut Point);

    /// Draw the backdrop behind the rows. Does not advance the cursor.
    fn draw_background(
        &self,
        canvas: &mut dyn Canvas,
        background: &MenuBackground,
        cursor: &mut Point,
    );

    /// Draw a plain item row.
    fn draw_item(&self, canvas: &mut dyn Canvas, item: &MenuItem, cursor: &mut Point, selected: bool);

    /// Draw a checkbox row.
    fn draw_item_checkbox(
        &self,
        canvas: &mut dyn Canvas,
        item: &MenuItem,
        checked: bool,
        cursor: &mut Point,
        selected: bool,
    );

    /// Draw a scroller row.
    fn draw_item_scroller(
        &self,
        canvas: &mut dyn Canvas,
        item: &MenuItem,
        options: &dyn ScrollerOptions,
        cursor: &mut Point,
        selected: bool,
    );

    /// Draw the scroll indicator.
    fn draw_up_down_display(
        &self,
        canvas: &mut dyn Canvas,
        display: &MenuUpDownDisplay,
        cursor: &mut Point,
    );

    /// Draw the description box.
    fn draw_description(
        &self,
        canvas: &mut dyn Canvas,
        description: &MenuDescription,
        cursor: &mut Point,
    );

    /// Wrap description text to the menu width and measure it.
    fn format_description_text(&self, text: &str) -> (String, Size);

    /// Draw any item, dispatching on its kind.
    fn draw_any_item(
        &self,
        canvas: &mut dyn Canvas,
        item: &MenuItem,
        cursor: &mut Point,
        selected: bool,
    ) {
        match item.kind() {
            ItemKind::Plain => self.draw_item(canvas, item, cursor, selected),
            ItemKind::Checkbox { checked } => {
                self.draw_item_checkbox(canvas, item, *checked, cursor, selected);
            }
            ItemKind::Scroller(options) => {
                self.draw_item_scroller(canvas, item, options, cursor, selected);
            }
            ItemKind::NumericScroller(options) => {
                self.draw_item_scroller(canvas, item, options, cursor, selected);
            }
        }
    }
}

/// Flat dark style drawn with rectangles and text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultStyle {
    metrics: StyleMetrics,
}

impl DefaultStyle {
    const PADDING: f32 = 8.0;
    const TEXT_SIZE: f32 = 16.0;
    const LINE_HEIGHT: f32 = 22.0;
    /// Average advance of one terminal column of text.
    const COLUMN_WIDTH: f32 = 9.0;

    /// Create a style with custom metrics.
    #[must_use]
    pub const fn new(metrics: StyleMetrics) -> Self {
        Self { metrics }
    }

    fn text_style(color: Color) -> TextStyle {
        TextStyle {
            size: Self::TEXT_SIZE,
            color,
            ..TextStyle::default()
        }
    }

    fn row_colors(item: &MenuItem, selected: bool) -> (Option<Color>, Color) {
        let text = if item.is_disabled() {
            Color::rgb(0.6, 0.6, 0.6)
        } else if selected {
            Color::BLACK
        } else {
            Color::WHITE
        };
        let highlight = selected.then_some(Color::WHITE);
        (highlight, text)
    }

    fn draw_row(&self, canvas: &mut dyn Canvas, item: &MenuItem, cursor: Point, selected: bool) -> Color {
        let (highlight, text_color) = Self::row_colors(item, selected);
        if let Some(color) = highlight {
            canvas.fill_rect(
                Rect::new(cursor.x, cursor.y, self.metrics.menu_width, self.metrics.item_height),
                color,
            );
        }
        canvas.draw_text(
            item.text(),
            Point::new(cursor.x + Self::PADDING, cursor.y + Self::PADDING),
            &Self::text_style(text_color),
        );
        text_color
    }

    fn right_edge(&self, cursor: Point) -> f32 {
        cursor.x + self.metrics.menu_width - Self::PADDING
    }

    fn columns(&self) -> usize {
        let usable = (self.metrics.menu_width - 2.0 * Self::PADDING).max(Self::COLUMN_WIDTH);
        (usable / Self::COLUMN_WIDTH) as usize
    }
}

impl MenuStyle for DefaultStyle {
    fn metrics(&self) -> &StyleMetrics {
        &self.metrics
    }

    fn draw_banner(&self, canvas: &mut dyn Canvas, banner: &MenuBanner, cursor: &mut Point) {
        let m = &self.metrics;
        canvas.fill_rect(
            Rect::new(cursor.x, cursor.y, m.menu_width, m.banner_height),
            Color::rgb(0.1, 0.3, 0.6),
        );
        let style = TextStyle {
            size: 32.0,
            weight: FontWeight::Bold,
            align: TextAlign::Center,
            ..Self::text_style(Color::WHITE)
        };
        canvas.draw_text(
            banner.title(),
            Point::new(cursor.x + m.menu_width / 2.0, cursor.y + m.banner_height / 2.0),
            &style,
        );
        *cursor = cursor.down(m.banner_height);
    }

    fn draw_subtitle(&self, canvas: &mut dyn Canvas, subtitle: &MenuSubtitle, cursor: &mut Point) {
        let m = &self.metrics;
        canvas.fill_rect(
            Rect::new(cursor.x, cursor.y, m.menu_width, m.subtitle_height),
            Color::BLACK,
        );
        let style = Self::text_style(Color::rgb(0.4, 0.7, 1.0));
        let baseline = cursor.y + Self::PADDING;
        canvas.draw_text(
            &subtitle.text().to_uppercase(),
            Point::new(cursor.x + Self::PADDING, baseline),
            &style,
        );
        if let Some(counter) = subtitle.counter_text() {
            let right = TextStyle {
                align: TextAlign::Right,
                ..style
            };
            canvas.draw_text(counter, Point::new(self.right_edge(*cursor), baseline), &right);
        }
        *cursor = cursor.down(m.subtitle_height);
    }

    fn draw_background(
        &self,
        canvas: &mut dyn Canvas,
        background: &MenuBackground,
        cursor: &mut Point,
    ) {
        if background.height() > 0.0 {
            canvas.fill_rect(
                Rect::new(cursor.x, cursor.y, self.metrics.menu_width, background.height()),
                Color::BLACK.with_alpha(0.7),
            );
        }
    }

    fn draw_item(&self, canvas: &mut dyn Canvas, item: &MenuItem, cursor: &mut Point, selected: bool) {
        self.draw_row(canvas, item, *cursor, selected);
        *cursor = cursor.down(self.metrics.item_height);
    }

    fn draw_item_checkbox(
        &self,
        canvas: &mut dyn Canvas,
        item: &MenuItem,
        checked: bool,
        cursor: &mut Point,
        selected: bool,
    ) {
        let color = self.draw_row(canvas, item, *cursor, selected);
        let side = self.metrics.item_height - 2.0 * Self::PADDING;
        let bounds = Rect::new(
            self.right_edge(*cursor) - side,
            cursor.y + Self::PADDING,
            side,
            side,
        );
        canvas.stroke_rect(bounds, color, 2.0);
        if checked {
            canvas.fill_rect(
                Rect::new(bounds.x + 4.0, bounds.y + 4.0, side - 8.0, side - 8.0),
                color,
            );
        }
        *cursor = cursor.down(self.metrics.item_height);
    }

    fn draw_item_scroller(
        &self,
        canvas: &mut dyn Canvas,
        item: &MenuItem,
        options: &dyn ScrollerOptions,
        cursor: &mut Point,
        selected: bool,
    ) {
        let color = self.draw_row(canvas, item, *cursor, selected);
        let value = options.selected_option_text();
        let label = if selected && !item.is_disabled() {
            format!("< {value} >")
        } else {
            value
        };
        let style = TextStyle {
            align: TextAlign::Right,
            ..Self::text_style(color)
        };
        canvas.draw_text(
            &label,
            Point::new(self.right_edge(*cursor), cursor.y + Self::PADDING),
            &style,
        );
        *cursor = cursor.down(self.metrics.item_height);
    }

    fn draw_up_down_display(
        &self,
        canvas: &mut dyn Canvas,
        display: &MenuUpDownDisplay,
        cursor: &mut Point,
    ) {
        if !display.is_shown() {
            return;
        }
        let m = &self.metrics;
        canvas.fill_rect(
            Rect::new(cursor.x, cursor.y, m.menu_width, m.up_down_height),
            Color::BLACK.with_alpha(0.8),
        );
        let mid_x = cursor.x + m.menu_width / 2.0;
        let top = cursor.y + m.up_down_height * 0.25;
        let bottom = cursor.y + m.up_down_height * 0.75;
        let mid_y = cursor.y + m.up_down_height / 2.0;
        canvas.draw_line(Point::new(mid_x - 6.0, mid_y - 2.0), Point::new(mid_x, top), Color::WHITE, 2.0);
        canvas.draw_line(Point::new(mid_x, top), Point::new(mid_x + 6.0, mid_y - 2.0), Color::WHITE, 2.0);
        canvas.draw_line(Point::new(mid_x - 6.0, mid_y + 2.0), Point::new(mid_x, bottom), Color::WHITE, 2.0);
        canvas.draw_line(Point::new(mid_x, bottom), Point::new(mid_x + 6.0, mid_y + 2.0), Color::WHITE, 2.0);
        *cursor = cursor.down(m.up_down_height);
    }

    fn draw_description(
        &self,
        canvas: &mut dyn Canvas,
        description: &MenuDescription,
        cursor: &mut Point,
    ) {
        if !description.is_shown() {
            return;
        }
        let width = self.metrics.menu_width;
        let height = description.size().height;
        *cursor = cursor.down(Self::PADDING / 2.0);
        canvas.draw_line(*cursor, Point::new(cursor.x + width, cursor.y), Color::BLACK, 2.0);
        canvas.fill_rect(
            Rect::new(cursor.x, cursor.y, width, height),
            Color::BLACK.with_alpha(0.6),
        );
        let style = Self::text_style(Color::WHITE);
        for (i, line) in description.formatted_text().lines().enumerate() {
            let y = cursor.y + Self::PADDING + i as f32 * Self::LINE_HEIGHT;
            canvas.draw_text(line, Point::new(cursor.x + Self::PADDING, y), &style);
        }
        *cursor = cursor.down(height);
    }

    fn format_description_text(&self, text: &str) -> (String, Size) {
        let lines = wrap_text(text, self.columns());
        let height = lines.len() as f32 * Self::LINE_HEIGHT + 2.0 * Self::PADDING;
        (lines.join("\n"), Size::new(self.metrics.menu_width, height))
    }
}

/// Greedy word wrap to `columns` display columns.
///
/// Words wider than a line are placed on a line of their own.
fn wrap_text(text: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        let mut width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            if width > 0 && width + 1 + word_width > columns {
                lines.push(std::mem::take(&mut line));
                width = 0;
            }
            if width > 0 {
                line.push(' ');
                width += 1;
            }
            line.push_str(word);
            width += word_width;
        }
        lines.push(line);
    }
    lines
}

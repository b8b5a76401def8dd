//! The menu aggregate: items, window, input and chrome, driven once per
//! frame through [`Menu::process`] and [`Menu::draw`].

use crate::components::{
    ComponentKind, MenuBackground, MenuBanner, MenuDescription, MenuSubtitle, MenuUpDownDisplay,
};
use crate::config::{MenuConfig, MenuControls, MenuSounds};
use crate::input::{InputStateMachine, NavAction};
use crate::item::{Intercept, MenuItem};
use crate::items::MenuItems;
use crate::style::{DefaultStyle, MenuStyle};
use crate::window::{VisibleWindow, WindowState};
use framemenu_core::{
    play_optional, AudioSink, Canvas, Control, ControlSource, Metadata, Point, Sound,
};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, trace};

/// Notification delivered to menu observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    /// The selected index changed.
    ///
    /// Item texts are captured when the event fires, so `old_item` still
    /// names an item removed by the same [`Menu::update_items`] call.
    SelectedItemChanged {
        /// Index before the change
        old_index: usize,
        /// Index after the change
        new_index: usize,
        /// Text of the item previously selected
        old_item: Option<String>,
        /// Text of the item now selected
        new_item: Option<String>,
    },
    /// The menu was shown or hidden.
    VisibleChanged {
        /// New visibility
        visible: bool,
    },
    /// Accept reached an enabled item.
    ItemAccepted {
        /// Item index
        index: usize,
    },
    /// An item hook changed the item's own state.
    ItemChanged {
        /// Item index
        index: usize,
    },
}

/// What a processed frame asks of the menu's owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Nothing to do
    #[default]
    Continue,
    /// Back was accepted: hide this menu and restore its parent
    Back,
}

type Observer = Box<dyn FnMut(&Menu, &MenuEvent)>;

/// A menu of selectable items.
pub struct Menu {
    style: Rc<dyn MenuStyle>,
    location: Point,
    banner: Option<MenuBanner>,
    subtitle: Option<MenuSubtitle>,
    background: Option<MenuBackground>,
    up_down_display: Option<MenuUpDownDisplay>,
    description: Option<MenuDescription>,
    items: MenuItems,
    selected_index: usize,
    max_items_on_screen: usize,
    window: WindowState,
    visible: bool,
    input: InputStateMachine,
    controls: MenuControls,
    sounds: MenuSounds,
    disable_controls: bool,
    allowed_controls: Vec<Control>,
    metadata: Metadata,
    observers: Vec<Observer>,
}

impl fmt::Debug for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("title", &self.banner.as_ref().map(MenuBanner::title))
            .field("items", &self.items.len())
            .field("selected_index", &self.selected_index)
            .field("max_items_on_screen", &self.max_items_on_screen)
            .field("window", &self.window.window())
            .field("visible", &self.visible)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl Menu {
    /// Create a hidden, empty menu drawn with [`DefaultStyle`].
    #[must_use]
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self::with_style(title, subtitle, Rc::new(DefaultStyle::default()))
    }

    /// Create a hidden, empty menu drawn with `style`.
    #[must_use]
    pub fn with_style(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        style: Rc<dyn MenuStyle>,
    ) -> Self {
        let location = style.metrics().initial_location;
        Self {
            style,
            location,
            banner: Some(MenuBanner::new(title)),
            subtitle: Some(MenuSubtitle::new(subtitle)),
            background: Some(MenuBackground::new()),
            up_down_display: Some(MenuUpDownDisplay::new()),
            description: Some(MenuDescription::new()),
            items: MenuItems::new(),
            selected_index: 0,
            max_items_on_screen: MenuConfig::DEFAULT_MAX_ITEMS_ON_SCREEN,
            window: WindowState::new(),
            visible: false,
            input: InputStateMachine::new(),
            controls: MenuControls::default(),
            sounds: MenuSounds::default(),
            disable_controls: true,
            allowed_controls: Control::DEFAULT_ALLOWED.to_vec(),
            metadata: Metadata::new(),
            observers: Vec::new(),
        }
    }

    /// Create a menu from a configuration, drawn with a [`DefaultStyle`]
    /// using the configured metrics.
    #[must_use]
    pub fn from_config(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        config: &MenuConfig,
    ) -> Self {
        let style = Rc::new(DefaultStyle::new(config.style.clone()));
        let mut menu = Self::with_style(title, subtitle, style);
        menu.apply_config(config);
        menu
    }

    /// Apply controls, sounds, control suppression and window budget.
    ///
    /// Layout metrics belong to the style and are left alone.
    pub fn apply_config(&mut self, config: &MenuConfig) {
        self.controls = config.controls.clone();
        self.sounds = config.sounds.clone();
        self.disable_controls = config.disable_controls;
        self.allowed_controls.clone_from(&config.allowed_controls);
        self.set_max_items_on_screen(config.max_items_on_screen);
    }

    // === Style and layout ===

    /// Style.
    #[must_use]
    pub fn style(&self) -> &dyn MenuStyle {
        &*self.style
    }

    /// Replace the style.
    pub fn set_style(&mut self, style: Rc<dyn MenuStyle>) {
        self.style = style;
    }

    /// Top-left corner the menu is drawn from.
    #[must_use]
    pub const fn location(&self) -> Point {
        self.location
    }

    /// Move the menu.
    pub fn set_location(&mut self, location: Point) {
        self.location = location;
    }

    /// Banner, if any.
    #[must_use]
    pub const fn banner(&self) -> Option<&MenuBanner> {
        self.banner.as_ref()
    }

    /// Mutable banner.
    pub fn banner_mut(&mut self) -> Option<&mut MenuBanner> {
        self.banner.as_mut()
    }

    /// Replace or remove the banner.
    pub fn set_banner(&mut self, banner: Option<MenuBanner>) {
        self.banner = banner;
    }

    /// Subtitle, if any.
    #[must_use]
    pub const fn subtitle(&self) -> Option<&MenuSubtitle> {
        self.subtitle.as_ref()
    }

    /// Mutable subtitle.
    pub fn subtitle_mut(&mut self) -> Option<&mut MenuSubtitle> {
        self.subtitle.as_mut()
    }

    /// Replace or remove the subtitle.
    pub fn set_subtitle(&mut self, subtitle: Option<MenuSubtitle>) {
        self.subtitle = subtitle;
    }

    /// Background, if any.
    #[must_use]
    pub const fn background(&self) -> Option<&MenuBackground> {
        self.background.as_ref()
    }

    /// Replace or remove the background.
    pub fn set_background(&mut self, background: Option<MenuBackground>) {
        self.background = background;
    }

    /// Scroll indicator, if any.
    #[must_use]
    pub const fn up_down_display(&self) -> Option<&MenuUpDownDisplay> {
        self.up_down_display.as_ref()
    }

    /// Replace or remove the scroll indicator.
    pub fn set_up_down_display(&mut self, display: Option<MenuUpDownDisplay>) {
        self.up_down_display = display;
    }

    /// Description box, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&MenuDescription> {
        self.description.as_ref()
    }

    /// Replace or remove the description box.
    pub fn set_description(&mut self, description: Option<MenuDescription>) {
        self.description = description;
    }

    // === Input and audio configuration ===

    /// Control mapping.
    #[must_use]
    pub const fn controls(&self) -> &MenuControls {
        &self.controls
    }

    /// Mutable control mapping.
    pub fn controls_mut(&mut self) -> &mut MenuControls {
        &mut self.controls
    }

    /// Sound set.
    #[must_use]
    pub const fn sounds(&self) -> &MenuSounds {
        &self.sounds
    }

    /// Mutable sound set.
    pub fn sounds_mut(&mut self) -> &mut MenuSounds {
        &mut self.sounds
    }

    /// Whether unrelated controls are suppressed while processing.
    #[must_use]
    pub const fn disables_controls(&self) -> bool {
        self.disable_controls
    }

    /// Toggle control suppression.
    pub fn set_disable_controls(&mut self, disable: bool) {
        self.disable_controls = disable;
    }

    /// Controls left enabled under the menu.
    #[must_use]
    pub fn allowed_controls(&self) -> &[Control] {
        &self.allowed_controls
    }

    /// Replace the allow-list.
    pub fn set_allowed_controls(&mut self, allowed: Vec<Control>) {
        self.allowed_controls = allowed;
    }

    /// Host data attached to the menu.
    #[must_use]
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Mutable host data.
    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    // === Items and selection ===

    /// Items.
    #[must_use]
    pub const fn items(&self) -> &MenuItems {
        &self.items
    }

    /// Mutate the items, then clamp the selection and refresh the window.
    pub fn update_items<R>(&mut self, f: impl FnOnce(&mut MenuItems) -> R) -> R {
        let old_item = self.selected_text();
        let result = f(&mut self.items);
        let clamped = self.clamp_index(self.selected_index);
        if clamped == self.selected_index {
            self.refresh_window();
        } else {
            self.select(clamped, old_item);
        }
        result
    }

    /// Append an item.
    pub fn push_item(&mut self, item: MenuItem) {
        self.update_items(|items| items.push(item));
    }

    /// Selected index. Zero when the menu is empty.
    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Select an item.
    ///
    /// The index is clamped to the last item. Observers hear about it only
    /// if the selection actually moved.
    pub fn set_selected_index(&mut self, index: usize) {
        let new_index = self.clamp_index(index);
        if new_index != self.selected_index {
            let old_item = self.selected_text();
            self.select(new_index, old_item);
        }
    }

    fn select(&mut self, new_index: usize, old_item: Option<String>) {
        let old_index = self.selected_index;
        self.selected_index = new_index;
        self.refresh_window();
        trace!(old_index, new_index, "selection changed");
        let new_item = self.selected_text();
        self.emit(&MenuEvent::SelectedItemChanged {
            old_index,
            new_index,
            old_item,
            new_item,
        });
    }

    fn selected_text(&self) -> Option<String> {
        self.selected_item().map(|item| item.text().to_string())
    }

    /// Selected item, if the menu has any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.items.get(self.selected_index)
    }

    /// Select the first item matching `pred`. Returns whether one matched.
    pub fn select_item_where(&mut self, pred: impl FnMut(&MenuItem) -> bool) -> bool {
        match self.items.position(pred) {
            Some(index) => {
                self.set_selected_index(index);
                true
            }
            None => false,
        }
    }

    fn clamp_index(&self, index: usize) -> usize {
        index.min(self.items.len().saturating_sub(1))
    }

    // === Window ===

    /// Visible-item budget.
    #[must_use]
    pub const fn max_items_on_screen(&self) -> usize {
        self.max_items_on_screen
    }

    /// Change the budget and refresh the window.
    pub fn set_max_items_on_screen(&mut self, max: usize) {
        self.max_items_on_screen = max;
        self.refresh_window();
    }

    /// Current window, `None` when nothing is on screen.
    #[must_use]
    pub const fn visible_window(&self) -> Option<VisibleWindow> {
        self.window.window()
    }

    /// Whether the menu is shown with at least one visible item in budget.
    #[must_use]
    pub fn is_any_item_on_screen(&self) -> bool {
        self.visible
            && !self.items.is_empty()
            && self.max_items_on_screen != 0
            && self.items.any_visible()
    }

    /// Call `f` with each visible item in the window and its index.
    pub fn for_each_item_on_screen(&self, mut f: impl FnMut(&MenuItem, usize)) {
        if !self.is_any_item_on_screen() {
            return;
        }
        if let Some(window) = self.window.window() {
            for index in window.first..=window.last {
                if let Some(item) = self.items.get(index).filter(|i| i.is_visible()) {
                    f(item, index);
                }
            }
        }
    }

    /// Number of items [`Menu::for_each_item_on_screen`] would visit.
    #[must_use]
    pub fn on_screen_item_count(&self) -> usize {
        let mut count = 0;
        self.for_each_item_on_screen(|_, _| count += 1);
        count
    }

    fn refresh_window(&mut self) {
        self.window
            .recompute(&self.items, self.selected_index, self.max_items_on_screen);
    }

    // === Visibility ===

    /// Whether the menu is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the next processed frame will ignore input.
    #[must_use]
    pub const fn is_just_opened(&self) -> bool {
        self.input.is_just_opened()
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        debug!(
            title = ?self.banner.as_ref().map(MenuBanner::title),
            visible, "menu visibility changed"
        );
        self.emit(&MenuEvent::VisibleChanged { visible });
    }

    pub(crate) fn mark_opened(&mut self) {
        self.input.open();
    }

    // === Observers ===

    /// Register an observer. Observers run synchronously, in subscription
    /// order, on the call that caused the event.
    pub fn subscribe(&mut self, observer: impl FnMut(&Menu, &MenuEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn emit(&mut self, event: &MenuEvent) {
        let mut observers = std::mem::take(&mut self.observers);
        for observer in &mut observers {
            observer(self, event);
        }
        self.observers = observers;
    }

    // === Frame ===

    /// Process one frame of input. Does nothing while hidden.
    pub fn process(
        &mut self,
        input: &mut dyn ControlSource,
        audio: &mut dyn AudioSink,
    ) -> FrameOutcome {
        if !self.visible {
            return FrameOutcome::Continue;
        }

        if self.disable_controls {
            let mut allowed = self.allowed_controls.clone();
            allowed.extend(self.controls.mapped());
            input.disable_all_except(&allowed);
        }

        let on_screen = self.is_any_item_on_screen();
        let actions = self.input.poll(&self.controls, &*input, on_screen);
        let mut outcome = FrameOutcome::Continue;
        for action in actions {
            if self.handle(action, audio) == FrameOutcome::Back {
                outcome = FrameOutcome::Back;
            }
        }

        self.process_components();
        outcome
    }

    fn handle(&mut self, action: NavAction, audio: &mut dyn AudioSink) -> FrameOutcome {
        let index = self.selected_index;
        match action {
            NavAction::Up => {
                if self.intercept(index, false, MenuItem::on_move_up).runs_default() {
                    self.move_selection(audio, MenuItems::previous_eligible, Direction::Up);
                }
            }
            NavAction::Down => {
                if self.intercept(index, false, MenuItem::on_move_down).runs_default() {
                    self.move_selection(audio, MenuItems::next_eligible, Direction::Down);
                }
            }
            NavAction::Left => {
                if self.intercept(index, true, MenuItem::on_move_left).runs_default() {
                    play_optional(audio, self.sounds.left.as_ref());
                }
            }
            NavAction::Right => {
                if self.intercept(index, true, MenuItem::on_move_right).runs_default() {
                    play_optional(audio, self.sounds.right.as_ref());
                }
            }
            NavAction::Accept => {
                let answer = self.intercept(index, true, MenuItem::on_accept);
                if self.items.get(index).is_some_and(|i| !i.is_disabled()) {
                    self.emit(&MenuEvent::ItemAccepted { index });
                }
                if answer.runs_default() {
                    play_optional(audio, self.sounds.accept.as_ref());
                }
            }
            NavAction::Back => {
                if self.intercept(index, false, MenuItem::on_back).runs_default() {
                    play_optional(audio, self.sounds.back.as_ref());
                    return FrameOutcome::Back;
                }
            }
        }
        FrameOutcome::Continue
    }

    /// Offer an action to the item at `index`.
    ///
    /// Without an item the default runs. A disabled item swallows actions
    /// that respect the disabled flag.
    fn intercept(
        &mut self,
        index: usize,
        respects_disabled: bool,
        hook: fn(&mut MenuItem) -> Intercept,
    ) -> Intercept {
        let Some(item) = self.items.get_mut(index) else {
            return Intercept::Declined;
        };
        if respects_disabled && item.is_disabled() {
            return Intercept::Handled;
        }
        let answer = hook(item);
        if answer.is_handled() {
            self.emit(&MenuEvent::ItemChanged { index });
        }
        answer
    }

    fn move_selection(
        &mut self,
        audio: &mut dyn AudioSink,
        search: fn(&MenuItems, usize) -> Option<usize>,
        direction: Direction,
    ) {
        match search(&self.items, self.selected_index) {
            Some(index) => {
                self.set_selected_index(index);
                play_optional(audio, direction.sound(&self.sounds));
            }
            None => play_optional(audio, self.sounds.error.as_ref()),
        }
    }

    fn process_components(&mut self) {
        let style = Rc::clone(&self.style);
        for kind in style.draw_order() {
            match kind {
                ComponentKind::Banner | ComponentKind::Items => {}
                ComponentKind::Subtitle => {
                    if let Some(subtitle) = &mut self.subtitle {
                        subtitle.process(&self.items, self.selected_index);
                    }
                }
                ComponentKind::Background => {
                    let rows = self.on_screen_item_count();
                    if let Some(background) = &mut self.background {
                        background.process(rows, style.metrics().item_height);
                    }
                }
                ComponentKind::UpDownDisplay => {
                    if let Some(display) = &mut self.up_down_display {
                        display.process(self.items.len(), self.max_items_on_screen);
                    }
                }
                ComponentKind::Description => {
                    if let Some(description) = &mut self.description {
                        let text = self
                            .items
                            .get(self.selected_index)
                            .and_then(MenuItem::description_text);
                        description.process(text, &*style);
                    }
                }
            }
        }
    }

    /// Draw the menu in the style's component order. Does nothing while
    /// hidden.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if !self.visible {
            return;
        }
        let style = &*self.style;
        let mut cursor = self.location;
        for kind in style.draw_order() {
            match kind {
                ComponentKind::Banner => {
                    if let Some(banner) = &self.banner {
                        style.draw_banner(canvas, banner, &mut cursor);
                    }
                }
                ComponentKind::Subtitle => {
                    if let Some(subtitle) = &self.subtitle {
                        style.draw_subtitle(canvas, subtitle, &mut cursor);
                    }
                }
                ComponentKind::Background => {
                    if let Some(background) = &self.background {
                        style.draw_background(canvas, background, &mut cursor);
                    }
                }
                ComponentKind::Items => {
                    self.for_each_item_on_screen(|item, index| {
                        style.draw_any_item(canvas, item, &mut cursor, index == self.selected_index);
                    });
                }
                ComponentKind::UpDownDisplay => {
                    if let Some(display) = &self.up_down_display {
                        style.draw_up_down_display(canvas, display, &mut cursor);
                    }
                }
                ComponentKind::Description => {
                    if let Some(description) = &self.description {
                        style.draw_description(canvas, description, &mut cursor);
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Up,
    Down,
}

impl Direction {
    fn sound(self, sounds: &MenuSounds) -> Option<&Sound> {
        match self {
            Self::Up => sounds.up.as_ref(),
            Self::Down => sounds.down.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric_scroller::NumericScroller;
    use crate::scroller::{ScrollerOptions, TextScroller};
    use framemenu_core::{MetadataValue, RecordingCanvas};
    use framemenu_test::{RecordingAudio, ScriptedInput};
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::cell::RefCell;

    fn numbered(count: usize) -> Menu {
        let mut menu = Menu::new("Main", "Pick one");
        for i in 0..count {
            menu.push_item(MenuItem::new(format!("Item {i}")));
        }
        menu
    }

    fn shown(mut menu: Menu) -> Menu {
        menu.set_visible(true);
        menu
    }

    fn frame(menu: &mut Menu, input: &mut ScriptedInput, audio: &mut RecordingAudio) -> FrameOutcome {
        let outcome = menu.process(input, audio);
        input.next_frame();
        outcome
    }

    fn tap(menu: &mut Menu, control: Control, audio: &mut RecordingAudio) -> FrameOutcome {
        let mut input = ScriptedInput::new();
        input.press(control);
        menu.process(&mut input, audio)
    }

    fn record_events(menu: &mut Menu) -> Rc<RefCell<Vec<MenuEvent>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        menu.subscribe(move |_, event| sink.borrow_mut().push(event.clone()));
        log
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn test_new_menu_defaults() {
        let menu = Menu::new("Main", "Pick one");
        assert!(!menu.is_visible());
        assert_eq!(menu.max_items_on_screen(), 10);
        assert_eq!(menu.selected_index(), 0);
        assert!(menu.selected_item().is_none());
        assert_eq!(menu.visible_window(), None);
        assert_eq!(menu.location(), menu.style().metrics().initial_location);
        assert_eq!(menu.banner().map(MenuBanner::title), Some("Main"));
        assert!(menu.disables_controls());
        assert_eq!(menu.allowed_controls().len(), 14);
    }

    #[test]
    fn test_from_config() {
        let mut config = MenuConfig::default();
        config.max_items_on_screen = 3;
        config.disable_controls = false;
        config.style.menu_width = 600.0;
        config.sounds = MenuSounds::silent();
        let menu = Menu::from_config("Main", "", &config);
        assert_eq!(menu.max_items_on_screen(), 3);
        assert!(!menu.disables_controls());
        assert!((menu.style().metrics().menu_width - 600.0).abs() < f32::EPSILON);
        assert_eq!(menu.sounds(), &MenuSounds::silent());
    }

    #[test]
    fn test_apply_config_refreshes_window() {
        let mut menu = numbered(12);
        assert_eq!(menu.visible_window(), Some(VisibleWindow::new(0, 9)));
        let config = MenuConfig {
            max_items_on_screen: 4,
            ..MenuConfig::default()
        };
        menu.apply_config(&config);
        assert_eq!(menu.visible_window(), Some(VisibleWindow::new(0, 3)));
    }

    #[test]
    fn test_debug_output() {
        let text = format!("{:?}", numbered(2));
        assert!(text.contains("Menu"));
        assert!(text.contains("selected_index"));
    }

    // =========================================================================
    // Selection
    // =========================================================================

    #[test]
    fn test_selected_index_clamps_to_last_item() {
        let mut menu = numbered(3);
        menu.set_selected_index(99);
        assert_eq!(menu.selected_index(), 2);
        assert_eq!(menu.selected_item().map(MenuItem::text), Some("Item 2"));
    }

    #[test]
    fn test_selected_index_on_empty_menu() {
        let mut menu = numbered(0);
        menu.set_selected_index(5);
        assert_eq!(menu.selected_index(), 0);
        assert!(menu.selected_item().is_none());
    }

    #[test]
    fn test_selection_event_only_on_change() {
        let mut menu = numbered(5);
        let log = record_events(&mut menu);
        menu.set_selected_index(3);
        menu.set_selected_index(3);
        assert_eq!(
            *log.borrow(),
            vec![MenuEvent::SelectedItemChanged {
                old_index: 0,
                new_index: 3,
                old_item: Some("Item 0".to_string()),
                new_item: Some("Item 3".to_string()),
            }]
        );
    }

    #[test]
    fn test_selection_event_names_removed_item() {
        let mut menu = numbered(5);
        menu.set_selected_index(4);
        let log = record_events(&mut menu);
        menu.update_items(|items| items.remove(4)).expect("in bounds");
        assert_eq!(
            *log.borrow(),
            vec![MenuEvent::SelectedItemChanged {
                old_index: 4,
                new_index: 3,
                old_item: Some("Item 4".to_string()),
                new_item: Some("Item 3".to_string()),
            }]
        );
    }

    #[test]
    fn test_observers_run_in_subscription_order() {
        let mut menu = numbered(3);
        let order = Rc::new(RefCell::new(Vec::new()));
        for id in 0..3 {
            let order = Rc::clone(&order);
            menu.subscribe(move |m, _| order.borrow_mut().push((id, m.selected_index())));
        }
        menu.set_selected_index(2);
        assert_eq!(*order.borrow(), vec![(0, 2), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_select_item_where() {
        let mut menu = numbered(5);
        assert!(menu.select_item_where(|i| i.text() == "Item 3"));
        assert_eq!(menu.selected_index(), 3);
        assert!(!menu.select_item_where(|i| i.text() == "Missing"));
        assert_eq!(menu.selected_index(), 3);
    }

    #[test]
    fn test_update_items_clamps_selection() {
        let mut menu = numbered(5);
        menu.set_selected_index(4);
        let removed = menu.update_items(|items| {
            items.remove(4).unwrap();
            items.remove(3).unwrap()
        });
        assert_eq!(removed.text(), "Item 3");
        assert_eq!(menu.selected_index(), 2);
        assert_eq!(menu.visible_window(), Some(VisibleWindow::new(0, 2)));
    }

    #[test]
    fn test_metadata_bag() {
        let mut menu = numbered(1);
        menu.metadata_mut().insert("page", MetadataValue::from(2_i64));
        assert_eq!(menu.metadata().get_int("page"), Some(2));
    }

    // =========================================================================
    // Window
    // =========================================================================

    #[test]
    fn test_twelve_items_budget_five() {
        let mut menu = shown(numbered(12));
        menu.set_max_items_on_screen(5);
        assert_eq!(menu.visible_window(), Some(VisibleWindow::new(0, 4)));

        let mut audio = RecordingAudio::new();
        for _ in 0..6 {
            tap(&mut menu, Control::FrontendDown, &mut audio);
        }
        assert_eq!(menu.selected_index(), 6);
        assert_eq!(menu.visible_window(), Some(VisibleWindow::new(2, 6)));
    }

    #[test]
    fn test_up_from_top_wraps_to_bottom() {
        let mut menu = shown(numbered(12));
        menu.set_max_items_on_screen(5);
        let mut audio = RecordingAudio::new();
        tap(&mut menu, Control::FrontendUp, &mut audio);
        assert_eq!(menu.selected_index(), 11);
        assert_eq!(menu.visible_window(), Some(VisibleWindow::new(7, 11)));
    }

    #[test]
    fn test_zero_budget_blocks_navigation() {
        let mut menu = shown(numbered(4));
        menu.set_max_items_on_screen(0);
        assert!(!menu.is_any_item_on_screen());
        assert_eq!(menu.visible_window(), None);
        assert_eq!(menu.on_screen_item_count(), 0);

        let mut audio = RecordingAudio::new();
        tap(&mut menu, Control::FrontendDown, &mut audio);
        assert_eq!(menu.selected_index(), 0);
        assert!(audio.played().is_empty());
    }

    #[test]
    fn test_for_each_item_on_screen_skips_hidden() {
        let mut menu = shown(numbered(6));
        menu.set_max_items_on_screen(3);
        menu.update_items(|items| items[1].set_visible(false));
        let mut seen = Vec::new();
        menu.for_each_item_on_screen(|item, index| seen.push((index, item.text().to_string())));
        assert_eq!(
            seen,
            vec![
                (0, "Item 0".to_string()),
                (2, "Item 2".to_string()),
                (3, "Item 3".to_string())
            ]
        );
        assert_eq!(menu.on_screen_item_count(), 3);
    }

    #[test]
    fn test_hidden_menu_has_nothing_on_screen() {
        let menu = numbered(3);
        assert!(!menu.is_any_item_on_screen());
        assert_eq!(menu.on_screen_item_count(), 0);
    }

    // =========================================================================
    // Up / Down
    // =========================================================================

    #[test]
    fn test_down_from_last_wraps_to_first_eligible() {
        let mut menu = shown(Menu::new("Main", ""));
        menu.update_items(|items| {
            items.push(MenuItem::new("Hidden").visible(false));
            items.push(MenuItem::new("A"));
            items.push(MenuItem::new("Off").disabled(true));
            items.push(MenuItem::new("B"));
        });
        menu.set_selected_index(3);
        let mut audio = RecordingAudio::new();
        tap(&mut menu, Control::FrontendDown, &mut audio);
        assert_eq!(menu.selected_index(), 1);
        tap(&mut menu, Control::FrontendDown, &mut audio);
        assert_eq!(menu.selected_index(), 3);
        assert_eq!(audio.names(), vec!["nav_up_down", "nav_up_down"]);
    }

    #[test]
    fn test_disabled_item_not_skipped_when_flag_cleared() {
        let mut menu = shown(Menu::new("Main", ""));
        menu.update_items(|items| {
            items.push(MenuItem::new("A"));
            items.push(MenuItem::new("Off").disabled(true).skip_if_disabled(false));
        });
        let mut audio = RecordingAudio::new();
        tap(&mut menu, Control::FrontendDown, &mut audio);
        assert_eq!(menu.selected_index(), 1);
    }

    #[test]
    fn test_no_eligible_item_plays_error() {
        let mut menu = shown(Menu::new("Main", ""));
        menu.update_items(|items| {
            items.push(MenuItem::new("Off").disabled(true));
            items.push(MenuItem::new("Also off").disabled(true));
        });
        let mut audio = RecordingAudio::new();
        tap(&mut menu, Control::FrontendUp, &mut audio);
        assert_eq!(menu.selected_index(), 0);
        assert_eq!(audio.names(), vec!["error"]);
    }

    #[test]
    fn test_held_direction_repeats_each_frame() {
        let mut menu = shown(numbered(5));
        let mut input = ScriptedInput::new();
        let mut audio = RecordingAudio::new();
        input.hold(Control::FrontendDown);
        for _ in 0..3 {
            frame(&mut menu, &mut input, &mut audio);
        }
        assert_eq!(menu.selected_index(), 3);
    }

    // =========================================================================
    // Left / Right / Accept / Back
    // =========================================================================

    #[test]
    fn test_right_on_text_scroller_runs_default() {
        let mut menu = shown(Menu::new("Main", ""));
        menu.push_item(MenuItem::scroller("Mode", TextScroller::new(["A", "B"])));
        let log = record_events(&mut menu);
        let mut audio = RecordingAudio::new();
        tap(&mut menu, Control::FrontendRight, &mut audio);

        let text = menu
            .selected_item()
            .and_then(MenuItem::scroller_options)
            .map(|s| s.selected_option_text());
        assert_eq!(text.as_deref(), Some("B"));
        assert_eq!(audio.names(), vec!["nav_left_right"]);
        assert_eq!(*log.borrow(), vec![MenuEvent::ItemChanged { index: 0 }]);
    }

    #[test]
    fn test_right_on_numeric_scroller_is_consumed() {
        let mut menu = shown(Menu::new("Main", ""));
        let scroller =
            NumericScroller::with_range(Decimal::ZERO, Decimal::TEN, Decimal::ONE).unwrap();
        menu.push_item(MenuItem::numeric("Volume", scroller));
        let mut audio = RecordingAudio::new();
        tap(&mut menu, Control::FrontendRight, &mut audio);

        let value = menu
            .selected_item()
            .and_then(MenuItem::numeric_scroller)
            .map(NumericScroller::value);
        assert_eq!(value, Some(Decimal::ONE));
        assert!(audio.played().is_empty());
    }

    #[test]
    fn test_left_on_plain_item_plays_sound() {
        let mut menu = shown(numbered(1));
        let mut audio = RecordingAudio::new();
        tap(&mut menu, Control::FrontendLeft, &mut audio);
        assert_eq!(audio.names(), vec!["nav_left_right"]);
    }

    #[test]
    fn test_disabled_item_ignores_left_right_accept() {
        let mut menu = shown(Menu::new("Main", ""));
        menu.push_item(MenuItem::checkbox("Off", false).disabled(true).skip_if_disabled(false));
        let log = record_events(&mut menu);
        let mut audio = RecordingAudio::new();
        for control in [Control::FrontendLeft, Control::FrontendRight, Control::FrontendAccept] {
            tap(&mut menu, control, &mut audio);
        }
        assert_eq!(menu.selected_item().and_then(MenuItem::checked), Some(false));
        assert!(audio.played().is_empty());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_accept_toggles_checkbox() {
        let mut menu = shown(Menu::new("Main", ""));
        menu.push_item(MenuItem::checkbox("Music", false));
        let log = record_events(&mut menu);
        let mut audio = RecordingAudio::new();
        tap(&mut menu, Control::FrontendAccept, &mut audio);

        assert_eq!(menu.selected_item().and_then(MenuItem::checked), Some(true));
        assert_eq!(audio.names(), vec!["select"]);
        assert_eq!(
            *log.borrow(),
            vec![
                MenuEvent::ItemChanged { index: 0 },
                MenuEvent::ItemAccepted { index: 0 }
            ]
        );
    }

    #[test]
    fn test_back_requests_hide() {
        let mut menu = shown(numbered(2));
        let mut audio = RecordingAudio::new();
        assert_eq!(
            tap(&mut menu, Control::FrontendCancel, &mut audio),
            FrameOutcome::Back
        );
        assert_eq!(audio.names(), vec!["back"]);
    }

    #[test]
    fn test_missing_sounds_are_skipped() {
        let mut menu = shown(numbered(3));
        *menu.sounds_mut() = MenuSounds::silent();
        let mut audio = RecordingAudio::new();
        tap(&mut menu, Control::FrontendDown, &mut audio);
        assert_eq!(menu.selected_index(), 1);
        assert!(audio.played().is_empty());
    }

    // =========================================================================
    // Frame handling
    // =========================================================================

    #[test]
    fn test_hidden_menu_ignores_process() {
        let mut menu = numbered(3);
        let mut input = ScriptedInput::new();
        input.hold(Control::FrontendDown);
        let mut audio = RecordingAudio::new();
        assert_eq!(menu.process(&mut input, &mut audio), FrameOutcome::Continue);
        assert_eq!(menu.selected_index(), 0);
        assert!(input.disable_calls().is_empty());
    }

    #[test]
    fn test_just_opened_frame_skips_input() {
        let mut menu = shown(numbered(3));
        menu.mark_opened();
        assert!(menu.is_just_opened());
        let mut audio = RecordingAudio::new();
        assert_eq!(
            tap(&mut menu, Control::FrontendCancel, &mut audio),
            FrameOutcome::Continue
        );
        assert!(!menu.is_just_opened());
        assert_eq!(
            tap(&mut menu, Control::FrontendCancel, &mut audio),
            FrameOutcome::Back
        );
    }

    #[test]
    fn test_disable_controls_keeps_navigation_and_allow_list() {
        let mut menu = shown(numbered(1));
        menu.set_allowed_controls(vec![Control::Jump]);
        let mut input = ScriptedInput::new();
        let mut audio = RecordingAudio::new();
        menu.process(&mut input, &mut audio);

        let calls = input.disable_calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].contains(&Control::Jump));
        assert!(calls[0].contains(&Control::FrontendAccept));
        assert!(!calls[0].contains(&Control::Sprint));
    }

    #[test]
    fn test_disable_controls_off() {
        let mut menu = shown(numbered(1));
        menu.set_disable_controls(false);
        let mut input = ScriptedInput::new();
        menu.process(&mut input, &mut RecordingAudio::new());
        assert!(input.disable_calls().is_empty());
    }

    #[test]
    fn test_process_refreshes_components() {
        let mut menu = shown(Menu::new("Main", "Pick"));
        for i in 0..12 {
            menu.push_item(MenuItem::new(format!("Item {i}")).description(format!("About {i}")));
        }
        menu.set_max_items_on_screen(5);
        menu.set_selected_index(2);
        menu.process(&mut ScriptedInput::new(), &mut RecordingAudio::new());

        assert_eq!(menu.subtitle().and_then(MenuSubtitle::counter_text), Some("3/12"));
        assert!(menu.up_down_display().is_some_and(MenuUpDownDisplay::is_shown));
        assert!((menu.background().map_or(0.0, MenuBackground::height) - 5.0 * 37.0).abs() < 0.01);
        assert_eq!(menu.description().and_then(MenuDescription::text), Some("About 2"));
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    #[test]
    fn test_draw_hidden_menu_is_noop() {
        let menu = numbered(3);
        let mut canvas = RecordingCanvas::new();
        menu.draw(&mut canvas);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_draw_walks_components_in_order() {
        let mut menu = shown(numbered(12));
        menu.set_max_items_on_screen(3);
        menu.set_selected_index(4);
        menu.process(&mut ScriptedInput::new(), &mut RecordingAudio::new());
        let mut canvas = RecordingCanvas::new();
        menu.draw(&mut canvas);

        assert_eq!(
            canvas.texts(),
            vec!["Main", "PICK ONE", "5/12", "Item 2", "Item 3", "Item 4"]
        );
    }

    #[test]
    fn test_draw_without_chrome() {
        let mut menu = shown(numbered(2));
        menu.set_banner(None);
        menu.set_subtitle(None);
        let mut canvas = RecordingCanvas::new();
        menu.draw(&mut canvas);
        assert_eq!(canvas.texts(), vec!["Item 0", "Item 1"]);
    }

    // =========================================================================
    // Properties
    // =========================================================================

    fn arb_item() -> impl Strategy<Value = MenuItem> {
        (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(visible, disabled, skip)| {
            MenuItem::new("x")
                .visible(visible)
                .disabled(disabled)
                .skip_if_disabled(skip)
        })
    }

    proptest! {
        #[test]
        fn prop_navigation_lands_on_eligible_items(
            items in prop::collection::vec(arb_item(), 1..25),
            budget in 1usize..8,
            moves in prop::collection::vec(any::<bool>(), 1..40),
        ) {
            let mut menu = shown(Menu::new("Main", ""));
            menu.update_items(|list| list.extend(items));
            menu.set_max_items_on_screen(budget);
            let any_eligible = menu.items().iter().any(MenuItem::is_eligible);
            let mut audio = RecordingAudio::new();

            for down in moves {
                let control = if down { Control::FrontendDown } else { Control::FrontendUp };
                tap(&mut menu, control, &mut audio);

                if any_eligible {
                    let sel = menu.selected_index();
                    prop_assert!(menu.items()[sel].is_eligible());
                    let window = menu.visible_window().unwrap();
                    prop_assert!(window.contains(sel));
                    prop_assert!(menu.on_screen_item_count() <= budget);
                }
            }
        }
    }
}

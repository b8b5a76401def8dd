//! Frame-driven menu navigation engine.
//!
//! A [`Menu`] owns its items, the sliding window of on-screen rows and an
//! input state machine. The host drives it once per frame, usually
//! through a [`MenuRegistry`] that also tracks which menu was opened from
//! which.

pub mod components;
pub mod config;
pub mod input;
pub mod item;
pub mod items;
pub mod menu;
pub mod numeric_scroller;
pub mod registry;
pub mod scroller;
pub mod style;
pub mod window;

pub use components::{
    ComponentKind, MenuBackground, MenuBanner, MenuDescription, MenuSubtitle, MenuUpDownDisplay,
};
pub use config::{MenuConfig, MenuControls, MenuSounds};
pub use input::{InputState, InputStateMachine, NavAction};
pub use item::{Intercept, ItemKind, MenuItem};
pub use items::MenuItems;
pub use menu::{FrameOutcome, Menu, MenuEvent};
pub use numeric_scroller::NumericScroller;
pub use registry::{MenuId, MenuRegistry};
pub use scroller::{ScrollerOptions, TextScroller};
pub use style::{DefaultStyle, MenuStyle, StyleMetrics};
pub use window::{VisibleWindow, WindowState};

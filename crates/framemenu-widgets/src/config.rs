//! Serde-backed menu configuration.
//!
//! A [`MenuConfig`] bundles the control mapping, sound set, gameplay
//! allow-list, window budget and layout metrics. Every field has a
//! default, so partial YAML or TOML documents are valid.

use crate::style::StyleMetrics;
use framemenu_core::{Control, MenuError, Result, Sound};
use serde::{Deserialize, Serialize};

/// Which logical control triggers each navigation action.
///
/// `None` disables the action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuControls {
    /// Move selection up
    pub up: Option<Control>,
    /// Move selection down
    pub down: Option<Control>,
    /// Step left
    pub left: Option<Control>,
    /// Step right
    pub right: Option<Control>,
    /// Accept the selected item
    pub accept: Option<Control>,
    /// Leave the menu
    pub back: Option<Control>,
}

impl Default for MenuControls {
    fn default() -> Self {
        Self {
            up: Some(Control::FrontendUp),
            down: Some(Control::FrontendDown),
            left: Some(Control::FrontendLeft),
            right: Some(Control::FrontendRight),
            accept: Some(Control::FrontendAccept),
            back: Some(Control::FrontendCancel),
        }
    }
}

impl MenuControls {
    /// Mapping with every action disabled.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            up: None,
            down: None,
            left: None,
            right: None,
            accept: None,
            back: None,
        }
    }

    /// Controls mapped to any action.
    pub fn mapped(&self) -> impl Iterator<Item = Control> + '_ {
        [
            self.up,
            self.down,
            self.left,
            self.right,
            self.accept,
            self.back,
        ]
        .into_iter()
        .flatten()
    }
}

/// Feedback sound for each navigation action.
///
/// `None` plays nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSounds {
    /// Played after moving up
    pub up: Option<Sound>,
    /// Played after moving down
    pub down: Option<Sound>,
    /// Played after the default left action
    pub left: Option<Sound>,
    /// Played after the default right action
    pub right: Option<Sound>,
    /// Played after the default accept action
    pub accept: Option<Sound>,
    /// Played after leaving the menu
    pub back: Option<Sound>,
    /// Played when up/down finds nothing to select
    pub error: Option<Sound>,
}

impl Default for MenuSounds {
    fn default() -> Self {
        Self {
            up: Some(Sound::frontend("nav_up_down")),
            down: Some(Sound::frontend("nav_up_down")),
            left: Some(Sound::frontend("nav_left_right")),
            right: Some(Sound::frontend("nav_left_right")),
            accept: Some(Sound::frontend("select")),
            back: Some(Sound::frontend("back")),
            error: Some(Sound::frontend("error")),
        }
    }
}

impl MenuSounds {
    /// Sound set with every sound disabled.
    #[must_use]
    pub const fn silent() -> Self {
        Self {
            up: None,
            down: None,
            left: None,
            right: None,
            accept: None,
            back: None,
            error: None,
        }
    }
}

/// Full menu configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Navigation control mapping
    pub controls: MenuControls,
    /// Navigation sounds
    pub sounds: MenuSounds,
    /// Suppress unrelated controls while the menu processes input
    pub disable_controls: bool,
    /// Controls left enabled when `disable_controls` is set
    pub allowed_controls: Vec<Control>,
    /// Visible-item budget of the window
    pub max_items_on_screen: usize,
    /// Layout metrics for the default style
    pub style: StyleMetrics,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            controls: MenuControls::default(),
            sounds: MenuSounds::default(),
            disable_controls: true,
            allowed_controls: Control::DEFAULT_ALLOWED.to_vec(),
            max_items_on_screen: MenuConfig::DEFAULT_MAX_ITEMS_ON_SCREEN,
            style: StyleMetrics::default(),
        }
    }
}

impl MenuConfig {
    /// Default visible-item budget.
    pub const DEFAULT_MAX_ITEMS_ON_SCREEN: usize = 10;

    /// Parse a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Config`] if the document is malformed or a
    /// field has the wrong type (a negative `max_items_on_screen`, say).
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        serde_yaml_ng::from_str(contents).map_err(|e| MenuError::Config(e.to_string()))
    }

    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Config`] if the document is malformed.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| MenuError::Config(e.to_string()))
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Config`] if serialization fails.
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| MenuError::Config(e.to_string()))
    }

    /// Serialize to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Config`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| MenuError::Config(e.to_string()))
    }
}

//! Frame driver for menu tests.

use crate::audio::RecordingAudio;
use crate::input::ScriptedInput;
use framemenu_core::{Control, RecordingCanvas, Result};
use framemenu_widgets::{Menu, MenuId, MenuRegistry};

/// Drives a [`MenuRegistry`] the way a host loop would: process every
/// visible menu, draw them, end the frame.
///
/// Every frame's draw commands replace the previous frame's.
#[derive(Debug, Default)]
pub struct MenuHarness {
    registry: MenuRegistry,
    input: ScriptedInput,
    audio: RecordingAudio,
    canvas: RecordingCanvas,
    frames: usize,
}

impl MenuHarness {
    /// Create a harness with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a menu.
    pub fn add(&mut self, menu: Menu) -> MenuId {
        self.registry.add(menu)
    }

    /// Show a menu and run its swallowed opening frame.
    pub fn open(&mut self, id: MenuId) -> Result<&mut Self> {
        self.registry.show(id)?;
        self.frame();
        Ok(self)
    }

    /// Show a child menu and run its swallowed opening frame.
    pub fn open_child(&mut self, parent: MenuId, child: MenuId) -> Result<&mut Self> {
        self.registry.show_child(parent, child)?;
        self.frame();
        Ok(self)
    }

    /// Run one frame with the current input.
    pub fn frame(&mut self) -> &mut Self {
        self.registry.process_frame(&mut self.input, &mut self.audio);
        self.canvas.clear();
        self.registry.draw_frame(&mut self.canvas);
        self.input.next_frame();
        self.frames += 1;
        self
    }

    /// Press `control` for one frame.
    pub fn tap(&mut self, control: Control) -> &mut Self {
        self.input.press(control);
        self.frame()
    }

    /// Hold `control` for `frames` frames, then release it.
    pub fn hold(&mut self, control: Control, frames: usize) -> &mut Self {
        self.input.hold(control);
        for _ in 0..frames {
            self.frame();
        }
        self.input.release(control);
        self
    }

    /// The registry.
    #[must_use]
    pub const fn registry(&self) -> &MenuRegistry {
        &self.registry
    }

    /// Mutable registry.
    pub fn registry_mut(&mut self) -> &mut MenuRegistry {
        &mut self.registry
    }

    /// A registered menu.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not registered.
    #[must_use]
    pub fn menu(&self, id: MenuId) -> &Menu {
        match self.registry.menu(id) {
            Ok(menu) => menu,
            Err(err) => panic!("{err}"),
        }
    }

    /// Mutable registered menu.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not registered.
    pub fn menu_mut(&mut self, id: MenuId) -> &mut Menu {
        match self.registry.menu_mut(id) {
            Ok(menu) => menu,
            Err(err) => panic!("{err}"),
        }
    }

    /// Scripted input, for holds spanning several calls.
    pub fn input_mut(&mut self) -> &mut ScriptedInput {
        &mut self.input
    }

    /// Scripted input.
    #[must_use]
    pub const fn input(&self) -> &ScriptedInput {
        &self.input
    }

    /// Sounds played so far.
    #[must_use]
    pub const fn audio(&self) -> &RecordingAudio {
        &self.audio
    }

    /// Draw commands of the last frame.
    #[must_use]
    pub const fn canvas(&self) -> &RecordingCanvas {
        &self.canvas
    }

    /// Frames run so far.
    #[must_use]
    pub const fn frames(&self) -> usize {
        self.frames
    }
}

//! Scripted control source.

use framemenu_core::{Control, ControlSource};
use std::collections::BTreeSet;

/// Control source driven by the test.
///
/// Held controls stay held until released. Pressed controls count as
/// held and just pressed until [`ScriptedInput::next_frame`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    held: BTreeSet<Control>,
    pressed: BTreeSet<Control>,
    disable_calls: Vec<Vec<Control>>,
}

impl ScriptedInput {
    /// Create an input with nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold a control.
    pub fn hold(&mut self, control: Control) -> &mut Self {
        self.held.insert(control);
        self
    }

    /// Release a held control.
    pub fn release(&mut self, control: Control) -> &mut Self {
        self.held.remove(&control);
        self
    }

    /// Press a control for the current frame.
    pub fn press(&mut self, control: Control) -> &mut Self {
        self.pressed.insert(control);
        self
    }

    /// Release everything.
    pub fn release_all(&mut self) -> &mut Self {
        self.held.clear();
        self.pressed.clear();
        self
    }

    /// End the frame: presses expire, holds remain.
    pub fn next_frame(&mut self) {
        self.pressed.clear();
    }

    /// Allow-lists passed to `disable_all_except`, one per call.
    #[must_use]
    pub fn disable_calls(&self) -> &[Vec<Control>] {
        &self.disable_calls
    }
}

impl ControlSource for ScriptedInput {
    fn is_held(&self, control: Control) -> bool {
        self.held.contains(&control) || self.pressed.contains(&control)
    }

    fn is_just_pressed(&self, control: Control) -> bool {
        self.pressed.contains(&control)
    }

    fn disable_all_except(&mut self, allowed: &[Control]) {
        self.disable_calls.push(allowed.to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_expires_on_next_frame() {
        let mut input = ScriptedInput::new();
        input.press(Control::FrontendAccept);
        assert!(input.is_just_pressed(Control::FrontendAccept));
        assert!(input.is_held(Control::FrontendAccept));
        input.next_frame();
        assert!(!input.is_just_pressed(Control::FrontendAccept));
        assert!(!input.is_held(Control::FrontendAccept));
    }

    #[test]
    fn test_hold_persists_until_release() {
        let mut input = ScriptedInput::new();
        input.hold(Control::FrontendDown);
        input.next_frame();
        assert!(input.is_held(Control::FrontendDown));
        assert!(!input.is_just_pressed(Control::FrontendDown));
        input.release(Control::FrontendDown);
        assert!(!input.is_held(Control::FrontendDown));
    }

    #[test]
    fn test_release_all() {
        let mut input = ScriptedInput::new();
        input.hold(Control::Jump).press(Control::Sprint).release_all();
        assert!(!input.is_held(Control::Jump));
        assert!(!input.is_held(Control::Sprint));
    }

    #[test]
    fn test_records_disable_calls() {
        let mut input = ScriptedInput::new();
        input.disable_all_except(&[Control::Jump]);
        assert_eq!(input.disable_calls(), &[vec![Control::Jump]]);
    }
}

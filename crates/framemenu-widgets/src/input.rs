//! Per-frame input state machine.
//!
//! Turns the control state of one frame into navigation actions. The
//! frame right after a menu opens is swallowed so the press that opened
//! it is not replayed inside it.

use crate::config::MenuControls;
use framemenu_core::{Control, ControlSource};

/// A navigation action produced by one frame of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    /// Move selection up
    Up,
    /// Move selection down
    Down,
    /// Step the selected item right
    Right,
    /// Step the selected item left
    Left,
    /// Accept the selected item
    Accept,
    /// Leave the menu
    Back,
}

/// State of the input machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputState {
    /// The menu was shown this frame; input is ignored once
    JustOpened,
    /// Normal input handling
    #[default]
    Idle,
}

/// Input state machine of one menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputStateMachine {
    state: InputState,
}

impl InputStateMachine {
    /// Create an idle machine.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: InputState::Idle,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> InputState {
        self.state
    }

    /// Check if the next poll will be swallowed.
    #[must_use]
    pub const fn is_just_opened(&self) -> bool {
        matches!(self.state, InputState::JustOpened)
    }

    /// Mark the menu as just shown.
    pub fn open(&mut self) {
        self.state = InputState::JustOpened;
    }

    /// Read one frame of input.
    ///
    /// Directions fire while held, accept and back on the press edge.
    /// With no item on screen nothing fires.
    pub fn poll(
        &mut self,
        controls: &MenuControls,
        source: &dyn ControlSource,
        any_item_on_screen: bool,
    ) -> Vec<NavAction> {
        if self.state == InputState::JustOpened {
            self.state = InputState::Idle;
            return Vec::new();
        }
        if !any_item_on_screen {
            return Vec::new();
        }

        let held = |c: Option<Control>| c.is_some_and(|c| source.is_held(c));
        let pressed = |c: Option<Control>| c.is_some_and(|c| source.is_just_pressed(c));

        [
            (held(controls.up), NavAction::Up),
            (held(controls.down), NavAction::Down),
            (held(controls.right), NavAction::Right),
            (held(controls.left), NavAction::Left),
            (pressed(controls.accept), NavAction::Accept),
            (pressed(controls.back), NavAction::Back),
        ]
        .into_iter()
        .filter_map(|(fired, action)| fired.then_some(action))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use framemenu_test::ScriptedInput;

    // =========================================================================
    // State transitions
    // =========================================================================

    #[test]
    fn test_new_machine_is_idle() {
        let machine = InputStateMachine::new();
        assert_eq!(machine.state(), InputState::Idle);
        assert!(!machine.is_just_opened());
    }

    #[test]
    fn test_just_opened_swallows_one_frame() {
        let mut machine = InputStateMachine::new();
        let controls = MenuControls::default();
        let mut input = ScriptedInput::new();
        input.press(Control::FrontendAccept);

        machine.open();
        assert!(machine.is_just_opened());
        assert!(machine.poll(&controls, &input, true).is_empty());
        assert_eq!(machine.state(), InputState::Idle);
        assert_eq!(machine.poll(&controls, &input, true), vec![NavAction::Accept]);
    }

    #[test]
    fn test_just_opened_consumed_even_without_items() {
        let mut machine = InputStateMachine::new();
        machine.open();
        let input = ScriptedInput::new();
        machine.poll(&MenuControls::default(), &input, false);
        assert_eq!(machine.state(), InputState::Idle);
    }

    // =========================================================================
    // Action mapping
    // =========================================================================

    #[test]
    fn test_directions_fire_while_held() {
        let mut machine = InputStateMachine::new();
        let mut input = ScriptedInput::new();
        input.hold(Control::FrontendDown);
        let controls = MenuControls::default();
        assert_eq!(machine.poll(&controls, &input, true), vec![NavAction::Down]);
        assert_eq!(machine.poll(&controls, &input, true), vec![NavAction::Down]);
    }

    #[test]
    fn test_accept_and_back_need_press_edge() {
        let mut machine = InputStateMachine::new();
        let mut input = ScriptedInput::new();
        input.hold(Control::FrontendAccept).hold(Control::FrontendCancel);
        assert!(machine
            .poll(&MenuControls::default(), &input, true)
            .is_empty());

        input.press(Control::FrontendCancel);
        assert_eq!(
            machine.poll(&MenuControls::default(), &input, true),
            vec![NavAction::Back]
        );
    }

    #[test]
    fn test_simultaneous_actions_keep_order() {
        let mut machine = InputStateMachine::new();
        let mut input = ScriptedInput::new();
        input
            .hold(Control::FrontendLeft)
            .hold(Control::FrontendUp)
            .press(Control::FrontendAccept);
        assert_eq!(
            machine.poll(&MenuControls::default(), &input, true),
            vec![NavAction::Up, NavAction::Left, NavAction::Accept]
        );
    }

    #[test]
    fn test_no_items_on_screen_blocks_everything() {
        let mut machine = InputStateMachine::new();
        let mut input = ScriptedInput::new();
        input.hold(Control::FrontendUp).press(Control::FrontendCancel);
        assert!(machine
            .poll(&MenuControls::default(), &input, false)
            .is_empty());
    }

    #[test]
    fn test_unmapped_actions_never_fire() {
        let mut machine = InputStateMachine::new();
        let mut input = ScriptedInput::new();
        input.hold(Control::FrontendUp).press(Control::FrontendAccept);
        let controls = MenuControls {
            up: None,
            ..MenuControls::default()
        };
        assert_eq!(machine.poll(&controls, &input, true), vec![NavAction::Accept]);
        assert!(machine.poll(&MenuControls::none(), &input, true).is_empty());
    }

    #[test]
    fn test_remapped_control() {
        let mut machine = InputStateMachine::new();
        let mut input = ScriptedInput::new();
        input.hold(Control::Other(7));
        let controls = MenuControls {
            down: Some(Control::Other(7)),
            ..MenuControls::default()
        };
        assert_eq!(machine.poll(&controls, &input, true), vec![NavAction::Down]);
    }
}

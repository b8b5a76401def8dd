//! Input collaborator: abstract control identifiers and the polling trait.
//!
//! The engine never reads hardware state. Each frame it asks a
//! [`ControlSource`] whether a logical [`Control`] is held or was just
//! pressed.

use serde::{Deserialize, Serialize};

/// Logical control identifier.
///
/// The named variants cover the frontend navigation set and the gameplay
/// controls a menu keeps enabled by default. Anything else a backend
/// understands goes through [`Control::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    // Frontend navigation
    /// Navigate up
    FrontendUp,
    /// Navigate down
    FrontendDown,
    /// Navigate left
    FrontendLeft,
    /// Navigate right
    FrontendRight,
    /// Accept / confirm
    FrontendAccept,
    /// Cancel / back
    FrontendCancel,

    // Gameplay
    /// On-foot forward/backward axis
    MoveUpDown,
    /// On-foot strafe axis
    MoveLeftRight,
    /// Sprint
    Sprint,
    /// Jump
    Jump,
    /// Enter a vehicle
    Enter,
    /// Leave a vehicle
    VehicleExit,
    /// Accelerate
    VehicleAccelerate,
    /// Brake / reverse
    VehicleBrake,
    /// Steering axis
    VehicleMoveLeftRight,
    /// Aircraft yaw left
    VehicleFlyYawLeft,
    /// Aircraft yaw right
    VehicleFlyYawRight,
    /// Handbrake
    VehicleHandbrake,
    /// Scripted flight roll axis
    ScriptedFlyLeftRight,
    /// Scripted flight pitch axis
    ScriptedFlyUpDown,

    /// Backend-specific control code.
    Other(u32),
}

impl Control {
    /// Controls left enabled underneath a menu unless configured otherwise.
    ///
    /// Movement and vehicle handling stay live so the game is not frozen
    /// while a menu is open.
    pub const DEFAULT_ALLOWED: [Self; 14] = [
        Self::MoveUpDown,
        Self::MoveLeftRight,
        Self::Sprint,
        Self::Jump,
        Self::Enter,
        Self::VehicleExit,
        Self::VehicleAccelerate,
        Self::VehicleBrake,
        Self::VehicleMoveLeftRight,
        Self::VehicleFlyYawLeft,
        Self::ScriptedFlyLeftRight,
        Self::ScriptedFlyUpDown,
        Self::VehicleFlyYawRight,
        Self::VehicleHandbrake,
    ];

    /// Check if this is one of the frontend navigation controls.
    #[must_use]
    pub const fn is_frontend(self) -> bool {
        matches!(
            self,
            Self::FrontendUp
                | Self::FrontendDown
                | Self::FrontendLeft
                | Self::FrontendRight
                | Self::FrontendAccept
                | Self::FrontendCancel
        )
    }
}

/// Per-frame control state provided by the host.
pub trait ControlSource {
    /// Whether `control` is held down this frame.
    fn is_held(&self, control: Control) -> bool;

    /// Whether `control` went down this frame (edge-triggered).
    fn is_just_pressed(&self, control: Control) -> bool;

    /// Suppress every control for this frame except `allowed`.
    ///
    /// Backends that cannot suppress input may ignore this.
    fn disable_all_except(&mut self, allowed: &[Control]) {
        let _ = allowed;
    }
}

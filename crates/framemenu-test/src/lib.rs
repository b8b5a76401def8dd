//! Test tooling for framemenu.
//!
//! - [`ScriptedInput`]: a [`ControlSource`](framemenu_core::ControlSource)
//!   whose held and pressed controls are set by the test
//! - [`RecordingAudio`]: an [`AudioSink`](framemenu_core::AudioSink) that
//!   keeps every sound it is asked to play
//! - [`MenuHarness`]: drives a [`MenuRegistry`](framemenu_widgets::MenuRegistry)
//!   frame by frame

mod audio;
mod fixture;
mod harness;
mod input;

pub use audio::RecordingAudio;
pub use fixture::{numbered_items, numbered_menu};
pub use harness::MenuHarness;
pub use input::ScriptedInput;

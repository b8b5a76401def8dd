//! Audio collaborator: named sounds and a fire-and-forget sink.

use serde::{Deserialize, Serialize};

/// A named sound inside a sound set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sound {
    /// Sound set (bank) the sound lives in
    pub set: String,
    /// Sound name within the set
    pub name: String,
}

impl Sound {
    /// Sound set used by the default frontend sounds.
    pub const FRONTEND_SET: &'static str = "frontend_default";

    /// Create a sound reference.
    #[must_use]
    pub fn new(set: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            set: set.into(),
            name: name.into(),
        }
    }

    /// Create a sound in the default frontend set.
    #[must_use]
    pub fn frontend(name: impl Into<String>) -> Self {
        Self::new(Self::FRONTEND_SET, name)
    }
}

/// Plays sounds. Playback is fire-and-forget; failures stay in the backend.
pub trait AudioSink {
    /// Start playing `sound`.
    fn play(&mut self, sound: &Sound);
}

/// Sink that discards every sound.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _sound: &Sound) {}
}

/// Play `sound` if one is configured.
pub fn play_optional(sink: &mut dyn AudioSink, sound: Option<&Sound>) {
    if let Some(sound) = sound {
        sink.play(sound);
    }
}

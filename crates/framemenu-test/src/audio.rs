//! Recording audio sink.

use framemenu_core::{AudioSink, Sound};

/// Audio sink that records what it plays.
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    played: Vec<Sound>,
}

impl RecordingAudio {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sounds played so far, oldest first.
    #[must_use]
    pub fn played(&self) -> &[Sound] {
        &self.played
    }

    /// Names of the sounds played so far.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.played.iter().map(|s| s.name.as_str()).collect()
    }

    /// Most recent sound.
    #[must_use]
    pub fn last(&self) -> Option<&Sound> {
        self.played.last()
    }

    /// Forget everything played.
    pub fn clear(&mut self) {
        self.played.clear();
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, sound: &Sound) {
        self.played.push(sound.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut audio = RecordingAudio::new();
        audio.play(&Sound::frontend("select"));
        audio.play(&Sound::frontend("back"));
        assert_eq!(audio.names(), vec!["select", "back"]);
        assert_eq!(audio.last(), Some(&Sound::frontend("back")));
        audio.clear();
        assert!(audio.played().is_empty());
    }
}

//! Playback control
//!
//! Policy: at most one utterance is active at a time. Starting narration
//! always stops the previous one first; stopping while idle is a no-op.

use crate::speech::engine::{create_engine, SpeechEngine};
use crate::speech::utterance::build_utterance;
use crate::speech::voice::Voice;
use crate::store::Chapter;
use crate::Result;
use log::debug;

/// Drives the speech engine, tracking whether narration is active
pub struct Player {
    engine: Box<dyn SpeechEngine>,
    playing: bool,
}

impl Player {
    /// A player over an existing engine
    pub fn new(engine: Box<dyn SpeechEngine>) -> Self {
        Self {
            engine,
            playing: false,
        }
    }

    /// A player over the platform engine
    pub fn native() -> Result<Self> {
        Ok(Self::new(create_engine()?))
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Read a whole chapter aloud
    ///
    /// Any narration already in progress is stopped first. If the engine
    /// refuses the utterance, playback simply does not start.
    pub fn play(&mut self, chapter: &Chapter, voice: Voice, display_speed: f32) -> Result<()> {
        if self.playing {
            self.stop()?;
        }

        debug!("Playing chapter \"{}\"", chapter.title);
        let utterance = build_utterance(chapter, voice, display_speed);
        self.engine.speak(&utterance)?;
        self.playing = true;

        Ok(())
    }

    /// Stop narration; a no-op when idle
    pub fn stop(&mut self) -> Result<()> {
        if !self.playing {
            return Ok(());
        }

        self.engine.stop()?;
        self.playing = false;

        Ok(())
    }

    /// The play/stop button action
    pub fn toggle(&mut self, chapter: &Chapter, voice: Voice, display_speed: f32) -> Result<()> {
        if self.playing {
            self.stop()
        } else {
            self.play(chapter, voice, display_speed)
        }
    }
}

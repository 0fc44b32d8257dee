//! Single-screen reading session
//!
//! Mirrors the chapter detail view: opening a chapter resets the playback
//! settings to defaults, and navigating away stops narration. Settings are
//! ephemeral; they are never persisted.

use crate::speech::rate::{clamp_display_speed, DEFAULT_DISPLAY_SPEED};
use crate::speech::{Player, Voice};
use crate::store::Chapter;
use crate::{FiresideError, Result};

/// Per-session narration settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSettings {
    pub voice: Voice,
    /// User-facing speed multiplier in [0.5, 2.0]
    pub speed_display: f32,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            voice: Voice::default(),
            speed_display: DEFAULT_DISPLAY_SPEED,
        }
    }
}

/// The reading view: one open chapter, playback settings and the player
pub struct Session {
    player: Player,
    settings: PlaybackSettings,
    chapter: Option<Chapter>,
}

impl Session {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            settings: PlaybackSettings::default(),
            chapter: None,
        }
    }

    pub fn settings(&self) -> &PlaybackSettings {
        &self.settings
    }

    pub fn chapter(&self) -> Option<&Chapter> {
        self.chapter.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.player.is_playing()
    }

    /// Open a chapter for reading
    ///
    /// Stops any narration from the previous chapter and resets settings to
    /// defaults. The session keeps its own copy of the chapter.
    pub fn open_chapter(&mut self, chapter: &Chapter) -> Result<()> {
        self.player.stop()?;
        self.settings = PlaybackSettings::default();
        self.chapter = Some(chapter.clone());
        Ok(())
    }

    /// Leave the reading view, stopping narration
    pub fn close(&mut self) -> Result<()> {
        self.player.stop()?;
        self.chapter = None;
        Ok(())
    }

    /// Read the open chapter aloud with the current settings
    pub fn play(&mut self) -> Result<()> {
        let chapter = self
            .chapter
            .as_ref()
            .ok_or_else(|| FiresideError::InvalidInput("no chapter open".into()))?;
        self.player
            .play(chapter, self.settings.voice, self.settings.speed_display)
    }

    pub fn stop(&mut self) -> Result<()> {
        self.player.stop()
    }

    /// The play/stop button action
    pub fn toggle(&mut self) -> Result<()> {
        if self.player.is_playing() {
            self.stop()
        } else {
            self.play()
        }
    }

    /// Change the speed multiplier, clamped into [0.5, 2.0]
    ///
    /// If narration is in progress it restarts with the new rate.
    pub fn set_speed(&mut self, display: f32) -> Result<()> {
        self.settings.speed_display = clamp_display_speed(display);
        self.restart_if_playing()
    }

    /// Change the narration voice
    ///
    /// If narration is in progress it restarts with the new voice.
    pub fn set_voice(&mut self, voice: Voice) -> Result<()> {
        self.settings.voice = voice;
        self.restart_if_playing()
    }

    fn restart_if_playing(&mut self) -> Result<()> {
        if self.player.is_playing() {
            self.stop()?;
            self.play()?;
        }
        Ok(())
    }
}

//! Speech engine abstraction
//!
//! The narration layer drives the platform engine through this trait. The
//! native implementation uses the `tts` crate, which binds AVFoundation on
//! macOS/iOS and Speech Dispatcher on Linux.

use crate::speech::utterance::Utterance;
use crate::speech::voice::Voice;
use crate::{FiresideError, Result};
use log::{debug, info, warn};
use tts::Tts as TtsCrate;

/// Capability consumed by the playback layer
///
/// Starting playback returns immediately; the engine plays in the background
/// until it finishes or is stopped.
pub trait SpeechEngine: Send {
    /// Start speaking one utterance
    fn speak(&mut self, utterance: &Utterance) -> Result<()>;

    /// Silence current speech
    fn stop(&mut self) -> Result<()>;
}

/// Native TTS engine backed by the `tts` crate
pub struct NativeEngine {
    tts: TtsCrate,

    /// Last voice handed to the engine, to skip redundant voice lookups
    voice: Option<Voice>,
}

impl NativeEngine {
    /// Initialize the platform engine
    ///
    /// Failure carries the platform's message text; callers surface it and
    /// carry on without narration.
    pub fn new() -> Result<Self> {
        debug!("Creating native speech engine");

        let tts = TtsCrate::default()
            .map_err(|e| FiresideError::Speech(format!("Failed to initialize speech engine: {}", e)))?;

        Ok(Self { tts, voice: None })
    }

    /// Select an installed voice matching the requested locale
    ///
    /// Falls back from an exact tag match to a primary-language match, and
    /// finally to the engine default with a warning.
    fn select_voice(&mut self, voice: Voice) -> Result<()> {
        if self.voice == Some(voice) {
            return Ok(());
        }

        let features = self.tts.supported_features();
        if !features.voice {
            warn!("Voice selection not supported on this platform");
            self.voice = Some(voice);
            return Ok(());
        }

        let tag = voice.locale();
        let primary = &tag[..2];
        let voices = self
            .tts
            .voices()
            .map_err(|e| FiresideError::Speech(format!("Failed to list voices: {}", e)))?;

        let found = voices
            .iter()
            .find(|v| v.language().to_string().eq_ignore_ascii_case(tag))
            .or_else(|| {
                voices
                    .iter()
                    .find(|v| v.language().to_string().to_ascii_lowercase().starts_with(primary))
            });

        match found {
            Some(v) => {
                debug!("Selecting voice {:?} for locale {}", v, tag);
                self.tts
                    .set_voice(v)
                    .map_err(|e| FiresideError::Speech(format!("Failed to set voice: {}", e)))?;
            }
            None => warn!("No {} voice installed, using engine default", tag),
        }

        self.voice = Some(voice);
        Ok(())
    }

    /// Convert our [0, 1] rate (0.5 = normal) to the engine's rate range
    fn convert_rate(&self, rate: f32) -> f32 {
        let r = rate.clamp(0.0, 1.0);
        let normal = self.tts.normal_rate();
        if r <= 0.5 {
            let min = self.tts.min_rate();
            min + (r / 0.5) * (normal - min)
        } else {
            let max = self.tts.max_rate();
            normal + ((r - 0.5) / 0.5) * (max - normal)
        }
    }

    /// Convert our [0, 1] volume to the engine's volume range
    fn convert_volume(&self, volume: f32) -> f32 {
        let min = self.tts.min_volume();
        let max = self.tts.max_volume();
        min + volume.clamp(0.0, 1.0) * (max - min)
    }
}

impl SpeechEngine for NativeEngine {
    fn speak(&mut self, utterance: &Utterance) -> Result<()> {
        if utterance.text.is_empty() {
            return Ok(());
        }

        self.select_voice(utterance.voice)?;

        let features = self.tts.supported_features();
        if features.rate {
            self.tts
                .set_rate(self.convert_rate(utterance.rate))
                .map_err(|e| FiresideError::Speech(format!("Failed to set rate: {}", e)))?;
        } else {
            warn!("Rate control not supported on this platform");
        }
        if features.pitch {
            // Pitch is fixed at neutral
            self.tts
                .set_pitch(self.tts.normal_pitch())
                .map_err(|e| FiresideError::Speech(format!("Failed to set pitch: {}", e)))?;
        }
        if features.volume {
            self.tts
                .set_volume(self.convert_volume(utterance.volume))
                .map_err(|e| FiresideError::Speech(format!("Failed to set volume: {}", e)))?;
        }

        debug!(
            "Speaking {} chars at rate {:.2} with voice {}",
            utterance.text.chars().count(),
            utterance.rate,
            utterance.voice.locale()
        );
        self.tts
            .speak(&utterance.text, false)
            .map_err(|e| FiresideError::Speech(format!("Speak failed: {}", e)))?;

        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        debug!("Stopping speech");
        self.tts
            .stop()
            .map_err(|e| FiresideError::Speech(format!("Stop failed: {}", e)))?;

        Ok(())
    }
}

/// Create the platform speech engine
pub fn create_engine() -> Result<Box<dyn SpeechEngine>> {
    info!("Initializing speech engine for platform: {}", std::env::consts::OS);

    let engine = NativeEngine::new()?;
    Ok(Box::new(engine))
}

//! Utterance construction
//!
//! An utterance is the joined chapter text plus the voice, rate, pitch and
//! volume parameters handed to the speech engine for one playback request.

use crate::speech::rate::map_speed;
use crate::speech::voice::Voice;
use crate::store::Chapter;

/// Pitch handed to the engine, fixed at neutral
pub const PITCH: f32 = 1.0;
/// Volume handed to the engine, fixed at full
pub const VOLUME: f32 = 1.0;

/// One playback request
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub voice: Voice,
    /// Engine rate in [0, 1], computed from the display speed
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

/// Build the utterance for reading a whole chapter aloud
///
/// Paragraphs are joined with the voice's sentence-ending separator so the
/// engine pauses between them.
pub fn build_utterance(chapter: &Chapter, voice: Voice, display_speed: f32) -> Utterance {
    Utterance {
        text: chapter.paragraphs.join(voice.separator()),
        voice,
        rate: map_speed(display_speed),
        pitch: PITCH,
        volume: VOLUME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_with_sentence_separator() {
        let chapter = Chapter::new("C1", vec!["你好".to_string(), "再见".to_string()]);
        let utterance = build_utterance(&chapter, Voice::Chinese, 1.0);
        assert_eq!(utterance.text, "你好。再见");
    }

    #[test]
    fn test_english_separator() {
        let chapter = Chapter::new("C1", vec!["Hello".to_string(), "Goodbye".to_string()]);
        let utterance = build_utterance(&chapter, Voice::English, 1.0);
        assert_eq!(utterance.text, "Hello. Goodbye");
    }

    #[test]
    fn test_rate_comes_from_speed_mapping() {
        let chapter = Chapter::new("C1", vec!["a".to_string()]);
        assert_eq!(build_utterance(&chapter, Voice::Chinese, 1.0).rate, 0.5);
        assert_eq!(build_utterance(&chapter, Voice::Chinese, 2.0).rate, 0.7);
    }

    #[test]
    fn test_fixed_pitch_and_volume() {
        let chapter = Chapter::new("C1", vec!["a".to_string()]);
        let utterance = build_utterance(&chapter, Voice::Chinese, 1.0);
        assert_eq!(utterance.pitch, 1.0);
        assert_eq!(utterance.volume, 1.0);
    }
}

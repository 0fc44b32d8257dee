//! Speech synthesis system

pub mod engine;
pub mod player;
pub mod rate;
pub mod utterance;
pub mod voice;

pub use engine::{create_engine, SpeechEngine};
pub use player::Player;
pub use rate::{clamp_display_speed, map_speed};
pub use utterance::{build_utterance, Utterance};
pub use voice::Voice;

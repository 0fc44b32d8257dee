//! Integration tests for narration
//!
//! A recording engine stands in for the platform TTS so the playback policy
//! (one utterance at a time, stop before restart) can be checked exactly.

use fireside::session::Session;
use fireside::speech::{Player, SpeechEngine, Utterance, Voice};
use fireside::store::Chapter;
use fireside::{FiresideError, Result};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Speak { text: String, locale: &'static str, rate: f32 },
    Stop,
}

/// Engine that records every call instead of producing audio
struct RecordingEngine {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl RecordingEngine {
    fn new() -> (Self, Arc<Mutex<Vec<Call>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        (Self { calls: calls.clone() }, calls)
    }
}

impl SpeechEngine for RecordingEngine {
    fn speak(&mut self, utterance: &Utterance) -> Result<()> {
        self.calls.lock().unwrap().push(Call::Speak {
            text: utterance.text.clone(),
            locale: utterance.voice.locale(),
            rate: utterance.rate,
        });
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.calls.lock().unwrap().push(Call::Stop);
        Ok(())
    }
}

/// Engine whose speak always fails, like a refused audio session
struct BrokenEngine;

impl SpeechEngine for BrokenEngine {
    fn speak(&mut self, _utterance: &Utterance) -> Result<()> {
        Err(FiresideError::Speech("audio session refused".into()))
    }

    fn stop(&mut self) -> Result<()> {
        Ok(())
    }
}

fn chapter() -> Chapter {
    Chapter::new("C1", vec!["你好".to_string(), "再见".to_string()])
}

#[test]
fn test_play_speaks_joined_chapter() {
    let (engine, calls) = RecordingEngine::new();
    let mut player = Player::new(Box::new(engine));

    player.play(&chapter(), Voice::Chinese, 1.0).expect("play should succeed");

    assert!(player.is_playing());
    assert_eq!(
        *calls.lock().unwrap(),
        vec![Call::Speak {
            text: "你好。再见".to_string(),
            locale: "zh-CN",
            rate: 0.5,
        }]
    );
}

#[test]
fn test_stop_while_idle_is_noop() {
    let (engine, calls) = RecordingEngine::new();
    let mut player = Player::new(Box::new(engine));

    player.stop().expect("stop should succeed");

    assert!(!player.is_playing());
    assert!(calls.lock().unwrap().is_empty(), "idle stop must not reach the engine");
}

#[test]
fn test_play_stops_previous_utterance_first() {
    let (engine, calls) = RecordingEngine::new();
    let mut player = Player::new(Box::new(engine));

    player.play(&chapter(), Voice::Chinese, 1.0).expect("first play");
    player.play(&chapter(), Voice::Chinese, 2.0).expect("second play");

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[1], Call::Stop, "must stop before starting the next utterance");
    assert!(matches!(calls[2], Call::Speak { rate, .. } if rate == 0.7));
}

#[test]
fn test_toggle() {
    let (engine, _calls) = RecordingEngine::new();
    let mut player = Player::new(Box::new(engine));
    let chapter = chapter();

    player.toggle(&chapter, Voice::Chinese, 1.0).expect("toggle on");
    assert!(player.is_playing());
    player.toggle(&chapter, Voice::Chinese, 1.0).expect("toggle off");
    assert!(!player.is_playing());
}

#[test]
fn test_failed_speak_does_not_start_playback() {
    let mut player = Player::new(Box::new(BrokenEngine));

    let result = player.play(&chapter(), Voice::Chinese, 1.0);
    assert!(matches!(result, Err(FiresideError::Speech(_))));
    assert!(!player.is_playing(), "playback must not start when the engine refuses");
}

#[test]
fn test_session_defaults() {
    let (engine, _calls) = RecordingEngine::new();
    let session = Session::new(Player::new(Box::new(engine)));

    assert_eq!(session.settings().voice, Voice::Chinese);
    assert_eq!(session.settings().speed_display, 1.0);
    assert!(session.chapter().is_none());
}

#[test]
fn test_open_chapter_resets_settings() {
    let (engine, _calls) = RecordingEngine::new();
    let mut session = Session::new(Player::new(Box::new(engine)));

    session.open_chapter(&chapter()).expect("open");
    session.set_speed(1.5).expect("set speed");
    session.set_voice(Voice::English).expect("set voice");

    session.open_chapter(&chapter()).expect("reopen");
    assert_eq!(session.settings().speed_display, 1.0);
    assert_eq!(session.settings().voice, Voice::Chinese);
}

#[test]
fn test_play_without_open_chapter_fails() {
    let (engine, _calls) = RecordingEngine::new();
    let mut session = Session::new(Player::new(Box::new(engine)));

    assert!(session.play().is_err());
}

#[test]
fn test_speed_change_restarts_narration() {
    let (engine, calls) = RecordingEngine::new();
    let mut session = Session::new(Player::new(Box::new(engine)));

    session.open_chapter(&chapter()).expect("open");
    session.play().expect("play");
    session.set_speed(2.0).expect("set speed");

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 3, "play, stop, replay");
    assert_eq!(calls[1], Call::Stop);
    assert!(matches!(calls[2], Call::Speak { rate, .. } if rate == 0.7));
}

#[test]
fn test_speed_change_while_stopped_does_not_play() {
    let (engine, calls) = RecordingEngine::new();
    let mut session = Session::new(Player::new(Box::new(engine)));

    session.open_chapter(&chapter()).expect("open");
    session.set_speed(0.25).expect("set speed");

    assert_eq!(session.settings().speed_display, 0.5, "speed clamps to the domain");
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_voice_change_restarts_with_new_locale() {
    let (engine, calls) = RecordingEngine::new();
    let mut session = Session::new(Player::new(Box::new(engine)));

    session.open_chapter(&chapter()).expect("open");
    session.play().expect("play");
    session.set_voice(Voice::English).expect("set voice");

    let calls = calls.lock().unwrap();
    assert!(matches!(calls.last(), Some(Call::Speak { locale: "en-US", .. })));
}

#[test]
fn test_close_stops_narration() {
    let (engine, calls) = RecordingEngine::new();
    let mut session = Session::new(Player::new(Box::new(engine)));

    session.open_chapter(&chapter()).expect("open");
    session.play().expect("play");
    session.close().expect("close");

    assert!(!session.is_playing());
    assert_eq!(calls.lock().unwrap().last(), Some(&Call::Stop));
    assert!(session.chapter().is_none());
}

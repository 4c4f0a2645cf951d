//! Voice collaborators for the Sanvii widget.
//!
//! Provides trait-based abstractions for speech capture (recognition) and
//! speech synthesis, plus the text preparation applied before anything is
//! spoken aloud. Includes stub and scripted implementations for running
//! headless and for testing without real speech hardware.

pub mod capture;
pub mod synthesis;

pub use capture::{ScriptedCapture, SpeechCapture, StubCapture};
pub use synthesis::{
    prepare_speech_text, select_voice, ConsoleSynthesis, NullSynthesis, RecordingSynthesis,
    SpeechSynthesis, VoiceInfo,
};

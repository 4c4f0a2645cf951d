//! Speech capture (recognition) collaborator.
//!
//! Capture is single-shot: one listening session produces at most one
//! transcript. Environments without a recognizer report unavailable and the
//! widget falls back to typed input.

use sanvii_core::{Result, SanviiError};
use std::collections::VecDeque;

/// Service that turns one listening session into one transcript.
pub trait SpeechCapture: Send {
    /// Whether a recognizer is present in this environment.
    fn is_available(&self) -> bool;

    /// Start a listening session and wait for its result.
    ///
    /// Returns `Ok(Some(transcript))` when an utterance was recognized,
    /// `Ok(None)` when the session ended without hearing anything, and an
    /// error when no recognizer is available.
    fn start_listening(&mut self) -> Result<Option<String>>;

    /// Abort the current listening session, if any.
    fn stop_listening(&mut self);
}

/// Capture stub for environments with no recognizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubCapture;

impl SpeechCapture for StubCapture {
    fn is_available(&self) -> bool {
        false
    }

    fn start_listening(&mut self) -> Result<Option<String>> {
        Err(SanviiError::Voice(
            "Speech recognition is not available".to_string(),
        ))
    }

    fn stop_listening(&mut self) {}
}

/// Scripted capture for testing.
///
/// Replays a fixed queue of transcripts, one per listening session, then
/// reports silence.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCapture {
    transcripts: VecDeque<String>,
    listening: bool,
}

impl ScriptedCapture {
    pub fn new(transcripts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            transcripts: transcripts.into_iter().map(Into::into).collect(),
            listening: false,
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }
}

impl SpeechCapture for ScriptedCapture {
    fn is_available(&self) -> bool {
        true
    }

    fn start_listening(&mut self) -> Result<Option<String>> {
        self.listening = true;
        let transcript = self.transcripts.pop_front();
        self.listening = false;
        if let Some(ref text) = transcript {
            tracing::debug!(transcript = %text, "Scripted capture produced transcript");
        }
        Ok(transcript)
    }

    fn stop_listening(&mut self) {
        self.listening = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_capture_unavailable() {
        let mut capture = StubCapture;
        assert!(!capture.is_available());
        assert!(capture.start_listening().is_err());
    }

    #[test]
    fn test_stub_capture_stop_is_noop() {
        let mut capture = StubCapture;
        capture.stop_listening();
        assert!(!capture.is_available());
    }

    #[test]
    fn test_scripted_capture_replays_in_order() {
        let mut capture = ScriptedCapture::new(["play music", "open github"]);
        assert!(capture.is_available());
        assert_eq!(
            capture.start_listening().unwrap(),
            Some("play music".to_string())
        );
        assert_eq!(
            capture.start_listening().unwrap(),
            Some("open github".to_string())
        );
    }

    #[test]
    fn test_scripted_capture_silent_when_exhausted() {
        let mut capture = ScriptedCapture::new(["hello"]);
        capture.start_listening().unwrap();
        assert_eq!(capture.start_listening().unwrap(), None);
    }

    #[test]
    fn test_scripted_capture_not_listening_between_sessions() {
        let mut capture = ScriptedCapture::new(["hello"]);
        assert!(!capture.is_listening());
        capture.start_listening().unwrap();
        assert!(!capture.is_listening());
        capture.stop_listening();
        assert!(!capture.is_listening());
    }
}

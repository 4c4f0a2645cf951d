//! Speech synthesis collaborator.
//!
//! Reply text is prepared before it is spoken: emoji are stripped and
//! newlines become sentence breaks. Replies that are all emoji produce no
//! speech at all.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use sanvii_core::Result;

// =============================================================================
// Text preparation
// =============================================================================

/// Codepoint ranges removed from text before synthesis.
const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F600, 0x1F64F),
    (0x1F300, 0x1F5FF),
    (0x1F680, 0x1F6FF),
    (0x1F1E0, 0x1F1FF),
    (0x2702, 0x27B0),
    (0x24C2, 0x1F251),
    (0x1F900, 0x1F9FF),
    (0x1FA00, 0x1FA6F),
    (0x1FA70, 0x1FAFF),
    (0x2600, 0x26FF),
    (0x2700, 0x27BF),
];

fn is_emoji(c: char) -> bool {
    let cp = c as u32;
    EMOJI_RANGES.iter().any(|&(lo, hi)| cp >= lo && cp <= hi)
}

/// Strip emoji and flatten newlines into sentence breaks.
///
/// Returns an empty string when nothing speakable remains; callers skip
/// synthesis in that case.
pub fn prepare_speech_text(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| !is_emoji(*c)).collect();
    stripped.replace('\n', ". ").trim().to_string()
}

// =============================================================================
// Voice selection
// =============================================================================

/// An installed synthesis voice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceInfo {
    pub name: String,
    pub lang: String,
}

impl VoiceInfo {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
        }
    }
}

/// Pick the best available voice.
///
/// Preferred names are tried in order by substring match, then any English
/// voice marked female, then any English voice, then whatever is first.
pub fn select_voice<'a>(available: &'a [VoiceInfo], preferred: &[String]) -> Option<&'a VoiceInfo> {
    for wanted in preferred {
        if let Some(voice) = available.iter().find(|v| v.name.contains(wanted.as_str())) {
            return Some(voice);
        }
    }
    available
        .iter()
        .find(|v| v.name.to_lowercase().contains("female") && v.lang.starts_with("en"))
        .or_else(|| available.iter().find(|v| v.lang.starts_with("en")))
        .or_else(|| available.first())
}

// =============================================================================
// Synthesis trait and implementations
// =============================================================================

/// Service that speaks reply text aloud.
///
/// Implementations apply `prepare_speech_text` themselves and skip replies
/// that prepare to an empty string.
#[async_trait]
pub trait SpeechSynthesis: Send + Sync {
    /// Speak the given reply text.
    async fn speak(&self, text: &str) -> Result<()>;

    /// Cancel any in-progress speech.
    async fn cancel(&self);
}

/// Synthesis sink that discards everything, used when muted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSynthesis;

#[async_trait]
impl SpeechSynthesis for NullSynthesis {
    async fn speak(&self, _text: &str) -> Result<()> {
        Ok(())
    }

    async fn cancel(&self) {}
}

/// Synthesis for headless environments: logs what would be spoken.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSynthesis;

#[async_trait]
impl SpeechSynthesis for ConsoleSynthesis {
    async fn speak(&self, text: &str) -> Result<()> {
        let prepared = prepare_speech_text(text);
        if prepared.is_empty() {
            return Ok(());
        }
        tracing::info!(text = %prepared, "Speaking");
        Ok(())
    }

    async fn cancel(&self) {}
}

/// Synthesis that records prepared utterances, for testing.
#[derive(Debug, Clone, Default)]
pub struct RecordingSynthesis {
    spoken: Arc<Mutex<Vec<String>>>,
}

impl RecordingSynthesis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything spoken so far, in order.
    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().expect("synthesis log poisoned").clone()
    }
}

#[async_trait]
impl SpeechSynthesis for RecordingSynthesis {
    async fn speak(&self, text: &str) -> Result<()> {
        let prepared = prepare_speech_text(text);
        if prepared.is_empty() {
            return Ok(());
        }
        self.spoken
            .lock()
            .expect("synthesis log poisoned")
            .push(prepared);
        Ok(())
    }

    async fn cancel(&self) {}
}

// =============================================================================
// Tests
// =============================================================================

//! Widget state machine with thread-safe transitions.
//!
//! Enforces valid phase transitions for the widget lifecycle:
//! - Idle -> Listening (start voice capture)
//! - Idle -> Thinking (typed input)
//! - Listening -> Thinking (transcript received)
//! - Listening -> Idle (cancel or silence)
//! - Thinking -> Speaking (reply ready)
//! - Thinking -> Idle (reply ready, muted)
//! - Speaking -> Idle (speech finished)
//! - Speaking -> Listening (interrupt speech to listen)

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use sanvii_core::SanviiError;

/// Operational phase of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetPhase {
    /// Nothing in progress. Ready for input.
    Idle,
    /// Capturing speech from the microphone.
    Listening,
    /// Working out a reply to the last utterance.
    Thinking,
    /// Speaking the reply aloud.
    Speaking,
}

impl fmt::Display for WidgetPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetPhase::Idle => write!(f, "Idle"),
            WidgetPhase::Listening => write!(f, "Listening"),
            WidgetPhase::Thinking => write!(f, "Thinking"),
            WidgetPhase::Speaking => write!(f, "Speaking"),
        }
    }
}

impl WidgetPhase {
    /// Returns whether a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: &WidgetPhase) -> bool {
        matches!(
            (self, target),
            (WidgetPhase::Idle, WidgetPhase::Listening)
                | (WidgetPhase::Idle, WidgetPhase::Thinking)
                | (WidgetPhase::Listening, WidgetPhase::Thinking)
                | (WidgetPhase::Listening, WidgetPhase::Idle)
                | (WidgetPhase::Thinking, WidgetPhase::Speaking)
                | (WidgetPhase::Thinking, WidgetPhase::Idle)
                | (WidgetPhase::Speaking, WidgetPhase::Idle)
                // Interrupt transition
                | (WidgetPhase::Speaking, WidgetPhase::Listening)
        )
    }
}

/// Thread-safe widget state: current phase plus the open and muted flags.
///
/// Clones share the same underlying state. Phase transitions are validated
/// before being applied; the open and muted flags are free toggles.
#[derive(Debug, Clone)]
pub struct WidgetState {
    phase: Arc<Mutex<WidgetPhase>>,
    open: Arc<AtomicBool>,
    muted: Arc<AtomicBool>,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl WidgetState {
    /// Create widget state in the Idle phase, closed.
    pub fn new(muted: bool) -> Self {
        Self {
            phase: Arc::new(Mutex::new(WidgetPhase::Idle)),
            open: Arc::new(AtomicBool::new(false)),
            muted: Arc::new(AtomicBool::new(muted)),
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> WidgetPhase {
        *self.phase.lock().expect("phase mutex poisoned")
    }

    /// Attempt to transition to the target phase.
    pub fn transition(&self, target: WidgetPhase) -> Result<(), SanviiError> {
        let mut phase = self.phase.lock().expect("phase mutex poisoned");
        if phase.can_transition_to(&target) {
            tracing::debug!("Widget phase: {} -> {}", *phase, target);
            *phase = target;
            Ok(())
        } else {
            Err(SanviiError::Widget(format!(
                "Invalid phase transition: {} -> {}",
                *phase, target
            )))
        }
    }

    /// Force the phase back to Idle (used for error recovery).
    pub fn reset(&self) {
        let mut phase = self.phase.lock().expect("phase mutex poisoned");
        if *phase != WidgetPhase::Idle {
            tracing::warn!("Widget phase reset to Idle from {}", *phase);
        }
        *phase = WidgetPhase::Idle;
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Relaxed)
    }

    pub fn set_open(&self, open: bool) {
        self.open.store(open, Ordering::Relaxed);
    }

    /// Flip the open flag and return the new value.
    pub fn toggle_open(&self) -> bool {
        !self.open.fetch_xor(true, Ordering::Relaxed)
    }

    pub fn is_muted(&self) -> bool {
        self.muted.load(Ordering::Relaxed)
    }

    /// Flip the muted flag and return the new value.
    pub fn toggle_mute(&self) -> bool {
        !self.muted.fetch_xor(true, Ordering::Relaxed)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_display() {
        assert_eq!(WidgetPhase::Idle.to_string(), "Idle");
        assert_eq!(WidgetPhase::Listening.to_string(), "Listening");
        assert_eq!(WidgetPhase::Thinking.to_string(), "Thinking");
        assert_eq!(WidgetPhase::Speaking.to_string(), "Speaking");
    }

    #[test]
    fn test_valid_transitions() {
        // Voice turn
        assert!(WidgetPhase::Idle.can_transition_to(&WidgetPhase::Listening));
        assert!(WidgetPhase::Listening.can_transition_to(&WidgetPhase::Thinking));
        assert!(WidgetPhase::Thinking.can_transition_to(&WidgetPhase::Speaking));
        assert!(WidgetPhase::Speaking.can_transition_to(&WidgetPhase::Idle));

        // Typed turn skips Listening
        assert!(WidgetPhase::Idle.can_transition_to(&WidgetPhase::Thinking));

        // Cancels
        assert!(WidgetPhase::Listening.can_transition_to(&WidgetPhase::Idle));
        assert!(WidgetPhase::Thinking.can_transition_to(&WidgetPhase::Idle));

        // Interrupt speech to listen again
        assert!(WidgetPhase::Speaking.can_transition_to(&WidgetPhase::Listening));
    }

    #[test]
    fn test_invalid_transitions() {
        assert!(!WidgetPhase::Idle.can_transition_to(&WidgetPhase::Speaking));
        assert!(!WidgetPhase::Listening.can_transition_to(&WidgetPhase::Speaking));
        assert!(!WidgetPhase::Thinking.can_transition_to(&WidgetPhase::Listening));
        assert!(!WidgetPhase::Speaking.can_transition_to(&WidgetPhase::Thinking));

        // No self transitions
        assert!(!WidgetPhase::Idle.can_transition_to(&WidgetPhase::Idle));
        assert!(!WidgetPhase::Listening.can_transition_to(&WidgetPhase::Listening));
        assert!(!WidgetPhase::Thinking.can_transition_to(&WidgetPhase::Thinking));
        assert!(!WidgetPhase::Speaking.can_transition_to(&WidgetPhase::Speaking));
    }

    #[test]
    fn test_typed_turn_path() {
        let state = WidgetState::default();
        assert_eq!(state.phase(), WidgetPhase::Idle);

        state.transition(WidgetPhase::Thinking).unwrap();
        state.transition(WidgetPhase::Speaking).unwrap();
        state.transition(WidgetPhase::Idle).unwrap();
        assert_eq!(state.phase(), WidgetPhase::Idle);
    }

    #[test]
    fn test_voice_turn_path() {
        let state = WidgetState::default();
        state.transition(WidgetPhase::Listening).unwrap();
        state.transition(WidgetPhase::Thinking).unwrap();
        state.transition(WidgetPhase::Speaking).unwrap();
        state.transition(WidgetPhase::Idle).unwrap();
        assert_eq!(state.phase(), WidgetPhase::Idle);
    }

    #[test]
    fn test_invalid_transition_leaves_phase() {
        let state = WidgetState::default();
        assert!(state.transition(WidgetPhase::Speaking).is_err());
        assert_eq!(state.phase(), WidgetPhase::Idle);
    }

    #[test]
    fn test_reset() {
        let state = WidgetState::default();
        state.transition(WidgetPhase::Thinking).unwrap();
        state.reset();
        assert_eq!(state.phase(), WidgetPhase::Idle);
    }

    #[test]
    fn test_clone_is_shared() {
        let a = WidgetState::default();
        let b = a.clone();
        a.transition(WidgetPhase::Listening).unwrap();
        assert_eq!(b.phase(), WidgetPhase::Listening);
    }

    #[test]
    fn test_open_flag() {
        let state = WidgetState::default();
        assert!(!state.is_open());
        assert!(state.toggle_open());
        assert!(state.is_open());
        assert!(!state.toggle_open());
        state.set_open(true);
        assert!(state.is_open());
    }

    #[test]
    fn test_mute_flag() {
        let state = WidgetState::new(false);
        assert!(!state.is_muted());
        assert!(state.toggle_mute());
        assert!(state.is_muted());
        assert!(!state.toggle_mute());
    }

    #[test]
    fn test_initial_mute_from_config() {
        assert!(WidgetState::new(true).is_muted());
    }

    #[test]
    fn test_transition_error_message() {
        let state = WidgetState::default();
        match state.transition(WidgetPhase::Speaking) {
            Err(SanviiError::Widget(msg)) => {
                assert!(msg.contains("Idle"));
                assert!(msg.contains("Speaking"));
            }
            _ => panic!("Expected Widget error variant"),
        }
    }
}

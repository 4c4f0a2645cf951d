//! Turn sequencing for the widget.
//!
//! The orchestrator owns the conversation and drives one turn at a time:
//! record the user message, think for a moment, classify, record the reply,
//! execute its action, and speak. Action and synthesis failures are logged
//! and never abort the turn; the reply always reaches the conversation.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use sanvii_core::{Context, Message, Response, Result, Sender, WidgetConfig};
use sanvii_intent::{IntentResponder, RandomSource, ThreadRandom};
use sanvii_voice::SpeechSynthesis;

use crate::conversation::Conversation;
use crate::executor::ActionExecutor;
use crate::greeting::load_greeting;
use crate::state::{WidgetPhase, WidgetState};

/// Drives the widget's conversational loop.
pub struct WidgetOrchestrator {
    responder: IntentResponder,
    conversation: Mutex<Conversation>,
    state: WidgetState,
    synthesis: Arc<dyn SpeechSynthesis>,
    executor: Arc<dyn ActionExecutor>,
    config: WidgetConfig,
    ctx: Context,
    rng: Mutex<Box<dyn RandomSource>>,
}

impl WidgetOrchestrator {
    pub fn new(
        responder: IntentResponder,
        config: WidgetConfig,
        ctx: Context,
        synthesis: Arc<dyn SpeechSynthesis>,
        executor: Arc<dyn ActionExecutor>,
    ) -> Self {
        let state = WidgetState::new(config.muted);
        Self {
            responder,
            conversation: Mutex::new(Conversation::new()),
            state,
            synthesis,
            executor,
            config,
            ctx,
            rng: Mutex::new(Box::new(ThreadRandom)),
        }
    }

    /// Replace the random source, for deterministic tests.
    pub fn with_random(mut self, rng: Box<dyn RandomSource>) -> Self {
        self.rng = Mutex::new(rng);
        self
    }

    /// Shared handle to the widget state.
    pub fn state(&self) -> WidgetState {
        self.state.clone()
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Snapshot of the conversation so far.
    pub fn messages(&self) -> Vec<Message> {
        self.conversation
            .lock()
            .expect("conversation mutex poisoned")
            .messages()
            .to_vec()
    }

    /// Wait the configured load delay, then greet by time of day.
    ///
    /// Opens the widget, records the greeting as the first assistant
    /// message, and speaks it.
    pub async fn greet_on_load(&self) -> Result<String> {
        tokio::time::sleep(Duration::from_millis(self.config.greeting_delay_ms)).await;
        let greeting = load_greeting(&self.ctx);
        self.state.set_open(true);
        self.conversation
            .lock()
            .expect("conversation mutex poisoned")
            .push(Sender::Assistant, greeting.clone(), None);
        self.speak(&greeting).await;
        Ok(greeting)
    }

    /// Handle input from the text box: blank input is ignored.
    pub async fn handle_typed_message(&self, input: &str) -> Result<Option<Response>> {
        let text = input.trim();
        if text.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.handle_user_message(text).await?))
    }

    /// Run one full conversational turn for the given utterance.
    pub async fn handle_user_message(&self, text: &str) -> Result<Response> {
        self.conversation
            .lock()
            .expect("conversation mutex poisoned")
            .push(Sender::User, text, None);

        // Thinking is reachable from Idle and Listening; recover from
        // anything else.
        if self.state.transition(WidgetPhase::Thinking).is_err() {
            self.state.reset();
            self.state.transition(WidgetPhase::Thinking)?;
        }

        tokio::time::sleep(self.thinking_delay()).await;

        let response = {
            let mut rng = self.rng.lock().expect("rng mutex poisoned");
            self.responder.classify_with(text, &self.ctx, rng.as_mut())
        };

        self.conversation
            .lock()
            .expect("conversation mutex poisoned")
            .push(
                Sender::Assistant,
                response.text.clone(),
                response.action.clone(),
            );

        self.state.transition(WidgetPhase::Speaking)?;

        if let Some(action) = &response.action {
            if let Err(e) = self.executor.execute(action).await {
                tracing::warn!(error = %e, "Action execution failed");
            }
        }

        self.speak(&response.text).await;
        self.state.transition(WidgetPhase::Idle)?;
        Ok(response)
    }

    /// Drop the history and confirm out loud.
    pub async fn clear_chat(&self) -> String {
        let reply = self
            .conversation
            .lock()
            .expect("conversation mutex poisoned")
            .clear(&self.ctx);
        self.speak(&reply).await;
        reply
    }

    /// Flip the mute flag; muting cancels any in-progress speech.
    pub async fn toggle_mute(&self) -> bool {
        let muted = self.state.toggle_mute();
        if muted {
            self.synthesis.cancel().await;
        }
        muted
    }

    /// Uniform random pause within the configured thinking window.
    fn thinking_delay(&self) -> Duration {
        let min = self.config.thinking_delay_min_ms;
        let max = self.config.thinking_delay_max_ms.max(min);
        let span = (max - min + 1) as usize;
        let offset = {
            let mut rng = self.rng.lock().expect("rng mutex poisoned");
            rng.pick(span) as u64
        };
        Duration::from_millis(min + offset)
    }

    async fn speak(&self, text: &str) {
        if self.state.is_muted() {
            return;
        }
        if let Err(e) = self.synthesis.speak(text).await {
            tracing::warn!(error = %e, "Speech synthesis failed");
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::RecordingExecutor;
    use sanvii_intent::SequenceRandom;
    use sanvii_voice::RecordingSynthesis;

    fn test_config(muted: bool) -> WidgetConfig {
        WidgetConfig {
            greeting_delay_ms: 0,
            thinking_delay_min_ms: 0,
            thinking_delay_max_ms: 0,
            muted,
        }
    }

    fn orchestrator(muted: bool) -> (WidgetOrchestrator, RecordingSynthesis, RecordingExecutor) {
        let synthesis = RecordingSynthesis::new();
        let executor = RecordingExecutor::new();
        let orchestrator = WidgetOrchestrator::new(
            IntentResponder::new(),
            test_config(muted),
            Context::default(),
            Arc::new(synthesis.clone()),
            Arc::new(executor.clone()),
        );
        (orchestrator, synthesis, executor)
    }

    #[tokio::test]
    async fn test_greet_on_load() {
        let (orchestrator, synthesis, _) = orchestrator(false);
        let greeting = orchestrator.greet_on_load().await.unwrap();

        assert!(greeting.contains("Boss"));
        assert!(orchestrator.state().is_open());

        let messages = orchestrator.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, Sender::Assistant);
        assert_eq!(messages[0].text, greeting);
        assert_eq!(synthesis.spoken().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_typed_input_is_ignored() {
        let (orchestrator, _, _) = orchestrator(false);
        assert!(orchestrator.handle_typed_message("").await.unwrap().is_none());
        assert!(orchestrator.handle_typed_message("   ").await.unwrap().is_none());
        assert!(orchestrator.messages().is_empty());
    }

    #[tokio::test]
    async fn test_full_turn_with_action() {
        let (orchestrator, synthesis, executor) = orchestrator(false);
        let response = orchestrator.handle_user_message("open github").await.unwrap();

        assert_eq!(response.text, "Opening GitHub! Let's code! 💻");
        assert_eq!(executor.opened(), vec!["https://github.com"]);
        assert_eq!(synthesis.spoken(), vec!["Opening GitHub! Let's code!"]);

        let messages = orchestrator.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[0].text, "open github");
        assert_eq!(messages[1].sender, Sender::Assistant);
        assert_eq!(messages[1].action, response.action);

        assert_eq!(orchestrator.state().phase(), WidgetPhase::Idle);
    }

    #[tokio::test]
    async fn test_turn_without_action() {
        let (orchestrator, _, executor) = orchestrator(false);
        let response = orchestrator.handle_user_message("how are you").await.unwrap();
        assert!(response.action.is_none());
        assert!(executor.opened().is_empty());
    }

    #[tokio::test]
    async fn test_muted_turn_skips_speech_but_not_action() {
        let (orchestrator, synthesis, executor) = orchestrator(true);
        orchestrator.handle_user_message("open github").await.unwrap();
        assert!(synthesis.spoken().is_empty());
        assert_eq!(executor.opened(), vec!["https://github.com"]);
    }

    #[tokio::test]
    async fn test_turn_recovers_from_stuck_phase() {
        let (orchestrator, _, _) = orchestrator(false);
        let state = orchestrator.state();
        state.transition(WidgetPhase::Thinking).unwrap();
        state.transition(WidgetPhase::Speaking).unwrap();

        orchestrator.handle_user_message("hello").await.unwrap();
        assert_eq!(state.phase(), WidgetPhase::Idle);
    }

    #[tokio::test]
    async fn test_deterministic_reply_with_injected_random() {
        let synthesis = RecordingSynthesis::new();
        let executor = RecordingExecutor::new();
        let orchestrator = WidgetOrchestrator::new(
            IntentResponder::new(),
            test_config(false),
            Context::default(),
            Arc::new(synthesis),
            Arc::new(executor),
        )
        .with_random(Box::new(SequenceRandom::new(vec![2])));

        let response = orchestrator.handle_user_message("hello").await.unwrap();
        assert_eq!(response.text, "Hey there! Ready when you are! ⚡");
    }

    #[tokio::test]
    async fn test_clear_chat() {
        let (orchestrator, synthesis, _) = orchestrator(false);
        orchestrator.handle_user_message("hi").await.unwrap();
        let reply = orchestrator.clear_chat().await;

        assert_eq!(reply, "Chat cleared! How can I help, Boss?");
        let messages = orchestrator.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, reply);
        assert!(synthesis.spoken().contains(&"Chat cleared! How can I help, Boss?".to_string()));
    }

    #[tokio::test]
    async fn test_toggle_mute() {
        let (orchestrator, synthesis, _) = orchestrator(false);
        assert!(orchestrator.toggle_mute().await);
        orchestrator.handle_user_message("hello").await.unwrap();
        assert!(synthesis.spoken().is_empty());

        assert!(!orchestrator.toggle_mute().await);
        orchestrator.handle_user_message("hello").await.unwrap();
        assert_eq!(synthesis.spoken().len(), 1);
    }

    #[tokio::test]
    async fn test_thinking_delay_within_bounds() {
        let synthesis = RecordingSynthesis::new();
        let executor = RecordingExecutor::new();
        let config = WidgetConfig {
            greeting_delay_ms: 0,
            thinking_delay_min_ms: 5,
            thinking_delay_max_ms: 10,
            muted: true,
        };
        let orchestrator = WidgetOrchestrator::new(
            IntentResponder::new(),
            config,
            Context::default(),
            Arc::new(synthesis),
            Arc::new(executor),
        );
        let delay = orchestrator.thinking_delay();
        assert!(delay >= Duration::from_millis(5));
        assert!(delay <= Duration::from_millis(10));
    }
}

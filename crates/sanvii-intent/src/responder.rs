//! First-match-wins intent classification.
//!
//! `IntentResponder` owns the immutable rule table and evaluates it
//! top-to-bottom for each utterance. Classification performs no I/O,
//! touches no shared mutable state, and always returns a response.

use sanvii_core::{Context, Response};

use crate::rng::{RandomSource, ThreadRandom};
use crate::rules::{build_rules, IntentRule, Utterance};

/// The intent classification engine.
///
/// Construct once and reuse; the rule table is compiled at construction and
/// immutable thereafter, so a shared reference can be used from multiple
/// threads.
pub struct IntentResponder {
    rules: Vec<IntentRule>,
}

impl Default for IntentResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentResponder {
    /// Build the responder with the full ordered rule table.
    pub fn new() -> Self {
        Self {
            rules: build_rules(),
        }
    }

    /// Classify an utterance using thread-local randomness for reply
    /// variants.
    pub fn classify(&self, input: &str, ctx: &Context) -> Response {
        self.classify_with(input, ctx, &mut ThreadRandom)
    }

    /// Classify an utterance with an injected random source.
    ///
    /// Rules are evaluated strictly in priority order; the first rule whose
    /// predicate matches produces the response. Unmatched input is not an
    /// error: the table ends with a catch-all, so every input (including
    /// the empty string) yields a response with non-empty reply text.
    pub fn classify_with(
        &self,
        input: &str,
        ctx: &Context,
        rng: &mut dyn RandomSource,
    ) -> Response {
        let utterance = Utterance::new(input);
        for rule in &self.rules {
            if rule.matches(&utterance) {
                tracing::debug!(rule = rule.name, "Intent rule matched");
                return rule.generate(&utterance, ctx, rng);
            }
        }
        // The table ends with a catch-all; this is only reachable if the
        // table were empty.
        Response::text(format!("How can I help, {}?", ctx.owner_name))
    }

    /// Name of the first rule that matches, for diagnostics.
    pub fn matched_rule(&self, input: &str) -> Option<&'static str> {
        let utterance = Utterance::new(input);
        self.rules
            .iter()
            .find(|r| r.matches(&utterance))
            .map(|r| r.name)
    }
}

// =============================================================================
// Tests
// =============================================================================

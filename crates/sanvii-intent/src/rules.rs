//! The ordered intent rule table.
//!
//! Each rule pairs a predicate over the normalized utterance with a
//! response generator. Rules are evaluated strictly in table order and the
//! first match wins, so earlier, more specific rules shadow later, broader
//! ones. The table ends with a catch-all that always matches.

use chrono::Local;
use regex::Regex;

use sanvii_core::{Action, Context, Response};

use crate::calc;
use crate::patterns::PATTERNS;
use crate::replies::{self, render};
use crate::rng::RandomSource;

// =============================================================================
// Utterance
// =============================================================================

/// User input in raw and normalized form.
///
/// Matching runs against the normalized (trimmed, lowercased) text; the raw
/// text is preserved for echoing back in search queries.
#[derive(Debug, Clone)]
pub struct Utterance {
    raw: String,
    normalized: String,
}

impl Utterance {
    pub fn new(input: &str) -> Self {
        Self {
            raw: input.to_string(),
            normalized: input.trim().to_lowercase(),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

// =============================================================================
// IntentRule
// =============================================================================

type Predicate = Box<dyn Fn(&Utterance) -> bool + Send + Sync>;
type Generator = Box<dyn Fn(&Utterance, &Context, &mut dyn RandomSource) -> Response + Send + Sync>;

/// One recognized conversational intent: a predicate plus a response
/// generator.
pub(crate) struct IntentRule {
    pub name: &'static str,
    predicate: Predicate,
    respond: Generator,
}

impl IntentRule {
    fn new(
        name: &'static str,
        predicate: impl Fn(&Utterance) -> bool + Send + Sync + 'static,
        respond: impl Fn(&Utterance, &Context, &mut dyn RandomSource) -> Response
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            name,
            predicate: Box::new(predicate),
            respond: Box::new(respond),
        }
    }

    pub fn matches(&self, utterance: &Utterance) -> bool {
        (self.predicate)(utterance)
    }

    pub fn generate(
        &self,
        utterance: &Utterance,
        ctx: &Context,
        rng: &mut dyn RandomSource,
    ) -> Response {
        (self.respond)(utterance, ctx, rng)
    }
}

// =============================================================================
// Table construction
// =============================================================================

/// Build the full rule table in priority order.
pub(crate) fn build_rules() -> Vec<IntentRule> {
    let mut rules = Vec::new();

    // 1. Time
    rules.push(IntentRule::new(
        "time",
        |u| PATTERNS.time.is_match(u.normalized()),
        |_, ctx, _| {
            let now = Local::now().format("%-I:%M %p");
            Response::text(format!("It's {}, {}. ⏰", now, ctx.owner_name))
        },
    ));

    // 2. Date
    rules.push(IntentRule::new(
        "date",
        |u| PATTERNS.date.is_match(u.normalized()),
        |_, _, _| {
            let today = Local::now().format("%A, %B %-d, %Y");
            Response::text(format!("Today is {}. 📅", today))
        },
    ));

    // 3. Media search
    rules.push(IntentRule::new(
        "play_media",
        |u| {
            PATTERNS.play_media.is_match(u.normalized())
                || PATTERNS.play_leading.is_match(u.normalized())
        },
        |u, ctx, _| media_response(u, ctx),
    ));

    // 4. Web search
    rules.push(IntentRule::new(
        "web_search",
        |u| PATTERNS.search.is_match(u.normalized()),
        |u, ctx, _| search_response(u, ctx),
    ));

    // 5. Well-known sites, one rule each
    for site in replies::SITES {
        let regex = Regex::new(site.pattern).expect("Invalid site regex");
        rules.push(IntentRule::new(
            site.name,
            move |u| regex.is_match(u.normalized()),
            move |_, _, _| {
                Response::with_action(site.reply, Action::open_url(site.url, site.label))
            },
        ));
    }

    // 6. Weather
    rules.push(IntentRule::new(
        "weather",
        |u| u.normalized().contains("weather"),
        |u, ctx, _| weather_response(u, ctx),
    ));

    // 7. News
    rules.push(IntentRule::new(
        "news",
        |u| PATTERNS.news.is_match(u.normalized()),
        |_, _, _| {
            Response::with_action(
                replies::NEWS,
                Action::open_url("https://news.google.com", "📰 Google News"),
            )
        },
    ));

    // 8. Self-identity
    rules.push(IntentRule::new(
        "identity",
        |u| PATTERNS.identity.is_match(u.normalized()),
        |_, ctx, _| Response::text(render(replies::IDENTITY, ctx)),
    ));

    // 9. Capabilities
    rules.push(IntentRule::new(
        "capabilities",
        |u| PATTERNS.capability.is_match(u.normalized()),
        |_, ctx, _| Response::text(render(replies::CAPABILITIES, ctx)),
    ));

    // 10. Greeting
    rules.push(IntentRule::new(
        "greeting",
        |u| PATTERNS.greeting.is_match(u.normalized()),
        |_, ctx, rng| Response::text(render(pick(replies::GREETINGS, rng), ctx)),
    ));

    // 11. Thanks
    rules.push(IntentRule::new(
        "thanks",
        |u| PATTERNS.thanks.is_match(u.normalized()),
        |_, ctx, rng| Response::text(render(pick(replies::THANKS, rng), ctx)),
    ));

    // 12. How are you
    rules.push(IntentRule::new(
        "how_are_you",
        |u| PATTERNS.how_are_you.is_match(u.normalized()),
        |_, ctx, _| Response::text(render(replies::HOW_ARE_YOU, ctx)),
    ));

    // 13. Jokes
    rules.push(IntentRule::new(
        "joke",
        |u| PATTERNS.joke.is_match(u.normalized()),
        |_, ctx, rng| Response::text(render(pick(replies::JOKES, rng), ctx)),
    ));

    // 14. Calculator
    rules.push(IntentRule::new(
        "calculator",
        |u| {
            PATTERNS.numeric_only.is_match(u.normalized())
                || PATTERNS.calc_trigger.is_match(u.normalized())
        },
        |u, _, _| calculator_response(u),
    ));

    // 15. Motivation
    rules.push(IntentRule::new(
        "motivation",
        |u| PATTERNS.motivation.is_match(u.normalized()),
        |_, ctx, rng| Response::text(render(pick(replies::MOTIVATION, rng), ctx)),
    ));

    // 16. Farewell
    rules.push(IntentRule::new(
        "farewell",
        |u| PATTERNS.farewell.is_match(u.normalized()),
        |_, ctx, _| Response::text(render(replies::FAREWELL, ctx)),
    ));

    // 17. Affection
    rules.push(IntentRule::new(
        "affection",
        |u| PATTERNS.affection.is_match(u.normalized()),
        |_, ctx, _| Response::text(render(replies::AFFECTION, ctx)),
    ));

    // 18. Creator
    rules.push(IntentRule::new(
        "creator",
        |u| PATTERNS.creator.is_match(u.normalized()),
        |_, ctx, _| Response::text(render(replies::CREATOR, ctx)),
    ));

    // 19. Catch-all: acknowledge and search the web for the full input
    rules.push(IntentRule::new("fallback_search", |_| true, fallback_response));

    rules
}

// =============================================================================
// Response generators
// =============================================================================

fn pick(list: &'static [&'static str], rng: &mut dyn RandomSource) -> &'static str {
    list[rng.pick(list.len())]
}

/// Rule 3: strip the media filler words and search YouTube.
fn media_response(utterance: &Utterance, ctx: &Context) -> Response {
    let query = media_query(utterance.normalized());
    let url = format!(
        "https://www.youtube.com/results?search_query={}",
        urlencoding::encode(&query)
    );
    let label = format!("▶ Play \"{}\"", query);
    Response::with_action(
        format!("Playing \"{}\" on YouTube, {}! 🎵", query, ctx.owner_name),
        Action::open_url(url, label),
    )
}

/// Extract the media query: drop the first "play", the first "on youtube",
/// and every "song"/"music"/"video"; default when nothing is left.
pub(crate) fn media_query(normalized: &str) -> String {
    let p = &*PATTERNS;
    let stripped = p.play_word.replace(normalized, "");
    let stripped = p.on_youtube.replace(&stripped, "");
    let stripped = p.media_words.replace_all(&stripped, "");
    let query = stripped.trim();
    if query.is_empty() {
        "trending music".to_string()
    } else {
        query.to_string()
    }
}

/// Rule 4: strip the search trigger words and search Google.
fn search_response(utterance: &Utterance, ctx: &Context) -> Response {
    let stripped = PATTERNS
        .search_strip
        .replace_all(utterance.normalized(), "");
    let stripped = stripped.trim();
    let query = if stripped.is_empty() {
        utterance.raw().to_string()
    } else {
        stripped.to_string()
    };
    let url = format!(
        "https://www.google.com/search?q={}",
        urlencoding::encode(&query)
    );
    let label = format!("🔍 Search \"{}\"", query);
    Response::with_action(
        format!("Searching for \"{}\", {}! 🔍", query, ctx.owner_name),
        Action::open_url(url, label),
    )
}

/// Rule 6: strip the "weather in/for/at/of" prefix and search for the rest.
fn weather_response(utterance: &Utterance, ctx: &Context) -> Response {
    let stripped = PATTERNS
        .weather_strip
        .replace(utterance.normalized(), "");
    let city = match stripped.trim() {
        "" => "my location".to_string(),
        other => other.to_string(),
    };
    let url = format!(
        "https://www.google.com/search?q=weather+{}",
        urlencoding::encode(&city)
    );
    let label = format!("🌤️ Weather: {}", city);
    Response::with_action(
        format!("Checking weather for {}! 🌤️", city),
        Action::open_url(url, label),
    )
}

/// Rule 14: strip trigger words, sanitize to the numeric character set,
/// and evaluate. Failures degrade to a fallback reply and never propagate.
fn calculator_response(utterance: &Utterance) -> Response {
    let expr = PATTERNS
        .calc_strip
        .replace_all(utterance.normalized(), "")
        .trim()
        .to_string();
    // `x` is accepted as alternate multiplication notation.
    let sanitized: String = expr
        .replace('x', "*")
        .chars()
        .filter(|c| matches!(c, '0'..='9' | '+' | '-' | '*' | '/' | '(' | ')' | '.' | '%' | ' '))
        .collect();

    match calc::evaluate(&sanitized) {
        Ok(value) => Response::text(format!("{} = {} 🧮", expr, value)),
        Err(e) => {
            tracing::debug!(expr = %expr, error = %e, "Arithmetic evaluation failed");
            Response::text(replies::CALC_FALLBACK)
        }
    }
}

/// Rule 19: random acknowledgement opener plus a web search for the full
/// original input.
fn fallback_response(utterance: &Utterance, ctx: &Context, rng: &mut dyn RandomSource) -> Response {
    let opener = render(pick(replies::DEFAULT_OPENERS, rng), ctx);
    let url = format!(
        "https://www.google.com/search?q={}",
        urlencoding::encode(utterance.raw())
    );
    let label = format!("🔍 Search \"{}\"", utterance.raw());
    Response::with_action(opener, Action::open_url(url, label))
}

// =============================================================================
// Tests
// =============================================================================

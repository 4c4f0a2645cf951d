//! Compiled regex sets for the intent rule table.
//!
//! All patterns run against the normalized utterance (trimmed and
//! lowercased), so no `(?i)` flags are needed. Compiled once and reused
//! across calls.

use regex::Regex;
use std::sync::LazyLock;

pub(crate) struct RulePatterns {
    // Time & date
    pub time: Regex,
    pub date: Regex,
    // Media search
    pub play_media: Regex,
    pub play_leading: Regex,
    pub play_word: Regex,
    pub on_youtube: Regex,
    pub media_words: Regex,
    // Web search
    pub search: Regex,
    pub search_strip: Regex,
    // Weather
    pub weather_strip: Regex,
    // News
    pub news: Regex,
    // Self-identity & capabilities
    pub identity: Regex,
    pub capability: Regex,
    // Small talk
    pub greeting: Regex,
    pub thanks: Regex,
    pub how_are_you: Regex,
    pub joke: Regex,
    // Arithmetic
    pub numeric_only: Regex,
    pub calc_trigger: Regex,
    pub calc_strip: Regex,
    // Mood & closing
    pub motivation: Regex,
    pub farewell: Regex,
    pub affection: Regex,
    pub creator: Regex,
}

pub(crate) static PATTERNS: LazyLock<RulePatterns> = LazyLock::new(|| {
    let re = |p: &str| Regex::new(p).expect("Invalid intent regex");

    RulePatterns {
        time: re(r"what('s| is) the time|current time|time now|tell.*time"),
        date: re(r"what('s| is) (the |today'?s? )?date|what day|today"),
        play_media: re(r"play .*(youtube|song|music|video)"),
        play_leading: re(r"^play "),
        play_word: re(r"play"),
        on_youtube: re(r"on youtube"),
        media_words: re(r"song|music|video"),
        search: re(r"search|google|look up|find me|find "),
        search_strip: re(r"search( for)?|google|look up|find me|find "),
        weather_strip: re(r".*weather\s*(in|for|at|of)?\s*"),
        news: re(r"news|headlines|what('s| is) happening"),
        identity: re(r"who are you|your name|what are you|introduce"),
        capability: re(r"what can you do|help|capabilities|features"),
        greeting: re(r"^(hi|hello|hey|yo|sup|what'?s? up|good morning|good afternoon|good evening)"),
        thanks: re(r"thanks|thank you|thx|appreciate"),
        how_are_you: re(r"how are you|how('re| are) you doing"),
        joke: re(r"joke|funny|laugh|humor"),
        numeric_only: re(r"^[\d\s+\-*/().%]+$"),
        calc_trigger: re(r"calculate|what('s| is) \d"),
        calc_strip: re(r"calculate|what('s| is)"),
        motivation: re(r"motivat|inspire|encourage|sad|depressed|feel down"),
        farewell: re(r"bye|goodbye|see you|good night|later|cya"),
        affection: re(r"i love you|you('re| are) (amazing|awesome|great|the best)"),
        creator: re(r"who (made|created|built|designed) you"),
    }
});

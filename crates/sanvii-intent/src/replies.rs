//! Fixed reply text for the intent rules.
//!
//! Reply templates may contain an `{owner}` placeholder, filled in from the
//! session context at generation time. Lists back the randomized categories;
//! selection is uniform with no repetition avoidance.

use sanvii_core::Context;

/// Fill the `{owner}` placeholder in a reply template.
pub(crate) fn render(template: &str, ctx: &Context) -> String {
    template.replace("{owner}", &ctx.owner_name)
}

pub(crate) const GREETINGS: &[&str] = &[
    "Hey {owner}! What's up? 😊",
    "Hello {owner}! How can I help? 🌟",
    "Hey there! Ready when you are! ⚡",
    "Hi {owner}! What do you need? 💪",
    "Yo! Sanvii at your service! 🟣",
];

pub(crate) const THANKS: &[&str] = &[
    "You're welcome, {owner}! 😊",
    "Anytime! That's what I'm here for! 🌟",
    "Happy to help! Need anything else? ⚡",
    "My pleasure! 💜",
];

pub(crate) const JOKES: &[&str] = &[
    "Why do programmers prefer dark mode? Light attracts bugs! 🐛😄",
    "Why was the JavaScript developer sad? He didn't Node how to Express himself! 😂",
    "What's a programmer's favorite place? Foo Bar! 🍺",
    "Why do Java devs wear glasses? They don't C#! 👓😂",
    "There are 10 kinds of people: those who understand binary and those who don't! 🤓",
    "A SQL query walks into a bar, sees two tables, asks 'Can I JOIN you?' 😄",
    "Why did the developer go broke? Used up all his cache! 💸",
    "!false — it's funny because it's true! 😂",
];

pub(crate) const MOTIVATION: &[&str] = &[
    "\"The only way to do great work is to love what you do.\" — Steve Jobs 💪",
    "\"Stay hungry, stay foolish.\" ⭐",
    "{owner}, you're building something amazing. Keep going! 💻🔥",
    "\"The future belongs to those who believe in their dreams.\" 🌟",
    "Don't stop now, {owner}. You're closer than you think! 💜",
];

pub(crate) const DEFAULT_OPENERS: &[&str] = &[
    "Interesting question! Let me find that for you. 🔍",
    "Great question, {owner}! Searching now. 🔍",
    "I'm on it! Let me look that up. 🔍",
];

pub(crate) const IDENTITY: &str = "I'm Sanvii — your personal AI assistant, {owner}! I can play \
music, search the web, open apps, tell jokes, do math, and keep you company. Always here for \
you! 🟣";

pub(crate) const CAPABILITIES: &str = "Here's what I can do:\n🎵 Play songs on YouTube\n🔍 Search \
Google\n🌐 Open websites\n📰 Show news\n⏰ Tell time & date\n🌤️ Check weather\n🧮 Calculate\n😂 \
Tell jokes\n💪 Motivate you\n💬 Chat with you!\n\nTry: \"Play Kesariya\" or \"Open GitHub\"";

pub(crate) const HOW_ARE_YOU: &str =
    "All systems running perfectly, {owner}! How about you? ⚡";

pub(crate) const CALC_FALLBACK: &str =
    "Couldn't calculate that. Try something like \"calculate 45 * 23\" 🤔";

pub(crate) const NEWS: &str = "Here are the latest headlines! 📰";

pub(crate) const FAREWELL: &str = "See you later, {owner}! I'll be right here! 👋🟣";

pub(crate) const AFFECTION: &str = "Aww, that means a lot, {owner}! You're amazing too! 💜✨";

pub(crate) const CREATOR: &str =
    "I was created by {owner}! The most brilliant developer I know. 💜";

// =============================================================================
// Well-known sites
// =============================================================================

/// One "open <site>" rule: a pattern over the normalized utterance plus a
/// fixed reply, destination URL, and action label.
pub(crate) struct SiteSpec {
    pub name: &'static str,
    pub pattern: &'static str,
    pub reply: &'static str,
    pub url: &'static str,
    pub label: &'static str,
}

pub(crate) const SITES: &[SiteSpec] = &[
    SiteSpec {
        name: "open_youtube",
        pattern: "open youtube",
        reply: "Opening YouTube! 📺",
        url: "https://www.youtube.com",
        label: "📺 YouTube",
    },
    SiteSpec {
        name: "open_github",
        pattern: "open github",
        reply: "Opening GitHub! Let's code! 💻",
        url: "https://github.com",
        label: "💻 GitHub",
    },
    SiteSpec {
        name: "open_google",
        pattern: "open google",
        reply: "Opening Google! 🌐",
        url: "https://www.google.com",
        label: "🌐 Google",
    },
    SiteSpec {
        name: "open_x",
        pattern: r"open (twitter|x\b)",
        reply: "Opening X! 🐦",
        url: "https://x.com",
        label: "🐦 X",
    },
    SiteSpec {
        name: "open_instagram",
        pattern: "open instagram",
        reply: "Opening Instagram! 📸",
        url: "https://www.instagram.com",
        label: "📸 Instagram",
    },
    SiteSpec {
        name: "open_linkedin",
        pattern: "open linkedin",
        reply: "Opening LinkedIn! 💼",
        url: "https://www.linkedin.com",
        label: "💼 LinkedIn",
    },
    SiteSpec {
        name: "open_chatgpt",
        pattern: r"open (chatgpt|chat gpt)",
        reply: "Opening ChatGPT! 🤖",
        url: "https://chat.openai.com",
        label: "🤖 ChatGPT",
    },
    SiteSpec {
        name: "open_netflix",
        pattern: "open netflix",
        reply: "Movie time! 🍿",
        url: "https://www.netflix.com",
        label: "🍿 Netflix",
    },
    SiteSpec {
        name: "open_spotify",
        pattern: "open spotify",
        reply: "Let's vibe! 🎧",
        url: "https://open.spotify.com",
        label: "🎧 Spotify",
    },
    SiteSpec {
        name: "open_whatsapp",
        pattern: "open whatsapp",
        reply: "Opening WhatsApp! 💬",
        url: "https://web.whatsapp.com",
        label: "💬 WhatsApp",
    },
    SiteSpec {
        name: "open_gmail",
        pattern: r"open (gmail|email|mail)",
        reply: "Opening Gmail! 📧",
        url: "https://mail.google.com",
        label: "📧 Gmail",
    },
    SiteSpec {
        name: "open_reddit",
        pattern: "open reddit",
        reply: "Opening Reddit! 📱",
        url: "https://www.reddit.com",
        label: "📱 Reddit",
    },
    SiteSpec {
        name: "open_stackoverflow",
        pattern: r"open stack ?overflow",
        reply: "Opening StackOverflow! 🧑‍💻",
        url: "https://stackoverflow.com",
        label: "🧑‍💻 StackOverflow",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fills_owner() {
        let ctx = Context::new("Sam");
        assert_eq!(render("Hi {owner}!", &ctx), "Hi Sam!");
    }

    #[test]
    fn test_render_without_placeholder() {
        let ctx = Context::default();
        assert_eq!(render("plain text", &ctx), "plain text");
    }

    #[test]
    fn test_list_sizes() {
        assert!(GREETINGS.len() >= 5);
        assert!(JOKES.len() >= 8);
        assert!(THANKS.len() >= 4);
        assert!(MOTIVATION.len() >= 5);
        assert!(DEFAULT_OPENERS.len() >= 3);
    }

    #[test]
    fn test_site_table_complete() {
        assert_eq!(SITES.len(), 13);
        for site in SITES {
            assert!(site.url.starts_with("https://"), "{}", site.name);
            assert!(!site.reply.is_empty());
            assert!(!site.label.is_empty());
        }
    }

    #[test]
    fn test_site_patterns_compile() {
        for site in SITES {
            assert!(regex::Regex::new(site.pattern).is_ok(), "{}", site.name);
        }
    }
}

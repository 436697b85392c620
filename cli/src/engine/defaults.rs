//! # ChatRS Built-in Rule Table
//!
//! File: cli/src/engine/defaults.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The canonical rule table and reflection table used when no rule-table file
//! is configured.
//!
//! Because patterns must consume the whole input, the specific rules accept
//! optional trailing punctuation (`how are you?` and `how are you` both land
//! on the same rule). The `(.*)` catch-all stays last.
//!
use super::rule::RuleSpec;

/// Templates of the catch-all rule.
pub const FALLBACK_RESPONSES: [&str; 2] = [
    "I'm sorry, I didn't understand that. Could you rephrase?",
    "Could you please elaborate?",
];

/// `(pattern, responses)` in match order.
const PAIRS: &[(&str, &[&str])] = &[
    (
        r"(?:hi|hello|hey)[!.]*",
        &[
            "Hello! How can I help you today?",
            "Hi there! How may I assist you?",
        ],
    ),
    (
        r"my name is (.*)",
        &["Hello %1! How can I assist you today?"],
    ),
    (r"(.*) your name\?*", &["I am your friendly chatbot!"]),
    (
        r"how are you\?*",
        &["I'm just a bot, but I'm doing well. How about you?"],
    ),
    (
        r"tell me a joke[!.]*",
        &["Why don't skeletons fight each other? They don't have the guts!"],
    ),
    (
        r"(.*) (help|assist) (.*)",
        &["Sure! How can I assist you with %3?"],
    ),
    (
        r"(?:bye|exit)[!.]*",
        &["Goodbye! Have a great day!", "See you later!"],
    ),
    (
        r"what can you do\?*",
        &["I can chat with you, tell jokes, and help with basic questions!"],
    ),
    (
        r"(.*) weather(.*)",
        &["I'm sorry, I don't have access to weather information."],
    ),
    (
        r"(.*) time(.*)",
        &["I don't have access to real-time information."],
    ),
    (
        r"(?:thank you|thanks)[!.]*",
        &["You're welcome!", "Happy to help!"],
    ),
    (r"(.*)", &FALLBACK_RESPONSES),
];

/// First/second person swaps applied to echoed captures.
const REFLECTIONS: &[(&str, &str)] = &[
    ("i am", "you are"),
    ("i was", "you were"),
    ("i", "you"),
    ("i'm", "you are"),
    ("i'd", "you would"),
    ("i've", "you have"),
    ("i'll", "you will"),
    ("my", "your"),
    ("you are", "I am"),
    ("you were", "I was"),
    ("you've", "I have"),
    ("you'll", "I will"),
    ("your", "my"),
    ("yours", "mine"),
    ("you", "me"),
    ("me", "you"),
];

/// The canonical rule table, in match order.
pub fn rule_specs() -> Vec<RuleSpec> {
    PAIRS
        .iter()
        .map(|(pattern, responses)| RuleSpec::new(*pattern, responses.iter().copied()))
        .collect()
}

/// The default reflection pairs.
pub fn reflection_pairs() -> impl Iterator<Item = (&'static str, &'static str)> {
    REFLECTIONS.iter().copied()
}

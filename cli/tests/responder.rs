//! # ChatRS Responder Integration Tests
//!
//! File: cli/tests/responder.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Black-box tests of the engine through its public API.
//!

use chatrs::engine::{Reflections, Responder, RuleSpec, DEFAULT_RESPONSE};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn builtin() -> Responder {
    Responder::with_defaults().expect("built-in rule table should compile")
}

#[test]
fn test_every_input_gets_a_reply() {
    let responder = builtin();
    for input in ["", " ", "?", "hello", "ñandú", "a\tb", "%1", "x".repeat(500).as_str()] {
        assert!(!responder.respond(input).is_empty(), "empty reply for {input:?}");
    }
}

#[test]
fn test_multi_line_input_gets_a_catch_all_template() {
    let responder = builtin();
    let fallback = [
        "I'm sorry, I didn't understand that. Could you rephrase?",
        "Could you please elaborate?",
    ];
    for input in ["first line\nsecond line", "a\r\nb", "hello\nthere"] {
        let reply = responder.respond(input);
        assert_ne!(reply, DEFAULT_RESPONSE, "{input:?} fell through every rule");
        assert!(fallback.contains(&reply.as_str()), "{input:?} -> {reply:?}");
    }
}

#[test]
fn test_greetings() {
    let responder = builtin();
    let greetings: HashSet<&str> = [
        "Hello! How can I help you today?",
        "Hi there! How may I assist you?",
    ]
    .into_iter()
    .collect();
    for input in ["hi", "HELLO", "  hey ", "Hello!"] {
        let reply = responder.respond(input);
        assert!(greetings.contains(reply.as_str()), "{input:?} -> {reply:?}");
    }
}

#[test]
fn test_specific_intents() {
    let responder = builtin();
    assert_eq!(
        responder.respond("how are you?"),
        "I'm just a bot, but I'm doing well. How about you?"
    );
    assert_eq!(
        responder.respond("what's the weather like"),
        "I'm sorry, I don't have access to weather information."
    );
    assert_eq!(
        responder.respond("what time is it"),
        "I don't have access to real-time information."
    );
}

#[test]
fn test_ordering_is_part_of_the_contract() {
    // Same two rules, opposite order.
    let specific = RuleSpec::new("my name is (.*)", ["Hi %1"]);
    let general = RuleSpec::new("(.*)", ["?"]);

    let good = Responder::new([specific.clone(), general.clone()], Reflections::empty()).unwrap();
    let shadowed = Responder::new([general, specific], Reflections::empty()).unwrap();

    assert_eq!(good.respond("my name is Bo"), "Hi Bo");
    assert_eq!(shadowed.respond("my name is Bo"), "?");
}

#[test]
fn test_all_templates_eventually_chosen() {
    let responder = Responder::new(
        [RuleSpec::new("(.*)", ["a", "b", "c"])],
        Reflections::empty(),
    )
    .unwrap();
    let mut rng = StdRng::seed_from_u64(2024);
    let seen: HashSet<String> = (0..300).map(|_| responder.respond_with("x", &mut rng)).collect();
    let expected: HashSet<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_table_without_catch_all_uses_default() {
    let responder =
        Responder::new([RuleSpec::new("ping", ["pong"])], Reflections::empty()).unwrap();
    assert_eq!(responder.respond("PING"), "pong");
    assert_eq!(responder.respond("pong"), DEFAULT_RESPONSE);
}

#[test]
fn test_shared_across_threads() {
    let responder = std::sync::Arc::new(builtin());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let responder = std::sync::Arc::clone(&responder);
            std::thread::spawn(move || responder.respond(&format!("my name is Bot{i}")))
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(
            handle.join().unwrap(),
            format!("Hello Bot{i}! How can I assist you today?")
        );
    }
}

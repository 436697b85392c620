//! # ChatRS Pattern Responder
//!
//! File: cli/src/engine/responder.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `Responder` owns an ordered rule table and a reflection table, both fixed at
//! construction. `respond` walks the rules in declaration order, takes the
//! first whose pattern matches the whole input (case-insensitively), picks one
//! of its templates uniformly at random and expands the `%N` placeholders with
//! reflected capture text.
//!
//! ## Architecture
//!
//! - Construction validates the whole table once; malformed tables are
//!   reported as `ChatrsError` and never surface at call time.
//! - The responder holds no per-conversation state. `respond` draws from the
//!   calling thread's RNG; `respond_with` takes the random source explicitly,
//!   which is how seeded runs and tests get reproducible output.
//! - If nothing matches (a table without a catch-all), `DEFAULT_RESPONSE` is
//!   returned.
//!
//! ## Examples
//!
//! ```rust
//! use chatrs::engine::{Reflections, Responder, RuleSpec};
//!
//! let responder = Responder::new(
//!     [
//!         RuleSpec::new("my name is (.*)", ["Hello %1!"]),
//!         RuleSpec::new("(.*)", ["Tell me more."]),
//!     ],
//!     Reflections::empty(),
//! )
//! .unwrap();
//!
//! assert_eq!(responder.respond("my name is John"), "Hello John!");
//! assert_eq!(responder.respond("anything else"), "Tell me more.");
//! ```
//!
use super::defaults;
use super::reflection::Reflections;
use super::rule::{Rule, RuleSpec};
use super::template;
use crate::core::error::ChatrsError;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace, warn};

/// Returned when no rule matches the input.
pub const DEFAULT_RESPONSE: &str = "I'm sorry, I didn't understand that.";

const CATCH_ALL_SAMPLES: [&str; 2] = ["", "a\nb"];

/// Rule-based responder. Immutable once built; safe to share across threads.
#[derive(Debug, Clone)]
pub struct Responder {
    rules: Vec<Rule>,
    reflections: Reflections,
}

impl Responder {
    /// Compiles `specs` (in match order) into a responder.
    pub fn new<I>(specs: I, reflections: Reflections) -> Result<Self, ChatrsError>
    where
        I: IntoIterator<Item = RuleSpec>,
    {
        let rules = specs
            .into_iter()
            .enumerate()
            .map(|(index, spec)| Rule::compile(index, spec))
            .collect::<Result<Vec<_>, _>>()?;

        if rules.is_empty() {
            return Err(ChatrsError::EmptyRuleTable);
        }

        let responder = Self { rules, reflections };
        if !responder.has_catch_all() {
            warn!(
                "Last rule '{}' is not a catch-all; some inputs will get the default response.",
                responder.rules[responder.rules.len() - 1].pattern()
            );
        }
        debug!(
            "Responder ready: {} rules, {} reflections.",
            responder.rules.len(),
            responder.reflections.len()
        );
        Ok(responder)
    }

    /// A responder over the built-in rule and reflection tables.
    pub fn with_defaults() -> Result<Self, ChatrsError> {
        let reflections = Reflections::new(defaults::reflection_pairs())?;
        Self::new(defaults::rule_specs(), reflections)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn reflections(&self) -> &Reflections {
        &self.reflections
    }

    /// Whether the final rule looks like a catch-all: it must accept both
    /// empty and multi-line input.
    pub fn has_catch_all(&self) -> bool {
        self.rules
            .last()
            .is_some_and(|rule| CATCH_ALL_SAMPLES.iter().all(|s| rule.matches(s)))
    }

    /// Index of the first rule matching `input`, if any.
    pub fn matching_rule(&self, input: &str) -> Option<usize> {
        let input = input.trim();
        self.rules.iter().position(|rule| rule.matches(input))
    }

    /// Answers `input` using the thread-local random source.
    pub fn respond(&self, input: &str) -> String {
        self.respond_with(input, &mut rand::thread_rng())
    }

    /// Answers `input`, drawing the template choice from `rng`.
    pub fn respond_with<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> String {
        let input = input.trim();
        for (index, rule) in self.rules.iter().enumerate() {
            let Some(captures) = rule.captures(input) else {
                continue;
            };
            trace!("Input {:?} matched rule #{} '{}'", input, index, rule.pattern());
            return match rule.templates().choose(rng) {
                Some(chosen) => template::expand(chosen, &captures, &self.reflections),
                None => DEFAULT_RESPONSE.to_string(),
            };
        }
        debug!("No rule matched input {:?}; using default response.", input);
        DEFAULT_RESPONSE.to_string()
    }
}

//! # ChatRS Engine
//!
//! File: cli/src/engine/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The pattern-matching / response-selection engine. Everything else in the
//! crate (console loop, demo, rule tooling) is a caller that hands the engine
//! one line of text and prints the string it gets back.
//!
//! ## Architecture
//!
//! - `rule`: `RuleSpec` (raw) and `Rule` (compiled, anchored, case-insensitive)
//! - `reflection`: pronoun-swapping table applied to captured text
//! - `template`: `%N` placeholder expansion
//! - `responder`: `Responder`, the first-match-wins matcher
//! - `defaults`: the built-in rule and reflection tables
//! - `table`: TOML rule-table files
//!
pub mod defaults;
pub mod reflection;
pub mod responder;
pub mod rule;
pub mod table;
pub mod template;

pub use reflection::Reflections;
pub use responder::{Responder, DEFAULT_RESPONSE};
pub use rule::{Rule, RuleSpec};
pub use table::RuleTable;

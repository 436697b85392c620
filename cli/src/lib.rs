//! # ChatRS Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! ChatRS is a rule-based conversational responder. Input text is matched
//! against an ordered list of regular-expression rules; the first rule that
//! matches supplies a randomly chosen response template, into which captured
//! text is substituted after a pronoun "reflection" pass.
//!
//! The library exposes the engine (`engine`), the shared infrastructure
//! (`core`) and the command handlers (`commands`) used by the `chatrs` binary,
//! so that integration tests can drive each of them directly.
//!
//! ```rust
//! use chatrs::engine::Responder;
//!
//! let responder = Responder::with_defaults().unwrap();
//! assert_eq!(
//!     responder.respond("my name is Ada"),
//!     "Hello Ada! How can I assist you today?"
//! );
//! ```
//!
pub mod commands;
pub mod core;
pub mod engine;

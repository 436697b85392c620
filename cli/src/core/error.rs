//! # ChatRS Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout ChatRS. The responder
//! itself never fails at call time; every error here is raised either while a
//! rule table is being turned into a `Responder`, or by the surrounding CLI
//! glue (configuration, rule-table files, console I/O).
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ChatrsError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!   in the application layer
//!
//! Engine constructors return `std::result::Result<_, ChatrsError>` so callers
//! can match on the exact problem; command handlers wrap them in `anyhow` with
//! added context.
//!
//! ## Examples
//!
//! ```rust,ignore
//! match Responder::new(specs, Reflections::default()) {
//!     Ok(responder) => println!("{}", responder.respond("hello")),
//!     Err(ChatrsError::InvalidPattern { index, .. }) => eprintln!("rule {index} is broken"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the ChatRS application.
#[derive(Error, Debug)]
pub enum ChatrsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Rule table is empty; at least one (catch-all) rule is required.")]
    EmptyRuleTable,

    #[error("Rule #{index} has an invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        index: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Rule #{index} ('{pattern}') has no response templates.")]
    EmptyTemplates { index: usize, pattern: String },

    #[error("Rule #{index} template '{template}' references group %{group}, which the pattern does not define.")]
    UnknownGroup {
        index: usize,
        group: usize,
        template: String,
    },

    #[error("Reflection table could not be compiled: {source}")]
    InvalidReflections {
        #[source]
        source: regex::Error,
    },

    #[error("Rule file error: {0}")]
    RuleFile(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

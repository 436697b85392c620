//! # ChatRS Rule-Table Files
//!
//! File: cli/src/engine/table.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Rule tables can be supplied as TOML files instead of using the built-in
//! table. Rules are listed as an array of tables, in match order. An optional
//! `[reflections]` table replaces the default reflections entirely.
//!
//! ```toml
//! [[rules]]
//! pattern = "my name is (.*)"
//! responses = ["Hello %1!"]
//!
//! [[rules]]
//! pattern = "(.*)"
//! responses = ["Tell me more.", "Go on."]
//!
//! [reflections]
//! "my" = "your"
//! "your" = "my"
//! ```
//!
use super::defaults;
use super::reflection::Reflections;
use super::responder::Responder;
use super::rule::RuleSpec;
use crate::core::error::{ChatrsError, Result};
use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::{fs, path::Path};
use tracing::info;

/// Deserialized rule-table file.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RuleTable {
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
    /// Replaces the default reflections when present.
    #[serde(default)]
    pub reflections: Option<BTreeMap<String, String>>,
}

impl RuleTable {
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, ChatrsError> {
        toml::from_str(content).map_err(|e| ChatrsError::RuleFile(e.to_string()))
    }

    /// Reads and parses a rule-table file.
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading rule table from: {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read rule table: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse rule table: {}", path.display()))
    }

    /// Compiles the table into a responder.
    pub fn into_responder(self) -> std::result::Result<Responder, ChatrsError> {
        let reflections = match self.reflections {
            Some(pairs) => Reflections::new(pairs)?,
            None => Reflections::new(defaults::reflection_pairs())?,
        };
        Responder::new(self.rules, reflections)
    }
}

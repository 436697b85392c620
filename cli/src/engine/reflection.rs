//! # ChatRS Reflections
//!
//! File: cli/src/engine/reflection.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A reflection table swaps first- and second-person words in text captured
//! from the user, so that an echoed fragment reads naturally in the bot's
//! voice ("your car" becomes "my car").
//!
//! The transform is a pure function of the table: keys are matched
//! case-insensitively on word boundaries, longest key first (so "i am" wins
//! over "i"), and every character outside a matched key is kept verbatim.
//! A key edge that is punctuation (`"you're!"`) gets no boundary check.
//!
use crate::core::error::ChatrsError;
use regex::{Captures, Regex, RegexBuilder};
use std::collections::BTreeMap;
use tracing::warn;

/// Compiled word-swap table applied to captured text.
#[derive(Debug, Clone)]
pub struct Reflections {
    /// Lowercased key -> replacement.
    table: BTreeMap<String, String>,
    /// `None` when the table is empty.
    matcher: Option<Regex>,
}

impl Reflections {
    /// Builds a table from `(word, replacement)` pairs.
    ///
    /// Keys are normalised to lowercase; a later duplicate key overrides an
    /// earlier one. Blank keys are skipped.
    pub fn new<I, K, V>(pairs: I) -> Result<Self, ChatrsError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = BTreeMap::new();
        for (key, value) in pairs {
            let key = key.into().trim().to_lowercase();
            if key.is_empty() {
                warn!("Skipping blank reflection key.");
                continue;
            }
            table.insert(key, value.into());
        }

        let matcher = if table.is_empty() {
            None
        } else {
            let mut keys: Vec<&str> = table.keys().map(String::as_str).collect();
            // Leftmost-first alternation: longer phrases must come first.
            keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
            let alternation = keys
                .iter()
                .map(|k| bounded(k))
                .collect::<Vec<_>>()
                .join("|");
            let regex = RegexBuilder::new(&format!("(?:{})", alternation))
                .case_insensitive(true)
                .build()
                .map_err(|source| ChatrsError::InvalidReflections { source })?;
            Some(regex)
        };

        Ok(Self { table, matcher })
    }

    /// A table that leaves all text untouched.
    pub fn empty() -> Self {
        Self {
            table: BTreeMap::new(),
            matcher: None,
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Looks up the replacement for a single key (case-insensitive).
    pub fn get(&self, word: &str) -> Option<&str> {
        self.table.get(&word.to_lowercase()).map(String::as_str)
    }

    /// Applies the table to `text`.
    pub fn reflect(&self, text: &str) -> String {
        let Some(matcher) = &self.matcher else {
            return text.to_string();
        };
        matcher
            .replace_all(text, |caps: &Captures| {
                let found = &caps[0];
                self.get(found).unwrap_or(found).to_string()
            })
            .into_owned()
    }
}

/// Escapes `key`, adding a word boundary on each side that ends in a word
/// character. A `\b` next to punctuation would never match where expected.
fn bounded(key: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let start = if key.starts_with(is_word) { r"\b" } else { "" };
    let end = if key.ends_with(is_word) { r"\b" } else { "" };
    format!("{}{}{}", start, regex::escape(key), end)
}

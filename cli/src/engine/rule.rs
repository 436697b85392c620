//! # ChatRS Rules
//!
//! File: cli/src/engine/rule.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A rule pairs a pattern with the response templates that may answer it.
//! `RuleSpec` is the raw, caller-supplied form (also what rule-table files
//! deserialize into); `Rule` is the compiled form held by a `Responder`.
//!
//! Patterns are matched case-insensitively and must consume the whole input:
//! `my name is (.*)` is compiled as `^(?:my name is (.*))$`. `.` also matches
//! line breaks, so multi-line input is still one input.
//!
use super::template;
use crate::core::error::ChatrsError;
use regex::{Captures, Regex, RegexBuilder};
use serde::Deserialize;

/// Uncompiled rule: a pattern and its response templates.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
    pub pattern: String,
    pub responses: Vec<String>,
}

impl RuleSpec {
    pub fn new<P, I, S>(pattern: P, responses: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pattern: pattern.into(),
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }
}

/// A compiled rule.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: String,
    regex: Regex,
    templates: Vec<String>,
}

impl Rule {
    /// Compiles `spec`, the `index`-th rule of its table.
    ///
    /// Fails if the pattern does not parse, if there are no templates, or if
    /// a template refers to a group the pattern does not have.
    pub fn compile(index: usize, spec: RuleSpec) -> Result<Self, ChatrsError> {
        let RuleSpec { pattern, responses } = spec;

        // Check the pattern on its own first, so that something like "a)(b"
        // cannot sneak through once wrapped in the anchoring group.
        let build = |source: &str| {
            RegexBuilder::new(source)
                .case_insensitive(true)
                .dot_matches_new_line(true)
                .build()
                .map_err(|source| ChatrsError::InvalidPattern {
                    index,
                    pattern: pattern.clone(),
                    source,
                })
        };
        build(pattern.as_str())?;
        let regex = build(format!("^(?:{})$", pattern).as_str())?;

        if responses.is_empty() {
            return Err(ChatrsError::EmptyTemplates { index, pattern });
        }

        let group_count = regex.captures_len();
        for response in &responses {
            if let Some(group) = template::referenced_groups(response)
                .into_iter()
                .find(|g| *g >= group_count)
            {
                return Err(ChatrsError::UnknownGroup {
                    index,
                    group,
                    template: response.clone(),
                });
            }
        }

        Ok(Self {
            pattern,
            regex,
            templates: responses,
        })
    }

    /// The pattern as written, without the anchoring wrapper.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    /// Number of capture groups, excluding the implicit whole-match group.
    pub fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    pub fn matches(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    pub fn captures<'t>(&self, input: &'t str) -> Option<Captures<'t>> {
        self.regex.captures(input)
    }
}

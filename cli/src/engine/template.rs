//! # ChatRS Response Templates
//!
//! File: cli/src/engine/template.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Response templates are plain strings that may contain positional
//! placeholders of the form `%N`, where `N` is a single digit naming a capture
//! group of the rule's pattern (`%0` is the whole match). Expansion replaces
//! each placeholder with the reflected capture text; a group that did not take
//! part in the match expands to an empty string.
//!
//! A `%` that is not followed by a digit is left as-is.
//!
use super::reflection::Reflections;
use regex::Captures;

/// Returns the group indices referenced by `template`, in order of appearance.
pub fn referenced_groups(template: &str) -> Vec<usize> {
    let mut groups = Vec::new();
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            continue;
        }
        if let Some(digit) = chars.peek().and_then(|d| d.to_digit(10)) {
            groups.push(digit as usize);
            chars.next();
        }
    }
    groups
}

/// Expands every `%N` placeholder in `template` using `captures`.
///
/// Capture text is passed through `reflections` before insertion. Inserted
/// text is never re-scanned for placeholders.
pub fn expand(template: &str, captures: &Captures<'_>, reflections: &Reflections) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek().and_then(|d| d.to_digit(10)) {
            Some(digit) => {
                chars.next();
                if let Some(group) = captures.get(digit as usize) {
                    out.push_str(&reflections.reflect(group.as_str()));
                }
            }
            None => out.push('%'),
        }
    }
    tidy_punctuation(out)
}

/// Collapses doubled terminal punctuation left behind when an echoed question
/// lands in front of the template's own `.` or `?`.
pub fn tidy_punctuation(mut response: String) -> String {
    if response.ends_with("?.") {
        response.truncate(response.len() - 2);
        response.push('.');
    } else if response.ends_with("??") {
        response.truncate(response.len() - 2);
        response.push('?');
    }
    response
}

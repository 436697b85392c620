//! # ChatRS Rules Command Group
//!
//! File: cli/src/commands/rules.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Tools for working with rule tables:
//! - `chatrs rules list`: prints the active table in match order
//! - `chatrs rules check <FILE>`: compiles a rule-table file and reports the
//!   first problem found (bad pattern, empty response list, unknown `%N` group)
//!
//! ## Examples
//!
//! ```bash
//! chatrs rules list
//! chatrs --rules ./custom.toml rules list
//! chatrs rules check ./custom.toml
//! ```
//!
//! Example output of `list`:
//!
//! ```text
//! Active rule table (built-in), first match wins:
//!
//!  #  | Pattern                        | Responses
//! ----+--------------------------------+----------
//!   1 | (?:hi|hello|hey)[!.]*          | 2
//!   2 | my name is (.*)                | 1
//! ```
//!
use super::{load_responder, GlobalOpts, Runtime};
use crate::core::error::Result;
use crate::engine::Responder;
use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::info;

/// Top-level arguments for the `rules` command group.
#[derive(Parser, Debug)]
pub struct RulesArgs {
    #[command(subcommand)]
    command: RulesCommand,
}

#[derive(Subcommand, Debug)]
enum RulesCommand {
    /// Show the active rule table in match order
    List,
    /// Validate a rule-table file
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Rule-table file to validate.
    file: PathBuf,
}

pub fn handle_rules(args: RulesArgs, opts: &GlobalOpts) -> Result<()> {
    match args.command {
        RulesCommand::List => {
            info!("Handling rules list command...");
            let runtime = Runtime::load(opts)?;
            let source = opts
                .rules
                .clone()
                .or_else(|| runtime.config.rules.file.as_ref().map(PathBuf::from))
                .map(|p| format!("'{}'", p.display()))
                .unwrap_or_else(|| "built-in".to_string());
            print!("{}", format_rule_table(&runtime.responder, &source));
        }
        RulesCommand::Check(check) => {
            info!("Checking rule table {}", check.file.display());
            let responder = load_responder(&check.file)?;
            println!(
                "Rule table '{}' is valid: {} rule(s).",
                check.file.display(),
                responder.rules().len()
            );
            if !responder.has_catch_all() {
                println!("Warning: the last rule is not a catch-all; unmatched input will get the default response.");
            }
        }
    }
    Ok(())
}

const PATTERN_MIN_WIDTH: usize = 10;
const PATTERN_MAX_WIDTH: usize = 40;

/// Cuts `text` to `width` characters, marking the cut with `…`.
fn fit_column(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn format_rule_table(responder: &Responder, source: &str) -> String {
    let pattern_width = responder
        .rules()
        .iter()
        .map(|rule| rule.pattern().chars().count())
        .max()
        .unwrap_or(PATTERN_MIN_WIDTH)
        .clamp(PATTERN_MIN_WIDTH, PATTERN_MAX_WIDTH);

    let mut out = String::new();
    let _ = writeln!(out, "Active rule table ({}), first match wins:\n", source);
    let _ = writeln!(out, " #  | {:<width$} | Responses", "Pattern", width = pattern_width);
    let _ = writeln!(out, "----+-{:-<width$}-+----------", "", width = pattern_width);
    for (index, rule) in responder.rules().iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3} | {:<width$} | {}",
            index + 1,
            fit_column(rule.pattern(), pattern_width),
            rule.templates().len(),
            width = pattern_width
        );
    }
    let _ = writeln!(
        out,
        "\n{} rule(s), {} reflection(s).",
        responder.rules().len(),
        responder.reflections().len()
    );
    out
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Reflections, RuleSpec};

    #[test]
    fn test_format_rule_table_lists_rules_in_order() {
        let responder = Responder::with_defaults().unwrap();
        let table = format_rule_table(&responder, "built-in");
        assert!(table.starts_with("Active rule table (built-in), first match wins:"));

        let greeting = table.find("(?:hi|hello|hey)").unwrap();
        let name = table.find("my name is (.*)").unwrap();
        let catch_all = table.find(" 12 | (.*) ").unwrap();
        assert!(greeting < name && name < catch_all);
        assert!(table.contains("12 rule(s), 16 reflection(s)."));
    }

    #[test]
    fn test_long_and_non_ascii_patterns_fit_the_column() {
        let long = "a".repeat(60);
        let responder = Responder::new(
            [
                RuleSpec::new("ñandú (.*)", ["%1"]),
                RuleSpec::new(long.as_str(), ["x"]),
                RuleSpec::new("(.*)", ["?"]),
            ],
            Reflections::empty(),
        )
        .unwrap();
        let table = format_rule_table(&responder, "test");
        let rows: Vec<&str> = table
            .lines()
            .filter(|line| line.starts_with("  1 ") || line.starts_with("  2 "))
            .collect();
        assert_eq!(rows.len(), 2);
        // Character column of the separator after the pattern.
        let bar = |line: &str| {
            line.chars()
                .enumerate()
                .filter(|(_, c)| *c == '|')
                .map(|(i, _)| i)
                .nth(1)
        };
        assert_eq!(bar(rows[0]), bar(rows[1]));
        assert!(rows[1].contains(&format!("{}…", "a".repeat(PATTERN_MAX_WIDTH - 1))));
        assert!(!rows[1].contains(&long));
    }
}

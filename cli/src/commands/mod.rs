//! # ChatRS Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the ChatRS CLI and the
//! setup they share. Every command is a thin caller of the engine: it builds a
//! `Responder` from the active rule table, feeds it text and prints replies.
//!
//! ## Command Groups
//!
//! - `chat`: Interactive console loop (the default when no command is given)
//! - `demo`: Runs a scripted conversation
//! - `ask`: Answers a single line of text
//! - `rules`: Inspects or validates rule tables
//!
//! ## Shared Setup
//!
//! `GlobalOpts` holds the flags accepted by every command. `Runtime::load`
//! resolves them against the configuration into the effective settings, the
//! compiled responder and the random source.
//!
use crate::core::config::{self, Config};
use crate::core::error::Result;
use crate::engine::{Responder, RuleTable};
use anyhow::Context;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One-shot question.
pub mod ask;
/// Interactive console chat.
pub mod chat;
/// Scripted demonstration conversation.
pub mod demo;
/// Rule-table inspection and validation.
pub mod rules;

/// Flags shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Configuration file to use instead of the user/project files.
    #[arg(long, global = true, env = "CHATRS_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Rule-table file (TOML) to use instead of the built-in rules.
    #[arg(long, global = true, env = "CHATRS_RULES", value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Seed for response selection, for reproducible conversations.
    #[arg(long, global = true, env = "CHATRS_SEED", value_name = "N")]
    pub seed: Option<u64>,
}

/// Everything a command needs after configuration has been resolved.
#[derive(Debug)]
pub struct Runtime {
    pub config: Config,
    pub responder: Responder,
    pub seed: Option<u64>,
}

impl Runtime {
    /// Loads configuration and the rule table; flags win over config values.
    pub fn load(opts: &GlobalOpts) -> Result<Self> {
        let config = config::load_config(opts.config.as_deref())
            .context("Failed to load ChatRS configuration")?;

        let rules_file = opts
            .rules
            .clone()
            .or_else(|| config.rules.file.as_ref().map(PathBuf::from));
        let responder = match rules_file {
            Some(path) => load_responder(&path)?,
            None => {
                debug!("Using built-in rule table.");
                Responder::with_defaults().context("Built-in rule table is invalid")?
            }
        };

        let seed = opts.seed.or(config.rules.seed);
        Ok(Self {
            config,
            responder,
            seed,
        })
    }

    /// A fresh random source: seeded when a seed is configured.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                debug!("Using seeded random source ({})", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        }
    }
}

/// Reads a rule-table file and compiles it.
pub fn load_responder(path: &Path) -> Result<Responder> {
    let table = RuleTable::load(path)?;
    let responder = table
        .into_responder()
        .with_context(|| format!("Invalid rule table: {}", path.display()))?;
    info!(
        "Loaded {} rules from {}",
        responder.rules().len(),
        path.display()
    );
    Ok(responder)
}

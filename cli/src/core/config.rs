//! # ChatRS Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the configuration system for ChatRS, handling loading,
//! merging, validation, and access to configuration data. It combines defaults,
//! user settings, and project-specific overrides.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file passed with `--config` (replaces discovery entirely)
//! 2. Project-specific `.chatrs.toml` in the current directory or ancestors
//!    (the search stops at a directory containing `.git`)
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Default values defined in the code
//!
//! Command-line flags (`--rules`, `--seed`) override whatever is loaded here.
//!
//! ## Examples
//!
//! ```toml
//! [bot]
//! name = "Rusty"
//! farewell = "Bye for now!"
//! exit_words = ["exit", "quit"]
//!
//! [rules]
//! file = "~/.config/chatrs/rules.toml"
//! seed = 42
//! ```
//!
use crate::core::error::{ChatrsError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub rules: RulesConfig,
}

/// Presentation of the console chat loop (`chatrs chat`).
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BotConfig {
    /// Name printed in front of every reply.
    #[serde(default = "default_bot_name")]
    pub name: String,
    /// Printed once when a chat session starts.
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Printed when the user types an exit word.
    #[serde(default = "default_farewell")]
    pub farewell: String,
    /// Inputs that end the session (compared case-insensitively).
    #[serde(default = "default_exit_words")]
    pub exit_words: Vec<String>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_bot_name(),
            greeting: default_greeting(),
            farewell: default_farewell(),
            exit_words: default_exit_words(),
        }
    }
}

/// Where the rule table comes from and how templates are chosen.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// Rule-table file (can use ~). The built-in table is used when unset.
    pub file: Option<String>,
    /// Seed for template selection; entropy-seeded when unset.
    pub seed: Option<u64>,
}

fn default_bot_name() -> String {
    "Chatbot".to_string()
}
fn default_greeting() -> String {
    "Hello, I am your chatbot! Type 'exit' to end the conversation.\n\
     You can ask me questions, tell me your name, or just chat!"
        .to_string()
}
fn default_farewell() -> String {
    "Goodbye! Have a nice day!".to_string()
}
fn default_exit_words() -> Vec<String> {
    vec!["exit".to_string()]
}

const PROJECT_CONFIG_FILENAME: &str = ".chatrs.toml";

/// Loads configuration, either from `explicit` alone or from the user and
/// project files, then expands and validates it.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => {
            let user_config = load_user_config()?;
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            let project_config = load_project_config(&current_dir)?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "ChatRS", "chatrs") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.chatrs.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    expand_config_paths(&mut config, path.parent().unwrap_or_else(|| Path::new("")));
    Ok(config)
}

/// Project values win wherever they differ from the defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project) = project else {
        return user;
    };
    let defaults = BotConfig::default();
    let pick = |project: String, user: String, default: &str| {
        if project != default {
            project
        } else {
            user
        }
    };
    Config {
        bot: BotConfig {
            name: pick(project.bot.name, user.bot.name, &defaults.name),
            greeting: pick(project.bot.greeting, user.bot.greeting, &defaults.greeting),
            farewell: pick(project.bot.farewell, user.bot.farewell, &defaults.farewell),
            exit_words: if project.bot.exit_words != defaults.exit_words {
                project.bot.exit_words
            } else {
                user.bot.exit_words
            },
        },
        rules: RulesConfig {
            file: project.rules.file.or(user.rules.file),
            seed: project.rules.seed.or(user.rules.seed),
        },
    }
}

/// Expands `~` and resolves relative paths against `base`, the directory of
/// the file the values were read from.
fn expand_config_paths(config: &mut Config, base: &Path) {
    if let Some(file) = &mut config.rules.file {
        let expanded = PathBuf::from(shellexpand::tilde(file.as_str()).as_ref());
        let resolved = if expanded.is_relative() {
            base.join(expanded)
        } else {
            expanded
        };
        *file = resolved.to_string_lossy().into_owned();
        debug!("Expanded rule table path: {}", file);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if config.bot.name.trim().is_empty() {
        return Err(anyhow!(ChatrsError::Config(
            "bot.name cannot be empty.".to_string()
        )));
    }
    if config.bot.exit_words.is_empty() {
        return Err(anyhow!(ChatrsError::Config(
            "bot.exit_words must list at least one word.".to_string()
        )));
    }
    if config.bot.exit_words.iter().any(|w| w.trim().is_empty()) {
        return Err(anyhow!(ChatrsError::Config(
            "bot.exit_words cannot contain blank entries.".to_string()
        )));
    }
    if let Some(file) = &config.rules.file {
        let path = Path::new(file);
        if !path.is_file() {
            return Err(anyhow!(ChatrsError::Config(format!(
                "Configured rule table '{}' does not exist or is not a file.",
                path.display()
            ))));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}

//! # ChatRS Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the ChatRS CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! Running `chatrs` without a command starts an interactive chat.
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! chatrs --help
//!
//! # Chat with debug logging
//! chatrs -vv chat
//!
//! # Use a custom rule table
//! chatrs --rules ./rules.toml ask "my name is Ada"
//! ```
//!
use chatrs::commands::{self, GlobalOpts};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "chatrs",
    about = "ChatRS: a rule-based chatbot driven by ordered regex rules",
    long_about = "Talk to a rule-based responder. Input is matched against an ordered\n\
                  rule table (first match wins) and answered with one of the rule's templates.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[command(flatten)]
    global: GlobalOpts,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Chat interactively (default)
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Play a scripted conversation
    #[command(alias = "d")]
    Demo(commands::demo::DemoArgs),
    /// Answer a single line of text
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Inspect or validate rule tables
    #[command(alias = "r")]
    Rules(commands::rules::RulesArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Chat(commands::chat::ChatArgs::default()));
    let command_result = match command {
        Commands::Chat(args) => commands::chat::handle_chat(args, &cli.global),
        Commands::Demo(args) => commands::demo::handle_demo(args, &cli.global),
        Commands::Ask(args) => commands::ask::handle_ask(args, &cli.global),
        Commands::Rules(args) => commands::rules::handle_rules(args, &cli.global),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

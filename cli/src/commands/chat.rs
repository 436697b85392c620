//! # ChatRS Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements `chatrs chat`, a REPL-style loop that lets the user
//! talk to the responder from the console.
//!
//! ## Session Flow
//!
//! 1. Print the configured greeting
//! 2. Prompt with `You: ` and read one line
//! 3. On an exit word (case-insensitive, checked before any rule), print the
//!    farewell and stop; on end of input, stop
//! 4. Otherwise print `<name>: <reply>` and go back to 2
//!
//! ## Examples
//!
//! ```bash
//! chatrs chat
//! chatrs chat --name Rusty --seed 42
//! ```
//!
use super::{GlobalOpts, Runtime};
use crate::core::config::BotConfig;
use crate::core::error::Result;
use crate::engine::Responder;
use anyhow::Context;
use clap::Parser;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Arguments for `chatrs chat`.
#[derive(Parser, Debug, Default)]
pub struct ChatArgs {
    /// Name shown in front of each reply (overrides `bot.name`).
    #[arg(long)]
    pub name: Option<String>,
}

/// Handles `chatrs chat` on the process's stdin/stdout.
pub fn handle_chat(args: ChatArgs, opts: &GlobalOpts) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);
    let runtime = Runtime::load(opts)?;

    let mut bot = runtime.config.bot.clone();
    if let Some(name) = args.name {
        bot.name = name;
    }

    let mut rng = runtime.rng();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let turns = run_session(
        &runtime.responder,
        &bot,
        stdin.lock(),
        stdout.lock(),
        &mut rng,
    )?;
    debug!("Chat session ended after {} turn(s).", turns);
    Ok(())
}

/// Runs one conversation over `input`/`output`. Returns the number of
/// replies produced by the responder.
pub fn run_session<I, O, R>(
    responder: &Responder,
    bot: &BotConfig,
    mut input: I,
    mut output: O,
    rng: &mut R,
) -> Result<usize>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    writeln!(output, "{}", bot.greeting).context("Failed to write to console")?;
    writeln!(output, "{}", "-".repeat(50)).context("Failed to write to console")?;

    let mut turns = 0;
    let mut line = String::new();
    loop {
        write!(output, "You: ").context("Failed to write to console")?;
        output.flush().context("Failed to flush console output")?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read from console")?;
        if read == 0 {
            // End of input: finish the prompt line and stop.
            writeln!(output).context("Failed to write to console")?;
            break;
        }

        let text = line.trim();
        if is_exit_word(bot, text) {
            writeln!(output, "{}: {}", bot.name, bot.farewell)
                .context("Failed to write to console")?;
            break;
        }

        let reply = responder.respond_with(text, rng);
        writeln!(output, "{}: {}", bot.name, reply).context("Failed to write to console")?;
        turns += 1;
    }
    Ok(turns)
}

fn is_exit_word(bot: &BotConfig, text: &str) -> bool {
    bot.exit_words
        .iter()
        .any(|word| word.trim().eq_ignore_ascii_case(text))
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn run(script: &str, bot: &BotConfig) -> (usize, String) {
        let responder = Responder::with_defaults().unwrap();
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);
        let turns = run_session(&responder, bot, Cursor::new(script), &mut out, &mut rng).unwrap();
        (turns, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_session_replies_then_exits() {
        let (turns, out) = run("my name is Ada\nEXIT\nhello\n", &BotConfig::default());
        assert_eq!(turns, 1);
        assert!(out.starts_with("Hello, I am your chatbot!"));
        assert!(out.contains("Chatbot: Hello Ada! How can I assist you today?"));
        assert!(out.contains("Chatbot: Goodbye! Have a nice day!"));
        // Nothing after the exit word is answered.
        assert!(!out.contains("How can I help you today?"));
    }

    #[test]
    fn test_session_stops_at_end_of_input() {
        let (turns, out) = run("tell me a joke\n", &BotConfig::default());
        assert_eq!(turns, 1);
        assert!(out.contains("Chatbot: Why don't skeletons fight each other?"));
        assert!(!out.contains("Goodbye"));
    }

    #[test]
    fn test_custom_name_and_exit_words() {
        let bot = BotConfig {
            name: "Rusty".into(),
            exit_words: vec!["quit".into()],
            farewell: "Bye!".into(),
            ..Default::default()
        };
        let (turns, out) = run("exit\nquit\n", &bot);
        // "exit" is no longer an exit word, so the rule table answers it.
        assert_eq!(turns, 1);
        assert!(out.contains("Rusty: Goodbye! Have a great day!") || out.contains("Rusty: See you later!"));
        assert!(out.trim_end().ends_with("Rusty: Bye!"));
    }

    #[test]
    fn test_blank_line_gets_fallback() {
        let (turns, out) = run("\n", &BotConfig::default());
        assert_eq!(turns, 1);
        assert!(
            out.contains("Chatbot: I'm sorry, I didn't understand that. Could you rephrase?")
                || out.contains("Chatbot: Could you please elaborate?")
        );
    }
}

//! # ChatRS Demo Command
//!
//! File: cli/src/commands/demo.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `chatrs demo` plays a fixed list of inputs through the responder and
//! prints each exchange. It is a quick way to see what the active rule table
//! does without typing. Custom inputs can be given as arguments to replace
//! the built-in script.
//!
//! ```bash
//! chatrs demo
//! chatrs demo "hello" "my name is Ada"
//! chatrs --rules ./my_rules.toml demo
//! ```
//!
use super::{GlobalOpts, Runtime};
use crate::core::error::Result;
use crate::engine::Responder;
use anyhow::Context;
use clap::Parser;
use rand::Rng;
use std::io::{self, Write};
use tracing::info;

/// Inputs played when no custom script is given.
pub const DEMO_INPUTS: [&str; 9] = [
    "hello",
    "my name is John",
    "what's your name?",
    "how are you?",
    "tell me a joke",
    "can you help me with coding?",
    "what can you do?",
    "thanks",
    "some random input that doesn't match patterns",
];

/// Arguments for `chatrs demo`.
#[derive(Parser, Debug, Default)]
pub struct DemoArgs {
    /// Inputs to play instead of the built-in script.
    pub inputs: Vec<String>,
}

pub fn handle_demo(args: DemoArgs, opts: &GlobalOpts) -> Result<()> {
    info!("Handling demo command with args: {:?}", args);
    let runtime = Runtime::load(opts)?;
    let inputs: Vec<&str> = if args.inputs.is_empty() {
        DEMO_INPUTS.to_vec()
    } else {
        args.inputs.iter().map(String::as_str).collect()
    };

    let mut rng = runtime.rng();
    let stdout = io::stdout();
    run_demo(&runtime.responder, &inputs, stdout.lock(), &mut rng)
}

/// Writes the banner, one `You:` / `Chatbot:` exchange per input, and a
/// closing line.
pub fn run_demo<O, R>(responder: &Responder, inputs: &[&str], mut output: O, rng: &mut R) -> Result<()>
where
    O: Write,
    R: Rng + ?Sized,
{
    write_demo(responder, inputs, &mut output, rng).context("Failed to write demo output")
}

fn write_demo<O, R>(responder: &Responder, inputs: &[&str], output: &mut O, rng: &mut R) -> io::Result<()>
where
    O: Write,
    R: Rng + ?Sized,
{
    writeln!(output, "Rule-Based Chatbot Demo")?;
    writeln!(output, "{}", "=".repeat(50))?;
    for input in inputs {
        let reply = responder.respond_with(input, rng);
        writeln!(output, "You: {}", input)?;
        writeln!(output, "Chatbot: {}", reply)?;
        writeln!(output, "{}", "-".repeat(30))?;
    }
    writeln!(
        output,
        "\nDemo completed! {} input(s) matched against {} rules.",
        inputs.len(),
        responder.rules().len()
    )
}

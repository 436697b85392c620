//! # ChatRS Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! `chatrs ask <TEXT>...` prints a single reply and exits. The words are
//! joined with single spaces, so quoting is optional:
//!
//! ```bash
//! chatrs ask my name is Ada
//! chatrs --seed 1 ask "thanks"
//! ```
//!
use super::{GlobalOpts, Runtime};
use crate::core::error::Result;
use clap::Parser;
use tracing::info;

/// Arguments for `chatrs ask`.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The text to answer.
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub text: Vec<String>,
}

pub fn handle_ask(args: AskArgs, opts: &GlobalOpts) -> Result<()> {
    info!("Handling ask command with args: {:?}", args);
    let runtime = Runtime::load(opts)?;
    let mut rng = runtime.rng();
    let input = args.text.join(" ");
    println!("{}", runtime.responder.respond_with(&input, &mut rng));
    Ok(())
}

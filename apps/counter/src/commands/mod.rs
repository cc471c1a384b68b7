//! # Counter Commands
//!
//! Turns one typed line into a command and runs it against the desk.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (parsing, dispatch)
//! ├── order.rs    ◄─── order line / done [customer]
//! └── help.rs     ◄─── help text and product list
//! ```
//!
//! ## Recognized Input
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  help                      ──► print commands and products              │
//! │  close                     ──► leave the session                        │
//! │  done [customer]           ──► print receipt, record loyalty drinks     │
//! │  <product> [with a, b]     ──► add to the current order                 │
//! │  (blank)                   ──► ignored                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod help;
pub mod order;

use std::io::Write;

use tracing::debug;

use crate::error::AppResult;
use crate::state::SharedDesk;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Close,
    Done { customer: Option<String> },
    Order(String),
    Blank,
}

impl Command {
    /// Parses a raw input line; matching ignores case and surrounding space.
    pub fn parse(line: &str) -> Self {
        let line = line.trim().to_lowercase();

        match line.as_str() {
            "" => return Command::Blank,
            "help" => return Command::Help,
            "close" => return Command::Close,
            _ => {}
        }

        if let Some(rest) = line.strip_prefix("done") {
            // "done" must stand alone: "donut" is an order line
            if rest.is_empty() || rest.starts_with(|c: char| !c.is_alphanumeric()) {
                let customer = rest
                    .trim_start_matches(|c: char| !c.is_alphanumeric())
                    .trim();
                return Command::Done {
                    customer: (!customer.is_empty()).then(|| customer.to_string()),
                };
            }
        }

        Command::Order(line)
    }
}

/// Whether the session continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs one command and writes its output.
pub fn execute<W: Write>(command: Command, desk: &SharedDesk, out: &mut W) -> AppResult<Flow> {
    debug!(?command, "executing command");

    match command {
        Command::Blank => {}
        Command::Help => desk.with_desk(|desk| help::write_help(out, desk.products()))?,
        Command::Close => {
            writeln!(out, "Bye ;-)")?;
            return Ok(Flow::Quit);
        }
        Command::Done { customer } => order::finish_order(desk, customer.as_deref(), out)?,
        Command::Order(text) => order::take_order(desk, &text, out)?,
    }

    Ok(Flow::Continue)
}

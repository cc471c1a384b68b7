//! # Coffee Counter
//!
//! The interactive till: reads commands from a terminal, hands them to the
//! `CashDesk` and prints replies and receipts.
//!
//! ## Module Organization
//! ```text
//! coffee_counter_lib/
//! ├── lib.rs          ◄─── You are here (startup & session loop)
//! ├── config.rs       ◄─── Environment configuration, catalog loading
//! ├── error.rs        ◄─── AppError
//! ├── state/
//! │   ├── mod.rs      ◄─── State exports
//! │   └── desk.rs     ◄─── SharedDesk (Arc<Mutex<CashDesk>>)
//! └── commands/
//!     ├── mod.rs      ◄─── Command parsing & dispatch
//!     ├── order.rs    ◄─── order line / done
//!     └── help.rs     ◄─── help text
//! ```
//!
//! ## Startup Sequence
//! 1. Load configuration from the environment
//! 2. Initialize tracing (stderr, so receipts on stdout stay clean)
//! 3. Load the catalog and build the desk
//! 4. Run the session until `close` or end of input

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use std::io::{self, BufRead, Write};

use coffee_core::CashDesk;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::{Command, Flow};
use config::CounterConfig;
use error::AppResult;
use state::SharedDesk;

/// Prompt printed before every input line.
pub const PROMPT: &str = "coffeeshop> ";

/// Runs the counter on stdin/stdout.
pub fn run() -> AppResult<()> {
    let config = CounterConfig::from_env();
    init_tracing(&config.log_filter);

    let catalog = config.load_catalog()?;
    info!(
        shop = %config.shop_name,
        products = catalog.len(),
        custom_catalog = config.catalog_path.is_some(),
        "catalog loaded"
    );

    let desk = SharedDesk::new(CashDesk::new(catalog));
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&config, &desk, stdin.lock(), stdout.lock())
}

/// Runs one counter session over any line source and sink.
pub fn run_session<R, W>(
    config: &CounterConfig,
    desk: &SharedDesk,
    mut input: R,
    mut output: W,
) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to {}", config.shop_name)?;
    writeln!(output, "Type 'help' to get help")?;

    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            info!("input closed");
            break;
        }

        if commands::execute(Command::parse(&line), desk, &mut output)? == Flow::Quit {
            info!("counter closed");
            break;
        }
    }

    output.flush()?;
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `COFFEE_LOG=debug` - every parsed command and order line
/// - `COFFEE_LOG=coffee_core=info` - closed orders and totals
/// - Default: warnings only
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

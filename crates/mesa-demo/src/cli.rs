#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually (no external dependencies) to keep the binary
//! lean. Supports environment variable overrides via the `MESA_*` prefix.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
mesa-demo — restaurant floor manager

USAGE:
    mesa-demo [OPTIONS]

OPTIONS:
    --no-alt-screen      Draw on the main screen instead of the alternate one
    --no-seed            Start with an empty floor (default seeds five tables)
    --help, -h           Show this help message
    --version, -V        Show version

COMMANDS (typed at the prompt):
    add <cap>            Create a table with <cap> seats
    rm <id>              Remove a table
    seat <id> <name>     Seat a party at a table
    free <id>            Free a table
    details <id>         Show one table's record in the status line
    clear                Remove every table and reset ids
    chain                Toggle chain mode (successor arrows on the map)
    disc <d>             Switch order discipline: list|stack|queue|linked
    order <item> <qty> <price>   Add a kitchen order (price like 4.50)
    pop                  Remove one order (end depends on discipline)
    help                 Show the command list in the status line
    quit                 Exit (also Esc or Ctrl+C)

ENVIRONMENT VARIABLES:
    MESA_NO_SEED         Same as --no-seed when set to any value
    MESA_LOG             Write a tracing log to this file (filtered by RUST_LOG)";

/// Parsed command-line options.
pub struct Opts {
    /// Whether to use the alternate screen.
    pub alt_screen: bool,
    /// Whether to seed the floor with the five demo tables.
    pub seed: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            alt_screen: true,
            seed: true,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables apply first and are overridden by explicit
    /// command-line flags.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        if env::var("MESA_NO_SEED").is_ok() {
            opts.seed = false;
        }

        for arg in env::args().skip(1) {
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("mesa-demo {VERSION}");
                    process::exit(0);
                }
                "--no-alt-screen" => {
                    opts.alt_screen = false;
                }
                "--no-seed" => {
                    opts.seed = false;
                }
                other => {
                    eprintln!("Unknown argument: {other}");
                    eprintln!("Run with --help for usage information.");
                    process::exit(1);
                }
            }
        }

        opts
    }
}

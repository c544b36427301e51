#![forbid(unsafe_code)]

//! mesa-demo binary entry point.

use mesa_demo::{app, cli, logging};

fn main() {
    let opts = cli::Opts::parse();

    if let Err(e) = logging::init() {
        eprintln!("Failed to set up logging: {e}");
        std::process::exit(1);
    }

    if let Err(e) = app::run(&opts) {
        eprintln!("Runtime error: {e}");
        std::process::exit(1);
    }
}

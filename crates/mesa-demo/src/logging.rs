#![forbid(unsafe_code)]

//! File-backed tracing setup.
//!
//! The demo owns the terminal, so log output must never reach the screen.
//! When `MESA_LOG` names a file, a `tracing-subscriber` writer is attached
//! to it (append mode); otherwise logging stays uninitialized and all
//! tracing macros are no-ops. Filtering follows `RUST_LOG`, defaulting to
//! `debug`.

use std::env;
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Initialize file logging if `MESA_LOG` is set.
pub fn init() -> io::Result<()> {
    let Ok(path) = env::var("MESA_LOG") else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    tracing::info!(log = %path, "mesa-demo logging initialized");
    Ok(())
}

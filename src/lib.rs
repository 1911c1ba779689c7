//! Klip library crate
//!
//! This crate provides the core functionality for the `klip` CLI. It is
//! organized into small modules: `copy` (the copy operation and backend
//! selection), `system` (primary mechanism, the OS clipboard via `arboard`),
//! and `command` (fallback mechanism, external clipboard tools). The binary
//! `src/main.rs` calls `klip_lib::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//! - `copy::copy(text)` — copy `text` to the system clipboard, returning
//!   `true` on success.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod command;
pub mod copy;
pub mod system;

use std::io::Read;

use clap::Parser;

use crate::copy::copy_with;

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text to copy. When omitted, the text is read from standard input.
    text: Option<String>,

    /// Backend: auto, system, command
    #[arg(long = "backend", default_value = "auto")]
    backend: String,
}

/// Run the Klip CLI.
///
/// This function is the high-level entrypoint used by the `klip` binary. It
/// parses CLI arguments, obtains the text to copy (positional argument, or
/// standard input read verbatim when the argument is omitted) and dispatches
/// to `copy::copy_with`.
///
/// Exit status mirrors the copy outcome so shell callers can branch on it:
/// 0 when the text reached the clipboard, 1 when no mechanism succeeded,
/// 2 on usage errors (unknown backend, unreadable stdin).
///
/// Diagnostics go through the `log` facade; enable them with `RUST_LOG`,
/// for example:
///
/// ```sh
/// RUST_LOG=error klip "some text"
/// ```
pub fn run() {
    env_logger::init();
    let cli = Cli::parse();

    let text = match cli.text {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                eprintln!("error: failed to read stdin: {}", e);
                std::process::exit(2);
            }
            buf
        }
    };

    let copied = copy_with(&text, &cli.backend).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(2);
    });

    if !copied {
        eprintln!("error: could not copy to clipboard");
        std::process::exit(1);
    }
}

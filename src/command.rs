//! Fallback copy mechanism: external clipboard commands.
//!
//! When the system clipboard is unavailable or fails, the text is piped into
//! a well-known clipboard tool instead. Candidates are tried in order and the
//! first one that spawns and exits successfully wins. The spawned child is
//! reaped before returning on every path, so no process outlives the call.

use std::env;
use std::io::Write;
use std::process::{Command, Stdio};

/// Ordered candidate commands for the current platform.
///
/// Linux: `wl-copy` (only when a Wayland session is advertised), then
/// `xclip`, then `xsel`. macOS: `pbcopy`. Windows: `clip`.
fn candidates() -> Vec<(&'static str, &'static [&'static str])> {
    if cfg!(target_os = "macos") {
        vec![("pbcopy", &[][..])]
    } else if cfg!(target_os = "windows") {
        vec![("clip", &[][..])]
    } else {
        let mut list: Vec<(&'static str, &'static [&'static str])> = Vec::new();
        if env::var_os("WAYLAND_DISPLAY").is_some() {
            list.push(("wl-copy", &[][..]));
        }
        list.push(("xclip", &["-selection", "clipboard"][..]));
        list.push(("xsel", &["--clipboard", "--input"][..]));
        list
    }
}

/// Copy `s` by piping it into the first working clipboard command.
///
/// Returns `Ok(())` as soon as one candidate succeeds, or `Err(String)`
/// describing the last failure when none does (including the case where none
/// of the tools is installed at all).
pub fn copy_to_clipboard(s: &str) -> Result<(), String> {
    let mut last_err = String::from("no clipboard command available");
    for (program, args) in candidates() {
        match run(program, args, s) {
            Ok(()) => return Ok(()),
            Err(e) => last_err = e,
        }
    }
    Err(last_err)
}

/// Run one candidate: spawn it with a piped stdin, write `text`, close the
/// pipe, wait for exit. The child is waited on even when the write fails, so
/// an attempt can never leak a process.
fn run(program: &str, args: &[&str], text: &str) -> Result<(), String> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| format!("failed to spawn {}: {}", program, e))?;

    // Dropping the handle closes the pipe; the tool sees EOF and can exit.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    let status = child
        .wait()
        .map_err(|e| format!("failed to wait on {}: {}", program, e))?;

    if !status.success() {
        return Err(format!("{} exited with status {}", program, status));
    }
    written.map_err(|e| format!("failed to write to {}: {}", program, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn run_reports_success() {
        assert!(run("sh", &["-c", "cat >/dev/null"], "hello").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn run_accepts_empty_input() {
        assert!(run("sh", &["-c", "cat >/dev/null"], "").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn run_reports_nonzero_exit() {
        let err = run("sh", &["-c", "exit 3"], "hello").unwrap_err();
        assert!(err.contains("exited with status"));
    }

    #[test]
    fn run_reports_missing_program() {
        let err = run("klip-no-such-tool", &[], "hello").unwrap_err();
        assert!(err.contains("failed to spawn"));
    }

    #[test]
    fn xclip_precedes_xsel_on_linux() {
        if !cfg!(target_os = "linux") {
            return;
        }
        let names: Vec<&str> = candidates().iter().map(|(p, _)| *p).collect();
        let xclip = names.iter().position(|p| *p == "xclip").unwrap();
        let xsel = names.iter().position(|p| *p == "xsel").unwrap();
        assert!(xclip < xsel);
    }
}

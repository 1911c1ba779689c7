//! The copy operation and backend selection.
//!
//! `copy` implements an ordered fallback over two mechanisms: the system
//! clipboard (`crate::system`) is tried first when the capability probe
//! reports a usable session; when it is absent or fails, the
//! external-command fallback (`crate::command`) runs instead. Every failure
//! mode collapses to a `false` return plus a `log::error!` entry — no error
//! crosses this module's boundary as a panic or `Err`.

use crate::{command, system};

/// Copy `text` to the system clipboard using the best available mechanism.
///
/// Returns `true` if either mechanism placed the text on the clipboard and
/// `false` if both failed. On failure the clipboard content is unspecified
/// (the fallback tool may have partially run).
///
/// The system clipboard is attempted only when `system::is_available`
/// reports a usable session. A failed attempt is logged and triggers the
/// fallback rather than aborting the operation; a successful one returns
/// immediately and the fallback is not consulted.
pub fn copy(text: &str) -> bool {
    if system::is_available() {
        match system::copy_to_clipboard(text) {
            Ok(()) => return true,
            Err(e) => log::error!("copy failed using system clipboard: {}", e),
        }
    }

    match command::copy_to_clipboard(text) {
        Ok(()) => true,
        Err(e) => {
            log::error!("copy failed using fallback command: {}", e);
            false
        }
    }
}

/// Copy `text` using a named backend.
///
/// Backends:
/// - `auto` — system clipboard first, fallback command second (see [`copy`]).
/// - `system` — system clipboard only, no fallback on failure.
/// - `command` — external clipboard command only.
///
/// Returns `Ok` with the copy outcome, or `Err(String)` for an unknown
/// backend name. Mechanism failures are logged and reported as `Ok(false)`,
/// never as `Err`.
pub fn copy_with(text: &str, backend: &str) -> Result<bool, String> {
    match backend {
        "auto" => Ok(copy(text)),
        "system" => Ok(match system::copy_to_clipboard(text) {
            Ok(()) => true,
            Err(e) => {
                log::error!("copy failed using system clipboard: {}", e);
                false
            }
        }),
        "command" => Ok(match command::copy_to_clipboard(text) {
            Ok(()) => true,
            Err(e) => {
                log::error!("copy failed using fallback command: {}", e);
                false
            }
        }),
        _ => Err(format!("unknown backend: {}", backend)),
    }
}

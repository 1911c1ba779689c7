//! Primary copy mechanism: the OS clipboard via `arboard`.

use std::env;

/// Probe for the primary clipboard mechanism.
///
/// On Linux the OS clipboard only exists inside a display session, so the
/// probe checks for a Wayland or X11 display advertised in the environment.
/// On other platforms the clipboard is always reachable and the probe
/// passes unconditionally.
pub fn is_available() -> bool {
    if cfg!(target_os = "linux") {
        env::var_os("WAYLAND_DISPLAY").is_some() || env::var_os("DISPLAY").is_some()
    } else {
        true
    }
}

/// Copy `s` to the system clipboard.
///
/// This is a thin wrapper around the `arboard` crate. On some platforms or in
/// headless CI environments clipboard initialization may fail — callers should
/// treat errors as non-fatal (the copy operation falls back to an external
/// command on failure).
///
/// Returns `Ok(())` on success or `Err(String)` describing the failure.
pub fn copy_to_clipboard(s: &str) -> Result<(), String> {
    let mut ctx = arboard::Clipboard::new().map_err(|e| format!("clipboard init: {}", e))?;
    ctx.set_text(s.to_owned())
        .map_err(|e| format!("clipboard set: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_answers_without_panicking() {
        // The answer depends on the environment; only the call itself is
        // under test here.
        let _ = is_available();
    }

    #[test]
    fn clipboard_copy_no_panic() {
        // Best-effort test: on CI this might fail depending on platform; we just ensure function doesn't panic.
        let _ = copy_to_clipboard("test");
    }
}

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::warn;

/// Write text to the platform clipboard via pbcopy / xclip. Returns false when
/// no clipboard tool is available or the write fails.
pub fn copy_to_clipboard(text: &str) -> bool {
    #[cfg(target_os = "macos")]
    let result = Command::new("pbcopy")
        .stdin(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            if let Some(stdin) = child.stdin.as_mut() {
                stdin.write_all(text.as_bytes())?;
            }
            child.wait()
        });
    #[cfg(target_os = "linux")]
    let result = Command::new("xclip")
        .args(["-selection", "clipboard"])
        .stdin(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            if let Some(stdin) = child.stdin.as_mut() {
                stdin.write_all(text.as_bytes())?;
            }
            child.wait()
        });
    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    let result: Result<std::process::ExitStatus, std::io::Error> =
        Err(std::io::Error::other("no clipboard tool for this platform"));

    match result {
        Ok(status) if status.success() => true,
        Ok(_) => false,
        Err(e) => {
            warn!(error = %e, "clipboard write failed");
            false
        }
    }
}

//! Open links in the user's browser via the platform opener.

use anyhow::{Context, Result, bail};
use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// Program and arguments that open `url` on this platform.
#[must_use]
pub fn opener_command(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open", vec![url.to_string()])
    } else if cfg!(windows) {
        (
            "cmd",
            vec![
                "/C".to_string(),
                "start".to_string(),
                String::new(),
                url.to_string(),
            ],
        )
    } else {
        ("xdg-open", vec![url.to_string()])
    }
}

/// Open `url` outside the application.
///
/// # Errors
///
/// Returns an error if the URL is not http(s) or the opener cannot be spawned.
pub fn open_external(url: &str) -> Result<()> {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        bail!("Refusing to open non-web URL: {url}");
    }

    let (program, args) = opener_command(url);
    debug!(program, url, "Opening link externally");

    spawn_reaped(Command::new(program).args(&args))
        .inspect_err(|e| warn!(error = %e, program, "Failed to launch opener"))
        .with_context(|| format!("Failed to run {program}"))?;
    Ok(())
}

/// Spawn `command` with null stdio and wait for it on a background thread.
///
/// The opener may print to the terminal, which would corrupt the TUI. The
/// returned handle yields the exit status once the child has been reaped.
fn spawn_reaped(command: &mut Command) -> io::Result<JoinHandle<Option<ExitStatus>>> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(thread::spawn(move || {
        child
            .wait()
            .inspect(|status| debug!(%status, "Opener exited"))
            .inspect_err(|e| warn!(error = %e, "Failed to wait for opener"))
            .ok()
    }))
}

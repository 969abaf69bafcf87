//! Link opener backed by the platform launcher

use bridge_traits::{
    error::{BridgeError, Result},
    link::LinkOpener,
};
use std::io;
use std::process::{Child, Command, Stdio};
use std::thread;
use tracing::{debug, info, warn};

/// Opens URLs with `xdg-open` (Linux/BSD), `open` (macOS) or the
/// `url.dll` protocol handler (Windows).
#[derive(Debug, Clone, Default)]
pub struct SystemLinkOpener;

impl SystemLinkOpener {
    pub fn new() -> Self {
        Self
    }

    /// Program and arguments that hand `url` to the launcher of `os`.
    ///
    /// No launcher goes through a shell, so `&` and friends in a query
    /// string stay part of the URL.
    fn launcher(os: &str, url: &str) -> (&'static str, Vec<String>) {
        match os {
            "windows" => (
                "rundll32",
                vec!["url.dll,FileProtocolHandler".into(), url.into()],
            ),
            "macos" => ("open", vec![url.into()]),
            _ => ("xdg-open", vec![url.into()]),
        }
    }
}

/// Wait on `child` from a detached thread so the launcher does not linger
/// as a zombie until the app exits.
fn reap(mut child: Child) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("galeria-link-reaper".into())
        .spawn(move || match child.wait() {
            Ok(status) => debug!(%status, "Link launcher exited"),
            Err(e) => warn!(error = %e, "Failed to wait on link launcher"),
        })
}

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> Result<()> {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(BridgeError::OperationFailed(format!(
                "Refusing to open non-web URL: {}",
                url
            )));
        }

        let (program, args) = Self::launcher(std::env::consts::OS, url);
        let child = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                warn!(program, error = %e, "Failed to launch link opener");
                BridgeError::NotAvailable(format!("{} could not be started: {}", program, e))
            })?;

        if let Err(e) = reap(child) {
            warn!(program, error = %e, "Could not spawn launcher reaper");
        }

        info!(url, program, "Handed link to system launcher");
        Ok(())
    }
}

//! Hand-off of mailto:, tel: and web targets to the OS default handler.

use crate::error::{LaunchError, LaunchResult};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Schemes the launcher will pass to the OS.
pub const ALLOWED_SCHEMES: [&str; 4] = ["mailto:", "tel:", "http://", "https://"];

/// Opens a URI with the operator's default application.
pub trait Launcher {
    fn launch(&self, uri: &str) -> LaunchResult<()>;
}

/// Reject anything outside [`ALLOWED_SCHEMES`].
pub fn check_uri(uri: &str) -> LaunchResult<()> {
    let lowered = uri.to_ascii_lowercase();
    if ALLOWED_SCHEMES.iter().any(|scheme| lowered.starts_with(scheme)) {
        Ok(())
    } else {
        Err(LaunchError::InvalidUri(uri.to_string()))
    }
}

/// Platform opener program and the arguments placed before the URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opener {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl Opener {
    /// Full argument vector for opening `uri`. The URI is always the last
    /// argument and is passed through unmodified.
    pub fn command_args<'a>(&self, uri: &'a str) -> Vec<&'a str> {
        let mut args: Vec<&'a str> = self.args.to_vec();
        args.push(uri);
        args
    }
}

const MACOS_OPENERS: &[Opener] = &[Opener {
    program: "open",
    args: &[],
}];

// Goes straight to the shell URL handler; no `cmd` means `&` in a query
// string stays part of the URI
const WINDOWS_OPENERS: &[Opener] = &[Opener {
    program: "rundll32",
    args: &["url.dll,FileProtocolHandler"],
}];

const UNIX_OPENERS: &[Opener] = &[
    Opener {
        program: "xdg-open",
        args: &[],
    },
    Opener {
        program: "gio",
        args: &["open"],
    },
];

/// Opener candidates for the current platform, in preference order.
pub fn platform_openers() -> &'static [Opener] {
    if cfg!(target_os = "macos") {
        MACOS_OPENERS
    } else if cfg!(target_os = "windows") {
        WINDOWS_OPENERS
    } else {
        UNIX_OPENERS
    }
}

/// Launcher backed by the platform's opener program.
///
/// The opener is spawned and not waited on; its output is discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl Launcher for SystemLauncher {
    fn launch(&self, uri: &str) -> LaunchResult<()> {
        check_uri(uri)?;

        let openers = platform_openers();
        let (opener, path) = openers
            .iter()
            .find_map(|opener| which::which(opener.program).ok().map(|path| (opener, path)))
            .ok_or_else(|| {
                let tried: Vec<&str> = openers.iter().map(|o| o.program).collect();
                LaunchError::NoOpener(tried.join(", "))
            })?;

        debug!(program = %path.display(), uri, "Spawning opener");

        Command::new(&path)
            .args(opener.command_args(uri))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: opener.program.to_string(),
                source,
            })?;

        info!(uri, "Handed target to default handler");
        Ok(())
    }
}

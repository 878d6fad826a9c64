use dispatch::error::{LaunchError, LaunchResult};
use dispatch::launcher::{check_uri, Launcher};
use std::sync::Mutex;

/// Launcher that records targets instead of spawning anything.
///
/// With `failing()` every launch is recorded and then reported as a missing
/// opener, to exercise the fallback path.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingLauncher {
    launched: Mutex<Vec<String>>,
    fail: bool,
}

#[allow(dead_code)]
impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            launched: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Targets passed to `launch`, in call order.
    pub fn launched(&self) -> Vec<String> {
        self.launched.lock().unwrap().clone()
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&self, uri: &str) -> LaunchResult<()> {
        check_uri(uri)?;
        self.launched.lock().unwrap().push(uri.to_string());
        if self.fail {
            return Err(LaunchError::NoOpener("xdg-open".to_string()));
        }
        Ok(())
    }
}

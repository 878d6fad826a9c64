//! Test doubles shared by the integration tests.

pub mod recording_launcher;
pub mod scripted_console;
pub mod static_renderer;

#[allow(unused_imports)]
pub use recording_launcher::RecordingLauncher;
#[allow(unused_imports)]
pub use scripted_console::ScriptedConsole;
#[allow(unused_imports)]
pub use static_renderer::{FailingRenderer, StaticRenderer};

//! Process runtime and operator-interrupt handling for the binary.
//!
//! Downloads run on tokio's blocking pool and cannot be cancelled once
//! started, so stopping the runtime must not wait for them. The runtime also
//! keeps one worker thread, which lets an interrupt watcher run while the
//! interactive session blocks the main thread.

use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

/// How long in-flight blocking work may run on after the session ends.
/// Whatever is still running after that is abandoned.
pub const SHUTDOWN_GRACE: Duration = Duration::from_millis(100);

/// Tokio runtime owned by `main`.
pub struct DispatchRuntime {
    runtime: Runtime,
}

impl DispatchRuntime {
    /// Build a runtime with a single worker thread and all drivers enabled.
    pub fn build() -> io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("dispatch-worker")
            .enable_all()
            .build()?;
        Ok(Self { runtime })
    }

    /// Run a future to completion on the runtime.
    pub fn block_on<F: Future>(&self, fut: F) -> F::Output {
        self.runtime.block_on(fut)
    }

    /// Stop the runtime without waiting on abandoned downloads.
    pub fn shutdown(self) {
        self.runtime.shutdown_timeout(SHUTDOWN_GRACE);
    }
}

/// Drive `work` unless `interrupt` completes first.
///
/// Returns `None` when interrupted. The work future is dropped at that
/// point; a download it started keeps its blocking thread until
/// [`DispatchRuntime::shutdown`] abandons it.
pub async fn until_interrupted<W, I>(work: W, interrupt: I) -> Option<W::Output>
where
    W: Future,
    I: Future,
{
    tokio::select! {
        output = work => Some(output),
        _ = interrupt => None,
    }
}

/// Spawn a task that ends the process on Ctrl-C.
///
/// Line prompts read the terminal in raw mode and report Ctrl-C themselves;
/// this covers the stretches between prompts. `farewell` runs before exit.
/// Must be called from within the runtime.
pub fn exit_on_interrupt<F>(farewell: F)
where
    F: FnOnce() + Send + 'static,
{
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("Interrupt received outside a prompt");
            farewell();
            std::process::exit(0);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_work_finishing_first_is_returned() {
        let output = until_interrupted(async { 42 }, std::future::pending::<()>()).await;
        assert_eq!(output, Some(42));
    }

    #[tokio::test]
    async fn test_interrupt_finishing_first_drops_work() {
        let output = until_interrupted(std::future::pending::<u8>(), async {}).await;
        assert_eq!(output, None);
    }

    #[test]
    fn test_runtime_runs_spawned_tasks_while_main_thread_blocks() {
        let runtime = DispatchRuntime::build().unwrap();
        let (tx, rx) = std::sync::mpsc::channel();

        runtime.block_on(async move {
            tokio::spawn(async move {
                tx.send(7).unwrap();
            });
        });

        // The worker thread delivers even though nothing awaits the task
        assert_eq!(rx.recv_timeout(Duration::from_secs(2)), Ok(7));
        runtime.shutdown();
    }
}

use crate::utils::error::{ReactiveError, Result};
use tokio::sync::oneshot;

/// Creates a one-shot completion signal.
///
/// The trigger is meant to be moved into [`Flux::do_on_complete`](crate::core::flux::Flux::do_on_complete)
/// while the latch stays with the code that waits for the stream to finish.
pub fn completion_signal() -> (CompletionTrigger, CompletionLatch) {
    let (tx, rx) = oneshot::channel();
    (CompletionTrigger { tx }, CompletionLatch { rx })
}

#[derive(Debug)]
pub struct CompletionTrigger {
    tx: oneshot::Sender<()>,
}

impl CompletionTrigger {
    pub fn fire(self) {
        if self.tx.send(()).is_err() {
            tracing::debug!("Completion fired after the waiting side went away");
        }
    }
}

#[derive(Debug)]
pub struct CompletionLatch {
    rx: oneshot::Receiver<()>,
}

impl CompletionLatch {
    /// Waits for the trigger without a timeout.
    pub async fn wait(self) -> Result<()> {
        self.rx.await.map_err(|_| ReactiveError::CompletionDropped)
    }

    /// Blocking variant of [`CompletionLatch::wait`]; panics inside an async context.
    pub fn wait_blocking(self) -> Result<()> {
        self.rx
            .blocking_recv()
            .map_err(|_| ReactiveError::CompletionDropped)
    }
}

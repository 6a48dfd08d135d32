//! Submission of the form entries to the remote endpoint

mod client;
mod error;
mod traits;

pub use client::{HttpSubmitter, DEFAULT_ENDPOINT};
pub use error::SubmitError;
pub use traits::EntrySubmitter;

#[cfg(test)]
pub use traits::MockEntrySubmitter;

use crate::state::Entry;
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};

/// A submission running on a background task
#[derive(Debug)]
pub struct PendingSubmission {
    outcome: oneshot::Receiver<Result<(), SubmitError>>,
}

impl PendingSubmission {
    /// Send `entries` on a spawned task. Must be called inside a tokio runtime.
    pub fn spawn(submitter: Arc<dyn EntrySubmitter>, entries: Vec<Entry>) -> Self {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = submitter.submit(&entries).await;
            // Receiver gone means the app quit; nobody is left to tell
            let _ = tx.send(result);
        });
        Self { outcome: rx }
    }

    /// Outcome if the request has settled, without waiting
    pub fn poll(&mut self) -> Option<Result<(), SubmitError>> {
        match self.outcome.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(SubmitError::Abandoned)),
        }
    }

    /// Wait until the request settles
    #[cfg(test)]
    pub async fn wait(self) -> Result<(), SubmitError> {
        self.outcome.await.unwrap_or(Err(SubmitError::Abandoned))
    }
}

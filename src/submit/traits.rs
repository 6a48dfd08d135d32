//! Trait abstraction for the submission endpoint to enable mocking in tests

use super::SubmitError;
use crate::state::Entry;
use async_trait::async_trait;

/// Delivers the form entries to the remote collaborator
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntrySubmitter: Send + Sync {
    /// Send every entry in one request. `Ok` means the endpoint accepted them.
    async fn submit(&self, entries: &[Entry]) -> Result<(), SubmitError>;
}

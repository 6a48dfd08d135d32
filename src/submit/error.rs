//! Submission error types

/// Why a submission did not succeed.
///
/// The user sees every variant as the same failure status; the detail is
/// only logged.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The request never produced a response
    #[error("HTTP error posting to {endpoint}: {source}")]
    Transport {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The endpoint answered with a non-2xx status
    #[error("{endpoint} returned {status}")]
    Rejected { endpoint: String, status: u16 },
    /// The background task went away without reporting an outcome
    #[error("submission task ended without an outcome")]
    Abandoned,
}

use thiserror::Error;

/// The error returned when a report could not be submitted.
///
/// Only transport-level failures surface here. Responses from the tracker,
/// whatever their status code, count as a completed attempt and are not
/// errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP POST to the scoutSubmit endpoint never completed, e.g. DNS
    /// failure or a refused connection.
    #[error("failed to submit scout report: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

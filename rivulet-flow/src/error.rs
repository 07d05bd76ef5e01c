//! Error type for the flow surface.

use thiserror::Error;

/// Errors surfaced by flow producers.
///
/// The engine itself never retries or recovers; the only runtime failure a
/// producer can observe is its consumer going away.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    /// The receiving end of the flow was dropped before the send completed.
    #[error("downstream consumer disconnected")]
    Disconnected,
}

//! Canonical windowed stages built on the streaming substrate.
//!
//! These are the stages every larger indicator composes from: sliding
//! extrema over an ordered multiset, a running window sum, and the simple
//! and linearly weighted moving averages. Construction never fails: a
//! zero period falls back to [`DEFAULT_PERIOD`].

pub mod extrema;
pub mod sum;
pub mod weighted;

pub use extrema::{MovingMax, MovingMin};
pub use sum::{MovingSum, Sma};
pub use weighted::Wma;

/// Period used when a stage is configured with an invalid (zero) period.
pub const DEFAULT_PERIOD: usize = 14;

/// Plain configuration shared by the windowed stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowParams {
    /// Number of most-recent samples in the window. Zero falls back to
    /// [`DEFAULT_PERIOD`].
    pub period: usize,
}

impl Default for WindowParams {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
        }
    }
}

impl WindowParams {
    pub(crate) fn sanitized_period(self) -> usize {
        if self.period == 0 {
            DEFAULT_PERIOD
        } else {
            self.period
        }
    }
}

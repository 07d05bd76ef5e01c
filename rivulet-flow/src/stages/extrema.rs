//! Sliding-window maximum and minimum.
//!
//! For every position `i ≥ period − 1` the stage emits the extremum of
//! the `period` most recent samples. The window contents are tracked in
//! an [`OrderStatistics`] multiset: the incoming sample is inserted, the
//! sample leaving the window (delivered by a `tee` + `shift(period)`
//! companion stream) is removed, and the extremum is read in O(log n).
//! Nothing leaves the window during warm-up, so removal is guarded by
//! position; the multiset's no-op `remove` backstops the zero fill values
//! the companion stream carries until then.

use std::fmt;

use rivulet_core::{OrderStatistics, Sample};
use tracing::trace;

use crate::flow::{channel, Flow, LOCKSTEP_CAPACITY};
use crate::stage::Stage;
use crate::stages::WindowParams;

#[derive(Debug, Clone, Copy)]
enum Extremum {
    Max,
    Min,
}

/// Moving maximum over the last `period` samples. Idle period:
/// `period − 1`.
#[derive(Debug, Clone, Copy)]
pub struct MovingMax {
    period: usize,
}

impl MovingMax {
    /// Builds the stage; an invalid period falls back to the default.
    pub fn new(params: WindowParams) -> Self {
        Self {
            period: params.sanitized_period(),
        }
    }

    /// Convenience constructor from a bare period.
    pub fn with_period(period: usize) -> Self {
        Self::new(WindowParams { period })
    }

    /// The effective (sanitized) period.
    pub fn period(&self) -> usize {
        self.period
    }

    /// Streams the running maximum of the input window.
    pub fn compute<T>(&self, input: Flow<T>) -> Flow<T>
    where
        T: Sample + Ord,
    {
        extremum(input, self.period, Extremum::Max)
    }
}

impl Stage for MovingMax {
    fn idle_period(&self) -> usize {
        self.period - 1
    }
}

impl fmt::Display for MovingMax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MMAX({})", self.period)
    }
}

/// Moving minimum over the last `period` samples. Idle period:
/// `period − 1`.
#[derive(Debug, Clone, Copy)]
pub struct MovingMin {
    period: usize,
}

impl MovingMin {
    /// Builds the stage; an invalid period falls back to the default.
    pub fn new(params: WindowParams) -> Self {
        Self {
            period: params.sanitized_period(),
        }
    }

    /// Convenience constructor from a bare period.
    pub fn with_period(period: usize) -> Self {
        Self::new(WindowParams { period })
    }

    /// The effective (sanitized) period.
    pub fn period(&self) -> usize {
        self.period
    }

    /// Streams the running minimum of the input window.
    pub fn compute<T>(&self, input: Flow<T>) -> Flow<T>
    where
        T: Sample + Ord,
    {
        extremum(input, self.period, Extremum::Min)
    }
}

impl Stage for MovingMin {
    fn idle_period(&self) -> usize {
        self.period - 1
    }
}

impl fmt::Display for MovingMin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MMIN({})", self.period)
    }
}

fn extremum<T>(input: Flow<T>, period: usize, kind: Extremum) -> Flow<T>
where
    T: Sample + Ord,
{
    let (tx, out) = channel(LOCKSTEP_CAPACITY);
    tokio::spawn(async move {
        trace!(period, ?kind, "extremum stage started");
        let (mut entering, leaving) = input.tee();
        // The leaving branch lags by `period`, so it needs that much slack
        // before the fill values are drained.
        let mut leaving = leaving.buffered(period).shift(period, T::zero());
        let mut window = OrderStatistics::new();
        let mut index = 0usize;
        loop {
            let (Some(value), Some(leaving_value)) =
                (entering.recv().await, leaving.recv().await)
            else {
                break;
            };
            window.insert(value);
            if index >= period {
                window.remove(leaving_value);
            }
            if index + 1 >= period {
                let extreme = match kind {
                    Extremum::Max => window.max(),
                    Extremum::Min => window.min(),
                };
                let Some(extreme) = extreme else { break };
                if tx.send(extreme).await.is_err() {
                    break;
                }
            }
            index += 1;
        }
    });
    out
}

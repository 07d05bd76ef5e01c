//! The idle-period contract and automatic branch alignment.
//!
//! Every stage withholds a configuration-determined number of leading
//! outputs while its window warms up. When branches with different idle
//! periods merge, the branch that starts emitting earlier must be trimmed
//! by the difference so sample `i` of every combinator input refers to the
//! same originating time index. [`Aligned`] carries the idle period next
//! to the flow and performs that trim automatically, which is where
//! hand-rolled compositions historically went off by one.

use crate::combine::{operate, operate3};
use crate::flow::Flow;

/// Contract every stage honors: the idle period is a pure function of the
/// stage's configuration, never of runtime data.
pub trait Stage {
    /// Number of leading input samples consumed before the first output
    /// is emitted.
    fn idle_period(&self) -> usize;
}

/// A flow tagged with the idle period of the stage that produced it.
#[derive(Debug)]
pub struct Aligned<T> {
    flow: Flow<T>,
    idle_period: usize,
}

impl<T: Send + 'static> Aligned<T> {
    /// Tags a flow with its producer's idle period.
    pub fn new(flow: Flow<T>, idle_period: usize) -> Self {
        Self { flow, idle_period }
    }

    /// Wraps a stage's output, reading the idle period off the stage.
    pub fn from_stage<S: Stage>(stage: &S, flow: Flow<T>) -> Self {
        Self::new(flow, stage.idle_period())
    }

    /// The idle period this flow carries.
    pub fn idle_period(&self) -> usize {
        self.idle_period
    }

    /// Unwraps the flow, leaving idle-period handling to the caller.
    pub fn into_flow(self) -> Flow<T> {
        self.flow
    }

    /// Combines two branches pointwise, first trimming the branch with the
    /// shorter idle period by the difference. The result carries the
    /// larger idle period.
    pub fn combine<F>(self, other: Aligned<T>, op: F) -> Aligned<T>
    where
        F: FnMut(T, T) -> T + Send + 'static,
    {
        let common = self.idle_period.max(other.idle_period);
        let a = self.flow.skip(common - self.idle_period);
        let b = other.flow.skip(common - other.idle_period);
        Aligned::new(operate(a, b, op), common)
    }

    /// Three-way pointwise combination with the same trimming rule; the
    /// result carries the largest of the three idle periods.
    pub fn combine3<F>(self, second: Aligned<T>, third: Aligned<T>, op: F) -> Aligned<T>
    where
        F: FnMut(T, T, T) -> T + Send + 'static,
    {
        let common = self
            .idle_period
            .max(second.idle_period)
            .max(third.idle_period);
        let a = self.flow.skip(common - self.idle_period);
        let b = second.flow.skip(common - second.idle_period);
        let c = third.flow.skip(common - third.idle_period);
        Aligned::new(operate3(a, b, c, op), common)
    }
}

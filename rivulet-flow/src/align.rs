//! Alignment primitives keeping parallel pipeline branches in step.
//!
//! All four are pure pass-through transformations with respect to element
//! identity and order: none reorders or drops interior samples. `skip` and
//! `head` truncate only at the boundary, `shift` prepends only at the
//! boundary, and `buffered` changes nothing but channel capacity.

use crate::flow::{channel, Flow, LOCKSTEP_CAPACITY};

impl<T: Send + 'static> Flow<T> {
    /// Discards the first `count` samples, then passes the rest through
    /// unchanged. Used to drop a stage's idle period or re-align branches
    /// whose idle periods differ.
    pub fn skip(mut self, count: usize) -> Flow<T> {
        let (tx, out) = channel(LOCKSTEP_CAPACITY);
        tokio::spawn(async move {
            for _ in 0..count {
                if self.recv().await.is_none() {
                    return;
                }
            }
            while let Some(value) = self.recv().await {
                if tx.send(value).await.is_err() {
                    return;
                }
            }
        });
        out
    }

    /// Prepends `count` copies of `fill` before the original sequence.
    /// Windowed stages use this to manufacture the companion stream of
    /// values leaving the window.
    pub fn shift(mut self, count: usize, fill: T) -> Flow<T>
    where
        T: Clone,
    {
        let (tx, out) = channel(LOCKSTEP_CAPACITY);
        tokio::spawn(async move {
            for _ in 0..count {
                if tx.send(fill.clone()).await.is_err() {
                    return;
                }
            }
            while let Some(value) = self.recv().await {
                if tx.send(value).await.is_err() {
                    return;
                }
            }
        });
        out
    }

    /// Inserts a `capacity`-sample buffer between producer and consumer so
    /// brief rate mismatches between fanned-out branches do not stall the
    /// producer.
    pub fn buffered(mut self, capacity: usize) -> Flow<T> {
        let (tx, out) = channel(capacity);
        tokio::spawn(async move {
            while let Some(value) = self.recv().await {
                if tx.send(value).await.is_err() {
                    return;
                }
            }
        });
        out
    }

    /// Consumes up to `count` leading samples and returns them as a batch
    /// together with the remainder of the flow. A flow shorter than
    /// `count` yields a shorter batch.
    pub async fn head(mut self, count: usize) -> (Vec<T>, Flow<T>) {
        let mut batch = Vec::with_capacity(count);
        for _ in 0..count {
            match self.recv().await {
                Some(value) => batch.push(value),
                None => break,
            }
        }
        (batch, self)
    }
}

//! The asynchronous value stream connecting stages.

use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::error::FlowError;

/// Default channel capacity: one in-flight sample, so producer and
/// consumer advance in lock-step.
pub const LOCKSTEP_CAPACITY: usize = 1;

/// Creates a connected sender/flow pair with the given channel capacity.
/// A zero capacity is treated as one.
pub fn channel<T>(capacity: usize) -> (FlowSender<T>, Flow<T>) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (FlowSender { tx }, Flow { rx })
}

/// Producer half of a flow.
#[derive(Debug, Clone)]
pub struct FlowSender<T> {
    tx: mpsc::Sender<T>,
}

impl<T> FlowSender<T> {
    /// Delivers one sample downstream, suspending until the channel has
    /// room. Fails only when the consuming [`Flow`] has been dropped.
    pub async fn send(&self, value: T) -> Result<(), FlowError> {
        self.tx.send(value).await.map_err(|_| FlowError::Disconnected)
    }
}

/// An ordered, single-pass stream of samples.
///
/// Exactly one producer feeds a flow and exactly one consumer reads it;
/// use [`Flow::duplicate`] to split it. Delivery is strictly FIFO and
/// lossless, and end-of-stream (the producer dropping its sender) is a
/// one-time, non-reversible event.
#[derive(Debug)]
pub struct Flow<T> {
    rx: mpsc::Receiver<T>,
}

impl<T: Send + 'static> Flow<T> {
    /// Spawns a producer task feeding the iterator's values into a new
    /// lock-step flow.
    pub fn from_iter<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T> + Send + 'static,
        I::IntoIter: Send,
    {
        let (tx, flow) = channel(LOCKSTEP_CAPACITY);
        tokio::spawn(async move {
            for value in values {
                if tx.send(value).await.is_err() {
                    break;
                }
            }
        });
        flow
    }

    /// Receives the next sample, or `None` once the flow is exhausted.
    pub async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await
    }

    /// Drains the flow to exhaustion, collecting every sample.
    pub async fn collect(mut self) -> Vec<T> {
        let mut values = Vec::new();
        while let Some(value) = self.recv().await {
            values.push(value);
        }
        values
    }

    /// Consumes the flow in the background, discarding every sample.
    ///
    /// Use this for fan-out branches you do not need: a branch that stays
    /// alive but unread stalls its siblings and the upstream producer.
    pub fn drain(mut self) {
        tokio::spawn(async move { while self.recv().await.is_some() {} });
    }

    /// Bridges the flow into a futures `Stream` via [`ReceiverStream`]
    /// for ecosystem interop.
    pub fn into_stream(self) -> ReceiverStream<T> {
        ReceiverStream::new(self.rx)
    }
}

#[cfg(test)]
mod tests {
    use super::{channel, Flow};
    use crate::error::FlowError;

    #[tokio::test]
    async fn delivers_in_fifo_order() {
        let flow = Flow::from_iter(vec![3, 1, 4, 1, 5]);
        assert_eq!(flow.collect().await, vec![3, 1, 4, 1, 5]);
    }

    #[tokio::test]
    async fn exhaustion_is_terminal() {
        let mut flow = Flow::from_iter(vec![1]);
        assert_eq!(flow.recv().await, Some(1));
        assert_eq!(flow.recv().await, None);
        assert_eq!(flow.recv().await, None);
    }

    #[tokio::test]
    async fn bridges_into_a_futures_stream() {
        use tokio_stream::StreamExt;

        let mut stream = Flow::from_iter(vec![1, 2]).into_stream();
        assert_eq!(stream.next().await, Some(1));
        assert_eq!(stream.next().await, Some(2));
        assert_eq!(stream.next().await, None);
    }

    #[tokio::test]
    async fn send_fails_after_consumer_drops() {
        let (tx, flow) = channel::<i64>(1);
        drop(flow);
        assert_eq!(tx.send(42).await, Err(FlowError::Disconnected));
    }
}

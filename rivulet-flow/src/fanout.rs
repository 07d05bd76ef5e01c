//! Lock-step fan-out of one flow into independent replicas.

use tracing::{debug, trace};

use crate::flow::{channel, Flow, FlowSender, LOCKSTEP_CAPACITY};

impl<T: Clone + Send + 'static> Flow<T> {
    /// Splits the flow into `branches` replicas that each replay the
    /// identical sample sequence.
    ///
    /// A single pump task delivers every sample to every branch before
    /// reading the next one upstream, so no branch runs more than one
    /// buffered sample ahead of its slowest sibling and backpressure
    /// reaches the original producer uniformly.
    ///
    /// A branch whose `Flow` is dropped detaches cleanly and the pump
    /// keeps serving the rest. A branch that is kept alive but never read
    /// stalls the pump, every sibling, and the upstream producer; drain
    /// unused branches explicitly with [`Flow::drain`].
    pub fn duplicate(mut self, branches: usize) -> Vec<Flow<T>> {
        if branches == 0 {
            self.drain();
            return Vec::new();
        }

        // Senders keep their original branch position so detach traces
        // stay meaningful after earlier branches drop out.
        let mut senders: Vec<(usize, FlowSender<T>)> = Vec::with_capacity(branches);
        let mut outputs = Vec::with_capacity(branches);
        for branch in 0..branches {
            let (tx, rx) = channel(LOCKSTEP_CAPACITY);
            senders.push((branch, tx));
            outputs.push(rx);
        }

        tokio::spawn(async move {
            debug!(branches, "fanout pump started");
            while let Some(value) = self.recv().await {
                let mut index = 0;
                while index < senders.len() {
                    if senders[index].1.send(value.clone()).await.is_err() {
                        let (branch, _) = senders.remove(index);
                        trace!(branch, "fanout branch detached");
                    } else {
                        index += 1;
                    }
                }
                if senders.is_empty() {
                    break;
                }
            }
            debug!("fanout pump finished");
        });

        outputs
    }

    /// Two-way split with the same lock-step delivery as
    /// [`Flow::duplicate`]. Windowed stages use this to pair each sample
    /// with the one leaving the window.
    pub fn tee(mut self) -> (Flow<T>, Flow<T>) {
        let (tx_a, out_a) = channel(LOCKSTEP_CAPACITY);
        let (tx_b, out_b) = channel(LOCKSTEP_CAPACITY);
        tokio::spawn(async move {
            let mut a_live = true;
            let mut b_live = true;
            while let Some(value) = self.recv().await {
                if a_live && tx_a.send(value.clone()).await.is_err() {
                    a_live = false;
                }
                if b_live && tx_b.send(value).await.is_err() {
                    b_live = false;
                }
                if !a_live && !b_live {
                    break;
                }
            }
        });
        (out_a, out_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replicas_replay_the_identical_sequence() {
        let mut branches = Flow::from_iter(vec![2, 7, 1, 8]).duplicate(3);
        let c = branches.pop().unwrap();
        let b = branches.pop().unwrap();
        let a = branches.pop().unwrap();
        let (a, b, c) = tokio::join!(a.collect(), b.collect(), c.collect());
        assert_eq!(a, vec![2, 7, 1, 8]);
        assert_eq!(b, a);
        assert_eq!(c, a);
    }

    #[tokio::test]
    async fn dropped_branch_detaches_without_stalling_siblings() {
        let mut branches = Flow::from_iter(1..=100).duplicate(2);
        let survivor = branches.pop().unwrap();
        drop(branches.pop().unwrap());
        assert_eq!(survivor.collect().await.len(), 100);
    }

    #[tokio::test]
    async fn surviving_branch_outlives_multiple_detachments() {
        let mut branches = Flow::from_iter(1..=50).duplicate(3);
        let last = branches.pop().unwrap();
        let middle = branches.pop().unwrap();
        let first = branches.pop().unwrap();
        drop(first);
        drop(last);
        assert_eq!(middle.collect().await, (1..=50).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn tee_replays_both_halves() {
        let (a, b) = Flow::from_iter(1..=4).tee();
        let (a, b) = tokio::join!(a.collect(), b.collect());
        assert_eq!(a, vec![1, 2, 3, 4]);
        assert_eq!(b, a);
    }

    #[tokio::test]
    async fn zero_branches_drains_the_source() {
        let branches = Flow::from_iter(1..=10).duplicate(0);
        assert!(branches.is_empty());
    }
}

//! Pointwise combinators applying functions across aligned flows.
//!
//! The n-ary `operate` family consumes its inputs in lock-step and
//! performs no realignment of its own: callers are responsible for
//! `skip`/`shift`-aligning branches first so sample `i` of every input
//! refers to the same originating time index. Output ends with the
//! shortest input.

use crate::flow::{channel, Flow, LOCKSTEP_CAPACITY};

impl<T: Send + 'static> Flow<T> {
    /// Applies a unary function to every sample.
    pub fn map<U, F>(mut self, mut op: F) -> Flow<U>
    where
        U: Send + 'static,
        F: FnMut(T) -> U + Send + 'static,
    {
        let (tx, out) = channel(LOCKSTEP_CAPACITY);
        tokio::spawn(async move {
            while let Some(value) = self.recv().await {
                if tx.send(op(value)).await.is_err() {
                    return;
                }
            }
        });
        out
    }

    /// Threads an accumulator through the flow: each call receives the
    /// previously emitted output (`seed` for the first) and the current
    /// sample, and its result is both emitted and carried forward.
    /// Enables cumulative computations without external mutable state.
    pub fn map_with_previous<F>(mut self, seed: T, mut op: F) -> Flow<T>
    where
        T: Clone,
        F: FnMut(T, T) -> T + Send + 'static,
    {
        let (tx, out) = channel(LOCKSTEP_CAPACITY);
        tokio::spawn(async move {
            let mut previous = seed;
            while let Some(value) = self.recv().await {
                let next = op(previous.clone(), value);
                previous = next.clone();
                if tx.send(next).await.is_err() {
                    return;
                }
            }
        });
        out
    }
}

/// Zips two flows in lock-step and applies a binary function per pair.
pub fn operate<A, B, O, F>(mut a: Flow<A>, mut b: Flow<B>, mut op: F) -> Flow<O>
where
    A: Send + 'static,
    B: Send + 'static,
    O: Send + 'static,
    F: FnMut(A, B) -> O + Send + 'static,
{
    let (tx, out) = channel(LOCKSTEP_CAPACITY);
    tokio::spawn(async move {
        loop {
            let (Some(x), Some(y)) = (a.recv().await, b.recv().await) else {
                return;
            };
            if tx.send(op(x, y)).await.is_err() {
                return;
            }
        }
    });
    out
}

/// Zips three flows in lock-step and applies a ternary function per tuple.
pub fn operate3<A, B, C, O, F>(mut a: Flow<A>, mut b: Flow<B>, mut c: Flow<C>, mut op: F) -> Flow<O>
where
    A: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
    O: Send + 'static,
    F: FnMut(A, B, C) -> O + Send + 'static,
{
    let (tx, out) = channel(LOCKSTEP_CAPACITY);
    tokio::spawn(async move {
        loop {
            let (Some(x), Some(y), Some(z)) = (a.recv().await, b.recv().await, c.recv().await)
            else {
                return;
            };
            if tx.send(op(x, y, z)).await.is_err() {
                return;
            }
        }
    });
    out
}

/// Zips four flows in lock-step and applies a 4-ary function per tuple.
pub fn operate4<A, B, C, D, O, F>(
    mut a: Flow<A>,
    mut b: Flow<B>,
    mut c: Flow<C>,
    mut d: Flow<D>,
    mut op: F,
) -> Flow<O>
where
    A: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
    D: Send + 'static,
    O: Send + 'static,
    F: FnMut(A, B, C, D) -> O + Send + 'static,
{
    let (tx, out) = channel(LOCKSTEP_CAPACITY);
    tokio::spawn(async move {
        loop {
            let (Some(w), Some(x), Some(y), Some(z)) =
                (a.recv().await, b.recv().await, c.recv().await, d.recv().await)
            else {
                return;
            };
            if tx.send(op(w, x, y, z)).await.is_err() {
                return;
            }
        }
    });
    out
}

/// Zips five flows in lock-step and applies a 5-ary function per tuple.
pub fn operate5<A, B, C, D, E, O, F>(
    mut a: Flow<A>,
    mut b: Flow<B>,
    mut c: Flow<C>,
    mut d: Flow<D>,
    mut e: Flow<E>,
    mut op: F,
) -> Flow<O>
where
    A: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
    D: Send + 'static,
    E: Send + 'static,
    O: Send + 'static,
    F: FnMut(A, B, C, D, E) -> O + Send + 'static,
{
    let (tx, out) = channel(LOCKSTEP_CAPACITY);
    tokio::spawn(async move {
        loop {
            let (Some(v), Some(w), Some(x), Some(y), Some(z)) = (
                a.recv().await,
                b.recv().await,
                c.recv().await,
                d.recv().await,
                e.recv().await,
            ) else {
                return;
            };
            if tx.send(op(v, w, x, y, z)).await.is_err() {
                return;
            }
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn map_applies_per_sample() {
        let flow = Flow::from_iter(1..=4).map(|v| v * 10);
        assert_eq!(flow.collect().await, vec![10, 20, 30, 40]);
    }

    #[tokio::test]
    async fn map_with_previous_accumulates() {
        let flow = Flow::from_iter(vec![1, 2, 3, 4]).map_with_previous(0, |prev, v| prev + v);
        assert_eq!(flow.collect().await, vec![1, 3, 6, 10]);
    }

    #[tokio::test]
    async fn operate_zips_pairwise() {
        let a = Flow::from_iter(vec![1, 2, 3]);
        let b = Flow::from_iter(vec![10, 20, 30]);
        assert_eq!(operate(a, b, |x, y| x + y).collect().await, vec![11, 22, 33]);
    }

    #[tokio::test]
    async fn operate3_preserves_equal_lengths() {
        let a = Flow::from_iter(vec![1, 2, 3]);
        let b = Flow::from_iter(vec![4, 5, 6]);
        let c = Flow::from_iter(vec![7, 8, 9]);
        let out = operate3(a, b, c, |x, y, z| x + y + z).collect().await;
        assert_eq!(out, vec![12, 15, 18]);
    }

    #[tokio::test]
    async fn higher_arity_variants_zip_in_lock_step() {
        let out = operate4(
            Flow::from_iter(vec![1, 2]),
            Flow::from_iter(vec![10, 20]),
            Flow::from_iter(vec![100, 200]),
            Flow::from_iter(vec![1000, 2000]),
            |a, b, c, d| a + b + c + d,
        )
        .collect()
        .await;
        assert_eq!(out, vec![1111, 2222]);

        let out = operate5(
            Flow::from_iter(vec![1, 1]),
            Flow::from_iter(vec![2, 2]),
            Flow::from_iter(vec![3, 3]),
            Flow::from_iter(vec![4, 4]),
            Flow::from_iter(vec![5, 5]),
            |a, b, c, d, e| a * b * c * d * e,
        )
        .collect()
        .await;
        assert_eq!(out, vec![120, 120]);
    }

    #[tokio::test]
    async fn mismatched_lengths_end_with_the_shortest() {
        let a = Flow::from_iter(vec![1, 2, 3, 4, 5]);
        let b = Flow::from_iter(vec![1, 1]);
        assert_eq!(operate(a, b, |x, y| x * y).collect().await, vec![1, 2]);
    }
}

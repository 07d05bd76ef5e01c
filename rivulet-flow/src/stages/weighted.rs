//! Linearly weighted moving average over a ring window.

use std::fmt;

use rivulet_core::{Ring, Sample};

use crate::flow::{channel, Flow, LOCKSTEP_CAPACITY};
use crate::stage::Stage;
use crate::stages::WindowParams;

/// Weighted moving average with linearly rising weights toward the most
/// recent sample: weight `period` for the newest value down to weight one
/// for the oldest, normalized by `1 + 2 + … + period`. Idle period:
/// `period − 1`.
#[derive(Debug, Clone, Copy)]
pub struct Wma {
    period: usize,
}

impl Wma {
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

    /// Streams the weighted mean of the input window.
    pub fn compute<T: Sample>(&self, input: Flow<T>) -> Flow<T> {
        let period = self.period;
        let (tx, out) = channel(LOCKSTEP_CAPACITY);
        tokio::spawn(async move {
            let mut input = input;
            // Top weight and normalizer accumulated additively so the
            // sample type needs no usize conversion.
            let mut top_weight = T::zero();
            let mut denominator = T::zero();
            for _ in 0..period {
                top_weight = top_weight + T::one();
                denominator = denominator + top_weight;
            }

            let mut ring = Ring::new(period);
            while let Some(value) = input.recv().await {
                ring.put(value);
                if !ring.is_full() {
                    continue;
                }
                let mut weight = top_weight;
                let mut weighted_sum = T::zero();
                for sample in ring.iter() {
                    weighted_sum = weighted_sum + sample * weight;
                    weight = weight - T::one();
                }
                if tx.send(weighted_sum / denominator).await.is_err() {
                    return;
                }
            }
        });
        out
    }
}

impl Stage for Wma {
    fn idle_period(&self) -> usize {
        self.period - 1
    }
}

impl fmt::Display for Wma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WMA({})", self.period)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn dec(value: i64) -> Decimal {
        Decimal::from(value)
    }

    #[tokio::test]
    async fn weights_rise_toward_the_most_recent_sample() {
        let stage = Wma::with_period(4);
        let input = Flow::from_iter([2, 4, 6, 8, 10].map(dec).to_vec());
        let out = stage.compute(input).collect().await;
        // (8*4 + 6*3 + 4*2 + 2*1) / 10 and (10*4 + 8*3 + 6*2 + 4*1) / 10.
        assert_eq!(out, vec![dec(6), dec(8)]);
    }

    #[tokio::test]
    async fn period_one_passes_the_input_through() {
        let stage = Wma::with_period(1);
        let out = stage
            .compute(Flow::from_iter(vec![dec(3), dec(1), dec(4)]))
            .collect()
            .await;
        assert_eq!(out, vec![dec(3), dec(1), dec(4)]);
    }

    #[tokio::test]
    async fn nothing_emits_before_the_window_fills() {
        let stage = Wma::with_period(3);
        let out = stage
            .compute(Flow::from_iter(vec![dec(1), dec(2)]))
            .collect()
            .await;
        assert!(out.is_empty());
    }
}

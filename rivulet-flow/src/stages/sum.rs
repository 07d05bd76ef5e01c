//! Moving window sum and the simple moving average on top of it.

use std::fmt;

use rivulet_core::Sample;

use crate::arith::subtract;
use crate::flow::Flow;
use crate::stage::Stage;
use crate::stages::WindowParams;

/// Sum of the last `period` samples, maintained incrementally as the
/// cumulative sum of `entering − leaving`. Idle period: `period − 1`.
#[derive(Debug, Clone, Copy)]
pub struct MovingSum {
    period: usize,
}

impl MovingSum {
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

    /// Streams the running window sum of the input.
    pub fn compute<T: Sample>(&self, input: Flow<T>) -> Flow<T> {
        let period = self.period;
        let (entering, leaving) = input.tee();
        let leaving = leaving.buffered(period).shift(period, T::zero());
        subtract(entering, leaving)
            .map_with_previous(T::zero(), |previous, delta| previous + delta)
            .skip(period - 1)
    }
}

impl Stage for MovingSum {
    fn idle_period(&self) -> usize {
        self.period - 1
    }
}

impl fmt::Display for MovingSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MSUM({})", self.period)
    }
}

/// Simple moving average: the window sum divided by the period.
/// Idle period: `period − 1`.
#[derive(Debug, Clone, Copy)]
pub struct Sma {
    sum: MovingSum,
}

impl Sma {
    /// Builds the stage; an invalid period falls back to the default.
    pub fn new(params: WindowParams) -> Self {
        Self {
            sum: MovingSum::new(params),
        }
    }

    /// Convenience constructor from a bare period.
    pub fn with_period(period: usize) -> Self {
        Self::new(WindowParams { period })
    }

    /// The effective (sanitized) period.
    pub fn period(&self) -> usize {
        self.sum.period()
    }

    /// Streams the arithmetic mean of the input window.
    pub fn compute<T: Sample>(&self, input: Flow<T>) -> Flow<T> {
        // Accumulate the divisor additively so no usize conversion is
        // required of the sample type.
        let mut divisor = T::zero();
        for _ in 0..self.period() {
            divisor = divisor + T::one();
        }
        self.sum.compute(input).divide_by(divisor)
    }
}

impl Stage for Sma {
    fn idle_period(&self) -> usize {
        self.sum.idle_period()
    }
}

impl fmt::Display for Sma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SMA({})", self.period())
    }
}

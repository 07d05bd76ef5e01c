//! Arithmetic specializations of the pointwise combinators.

use num_traits::Signed;
use rivulet_core::Sample;

use crate::combine::operate;
use crate::flow::Flow;

/// Adds two aligned flows sample by sample.
pub fn add<T: Sample>(a: Flow<T>, b: Flow<T>) -> Flow<T> {
    operate(a, b, |x, y| x + y)
}

/// Subtracts the second flow from the first, sample by sample.
pub fn subtract<T: Sample>(a: Flow<T>, b: Flow<T>) -> Flow<T> {
    operate(a, b, |x, y| x - y)
}

/// Multiplies two aligned flows sample by sample.
pub fn multiply<T: Sample>(a: Flow<T>, b: Flow<T>) -> Flow<T> {
    operate(a, b, |x, y| x * y)
}

/// Divides the first flow by the second, sample by sample.
///
/// A zero divisor is not checked here: the result is whatever the sample
/// type's division produces (inf/NaN for floats). Callers needing clamped
/// output must post-process explicitly.
pub fn divide<T: Sample>(a: Flow<T>, b: Flow<T>) -> Flow<T> {
    operate(a, b, |x, y| x / y)
}

impl<T: Sample> Flow<T> {
    /// Multiplies every sample by a constant factor.
    pub fn multiply_by(self, factor: T) -> Flow<T> {
        self.map(move |v| v * factor)
    }

    /// Divides every sample by a constant divisor. Zero divisors follow
    /// the sample type's own division semantics, as with [`divide`].
    pub fn divide_by(self, divisor: T) -> Flow<T> {
        self.map(move |v| v / divisor)
    }

    /// Adds a constant to every sample.
    pub fn increment_by(self, addend: T) -> Flow<T> {
        self.map(move |v| v + addend)
    }

    /// Raises every sample to a non-negative integer power.
    pub fn pow(self, exponent: usize) -> Flow<T> {
        self.map(move |v| num_traits::pow(v, exponent))
    }

    /// Replaces every sample with its absolute value.
    pub fn abs(self) -> Flow<T>
    where
        T: Signed,
    {
        self.map(|v| v.abs())
    }

    /// Replaces every sample with its sign (-1, 0, or +1).
    pub fn sign(self) -> Flow<T>
    where
        T: Signed,
    {
        self.map(|v| v.signum())
    }
}

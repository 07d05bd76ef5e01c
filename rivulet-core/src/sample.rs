//! The numeric bound shared by every value that flows through the engine.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Rem, Sub};

use num_traits::{Num, One, Zero};

/// Marker trait for sample values.
///
/// A sample is any cheap-to-copy numeric type with full arithmetic and an
/// ordering: the primitive integers and floats qualify, and so does
/// `rust_decimal::Decimal`. Stages are generic over this trait so one
/// implementation serves every precision.
pub trait Sample: Num + Copy + PartialOrd + Send + Sync + Debug + 'static {}

impl<T> Sample for T where T: Num + Copy + PartialOrd + Send + Sync + Debug + 'static {}

/// Floating-point types with an IEEE 754 total order.
pub trait TotalOrder {
    /// Total ordering over every value, NaN and signed zeros included.
    fn total_order(&self, other: &Self) -> Ordering;
}

impl TotalOrder for f32 {
    fn total_order(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl TotalOrder for f64 {
    fn total_order(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// Totally ordered adapter for floating-point samples.
///
/// The order-statistics window keys a search tree on its samples and so
/// needs `Ord`, which `f32`/`f64` do not implement. `TotalOrd` wraps a
/// float, compares via `total_cmp`, and forwards arithmetic, so the
/// wrapper still satisfies [`Sample`]. Map a float flow into the adapter
/// before an extremum stage and back out after it:
///
/// ```ignore
/// let max = stage.compute(prices.map(TotalOrd)).map(TotalOrd::into_inner);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TotalOrd<T>(pub T);

impl<T> TotalOrd<T> {
    /// Unwraps the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: TotalOrder> PartialEq for TotalOrd<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_order(&other.0) == Ordering::Equal
    }
}

impl<T: TotalOrder> Eq for TotalOrd<T> {}

impl<T: TotalOrder> PartialOrd for TotalOrd<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: TotalOrder> Ord for TotalOrd<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_order(&other.0)
    }
}

impl<T: Add<Output = T>> Add for TotalOrd<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<T: Sub<Output = T>> Sub for TotalOrd<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl<T: Mul<Output = T>> Mul for TotalOrd<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl<T: Div<Output = T>> Div for TotalOrd<T> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }
}

impl<T: Rem<Output = T>> Rem for TotalOrd<T> {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        Self(self.0 % rhs.0)
    }
}

impl<T: Zero> Zero for TotalOrd<T> {
    fn zero() -> Self {
        Self(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<T: One> One for TotalOrd<T> {
    fn one() -> Self {
        Self(T::one())
    }
}

impl<T: Num + TotalOrder> Num for TotalOrd<T> {
    type FromStrRadixErr = T::FromStrRadixErr;

    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        T::from_str_radix(str, radix).map(TotalOrd)
    }
}

#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

/// The generic numeric bound for values flowing through the engine.
pub mod sample;
/// Windowed data structures backing sliding-window stages.
pub mod window;

pub use crate::sample::{Sample, TotalOrd, TotalOrder};
pub use crate::window::{OrderStatistics, Ring};

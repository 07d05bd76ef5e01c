//! Windowed data structures backing sliding-window stages.

pub mod order_statistics;
pub mod ring;

pub use order_statistics::OrderStatistics;
pub use ring::Ring;

#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

/// Alignment primitives: `skip`, `shift`, `buffered`, `head`.
pub mod align;
/// Arithmetic specializations of the pointwise combinators.
pub mod arith;
/// Pointwise combinators: `map`, `operate`, and friends.
pub mod combine;
/// Error type for the flow surface.
pub mod error;
/// Lock-step fan-out of one flow into independent replicas.
pub mod fanout;
/// The asynchronous value stream every stage consumes and produces.
pub mod flow;
/// The idle-period contract and automatic branch alignment.
pub mod stage;
/// Canonical windowed stages built on the substrate.
pub mod stages;

pub use crate::arith::{add, divide, multiply, subtract};
pub use crate::combine::{operate, operate3, operate4, operate5};
pub use crate::error::FlowError;
pub use crate::flow::{channel, Flow, FlowSender};
pub use crate::stage::{Aligned, Stage};
pub use rivulet_core::{Sample, TotalOrd};
pub use crate::stages::{MovingMax, MovingMin, MovingSum, Sma, WindowParams, Wma, DEFAULT_PERIOD};

//! Series module - one-dimensional labeled data
//!
//! A Series holds a sequence of [`Scalar`](crate::core::Scalar) values and a
//! parallel [`Index`](crate::core::Index) of labels. Arithmetic and
//! comparisons zip operands by position; [`Series::align`] groups by label.

pub mod arithmetic;
pub mod base;
pub mod functions;
pub mod operand;
pub mod serialize;
pub mod stats;
pub mod window;

// Re-exports
pub use base::Series;
pub use functions::{round10, CumulativeOp};
pub use operand::Operand;
pub use serialize::{SeriesAlignment, SeriesOrient};

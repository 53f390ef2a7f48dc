//! Reshaping across several objects
//!
//! [`concat`] stacks Series or DataFrames end to end (axis 0) or side by
//! side (axis 1, DataFrames only).

pub mod concat;

pub use concat::{concat, concat_frames, concat_series, Concatenated, ConcatOptions, NDObject};

//! Immutable labeled Series and DataFrame structures with pandas-like
//! semantics.
//!
//! Every operation returns a new value; the only in-place changes are
//! [`Series::set_index`], [`DataFrame::set_index`] and
//! [`DataFrame::set_columns`].

// Core module with fundamental data structures and traits
pub mod core;

pub mod config;
pub mod dataframe;
pub mod io;
pub mod pivot;
pub mod reshape;
pub mod series;
pub mod temporal;

// Re-export core types
pub use crate::core::dtype::DType;
pub use crate::core::error::{Error, Result};
pub use crate::core::generic::{Axis, NDFrame};
pub use crate::core::index::{Index, IndexTrait};
pub use crate::core::multi_index::{IndexNode, MultiIndex};
pub use crate::core::Scalar;

pub use crate::config::TabrsConfig;
pub use crate::dataframe::{
    merge_frames, ApplyExt, DataFrame, FrameOrient, JoinExt, JoinType, Positions, Record, Row,
};
pub use crate::pivot::Pivot;
pub use crate::reshape::{concat, Concatenated, ConcatOptions, NDObject};
pub use crate::series::{CumulativeOp, Operand, Series, SeriesAlignment, SeriesOrient};
pub use crate::temporal::to_datetime;

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

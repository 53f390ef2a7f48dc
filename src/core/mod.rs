// Core data structures and traits for tabrs
pub mod data_value;
pub mod dtype;
pub mod error;
pub mod generic;
pub mod index;
pub mod multi_index;

// Re-exports for convenience
pub use data_value::{ArithmeticOp, Scalar};
pub use dtype::{array_to_dtype, element_to_dtype, DType};
pub use error::{Error, Result};
pub use generic::{Axis, NDFrame};
pub use index::{Index, IndexTrait};
pub use multi_index::{IndexNode, MultiIndex};

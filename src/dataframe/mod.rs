// DataFrame implementations module
pub mod apply;
pub mod base;
pub mod join;
pub mod serialize;
pub mod transform;

// Re-exports for convenience
pub use apply::ApplyExt;
pub use base::{DataFrame, Positions, Record, Row};
pub use join::{merge_frames, JoinExt, JoinType};
pub use serialize::FrameOrient;

#![forbid(unsafe_code)]

pub mod order;
pub mod robust;

pub use order::{median, select_rank};
pub use robust::{robust_frame, RobustFrame, MIN_EXTENT};

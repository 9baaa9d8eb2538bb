#![forbid(unsafe_code)]

pub mod xyz;

pub use xyz::{read_xyz, write_xyz};

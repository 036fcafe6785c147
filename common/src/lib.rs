//! Shared grid containers and process setup for the smogscan workspace.

pub mod bit_buffer2;
pub mod buffer2;
pub mod log_setup;

pub use bit_buffer2::BitBuffer2;
pub use buffer2::Buffer2;

// librc522/src/reader/mod.rs

/// Reader construction.
pub mod builder;
/// Tunable timings.
pub mod config;
/// Type-state reader handle and register-level operations.
pub mod handle;
/// Abstraction over anything that exchanges frames with a selected tag.
pub mod pcd;
/// Bit- and byte-oriented exchanges with tags.
pub mod transceive;

pub use builder::ReaderBuilder;
pub use config::ReaderConfig;
pub use handle::{CrcState, Initialized, Reader, Uninitialized};
pub use pcd::Pcd;
pub use transceive::BitFrame;

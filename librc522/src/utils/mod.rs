//! Small helpers shared by the reader, the transports and the tests.

pub mod delay;
pub mod hex;

pub use self::delay::*;
pub use self::hex::*;

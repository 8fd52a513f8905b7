//! Foundation module
//!
//! - [`math`]: vector and rotation aliases plus small scalar helpers
//! - [`logging`]: logger installation for binaries and tests

pub mod logging;
pub mod math;

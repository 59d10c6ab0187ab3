#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// binary morphology module.
pub mod morphology;

/// module containing parallization utilities.
pub mod parallel;

/// operations to threshold images.
pub mod threshold;
